//! Outbound adapters implementing the store ports.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//! - **memory**: a mutex-guarded in-process store for local runs and tests
//!
//! Adapters only translate between domain types and their storage
//! representation. They contain no business logic.

pub mod memory;
pub mod persistence;
