//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the store ports backed by PostgreSQL through
//! `diesel-async` with `bb8` connection pooling.
//!
//! Row structs (`models.rs`) and table definitions (`schema.rs`) stay private
//! to this module. Every database failure is translated into a
//! [`StoreError`](crate::domain::ports::StoreError) before it leaves an
//! adapter.
//!
//! # Example
//!
//! ```no_run
//! use togohub::outbound::persistence::{DbPool, DieselItemRepository, PoolConfig};
//!
//! # async fn build() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/togohub")).await?;
//! let items = DieselItemRepository::new(pool);
//! # let _ = items;
//! # Ok(())
//! # }
//! ```

mod diesel_error_mapping;
mod diesel_item_repository;
mod diesel_order_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_item_repository::DieselItemRepository;
pub use diesel_order_repository::DieselOrderRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
