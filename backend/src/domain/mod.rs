//! Domain primitives, aggregates and use-case services.
//!
//! Purpose: Define strongly typed entities for customers, menu items and
//! orders, the ports that adapters implement, and the ordering service that
//! drives them. Types are immutable once built; drafts (`New*`) validate
//! request input before it reaches a store.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport agnostic failure payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - User, Item, Order, OrderLine: stored records.
//! - NewUser, NewItem, NewOrder, NewOrderLine: validated drafts.
//! - OrderingService: implementation of the driving ports.

pub mod error;
pub mod ids;
pub mod item;
pub mod order;
pub mod ordering_service;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::ids::{ItemId, OrderId, UserId};
pub use self::item::{Item, ItemValidationError, NewItem};
pub use self::order::{NewOrder, NewOrderLine, Order, OrderLine, OrderValidationError};
pub use self::ordering_service::OrderingService;
pub use self::trace_id::TraceId;
pub use self::user::{NewUser, User, UserValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use togohub::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("order 3 not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
