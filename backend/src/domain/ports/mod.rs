//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod item_repository;
mod order_repository;
mod ordering_command;
mod ordering_query;
mod store_error;
mod user_repository;

#[cfg(test)]
pub use item_repository::MockItemRepository;
pub use item_repository::ItemRepository;
#[cfg(test)]
pub use order_repository::MockOrderRepository;
pub use order_repository::OrderRepository;
#[cfg(test)]
pub use ordering_command::MockOrderingCommand;
pub use ordering_command::{FixtureOrderingCommand, OrderingCommand};
#[cfg(test)]
pub use ordering_query::MockOrderingQuery;
pub use ordering_query::{FixtureOrderingQuery, OrderingQuery};
pub use store_error::StoreError;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::UserRepository;
