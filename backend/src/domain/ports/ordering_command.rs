//! Driving port for creating users, menu items and orders.
//!
//! Drafts arrive already validated for presence; the implementation is
//! responsible for mapping store failures onto domain error codes.

use async_trait::async_trait;

use crate::domain::{Error, ItemId, NewItem, NewOrder, NewUser, OrderId, UserId};

/// Domain use-case port for write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderingCommand: Send + Sync {
    /// Register a customer. A taken email yields a `conflict` error.
    async fn create_user(&self, user: NewUser) -> Result<UserId, Error>;

    /// Add a dish to the menu.
    async fn create_item(&self, item: NewItem) -> Result<ItemId, Error>;

    /// Store an order and then its lines.
    ///
    /// Unknown users or items yield an `invalid_reference` error. When the
    /// lines are rejected after the order header was written, the error
    /// carries the orphaned order id in `details.orderId`.
    async fn place_order(&self, order: NewOrder) -> Result<OrderId, Error>;
}

/// Fixture command that acknowledges every write with identifier 1.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureOrderingCommand;

#[async_trait]
impl OrderingCommand for FixtureOrderingCommand {
    async fn create_user(&self, _user: NewUser) -> Result<UserId, Error> {
        Ok(UserId::new(1))
    }

    async fn create_item(&self, _item: NewItem) -> Result<ItemId, Error> {
        Ok(ItemId::new(1))
    }

    async fn place_order(&self, _order: NewOrder) -> Result<OrderId, Error> {
        Ok(OrderId::new(1))
    }
}
