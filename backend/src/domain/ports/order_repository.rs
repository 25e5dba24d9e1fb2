//! Port for storing orders and their lines.
//!
//! Writing an order takes two calls: [`OrderRepository::insert_order`] creates
//! the header row and [`OrderRepository::insert_lines`] attaches every line in
//! a single statement. The two calls are not atomic together, so a failed
//! second call leaves an order without lines behind.

use async_trait::async_trait;

use crate::domain::{NewOrderLine, Order, OrderId, UserId};

use super::StoreError;

/// Persistence port for [`Order`] aggregates.
///
/// Every read returns fully materialised orders: each line carries its item.
/// Orders are ascending by id and the lines of one order ascending by item id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Create an order header owned by `user_id`.
    ///
    /// Returns [`StoreError::MissingReference`] when the user does not exist.
    async fn insert_order(&self, user_id: UserId) -> Result<OrderId, StoreError>;

    /// Attach lines to an existing order. Either every line is stored or none.
    ///
    /// Returns [`StoreError::MissingReference`] when an item does not exist
    /// and [`StoreError::Duplicate`] when an item is already on the order.
    async fn insert_lines(
        &self,
        order_id: OrderId,
        lines: &[NewOrderLine],
    ) -> Result<(), StoreError>;

    /// Every stored order.
    async fn list_all(&self) -> Result<Vec<Order>, StoreError>;

    /// Orders owned by `user_id`; empty when the user has none or is unknown.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Order>, StoreError>;

    /// A single order, or `None` when the id is unknown.
    async fn find_by_id(&self, order_id: OrderId) -> Result<Option<Order>, StoreError>;
}
