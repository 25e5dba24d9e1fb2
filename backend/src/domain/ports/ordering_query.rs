//! Driving port for reading orders and the menu.
//!
//! Inbound adapters use this port to fetch fully materialised orders and the
//! item list without importing outbound persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, Item, ItemId, Order, OrderId, OrderLine, UserId};

/// Domain use-case port for read-only ordering operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderingQuery: Send + Sync {
    /// Every order with its lines, ascending by id.
    async fn list_orders(&self) -> Result<Vec<Order>, Error>;

    /// Orders placed by `user_id`. An unknown user yields an empty list.
    async fn list_orders_for_user(&self, user_id: UserId) -> Result<Vec<Order>, Error>;

    /// One order, or a `not_found` error.
    async fn fetch_order(&self, order_id: OrderId) -> Result<Order, Error>;

    /// The whole menu, ascending by id.
    async fn list_items(&self) -> Result<Vec<Item>, Error>;
}

/// Fixture query serving one order for user 1 with a single pizza line.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureOrderingQuery;

impl FixtureOrderingQuery {
    fn pizza() -> Item {
        Item::new(ItemId::new(1), "Pizza")
    }

    fn order() -> Order {
        Order::new(
            OrderId::new(1),
            UserId::new(1),
            vec![OrderLine::new(Self::pizza(), 2)],
        )
    }
}

#[async_trait]
impl OrderingQuery for FixtureOrderingQuery {
    async fn list_orders(&self) -> Result<Vec<Order>, Error> {
        Ok(vec![Self::order()])
    }

    async fn list_orders_for_user(&self, user_id: UserId) -> Result<Vec<Order>, Error> {
        Ok(vec![Self::order()]
            .into_iter()
            .filter(|order| order.user_id() == user_id)
            .collect())
    }

    async fn fetch_order(&self, order_id: OrderId) -> Result<Order, Error> {
        let order = Self::order();
        if order.id() == order_id {
            Ok(order)
        } else {
            Err(Error::not_found(format!("order {order_id} not found")))
        }
    }

    async fn list_items(&self) -> Result<Vec<Item>, Error> {
        Ok(vec![Self::pizza()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;

    #[tokio::test]
    async fn fixture_filters_orders_by_owner() {
        let query = FixtureOrderingQuery;
        let own = query
            .list_orders_for_user(UserId::new(1))
            .await
            .expect("orders listed");
        let other = query
            .list_orders_for_user(UserId::new(2))
            .await
            .expect("orders listed");
        assert_eq!(own.len(), 1);
        assert!(other.is_empty());
    }

    #[tokio::test]
    async fn fixture_reports_unknown_orders() {
        let error = FixtureOrderingQuery
            .fetch_order(OrderId::new(99))
            .await
            .expect_err("unknown order");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }
}
