//! Ordering domain service.
//!
//! Implements the [`OrderingQuery`] and [`OrderingCommand`] driving ports on
//! top of the three store ports, translating [`StoreError`] values into
//! domain [`Error`] codes.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::warn;

use crate::domain::ports::{
    ItemRepository, OrderRepository, OrderingCommand, OrderingQuery, StoreError, UserRepository,
};
use crate::domain::{Error, Item, ItemId, NewItem, NewOrder, NewUser, Order, OrderId, UserId};

/// Ordering service implementing the driving ports.
#[derive(Clone)]
pub struct OrderingService<U, I, O> {
    users: Arc<U>,
    items: Arc<I>,
    orders: Arc<O>,
}

impl<U, I, O> OrderingService<U, I, O> {
    /// Create a new service with the given repositories.
    pub fn new(users: Arc<U>, items: Arc<I>, orders: Arc<O>) -> Self {
        Self {
            users,
            items,
            orders,
        }
    }
}

impl<U, I, O> OrderingService<U, I, O>
where
    U: UserRepository,
    I: ItemRepository,
    O: OrderRepository,
{
    /// Fallback mapping for failures that are not integrity violations.
    fn map_store_error(error: StoreError) -> Error {
        match error {
            StoreError::Connection { message } => {
                Error::service_unavailable(format!("store unavailable: {message}"))
            }
            StoreError::Query { message } => Error::internal(format!("store error: {message}")),
            StoreError::Duplicate { message } => {
                Error::conflict(format!("record already exists: {message}"))
            }
            StoreError::MissingReference { message } => {
                Error::invalid_reference(format!("referenced record does not exist: {message}"))
            }
        }
    }

    fn map_user_insert_error(error: StoreError) -> Error {
        match error {
            StoreError::Duplicate { .. } => Error::conflict("email is already registered")
                .with_details(json!({ "field": "email", "code": "duplicate_email" })),
            other => Self::map_store_error(other),
        }
    }

    fn map_order_insert_error(user_id: UserId, error: StoreError) -> Error {
        match error {
            StoreError::MissingReference { .. } => {
                Error::invalid_reference(format!("user {user_id} does not exist"))
                    .with_details(json!({ "field": "user_id", "code": "unknown_user" }))
            }
            other => Self::map_store_error(other),
        }
    }

    fn map_lines_insert_error(order_id: OrderId, error: StoreError) -> Error {
        match error {
            StoreError::MissingReference { .. } => {
                Error::invalid_reference("order references an item that does not exist")
                    .with_details(json!({
                        "field": "order_items",
                        "code": "unknown_item",
                        "orderId": order_id,
                    }))
            }
            other => Self::map_store_error(other).with_details(json!({ "orderId": order_id })),
        }
    }
}

#[async_trait]
impl<U, I, O> OrderingQuery for OrderingService<U, I, O>
where
    U: UserRepository,
    I: ItemRepository,
    O: OrderRepository,
{
    async fn list_orders(&self) -> Result<Vec<Order>, Error> {
        self.orders.list_all().await.map_err(Self::map_store_error)
    }

    async fn list_orders_for_user(&self, user_id: UserId) -> Result<Vec<Order>, Error> {
        self.orders
            .list_by_user(user_id)
            .await
            .map_err(Self::map_store_error)
    }

    async fn fetch_order(&self, order_id: OrderId) -> Result<Order, Error> {
        self.orders
            .find_by_id(order_id)
            .await
            .map_err(Self::map_store_error)?
            .ok_or_else(|| Error::not_found(format!("order {order_id} not found")))
    }

    async fn list_items(&self) -> Result<Vec<Item>, Error> {
        self.items.list_all().await.map_err(Self::map_store_error)
    }
}

#[async_trait]
impl<U, I, O> OrderingCommand for OrderingService<U, I, O>
where
    U: UserRepository,
    I: ItemRepository,
    O: OrderRepository,
{
    async fn create_user(&self, user: NewUser) -> Result<UserId, Error> {
        let stored = self
            .users
            .insert(&user)
            .await
            .map_err(Self::map_user_insert_error)?;
        Ok(stored.id())
    }

    async fn create_item(&self, item: NewItem) -> Result<ItemId, Error> {
        let stored = self
            .items
            .insert(&item)
            .await
            .map_err(Self::map_store_error)?;
        Ok(stored.id())
    }

    async fn place_order(&self, order: NewOrder) -> Result<OrderId, Error> {
        let user_id = order.user_id();
        let order_id = self
            .orders
            .insert_order(user_id)
            .await
            .map_err(|err| Self::map_order_insert_error(user_id, err))?;

        if let Err(err) = self.orders.insert_lines(order_id, order.lines()).await {
            warn!(
                order_id = order_id.get(),
                user_id = user_id.get(),
                error = %err,
                "order lines rejected after order was stored; order left without lines"
            );
            return Err(Self::map_lines_insert_error(order_id, err));
        }

        Ok(order_id)
    }
}
