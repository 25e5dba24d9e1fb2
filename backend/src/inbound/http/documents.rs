//! JSON documents returned by the ordering endpoints.
//!
//! Each stored shape has exactly one document type and one `From` conversion.
//! An [`OrderDocument`] nests its lines as [`OrderItemDocument`] values, each
//! of which nests the full [`ItemDocument`]. The owning user is referenced by
//! id only. Keys are snake_case.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Item, ItemId, Order, OrderId, OrderLine, UserId};

/// A menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ItemDocument {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Pizza")]
    pub name: String,
}

impl From<&Item> for ItemDocument {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id().get(),
            name: item.name().to_owned(),
        }
    }
}

/// One line of an order: the item and how many were ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct OrderItemDocument {
    pub item: ItemDocument,
    #[schema(example = 3)]
    pub item_count: i32,
}

impl From<&OrderLine> for OrderItemDocument {
    fn from(line: &OrderLine) -> Self {
        Self {
            item: ItemDocument::from(line.item()),
            item_count: line.item_count(),
        }
    }
}

/// An order with its lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct OrderDocument {
    #[schema(example = 7)]
    pub id: i32,
    #[schema(example = 1)]
    pub user_id: i32,
    pub items: Vec<OrderItemDocument>,
}

impl From<&Order> for OrderDocument {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id().get(),
            user_id: order.user_id().get(),
            items: order.lines().iter().map(OrderItemDocument::from).collect(),
        }
    }
}

/// Acknowledgement for `POST /user/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserCreatedResponse {
    #[schema(value_type = String, example = "User Created")]
    pub message: &'static str,
    #[schema(example = 1)]
    pub user_id: i32,
}

impl From<UserId> for UserCreatedResponse {
    fn from(id: UserId) -> Self {
        Self {
            message: "User Created",
            user_id: id.get(),
        }
    }
}

/// Acknowledgement for `POST /item/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ItemCreatedResponse {
    #[schema(value_type = String, example = "Item Created")]
    pub message: &'static str,
    #[schema(example = 1)]
    pub item_id: i32,
}

impl From<ItemId> for ItemCreatedResponse {
    fn from(id: ItemId) -> Self {
        Self {
            message: "Item Created",
            item_id: id.get(),
        }
    }
}

/// Acknowledgement for `POST /order/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct OrderCreatedResponse {
    #[schema(value_type = String, example = "Order Created")]
    pub message: &'static str,
    #[schema(example = 7)]
    pub order_id: i32,
}

impl From<OrderId> for OrderCreatedResponse {
    fn from(id: OrderId) -> Self {
        Self {
            message: "Order Created",
            order_id: id.get(),
        }
    }
}
