//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer; repositories convert them
//! into domain values before returning.

use diesel::prelude::*;

use crate::domain::{Item, ItemId, User, UserId};

use super::schema::{items, order_items, orders, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(UserId::new(row.id), row.name, row.email)
    }
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

// ---------------------------------------------------------------------------
// Menu item models
// ---------------------------------------------------------------------------

/// Row struct for reading from the items table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ItemRow {
    pub id: i32,
    pub name: String,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item::new(ItemId::new(row.id), row.name)
    }
}

/// Insertable struct for creating new menu items.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = items)]
pub(crate) struct NewItemRow<'a> {
    pub name: &'a str,
}

// ---------------------------------------------------------------------------
// Order models
// ---------------------------------------------------------------------------

/// Row struct for reading order headers.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct OrderRow {
    pub id: i32,
    pub user_id: i32,
}

/// Insertable struct for creating order headers.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = orders)]
pub(crate) struct NewOrderRow {
    pub user_id: i32,
}

/// Row struct for reading order lines.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = order_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct OrderItemRow {
    pub order_id: i32,
    pub item_count: i32,
}

/// Insertable struct for order lines.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = order_items)]
pub(crate) struct NewOrderItemRow {
    pub order_id: i32,
    pub item_id: i32,
    pub item_count: i32,
}
