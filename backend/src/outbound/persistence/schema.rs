//! Diesel table definitions for the ordering tables.
//!
//! Kept in step with `backend/migrations` by hand.

diesel::table! {
    users (id) {
        id -> Int4,
        name -> Text,
        email -> Text,
    }
}

diesel::table! {
    items (id) {
        id -> Int4,
        name -> Text,
    }
}

diesel::table! {
    orders (id) {
        id -> Int4,
        user_id -> Int4,
    }
}

diesel::table! {
    /// Association between an order and an item; one row per item per order.
    order_items (order_id, item_id) {
        order_id -> Int4,
        item_id -> Int4,
        item_count -> Int4,
    }
}

diesel::joinable!(orders -> users (user_id));
diesel::joinable!(order_items -> orders (order_id));
diesel::joinable!(order_items -> items (item_id));

diesel::allow_tables_to_appear_in_same_query!(users, items, orders, order_items);
