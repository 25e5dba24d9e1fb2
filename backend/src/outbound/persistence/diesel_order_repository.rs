//! PostgreSQL-backed `OrderRepository` implementation using Diesel ORM.
//!
//! Orders are read in two queries: the headers first, then every line of
//! those headers joined with its item. Lines are grouped back onto their
//! header in memory.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::domain::ports::{OrderRepository, StoreError};
use crate::domain::{Item, NewOrderLine, Order, OrderId, OrderLine, UserId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ItemRow, NewOrderItemRow, NewOrderRow, OrderItemRow, OrderRow};
use super::pool::DbPool;
use super::schema::{items, order_items, orders};

/// Diesel-backed implementation of the `OrderRepository` port.
#[derive(Clone)]
pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Load the lines of `headers` and assemble full orders in header order.
async fn attach_lines(
    conn: &mut AsyncPgConnection,
    headers: Vec<OrderRow>,
) -> Result<Vec<Order>, StoreError> {
    if headers.is_empty() {
        return Ok(Vec::new());
    }

    let order_ids: Vec<i32> = headers.iter().map(|header| header.id).collect();
    let lines: Vec<(OrderItemRow, ItemRow)> = order_items::table
        .inner_join(items::table)
        .filter(order_items::order_id.eq_any(order_ids))
        .order((order_items::order_id.asc(), order_items::item_id.asc()))
        .select((OrderItemRow::as_select(), ItemRow::as_select()))
        .load(conn)
        .await
        .map_err(map_diesel_error)?;

    let mut grouped: HashMap<i32, Vec<OrderLine>> = HashMap::with_capacity(headers.len());
    for (line, item) in lines {
        grouped
            .entry(line.order_id)
            .or_default()
            .push(OrderLine::new(Item::from(item), line.item_count));
    }

    Ok(headers
        .into_iter()
        .map(|header| {
            let lines = grouped.remove(&header.id).unwrap_or_default();
            Order::new(OrderId::new(header.id), UserId::new(header.user_id), lines)
        })
        .collect())
}

#[async_trait]
impl OrderRepository for DieselOrderRepository {
    async fn insert_order(&self, user_id: UserId) -> Result<OrderId, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let id: i32 = diesel::insert_into(orders::table)
            .values(&NewOrderRow {
                user_id: user_id.get(),
            })
            .returning(orders::id)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(OrderId::new(id))
    }

    async fn insert_lines(
        &self,
        order_id: OrderId,
        lines: &[NewOrderLine],
    ) -> Result<(), StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<NewOrderItemRow> = lines
            .iter()
            .map(|line| NewOrderItemRow {
                order_id: order_id.get(),
                item_id: line.item_id().get(),
                item_count: line.item_count(),
            })
            .collect();

        diesel::insert_into(order_items::table)
            .values(&rows)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Order>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let headers: Vec<OrderRow> = orders::table
            .order(orders::id.asc())
            .select(OrderRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        attach_lines(&mut conn, headers).await
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Order>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let headers: Vec<OrderRow> = orders::table
            .filter(orders::user_id.eq(user_id.get()))
            .order(orders::id.asc())
            .select(OrderRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        attach_lines(&mut conn, headers).await
    }

    async fn find_by_id(&self, order_id: OrderId) -> Result<Option<Order>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let header: Option<OrderRow> = orders::table
            .find(order_id.get())
            .select(OrderRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        let Some(header) = header else {
            return Ok(None);
        };
        let mut assembled = attach_lines(&mut conn, vec![header]).await?;
        Ok(assembled.pop())
    }
}
