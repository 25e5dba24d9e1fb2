//! PostgreSQL-backed `ItemRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ItemRepository, StoreError};
use crate::domain::{Item, NewItem};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ItemRow, NewItemRow};
use super::pool::DbPool;
use super::schema::items;

/// Diesel-backed implementation of the `ItemRepository` port.
#[derive(Clone)]
pub struct DieselItemRepository {
    pool: DbPool,
}

impl DieselItemRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for DieselItemRepository {
    async fn insert(&self, item: &NewItem) -> Result<Item, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let stored: ItemRow = diesel::insert_into(items::table)
            .values(&NewItemRow { name: item.name() })
            .returning(ItemRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(stored.into())
    }

    async fn list_all(&self) -> Result<Vec<Item>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ItemRow> = items::table
            .order(items::id.asc())
            .select(ItemRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Item::from).collect())
    }
}
