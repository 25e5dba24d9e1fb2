//! Port for storing menu items.

use async_trait::async_trait;

use crate::domain::{Item, NewItem};

use super::StoreError;

/// Persistence port for menu [`Item`] records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Store a new item and return it with its generated identifier.
    async fn insert(&self, item: &NewItem) -> Result<Item, StoreError>;

    /// Every stored item, ascending by id.
    async fn list_all(&self) -> Result<Vec<Item>, StoreError>;
}
