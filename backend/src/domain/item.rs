//! Menu items.

use super::ItemId;

/// Validation errors returned by [`NewItem::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ItemValidationError {
    #[error("name must not be empty")]
    EmptyName,
}

/// A dish on the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    name: String,
}

impl Item {
    /// Assemble an item from stored columns.
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Store-generated identifier.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Draft of a menu item that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    name: String,
}

impl NewItem {
    /// Validate the requested name.
    pub fn try_new(name: &str) -> Result<Self, ItemValidationError> {
        if name.trim().is_empty() {
            return Err(ItemValidationError::EmptyName);
        }
        Ok(Self {
            name: name.to_owned(),
        })
    }

    /// Requested name.
    pub fn name(&self) -> &str {
        &self.name
    }
}
