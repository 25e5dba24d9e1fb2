//! Port for storing customer accounts.

use async_trait::async_trait;

use crate::domain::{NewUser, User};

use super::StoreError;

/// Persistence port for [`User`] records.
///
/// Adapters must report an already-registered email as
/// [`StoreError::Duplicate`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user and return it with its generated identifier.
    async fn insert(&self, user: &NewUser) -> Result<User, StoreError>;
}
