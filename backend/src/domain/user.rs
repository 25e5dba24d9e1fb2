//! Customer accounts.

use super::UserId;

/// Validation errors returned by [`NewUser::try_from_parts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("email must not be empty")]
    EmptyEmail,
}

/// A stored customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
}

impl User {
    /// Assemble a user from stored columns.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Store-generated identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Customer name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unique contact email.
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Draft of a user that has not been stored yet.
///
/// Only presence is checked: name and email must contain something other
/// than whitespace. Email uniqueness is left to the store.
///
/// # Examples
/// ```
/// use togohub::domain::{NewUser, UserValidationError};
///
/// let draft = NewUser::try_from_parts("Ada", "ada@example.com").expect("valid draft");
/// assert_eq!(draft.name(), "Ada");
/// assert_eq!(
///     NewUser::try_from_parts("Ada", " "),
///     Err(UserValidationError::EmptyEmail)
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    /// Validate raw request values.
    pub fn try_from_parts(name: &str, email: &str) -> Result<Self, UserValidationError> {
        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        if email.trim().is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
        })
    }

    /// Requested name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Requested email.
    pub fn email(&self) -> &str {
        &self.email
    }
}
