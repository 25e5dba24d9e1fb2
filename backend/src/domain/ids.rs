//! Store-generated record identifiers.
//!
//! Every entity is keyed by an integer the relational store assigns on
//! insert. Each entity gets its own newtype so a user id can never be passed
//! where an item id is expected.

use serde::{Deserialize, Serialize};

macro_rules! define_record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a raw store identifier.
            #[must_use]
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            /// Raw identifier as stored.
            #[must_use]
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_record_id!(
    /// Identifier of a [`crate::domain::User`].
    UserId
);
define_record_id!(
    /// Identifier of a menu [`crate::domain::Item`].
    ItemId
);
define_record_id!(
    /// Identifier of an [`crate::domain::Order`].
    OrderId
);
