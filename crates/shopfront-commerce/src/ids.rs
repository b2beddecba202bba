//! Newtype IDs for type-safe identifiers.
//!
//! Keeps a size identity from being passed where a product id is expected,
//! and makes "compare by identity, not by label" explicit at the type level.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifier of a product, e.g. `tee-001`.
    ProductId
);
define_id!(
    /// Identity of a size variant. Unique within a product's size catalog.
    SizeId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("tee-001");
        assert_eq!(id.as_str(), "tee-001");
    }

    #[test]
    fn test_id_from_string() {
        let id: SizeId = "size-m".into();
        assert_eq!(id.as_str(), "size-m");
        assert_eq!(id.to_string(), "size-m");
    }

    #[test]
    fn test_id_serializes_transparently() {
        let id = ProductId::new("hat-002");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"hat-002\"");
        let back: ProductId = serde_json::from_str("\"hat-002\"").unwrap();
        assert_eq!(back, id);
    }
}
