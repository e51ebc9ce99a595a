//! Type-safe ID wrappers for Panotour.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Macro to generate ID newtypes with common functionality.
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new random ID.
            pub fn new() -> Self {
                Self(format!("{}-{}", $prefix, Uuid::new_v4()))
            }

            /// Creates an ID from an existing string (for deserialization/testing).
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Returns the inner string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
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

define_id!(TourId, "tour");
define_id!(ImageId, "img");
define_id!(HotspotId, "hot");
define_id!(UserId, "user");
define_id!(ShareToken, "share");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_id_prefix() {
        let id = TourId::new();
        assert!(id.as_str().starts_with("tour-"));
    }

    #[test]
    fn test_image_id_prefix() {
        let id = ImageId::new();
        assert!(id.as_str().starts_with("img-"));
    }

    #[test]
    fn test_share_tokens_are_unique() {
        assert_ne!(ShareToken::new(), ShareToken::new());
    }

    #[test]
    fn test_id_from_string() {
        let id = TourId::from_string("tour-custom-123");
        assert_eq!(id.as_str(), "tour-custom-123");
    }

    #[test]
    fn test_id_serialization() {
        let id = TourId::from_string("tour-test");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"tour-test\"");

        let parsed: TourId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_id_display() {
        let id = HotspotId::from_string("hot-123");
        assert_eq!(format!("{}", id), "hot-123");
    }
}
