//! Strongly-typed identifiers for domain entities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix carried by every storefront order ID.
const ORDER_ID_PREFIX: &str = "NP";

/// Unique, opaque identifier for a placed order.
///
/// Generated IDs are a UUID v7 rendered in upper-case hex behind the `NP`
/// prefix: the leading 48 bits are the millisecond timestamp and the rest is
/// random, so IDs sort by creation time and do not collide under burst load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Create an identifier from an existing string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generate a new unique order identifier.
    #[must_use]
    pub fn generate() -> Self {
        let uuid = uuid::Uuid::now_v7().simple().to_string().to_uppercase();
        Self(format!("{ORDER_ID_PREFIX}{uuid}"))
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identifier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OrderId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
