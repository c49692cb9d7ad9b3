//! Indian pincode value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of characters in a complete pincode.
pub const POSTAL_CODE_LEN: usize = 6;

/// A pincode exactly as the customer typed it.
///
/// The raw value is kept so partially typed codes can be stored while the
/// customer is still editing. Use [`is_complete`](Self::is_complete) to decide
/// whether a delivery check should run and
/// [`is_well_formed`](Self::is_well_formed) to decide serviceability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostalCode(String);

impl PostalCode {
    /// Wrap a raw pincode.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the raw value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters entered so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Returns true if nothing has been entered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Exactly six characters, regardless of what they are.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.len() == POSTAL_CODE_LEN
    }

    /// Six characters, all ASCII digits.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.is_complete() && self.0.chars().all(|c| c.is_ascii_digit())
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PostalCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PostalCode {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
