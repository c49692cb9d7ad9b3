//! Custom plate text value object.

use serde::{Serialize, Serializer};
use std::fmt;

/// Sanitized text printed on the plate.
///
/// Only [`TextSanitizer`](crate::domain::customization::TextSanitizer) can
/// produce a non-empty value, so every instance holds upper-case ASCII
/// letters, digits and whitespace within the configured length budget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CustomText(String);

impl CustomText {
    /// The empty text a session starts with.
    #[must_use]
    pub const fn empty() -> Self {
        Self(String::new())
    }

    /// Wraps an already-sanitized value.
    pub(crate) fn from_sanitized(value: String) -> Self {
        Self(value)
    }

    /// Get the text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (not bytes).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Returns true if there is no text at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The text without leading or trailing whitespace.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self(self.0.trim().to_string())
    }
}

impl fmt::Display for CustomText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CustomText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for CustomText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
