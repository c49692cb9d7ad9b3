//! Text Sanitizer Service
//!
//! Normalizes raw customization input on every edit.

use crate::domain::customization::value_objects::CustomText;
use crate::domain::shared::{DomainError, ValidationError};

/// Default minimum length (after trimming) to proceed to checkout.
pub const DEFAULT_MIN_LEN: usize = 2;

/// Default maximum number of characters that fit on a plate.
pub const DEFAULT_MAX_LEN: usize = 12;

/// Sanitizer for custom plate text.
///
/// Each edit is filtered down to ASCII letters, digits and whitespace and
/// upper-cased. An edit whose filtered result is longer than `max_len` is
/// rejected as a whole: the previous value is kept, nothing is truncated.
///
/// # Examples
///
/// ```
/// use order_intake::domain::customization::{CustomText, TextSanitizer};
///
/// let sanitizer = TextSanitizer::default_limits();
/// let text = sanitizer.sanitize("John!!", &CustomText::empty());
/// assert_eq!(text.as_str(), "JOHN");
///
/// // Too long: previous value wins
/// let kept = sanitizer.sanitize("JOHN1234567890", &text);
/// assert_eq!(kept, text);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSanitizer {
    min_len: usize,
    max_len: usize,
}

impl TextSanitizer {
    /// Creates a sanitizer with explicit bounds.
    ///
    /// # Errors
    ///
    /// Returns error if `max_len` is 0 or `min_len` exceeds `max_len`.
    pub fn new(min_len: usize, max_len: usize) -> Result<Self, DomainError> {
        if max_len == 0 {
            return Err(DomainError::InvalidValue {
                field: "max_len".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if min_len > max_len {
            return Err(DomainError::InvalidValue {
                field: "min_len".to_string(),
                message: format!("must not exceed max_len ({max_len})"),
            });
        }
        Ok(Self { min_len, max_len })
    }

    /// Creates a sanitizer with the storefront defaults (2..=12).
    #[must_use]
    pub const fn default_limits() -> Self {
        Self {
            min_len: DEFAULT_MIN_LEN,
            max_len: DEFAULT_MAX_LEN,
        }
    }

    /// Minimum trimmed length to proceed to checkout.
    #[must_use]
    pub const fn min_len(&self) -> usize {
        self.min_len
    }

    /// Maximum accepted length.
    #[must_use]
    pub const fn max_len(&self) -> usize {
        self.max_len
    }

    /// Strips disallowed characters and upper-cases the rest.
    #[must_use]
    pub fn filter(raw: &str) -> String {
        raw.chars()
            .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect()
    }

    /// Sanitizes an edit, returning the filtered value or a too-long error.
    pub fn try_sanitize(&self, raw: &str) -> Result<CustomText, ValidationError> {
        let filtered = Self::filter(raw);
        if filtered.chars().count() > self.max_len {
            return Err(ValidationError::CustomTextTooLong { max: self.max_len });
        }
        Ok(CustomText::from_sanitized(filtered))
    }

    /// Sanitizes an edit, keeping `previous` if the edit would overflow.
    #[must_use]
    pub fn sanitize(&self, raw: &str, previous: &CustomText) -> CustomText {
        self.try_sanitize(raw).unwrap_or_else(|_| previous.clone())
    }

    /// Checks the text is ready for checkout and returns its trimmed form.
    pub fn validate_for_checkout(&self, text: &CustomText) -> Result<CustomText, ValidationError> {
        let trimmed = text.trimmed();
        if trimmed.len() < self.min_len {
            return Err(ValidationError::CustomTextTooShort { min: self.min_len });
        }
        if trimmed.len() > self.max_len {
            return Err(ValidationError::CustomTextTooLong { max: self.max_len });
        }
        Ok(trimmed)
    }
}

impl Default for TextSanitizer {
    fn default() -> Self {
        Self::default_limits()
    }
}
