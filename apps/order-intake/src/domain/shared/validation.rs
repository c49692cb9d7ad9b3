//! Input validation errors shown to the customer.
//!
//! Every variant is recoverable: the customer edits the offending field and
//! tries again. None of these ever reach the order backend.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Input field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationField {
    /// Text printed on the plate.
    CustomText,
    /// Customer full name.
    Name,
    /// Customer email address.
    Email,
    /// Customer phone number.
    Phone,
    /// Street address (without pincode).
    Address,
    /// Six-digit pincode.
    PostalCode,
}

impl ValidationField {
    /// Stable label used in logs and metrics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CustomText => "custom_text",
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::PostalCode => "postal_code",
        }
    }
}

impl fmt::Display for ValidationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A local, recoverable input validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty.
    MissingRequiredField {
        /// The first empty field, in form order.
        field: ValidationField,
    },

    /// The pincode is not exactly six characters long.
    InvalidPostalCode {
        /// Length of the value that was entered.
        length: usize,
    },

    /// Custom text (after trimming) is shorter than the minimum.
    CustomTextTooShort {
        /// Minimum accepted length.
        min: usize,
    },

    /// Custom text is longer than the plate allows.
    CustomTextTooLong {
        /// Maximum accepted length.
        max: usize,
    },
}

impl ValidationError {
    /// The field the error refers to.
    #[must_use]
    pub const fn field(&self) -> ValidationField {
        match self {
            Self::MissingRequiredField { field } => *field,
            Self::InvalidPostalCode { .. } => ValidationField::PostalCode,
            Self::CustomTextTooShort { .. } | Self::CustomTextTooLong { .. } => {
                ValidationField::CustomText
            }
        }
    }

    /// Message shown to the customer.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingRequiredField { .. } => "Please fill in all required fields".to_string(),
            Self::InvalidPostalCode { .. } => "Please enter a valid 6-digit pincode".to_string(),
            Self::CustomTextTooShort { min } => {
                format!("Please enter at least {min} characters for your custom text")
            }
            Self::CustomTextTooLong { max } => {
                format!("Custom text can be at most {max} characters")
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.user_message())
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_storefront_copy() {
        assert_eq!(
            ValidationError::MissingRequiredField {
                field: ValidationField::Email
            }
            .to_string(),
            "Please fill in all required fields"
        );
        assert_eq!(
            ValidationError::InvalidPostalCode { length: 5 }.to_string(),
            "Please enter a valid 6-digit pincode"
        );
        assert_eq!(
            ValidationError::CustomTextTooShort { min: 2 }.to_string(),
            "Please enter at least 2 characters for your custom text"
        );
    }

    #[test]
    fn errors_name_their_field() {
        assert_eq!(
            ValidationError::MissingRequiredField {
                field: ValidationField::Phone
            }
            .field(),
            ValidationField::Phone
        );
        assert_eq!(
            ValidationError::InvalidPostalCode { length: 3 }.field(),
            ValidationField::PostalCode
        );
        assert_eq!(
            ValidationError::CustomTextTooLong { max: 12 }.field(),
            ValidationField::CustomText
        );
    }

    #[test]
    fn field_labels() {
        assert_eq!(ValidationField::PostalCode.to_string(), "postal_code");
        assert_eq!(ValidationField::CustomText.as_str(), "custom_text");
    }
}
