//! Order Validator Service
//!
//! Synchronous checks run before an order may be submitted.

use crate::domain::checkout::errors::CheckoutFailure;
use crate::domain::checkout::value_objects::CustomerInfo;
use crate::domain::customization::{CustomText, TextSanitizer};
use crate::domain::delivery::DeliveryEstimate;
use crate::domain::shared::ValidationError;

/// Pre-submission validator.
///
/// Checks run in a fixed order and the first failure wins:
///
/// 1. custom text meets the checkout minimum
/// 2. every customer field is filled in
/// 3. the pincode is exactly six characters
/// 4. the latest delivery estimate for that pincode is available
pub struct OrderValidator;

impl OrderValidator {
    /// Validate everything needed to place an order.
    ///
    /// Returns the trimmed custom text to put on the order.
    ///
    /// # Errors
    ///
    /// Returns the first failed check.
    pub fn validate(
        sanitizer: &TextSanitizer,
        custom_text: &CustomText,
        customer: &CustomerInfo,
        estimate: Option<&DeliveryEstimate>,
    ) -> Result<CustomText, CheckoutFailure> {
        let text = sanitizer.validate_for_checkout(custom_text)?;

        if let Some(field) = customer.first_missing_field() {
            return Err(ValidationError::MissingRequiredField { field }.into());
        }

        if !customer.postal_code.is_complete() {
            return Err(ValidationError::InvalidPostalCode {
                length: customer.postal_code.len(),
            }
            .into());
        }

        match estimate {
            Some(estimate) if estimate.available => Ok(text),
            _ => Err(CheckoutFailure::DeliveryUnavailable),
        }
    }
}
