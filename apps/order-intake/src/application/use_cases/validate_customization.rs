//! Validate Customization Use Case

use std::time::Duration;

use crate::domain::customization::{CustomText, TextSanitizer};
use crate::domain::shared::ValidationError;
use crate::observability::record_validation_rejection;

/// Use case for the "proceed to checkout" action of the customization step.
pub struct ValidateCustomizationUseCase {
    sanitizer: TextSanitizer,
    delay: Duration,
}

impl ValidateCustomizationUseCase {
    /// Create a new ValidateCustomizationUseCase.
    #[must_use]
    pub const fn new(sanitizer: TextSanitizer, delay: Duration) -> Self {
        Self { sanitizer, delay }
    }

    /// Execute the use case.
    ///
    /// Rejects immediately when the trimmed text is too short; otherwise waits
    /// the validation delay and returns the trimmed text.
    pub async fn execute(&self, text: &CustomText) -> Result<CustomText, ValidationError> {
        let trimmed = match self.sanitizer.validate_for_checkout(text) {
            Ok(trimmed) => trimmed,
            Err(e) => {
                record_validation_rejection(e.field().as_str());
                tracing::debug!(length = text.len(), "Custom text rejected at checkout gate");
                return Err(e);
            }
        };

        tokio::time::sleep(self.delay).await;
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn use_case() -> ValidateCustomizationUseCase {
        ValidateCustomizationUseCase::new(
            TextSanitizer::default_limits(),
            Duration::from_millis(1000),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn accepts_after_delay() {
        let text = TextSanitizer::default_limits().sanitize(" rahul ", &CustomText::empty());
        let start = tokio::time::Instant::now();

        let result = use_case().execute(&text).await.unwrap();

        assert_eq!(result.as_str(), "RAHUL");
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn rejects_short_text_without_waiting() {
        let text = TextSanitizer::default_limits().sanitize("R", &CustomText::empty());
        let start = tokio::time::Instant::now();

        let err = use_case().execute(&text).await.unwrap_err();

        assert_eq!(err, ValidationError::CustomTextTooShort { min: 2 });
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
