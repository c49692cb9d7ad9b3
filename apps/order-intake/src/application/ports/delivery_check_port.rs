//! Delivery Check Port (Driven Port)
//!
//! Interface for asking whether a pincode can be delivered to.

use async_trait::async_trait;

use crate::domain::delivery::{DeliveryEstimate, PostalCode};

/// Delivery check port error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DeliveryCheckError {
    /// The checker could not be reached.
    #[error("Delivery check transport error: {message}")]
    Transport {
        /// Error details.
        message: String,
    },
}

/// Port for delivery serviceability checks.
///
/// Callers only invoke this for complete (six-character) pincodes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeliveryCheckPort: Send + Sync {
    /// Check whether `postal_code` is serviceable.
    async fn check_delivery(
        &self,
        postal_code: &PostalCode,
    ) -> Result<DeliveryEstimate, DeliveryCheckError>;
}
