//! Checkout failures surfaced to the customer.

use std::fmt;

use crate::domain::shared::{DomainError, ValidationError};

/// Message shown when the current pincode has no available estimate.
pub const DELIVERY_UNAVAILABLE_MESSAGE: &str = "Delivery not available to this pincode";

/// Why a checkout action did not go through.
///
/// Every variant is recoverable: the session stays (or returns to) an
/// editable state and the customer can correct the input or try again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutFailure {
    /// Local input validation failed. The backend was not called.
    Validation(ValidationError),

    /// The current pincode has no available delivery estimate. The backend
    /// was not called.
    DeliveryUnavailable,

    /// The backend (or the transport to it) failed. No automatic retry.
    TransientServer {
        /// Message shown verbatim.
        message: String,
    },

    /// The action is not allowed in the session's current state.
    IllegalTransition(DomainError),
}

impl CheckoutFailure {
    /// Message shown to the customer.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => err.user_message(),
            Self::DeliveryUnavailable => DELIVERY_UNAVAILABLE_MESSAGE.to_string(),
            Self::TransientServer { message } => message.clone(),
            Self::IllegalTransition(err) => err.to_string(),
        }
    }

    /// Stable label used in logs and metrics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::DeliveryUnavailable => "delivery_unavailable",
            Self::TransientServer { .. } => "transient_server",
            Self::IllegalTransition(_) => "illegal_transition",
        }
    }

    /// Whether the failure happened before the backend was contacted.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        !matches!(self, Self::TransientServer { .. })
    }
}

impl fmt::Display for CheckoutFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.user_message())
    }
}

impl std::error::Error for CheckoutFailure {}

impl From<ValidationError> for CheckoutFailure {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<DomainError> for CheckoutFailure {
    fn from(err: DomainError) -> Self {
        Self::IllegalTransition(err)
    }
}
