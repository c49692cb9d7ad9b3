//! Order Backend Port (Driven Port)
//!
//! Interface for creating orders.

use async_trait::async_trait;

use crate::domain::checkout::{OrderConfirmation, OrderRequest};

/// Order backend error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderBackendError {
    /// The backend answered and refused the order.
    #[error("Order rejected: {}", message.as_deref().unwrap_or("no reason given"))]
    Rejected {
        /// Reason shown to the customer, if the backend gave one.
        message: Option<String>,
    },

    /// The backend could not be reached or its answer was unreadable.
    #[error("Order backend transport error: {message}")]
    Transport {
        /// Error details.
        message: String,
    },
}

/// Port for order creation.
///
/// Not idempotent: every successful call creates a new order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderBackend: Send + Sync {
    /// Create an order.
    async fn create_order(
        &self,
        request: &OrderRequest,
    ) -> Result<OrderConfirmation, OrderBackendError>;
}
