//! Submit Order Use Case

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use crate::application::ports::{OrderBackend, OrderBackendError};
use crate::domain::checkout::{CheckoutFailure, OrderConfirmation, OrderRequest};
use crate::observability::record_order_submission;

/// Shown when the backend refuses an order without saying why.
pub const REJECTED_FALLBACK_MESSAGE: &str = "Failed to place order";

/// Shown when the backend cannot be reached or does not answer in time.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Use case for sending a validated order to the backend.
///
/// Preconditions are the caller's job; this only talks to the backend and
/// maps whatever comes back onto a [`CheckoutFailure`]. No retries.
pub struct SubmitOrderUseCase<B>
where
    B: OrderBackend,
{
    backend: Arc<B>,
    timeout: Duration,
}

impl<B> SubmitOrderUseCase<B>
where
    B: OrderBackend,
{
    /// Create a new SubmitOrderUseCase.
    pub const fn new(backend: Arc<B>, timeout: Duration) -> Self {
        Self { backend, timeout }
    }

    /// Execute the use case.
    pub async fn execute(&self, request: &OrderRequest) -> Result<OrderConfirmation, CheckoutFailure> {
        let start = Instant::now();
        let result = tokio::time::timeout(self.timeout, self.backend.create_order(request)).await;
        let latency = start.elapsed().as_secs_f64();

        match result {
            Ok(Ok(confirmation)) => {
                record_order_submission("confirmed", latency);
                tracing::info!(
                    order_id = %confirmation.order_id,
                    delivery_date = %confirmation.delivery_date,
                    "Order confirmed"
                );
                Ok(confirmation)
            }
            Ok(Err(OrderBackendError::Rejected { message })) => {
                record_order_submission("rejected", latency);
                tracing::warn!(reason = ?message, "Order rejected by backend");
                Err(CheckoutFailure::TransientServer {
                    message: message.unwrap_or_else(|| REJECTED_FALLBACK_MESSAGE.to_string()),
                })
            }
            Ok(Err(e @ OrderBackendError::Transport { .. })) => {
                record_order_submission("error", latency);
                tracing::error!(error = %e, "Order submission failed");
                Err(CheckoutFailure::TransientServer {
                    message: GENERIC_FAILURE_MESSAGE.to_string(),
                })
            }
            Err(_) => {
                record_order_submission("timeout", latency);
                tracing::error!(
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Order submission timed out"
                );
                Err(CheckoutFailure::TransientServer {
                    message: GENERIC_FAILURE_MESSAGE.to_string(),
                })
            }
        }
    }
}
