//! Check Delivery Use Case

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use crate::application::ports::DeliveryCheckPort;
use crate::domain::delivery::{DeliveryEstimate, PostalCode};
use crate::observability::record_delivery_check;

/// Use case for checking whether a pincode is serviceable.
///
/// Transport failures and timeouts are folded into "no estimate", which
/// blocks checkout the same way an unserviceable result does.
pub struct CheckDeliveryUseCase<D>
where
    D: DeliveryCheckPort,
{
    checker: Arc<D>,
    timeout: Duration,
}

impl<D> CheckDeliveryUseCase<D>
where
    D: DeliveryCheckPort,
{
    /// Create a new CheckDeliveryUseCase.
    pub const fn new(checker: Arc<D>, timeout: Duration) -> Self {
        Self { checker, timeout }
    }

    /// Execute the use case.
    ///
    /// Incomplete pincodes never reach the port and yield `None`.
    pub async fn execute(&self, postal_code: &PostalCode) -> Option<DeliveryEstimate> {
        if !postal_code.is_complete() {
            return None;
        }

        let start = Instant::now();
        let result = tokio::time::timeout(self.timeout, self.checker.check_delivery(postal_code)).await;
        let latency = start.elapsed().as_secs_f64();

        match result {
            Ok(Ok(estimate)) => {
                let outcome = if estimate.available { "available" } else { "unavailable" };
                record_delivery_check(outcome, latency);
                tracing::debug!(
                    postal_code = %postal_code,
                    available = estimate.available,
                    "Delivery check resolved"
                );
                Some(estimate)
            }
            Ok(Err(e)) => {
                record_delivery_check("error", latency);
                tracing::warn!(postal_code = %postal_code, error = %e, "Delivery check failed");
                None
            }
            Err(_) => {
                record_delivery_check("timeout", latency);
                tracing::warn!(
                    postal_code = %postal_code,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Delivery check timed out"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{DeliveryCheckError, MockDeliveryCheckPort};

    fn use_case(mock: MockDeliveryCheckPort) -> CheckDeliveryUseCase<MockDeliveryCheckPort> {
        CheckDeliveryUseCase::new(Arc::new(mock), Duration::from_secs(5))
    }

    #[tokio::test]
    async fn returns_estimate_from_port() {
        let mut mock = MockDeliveryCheckPort::new();
        mock.expect_check_delivery()
            .withf(|code| code.as_str() == "400001")
            .times(1)
            .returning(|_| Ok(DeliveryEstimate::available()));

        let estimate = use_case(mock).execute(&PostalCode::from("400001")).await;

        assert_eq!(estimate, Some(DeliveryEstimate::available()));
    }

    #[tokio::test]
    async fn port_error_means_no_estimate() {
        let mut mock = MockDeliveryCheckPort::new();
        mock.expect_check_delivery().times(1).returning(|_| {
            Err(DeliveryCheckError::Transport {
                message: "connection reset".to_string(),
            })
        });

        assert!(use_case(mock).execute(&PostalCode::from("400001")).await.is_none());
    }

    #[tokio::test]
    async fn incomplete_code_never_reaches_port() {
        let mut mock = MockDeliveryCheckPort::new();
        mock.expect_check_delivery().never();
        let use_case = use_case(mock);

        for raw in ["", "4", "40000", "4000011"] {
            assert!(use_case.execute(&PostalCode::from(raw)).await.is_none());
        }
    }

    struct StalledChecker;

    #[async_trait::async_trait]
    impl DeliveryCheckPort for StalledChecker {
        async fn check_delivery(
            &self,
            _postal_code: &PostalCode,
        ) -> Result<DeliveryEstimate, DeliveryCheckError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(DeliveryEstimate::available())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_means_no_estimate() {
        let use_case = CheckDeliveryUseCase::new(Arc::new(StalledChecker), Duration::from_secs(5));
        let start = Instant::now();

        assert!(use_case.execute(&PostalCode::from("400001")).await.is_none());
        assert!(start.elapsed() >= Duration::from_secs(5));
    }
}
