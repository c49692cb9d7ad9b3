//! Simulated delivery checker.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{DeliveryCheckError, DeliveryCheckPort};
use crate::domain::delivery::{DeliveryEstimate, PostalCode, ServiceabilityPolicy};

/// Delivery checker that answers from [`ServiceabilityPolicy`] after a delay.
///
/// Never fails.
#[derive(Debug, Default)]
pub struct SimulatedDeliveryChecker {
    latency: Duration,
    checks: AtomicU64,
}

impl SimulatedDeliveryChecker {
    /// Create a checker with the given latency.
    #[must_use]
    pub const fn new(latency: Duration) -> Self {
        Self {
            latency,
            checks: AtomicU64::new(0),
        }
    }

    /// Number of checks served so far.
    #[must_use]
    pub fn checks_performed(&self) -> u64 {
        self.checks.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl DeliveryCheckPort for SimulatedDeliveryChecker {
    async fn check_delivery(
        &self,
        postal_code: &PostalCode,
    ) -> Result<DeliveryEstimate, DeliveryCheckError> {
        self.checks.fetch_add(1, Ordering::Relaxed);
        tokio::time::sleep(self.latency).await;
        Ok(ServiceabilityPolicy::assess(postal_code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn answers_after_latency() {
        let checker = SimulatedDeliveryChecker::new(Duration::from_millis(1000));
        let start = Instant::now();

        let estimate = checker
            .check_delivery(&PostalCode::from("400001"))
            .await
            .unwrap();

        assert!(estimate.available);
        assert_eq!(estimate.window_description, "6-10 business days");
        assert!(start.elapsed() >= Duration::from_millis(1000));
        assert_eq!(checker.checks_performed(), 1);
    }

    #[tokio::test]
    async fn malformed_code_is_not_serviceable() {
        let checker = SimulatedDeliveryChecker::default();

        let estimate = checker
            .check_delivery(&PostalCode::from("40A001"))
            .await
            .unwrap();

        assert!(!estimate.available);
        assert_eq!(estimate.window_description, "Not serviceable");
    }
}
