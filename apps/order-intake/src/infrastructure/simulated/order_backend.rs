//! Simulated order backend.
//!
//! Fabricates latency, a fixed probability of failure and a delivery date a
//! random number of days out.

use std::fmt;
use std::ops::RangeInclusive;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::application::ports::{OrderBackend, OrderBackendError};
use crate::config::SimulationConfig;
use crate::domain::checkout::{OrderConfirmation, OrderRequest};
use crate::domain::shared::OrderId;

/// Message of a simulated server failure.
pub const SERVER_UNAVAILABLE_MESSAGE: &str = "Server temporarily unavailable. Please try again.";

type DateSource = Box<dyn Fn() -> NaiveDate + Send + Sync>;

/// Order backend that never leaves the process.
///
/// Each call waits `latency`, then fails with probability `failure_rate`
/// regardless of input. Otherwise it returns a fresh order id and a delivery
/// date `today + n` days with `n` drawn uniformly from the delivery window.
/// Not idempotent: the same request twice places two orders.
pub struct SimulatedOrderBackend {
    rng: Mutex<StdRng>,
    failure_rate: f64,
    delivery_window: RangeInclusive<u32>,
    latency: Duration,
    today: DateSource,
}

impl SimulatedOrderBackend {
    /// Create a backend from simulation settings.
    ///
    /// Seeded from `config.seed` when set, from the OS otherwise.
    #[must_use]
    pub fn new(config: &SimulationConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self {
            rng: Mutex::new(rng),
            failure_rate: config.failure_rate,
            delivery_window: config.delivery_window(),
            latency: config.order_latency(),
            today: Box::new(|| chrono::Local::now().date_naive()),
        }
    }

    /// Replace the source of "today".
    #[must_use]
    pub fn with_clock(mut self, today: impl Fn() -> NaiveDate + Send + Sync + 'static) -> Self {
        self.today = Box::new(today);
        self
    }

    /// Draw the outcome of one call: `None` for a failure, otherwise the
    /// delivery offset in days.
    fn draw(&self) -> Option<u32> {
        let mut rng = self.rng.lock();
        let failed = rng.random::<f64>() < self.failure_rate;
        let offset = rng.random_range(self.delivery_window.clone());
        (!failed).then_some(offset)
    }
}

impl fmt::Debug for SimulatedOrderBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimulatedOrderBackend")
            .field("failure_rate", &self.failure_rate)
            .field("delivery_window", &self.delivery_window)
            .field("latency", &self.latency)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl OrderBackend for SimulatedOrderBackend {
    async fn create_order(
        &self,
        request: &OrderRequest,
    ) -> Result<OrderConfirmation, OrderBackendError> {
        tokio::time::sleep(self.latency).await;

        let Some(offset) = self.draw() else {
            tracing::debug!(
                postal_code = %request.customer_info.postal_code,
                "Simulated server failure"
            );
            return Err(OrderBackendError::Rejected {
                message: Some(SERVER_UNAVAILABLE_MESSAGE.to_string()),
            });
        };

        let delivery_date = (self.today)()
            .checked_add_days(Days::new(u64::from(offset)))
            .ok_or_else(|| OrderBackendError::Transport {
                message: "delivery date out of range".to_string(),
            })?;

        Ok(OrderConfirmation::new(OrderId::generate(), delivery_date))
    }
}
