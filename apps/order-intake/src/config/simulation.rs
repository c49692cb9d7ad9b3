//! Simulated backend configuration.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::time::Duration;

/// Latency, failure and delivery-window settings for the simulated adapters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Delivery check latency in milliseconds.
    #[serde(default = "default_delivery_latency_ms")]
    pub delivery_latency_ms: u64,
    /// Order creation latency in milliseconds.
    #[serde(default = "default_order_latency_ms")]
    pub order_latency_ms: u64,
    /// Customization validation delay in milliseconds.
    #[serde(default = "default_validation_latency_ms")]
    pub validation_latency_ms: u64,
    /// Probability that an order creation call fails (0.0 to 1.0).
    #[serde(default = "default_failure_rate")]
    pub failure_rate: f64,
    /// Fewest days until delivery.
    #[serde(default = "default_min_delivery_days")]
    pub min_delivery_days: u32,
    /// Most days until delivery.
    #[serde(default = "default_max_delivery_days")]
    pub max_delivery_days: u32,
    /// Seed for reproducible runs. Unset means seeded from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            delivery_latency_ms: default_delivery_latency_ms(),
            order_latency_ms: default_order_latency_ms(),
            validation_latency_ms: default_validation_latency_ms(),
            failure_rate: default_failure_rate(),
            min_delivery_days: default_min_delivery_days(),
            max_delivery_days: default_max_delivery_days(),
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Get delivery check latency as Duration.
    #[must_use]
    pub const fn delivery_latency(&self) -> Duration {
        Duration::from_millis(self.delivery_latency_ms)
    }

    /// Get order creation latency as Duration.
    #[must_use]
    pub const fn order_latency(&self) -> Duration {
        Duration::from_millis(self.order_latency_ms)
    }

    /// Get customization validation delay as Duration.
    #[must_use]
    pub const fn validation_latency(&self) -> Duration {
        Duration::from_millis(self.validation_latency_ms)
    }

    /// Delivery offset range in days.
    #[must_use]
    pub const fn delivery_window(&self) -> RangeInclusive<u32> {
        self.min_delivery_days..=self.max_delivery_days
    }
}

const fn default_delivery_latency_ms() -> u64 {
    1000
}

const fn default_order_latency_ms() -> u64 {
    1500
}

const fn default_validation_latency_ms() -> u64 {
    1000
}

const fn default_failure_rate() -> f64 {
    0.05
}

const fn default_min_delivery_days() -> u32 {
    6
}

const fn default_max_delivery_days() -> u32 {
    10
}
