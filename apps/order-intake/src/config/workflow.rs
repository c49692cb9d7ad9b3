//! Checkout workflow timeouts.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upper bounds on how long the workflow waits for its ports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// A delivery check slower than this counts as "no estimate".
    #[serde(default = "default_delivery_check_timeout_ms")]
    pub delivery_check_timeout_ms: u64,
    /// A submission slower than this counts as a transport failure.
    #[serde(default = "default_submission_timeout_ms")]
    pub submission_timeout_ms: u64,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            delivery_check_timeout_ms: default_delivery_check_timeout_ms(),
            submission_timeout_ms: default_submission_timeout_ms(),
        }
    }
}

impl WorkflowConfig {
    /// Get delivery check timeout as Duration.
    #[must_use]
    pub const fn delivery_check_timeout(&self) -> Duration {
        Duration::from_millis(self.delivery_check_timeout_ms)
    }

    /// Get submission timeout as Duration.
    #[must_use]
    pub const fn submission_timeout(&self) -> Duration {
        Duration::from_millis(self.submission_timeout_ms)
    }
}

const fn default_delivery_check_timeout_ms() -> u64 {
    5000
}

const fn default_submission_timeout_ms() -> u64 {
    10_000
}
