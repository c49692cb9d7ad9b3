//! Observability module for metrics and logging.
//!
//! Metrics go through the `metrics` facade; no exporter is installed here, so
//! recording is a no-op until the embedding process installs a recorder.

mod logging;
mod metrics;

pub use logging::{LoggingError, init_logging};
pub use metrics::{
    record_delivery_check, record_delivery_superseded, record_order_submission,
    record_validation_rejection,
};
