//! Metrics for the order-intake workflow.
//!
//! # Example
//!
//! ```
//! use order_intake::observability::record_delivery_check;
//!
//! // Record a delivery check that found the pincode serviceable
//! record_delivery_check("available", 1.0);
//! ```

use metrics::{counter, histogram};

// ============================================================================
// Delivery Metrics
// ============================================================================

/// Record a completed delivery check.
///
/// # Arguments
///
/// * `outcome` - `"available"`, `"unavailable"`, `"error"` or `"timeout"`
/// * `latency_seconds` - Time from request to result in seconds
pub fn record_delivery_check(outcome: &str, latency_seconds: f64) {
    counter!(
        "delivery_checks_total",
        "outcome" => outcome.to_string()
    )
    .increment(1);

    histogram!("delivery_check_latency_seconds").record(latency_seconds);
}

/// Record a delivery result discarded because the pincode changed meanwhile.
pub fn record_delivery_superseded() {
    counter!("delivery_checks_superseded_total").increment(1);
}

// ============================================================================
// Order Metrics
// ============================================================================

/// Record an order submission.
///
/// # Arguments
///
/// * `status` - `"confirmed"`, `"rejected"`, `"error"` or `"timeout"`
/// * `latency_seconds` - Time from submit to response in seconds
pub fn record_order_submission(status: &str, latency_seconds: f64) {
    counter!(
        "order_submissions_total",
        "status" => status.to_string()
    )
    .increment(1);

    histogram!(
        "order_latency_seconds",
        "status" => status.to_string()
    )
    .record(latency_seconds);
}

/// Record a submission or checkout attempt stopped by local validation.
///
/// # Arguments
///
/// * `field` - Field that failed (e.g. `"postal_code"`, `"custom_text"`)
pub fn record_validation_rejection(field: &str) {
    counter!(
        "validation_rejections_total",
        "field" => field.to_string()
    )
    .increment(1);
}
