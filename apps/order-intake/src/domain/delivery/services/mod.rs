//! Delivery domain services.

mod serviceability_policy;

pub use serviceability_policy::ServiceabilityPolicy;
