//! Serviceability Policy
//!
//! Decides whether a pincode can be delivered to.

use crate::domain::delivery::value_objects::{DeliveryEstimate, PostalCode};

/// Pure serviceability rule shared by every delivery-check adapter.
///
/// Any well-formed six-digit pincode is serviceable.
pub struct ServiceabilityPolicy;

impl ServiceabilityPolicy {
    /// Assess a pincode.
    #[must_use]
    pub fn assess(postal_code: &PostalCode) -> DeliveryEstimate {
        if postal_code.is_well_formed() {
            DeliveryEstimate::available()
        } else {
            DeliveryEstimate::not_serviceable()
        }
    }
}
