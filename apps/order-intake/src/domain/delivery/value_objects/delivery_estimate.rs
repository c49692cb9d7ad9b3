//! Delivery estimate value object.

use serde::{Deserialize, Serialize};

/// Window shown for a serviceable pincode.
pub const SERVICEABLE_WINDOW: &str = "6-10 business days";

/// Window shown for an unserviceable pincode.
pub const NOT_SERVICEABLE: &str = "Not serviceable";

/// Result of a delivery check for one pincode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeliveryEstimate {
    /// Whether the storefront ships to the pincode.
    pub available: bool,
    /// Human-readable delivery window.
    pub window_description: String,
}

impl DeliveryEstimate {
    /// A serviceable estimate.
    #[must_use]
    pub fn available() -> Self {
        Self {
            available: true,
            window_description: SERVICEABLE_WINDOW.to_string(),
        }
    }

    /// An unserviceable estimate.
    #[must_use]
    pub fn not_serviceable() -> Self {
        Self {
            available: false,
            window_description: NOT_SERVICEABLE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors() {
        let ok = DeliveryEstimate::available();
        assert!(ok.available);
        assert_eq!(ok.window_description, "6-10 business days");

        let no = DeliveryEstimate::not_serviceable();
        assert!(!no.available);
        assert_eq!(no.window_description, "Not serviceable");
    }

    #[test]
    fn serializes_with_snake_case_fields() {
        let json = serde_json::to_value(DeliveryEstimate::available()).unwrap();
        assert_eq!(json["available"], true);
        assert_eq!(json["window_description"], "6-10 business days");
    }
}
