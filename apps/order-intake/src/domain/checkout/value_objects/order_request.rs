//! Order request handed to the order backend.

use serde::Serialize;

use crate::domain::checkout::value_objects::CustomerInfo;
use crate::domain::customization::CustomText;
use crate::domain::shared::Money;

/// A complete order ready for submission.
///
/// Built by the checkout session only after every precondition has passed,
/// including an available delivery estimate for the pincode it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    /// Trimmed text printed on the plate.
    pub custom_text: CustomText,
    /// Number of plates.
    pub quantity: u32,
    /// Price of a single plate.
    pub unit_price: Money,
    /// Shipping and contact details.
    pub customer_info: CustomerInfo,
}

impl OrderRequest {
    /// Amount charged for the order.
    #[must_use]
    pub fn total(&self) -> Money {
        self.unit_price * self.quantity
    }

    /// Address and pincode combined into one line.
    #[must_use]
    pub fn address_line(&self) -> String {
        self.customer_info.address_line()
    }
}
