//! Order summary DTOs

use serde::{Deserialize, Serialize};

use crate::domain::checkout::OrderConfirmation;
use crate::domain::shared::Money;

/// Label shown for zero shipping.
pub const SHIPPING_LABEL_FREE: &str = "FREE";

/// DTO for the order summary panel.
///
/// Amounts are plain integers; the currency symbol is applied when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummaryDto {
    /// Text printed on the plate.
    pub custom_text: String,
    /// Price of one plate.
    pub product_price: Money,
    /// Plates in the order.
    pub quantity: u32,
    /// Shipping charge.
    pub shipping: Money,
    /// Shipping as displayed.
    pub shipping_label: String,
    /// Amount charged.
    pub total: Money,
    /// Present once the order is placed.
    pub confirmed: Option<ConfirmedOrderDto>,
}

/// DTO for the confirmation screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmedOrderDto {
    /// Order ID.
    pub order_id: String,
    /// Estimated delivery date in long form.
    pub estimated_delivery_date: String,
    /// Amount paid.
    pub amount: Money,
    /// Success notice.
    pub message: String,
}

impl OrderSummaryDto {
    /// Summary for an order that has not been placed yet. Shipping is free.
    #[must_use]
    pub fn new(custom_text: impl Into<String>, product_price: Money, quantity: u32) -> Self {
        let shipping = Money::ZERO;
        Self {
            custom_text: custom_text.into(),
            product_price,
            quantity,
            shipping,
            shipping_label: shipping_label(shipping),
            total: product_price * quantity + shipping,
            confirmed: None,
        }
    }

    /// Attach the confirmation of the placed order.
    #[must_use]
    pub fn with_confirmation(mut self, confirmation: &OrderConfirmation) -> Self {
        self.confirmed = Some(ConfirmedOrderDto {
            order_id: confirmation.order_id.to_string(),
            estimated_delivery_date: confirmation.estimated_delivery_date.clone(),
            amount: self.total,
            message: confirmation.message.clone(),
        });
        self
    }
}

fn shipping_label(shipping: Money) -> String {
    if shipping.is_zero() {
        SHIPPING_LABEL_FREE.to_string()
    } else {
        shipping.to_string()
    }
}
