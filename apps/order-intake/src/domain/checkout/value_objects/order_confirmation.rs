//! Order confirmation value object.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::shared::OrderId;

/// Notice attached to every successful order.
pub const ORDER_PLACED_MESSAGE: &str = "Order placed successfully!";

/// Render a date the way the storefront shows it, e.g. `Friday, 23 October 2026`.
#[must_use]
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %-d %B %Y").to_string()
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    /// Backend-assigned order id.
    pub order_id: OrderId,
    /// Estimated delivery date.
    pub delivery_date: NaiveDate,
    /// `delivery_date` in long form.
    pub estimated_delivery_date: String,
    /// Success notice.
    pub message: String,
}

impl OrderConfirmation {
    /// Build a confirmation for an order delivered on `delivery_date`.
    #[must_use]
    pub fn new(order_id: OrderId, delivery_date: NaiveDate) -> Self {
        Self {
            order_id,
            delivery_date,
            estimated_delivery_date: format_long_date(delivery_date),
            message: ORDER_PLACED_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_date_format() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 23).unwrap();
        assert_eq!(format_long_date(date), "Friday, 23 October 2026");

        let date = NaiveDate::from_ymd_opt(2026, 11, 2).unwrap();
        assert_eq!(format_long_date(date), "Monday, 2 November 2026");
    }

    #[test]
    fn confirmation_carries_formatted_date_and_notice() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 23).unwrap();
        let confirmation = OrderConfirmation::new(OrderId::new("NP1"), date);

        assert_eq!(confirmation.estimated_delivery_date, "Friday, 23 October 2026");
        assert_eq!(confirmation.message, "Order placed successfully!");
    }
}
