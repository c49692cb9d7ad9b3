//! Checkout Value Objects

mod checkout_state;
mod customer_info;
mod order_confirmation;
mod order_request;

pub use checkout_state::CheckoutState;
pub use customer_info::{ContactField, CustomerInfo};
pub use order_confirmation::{ORDER_PLACED_MESSAGE, OrderConfirmation, format_long_date};
pub use order_request::OrderRequest;
