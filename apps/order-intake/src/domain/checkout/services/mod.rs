//! Checkout domain services.

mod checkout_state_machine;
mod order_validator;

pub use checkout_state_machine::CheckoutStateMachine;
pub use order_validator::OrderValidator;
