//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod check_delivery;
mod submit_order;
mod validate_customization;

pub use check_delivery::CheckDeliveryUseCase;
pub use submit_order::{GENERIC_FAILURE_MESSAGE, REJECTED_FALLBACK_MESSAGE, SubmitOrderUseCase};
pub use validate_customization::ValidateCustomizationUseCase;
