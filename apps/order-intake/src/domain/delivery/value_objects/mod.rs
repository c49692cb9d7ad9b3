//! Delivery value objects.

mod delivery_estimate;
mod postal_code;

pub use delivery_estimate::DeliveryEstimate;
pub use postal_code::{POSTAL_CODE_LEN, PostalCode};
