//! Delivery Bounded Context
//!
//! Pincodes and whether the storefront can ship to them.
//!
//! A pincode is *complete* once it holds exactly six characters and
//! *well-formed* when those six characters are all decimal digits. Only
//! complete pincodes are ever checked; incomplete ones trigger nothing.

pub mod services;
pub mod value_objects;

pub use services::ServiceabilityPolicy;
pub use value_objects::{DeliveryEstimate, PostalCode};
