//! Shared Domain Types
//!
//! Value objects and errors shared across bounded contexts.

pub mod errors;
pub mod validation;
pub mod value_objects;

pub use errors::DomainError;
pub use validation::{ValidationError, ValidationField};
pub use value_objects::{Money, OrderId};
