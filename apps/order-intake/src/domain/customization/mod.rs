//! Customization Bounded Context
//!
//! The text a customer wants printed on the plate. Raw input is filtered down
//! to upper-case letters, digits and whitespace, and bounded to the plate's
//! character budget on every edit.

pub mod services;
pub mod value_objects;

pub use services::TextSanitizer;
pub use value_objects::CustomText;
