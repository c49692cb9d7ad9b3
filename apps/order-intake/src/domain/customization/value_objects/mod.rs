//! Customization value objects.

mod custom_text;

pub use custom_text::CustomText;
