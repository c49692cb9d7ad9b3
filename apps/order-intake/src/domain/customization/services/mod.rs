//! Customization domain services.

mod text_sanitizer;

pub use text_sanitizer::TextSanitizer;
