//! Catalog configuration: what is being sold and its text limits.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::domain::customization::TextSanitizer;
use crate::domain::shared::Money;

/// Product catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Price of one plate, in whole rupees.
    #[serde(default = "default_unit_price")]
    pub unit_price: u32,
    /// Plates per order.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Longest custom text accepted on an edit.
    #[serde(default = "default_max_custom_text_len")]
    pub max_custom_text_len: usize,
    /// Shortest trimmed custom text accepted at checkout.
    #[serde(default = "default_min_custom_text_len")]
    pub min_custom_text_len: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            unit_price: default_unit_price(),
            quantity: default_quantity(),
            max_custom_text_len: default_max_custom_text_len(),
            min_custom_text_len: default_min_custom_text_len(),
        }
    }
}

impl CatalogConfig {
    /// Unit price as money.
    #[must_use]
    pub fn unit_price(&self) -> Money {
        Money::rupees(i64::from(self.unit_price))
    }

    /// Sanitizer configured with these text limits.
    ///
    /// # Errors
    ///
    /// Returns error if the limits are zero or inverted.
    pub fn sanitizer(&self) -> Result<TextSanitizer, ConfigError> {
        TextSanitizer::new(self.min_custom_text_len, self.max_custom_text_len).map_err(|e| {
            ConfigError::ValidationError(format!(
                "catalog text limits (min_custom_text_len {}, max_custom_text_len {}): {e}",
                self.min_custom_text_len, self.max_custom_text_len
            ))
        })
    }
}

const fn default_unit_price() -> u32 {
    2000
}

const fn default_quantity() -> u32 {
    1
}

const fn default_max_custom_text_len() -> usize {
    12
}

const fn default_min_custom_text_len() -> usize {
    2
}
