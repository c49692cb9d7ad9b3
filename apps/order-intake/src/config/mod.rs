//! Configuration module for the order-intake workflow.
//!
//! Loads a YAML file with environment variable interpolation and validates
//! the result before anything is wired up.
//!
//! # Usage
//!
//! ```rust,ignore
//! use order_intake::config::load_config;
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("custom/config.yaml"))?;
//!
//! println!("failure rate: {}", config.simulation.failure_rate);
//! ```

mod catalog;
mod observability;
mod simulation;
mod workflow;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use catalog::CatalogConfig;
pub use observability::{LogFormat, LoggingConfig, ObservabilityConfig};
pub use simulation::SimulationConfig;
pub use workflow::WorkflowConfig;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Product and text limits.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Simulated backend behaviour.
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Workflow timeouts.
    #[serde(default)]
    pub workflow: WorkflowConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or("config.yaml");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is a literal
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
///
/// # Errors
///
/// Returns the first rule that fails.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let catalog = &config.catalog;
    catalog
        .unit_price()
        .validate_as_price()
        .map_err(|e| ConfigError::ValidationError(format!("catalog.{e}")))?;
    if catalog.quantity == 0 {
        return Err(ConfigError::ValidationError(
            "catalog.quantity must be positive".to_string(),
        ));
    }
    catalog.sanitizer()?;

    let sim = &config.simulation;
    if !(0.0..=1.0).contains(&sim.failure_rate) {
        return Err(ConfigError::ValidationError(
            "simulation.failure_rate must be between 0.0 and 1.0".to_string(),
        ));
    }
    if sim.min_delivery_days > sim.max_delivery_days {
        return Err(ConfigError::ValidationError(
            "simulation.min_delivery_days must not exceed max_delivery_days".to_string(),
        ));
    }

    let workflow = &config.workflow;
    if workflow.delivery_check_timeout_ms == 0 || workflow.submission_timeout_ms == 0 {
        return Err(ConfigError::ValidationError(
            "workflow timeouts must be positive".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.catalog.unit_price, 2000);
        assert_eq!(config.catalog.quantity, 1);
        assert_eq!(config.catalog.max_custom_text_len, 12);
        assert_eq!(config.catalog.min_custom_text_len, 2);
        assert_eq!(config.simulation.delivery_latency_ms, 1000);
        assert_eq!(config.simulation.order_latency_ms, 1500);
        assert!((config.simulation.failure_rate - 0.05).abs() < f64::EPSILON);
        assert_eq!(config.simulation.delivery_window(), 6..=10);
        assert_eq!(config.workflow.submission_timeout_ms, 10_000);
        assert_eq!(config.observability.logging.format, LogFormat::Json);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_load_minimal_config() {
        let yaml = r"
simulation:
  seed: 7
";

        let config = match load_config_from_string(yaml) {
            Ok(c) => c,
            Err(e) => panic!("should load minimal config: {e}"),
        };
        assert_eq!(config.simulation.seed, Some(7));
        assert_eq!(config.simulation.order_latency_ms, 1500); // Default value
    }

    #[test]
    fn test_env_var_with_default_when_missing() {
        let input = "level: ${ORDER_INTAKE_CONFIG_TEST_NONEXISTENT_VAR:-debug}";
        assert_eq!(interpolate_env_vars(input), "level: debug");
    }

    #[test]
    #[expect(clippy::literal_string_with_formatting_args)] // ${...} is env var syntax
    fn test_env_var_with_default_uses_existing() {
        let input = "path: ${PATH:-default}";
        let result = interpolate_env_vars(input);

        assert_ne!(result, "path: default");
        assert!(result.starts_with("path: "));
    }

    #[test]
    fn test_env_var_without_default_becomes_empty() {
        let input = "seed: ${ORDER_INTAKE_CONFIG_TEST_UNLIKELY_TO_EXIST}";
        assert_eq!(interpolate_env_vars(input), "seed: ");
    }

    #[test]
    fn test_validation_failure_rate_out_of_range() {
        let yaml = r"
simulation:
  failure_rate: 1.5
";
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for failure_rate");
        };
        assert!(err.to_string().contains("failure_rate"));
    }

    #[test]
    fn test_validation_inverted_delivery_window() {
        let yaml = r"
simulation:
  min_delivery_days: 11
  max_delivery_days: 10
";
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for delivery window");
        };
        assert!(err.to_string().contains("min_delivery_days"));
    }

    #[test]
    fn test_validation_inverted_text_limits() {
        let yaml = r"
catalog:
  min_custom_text_len: 13
";
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for text limits");
        };
        assert!(err.to_string().contains("min_custom_text_len"));
    }

    #[test]
    fn test_validation_zero_timeout() {
        let yaml = r"
workflow:
  submission_timeout_ms: 0
";
        assert!(load_config_from_string(yaml).is_err());
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
catalog:
  unit_price: 2500
  quantity: 2
  max_custom_text_len: 10
  min_custom_text_len: 3

simulation:
  delivery_latency_ms: 10
  order_latency_ms: 20
  validation_latency_ms: 5
  failure_rate: 0.0
  min_delivery_days: 3
  max_delivery_days: 4
  seed: 42

workflow:
  delivery_check_timeout_ms: 100
  submission_timeout_ms: 200

observability:
  logging:
    level: "debug"
    format: "pretty"
"#;

        let config = match load_config_from_string(yaml) {
            Ok(c) => c,
            Err(e) => panic!("should load full config: {e}"),
        };

        assert_eq!(config.catalog.unit_price().to_string(), "2500");
        assert_eq!(config.catalog.sanitizer().unwrap().max_len(), 10);
        assert_eq!(config.simulation.delivery_window(), 3..=4);
        assert_eq!(config.simulation.seed, Some(42));
        assert_eq!(config.workflow.delivery_check_timeout().as_millis(), 100);
        assert_eq!(config.observability.logging.level, "debug");
        assert_eq!(config.observability.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "catalog:\n  unit_price: ${{ORDER_INTAKE_TEST_PRICE_UNSET:-1800}}").unwrap();

        let path = file.path().to_str().unwrap();
        let config = load_config(Some(path)).unwrap();

        assert_eq!(config.catalog.unit_price, 1800);
    }

    #[test]
    fn test_load_config_missing_file() {
        let Err(err) = load_config(Some("/nonexistent/order-intake.yaml")) else {
            panic!("expected read error");
        };
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn test_validation_zero_unit_price() {
        let yaml = r"
catalog:
  unit_price: 0
";
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for unit_price");
        };
        assert!(err.to_string().contains("unit_price"));
    }

    #[test]
    fn test_validation_zero_max_text_len() {
        let mut config = Config::default();
        config.catalog.max_custom_text_len = 0;
        config.catalog.min_custom_text_len = 0;

        let Err(err) = validate_config(&config) else {
            panic!("expected error for max_custom_text_len");
        };
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(config.catalog.sanitizer().is_err());
    }
}
