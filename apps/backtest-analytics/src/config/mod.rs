//! Configuration module for backtest analytics.
//!
//! Loads YAML configuration with environment variable interpolation and
//! validates it before use.
//!
//! # Usage
//!
//! ```rust,ignore
//! use backtest_analytics::config::{AnalyticsConfig, load_config};
//!
//! // Load from default path (analytics.yaml)
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("custom/analytics.yaml"))?;
//!
//! println!("runs under: {}", config.runs.logs_dir);
//! ```

mod metrics;
mod observability;
mod runs;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::run::AggregatorOptions;

pub use metrics::MetricsConfig;
pub use observability::{LOG_FORMATS, LoggingConfig, ObservabilityConfig};
pub use runs::RunsConfig;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "analytics.yaml";

/// Environment variable naming an alternative configuration file.
pub const CONFIG_PATH_ENV: &str = "ANALYTICS_CONFIG";

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

impl ConfigError {
    /// Whether the config file does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ReadError { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Run discovery.
    #[serde(default)]
    pub runs: RunsConfig,
    /// Metric computation.
    #[serde(default)]
    pub metrics: MetricsConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl AnalyticsConfig {
    /// Aggregator settings derived from this configuration.
    #[must_use]
    pub fn aggregator_options(&self) -> AggregatorOptions {
        AggregatorOptions {
            logs_dir: self.runs.logs_dir.clone(),
            run_prefix: self.runs.run_prefix.clone(),
            periods_per_year: self.metrics.periods_per_year,
            indicator_periods: self.metrics.indicator_periods.clone(),
        }
    }
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "analytics.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<AnalyticsConfig, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

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
pub fn load_config_from_string(yaml: &str) -> Result<AnalyticsConfig, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: AnalyticsConfig = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax. An unset or empty
/// variable without a default becomes an empty string.
#[allow(clippy::expect_used)] // Regex is compile-time constant
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
fn validate_config(config: &AnalyticsConfig) -> Result<(), ConfigError> {
    if config.runs.logs_dir.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "runs.logs_dir must not be empty".to_string(),
        ));
    }

    let periods_per_year = config.metrics.periods_per_year;
    if !periods_per_year.is_finite() || periods_per_year <= 0.0 {
        return Err(ConfigError::ValidationError(
            "metrics.periods_per_year must be positive".to_string(),
        ));
    }

    if config.metrics.indicator_periods.is_empty() {
        return Err(ConfigError::ValidationError(
            "metrics.indicator_periods must not be empty".to_string(),
        ));
    }

    if config.metrics.indicator_periods.contains(&0) {
        return Err(ConfigError::ValidationError(
            "metrics.indicator_periods must all be positive".to_string(),
        ));
    }

    let format = config.observability.logging.format.as_str();
    if !LOG_FORMATS.contains(&format) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {LOG_FORMATS:?}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalyticsConfig::default();

        assert_eq!(config.runs.logs_dir, "logs");
        assert_eq!(config.runs.run_prefix, "run_");
        assert!((config.metrics.periods_per_year - 252.0).abs() < f64::EPSILON);
        assert_eq!(config.metrics.indicator_periods, vec![5, 10, 20, 60]);
        assert_eq!(config.observability.logging.level, "info");
        assert_eq!(config.observability.logging.format, "compact");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = match load_config_from_string("{}") {
            Ok(c) => c,
            Err(e) => panic!("should load empty config: {e}"),
        };
        assert_eq!(config, AnalyticsConfig::default());
    }

    #[test]
    fn test_aggregator_options_follow_config() {
        let yaml = r"
runs:
  logs_dir: output
  run_prefix: bt_
metrics:
  periods_per_year: 52
  indicator_periods: [3, 7]
";
        let config = match load_config_from_string(yaml) {
            Ok(c) => c,
            Err(e) => panic!("should load config: {e}"),
        };
        let options = config.aggregator_options();

        assert_eq!(options.logs_dir, "output");
        assert_eq!(options.run_prefix, "bt_");
        assert!((options.periods_per_year - 52.0).abs() < f64::EPSILON);
        assert_eq!(options.indicator_periods, vec![3, 7]);
    }

    #[test]
    fn test_env_var_with_default_when_missing() {
        let input = "level: ${BACKTEST_ANALYTICS_TEST_NONEXISTENT_VAR:-debug}";
        assert_eq!(interpolate_env_vars(input), "level: debug");
    }

    #[test]
    fn test_env_var_without_default_becomes_empty() {
        let input = "prefix: ${BACKTEST_ANALYTICS_TEST_UNLIKELY_TO_EXIST}";
        assert_eq!(interpolate_env_vars(input), "prefix: ");
    }

    #[test]
    #[expect(clippy::literal_string_with_formatting_args)] // ${...} is env var syntax
    fn test_env_var_with_default_uses_existing() {
        let result = interpolate_env_vars("path: ${PATH:-default}");
        assert_ne!(result, "path: default");
        assert!(result.starts_with("path: "));
    }

    #[test]
    fn test_validation_non_positive_periods_per_year() {
        let yaml = r"
metrics:
  periods_per_year: 0
";
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for zero periods_per_year");
        };
        assert!(err.to_string().contains("periods_per_year"));
    }

    #[test]
    fn test_validation_zero_indicator_period() {
        let yaml = r"
metrics:
  indicator_periods: [5, 0]
";
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for zero indicator period");
        };
        assert!(err.to_string().contains("indicator_periods"));
    }

    #[test]
    fn test_validation_invalid_log_format() {
        let yaml = r"
observability:
  logging:
    format: xml
";
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for invalid format");
        };
        assert!(err.to_string().contains("format"));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let Err(err) = load_config(Some("/nonexistent/backtest-analytics.yaml")) else {
            panic!("expected read error");
        };
        assert!(err.is_not_found());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analytics.yaml");
        std::fs::write(&path, "observability:\n  logging:\n    level: debug\n").unwrap();

        let config = load_config(path.to_str()).unwrap();
        assert_eq!(config.observability.logging.level, "debug");
    }
}
