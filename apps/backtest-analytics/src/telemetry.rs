//! Tracing setup.
//!
//! Installs a console `tracing-subscriber` driven by [`LoggingConfig`].
//! `RUST_LOG` overrides the configured level.
//!
//! # Usage
//!
//! ```rust,ignore
//! use backtest_analytics::{config::LoggingConfig, telemetry::init_logging};
//!
//! init_logging(&LoggingConfig::default());
//! ```

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Initialize console logging.
///
/// Returns `false` when a global subscriber was already installed, in which
/// case the existing one stays in place.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    let installed = match config.format.as_str() {
        "json" => builder.json().try_init(),
        "pretty" => builder.pretty().try_init(),
        _ => builder.compact().try_init(),
    }
    .is_ok();

    if installed {
        tracing::debug!(level = %config.level, format = %config.format, "Logging initialized");
    }
    installed
}
