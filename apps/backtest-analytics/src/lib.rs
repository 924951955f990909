// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::cast_precision_loss,
        clippy::format_push_string,
        clippy::items_after_statements
    )
)]

//! Backtest Analytics - Rust Core Library
//!
//! Post-run analysis of backtest output directories.
//!
//! A backtest execution writes one directory per run under `<base>/logs/`,
//! holding tab-delimited logs (`value.log`, `trade.log`, `order.log`,
//! `data.log`, `position.log`) and JSON snapshots (`current_position.json`,
//! `run_info.json`). This crate turns such a directory into a single
//! [`RunSummary`].
//!
//! ## Layers (inside → outside)
//!
//! - **Primitive readers** (`artifacts`): tolerant delimited/JSON readers and
//!   number coercion. Never fail.
//! - **Record normalizers** (`records`): typed records per artifact.
//! - **Metrics engine** (`analytics`): pure functions over typed series,
//!   shared with in-memory callers.
//! - **Run aggregator** (`run`): locates a run and assembles its summary.
//!
//! Around those sit `config` (YAML settings) and `telemetry` (logging).

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Metrics engine over equity curves, trades, and price bars.
pub mod analytics;

/// Tolerant primitive readers for run artifacts.
pub mod artifacts;

/// YAML configuration loading and validation.
pub mod config;

/// Artifact read errors.
pub mod error;

/// Typed value records.
pub mod models;

/// Per-artifact record normalizers.
pub mod records;

/// Run discovery and summary assembly.
pub mod run;

/// Logging setup.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

pub use analytics::{
    IndicatorSeries, compute_drawdown_curve, compute_indicators, compute_max_consecutive,
    compute_max_drawdown, compute_metrics, compute_monthly_returns, compute_sharpe,
    extract_signals, process_trades,
};
pub use config::{AnalyticsConfig, ConfigError, load_config, load_config_from_string};
pub use error::ArtifactError;
pub use models::{
    DrawdownPoint, EquityPoint, Kline, MonthlyReturns, OrderRecord, OrderSide, PerformanceMetrics,
    PositionSnapshot, PriceSeries, RawTrade, RunInfo, Signal, TradeDirection, TradeRecord,
};
pub use run::{
    AggregatorOptions, FixedRunLocator, LatestRunLocator, RunAggregator, RunLocator, RunSummary,
    aggregate_run, summarize_runs,
};
