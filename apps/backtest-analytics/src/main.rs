//! Backtest Analytics Binary
//!
//! Summarizes backtest run directories.
//!
//! # Usage
//!
//! ```bash
//! backtest-analytics [BASE_DIR] [--all] [--json]
//! ```
//!
//! - `BASE_DIR`: directory containing `logs/` (default: `.`)
//! - `--all`: summarize every run instead of the latest one
//! - `--json`: print summaries as pretty JSON
//!
//! # Environment Variables
//!
//! - `ANALYTICS_CONFIG`: config file path (default: `analytics.yaml`, optional)
//! - `RUST_LOG`: log level (overrides the configured level)

use std::path::PathBuf;

use anyhow::Context;
use backtest_analytics::analytics::{format_amount, format_pct, format_ratio, ma_key};
use backtest_analytics::config::{AnalyticsConfig, CONFIG_PATH_ENV, load_config};
use backtest_analytics::run::{RunAggregator, RunSummary};
use backtest_analytics::telemetry::init_logging;
use clap::Parser;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "backtest-analytics")]
#[command(about = "Summarize backtest run directories")]
struct CliArgs {
    /// Directory containing `logs/`
    #[arg(default_value = ".")]
    base_dir: PathBuf,

    /// Summarize every run instead of the latest one
    #[arg(long)]
    all: bool,

    /// Print summaries as pretty JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    load_dotenv();

    let config = resolve_config()?;
    init_logging(&config.observability.logging);

    let aggregator = RunAggregator::from_options(config.aggregator_options());
    tracing::info!(
        base_dir = %args.base_dir.display(),
        logs_dir = %aggregator.options().logs_dir,
        all = args.all,
        "Starting backtest analytics"
    );

    let summaries = if args.all {
        aggregator.summarize_all(&args.base_dir)
    } else {
        aggregator.aggregate(&args.base_dir).into_iter().collect()
    };

    if summaries.is_empty() {
        println!("no run found");
        return Ok(());
    }

    if args.json {
        let rendered = if args.all {
            serde_json::to_string_pretty(&summaries)
        } else {
            serde_json::to_string_pretty(&summaries[0])
        }
        .context("failed to serialize run summary")?;
        println!("{rendered}");
    } else {
        for summary in &summaries {
            print_summary(summary);
        }
    }

    Ok(())
}

/// Load configuration from `ANALYTICS_CONFIG` or the default path.
///
/// A missing default file falls back to built-in defaults; a missing file
/// named explicitly is an error.
fn resolve_config() -> anyhow::Result<AnalyticsConfig> {
    let explicit = std::env::var(CONFIG_PATH_ENV).ok().filter(|p| !p.is_empty());

    match load_config(explicit.as_deref()) {
        Ok(config) => Ok(config),
        Err(e) if e.is_not_found() && explicit.is_none() => Ok(AnalyticsConfig::default()),
        Err(e) => Err(e).context("failed to load configuration"),
    }
}

fn print_summary(summary: &RunSummary) {
    let metrics = &summary.metrics;

    println!("Run: {}", summary.run_id);
    println!("  Directory:        {}", summary.run_dir.display());
    println!("  Initial capital:  {}", format_amount(metrics.initial_capital));
    println!("  Final assets:     {}", format_amount(metrics.final_assets));
    println!("  Total return:     {}", format_pct(summary.total_return));
    println!("  Trades:           {}", summary.total_trades);
    println!("  Win rate:         {}", format_pct(summary.win_rate));
    println!("  Max drawdown:     {}", format_pct(metrics.max_drawdown));
    println!("  Drawdown bars:    {}", metrics.max_drawdown_duration);
    println!("  Sharpe ratio:     {}", format_ratio(metrics.sharpe_ratio));
    println!("  Max win streak:   {}", metrics.max_consecutive_wins);
    println!("  Max loss streak:  {}", metrics.max_consecutive_losses);

    let indicators: Vec<String> = summary
        .indicators
        .iter()
        .map(|(&period, series)| {
            let status = if series.is_available() { "ok" } else { "n/a" };
            format!("{} {status}", ma_key(period))
        })
        .collect();
    if !indicators.is_empty() {
        println!("  Moving averages:  {}", indicators.join(", "));
    }
    println!();
}

/// Load `.env` from the current directory or the nearest ancestor.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let parsed = CliArgs::try_parse_from(["backtest-analytics"]).unwrap();
        assert_eq!(parsed.base_dir, PathBuf::from("."));
        assert!(!parsed.all);
        assert!(!parsed.json);
    }

    #[test]
    fn test_parse_flags_and_dir() {
        let parsed =
            CliArgs::try_parse_from(["backtest-analytics", "--json", "out", "--all"]).unwrap();
        assert_eq!(parsed.base_dir, PathBuf::from("out"));
        assert!(parsed.all);
        assert!(parsed.json);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(CliArgs::try_parse_from(["backtest-analytics", "--verbose"]).is_err());
        assert!(CliArgs::try_parse_from(["backtest-analytics", "a", "b"]).is_err());
    }
}
