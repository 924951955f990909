//! Run aggregator.
//!
//! Discovers a run directory under `<base>/logs`, drives the record
//! normalizers over its artifacts, and assembles one [`RunSummary`] through
//! the metrics engine.
//!
//! The aggregator assumes the producing execution has finished writing the
//! run directory. Different run directories can be summarized concurrently;
//! every summary is a fresh value.

mod aggregate;
mod locator;

pub use aggregate::{
    AggregatorOptions, DEFAULT_LOGS_DIR, RunAggregator, RunSummary, aggregate_run, summarize_runs,
};
pub use locator::{
    DEFAULT_RUN_PREFIX, FixedRunLocator, LatestRunLocator, RunLocator, compare_run_names, list_runs,
};
