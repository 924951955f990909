//! Record normalizers for a run directory's artifacts.
//!
//! Each normalizer reads one artifact with the tolerant primitive readers
//! and shapes it into typed records. None of them fail: a missing or
//! corrupt artifact yields an empty result and a debug log line.

mod orders;
mod positions;
mod prices;
mod run_info;
mod trades;

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::artifacts::{Record, try_read_delimited, try_read_json};

pub use orders::{COMPLETED_STATUS, normalize_orders};
pub use positions::{normalize_current_position, normalize_positions};
pub use prices::{OHLCV_COLUMNS, normalize_price_series};
pub use run_info::normalize_run_info;
pub use trades::{normalize_trades, normalize_value_series, read_closed_trades};

/// Account value log (dt, value, cash).
pub const VALUE_LOG: &str = "value.log";
/// Closed trade log.
pub const TRADE_LOG: &str = "trade.log";
/// Order status log.
pub const ORDER_LOG: &str = "order.log";
/// Price and indicator log.
pub const DATA_LOG: &str = "data.log";
/// Position history log.
pub const POSITION_LOG: &str = "position.log";
/// Position snapshot at the end of the run.
pub const CURRENT_POSITION_FILE: &str = "current_position.json";
/// Run metadata.
pub const RUN_INFO_FILE: &str = "run_info.json";

/// Read one delimited log of the run, empty when unavailable.
fn read_log(run_dir: &Path, file_name: &str) -> Vec<Record> {
    let path = run_dir.join(file_name);
    match try_read_delimited(&path) {
        Ok(records) => {
            debug!(path = %path.display(), rows = records.len(), "Read run log");
            records
        }
        Err(e) => {
            debug!(error = %e, "Run log unavailable, using empty series");
            Vec::new()
        }
    }
}

/// Decode one JSON artifact of the run, `None` when unavailable.
fn read_snapshot<T: DeserializeOwned>(run_dir: &Path, file_name: &str) -> Option<T> {
    let path = run_dir.join(file_name);
    match try_read_json(&path) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(error = %e, "Run snapshot unavailable, using default");
            None
        }
    }
}
