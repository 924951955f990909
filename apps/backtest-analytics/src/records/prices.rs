//! Price and indicator log normalization.

use std::collections::BTreeMap;
use std::path::Path;

use crate::artifacts::{date_part, parse_finite};
use crate::models::{Ohlc, PriceSeries};

use super::{DATA_LOG, read_log};

/// Fixed columns of `data.log`; every other column is an indicator.
pub const OHLCV_COLUMNS: [&str; 6] = ["dt", "open", "high", "low", "close", "volume"];

/// Parallel price, volume and indicator series from `data.log`.
///
/// Malformed OHLCV cells become 0.0. Indicator cells that are not finite
/// numbers (warm-up `nan`, blanks) become `None`.
#[must_use]
pub fn normalize_price_series(run_dir: &Path) -> PriceSeries {
    let rows = read_log(run_dir, DATA_LOG);
    let Some(first) = rows.first() else {
        return PriceSeries::default();
    };

    let indicator_columns: Vec<String> = first
        .headers()
        .iter()
        .filter(|h| !h.is_empty() && !OHLCV_COLUMNS.contains(&h.as_str()))
        .cloned()
        .collect();

    let mut series = PriceSeries {
        dates: Vec::with_capacity(rows.len()),
        ohlc: Vec::with_capacity(rows.len()),
        volumes: Vec::with_capacity(rows.len()),
        indicators: indicator_columns
            .iter()
            .map(|name| (name.clone(), Vec::with_capacity(rows.len())))
            .collect::<BTreeMap<_, _>>(),
    };

    for row in &rows {
        series.dates.push(date_part(row.field("dt")));
        series.ohlc.push(Ohlc {
            open: row.float("open"),
            high: row.float("high"),
            low: row.float("low"),
            close: row.float("close"),
        });
        series.volumes.push(row.float("volume"));
        for (name, values) in &mut series.indicators {
            values.push(parse_finite(row.get(name)));
        }
    }

    series
}
