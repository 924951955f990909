//! Calendar-month returns and their yearly roll-up.

use std::collections::BTreeMap;

use chrono::Datelike;

use crate::artifacts::parse_date;
use crate::models::{EquityPoint, MonthlyReturn, MonthlyReturns};

/// Group the curve by calendar month and compute each month's return.
///
/// A month's return is measured from the previous month's closing value,
/// or from its own opening value for the first month. Points with an
/// unparseable date are skipped.
#[must_use]
pub fn compute_monthly_returns(equity_curve: &[EquityPoint]) -> MonthlyReturns {
    // (year, month) -> (first value, last value)
    let mut months: BTreeMap<(i32, u32), (f64, f64)> = BTreeMap::new();
    for point in equity_curve {
        let Some(date) = parse_date(&point.date) else {
            continue;
        };
        months
            .entry((date.year(), date.month()))
            .and_modify(|(_, last)| *last = point.total_assets)
            .or_insert((point.total_assets, point.total_assets));
    }

    let mut entries = Vec::with_capacity(months.len());
    let mut previous_close: Option<f64> = None;
    for ((year, month), (open, close)) in months {
        let base = previous_close.unwrap_or(open);
        let value = if base > 0.0 { close / base - 1.0 } else { 0.0 };
        entries.push(MonthlyReturn { year, month, value });
        previous_close = Some(close);
    }

    let mut yearly: BTreeMap<i32, f64> = BTreeMap::new();
    for entry in &entries {
        let growth = yearly.entry(entry.year).or_insert(1.0);
        *growth *= 1.0 + entry.value;
    }
    for growth in yearly.values_mut() {
        *growth -= 1.0;
    }

    MonthlyReturns {
        years: yearly.keys().copied().collect(),
        entries,
        yearly,
    }
}
