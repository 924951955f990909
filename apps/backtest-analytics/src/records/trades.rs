//! Value series and trade log normalization.

use std::path::Path;

use crate::analytics::process_trades;
use crate::artifacts::{Record, date_part, is_truthy, safe_float};
use crate::models::{EquityPoint, RawTrade, TradeDirection, TradeRecord};

use super::{TRADE_LOG, VALUE_LOG, read_log};

/// Equity points from `value.log`, one per row.
#[must_use]
pub fn normalize_value_series(run_dir: &Path) -> Vec<EquityPoint> {
    read_log(run_dir, VALUE_LOG)
        .iter()
        .map(|row| {
            EquityPoint::new(
                date_part(row.field("dt")),
                row.float("value"),
                row.float("cash"),
            )
        })
        .collect()
}

/// Closed trades from `trade.log` with ids and running P&L.
#[must_use]
pub fn normalize_trades(run_dir: &Path) -> Vec<TradeRecord> {
    process_trades(&read_closed_trades(run_dir))
}

/// Closed trades from `trade.log` as logged, before id assignment.
#[must_use]
pub fn read_closed_trades(run_dir: &Path) -> Vec<RawTrade> {
    read_log(run_dir, TRADE_LOG)
        .iter()
        .filter(|row| is_truthy(row.field("isclosed")))
        .map(raw_trade)
        .collect()
}

fn raw_trade(row: &Record) -> RawTrade {
    let closed_at = match row.field("dtclose") {
        "" => row.field("dtopen"),
        dt => dt,
    };
    let direction = if is_truthy(row.field("long")) {
        TradeDirection::Long
    } else {
        TradeDirection::Short
    };

    RawTrade {
        datetime: date_part(closed_at),
        direction,
        price: row.float("price"),
        size: row.float("size"),
        value: row.float("value"),
        commission: row.float("commission"),
        pnl: row.float("pnl"),
        pnlcomm: row.float("pnlcomm"),
        barlen: safe_float(row.get("barlen")).max(0.0) as u64,
    }
}
