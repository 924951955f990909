//! Order log normalization.

use std::path::Path;

use crate::artifacts::date_part;
use crate::models::{OrderRecord, OrderSide};

use super::{ORDER_LOG, read_log};

/// Terminal status of an executed order.
pub const COMPLETED_STATUS: &str = "Completed";

/// Completed orders from `order.log`, in log order.
///
/// Orders in any other status are dropped. Timestamps are truncated to
/// their date.
#[must_use]
pub fn normalize_orders(run_dir: &Path) -> Vec<OrderRecord> {
    read_log(run_dir, ORDER_LOG)
        .iter()
        .filter(|row| row.field("status").eq_ignore_ascii_case(COMPLETED_STATUS))
        .map(|row| {
            let size = row.float("size");
            OrderRecord {
                order_ref: row.field("ref").to_string(),
                order_type: OrderSide::from_raw(row.field("ordtype"), size),
                size,
                executed_price: row.float("executed_price"),
                commission: row.float("commission"),
                dt: date_part(row.field("dt")),
                data_name: row.field("data_name").to_string(),
            }
        })
        .collect()
}
