//! Formatting utilities for performance metrics display.

/// Format a fraction as percentage string.
#[must_use]
pub fn format_pct(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Format an amount with 2 decimal places.
#[must_use]
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

/// Format an optional ratio.
#[must_use]
pub fn format_ratio(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| format!("{v:.2}"))
}
