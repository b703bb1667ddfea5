// Display formatting shared by the panels and the native chart.
use chrono::{DateTime, NaiveDate, Utc};

/// FX rates are conventionally quoted to four decimal places.
pub fn format_price(value: f64) -> String {
    format!("{:.4}", value)
}

/// Classifier confidence, two decimal places.
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M UTC").to_string()
}
