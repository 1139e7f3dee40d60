//! Utilities for date formatting and parsing
//!
//! Dates travel as `YYYY-MM-DD` between inputs and filters; labels use the
//! short English month form ("Jan 05, 2024").

use chrono::NaiveDate;

const INPUT_FORMAT: &str = "%Y-%m-%d";
const LABEL_FORMAT: &str = "%b %d, %Y";

/// Parse the value of a native date input; empty or invalid means "unset"
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), INPUT_FORMAT).ok()
}

/// Value for a native date input
pub fn format_date_input(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

/// Format a date as "Jan 05, 2024"
pub fn format_date_label(date: NaiveDate) -> String {
    date.format(LABEL_FORMAT).to_string()
}

/// Caption of the date range button
/// Example: (2024-01-01, 2024-01-31) -> "Jan 01, 2024 - Jan 31, 2024"
pub fn format_range_label(from: Option<NaiveDate>, to: Option<NaiveDate>) -> String {
    match (from, to) {
        (Some(from), Some(to)) => format!("{} - {}", format_date_label(from), format_date_label(to)),
        (Some(from), None) => format_date_label(from),
        (None, _) => "Select Date Range".to_string(),
    }
}
