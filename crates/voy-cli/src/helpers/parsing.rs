//! Argument parsing helpers.

use chrono::{DateTime, NaiveDate};

use crate::errors::CliError;

/// Parse a calendar date from `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// Timestamps keep their own calendar date; no timezone conversion is done.
pub fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.date_naive());
    }

    Err(CliError::invalid_input(format!(
        "Invalid date (expected YYYY-MM-DD or RFC 3339): {}",
        value
    ))
    .into())
}
