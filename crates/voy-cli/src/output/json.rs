//! JSON output formatting.

use chrono::NaiveDate;
use voy_core::{Holiday, OffenseCheck};

/// Convert a holiday to JSON for output.
pub fn holiday_json(holiday: &Holiday) -> serde_json::Value {
    serde_json::json!({
        "date": holiday.date.to_string(),
        "weekday": holiday.date.format("%A").to_string(),
        "name_pt": holiday.name_pt,
        "name_en": holiday.name_en,
        "is_fixed": holiday.is_fixed,
    })
}

/// Convert multiple holidays to a JSON array for output.
pub fn holidays_json(holidays: &[Holiday]) -> Vec<serde_json::Value> {
    holidays.iter().map(holiday_json).collect()
}

/// Result of `holidays check`.
pub fn holiday_check_json(date: NaiveDate, holiday: Option<&Holiday>) -> serde_json::Value {
    serde_json::json!({
        "date": date.to_string(),
        "is_holiday": holiday.is_some(),
        "holiday": holiday.map(holiday_json),
    })
}

/// Result of `moderate check`.
pub fn offense_json(check: &OffenseCheck) -> serde_json::Value {
    serde_json::json!({
        "is_offensive": check.is_offensive,
        "matched_word": check.matched_word,
        "match_kind": check.match_kind,
    })
}
