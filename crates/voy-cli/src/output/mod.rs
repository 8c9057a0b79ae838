//! Output formatting helpers for the CLI.
//!
//! JSON shapes for machine output and row/line builders for text output.

mod json;
mod text;

pub use json::{holiday_check_json, holiday_json, holidays_json, offense_json};
pub use text::{holiday_columns, holiday_rows, print_holiday};
