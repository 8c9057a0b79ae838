//! Text output formatting for holidays.

use voy_core::calendar::Language;
use voy_core::Holiday;

use crate::ui::{kv, print, Column, UiContext};

pub fn holiday_columns() -> [Column; 4] {
    [
        Column::new("Date"),
        Column::new("Day"),
        Column::new("Type"),
        Column::new("Name"),
    ]
}

fn kind(holiday: &Holiday) -> &'static str {
    if holiday.is_fixed {
        "fixed"
    } else {
        "movable"
    }
}

/// One row per holiday, matching [`holiday_columns`].
pub fn holiday_rows(holidays: &[Holiday], language: Language) -> Vec<Vec<String>> {
    holidays
        .iter()
        .map(|holiday| {
            vec![
                holiday.date.to_string(),
                holiday.date.format("%a").to_string(),
                kind(holiday).to_string(),
                holiday.name(language).to_string(),
            ]
        })
        .collect()
}

/// Print a single holiday as key-value lines.
pub fn print_holiday(ctx: &UiContext, holiday: &Holiday, language: Language) {
    print(ctx, &kv(ctx, "Date", &holiday.date.to_string()));
    print(ctx, &kv(ctx, "Name", holiday.name(language)));
    let other = match language {
        Language::Pt => holiday.name_en,
        Language::En => holiday.name_pt,
    };
    print(ctx, &kv(ctx, "Also", other));
    print(ctx, &kv(ctx, "Type", kind(holiday)));
}
