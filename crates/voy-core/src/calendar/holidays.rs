//! Holiday generation and lookup.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::easter::{easter_sunday, unsupported_year};
use crate::error::{Result, VoyError};

/// Number of national holidays in any year (10 fixed + 3 movable).
pub const HOLIDAYS_PER_YEAR: usize = 13;

/// Fixed holidays as (month, day, Portuguese name, English name).
const FIXED_HOLIDAYS: [(u32, u32, &str, &str); 10] = [
    (1, 1, "Ano Novo", "New Year's Day"),
    (4, 25, "Dia da Liberdade", "Freedom Day"),
    (5, 1, "Dia do Trabalhador", "Labour Day"),
    (6, 10, "Dia de Portugal", "Portugal Day"),
    (8, 15, "Assunção de Nossa Senhora", "Assumption Day"),
    (10, 5, "Implantação da República", "Republic Day"),
    (11, 1, "Dia de Todos os Santos", "All Saints' Day"),
    (12, 1, "Restauração da Independência", "Restoration of Independence"),
    (12, 8, "Imaculada Conceição", "Immaculate Conception"),
    (12, 25, "Natal", "Christmas Day"),
];

/// Language used when a single display name is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    Pt,
    En,
}

/// A national public holiday in Portugal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Holiday {
    /// Calendar date (serialized as `YYYY-MM-DD`)
    pub date: NaiveDate,
    /// Official Portuguese name
    pub name_pt: &'static str,
    /// English name
    pub name_en: &'static str,
    /// `true` for fixed month/day holidays, `false` for Easter-derived ones
    pub is_fixed: bool,
}

impl Holiday {
    fn fixed(date: NaiveDate, name_pt: &'static str, name_en: &'static str) -> Self {
        Self {
            date,
            name_pt,
            name_en,
            is_fixed: true,
        }
    }

    fn movable(date: NaiveDate, name_pt: &'static str, name_en: &'static str) -> Self {
        Self {
            date,
            name_pt,
            name_en,
            is_fixed: false,
        }
    }

    /// Display name in the requested language.
    pub fn name(&self, language: Language) -> &'static str {
        match language {
            Language::Pt => self.name_pt,
            Language::En => self.name_en,
        }
    }
}

/// All national holidays of `year`, ascending by date.
///
/// Always 13 entries. When a movable feast lands on a fixed holiday
/// (Corpus Christi on 10 June, Easter on 25 April) both entries are kept and
/// the fixed one comes first.
///
/// # Errors
///
/// Returns `VoyError::InvalidInput` if `year` is outside the range chrono
/// can represent. Every other year is accepted without validation.
///
/// # Examples
///
/// ```
/// use voy_core::calendar::portugal_holidays;
///
/// let holidays = portugal_holidays(2024).unwrap();
/// assert_eq!(holidays.len(), 13);
/// assert_eq!(holidays[0].name_pt, "Ano Novo");
/// ```
pub fn portugal_holidays(year: i32) -> Result<Vec<Holiday>> {
    let mut holidays = Vec::with_capacity(HOLIDAYS_PER_YEAR);

    for (month, day, name_pt, name_en) in FIXED_HOLIDAYS {
        let date =
            NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| unsupported_year(year))?;
        holidays.push(Holiday::fixed(date, name_pt, name_en));
    }

    let easter = easter_sunday(year)?;
    let good_friday = easter
        .checked_sub_days(Days::new(2))
        .ok_or_else(|| unsupported_year(year))?;
    let corpus_christi = easter
        .checked_add_days(Days::new(60))
        .ok_or_else(|| unsupported_year(year))?;

    holidays.push(Holiday::movable(good_friday, "Sexta-feira Santa", "Good Friday"));
    holidays.push(Holiday::movable(easter, "Páscoa", "Easter Sunday"));
    holidays.push(Holiday::movable(corpus_christi, "Corpo de Deus", "Corpus Christi"));

    // Stable sort keeps fixed holidays ahead of movable ones on a shared date
    holidays.sort_by_key(|holiday| holiday.date);

    Ok(holidays)
}

/// The holiday falling on `date`, if any.
///
/// Accepts anything with a calendar date (`NaiveDate`, `NaiveDateTime`,
/// `DateTime<Tz>`); the time of day is ignored.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use voy_core::calendar::is_portugal_holiday;
///
/// let freedom_day = NaiveDate::from_ymd_opt(2024, 4, 25).unwrap();
/// assert_eq!(is_portugal_holiday(freedom_day).unwrap().name_pt, "Dia da Liberdade");
///
/// let ordinary_day = NaiveDate::from_ymd_opt(2024, 4, 26).unwrap();
/// assert!(is_portugal_holiday(ordinary_day).is_none());
/// ```
pub fn is_portugal_holiday(date: impl Datelike) -> Option<Holiday> {
    let day = NaiveDate::from_ymd_opt(date.year(), date.month(), date.day())?;
    portugal_holidays(day.year())
        .ok()?
        .into_iter()
        .find(|holiday| holiday.date == day)
}

/// Holidays with `from <= date <= to`, ascending by date.
///
/// Spans year boundaries. Returns an empty list when `from > to`.
///
/// # Errors
///
/// Returns `VoyError::InvalidInput` if a year in the range cannot be
/// represented.
pub fn holidays_between(from: NaiveDate, to: NaiveDate) -> Result<Vec<Holiday>> {
    if from > to {
        return Ok(Vec::new());
    }

    let mut holidays = Vec::new();
    for year in from.year()..=to.year() {
        holidays.extend(
            portugal_holidays(year)?
                .into_iter()
                .filter(|holiday| holiday.date >= from && holiday.date <= to),
        );
    }

    Ok(holidays)
}

/// The first holiday strictly after `after`.
///
/// # Errors
///
/// Returns `VoyError::InvalidInput` if the following year cannot be
/// represented.
pub fn next_holiday(after: NaiveDate) -> Result<Holiday> {
    let year = after.year();
    for candidate_year in [year, year + 1] {
        if let Some(holiday) = portugal_holidays(candidate_year)?
            .into_iter()
            .find(|holiday| holiday.date > after)
        {
            return Ok(holiday);
        }
    }

    // Christmas of `year` or any holiday of `year + 1` always qualifies
    Err(VoyError::InvalidInput(format!(
        "No holiday found after {}",
        after
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn find<'a>(holidays: &'a [Holiday], name_en: &str) -> &'a Holiday {
        holidays
            .iter()
            .find(|h| h.name_en == name_en)
            .unwrap_or_else(|| panic!("missing {}", name_en))
    }

    #[test]
    fn test_2024_has_thirteen_sorted_holidays() {
        let holidays = portugal_holidays(2024).unwrap();
        assert_eq!(holidays.len(), HOLIDAYS_PER_YEAR);
        assert!(holidays.windows(2).all(|pair| pair[0].date <= pair[1].date));
        assert_eq!(holidays.iter().filter(|h| h.is_fixed).count(), 10);
    }

    #[test]
    fn test_2024_fixed_points() {
        let holidays = portugal_holidays(2024).unwrap();
        assert_eq!(find(&holidays, "New Year's Day").date, date(2024, 1, 1));
        assert_eq!(find(&holidays, "Christmas Day").date, date(2024, 12, 25));
        assert_eq!(holidays.first().unwrap().date, date(2024, 1, 1));
        assert_eq!(holidays.last().unwrap().date, date(2024, 12, 25));
    }

    #[test]
    fn test_2024_movable_holidays() {
        let holidays = portugal_holidays(2024).unwrap();

        let easter = find(&holidays, "Easter Sunday");
        assert_eq!(easter.date, date(2024, 3, 31));
        assert!(!easter.is_fixed);

        assert_eq!(find(&holidays, "Good Friday").date, date(2024, 3, 29));
        assert_eq!(find(&holidays, "Corpus Christi").date, date(2024, 5, 30));
    }

    #[test]
    fn test_is_holiday_freedom_day() {
        let holiday = is_portugal_holiday(date(2024, 4, 25)).unwrap();
        assert_eq!(holiday.name_pt, "Dia da Liberdade");
        assert!(holiday.is_fixed);
    }

    #[test]
    fn test_is_holiday_ordinary_day() {
        assert!(is_portugal_holiday(date(2024, 4, 26)).is_none());
    }

    #[test]
    fn test_is_holiday_ignores_time_of_day() {
        let late_evening =
            NaiveDateTime::parse_from_str("2024-12-25 23:59:59", "%Y-%m-%d %H:%M:%S").unwrap();
        let holiday = is_portugal_holiday(late_evening).unwrap();
        assert_eq!(holiday.name_pt, "Natal");
    }

    #[test]
    fn test_is_holiday_movable_feast() {
        let holiday = is_portugal_holiday(date(2024, 3, 29)).unwrap();
        assert_eq!(holiday.name_pt, "Sexta-feira Santa");
        assert!(!holiday.is_fixed);
    }

    #[test]
    fn test_shared_date_keeps_both_entries_fixed_first() {
        // Easter 2004 fell on 11 April, putting Corpus Christi on Portugal Day
        let holidays = portugal_holidays(2004).unwrap();
        assert_eq!(holidays.len(), HOLIDAYS_PER_YEAR);

        let on_june_10: Vec<_> = holidays
            .iter()
            .filter(|h| h.date == date(2004, 6, 10))
            .collect();
        assert_eq!(on_june_10.len(), 2);
        assert!(on_june_10[0].is_fixed);
        assert_eq!(on_june_10[1].name_en, "Corpus Christi");

        let lookup = is_portugal_holiday(date(2004, 6, 10)).unwrap();
        assert_eq!(lookup.name_pt, "Dia de Portugal");
    }

    #[test]
    fn test_holidays_between_spans_years() {
        let holidays = holidays_between(date(2024, 12, 20), date(2025, 1, 5)).unwrap();
        let dates: Vec<_> = holidays.iter().map(|h| h.date).collect();
        assert_eq!(dates, vec![date(2024, 12, 25), date(2025, 1, 1)]);
    }

    #[test]
    fn test_holidays_between_is_inclusive() {
        let holidays = holidays_between(date(2024, 4, 25), date(2024, 5, 1)).unwrap();
        assert_eq!(holidays.len(), 2);
    }

    #[test]
    fn test_holidays_between_reversed_range_is_empty() {
        let holidays = holidays_between(date(2024, 12, 31), date(2024, 1, 1)).unwrap();
        assert!(holidays.is_empty());
    }

    #[test]
    fn test_next_holiday_same_year() {
        let next = next_holiday(date(2024, 4, 25)).unwrap();
        assert_eq!(next.date, date(2024, 5, 1));
    }

    #[test]
    fn test_next_holiday_rolls_into_next_year() {
        let next = next_holiday(date(2024, 12, 25)).unwrap();
        assert_eq!(next.date, date(2025, 1, 1));
        assert_eq!(next.name_en, "New Year's Day");
    }

    #[test]
    fn test_name_by_language() {
        let holiday = is_portugal_holiday(date(2024, 6, 10)).unwrap();
        assert_eq!(holiday.name(Language::Pt), "Dia de Portugal");
        assert_eq!(holiday.name(Language::En), "Portugal Day");
    }

    #[test]
    fn test_holiday_serializes_date_as_iso() {
        let holiday = is_portugal_holiday(date(2024, 1, 1)).unwrap();
        let value = serde_json::to_value(&holiday).unwrap();
        assert_eq!(value["date"], "2024-01-01");
        assert_eq!(value["name_en"], "New Year's Day");
        assert_eq!(value["is_fixed"], true);
    }
}
