//! Easter Sunday via the anonymous Gregorian algorithm.

use chrono::NaiveDate;

use crate::error::{Result, VoyError};

/// Compute the (month, day) of Easter Sunday for `year`.
///
/// Integer arithmetic with floor division and floor modulo throughout, so
/// the result is defined for every year, including negative (proleptic) ones.
/// Month is always 3 or 4; day is 22..=31 in March and 1..=25 in April.
pub fn easter_month_day(year: i32) -> (u32, u32) {
    let y = i64::from(year);
    let g = y.rem_euclid(19);
    let c = y.div_euclid(100);
    let h = (c - c.div_euclid(4) - (8 * c + 13).div_euclid(25) + 19 * g + 15).rem_euclid(30);
    let i = h - h.div_euclid(28) * (1 - 29_i64.div_euclid(h + 1) * (21 - g).div_euclid(11));
    let j = (y + y.div_euclid(4) + i + 2 - c + c.div_euclid(4)).rem_euclid(7);
    let l = i - j;
    let month = 3 + (l + 40).div_euclid(44);
    let day = l + 28 - 31 * month.div_euclid(4);

    (month as u32, day as u32)
}

/// Date of Easter Sunday for `year`.
///
/// # Errors
///
/// Returns `VoyError::InvalidInput` if `year` is outside the range chrono
/// can represent.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use voy_core::calendar::easter_sunday;
///
/// let easter = easter_sunday(2024).unwrap();
/// assert_eq!(easter, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
/// ```
pub fn easter_sunday(year: i32) -> Result<NaiveDate> {
    let (month, day) = easter_month_day(year);
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| unsupported_year(year))
}

pub(crate) fn unsupported_year(year: i32) -> VoyError {
    VoyError::InvalidInput(format!(
        "Year {} is outside the supported calendar range",
        year
    ))
}
