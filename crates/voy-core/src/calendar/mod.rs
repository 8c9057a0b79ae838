//! Portuguese public holiday calendar.
//!
//! Ten holidays sit on fixed month/day pairs. Three more move with Easter:
//! Good Friday (Easter - 2 days), Easter Sunday itself and Corpus Christi
//! (Easter + 60 days). Easter is computed with the anonymous Gregorian
//! (Gauss) algorithm in [`easter`].
//!
//! Everything here is pure: holidays are generated on demand per year and
//! never persisted.

pub mod easter;
mod holidays;

pub use easter::easter_sunday;
pub use holidays::{
    holidays_between, is_portugal_holiday, next_holiday, portugal_holidays, Holiday, Language,
};
