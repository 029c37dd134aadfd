//! Calendar-date helpers.
//!
//! Everything here works on `NaiveDate` (year/month/day only), so there is no
//! time zone or DST transition that could shift a date by one.

use chrono::{Days, NaiveDate};

use super::AlignError;

/// Parse a `YYYY-MM-DD` anchor date.
///
/// The date must exist on the calendar. chrono's `%Y-%m-%d` also accepts
/// unpadded month/day, leading whitespace, and a leading `+` on the year.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, AlignError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| AlignError::MalformedAnchor {
        value: value.to_string(),
    })
}

/// `date + days`, rolling over month and year boundaries.
pub fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate, AlignError> {
    date.checked_add_days(Days::new(days))
        .ok_or(AlignError::OutOfRange { date, days })
}

/// Short display label: month abbreviation plus zero-padded day, e.g. `"Feb 03"`.
pub fn format_label(date: NaiveDate) -> String {
    date.format("%b %d").to_string()
}
