//! Reconstruct concrete dates for a 7-day forecast series.
//!
//! The series only carries a week-start anchor and a weekday name per row. The
//! first row's weekday may not be the anchor's weekday, so the first date is the
//! earliest day on or after the anchor whose weekday matches row 0. The other
//! rows follow on consecutive days.

use chrono::NaiveDate;
use tracing::debug;

use super::dates::{add_days, format_label, parse_iso_date};
use super::{AlignError, FORECAST_DAYS};
use crate::domain::{AlignedForecastRow, DayName, ForecastRow, WeekAnchor};

impl WeekAnchor {
    /// Parse an optional `week_start` value from forecast metadata.
    pub fn parse(week_start: Option<&str>) -> Result<Self, AlignError> {
        let value = week_start.ok_or(AlignError::MissingAnchor)?;
        Ok(Self {
            week_start: parse_iso_date(value)?,
        })
    }
}

/// Days to advance from `week_start` to reach the weekday named by `first_day`.
///
/// Always in `0..7`. An unrecognized name yields `0` (the anchor is trusted).
pub fn weekday_offset(week_start: NaiveDate, first_day: &str) -> u32 {
    let Some(first) = DayName::from_prefix(first_day) else {
        return 0;
    };
    let start = DayName::of_date(week_start);
    (first.index() + 7 - start.index()) % 7
}

/// Align `rows` to calendar dates, or report why the series cannot be aligned.
pub fn try_align_forecast(
    week_start: Option<&str>,
    rows: &[ForecastRow],
) -> Result<Vec<AlignedForecastRow>, AlignError> {
    if rows.len() != FORECAST_DAYS {
        return Err(AlignError::RowCount { found: rows.len() });
    }
    let anchor = WeekAnchor::parse(week_start)?;
    let offset = u64::from(weekday_offset(anchor.week_start, &rows[0].day));

    let mut out = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let date = add_days(anchor.week_start, offset + i as u64)?;
        out.push(AlignedForecastRow::dated(row, date, format_label(date)));
    }
    Ok(out)
}

/// Rows labelled by their own `day` text, without dates.
pub fn fallback_labels(rows: &[ForecastRow]) -> Vec<AlignedForecastRow> {
    rows.iter().map(AlignedForecastRow::undated).collect()
}

/// Align `rows` to calendar dates, falling back to raw day labels.
///
/// Never fails: an invalid anchor or row count produces `fallback_labels`, so
/// the result is either fully dated or fully undated.
pub fn align_forecast(week_start: Option<&str>, rows: &[ForecastRow]) -> Vec<AlignedForecastRow> {
    match try_align_forecast(week_start, rows) {
        Ok(aligned) => aligned,
        Err(err) => {
            debug!(error = %err, "forecast alignment skipped; using day labels");
            fallback_labels(rows)
        }
    }
}

/// True when every row carries a concrete date.
pub fn is_aligned(rows: &[AlignedForecastRow]) -> bool {
    !rows.is_empty() && rows.iter().all(|r| r.date.is_some())
}
