//! Shared "load and align" logic used by the CLI commands.
//!
//! fixtures -> alignment -> week_end consistency check
//!
//! Callers only deal with presentation (tables, plots, exports).

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::calendar::{align_forecast, is_aligned, parse_iso_date};
use crate::data::FixtureSource;
use crate::domain::{AlignedForecastRow, DayName, ForecastMeta, ForecastRow};
use crate::error::AppError;

/// All computed outputs of a single `airpol align` run.
#[derive(Debug, Clone)]
pub struct AlignRun {
    pub meta: ForecastMeta,
    pub rows: Vec<ForecastRow>,
    pub aligned: Vec<AlignedForecastRow>,
}

/// Load both fixtures from `source` and align them.
pub fn run_align(source: &FixtureSource, forecast_name: &str, meta_name: &str) -> Result<AlignRun, AppError> {
    let rows = source.load_forecast(forecast_name)?;
    let meta = source.load_meta(meta_name)?;
    Ok(align_loaded(meta, rows))
}

/// Align already-loaded fixtures.
pub fn align_loaded(meta: ForecastMeta, rows: Vec<ForecastRow>) -> AlignRun {
    let aligned = align_forecast(meta.week_start.as_deref(), &rows);
    if is_aligned(&aligned) {
        info!(
            first = ?aligned.first().and_then(|r| r.date),
            last = ?aligned.last().and_then(|r| r.date),
            "forecast aligned to calendar dates"
        );
        check_week_end(&meta, &aligned);
    }
    AlignRun { meta, rows, aligned }
}

/// Warn when the aligned window does not end on the meta `week_end`.
///
/// Returns the mismatching `(week_end, last aligned date)` pair, if any.
pub fn check_week_end(meta: &ForecastMeta, aligned: &[AlignedForecastRow]) -> Option<(NaiveDate, NaiveDate)> {
    let week_end = parse_iso_date(meta.week_end.as_deref()?).ok()?;
    let last = aligned.last()?.date?;
    if last == week_end {
        return None;
    }
    warn!(%week_end, %last, "aligned forecast window does not end on meta week_end");
    Some((week_end, last))
}

/// A 7-row series whose first row claims `first_day`, for checking an anchor by hand.
///
/// Later rows continue the weekday cycle when `first_day` is recognized.
pub fn synthetic_week(first_day: &str) -> Vec<ForecastRow> {
    let start = DayName::from_prefix(first_day);
    (0..7usize)
        .map(|i| {
            let day = match (i, start) {
                (0, _) => first_day.to_string(),
                (_, Some(d)) => DayName::ALL[(d.index() as usize + i) % 7].to_string(),
                (_, None) => "?".to_string(),
            };
            ForecastRow::new(day, None, 0.0)
        })
        .collect()
}
