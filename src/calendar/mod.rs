//! Calendar alignment for the 7-day forecast series.
//!
//! - `dates`: ISO date parsing, day arithmetic, short labels
//! - `align`: the aligner itself (fallible core + total wrapper)

use chrono::NaiveDate;

pub mod align;
pub mod dates;

pub use align::*;
pub use dates::{add_days, format_label, parse_iso_date};

/// Number of rows in a forecast series.
pub const FORECAST_DAYS: usize = 7;

/// Reasons an input series cannot be aligned to calendar dates.
///
/// These never reach the caller of [`align_forecast`]; they select the
/// fallback labelling instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlignError {
    #[error("forecast meta has no week_start")]
    MissingAnchor,
    #[error("week_start '{value}' is not a YYYY-MM-DD date")]
    MalformedAnchor { value: String },
    #[error("expected 7 forecast rows, found {found}")]
    RowCount { found: usize },
    #[error("{date} + {days} days is outside the supported calendar range")]
    OutOfRange { date: NaiveDate, days: u64 },
}
