//! Domain types shared by the loader, aligner, and presentation layers.
//!
//! This module defines:
//!
//! - fixture records (`ForecastRow`, `ForecastMeta`)
//! - the week anchor and aligned output (`WeekAnchor`, `AlignedForecastRow`)
//! - short weekday names (`DayName`)

pub mod types;
pub mod weekday;

pub use types::*;
pub use weekday::DayName;
