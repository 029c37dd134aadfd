//! Reporting utilities: forecast summary and table.
//!
//! Formatting lives here so the aligner stays pure and output changes stay
//! localized.

pub mod format;

pub use format::{format_forecast_summary, format_forecast_table};
