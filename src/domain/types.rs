//! Forecast records as they arrive from the fixtures and as they leave the aligner.
//!
//! Field names follow the JSON fixtures (`day`, `actual`, `predicted`,
//! `week_start`, ...) so the same types can be read from disk/HTTP and written
//! back out for a chart.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One raw row of the 7-day forecast fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRow {
    /// Free text; only the first three characters are read as a weekday name.
    pub day: String,
    /// Measured PM2.5 (µg/m³). Absent or `null` when no measurement exists.
    #[serde(default)]
    pub actual: Option<f64>,
    /// Model estimate for the same day (µg/m³).
    pub predicted: f64,
}

impl ForecastRow {
    pub fn new(day: impl Into<String>, actual: Option<f64>, predicted: f64) -> Self {
        Self {
            day: day.into(),
            actual,
            predicted,
        }
    }
}

/// Metadata record published next to the forecast fixture.
///
/// Only `week_start` drives alignment; the remaining fields are display-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastMeta {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub week_start: Option<String>,
    #[serde(default)]
    pub week_end: Option<String>,
    #[serde(default)]
    pub avg_pm25: Option<f64>,
    #[serde(default)]
    pub peak_day: Option<String>,
    #[serde(default)]
    pub peak_pm25: Option<f64>,
}

/// The authoritative first day of a 7-day reporting window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekAnchor {
    pub week_start: NaiveDate,
}

/// A forecast row with its calendar date and display label attached.
///
/// `date` is `None` only when alignment fell back to the raw `day` text, in
/// which case `label == day` for every row of the series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedForecastRow {
    pub day: String,
    pub actual: Option<f64>,
    pub predicted: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub label: String,
}

impl AlignedForecastRow {
    /// Attach a concrete date and label to a raw row.
    pub fn dated(row: &ForecastRow, date: NaiveDate, label: String) -> Self {
        Self {
            day: row.day.clone(),
            actual: row.actual,
            predicted: row.predicted,
            date: Some(date),
            label,
        }
    }

    /// Carry a raw row through unchanged, labelled by its own `day` text.
    pub fn undated(row: &ForecastRow) -> Self {
        Self {
            day: row.day.clone(),
            actual: row.actual,
            predicted: row.predicted,
            date: None,
            label: row.day.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_row_accepts_null_and_missing_actual() {
        let rows: Vec<ForecastRow> = serde_json::from_str(
            r#"[
                {"day": "Mon", "actual": 31.5, "predicted": 30.2},
                {"day": "Tue", "actual": null, "predicted": 28.0},
                {"day": "Wed", "predicted": 27.1}
            ]"#,
        )
        .unwrap();
        assert_eq!(rows[0].actual, Some(31.5));
        assert_eq!(rows[1].actual, None);
        assert_eq!(rows[2].actual, None);
    }

    #[test]
    fn meta_ignores_unknown_fields() {
        let meta: ForecastMeta = serde_json::from_str(
            r#"{"title": "PM2.5 week", "week_start": "2023-01-16", "source": "PurpleAir"}"#,
        )
        .unwrap();
        assert_eq!(meta.week_start.as_deref(), Some("2023-01-16"));
        assert_eq!(meta.week_end, None);
    }

    #[test]
    fn aligned_row_omits_missing_date_in_json() {
        let row = ForecastRow::new("Mon", None, 12.0);
        let json = serde_json::to_value(AlignedForecastRow::undated(&row)).unwrap();
        assert!(json.get("date").is_none());
        assert_eq!(json["label"], "Mon");
        assert!(json["actual"].is_null());

        let date = NaiveDate::from_ymd_opt(2023, 1, 16).unwrap();
        let json = serde_json::to_value(AlignedForecastRow::dated(&row, date, "Jan 16".into())).unwrap();
        assert_eq!(json["date"], "2023-01-16");
    }
}
