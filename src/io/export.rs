//! Export aligned forecast rows for a chart or spreadsheet.
//!
//! JSON output is the record array a line chart consumes directly (`label` on the
//! category axis, `actual`/`predicted` as series). CSV is the same data, flattened.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use clap::ValueEnum;
use tracing::info;

use crate::domain::AlignedForecastRow;
use crate::error::AppError;

/// Export file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

pub fn write_aligned(path: &Path, rows: &[AlignedForecastRow], format: ExportFormat) -> Result<(), AppError> {
    match format {
        ExportFormat::Json => write_aligned_json(path, rows)?,
        ExportFormat::Csv => write_aligned_csv(path, rows)?,
    }
    info!(path = %path.display(), ?format, rows = rows.len(), "exported aligned forecast");
    Ok(())
}

/// Write aligned rows as a pretty-printed JSON array.
pub fn write_aligned_json(path: &Path, rows: &[AlignedForecastRow]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create export JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, rows)
        .map_err(|e| AppError::io(format!("Failed to write export JSON: {e}")))?;
    Ok(())
}

/// Write aligned rows as CSV (`label,day,date,actual,predicted`).
pub fn write_aligned_csv(path: &Path, rows: &[AlignedForecastRow]) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create export CSV '{}': {e}", path.display())))?;
    file.write_all(aligned_csv(rows).as_bytes())
        .map_err(|e| AppError::io(format!("Failed to write export CSV: {e}")))?;
    Ok(())
}

/// Render the CSV body in memory.
pub fn aligned_csv(rows: &[AlignedForecastRow]) -> String {
    let mut out = String::from("label,day,date,actual,predicted\n");
    for r in rows {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            csv_field(&r.label),
            csv_field(&r.day),
            r.date.map(|d| d.to_string()).unwrap_or_default(),
            r.actual.map(|v| v.to_string()).unwrap_or_default(),
            r.predicted,
        ));
    }
    out
}

fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::domain::ForecastRow;

    #[test]
    fn csv_leaves_absent_values_empty() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 16).unwrap();
        let rows = vec![
            AlignedForecastRow::dated(&ForecastRow::new("Mon", Some(31.5), 30.0), date, "Jan 16".into()),
            AlignedForecastRow::undated(&ForecastRow::new("Tue, late", None, 28.25)),
        ];
        let expected = concat!(
            "label,day,date,actual,predicted\n",
            "Jan 16,Mon,2023-01-16,31.5,30\n",
            "\"Tue, late\",\"Tue, late\",,,28.25\n",
        );
        assert_eq!(aligned_csv(&rows), expected);
    }

    #[test]
    fn json_export_reads_back() {
        let rows = crate::calendar::align_forecast(
            Some("2023-01-30"),
            &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"].map(|d| ForecastRow::new(d, Some(40.0), 41.0)),
        );
        let path = std::env::temp_dir().join(format!("airpol-export-{}.json", std::process::id()));
        write_aligned(&path, &rows, ExportFormat::Json).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let back: Vec<AlignedForecastRow> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, rows);
        assert!(text.contains("\"label\": \"Feb 05\""));
    }
}
