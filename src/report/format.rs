//! Formatted terminal output for an aligned forecast.

use crate::calendar::is_aligned;
use crate::domain::{AlignedForecastRow, ForecastMeta};

const DEFAULT_TITLE: &str = "7-day PM2.5 forecast";

/// Format the header block (title, week window, alignment mode).
pub fn format_forecast_summary(meta: &ForecastMeta, rows: &[AlignedForecastRow]) -> String {
    let mut out = String::new();

    let title = meta.title.as_deref().unwrap_or(DEFAULT_TITLE);
    out.push_str(&format!("=== {title} ===\n"));

    match (&meta.week_start, &meta.week_end) {
        (Some(start), Some(end)) => out.push_str(&format!("Week: {start} .. {end}\n")),
        (Some(start), None) => out.push_str(&format!("Week: from {start}\n")),
        _ => {}
    }

    if is_aligned(rows) {
        out.push_str("Labels: calendar dates\n");
    } else {
        out.push_str("Labels: day names (week_start or row count unusable)\n");
    }

    if let (Some(day), Some(pm25)) = (&meta.peak_day, meta.peak_pm25) {
        out.push_str(&format!("Peak: {day} ({pm25:.1} µg/m³)\n"));
    }
    if let Some(avg) = meta.avg_pm25 {
        out.push_str(&format!("Average: {avg:.1} µg/m³\n"));
    }

    out
}

/// Format aligned rows as a fixed-width table.
pub fn format_forecast_table(rows: &[AlignedForecastRow]) -> String {
    let mut out = String::new();
    out.push_str(
        format!(
            "{:<8} {:<10} {:<10} {:>8} {:>9}",
            "label", "day", "date", "actual", "predicted"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(&format!("{:-<8} {:-<10} {:-<10} {:-<8} {:-<9}", "", "", "", "", ""));
    out.push('\n');

    for r in rows {
        let date = r.date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string());
        let actual = r.actual.map(|v| format!("{v:.1}")).unwrap_or_else(|| "-".to_string());
        out.push_str(
            format!(
                "{:<8} {:<10} {:<10} {:>8} {:>9.1}",
                truncate(&r.label, 8),
                truncate(&r.day, 10),
                date,
                actual,
                r.predicted,
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::align_forecast;
    use crate::domain::ForecastRow;

    fn rows() -> Vec<ForecastRow> {
        ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let actual = if i == 6 { None } else { Some(162.4) };
                ForecastRow::new(*d, actual, 158.9)
            })
            .collect()
    }

    #[test]
    fn table_rows_show_dates_and_dashes() {
        let aligned = align_forecast(Some("2023-01-16"), &rows());
        let txt = format_forecast_table(&aligned);
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "label    day        date         actual predicted");
        assert_eq!(lines[2], "Jan 16   Mon        2023-01-16    162.4     158.9");
        assert_eq!(lines[8], "Jan 22   Sun        2023-01-22        -     158.9");
    }

    #[test]
    fn fallback_rows_have_no_date() {
        let aligned = align_forecast(None, &rows());
        let txt = format_forecast_table(&aligned);
        assert!(txt.lines().nth(2).unwrap().starts_with("Mon      Mon        -"));
    }

    #[test]
    fn summary_reports_alignment_mode() {
        let meta = ForecastMeta {
            title: Some("Bishkek".into()),
            week_start: Some("2023-01-16".into()),
            week_end: Some("2023-01-22".into()),
            peak_day: Some("Thu".into()),
            peak_pm25: Some(203.46),
            ..ForecastMeta::default()
        };
        let aligned = align_forecast(meta.week_start.as_deref(), &rows());
        let txt = format_forecast_summary(&meta, &aligned);
        assert!(txt.starts_with("=== Bishkek ===\n"));
        assert!(txt.contains("Week: 2023-01-16 .. 2023-01-22\n"));
        assert!(txt.contains("Labels: calendar dates\n"));
        assert!(txt.contains("Peak: Thu (203.5 µg/m³)\n"));

        let fallback = align_forecast(Some("bad"), &rows());
        assert!(format_forecast_summary(&ForecastMeta::default(), &fallback).contains("Labels: day names"));
    }

    #[test]
    fn truncate_marks_cut_text() {
        assert_eq!(truncate("Wednesday, late", 10), "Wednesday.");
        assert_eq!(truncate("Mon", 10), "Mon");
    }
}
