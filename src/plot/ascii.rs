//! ASCII plotting of an aligned forecast for terminal output.
//!
//! Fixed-size grid, deterministic output. Rows sit on a category x-axis in
//! series order.
//!
//! Plot elements:
//! - predicted series: `-` line
//! - actual series: `o` points (rows without a measurement are skipped)
//! - optional reference level (e.g. the WHO limit): `=` row

use crate::domain::AlignedForecastRow;

/// WHO 24h guideline drawn on the forecast chart (µg/m³).
pub const WHO_LIMIT_PM25: f64 = 10.0;

/// Render actual vs predicted values with an optional horizontal reference.
pub fn render_forecast_plot(
    rows: &[AlignedForecastRow],
    width: usize,
    height: usize,
    reference: Option<f64>,
) -> String {
    if rows.is_empty() {
        return "Plot: no data\n".to_string();
    }

    let width = width.max(10);
    let height = height.max(5);

    let (y_min, y_max) = y_range(rows, reference).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];
    let n = rows.len();

    // Predicted line first so reference and points can overlay.
    let mut prev = None;
    for (i, r) in rows.iter().enumerate() {
        let x = map_x(i, n, width);
        let y = map_y(r.predicted, y_min, y_max, height);
        match prev {
            Some((x0, y0)) => draw_line(&mut grid, x0, y0, x, y, '-'),
            None => grid[y][x] = '-',
        }
        prev = Some((x, y));
    }

    if let Some(level) = reference {
        let y = map_y(level, y_min, y_max, height);
        for cell in grid[y].iter_mut().filter(|c| **c == ' ') {
            *cell = '=';
        }
    }

    for (i, r) in rows.iter().enumerate() {
        if let Some(actual) = r.actual {
            let x = map_x(i, n, width);
            let y = map_y(actual, y_min, y_max, height);
            grid[y][x] = 'o';
        }
    }

    let mut out = String::new();
    out.push_str(&format!("Plot: y=[{y_min:.2}, {y_max:.2}] µg/m³ | o actual, - predicted"));
    if let Some(level) = reference {
        out.push_str(&format!(", = {level:.1}"));
    }
    out.push('\n');

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
    out.push_str(&format!("x: {}\n", labels.join(" | ")));

    out
}

fn y_range(rows: &[AlignedForecastRow], reference: Option<f64>) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    let values = rows
        .iter()
        .flat_map(|r| [Some(r.predicted), r.actual])
        .chain(std::iter::once(reference))
        .flatten()
        .filter(|v| v.is_finite());
    for v in values {
        min_y = min_y.min(v);
        max_y = max_y.max(v);
    }

    if !(min_y.is_finite() && max_y.is_finite()) {
        None
    } else if max_y > min_y {
        Some((min_y, max_y))
    } else {
        Some((min_y - 1.0, max_y + 1.0))
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(i: usize, n: usize, width: usize) -> usize {
    if n < 2 {
        return 0;
    }
    let u = i as f64 / (n as f64 - 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
