//! Terminal plotting.

pub mod ascii;

pub use ascii::{WHO_LIMIT_PM25, render_forecast_plot};
