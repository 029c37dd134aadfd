//! Command-line parsing for the forecast aligner.
//!
//! The goal of this module is to keep **argument parsing** separate from
//! loading, alignment, and presentation.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::data::{DEFAULT_FORECAST_FILE, DEFAULT_META_FILE};
use crate::io::ExportFormat;
use crate::plot::WHO_LIMIT_PM25;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "airpol", version, about = "Align a 7-day PM2.5 forecast to calendar dates")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load forecast fixtures, align them, print a table/plot, and optionally export.
    Align(AlignArgs),
    /// Print the seven dates/labels for an anchor and a first-day name.
    Dates(DatesArgs),
}

/// Options for `airpol align`.
#[derive(Debug, Parser, Clone)]
pub struct AlignArgs {
    /// Directory holding the fixture files (overrides AIRPOL_DATA_DIR).
    #[arg(long, value_name = "DIR", conflicts_with = "url")]
    pub data_dir: Option<PathBuf>,

    /// Base URL serving the fixture files (overrides AIRPOL_DATA_URL).
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Forecast rows fixture name.
    #[arg(long, default_value = DEFAULT_FORECAST_FILE)]
    pub forecast: String,

    /// Forecast meta fixture name.
    #[arg(long, default_value = DEFAULT_META_FILE)]
    pub meta: String,

    /// Skip the terminal plot (drawn by default).
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 70)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 16)]
    pub height: usize,

    /// Reference level drawn across the plot (µg/m³).
    #[arg(long, default_value_t = WHO_LIMIT_PM25)]
    pub reference: f64,

    /// Do not draw the reference level.
    #[arg(long)]
    pub no_reference: bool,

    /// Export aligned rows to this path.
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Export format.
    #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,
}

/// Options for `airpol dates`.
#[derive(Debug, Parser, Clone)]
pub struct DatesArgs {
    /// Week start anchor (YYYY-MM-DD).
    #[arg(long, value_name = "DATE")]
    pub week_start: String,

    /// Weekday name claimed by the first row (first three letters are used).
    #[arg(long, value_name = "NAME")]
    pub first_day: String,
}
