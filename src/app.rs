//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and sets up logging
//! - resolves where fixtures come from
//! - aligns the forecast
//! - prints the summary, table, and plot
//! - writes optional exports

use clap::Parser;

use crate::calendar::align_forecast;
use crate::cli::{AlignArgs, Command, DatesArgs};
use crate::data::FixtureSource;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `airpol` binary.
pub fn run() -> Result<(), AppError> {
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    crate::logging::init(cli.verbose);

    match cli.command {
        Command::Align(args) => handle_align(args),
        Command::Dates(args) => handle_dates(args),
    }
}

fn handle_align(args: AlignArgs) -> Result<(), AppError> {
    let source = FixtureSource::from_env(args.url.as_deref(), args.data_dir.as_deref());
    let run = pipeline::run_align(&source, &args.forecast, &args.meta)?;

    println!("{}", crate::report::format_forecast_summary(&run.meta, &run.aligned));
    println!("{}", crate::report::format_forecast_table(&run.aligned));

    if !args.no_plot {
        let reference = (!args.no_reference).then_some(args.reference);
        let plot = crate::plot::render_forecast_plot(&run.aligned, args.width, args.height, reference);
        println!("{plot}");
    }

    if let Some(path) = &args.export {
        crate::io::write_aligned(path, &run.aligned, args.format)?;
    }

    Ok(())
}

fn handle_dates(args: DatesArgs) -> Result<(), AppError> {
    let rows = pipeline::synthetic_week(&args.first_day);
    let aligned = align_forecast(Some(args.week_start.as_str()), &rows);
    print!("{}", crate::report::format_forecast_table(&aligned));
    Ok(())
}

/// Rewrite argv so `airpol` defaults to `airpol align`.
///
/// Rules:
/// - `airpol`                     -> `airpol align`
/// - `airpol --url URL ...`       -> `airpol align --url URL ...`
/// - `airpol -v dates ...`        -> unchanged (global flags before a subcommand)
/// - `airpol --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.iter().skip(1).find(|a| !is_verbosity_flag(a)).cloned() else {
        argv.insert(1, "align".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "align" | "dates");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "align flags".
    if arg1.starts_with('-') {
        argv.insert(1, "align".to_string());
        return argv;
    }

    argv
}

/// `-v`, `-vv`, ... or `--verbose` (global, may precede the subcommand).
fn is_verbosity_flag(arg: &str) -> bool {
    arg == "--verbose" || arg.strip_prefix('-').is_some_and(|v| !v.is_empty() && v.chars().all(|c| c == 'v'))
}
