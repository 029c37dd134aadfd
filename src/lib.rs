//! `airpol-forecast` library crate.
//!
//! The binary (`airpol`) is a thin wrapper around this library so that:
//!
//! - the calendar aligner is testable without spawning processes
//! - a site generator or notebook can reuse the aligner and loaders directly
//!
//! The core entry point is [`calendar::align_forecast`].

pub mod app;
pub mod calendar;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod plot;
pub mod report;
