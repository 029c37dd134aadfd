//! Output helpers.
//!
//! - aligned-row exports (JSON/CSV) (`export`)

pub mod export;

pub use export::*;
