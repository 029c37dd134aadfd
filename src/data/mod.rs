//! Fixture loading (local directory or static HTTP host).

pub mod source;

pub use source::*;
