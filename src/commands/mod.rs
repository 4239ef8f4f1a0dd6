//! Command implementations for inimap.
//!
//! There is a single command: convert one INI file into one JSON document.

mod convert;

pub use convert::{ConvertSummary, cmd_convert};
