//! Run configuration for inimap.
//!
//! This module defines the options a conversion run accepts. Options come
//! from command-line flags only; every field has a default that reproduces
//! the plain `inimap <input> <output>` behaviour.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::ConvertOptions;
pub use types::{ExitCodePolicy, PlaceholderKeys};
