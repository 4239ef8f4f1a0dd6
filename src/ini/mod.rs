//! INI-style configuration parsing.
//!
//! The input format is line oriented: `[section]` headers, `key = value`
//! entries and `;` comments. Anything else is skipped without error, so the
//! parser itself never fails; only reading the file can.

mod model;
mod parser;


// Re-export public API
pub use model::{Configuration, ROOT_SECTION, Section};
pub use parser::{parse, parse_file};
