//! CLI argument parsing for inimap.
//!
//! Uses clap derive macros for declarative argument definitions. Both
//! positional arguments are optional at the clap level so that a short
//! argument list is reported with the tool's own usage line instead of a
//! clap error.

use clap::Parser;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Usage line printed when the input or output path is missing.
pub const USAGE: &str = "Usage: inimap <path to ini file> <path to output file>";

/// Inimap: convert an INI-style configuration file into placeholder and
/// resolved-value JSON mappings.
///
/// The output document holds two objects:
/// - output1: key -> ${SECTION_KEY} placeholder
/// - output2: SECTION_KEY -> configured value
#[derive(Parser, Debug)]
#[command(name = "inimap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// INI file to read.
    pub input: Option<PathBuf>,

    /// JSON file to write.
    pub output: Option<PathBuf>,

    /// Key the placeholder mapping by `section.key` instead of the bare key.
    ///
    /// Without this flag a key that appears in several sections keeps only
    /// the entry from the last section in sorted order.
    #[arg(long)]
    pub qualify_keys: bool,

    /// Exit with a nonzero status when the conversion fails.
    #[arg(long)]
    pub exit_codes: bool,

    /// Positional arguments after the output path; accepted and ignored.
    #[arg(hide = true, value_name = "IGNORED")]
    pub extra: Vec<OsString>,
}

impl Cli {
    /// Input and output paths, if both were given.
    pub fn paths(&self) -> Option<(&Path, &Path)> {
        match (&self.input, &self.output) {
            (Some(input), Some(output)) => Some((input.as_path(), output.as_path())),
            _ => None,
        }
    }
}
