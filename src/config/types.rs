//! Option enums for inimap runs.

use crate::error::ConvertError;
use crate::exit_codes;

/// Key naming for the placeholder mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaceholderKeys {
    /// Bare key; the same key in two sections keeps only the later entry.
    #[default]
    Raw,
    /// `section.key` for sectioned entries, bare key for root entries.
    Qualified,
}

/// Exit status reporting for failed runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitCodePolicy {
    /// Print the error and exit with status 0 regardless of outcome.
    #[default]
    AlwaysZero,
    /// Exit with the error's distinct nonzero code.
    Posix,
}

impl ExitCodePolicy {
    /// Exit status to report for `err` under this policy.
    pub fn exit_status(self, err: &ConvertError) -> i32 {
        match self {
            Self::AlwaysZero => exit_codes::SUCCESS,
            Self::Posix => err.exit_code(),
        }
    }
}
