//! Error types for the inimap CLI.
//!
//! Uses thiserror for derive macros. Every failure is reported to the user as
//! a single printed line; the variant decides the message prefix and the exit
//! code used under POSIX exit code reporting.

use crate::exit_codes;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for a conversion run.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Missing positional arguments or an unrecognized option.
    #[error("{0}")]
    Usage(String),

    /// The input file could not be opened or read.
    #[error("Error reading ini file: {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The assembled document could not be serialized.
    #[error("Error marshalling JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The output file could not be created, written or moved into place.
    #[error("Error writing to file: {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConvertError::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConvertError::Write {
            path: path.into(),
            source,
        }
    }

    /// Returns the exit code reported for this error when exit codes are enabled.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConvertError::Usage(_) => exit_codes::USAGE,
            ConvertError::Read { .. } => exit_codes::READ_FAILURE,
            ConvertError::Serialize(_) => exit_codes::SERIALIZE_FAILURE,
            ConvertError::Write { .. } => exit_codes::WRITE_FAILURE,
        }
    }
}

/// Result type alias for inimap operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
