//! Exit code constants for the inimap CLI.
//!
//! These codes are only returned when POSIX-style exit codes are requested
//! (`--exit-codes`). By default every run exits with `SUCCESS`.
//! - 0: Success
//! - 1: Usage error (missing or invalid arguments)
//! - 2: Input file could not be read
//! - 3: Output document could not be serialized
//! - 4: Output file could not be written

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Usage error: fewer than two positional arguments or an unknown option.
pub const USAGE: i32 = 1;

/// The input file could not be opened or read.
pub const READ_FAILURE: i32 = 2;

/// The output document could not be serialized to JSON.
pub const SERIALIZE_FAILURE: i32 = 3;

/// The output file could not be created or written.
pub const WRITE_FAILURE: i32 = 4;
