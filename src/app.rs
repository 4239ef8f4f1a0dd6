//! Top-level run loop: argument list in, printed messages and exit status out.
//!
//! `main` only wires process state (`std::env::args_os`, stdout, the exit
//! code) into [`run`], so the whole CLI behaviour is testable in-process.

use crate::cli::{Cli, USAGE};
use crate::commands::cmd_convert;
use crate::config::{ConvertOptions, ExitCodePolicy};
use crate::error::{ConvertError, Result};
use crate::exit_codes;
use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::io::Write;
use tracing::{debug, error};

/// Run one conversion from a full argument list (including the program name).
///
/// User-facing messages go to `out`. Returns the process exit status, which
/// is always [`exit_codes::SUCCESS`] unless `--exit-codes` was given.
pub fn run<I, T, W>(args: I, out: &mut W) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = write!(out, "{}", e.render());
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                return exit_codes::SUCCESS;
            }
            // The flag cannot be read from a failed parse, so look for it directly.
            let policy = if args.iter().any(|a| a == "--exit-codes") {
                ExitCodePolicy::Posix
            } else {
                ExitCodePolicy::AlwaysZero
            };
            return policy.exit_status(&ConvertError::Usage(e.to_string()));
        }
    };

    let options = ConvertOptions::from(&cli);

    match execute(&cli, &options) {
        Ok(message) => {
            let _ = writeln!(out, "{}", message);
            exit_codes::SUCCESS
        }
        Err(err) => {
            if !matches!(err, ConvertError::Usage(_)) {
                error!(error = %err, "conversion failed");
            }
            let _ = writeln!(out, "{}", err);
            options.exit_policy.exit_status(&err)
        }
    }
}

/// Convert the files named on the command line, returning the success message.
fn execute(cli: &Cli, options: &ConvertOptions) -> Result<String> {
    let (input, output) = cli
        .paths()
        .ok_or_else(|| ConvertError::Usage(USAGE.to_string()))?;

    if !cli.extra.is_empty() {
        debug!(count = cli.extra.len(), "ignoring extra positional arguments");
    }

    cmd_convert(input, output, options)?;

    Ok(format!("Output written to {}", output.display()))
}
