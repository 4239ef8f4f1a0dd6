//! Inimap: convert INI-style configuration files into placeholder and
//! resolved-value JSON mappings.
//!
//! This is the main entry point for the `inimap` CLI. It installs the log
//! subscriber and hands the process arguments and stdout to [`app::run`].

mod app;
mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod ini;
pub mod output;
pub mod transform;

use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries only the user-facing messages.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let status = app::run(std::env::args_os(), &mut std::io::stdout().lock());
    ExitCode::from(status as u8)
}
