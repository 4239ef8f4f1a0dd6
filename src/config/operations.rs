//! Option construction from parsed command-line arguments.

use super::model::ConvertOptions;
use super::types::{ExitCodePolicy, PlaceholderKeys};
use crate::cli::Cli;

impl From<&Cli> for ConvertOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            placeholder_keys: if cli.qualify_keys {
                PlaceholderKeys::Qualified
            } else {
                PlaceholderKeys::Raw
            },
            exit_policy: if cli.exit_codes {
                ExitCodePolicy::Posix
            } else {
                ExitCodePolicy::AlwaysZero
            },
        }
    }
}
