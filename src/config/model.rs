//! ConvertOptions struct definition and default implementation.

use super::types::*;

/// Options for a single conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertOptions {
    /// How keys of the placeholder mapping (`output1`) are formed.
    pub placeholder_keys: PlaceholderKeys,

    /// How failures are reflected in the process exit status.
    pub exit_policy: ExitCodePolicy,
}
