//! Output document assembly and JSON serialization.
//!
//! The document always has exactly two top-level fields:
//! - `output1`: the placeholder mapping (key to `${IDENTIFIER}`)
//! - `output2`: the resolved mapping (IDENTIFIER to literal value)

use crate::error::Result;
use crate::transform::Mapping;
use serde::Serialize;

/// The JSON document written by a conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Placeholder mapping.
    pub output1: Mapping,
    /// Resolved-value mapping.
    pub output2: Mapping,
}

/// Package both mappings into a [`Document`] without altering them.
pub fn assemble(placeholders: Mapping, resolved: Mapping) -> Document {
    Document {
        output1: placeholders,
        output2: resolved,
    }
}

impl Document {
    /// Serialize as UTF-8 JSON with two-space indentation and no trailing newline.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
