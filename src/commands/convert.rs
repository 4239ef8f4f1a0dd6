//! Implementation of the convert command.
//!
//! Read the input, parse it, build both mappings, assemble the document and
//! write it. Every step either succeeds or returns the error for its stage;
//! nothing is retried and no partial output is kept.

use crate::config::ConvertOptions;
use crate::error::Result;
use crate::fs::atomic_write_file;
use crate::ini;
use crate::output::assemble;
use crate::transform::{to_placeholders, to_resolved};
use std::path::Path;
use tracing::info;

/// Counts describing a successful conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Sections in the parsed input, including the root section if present.
    pub sections: usize,
    /// Key/value pairs in the parsed input.
    pub entries: usize,
    /// Entries in `output1`.
    pub placeholders: usize,
    /// Entries in `output2`.
    pub resolved: usize,
}

/// Convert `input` into the JSON document at `output`.
pub fn cmd_convert(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> Result<ConvertSummary> {
    let config = ini::parse_file(input)?;

    let placeholders = to_placeholders(&config, options.placeholder_keys);
    let resolved = to_resolved(&config);

    let summary = ConvertSummary {
        sections: config.section_count(),
        entries: config.entry_count(),
        placeholders: placeholders.len(),
        resolved: resolved.len(),
    };

    let json = assemble(placeholders, resolved).to_json()?;
    atomic_write_file(output, &json)?;

    info!(
        output = %output.display(),
        sections = summary.sections,
        entries = summary.entries,
        placeholders = summary.placeholders,
        resolved = summary.resolved,
        bytes = json.len(),
        "wrote output document"
    );

    Ok(summary)
}
