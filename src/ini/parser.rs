//! Line-oriented parser for the INI-style input format.

use super::model::{Configuration, ROOT_SECTION};
use crate::error::{ConvertError, Result};
use std::path::Path;
use tracing::{debug, info};

/// One classified input line.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    /// Blank line or `;` comment.
    Ignored,
    /// `[name]` header; the name is taken verbatim from between the brackets.
    Header(&'a str),
    /// `key = value`, both sides trimmed.
    Entry(&'a str, &'a str),
    /// Anything else, e.g. a line without `=`.
    Malformed,
}

fn classify(raw: &str) -> Line<'_> {
    let line = raw.trim();

    if line.is_empty() || line.starts_with(';') {
        return Line::Ignored;
    }

    if let Some(name) = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        return Line::Header(name);
    }

    match line.split_once('=') {
        Some((key, value)) => Line::Entry(key.trim(), value.trim()),
        None => Line::Malformed,
    }
}

/// Parse INI-style text into a [`Configuration`].
///
/// Never fails: blank lines, comments and lines without `=` are skipped.
/// Entries before the first header land in the [`ROOT_SECTION`].
pub fn parse(text: &str) -> Configuration {
    let mut config = Configuration::new();
    let mut current = ROOT_SECTION;

    for (index, raw) in text.lines().enumerate() {
        match classify(raw) {
            Line::Ignored => {}
            Line::Header(name) => {
                config.open_section(name);
                current = name;
            }
            Line::Entry(key, value) => config.insert(current, key, value),
            Line::Malformed => {
                debug!(line = index + 1, "skipping line without '='");
            }
        }
    }

    config
}

/// Read and parse an INI file.
///
/// # Returns
///
/// * `Ok(Configuration)` - The parsed file
/// * `Err(ConvertError::Read)` - The file is missing, unreadable or not UTF-8
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Configuration> {
    let path = path.as_ref();

    let text = std::fs::read_to_string(path).map_err(|e| ConvertError::read(path, e))?;
    let config = parse(&text);

    info!(
        path = %path.display(),
        sections = config.section_count(),
        entries = config.entry_count(),
        "parsed ini file"
    );

    Ok(config)
}
