//! Placeholder mapping: raw key to `${IDENTIFIER}`.

use super::{Mapping, placeholder};
use crate::config::PlaceholderKeys;
use crate::ini::{Configuration, ROOT_SECTION};
use tracing::warn;

/// Build the placeholder mapping for every key in `config`.
///
/// Values are ignored. With [`PlaceholderKeys::Raw`] the mapping is keyed by
/// the bare key, so a key present in several sections keeps only the entry
/// from the last section in sorted order. [`PlaceholderKeys::Qualified`] keys
/// sectioned entries as `section.key` instead; a root key spelled `a.name`
/// then still collides with `name` in section `a`, and section names that
/// contain `.` can make qualified keys ambiguous.
pub fn to_placeholders(config: &Configuration, keys: PlaceholderKeys) -> Mapping {
    let mut result = Mapping::new();

    for (section, key, _) in config.entries() {
        let map_key = match keys {
            PlaceholderKeys::Qualified if section != ROOT_SECTION => format!("{section}.{key}"),
            _ => key.to_string(),
        };
        let value = placeholder(section, key);

        if let Some(previous) = result.insert(map_key, value) {
            match keys {
                PlaceholderKeys::Raw => warn!(
                    key,
                    section,
                    replaced = %previous,
                    "placeholder key defined in more than one section; keeping the later one"
                ),
                PlaceholderKeys::Qualified => warn!(
                    key,
                    section,
                    replaced = %previous,
                    "qualified placeholder key is ambiguous (dotted key or section name); keeping the later one"
                ),
            }
        }
    }

    result
}
