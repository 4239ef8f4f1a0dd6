//! Resolved mapping: `IDENTIFIER` to the literal configured value.

use super::{Mapping, identifier};
use crate::ini::Configuration;
use tracing::warn;

/// Build the resolved-value mapping for every entry in `config`.
///
/// Distinct keys that normalize to the same identifier (`a.b` and `A_B` in
/// one section, for example) collapse into one entry; the last one in sorted
/// order wins.
pub fn to_resolved(config: &Configuration) -> Mapping {
    let mut result = Mapping::new();

    for (section, key, value) in config.entries() {
        let id = identifier(section, key);
        if result.insert(id, value.to_string()).is_some() {
            warn!(key, section, "identifier collision; keeping the later value");
        }
    }

    result
}
