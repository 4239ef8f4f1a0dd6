//! Environment-variable style names derived from a section and key.

use crate::ini::ROOT_SECTION;

/// Normalized identifier for `key` in `section`.
///
/// Sectioned keys become `SECTION_KEY` with dots in the key replaced by
/// underscores. Root keys are only uppercased. Uppercasing uses the full
/// Unicode mapping, so `ß` becomes `SS`.
pub fn identifier(section: &str, key: &str) -> String {
    let key = key.to_uppercase();
    if section == ROOT_SECTION {
        key
    } else {
        format!("{}_{}", section.to_uppercase(), key.replace('.', "_"))
    }
}

/// `${NAME}` placeholder for `key` in `section`.
///
/// Root keys are used verbatim, without any case change.
pub fn placeholder(section: &str, key: &str) -> String {
    if section == ROOT_SECTION {
        format!("${{{}}}", key)
    } else {
        format!("${{{}}}", identifier(section, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_identifier_is_uppercased_only() {
        assert_eq!(identifier("", "key1"), "KEY1");
        assert_eq!(identifier("", "log.level"), "LOG.LEVEL");
    }

    #[test]
    fn sectioned_identifier_joins_and_replaces_dots() {
        assert_eq!(identifier("db", "host"), "DB_HOST");
        assert_eq!(identifier("api", "rate.limit"), "API_RATE_LIMIT");
        assert_eq!(identifier("My.App", "a.b.c"), "MY.APP_A_B_C");
    }

    #[test]
    fn uppercasing_follows_unicode_rules() {
        assert_eq!(identifier("", "straße"), "STRASSE");
        assert_eq!(identifier("größe", "wert"), "GRÖSSE_WERT");
    }

    #[test]
    fn root_placeholder_is_verbatim() {
        assert_eq!(placeholder("", "key1"), "${key1}");
        assert_eq!(placeholder("", "mixed.Case"), "${mixed.Case}");
    }

    #[test]
    fn sectioned_placeholder_wraps_identifier() {
        assert_eq!(placeholder("db", "host"), "${DB_HOST}");
        assert_eq!(placeholder("api", "rate.limit"), "${API_RATE_LIMIT}");
    }
}
