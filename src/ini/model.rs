//! Configuration struct produced by the parser.

use std::collections::BTreeMap;

/// Name of the section holding entries that precede any `[section]` header.
pub const ROOT_SECTION: &str = "";

/// Key/value pairs of a single section, ordered by key.
pub type Section = BTreeMap<String, String>;

/// Parsed INI document: section name to its key/value pairs.
///
/// Sections and keys are kept in `BTreeMap`s so every consumer iterates in
/// lexicographic order (sections first, then keys within a section).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    sections: BTreeMap<String, Section>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh, empty section, discarding any earlier section of the same name.
    pub(crate) fn open_section(&mut self, name: &str) {
        self.sections.insert(name.to_string(), Section::new());
    }

    /// Store `key = value` in `section`, creating the section on first use.
    ///
    /// A repeated key overwrites the earlier value.
    pub(crate) fn insert(&mut self, section: &str, key: &str, value: &str) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    /// Look up a section by name. The root section is [`ROOT_SECTION`].
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Look up a single value.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    /// Iterate sections in lexicographic order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections
            .iter()
            .map(|(name, entries)| (name.as_str(), entries))
    }

    /// Iterate every `(section, key, value)` triple, sections first, then keys.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.sections().flat_map(|(section, entries)| {
            entries
                .iter()
                .map(move |(key, value)| (section, key.as_str(), value.as_str()))
        })
    }

    /// Number of sections, including an empty root section if one was created.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total number of key/value pairs across all sections.
    pub fn entry_count(&self) -> usize {
        self.sections.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
