//! Derived key mappings built from a parsed [`Configuration`](crate::ini::Configuration).
//!
//! Both transforms walk the configuration in its sorted order, so when two
//! entries map to the same output key the one from the lexicographically
//! later section (or key) wins.

mod identifier;
mod placeholders;
mod resolved;

#[cfg(test)]
mod tests;

pub use identifier::{identifier, placeholder};
pub use placeholders::to_placeholders;
pub use resolved::to_resolved;

use std::collections::BTreeMap;

/// An output mapping, serialized as a JSON object with sorted keys.
pub type Mapping = BTreeMap<String, String>;
