//! Token tables and derivations.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Token name -> CSS value, in declaration order.
pub type TokenTable = IndexMap<String, String>;

/// An `extend` entry: either a literal table or a table derived from another category.
///
/// ```toml
/// [theme.extend]
/// maxWidth = { derive = "screens", prefix = "screen-" }   # derived
/// zIndex = { "60" = "60", "-1" = "-1" }                   # literal
/// ```
///
/// A table with exactly the keys `derive` (and optionally `prefix`) is read as a
/// derivation; anything else is a literal table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenSource {
    Derived(Derivation),
    Literal(TokenTable),
}

/// Copy every token of `derive`, renaming `key` to `{prefix}{key}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Derivation {
    pub derive: String,
    #[serde(default)]
    pub prefix: String,
}

impl Derivation {
    pub fn new(derive: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            derive: derive.into(),
            prefix: prefix.into(),
        }
    }

    /// Apply to an already resolved source table.
    pub fn apply(&self, source: &TokenTable) -> TokenTable {
        derive_table(source, &self.prefix)
    }
}

/// Copy all tokens of `source`, prefixing each key.
pub fn derive_table(source: &TokenTable, prefix: &str) -> TokenTable {
    source
        .iter()
        .map(|(key, value)| (format!("{prefix}{key}"), value.clone()))
        .collect()
}

/// Build a table from `(name, value)` pairs.
pub fn table<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> TokenTable {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
