//! `[theme]` design tokens for the CSS engine.
//!
//! Categories use the CSS engine's camelCase names (`screens`, `spacing`,
//! `maxWidth`, `maxHeight`, `zIndex`, `inset`, ...).
//!
//! # Example
//!
//! ```toml
//! [theme.screens]          # replaces the stock breakpoints
//! sm = "640px"
//! lg = "1024px"
//!
//! [theme.extend]
//! maxWidth = { derive = "screens", prefix = "screen-" }
//! inset = { derive = "spacing" }
//! zIndex = { "60" = "60" }
//! ```
//!
//! Without `[theme.extend]`, `maxWidth` and `inset` are derived as above.

pub mod defaults;
mod resolve;
pub mod tokens;

pub use resolve::{ResolvedTheme, ThemeError, derivation_errors, resolve};
pub use tokens::{TokenSource, TokenTable};

use crate::config::{ConfigDiagnostics, FieldPath};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Theme section: category overrides plus `extend`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Categories replacing the stock scales.
    #[serde(flatten)]
    pub categories: IndexMap<String, TokenTable>,

    /// Literal or derived extension tables.
    pub extend: IndexMap<String, TokenSource>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            categories: IndexMap::new(),
            extend: defaults::extend(),
        }
    }
}

impl ThemeConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for err in derivation_errors(self) {
            let field = FieldPath::new("theme.extend").child(err.target());
            let hint = match &err {
                ThemeError::UnknownCategory { .. } => {
                    "derive from a stock category or one defined under `[theme]`"
                }
                ThemeError::DerivedSource { .. } => {
                    "derive from the original category instead of another derivation"
                }
            };
            diag.error_with_hint(field, err.to_string(), hint);
        }

        for (name, table) in &self.categories {
            if table.is_empty() {
                diag.warn(
                    FieldPath::new("theme").child(name),
                    "empty table removes every stock token of this category",
                );
            }
        }
    }

    pub fn resolve(&self) -> Result<ResolvedTheme, ThemeError> {
        resolve(self)
    }
}
