//! `[highlight]` section configuration.
//!
//! Code blocks are highlighted in the browser by Prism, loaded in manual mode.
//!
//! # Example
//!
//! ```toml
//! [highlight]
//! enable = true
//! script = "/js/prism.js"
//! stylesheet = "/css/prism.css"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Default Prism bundle.
const DEFAULT_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/prismjs@1.29.0/prism.min.js";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Inject the highlight bootstrap into pages with code blocks.
    pub enable: bool,
    /// URL of the highlighter script.
    pub script: String,
    /// Optional highlighter theme stylesheet.
    pub stylesheet: Option<String>,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            script: DEFAULT_SCRIPT.into(),
            stylesheet: None,
        }
    }
}

impl HighlightConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.enable && self.script.trim().is_empty() {
            diag.error_with_hint(
                FieldPath::new("highlight.script"),
                "highlighting is enabled but no script is configured",
                "set `highlight.script` or `highlight.enable = false`",
            );
        }
    }
}
