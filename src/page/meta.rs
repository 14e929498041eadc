//! Page metadata from Markdown frontmatter.

use serde::{Deserialize, Serialize};

pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Page metadata from YAML (`---`) or TOML (`+++`) frontmatter
///
/// # Standard Fields
///
/// | Field         | Type      | Description                               |
/// |---------------|-----------|-------------------------------------------|
/// | `title`       | `String`  | Page title (falls back to the first `#`)  |
/// | `description` | `String`  | `<meta name="description">`               |
/// | `permalink`   | `String`  | Explicit output URL, skips path rewriting |
/// | `sidebar`     | `bool`    | Render the sidebar (default: true)        |
///
/// Any other field lands in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PageMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Custom output URL (e.g. `/docs/intro/`).
    pub permalink: Option<String>,
    #[serde(default = "default_true")]
    pub sidebar: bool,
    /// Additional user-defined fields.
    #[serde(flatten, default)]
    pub extra: JsonMap,
}

fn default_true() -> bool {
    true
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            permalink: None,
            sidebar: true,
            extra: JsonMap::new(),
        }
    }
}

impl PageMeta {
    /// Non-empty permalink, if any. Whitespace is a value, only `""` is absent.
    pub fn permalink(&self) -> Option<&str> {
        self.permalink.as_deref().filter(|p| !p.is_empty())
    }
}
