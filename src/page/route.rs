//! Page routing: source file -> regular path -> output path -> output file.
//!
//! # Example
//!
//! ```text
//! src/docs/installation.md
//!   regular path:  /docs/installation.html
//!   output path:   /docs/installation/          (clean URL)
//!   output file:   dist/docs/installation/index.html
//!
//! src/404.md
//!   regular path:  /404.html
//!   output path:   /404.html
//!   output file:   dist/404.html
//! ```

use std::path::{Component, Path, PathBuf};

use super::PageMeta;
use crate::utils::path::to_slash;

/// Regular path of the not-found page; also its output path.
pub const NOT_FOUND_PATH: &str = "/404.html";

/// A page as seen by the path rule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageDescriptor {
    /// Path derived from the source location (e.g. `/docs/installation.html`).
    pub regular_path: String,
    /// Parsed frontmatter.
    pub frontmatter: PageMeta,
    /// Output path, set at most once by [`PageDescriptor::normalize`].
    pub path: Option<String>,
}

impl PageDescriptor {
    pub fn new(regular_path: impl Into<String>, frontmatter: PageMeta) -> Self {
        Self {
            regular_path: regular_path.into(),
            frontmatter,
            path: None,
        }
    }

    /// Apply [`compute_output_path`]; leaves `path` untouched when it yields `None`.
    pub fn normalize(&mut self) {
        if let Some(path) = compute_output_path(self) {
            debug_assert!(self.path.is_none(), "output path assigned twice");
            self.path = Some(path);
        }
    }

    /// Final URL: computed path, else permalink, else regular path.
    pub fn url(&self) -> &str {
        self.path
            .as_deref()
            .or_else(|| self.frontmatter.permalink())
            .unwrap_or(&self.regular_path)
    }
}

/// Decide the output path of a page. First matching rule wins:
///
/// 1. non-empty `permalink` in frontmatter: `None`, the override wins
/// 2. the not-found page: `/404.html`
/// 3. `*.html`: the clean URL, `.html` replaced by `/`
/// 4. anything else: `None`, the regular path is used as-is
pub fn compute_output_path(page: &PageDescriptor) -> Option<String> {
    if page.frontmatter.permalink().is_some() {
        return None;
    }
    if page.regular_path == NOT_FOUND_PATH {
        return Some(NOT_FOUND_PATH.to_string());
    }
    page.regular_path
        .strip_suffix(".html")
        .map(|stem| format!("{stem}/"))
}

/// Regular path for a Markdown file relative to the content directory.
///
/// `README.md` and `index.md` map to their directory; other files to `<stem>.html`.
pub fn regular_path_for(relative: &Path) -> String {
    let slash = to_slash(relative);
    let without_ext = slash
        .strip_suffix(".md")
        .or_else(|| slash.strip_suffix(".markdown"))
        .unwrap_or(&slash);

    let (dir, stem) = match without_ext.rsplit_once('/') {
        Some((dir, stem)) => (Some(dir), stem),
        None => (None, without_ext),
    };

    let is_index = stem.eq_ignore_ascii_case("readme") || stem == "index";
    match (dir, is_index) {
        (None, true) => "/".to_string(),
        (Some(dir), true) => format!("/{dir}/"),
        (None, false) => format!("/{stem}.html"),
        (Some(dir), false) => format!("/{dir}/{stem}.html"),
    }
}

/// Output file for a URL inside `output_dir`.
///
/// Directory URLs (trailing `/` or no extension) get `index.html`.
/// `.` and `..` segments are dropped so a permalink cannot escape `output_dir`.
pub fn output_file_for(output_dir: &Path, url: &str) -> PathBuf {
    let relative: PathBuf = Path::new(url.trim_start_matches('/'))
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .collect();

    let is_dir = url.ends_with('/') || relative.extension().is_none();
    let file = output_dir.join(&relative);
    if is_dir { file.join("index.html") } else { file }
}
