//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Tailwind CSS"
//! description = "A utility-first CSS framework for rapidly building custom designs."
//! lang = "en-US"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Site metadata used by the page layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site title, appended to every page title.
    pub title: String,
    /// `<meta name="description">` fallback.
    pub description: Option<String>,
    /// `<html lang>` attribute.
    pub lang: String,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: None,
            lang: "en-US".into(),
        }
    }
}

impl SiteSectionConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.warn(
                FieldPath::new("site.title"),
                "site title is empty, page titles will show only the page name",
            );
        }
    }

    /// `<title>` text for a page.
    pub fn page_title(&self, page_title: Option<&str>) -> String {
        match (page_title.filter(|t| !t.is_empty()), self.title.is_empty()) {
            (Some(page), false) => format!("{page} - {}", self.title),
            (Some(page), true) => page.to_string(),
            (None, _) => self.title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_title() {
        let site = SiteSectionConfig {
            title: "Tailwind CSS".into(),
            ..Default::default()
        };
        assert_eq!(site.page_title(Some("Installation")), "Installation - Tailwind CSS");
        assert_eq!(site.page_title(Some("")), "Tailwind CSS");
        assert_eq!(site.page_title(None), "Tailwind CSS");

        let untitled = SiteSectionConfig::default();
        assert_eq!(untitled.page_title(Some("Installation")), "Installation");
    }

    #[test]
    fn test_empty_title_is_warning() {
        let mut diag = ConfigDiagnostics::new();
        SiteSectionConfig::default().validate(&mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
    }
}
