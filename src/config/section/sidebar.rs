//! `[[sidebar]]` navigation manifest.
//!
//! An ordered list of sections, each with an ordered list of `[path, label]`
//! entries. Labels are HTML fragments and are rendered verbatim.
//!
//! # Example
//!
//! ```toml
//! [[sidebar]]
//! title = "Getting Started"
//! children = [
//!   ["/docs/installation/", "Installation"],
//!   ["/docs/upgrade-guide/", "Upgrade Guide"],
//! ]
//!
//! [[sidebar]]
//! title = "Core Concepts"
//! children = [["/docs/functions-and-directives/", "Functions &amp; Directives"]]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// Sidebar manifest: sections in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SidebarConfig {
    pub sections: Vec<NavigationSection>,
}

/// A titled group of sidebar links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationSection {
    pub title: String,
    #[serde(default)]
    pub children: Vec<NavigationEntry>,
}

/// One sidebar link, written as `[path, label]` in TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct NavigationEntry {
    pub path: String,
    pub label: String,
}

impl NavigationEntry {
    #[cfg(test)]
    pub fn new(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
        }
    }
}

impl From<(String, String)> for NavigationEntry {
    fn from((path, label): (String, String)) -> Self {
        Self { path, label }
    }
}

impl From<NavigationEntry> for (String, String) {
    fn from(entry: NavigationEntry) -> Self {
        (entry.path, entry.label)
    }
}

impl SidebarConfig {
    #[cfg(test)]
    pub fn new(sections: Vec<NavigationSection>) -> Self {
        Self { sections }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// All entries in display order.
    pub fn entries(&self) -> impl Iterator<Item = &NavigationEntry> {
        self.sections.iter().flat_map(|s| s.children.iter())
    }

    /// Validate the manifest.
    ///
    /// # Checks
    /// - every section has a non-empty title
    /// - every path starts with `/`
    /// - every path is unique across the whole manifest
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        // path -> (section, child) of first occurrence
        let mut seen: FxHashMap<&str, (usize, usize)> = FxHashMap::default();

        for (si, section) in self.sections.iter().enumerate() {
            let section_field = FieldPath::indexed("sidebar", si);

            if section.title.trim().is_empty() {
                diag.error(section_field.child("title"), "section title is empty");
            }

            for (ci, entry) in section.children.iter().enumerate() {
                let field = section_field.child(&format!("children[{ci}]"));

                if !entry.path.starts_with('/') {
                    diag.error_with_hint(
                        field.clone(),
                        format!("path `{}` must start with `/`", entry.path),
                        format!("use `/{}`", entry.path.trim_start_matches("./")),
                    );
                }

                if let Some(&(first_si, first_ci)) = seen.get(entry.path.as_str()) {
                    diag.error_with_hint(
                        field,
                        format!("duplicate sidebar path `{}`", entry.path),
                        format!(
                            "already listed at sidebar[{first_si}].children[{first_ci}] in section \"{}\"",
                            self.sections[first_si].title
                        ),
                    );
                } else {
                    seen.insert(entry.path.as_str(), (si, ci));
                }
            }
        }
    }

    /// Warn about entries that no built page will serve.
    pub fn check_links(&self, urls: &FxHashSet<String>, diag: &mut ConfigDiagnostics) {
        for (si, section) in self.sections.iter().enumerate() {
            for (ci, entry) in section.children.iter().enumerate() {
                if !urls.contains(&entry.path) {
                    diag.warn(
                        FieldPath::indexed("sidebar", si).child(&format!("children[{ci}]")),
                        format!("no page is built for `{}`", entry.path),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(title: &str, children: &[(&str, &str)]) -> NavigationSection {
        NavigationSection {
            title: title.into(),
            children: children
                .iter()
                .map(|(p, l)| NavigationEntry::new(*p, *l))
                .collect(),
        }
    }

    #[test]
    fn test_parse_tuple_entries() {
        #[derive(Deserialize)]
        struct Wrapper {
            sidebar: SidebarConfig,
        }

        let toml = r#"
[[sidebar]]
title = "Getting Started"
children = [
  ["/docs/installation/", "Installation"],
  ["/docs/upgrade-guide/", "Upgrade Guide"],
]

[[sidebar]]
title = "Base styles"
children = [["/docs/preflight/", "Preflight"]]
"#;
        let parsed: Wrapper = toml::from_str(toml).unwrap();
        let sidebar = parsed.sidebar;
        assert_eq!(sidebar.sections.len(), 2);
        assert_eq!(sidebar.sections[0].title, "Getting Started");
        assert_eq!(
            sidebar.sections[0].children[1],
            NavigationEntry::new("/docs/upgrade-guide/", "Upgrade Guide")
        );
        assert_eq!(sidebar.entries().count(), 3);
    }

    #[test]
    fn test_validate_unique_paths_ok() {
        let sidebar = SidebarConfig::new(vec![
            section("A", &[("/docs/a/", "A"), ("/docs/b/", "B")]),
            section("B", &[("/docs/c/", "C")]),
        ]);
        let mut diag = ConfigDiagnostics::new();
        sidebar.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_validate_rejects_duplicate_across_sections() {
        let sidebar = SidebarConfig::new(vec![
            section("Layout", &[("/docs/display/", "Display")]),
            section("Other", &[("/docs/float/", "Float"), ("/docs/display/", "Display again")]),
        ]);
        let mut diag = ConfigDiagnostics::new();
        sidebar.validate(&mut diag);

        assert_eq!(diag.len(), 1);
        let err = &diag.errors()[0];
        assert_eq!(err.field.as_str(), "sidebar[1].children[1]");
        assert!(err.message.contains("/docs/display/"));
        assert!(err.hint.as_deref().unwrap().contains("sidebar[0].children[0]"));
    }

    #[test]
    fn test_validate_rejects_duplicate_within_section() {
        let sidebar = SidebarConfig::new(vec![section(
            "A",
            &[("/docs/a/", "A"), ("/docs/a/", "A2"), ("/docs/a/", "A3")],
        )]);
        let mut diag = ConfigDiagnostics::new();
        sidebar.validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_validate_relative_path_and_empty_title() {
        let sidebar = SidebarConfig::new(vec![section(" ", &[("docs/a/", "A")])]);
        let mut diag = ConfigDiagnostics::new();
        sidebar.validate(&mut diag);

        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["sidebar[0].title", "sidebar[0].children[0]"]);
    }

    #[test]
    fn test_check_links_warns_for_missing_pages() {
        let sidebar = SidebarConfig::new(vec![section(
            "A",
            &[("/docs/a/", "A"), ("/docs/missing/", "Missing")],
        )]);
        let urls: FxHashSet<String> = ["/docs/a/".to_string()].into_iter().collect();
        let mut diag = ConfigDiagnostics::new();
        sidebar.check_links(&urls, &mut diag);

        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
        assert!(diag.warnings()[0].1.contains("/docs/missing/"));
    }
}
