//! Site configuration management for `docsmith.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build], [build.css]
//! │   ├── highlight  # [highlight]
//! │   ├── markdown   # [markdown]
//! │   ├── sidebar    # [[sidebar]]
//! │   └── site       # [site]
//! ├── types/         # FieldPath, ConfigError, ConfigDiagnostics
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section        | Purpose                                         |
//! |----------------|-------------------------------------------------|
//! | `[site]`       | Site metadata (title, description, lang)        |
//! | `[build]`      | Content/output directories, PostCSS pipeline    |
//! | `[markdown]`   | Escape regions and Markdown extensions          |
//! | `[highlight]`  | Client-side syntax highlighting bootstrap       |
//! | `[[sidebar]]`  | Navigation manifest                             |
//! | `[theme]`      | Design tokens for the CSS engine                |

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    BuildSectionConfig, CssConfig, HighlightConfig, MarkdownConfig, SidebarConfig,
    SiteSectionConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{BuildArgs, Cli, Commands},
    log,
    theme::ThemeConfig,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing docsmith.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub site: SiteSectionConfig,

    #[serde(default)]
    pub build: BuildSectionConfig,

    #[serde(default)]
    pub markdown: MarkdownConfig,

    #[serde(default)]
    pub highlight: HighlightConfig,

    /// Navigation manifest (`[[sidebar]]` array of tables)
    #[serde(default)]
    pub sidebar: SidebarConfig,

    #[serde(default)]
    pub theme: ThemeConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file; the project root is the
    /// config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let Some(config_path) = find_config_file(&cli.config) else {
            return Err(ConfigError::Validation(format!(
                "config file '{}' not found in this directory or any parent",
                cli.config.display()
            ))
            .into());
        };

        let mut config = Self::from_path(&config_path)?;
        config.config_path = config_path;
        config.finalize(cli);

        match &cli.command {
            // Printing the theme needs neither content nor the CSS toolchain.
            Commands::Theme { .. } => config.validate_theme()?,
            _ => config.validate()?,
        }

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Finalize configuration after loading: resolve root, apply CLI options,
    /// normalize paths.
    fn finalize(&mut self, cli: &Cli) {
        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let root = crate::utils::path::normalize_path(&root);

        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());
        if let Commands::Build { build_args } = &cli.command {
            self.apply_build_args(build_args);
        }

        self.config_path = crate::utils::path::normalize_path(&self.config_path);
        self.build.normalize(&root);
        self.root = root;
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        crate::logger::set_verbose(args.verbose);

        Self::update_option(&mut self.build.css.enable, args.css_override().as_ref());
        self.build.clean = args.clean;
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate every section, collecting all errors before returning.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.build.validate(&mut diag);
        self.highlight.validate(&mut diag);
        self.sidebar.validate(&mut diag);
        self.theme.validate(&mut diag);

        Self::finish(diag)
    }

    /// Validate only what `docsmith theme` needs.
    pub fn validate_theme(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.theme.validate(&mut diag);
        Self::finish(diag)
    }

    fn finish(diag: ConfigDiagnostics) -> Result<()> {
        diag.print_warnings();
        diag.into_result()
            .map_err(ConfigError::Diagnostics)
            .context("invalid configuration")
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with a minimal `[site]` section prepended.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\ntitle = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;

    #[test]
    fn test_parse_invalid_toml() {
        let err = SiteConfig::parse_with_ignored("[site\ntitle = \"Docs\"").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.get_root(), Path::new(""));
        assert_eq!(config.build.content, PathBuf::from("src"));
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert!(config.markdown.escape);
        assert!(config.highlight.enable);
        assert!(config.sidebar.is_empty());
        assert!(!config.theme.extend.is_empty());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.title, "Test");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = r#"
[site]
title = "Test"

[[sidebar]]
title = "Getting Started"
children = [["/docs/installation/", "Installation"]]

[theme.screens]
sm = "640px"
"#;
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty(), "{ignored:?}");
    }

    #[test]
    fn test_load_resolves_paths_and_cli_overrides() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("pages")).unwrap();
        let config_path = dir.path().join("docsmith.toml");
        fs::write(
            &config_path,
            "[site]\ntitle = \"Docs\"\n[build]\ncontent = \"pages\"\n[build.css]\nenable = true\n",
        )
        .unwrap();

        let cli = Cli::parse_from([
            "docsmith",
            "-C",
            config_path.to_str().unwrap(),
            "build",
            "--clean",
            "--no-css",
        ]);
        let config = SiteConfig::load(&cli).unwrap();

        let root = crate::utils::path::normalize_path(dir.path());
        assert_eq!(config.get_root(), root);
        assert_eq!(config.build.content, root.join("pages"));
        assert_eq!(config.build.output, root.join("dist"));
        assert_eq!(config.build.css.theme, root.join("theme.json"));
        assert!(config.build.clean);
        assert!(!config.build.css.enable);
        assert_eq!(config.root_relative(&config.build.output), Path::new("dist"));
    }

    #[test]
    fn test_load_reports_all_errors() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("docsmith.toml");
        fs::write(
            &config_path,
            r#"
[site]
title = "Docs"

[[sidebar]]
title = "A"
children = [["/a/", "A"], ["/a/", "Again"]]

[theme.extend]
maxWidth = { derive = "nope" }
"#,
        )
        .unwrap();

        let cli = Cli::parse_from(["docsmith", "-C", config_path.to_str().unwrap(), "check"]);
        let err = SiteConfig::load(&cli).unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err:?}");
        };
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"build.content"));
        assert!(fields.iter().any(|f| f.starts_with("sidebar[0]")));
        assert!(fields.contains(&"theme.extend.maxWidth"));
    }

    #[test]
    fn test_demo_config_is_valid() {
        let (config, ignored) =
            SiteConfig::parse_with_ignored(include_str!("../../demos/docsmith.toml")).unwrap();
        assert!(ignored.is_empty(), "{ignored:?}");

        let mut diag = ConfigDiagnostics::new();
        config.sidebar.validate(&mut diag);
        config.theme.validate(&mut diag);
        assert!(diag.is_empty(), "{:?}", diag.errors());

        assert_eq!(config.sidebar.sections.len(), 16);
        assert_eq!(config.sidebar.entries().count(), 92);
        let label = config
            .sidebar
            .entries()
            .find(|e| e.path == "/docs/functions-and-directives/")
            .map(|e| e.label.as_str());
        assert_eq!(label, Some("Functions &amp; Directives"));
        assert_eq!(config.build.css.plugins.len(), 4);
    }

    #[test]
    fn test_theme_command_skips_build_validation() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("docsmith.toml");
        fs::write(&config_path, "[site]\ntitle = \"Docs\"\n").unwrap();

        let cli = Cli::parse_from(["docsmith", "-C", config_path.to_str().unwrap(), "theme"]);
        assert!(SiteConfig::load(&cli).is_ok());
    }
}
