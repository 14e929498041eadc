//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "src"     # Markdown source directory (relative to site root)
//! output = "dist"     # Output directory for generated HTML
//!
//! [build.css]
//! enable = true
//! command = ["npx", "postcss"]
//! input = "css/main.css"
//! plugins = ["postcss-import", "tailwindcss", "postcss-nested", "autoprefixer"]
//! theme = "theme.json"  # Resolved theme tokens, read by the tailwind config
//! # Runs:
//! #   npx postcss <input> -o <output>/<input file name> --use postcss-import tailwindcss ...
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Content source directory (Markdown files).
    pub content: PathBuf,

    /// Build output directory.
    pub output: PathBuf,

    /// Remove the output directory before building (set by `--clean`).
    #[serde(skip)]
    pub clean: bool,

    /// PostCSS pipeline.
    pub css: CssConfig,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: "src".into(),
            output: "dist".into(),
            clean: false,
            css: CssConfig::default(),
        }
    }
}

impl BuildSectionConfig {
    /// Resolve relative paths against the site root.
    pub fn normalize(&mut self, root: &Path) {
        use crate::utils::path::resolve_from;

        self.content = resolve_from(root, &self.content);
        self.output = resolve_from(root, &self.output);
        self.css.theme = resolve_from(root, &self.css.theme);
        if let Some(input) = self.css.input.take() {
            self.css.input = Some(resolve_from(root, &input));
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.content.is_dir() {
            diag.error_with_hint(
                FieldPath::new("build.content"),
                format!("content directory not found: {}", self.content.display()),
                "create it or point `build.content` at your Markdown sources",
            );
        }

        if self.output == self.content {
            diag.error(
                FieldPath::new("build.output"),
                "output directory must differ from the content directory",
            );
        }

        self.css.validate(diag);
    }
}

// ============================================================================
// [build.css]
// ============================================================================

/// PostCSS pipeline configuration.
///
/// The plugin list is ordered: PostCSS applies plugins in the order given.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CssConfig {
    /// Run the PostCSS command after pages are written.
    pub enable: bool,
    /// PostCSS command (e.g., `["postcss"]` or `["npx", "postcss"]`).
    pub command: Vec<String>,
    /// Input stylesheet.
    pub input: Option<PathBuf>,
    /// Plugins passed to `--use`, in order.
    pub plugins: Vec<String>,
    /// Where the resolved theme tokens are written as JSON.
    pub theme: PathBuf,
    /// Suppress command output.
    pub quiet: bool,
}

impl Default for CssConfig {
    fn default() -> Self {
        Self {
            enable: false,
            command: vec!["postcss".into()],
            input: None,
            plugins: ["postcss-import", "tailwindcss", "postcss-nested", "autoprefixer"]
                .map(String::from)
                .to_vec(),
            theme: "theme.json".into(),
            quiet: true,
        }
    }
}

const CSS_ENABLE: FieldPath = FieldPath::new("build.css.enable");
const CSS_COMMAND: FieldPath = FieldPath::new("build.css.command");
const CSS_INPUT: FieldPath = FieldPath::new("build.css.input");
const CSS_PLUGINS: FieldPath = FieldPath::new("build.css.plugins");

impl CssConfig {
    /// Validate CSS pipeline configuration.
    ///
    /// # Checks
    /// - If enabled:
    ///   - `command` must not be empty
    ///   - `command[0]` must be an installed executable (or package runner)
    ///   - `input` must be configured and point to an existing file
    ///   - `plugins` must not list the same plugin twice
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.enable {
            return;
        }

        let Some(cmd) = self.command.first() else {
            diag.error(
                CSS_COMMAND,
                format!("{CSS_ENABLE} is true but {CSS_COMMAND} is empty"),
            );
            return;
        };

        let is_package_runner = ["npx", "bunx", "pnpx", "yarn", "dlx"].contains(&cmd.as_str());
        if which::which(cmd).is_err() {
            if is_package_runner {
                if let Some(package) = self.command.get(1) {
                    diag.hint(
                        &CSS_COMMAND,
                        format!("`{package}` via `{cmd}`, ensure package is installed"),
                    );
                }
            } else {
                diag.error_with_hint(
                    CSS_COMMAND,
                    format!("`{cmd}` not found"),
                    format!("install the command or update {CSS_COMMAND}"),
                );
            }
        }

        match &self.input {
            None => diag.error(
                CSS_INPUT,
                format!("{CSS_ENABLE} is true but {CSS_INPUT} is not configured"),
            ),
            Some(input) if !input.exists() => diag.error(
                CSS_INPUT,
                format!("{CSS_INPUT} file not found: {}", input.display()),
            ),
            Some(input) if !input.is_file() => diag.error(
                CSS_INPUT,
                format!("{CSS_INPUT} is not a file: {}", input.display()),
            ),
            Some(_) => {}
        }

        for (i, plugin) in self.plugins.iter().enumerate() {
            if self.plugins[..i].contains(plugin) {
                diag.error(CSS_PLUGINS, format!("plugin `{plugin}` is listed twice"));
            }
        }
    }

    /// Output stylesheet path: the input's file name inside the output directory.
    pub fn output_path(&self, output_dir: &Path) -> Option<PathBuf> {
        let name = self.input.as_ref()?.file_name()?;
        Some(output_dir.join(name))
    }
}
