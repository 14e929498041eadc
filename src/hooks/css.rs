//! PostCSS pipeline.
//!
//! PostCSS CLI arguments: `command input -o output --use plugin...`

use super::{Hook, run_hook};
use crate::config::{CssConfig, SiteConfig};
use anyhow::{Result, anyhow};
use std::path::{Path, PathBuf};

/// Build the PostCSS hook writing to `output`.
pub fn build_css_hook(css: &CssConfig, output: &Path) -> Result<Hook> {
    let input = css
        .input
        .as_ref()
        .ok_or_else(|| anyhow!("CSS input not configured"))?;

    let mut command = css.command.clone();
    command.extend([
        input.display().to_string(),
        "-o".into(),
        output.display().to_string(),
    ]);
    if !css.plugins.is_empty() {
        command.push("--use".into());
        command.extend(css.plugins.iter().cloned());
    }

    Ok(Hook {
        name: "css",
        command,
        quiet: css.quiet,
    })
}

/// Run PostCSS; returns the written stylesheet path.
pub fn run_css(config: &SiteConfig) -> Result<PathBuf> {
    let css = &config.build.css;
    let output = css
        .output_path(&config.build.output)
        .ok_or_else(|| anyhow!("CSS input not configured"))?;

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let hook = build_css_hook(css, &output)?;
    run_hook(&hook, config)?;

    Ok(output)
}
