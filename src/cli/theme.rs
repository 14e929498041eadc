//! `docsmith theme`: resolved design tokens as JSON.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

use super::args::ThemeArgs;
use crate::config::SiteConfig;
use crate::log;

/// Serialize the resolved theme.
pub fn theme_json(config: &SiteConfig, pretty: bool) -> Result<String> {
    let theme = config.theme.resolve()?.to_json();
    let json = if pretty {
        serde_json::to_string_pretty(&theme)?
    } else {
        serde_json::to_string(&theme)?
    };
    Ok(json)
}

/// Write the resolved theme to `path`, creating parent directories.
pub fn write_theme(config: &SiteConfig, path: &Path) -> Result<()> {
    let json = theme_json(config, true)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, json + "\n").with_context(|| format!("failed to write {}", path.display()))
}

/// Execute theme command
pub fn run_theme(args: &ThemeArgs, config: &SiteConfig) -> Result<()> {
    match &args.output_file {
        Some(path) => {
            write_theme(config, path)?;
            log!("theme"; "wrote {}", path.display());
        }
        None => {
            let json = theme_json(config, args.pretty)?;
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }
    Ok(())
}
