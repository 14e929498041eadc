//! Site building orchestration.
//!
//! Build pipeline phases:
//! - **Init** - Clean output directory (with `--clean`)
//! - **Theme** - Resolve theme tokens, write `build.css.theme`
//! - **Collect** - Load Markdown pages, run the path rule, reject URL clashes
//! - **Compile** - Parallel render + write
//! - **CSS** - Run the PostCSS pipeline (if enabled)

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use super::theme::write_theme;
use crate::{
    compiler::{SourcePage, check_url_conflicts, compile_page, load_pages},
    config::SiteConfig,
    debug, hooks, log,
    logger::ProgressLine,
    page::PageLayout,
    utils::plural_count,
};

/// What a build produced.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    /// Written HTML files, sorted.
    pub files: Vec<PathBuf>,
    /// PostCSS output, when the pipeline ran.
    pub stylesheet: Option<PathBuf>,
}

/// Build the entire site.
pub fn build_site(config: &SiteConfig, quiet: bool) -> Result<BuildReport> {
    init_build(config)?;

    write_theme(config, &config.build.css.theme)?;
    debug!("theme"; "wrote {}", config.root_relative(&config.build.css.theme).display());

    let pages = load_pages(config)?;
    check_url_conflicts(&pages, config.get_root())?;

    let progress = (!quiet).then(|| ProgressLine::new(&[("pages", pages.len())]));
    let files = compile_pages(config, &pages, progress.as_ref())?;
    if let Some(p) = progress {
        p.finish();
    }

    let stylesheet = config
        .build
        .css
        .enable
        .then(|| hooks::css::run_css(config))
        .transpose()?;

    let report = BuildReport { files, stylesheet };
    if !quiet {
        log_build_result(config, &report);
    }

    Ok(report)
}

/// Prepare the output directory, removing it first with `--clean`.
fn init_build(config: &SiteConfig) -> Result<()> {
    let output = &config.build.output;

    if config.build.clean && output.exists() {
        if config.get_root().starts_with(output) || config.build.content.starts_with(output) {
            bail!(
                "refusing to clean {}: it contains the site sources",
                output.display()
            );
        }
        fs::remove_dir_all(output)
            .with_context(|| format!("failed to clean {}", output.display()))?;
        debug!("build"; "cleaned {}", config.root_relative(output).display());
    }

    fs::create_dir_all(output).with_context(|| format!("failed to create {}", output.display()))
}

/// Render and write every page in parallel.
fn compile_pages(
    config: &SiteConfig,
    pages: &[SourcePage],
    progress: Option<&ProgressLine>,
) -> Result<Vec<PathBuf>> {
    let layout = PageLayout::new(config);
    let output_dir = &config.build.output;

    let mut files = pages
        .par_iter()
        .map(|page| {
            let html = compile_page(&layout, &config.markdown, page);
            let file = page.output_file(output_dir);
            write_file(&file, &html).with_context(|| {
                format!("failed to write {}", config.root_relative(&page.source).display())
            })?;
            if let Some(p) = progress {
                p.inc("pages");
            }
            Ok(file)
        })
        .collect::<Result<Vec<_>>>()?;

    files.sort();
    Ok(files)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

fn log_build_result(config: &SiteConfig, report: &BuildReport) {
    let output = config.root_relative(&config.build.output);
    if report.files.is_empty() {
        log!(
            "warning";
            "no Markdown pages found in {}",
            config.root_relative(&config.build.content).display()
        );
    } else {
        log!(
            "build";
            "{} written to {}",
            plural_count(report.files.len(), "page"),
            output.display()
        );
    }
    if let Some(stylesheet) = &report.stylesheet {
        log!("css"; "stylesheet written to {}", config.root_relative(stylesheet).display());
    }
}
