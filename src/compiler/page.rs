//! Loading and compiling a single Markdown page.

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::collect_markdown_files;
use crate::config::{MarkdownConfig, SiteConfig};
use crate::markdown::{frontmatter, render};
use crate::page::{PageDescriptor, PageLayout, output_file_for, regular_path_for};

/// A content file with its routing already decided.
#[derive(Debug, Clone)]
pub struct SourcePage {
    /// Absolute source path.
    pub source: PathBuf,
    pub descriptor: PageDescriptor,
    /// Markdown body without frontmatter.
    pub body: String,
}

impl SourcePage {
    pub fn url(&self) -> &str {
        self.descriptor.url()
    }

    pub fn output_file(&self, output_dir: &Path) -> PathBuf {
        output_file_for(output_dir, self.url())
    }
}

/// Read a page, parse its frontmatter and run the path rule.
pub fn load_page(content_dir: &Path, source: &Path) -> Result<SourcePage> {
    let text = fs::read_to_string(source)
        .with_context(|| format!("failed to read {}", source.display()))?;
    let (meta, body) = frontmatter::extract(&text)
        .with_context(|| format!("invalid frontmatter in {}", source.display()))?;

    let relative = source.strip_prefix(content_dir).unwrap_or(source);
    let mut descriptor = PageDescriptor::new(regular_path_for(relative), meta);
    descriptor.normalize();

    Ok(SourcePage {
        source: source.to_path_buf(),
        descriptor,
        body: body.to_string(),
    })
}

/// Load every page under `build.content` in parallel.
pub fn load_pages(config: &SiteConfig) -> Result<Vec<SourcePage>> {
    let content = &config.build.content;
    collect_markdown_files(content)
        .par_iter()
        .map(|path| load_page(content, path))
        .collect()
}

/// Fail when two pages resolve to the same URL.
pub fn check_url_conflicts(pages: &[SourcePage], root: &Path) -> Result<()> {
    let mut seen: FxHashMap<&str, &Path> = FxHashMap::default();
    let mut conflicts = Vec::new();

    for page in pages {
        if let Some(first) = seen.insert(page.url(), &page.source) {
            conflicts.push(format!(
                "{} <- {} and {}",
                page.url(),
                first.strip_prefix(root).unwrap_or(first).display(),
                page.source.strip_prefix(root).unwrap_or(&page.source).display(),
            ));
        }
    }

    if !conflicts.is_empty() {
        bail!("pages with the same URL:\n{}", conflicts.join("\n"));
    }
    Ok(())
}

/// Render a page to a complete HTML document.
pub fn compile_page(layout: &PageLayout<'_>, markdown: &MarkdownConfig, page: &SourcePage) -> String {
    let body = render(&page.body, markdown, layout.highlight());
    layout.render(&page.descriptor, &body)
}
