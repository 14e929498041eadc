//! `docsmith check`: validate pages and sidebar links without writing output.

use anyhow::Result;
use rustc_hash::FxHashSet;

use crate::compiler::{check_url_conflicts, load_pages};
use crate::config::{ConfigDiagnostics, SiteConfig};
use crate::log;
use crate::utils::plural_count;

/// Summary of a check run.
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub pages: usize,
    /// `(field, message)` for every sidebar path no page produces.
    pub warnings: Vec<(String, String)>,
}

/// Load every page, then cross-check the sidebar against the page URLs.
///
/// Configuration errors are already reported by `SiteConfig::load`.
pub fn check_site(config: &SiteConfig) -> Result<CheckReport> {
    let pages = load_pages(config)?;
    check_url_conflicts(&pages, config.get_root())?;

    let urls: FxHashSet<String> = pages.iter().map(|p| p.url().to_string()).collect();
    let mut diag = ConfigDiagnostics::new();
    config.sidebar.check_links(&urls, &mut diag);

    Ok(CheckReport {
        pages: pages.len(),
        warnings: diag
            .warnings()
            .iter()
            .map(|(field, message)| (field.as_str().to_string(), message.clone()))
            .collect(),
    })
}

/// Execute check command
pub fn run_check(config: &SiteConfig) -> Result<()> {
    let report = check_site(config)?;

    for (field, message) in &report.warnings {
        log!("warning"; "[{}] {}", field, message);
    }

    let links = config.sidebar.entries().count();
    log!(
        "check";
        "{}, {} ok, {}",
        plural_count(report.pages, "page"),
        plural_count(links.saturating_sub(report.warnings.len()), "sidebar link"),
        plural_count(report.warnings.len(), "warning")
    );
    Ok(())
}
