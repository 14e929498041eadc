//! Page shell: `<head>`, sidebar navigation, content, scripts.

use std::fmt::Write;

use super::PageDescriptor;
use crate::config::{SidebarConfig, SiteConfig};
use crate::embed::page::{PAGE_HTML, PageVars};
use crate::highlight::HighlightAdapter;
use crate::markdown::RenderedMarkdown;
use crate::utils::html::{escape, escape_attr};

/// Wraps rendered Markdown into complete HTML documents.
pub struct PageLayout<'a> {
    config: &'a SiteConfig,
    highlight: HighlightAdapter<'a>,
    /// URL of the PostCSS output stylesheet.
    stylesheet: Option<String>,
}

impl<'a> PageLayout<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        let css = &config.build.css;
        let stylesheet = css
            .enable
            .then(|| css.input.as_ref()?.file_name()?.to_str().map(|n| format!("/{n}")))
            .flatten();

        Self {
            config,
            highlight: HighlightAdapter::new(&config.highlight),
            stylesheet,
        }
    }

    pub fn highlight(&self) -> &HighlightAdapter<'a> {
        &self.highlight
    }

    pub fn render(&self, page: &PageDescriptor, body: &RenderedMarkdown) -> String {
        let meta = &page.frontmatter;
        let site = &self.config.site;

        let title = site.page_title(meta.title.as_deref().or(body.title.as_deref()));
        let head = self.head(meta.description.as_deref().or(site.description.as_deref()));
        let sidebar = if meta.sidebar {
            render_sidebar(&self.config.sidebar, page.url())
        } else {
            String::new()
        };
        let scripts = self.highlight.bootstrap(body.has_code).unwrap_or_default();

        PAGE_HTML.render(&PageVars {
            lang: &escape_attr(&site.lang),
            title: &escape(&title),
            head: &head,
            sidebar: &sidebar,
            content: &body.html,
            scripts: &scripts,
        })
    }

    fn head(&self, description: Option<&str>) -> String {
        let mut head = String::new();
        if let Some(description) = description.filter(|d| !d.is_empty()) {
            let _ = writeln!(
                head,
                "  <meta name=\"description\" content=\"{}\">",
                escape_attr(description)
            );
        }
        if let Some(href) = &self.stylesheet {
            let _ = writeln!(head, "  <link rel=\"stylesheet\" href=\"{}\">", escape_attr(href));
        }
        if let Some(link) = self.highlight.stylesheet() {
            let _ = writeln!(head, "  {link}");
        }
        head
    }
}

/// Sidebar `<nav>`; the entry whose path equals `current_url` gets `class="active"`.
///
/// Section titles and labels are HTML fragments and are emitted as written.
pub fn render_sidebar(sidebar: &SidebarConfig, current_url: &str) -> String {
    if sidebar.is_empty() {
        return String::new();
    }

    let mut html = String::from("    <nav class=\"sidebar\">\n");
    for section in &sidebar.sections {
        let _ = writeln!(html, "      <div class=\"sidebar-group\">");
        let _ = writeln!(html, "        <p class=\"sidebar-heading\">{}</p>", section.title);
        let _ = writeln!(html, "        <ul>");
        for entry in &section.children {
            let active = if entry.path == current_url {
                " class=\"active\""
            } else {
                ""
            };
            let _ = writeln!(
                html,
                "          <li><a href=\"{}\"{active}>{}</a></li>",
                escape_attr(&entry.path),
                entry.label
            );
        }
        let _ = writeln!(html, "        </ul>");
        let _ = writeln!(html, "      </div>");
    }
    html.push_str("    </nav>");
    html
}
