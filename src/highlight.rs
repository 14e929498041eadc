//! Client-side syntax highlighting.
//!
//! Fenced code blocks are emitted as
//! `<pre class="language-x"><code class="language-x">...</code></pre>`; pages
//! that contain at least one block get a bootstrap script that loads the
//! highlighter in manual mode and highlights each block individually.

use crate::config::HighlightConfig;
use crate::embed::highlight::{HIGHLIGHT_JS, HighlightVars};
use crate::utils::html::{escape, escape_attr};

/// Code-block markup and bootstrap for the configured highlighter.
#[derive(Debug, Clone, Copy)]
pub struct HighlightAdapter<'a> {
    config: &'a HighlightConfig,
}

impl<'a> HighlightAdapter<'a> {
    pub fn new(config: &'a HighlightConfig) -> Self {
        Self { config }
    }

    /// Markup for one fenced code block. `info` is the fence info string
    /// (`js`, `rust ignore`, ...); only its first word names the language.
    pub fn code_block(&self, info: &str, code: &str) -> String {
        let code = escape(code);
        match language(info) {
            Some(lang) => {
                let class = format!("language-{}", escape_attr(lang));
                format!("<pre class=\"{class}\"><code class=\"{class}\">{code}</code></pre>\n")
            }
            None => format!("<pre><code>{code}</code></pre>\n"),
        }
    }

    /// `<link>` for the highlighter theme, if configured.
    pub fn stylesheet(&self) -> Option<String> {
        let href = self.config.stylesheet.as_deref()?;
        (self.config.enable && !href.is_empty())
            .then(|| format!("<link rel=\"stylesheet\" href=\"{}\">", escape_attr(href)))
    }

    /// Bootstrap `<script>` for a page; `None` when disabled or the page has no code.
    pub fn bootstrap(&self, has_code: bool) -> Option<String> {
        if !self.config.enable || !has_code {
            return None;
        }
        let js = HIGHLIGHT_JS.render(&HighlightVars {
            script: &self.config.script,
        });
        Some(format!("<script>\n{js}</script>"))
    }
}

fn language(info: &str) -> Option<&str> {
    info.split(|c: char| c.is_whitespace() || c == ',' || c == '{')
        .next()
        .filter(|lang| !lang.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_block_language_classes() {
        let config = HighlightConfig::default();
        let html = HighlightAdapter::new(&config).code_block("js", "if (a < b) {}");
        assert_eq!(
            html,
            "<pre class=\"language-js\"><code class=\"language-js\">if (a &lt; b) {}</code></pre>\n"
        );
    }

    #[test]
    fn test_code_block_info_string_extras() {
        let config = HighlightConfig::default();
        let adapter = HighlightAdapter::new(&config);
        assert!(adapter.code_block("rust ignore", "").contains("language-rust\""));
        assert!(adapter.code_block("js{1,3}", "").contains("language-js\""));
        assert_eq!(adapter.code_block("", "x"), "<pre><code>x</code></pre>\n");
    }

    #[test]
    fn test_bootstrap_only_with_code() {
        let config = HighlightConfig {
            script: "/js/prism.js".into(),
            ..Default::default()
        };
        let adapter = HighlightAdapter::new(&config);
        assert!(adapter.bootstrap(false).is_none());

        let script = adapter.bootstrap(true).unwrap();
        assert!(script.starts_with("<script>"));
        assert!(script.contains("manual: true, disableWorkerMessageHandler: true"));
        assert!(script.contains(r#"script.src = "/js/prism.js";"#));
        assert!(script.contains("highlightElement(blocks[i])"));
        assert!(script.contains(r#"code[class*="language-"]"#));

        // options are set before the library is loaded
        let options = script.find("ctx.Prism =").unwrap();
        let load = script.find("appendChild").unwrap();
        assert!(options < load);
    }

    #[test]
    fn test_disabled_emits_nothing() {
        let config = HighlightConfig {
            enable: false,
            stylesheet: Some("/css/prism.css".into()),
            ..Default::default()
        };
        let adapter = HighlightAdapter::new(&config);
        assert!(adapter.bootstrap(true).is_none());
        assert!(adapter.stylesheet().is_none());
    }

    #[test]
    fn test_stylesheet_link() {
        let config = HighlightConfig {
            stylesheet: Some("/css/prism.css".into()),
            ..Default::default()
        };
        assert_eq!(
            HighlightAdapter::new(&config).stylesheet().as_deref(),
            Some("<link rel=\"stylesheet\" href=\"/css/prism.css\">")
        );
    }
}
