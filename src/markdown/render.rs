//! Markdown to HTML with pulldown-cmark.
//!
//! Code blocks are taken out of the event stream and rendered by the
//! [`HighlightAdapter`]; everything else goes through `push_html` unchanged.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Parser, Tag, TagEnd, html};
use std::borrow::Cow;

use super::escape::escape_regions;
use crate::config::MarkdownConfig;
use crate::highlight::HighlightAdapter;

/// Result of rendering one Markdown body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedMarkdown {
    pub html: String,
    /// Text of the first level-1 heading.
    pub title: Option<String>,
    /// At least one code block carries a language tag.
    pub has_code: bool,
}

/// Render a Markdown body (frontmatter already removed).
pub fn render(
    markdown: &str,
    config: &MarkdownConfig,
    highlight: &HighlightAdapter<'_>,
) -> RenderedMarkdown {
    let source = if config.escape {
        escape_regions(markdown)
    } else {
        Cow::Borrowed(markdown)
    };

    let mut events = Vec::new();
    let mut code: Option<(String, String)> = None;
    let mut heading: Option<String> = None;
    let mut title = None;
    let mut has_code = false;

    for event in Parser::new_ext(&source, config.to_pulldown_options()) {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let info = match kind {
                    CodeBlockKind::Fenced(info) => info.trim().to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                code = Some((info, String::new()));
            }
            Event::Text(text) if code.is_some() => {
                if let Some((_, buf)) = code.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((info, text)) = code.take() {
                    has_code |= !info.is_empty();
                    events.push(Event::Html(highlight.code_block(&info, &text).into()));
                }
            }
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) if title.is_none() => {
                heading = Some(String::new());
                events.push(event);
            }
            Event::Text(ref text) | Event::Code(ref text) if heading.is_some() => {
                if let Some(buf) = heading.as_mut() {
                    buf.push_str(text);
                }
                events.push(event);
            }
            Event::End(TagEnd::Heading(HeadingLevel::H1)) if heading.is_some() => {
                title = heading.take().map(|t| t.trim().to_string());
                events.push(event);
            }
            event => events.push(event),
        }
    }

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, events.into_iter());

    RenderedMarkdown {
        html: out,
        title,
        has_code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HighlightConfig;

    fn render_default(markdown: &str) -> RenderedMarkdown {
        let highlight = HighlightConfig::default();
        render(
            markdown,
            &MarkdownConfig::default(),
            &HighlightAdapter::new(&highlight),
        )
    }

    #[test]
    fn test_basic_paragraph() {
        let out = render_default("Hello *world*");
        assert_eq!(out.html, "<p>Hello <em>world</em></p>\n");
        assert!(!out.has_code);
        assert!(out.title.is_none());
    }

    #[test]
    fn test_first_h1_is_title() {
        let out = render_default("# Install `docsmith`\n\n## Later\n\n# Second");
        assert_eq!(out.title.as_deref(), Some("Install docsmith"));
        assert!(out.html.contains("<h1>Install <code>docsmith</code></h1>"));
    }

    #[test]
    fn test_fenced_code_is_tagged() {
        let out = render_default("```html\n<div class=\"p-4\"></div>\n```\n");
        assert!(out.has_code);
        assert_eq!(
            out.html,
            "<pre class=\"language-html\"><code class=\"language-html\">&lt;div class=&quot;p-4&quot;&gt;&lt;/div&gt;\n</code></pre>\n"
        );
    }

    #[test]
    fn test_untagged_code_needs_no_highlighter() {
        let out = render_default("```\nplain\n```\n\n    indented\n");
        assert!(!out.has_code);
        assert!(out.html.contains("<pre><code>plain\n</code></pre>"));
        assert!(out.html.contains("<pre><code>indented\n</code></pre>"));
    }

    #[test]
    fn test_escape_region_renders_as_text() {
        let out = render_default("Use :::escape<b>hi</b>::: here");
        assert_eq!(out.html, "<p>Use &lt;b&gt;hi&lt;/b&gt; here</p>\n");
    }

    #[test]
    fn test_escape_disabled() {
        let highlight = HighlightConfig::default();
        let config = MarkdownConfig {
            escape: false,
            ..Default::default()
        };
        let out = render(
            ":::escape<b>hi</b>:::",
            &config,
            &HighlightAdapter::new(&highlight),
        );
        assert!(out.html.contains("<b>hi</b>"));
    }

    #[test]
    fn test_tables_enabled() {
        let out = render_default("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(out.html.contains("<table>"));
    }
}
