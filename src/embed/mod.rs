//! Embedded static resources.
//!
//! # Usage
//!
//! ```ignore
//! use embed::page::{PAGE_HTML, PageVars};
//! use embed::highlight::{HIGHLIGHT_JS, HighlightVars};
//!
//! let js = HIGHLIGHT_JS.render(&HighlightVars { script: "/js/prism.js" });
//! ```

mod template;

pub use template::{Template, TemplateVars};

pub mod page {
    use super::{Template, TemplateVars};
    use regex::{Captures, Regex};
    use std::sync::LazyLock;

    static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"__DOCSMITH_([A-Z]+)__").expect("placeholder pattern is valid")
    });

    /// Variables for page.html. Substituted in one pass over the template,
    /// so inserted text is never scanned for placeholders.
    pub struct PageVars<'a> {
        pub lang: &'a str,
        /// Already escaped.
        pub title: &'a str,
        pub head: &'a str,
        pub sidebar: &'a str,
        pub content: &'a str,
        pub scripts: &'a str,
    }

    impl PageVars<'_> {
        fn get(&self, name: &str) -> Option<&str> {
            match name {
                "LANG" => Some(self.lang),
                "TITLE" => Some(self.title),
                "HEAD" => Some(self.head),
                "SIDEBAR" => Some(self.sidebar),
                "CONTENT" => Some(self.content),
                "SCRIPTS" => Some(self.scripts),
                _ => None,
            }
        }
    }

    impl TemplateVars for PageVars<'_> {
        fn apply(&self, content: &str) -> String {
            PLACEHOLDER
                .replace_all(content, |caps: &Captures<'_>| {
                    self.get(&caps[1]).unwrap_or(&caps[0]).to_string()
                })
                .into_owned()
        }
    }

    /// Page shell: sidebar plus rendered Markdown.
    pub const PAGE_HTML: Template<PageVars<'static>> = Template::new(include_str!("page.html"));

}

pub mod highlight {
    use super::{Template, TemplateVars};

    /// Variables for highlight.js.
    pub struct HighlightVars<'a> {
        /// Highlighter library URL.
        pub script: &'a str,
    }

    impl TemplateVars for HighlightVars<'_> {
        fn apply(&self, content: &str) -> String {
            content.replace("__DOCSMITH_HIGHLIGHT_SCRIPT__", &js_string(self.script))
        }
    }

    /// JSON string literal that is also safe inside `<script>`.
    fn js_string(s: &str) -> String {
        serde_json::to_string(s)
            .unwrap_or_else(|_| "\"\"".into())
            .replace("</", "<\\/")
    }

    /// Highlighter bootstrap: manual mode, then one `highlightElement` call per block.
    pub const HIGHLIGHT_JS: Template<HighlightVars<'static>> =
        Template::new(include_str!("highlight.js"));

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_js_string_quotes_and_script_close() {
            assert_eq!(js_string("/js/prism.js"), r#""/js/prism.js""#);
            assert_eq!(js_string("a\"</script>"), r#""a\"<\/script>""#);
        }
    }
}
