//! `:::escape ... :::` regions.
//!
//! Everything between the sentinels is HTML-escaped and trimmed before the
//! Markdown parser sees it, so the region renders as literal text:
//!
//! ```text
//! :::escape<div class="alert">:::   ->   &lt;div class=&quot;alert&quot;&gt;
//! ```

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

use crate::utils::html::escape;

/// Non-greedy; `.` also matches newlines so a region may span lines.
static ESCAPE_REGION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s):::escape(.*?):::").expect("escape region pattern is valid")
});

/// Rewrite every escape region. Input without a region is returned borrowed.
pub fn escape_regions(markdown: &str) -> Cow<'_, str> {
    ESCAPE_REGION.replace_all(markdown, |caps: &regex::Captures<'_>| {
        escape(caps[1].trim()).into_owned()
    })
}
