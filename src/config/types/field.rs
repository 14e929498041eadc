//! Config field path used to locate diagnostics.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// Dotted path of a config field, e.g. `build.css.input` or `sidebar[2].children[0]`.
///
/// Static paths are free to build; indexed paths (sidebar entries) allocate.
///
/// # Example
///
/// ```ignore
/// diag.error(FieldPath::new("build.css.command"), "command is empty");
/// diag.error(FieldPath::indexed("sidebar", 3), "empty title");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// `section[index]`
    pub fn indexed(section: &str, index: usize) -> Self {
        Self(Cow::Owned(format!("{section}[{index}]")))
    }

    /// Append a child key: `self.key`
    pub fn child(&self, key: &str) -> Self {
        Self(Cow::Owned(format!("{}.{key}", self.0)))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_child_path() {
        let path = FieldPath::indexed("sidebar", 2).child("children[0]");
        assert_eq!(path.as_str(), "sidebar[2].children[0]");
    }
}
