//! Frontmatter extraction from YAML-like (`---`) or TOML (`+++`) blocks.

use anyhow::{Context, Result};
use serde_json::Value;

use crate::page::PageMeta;

/// Split `content` into metadata and body.
///
/// Content without a frontmatter block yields default metadata and the whole
/// input as body.
pub fn extract(content: &str) -> Result<(PageMeta, &str)> {
    match detect(content) {
        Some((fm, body, true)) => Ok((parse_toml(fm)?, body)),
        Some((fm, body, false)) => Ok((parse_yaml_like(fm), body)),
        None => Ok((PageMeta::default(), content)),
    }
}

/// Detect and extract frontmatter.
/// Returns `(frontmatter, body, is_toml)` if found.
fn detect(content: &str) -> Option<(&str, &str, bool)> {
    let trimmed = content.trim_start();

    for (fence, is_toml) in [("---", false), ("+++", true)] {
        let Some(rest) = trimmed.strip_prefix(fence) else {
            continue;
        };
        let closing = format!("\n{fence}");
        if let Some(end) = rest.find(&closing) {
            let fm = rest[..end].trim();
            let body = rest[end + closing.len()..].trim_start_matches(['\r', '\n']);
            return Some((fm, body, is_toml));
        }
    }

    None
}

fn parse_toml(content: &str) -> Result<PageMeta> {
    toml::from_str(content).context("invalid TOML frontmatter")
}

/// Parse simple YAML-like frontmatter (`key: value` per line).
fn parse_yaml_like(content: &str) -> PageMeta {
    let mut meta = PageMeta::default();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = unquote(value.trim());

        match key.trim().to_lowercase().as_str() {
            "title" => meta.title = Some(value.to_string()),
            "description" => meta.description = Some(value.to_string()),
            "permalink" => meta.permalink = Some(value.to_string()),
            "sidebar" => meta.sidebar = !value.eq_ignore_ascii_case("false"),
            _ => {
                meta.extra
                    .insert(key.trim().to_string(), parse_yaml_value(value));
            }
        }
    }

    meta
}

fn unquote(s: &str) -> &str {
    ['"', '\'']
        .iter()
        .find_map(|&q| s.strip_prefix(q).and_then(|s| s.strip_suffix(q)))
        .unwrap_or(s)
}

/// Parse a YAML-like value string to JSON value
///
/// Supports:
/// - Booleans: `true`, `false`
/// - Numbers: `123`, `3.14`
/// - Arrays: `a, b, c` -> `["a", "b", "c"]`
/// - Strings: everything else
fn parse_yaml_value(s: &str) -> Value {
    if s.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if s.eq_ignore_ascii_case("null") || s == "~" {
        return Value::Null;
    }
    if let Ok(n) = s.parse::<i64>() {
        return Value::Number(n.into());
    }
    if let Ok(n) = s.parse::<f64>()
        && let Some(num) = serde_json::Number::from_f64(n)
    {
        return Value::Number(num);
    }

    if s.contains(',') {
        let arr: Vec<Value> = s
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| Value::String(item.to_string()))
            .collect();
        return Value::Array(arr);
    }

    Value::String(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_frontmatter() {
        let content = "---\ntitle: Installation\npermalink: \"/install/\"\n---\n\n# Body";
        let (meta, body) = extract(content).unwrap();

        assert_eq!(meta.title.as_deref(), Some("Installation"));
        assert_eq!(meta.permalink(), Some("/install/"));
        assert!(body.starts_with("# Body"));
    }

    #[test]
    fn test_toml_frontmatter() {
        let content = "+++\ntitle = \"Hello\"\npermalink = \"/hello/\"\nsidebar = false\n+++\n\n# Body";
        let (meta, body) = extract(content).unwrap();

        assert_eq!(meta.title.as_deref(), Some("Hello"));
        assert_eq!(meta.permalink(), Some("/hello/"));
        assert!(!meta.sidebar);
        assert_eq!(body, "# Body");
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "# Just content\n\n---\n";
        let (meta, body) = extract(content).unwrap();

        assert_eq!(meta, PageMeta::default());
        assert_eq!(body, content);
    }

    #[test]
    fn test_unclosed_fence_is_content() {
        let content = "---\ntitle: Hello\n";
        let (meta, body) = extract(content).unwrap();
        assert!(meta.title.is_none());
        assert_eq!(body, content);
    }

    #[test]
    fn test_invalid_toml_frontmatter() {
        let content = "+++\ntitle = \n+++\n";
        assert!(extract(content).is_err());
    }

    #[test]
    fn test_yaml_extra_fields() {
        let content =
            "---\ntitle: Hello\ncustom: world\ncount: 42\nflag: true\nitems: x, y, z\n---\n";
        let (meta, _) = extract(content).unwrap();

        assert_eq!(meta.extra.get("custom"), Some(&serde_json::json!("world")));
        assert_eq!(meta.extra.get("count"), Some(&serde_json::json!(42)));
        assert_eq!(meta.extra.get("flag"), Some(&serde_json::json!(true)));
        assert_eq!(
            meta.extra.get("items"),
            Some(&serde_json::json!(["x", "y", "z"]))
        );
    }
}
