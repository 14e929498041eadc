//! Theme resolution: stock scales, overrides, literal extensions, derivations.
//!
//! Resolution is a pure function of the config and runs on every call, so a
//! derived table always reflects the current value of its source category.
//!
//! ```text
//! stock categories ── [theme.<cat>] replaces ──► base
//! base ── literal [theme.extend.<cat>] merges ──► merged
//! merged ── derivations read ──► derived extend tables
//! ```

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde_json::{Map, Value};
use thiserror::Error;

use super::ThemeConfig;
use super::defaults;
use super::tokens::{TokenSource, TokenTable};

/// Invalid derivation in `[theme.extend]`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("`extend.{target}` derives from unknown category `{category}`")]
    UnknownCategory { target: String, category: String },

    #[error("`extend.{target}` derives from `{category}`, which is itself derived")]
    DerivedSource { target: String, category: String },
}

impl ThemeError {
    /// The `extend` entry that failed.
    pub fn target(&self) -> &str {
        match self {
            Self::UnknownCategory { target, .. } | Self::DerivedSource { target, .. } => target,
        }
    }
}

/// Theme after all overrides, extensions and derivations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTheme {
    /// Categories the site replaced (emitted as-is to the CSS engine).
    pub overrides: IndexMap<String, TokenTable>,
    /// Computed `extend` tables, in config order.
    pub extend: IndexMap<String, TokenTable>,
}

impl ResolvedTheme {
    /// Theme object for the CSS engine: `{ "theme": { <overrides>, "extend": { ... } } }`.
    pub fn to_json(&self) -> Value {
        let mut theme = Map::new();
        for (name, table) in &self.overrides {
            theme.insert(name.clone(), table_json(table));
        }
        let extend: Map<String, Value> = self
            .extend
            .iter()
            .map(|(name, table)| (name.clone(), table_json(table)))
            .collect();
        theme.insert("extend".into(), Value::Object(extend));

        let mut root = Map::new();
        root.insert("theme".into(), Value::Object(theme));
        Value::Object(root)
    }
}

fn table_json(table: &TokenTable) -> Value {
    Value::Object(
        table
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect(),
    )
}

/// Insert every token of `from` into `into`, overwriting equal keys.
fn merge(into: &mut TokenTable, from: &TokenTable) {
    for (key, value) in from {
        into.insert(key.clone(), value.clone());
    }
}

/// Check every derivation without resolving.
pub fn derivation_errors(config: &ThemeConfig) -> Vec<ThemeError> {
    let derived: FxHashSet<&str> = config
        .extend
        .iter()
        .filter(|(_, source)| matches!(source, TokenSource::Derived(_)))
        .map(|(target, _)| target.as_str())
        .collect();

    let stock = defaults::categories();
    let known = |name: &str| {
        stock.contains_key(name)
            || config.categories.contains_key(name)
            || config.extend.contains_key(name)
    };

    config
        .extend
        .iter()
        .filter_map(|(target, source)| {
            let TokenSource::Derived(derivation) = source else {
                return None;
            };
            let category = derivation.derive.clone();
            if derived.contains(category.as_str()) {
                Some(ThemeError::DerivedSource {
                    target: target.clone(),
                    category,
                })
            } else if !known(&category) {
                Some(ThemeError::UnknownCategory {
                    target: target.clone(),
                    category,
                })
            } else {
                None
            }
        })
        .collect()
}

/// Resolve the theme, failing on the first invalid derivation.
pub fn resolve(config: &ThemeConfig) -> Result<ResolvedTheme, ThemeError> {
    if let Some(err) = derivation_errors(config).into_iter().next() {
        return Err(err);
    }

    let mut categories = defaults::categories();
    for (name, table) in &config.categories {
        categories.insert(name.clone(), table.clone());
    }

    for (target, source) in &config.extend {
        if let TokenSource::Literal(table) = source {
            merge(categories.entry(target.clone()).or_default(), table);
        }
    }

    // Derivations see the merged literal set, never each other.
    let extend = config
        .extend
        .iter()
        .map(|(target, source)| {
            let table = match source {
                TokenSource::Literal(table) => table.clone(),
                TokenSource::Derived(derivation) => categories
                    .get(&derivation.derive)
                    .map(|table| derivation.apply(table))
                    .unwrap_or_default(),
            };
            (target.clone(), table)
        })
        .collect();

    Ok(ResolvedTheme {
        overrides: config.categories.clone(),
        extend,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::tokens::{Derivation, table};

    fn config(extend: Vec<(&str, TokenSource)>) -> ThemeConfig {
        ThemeConfig {
            categories: IndexMap::new(),
            extend: extend
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        }
    }

    #[test]
    fn test_default_extend_resolves() {
        let resolved = resolve(&ThemeConfig::default()).unwrap();

        let max_width = &resolved.extend["maxWidth"];
        assert_eq!(max_width.len(), 4);
        assert_eq!(max_width["screen-sm"], "640px");
        assert_eq!(max_width["screen-xl"], "1280px");
        // stock maxWidth tokens are not copied into the extension
        assert!(!max_width.contains_key("xs"));

        assert_eq!(resolved.extend["inset"], defaults::spacing());
        assert!(resolved.overrides.is_empty());
    }

    #[test]
    fn test_derivation_follows_overridden_source() {
        let mut theme = config(vec![(
            "maxWidth",
            TokenSource::Derived(Derivation::new("screens", "screen-")),
        )]);
        theme.categories.insert(
            "screens".into(),
            table([("sm", "640px"), ("lg", "1024px")]),
        );

        let resolved = resolve(&theme).unwrap();
        assert_eq!(
            resolved.extend["maxWidth"],
            table([("screen-sm", "640px"), ("screen-lg", "1024px")])
        );

        // recomputed when the source changes
        theme
            .categories
            .insert("screens".into(), table([("tablet", "700px")]));
        let resolved = resolve(&theme).unwrap();
        assert_eq!(resolved.extend["maxWidth"], table([("screen-tablet", "700px")]));
    }

    #[test]
    fn test_derivation_sees_literal_extension() {
        let theme = config(vec![
            ("spacing", TokenSource::Literal(table([("72", "18rem")]))),
            ("inset", TokenSource::Derived(Derivation::new("spacing", ""))),
        ]);
        let resolved = resolve(&theme).unwrap();
        assert_eq!(resolved.extend["inset"]["72"], "18rem");
        assert_eq!(resolved.extend["inset"]["4"], "1rem");
        let order: Vec<_> = resolved.extend.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["spacing", "inset"]);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let theme = config(vec![(
            "maxWidth",
            TokenSource::Derived(Derivation::new("breakpoints", "screen-")),
        )]);
        let err = resolve(&theme).unwrap_err();
        assert_eq!(
            err,
            ThemeError::UnknownCategory {
                target: "maxWidth".into(),
                category: "breakpoints".into(),
            }
        );
        assert_eq!(err.target(), "maxWidth");
    }

    #[test]
    fn test_derived_source_rejected() {
        let theme = config(vec![
            ("inset", TokenSource::Derived(Derivation::new("spacing", ""))),
            ("margin", TokenSource::Derived(Derivation::new("inset", ""))),
        ]);
        let errors = derivation_errors(&theme);
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            ThemeError::DerivedSource { target, category } if target == "margin" && category == "inset"
        ));
    }

    #[test]
    fn test_to_json_shape() {
        let mut theme = config(vec![(
            "maxWidth",
            TokenSource::Derived(Derivation::new("screens", "screen-")),
        )]);
        theme
            .categories
            .insert("screens".into(), table([("sm", "640px")]));

        let json = resolve(&theme).unwrap().to_json();
        assert_eq!(
            json,
            serde_json::json!({
                "theme": {
                    "screens": { "sm": "640px" },
                    "extend": { "maxWidth": { "screen-sm": "640px" } }
                }
            })
        );
    }
}
