//! Stock token scales.
//!
//! These mirror the CSS engine's own defaults so derivations (e.g. `screen-*`
//! max widths) resolve without the site restating them. A `[theme.<category>]`
//! table replaces the stock table of that category.

use indexmap::IndexMap;

use super::tokens::{Derivation, TokenSource, TokenTable, table};

pub fn screens() -> TokenTable {
    table([
        ("sm", "640px"),
        ("md", "768px"),
        ("lg", "1024px"),
        ("xl", "1280px"),
    ])
}

pub fn spacing() -> TokenTable {
    table([
        ("px", "1px"),
        ("0", "0"),
        ("1", "0.25rem"),
        ("2", "0.5rem"),
        ("3", "0.75rem"),
        ("4", "1rem"),
        ("5", "1.25rem"),
        ("6", "1.5rem"),
        ("8", "2rem"),
        ("10", "2.5rem"),
        ("12", "3rem"),
        ("16", "4rem"),
        ("20", "5rem"),
        ("24", "6rem"),
        ("32", "8rem"),
        ("40", "10rem"),
        ("48", "12rem"),
        ("56", "14rem"),
        ("64", "16rem"),
    ])
}

pub fn max_width() -> TokenTable {
    table([
        ("xs", "20rem"),
        ("sm", "24rem"),
        ("md", "28rem"),
        ("lg", "32rem"),
        ("xl", "36rem"),
        ("2xl", "42rem"),
        ("3xl", "48rem"),
        ("4xl", "56rem"),
        ("5xl", "64rem"),
        ("6xl", "72rem"),
        ("full", "100%"),
    ])
}

pub fn max_height() -> TokenTable {
    table([("full", "100%"), ("screen", "100vh")])
}

pub fn z_index() -> TokenTable {
    table([
        ("auto", "auto"),
        ("0", "0"),
        ("10", "10"),
        ("20", "20"),
        ("30", "30"),
        ("40", "40"),
        ("50", "50"),
    ])
}

pub fn inset() -> TokenTable {
    table([("0", "0"), ("auto", "auto")])
}

/// All stock categories, keyed by their config name.
pub fn categories() -> IndexMap<String, TokenTable> {
    IndexMap::from([
        ("screens".to_string(), screens()),
        ("spacing".to_string(), spacing()),
        ("maxWidth".to_string(), max_width()),
        ("maxHeight".to_string(), max_height()),
        ("zIndex".to_string(), z_index()),
        ("inset".to_string(), inset()),
    ])
}

/// Extensions applied when `[theme.extend]` is absent.
pub fn extend() -> IndexMap<String, TokenSource> {
    IndexMap::from([
        (
            "maxWidth".to_string(),
            TokenSource::Derived(Derivation::new("screens", "screen-")),
        ),
        (
            "inset".to_string(),
            TokenSource::Derived(Derivation::new("spacing", "")),
        ),
    ])
}
