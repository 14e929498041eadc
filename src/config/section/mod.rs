//! Configuration section definitions.
//!
//! Each module corresponds to a section in `docsmith.toml`:
//!
//! | Module      | TOML Section    | Purpose                              |
//! |-------------|-----------------|--------------------------------------|
//! | `build`     | `[build]`       | Content/output paths, PostCSS        |
//! | `highlight` | `[highlight]`   | Client-side syntax highlighting      |
//! | `markdown`  | `[markdown]`    | Markdown extensions, escape filter   |
//! | `sidebar`   | `[[sidebar]]`   | Navigation manifest                  |
//! | `site`      | `[site]`        | Site metadata                        |
//!
//! `[theme]` is defined in [`crate::theme`].

pub mod build;
mod highlight;
mod markdown;
pub mod sidebar;
mod site;

pub use build::{BuildSectionConfig, CssConfig};
pub use highlight::HighlightConfig;
pub use markdown::MarkdownConfig;
pub use sidebar::SidebarConfig;
pub use site::SiteSectionConfig;
