//! Markdown pipeline.
//!
//! ```text
//! source ─► frontmatter::extract ─► escape::escape_regions ─► render::render ─► HTML
//! ```

pub mod escape;
pub mod frontmatter;
pub mod render;

pub use render::{RenderedMarkdown, render};
