//! Pages: metadata, routing and layout.
//!
//! - [`PageMeta`] - frontmatter fields
//! - [`PageDescriptor`] - regular path, frontmatter, computed output path
//! - [`PageLayout`] - HTML shell with sidebar

mod layout;
mod meta;
pub mod route;

pub use layout::PageLayout;
pub use meta::PageMeta;
pub use route::{PageDescriptor, output_file_for, regular_path_for};
