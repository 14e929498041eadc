//! External build hooks.
//!
//! - `runner`: `$DOCSMITH_*` variables and command execution
//! - `css`: the PostCSS pipeline, built as a hook

pub mod css;
mod runner;

pub use runner::*;
