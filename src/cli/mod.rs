//! Command-line interface module.

mod args;
pub mod build;
pub mod check;
pub mod theme;

pub use args::{BuildArgs, Cli, Commands};
