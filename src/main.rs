//! docsmith - a documentation site builder for Markdown sources.

mod cli;
mod compiler;
mod config;
mod embed;
mod highlight;
mod hooks;
mod logger;
mod markdown;
mod page;
mod theme;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => cli::build::build_site(&config, false).map(|_| ()),
        Commands::Check => cli::check::run_check(&config),
        Commands::Theme { args } => cli::theme::run_theme(args, &config),
    }
}
