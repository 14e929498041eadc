//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// docsmith documentation site builder CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: docsmith.toml)
    #[arg(short = 'C', long, global = true, default_value = "docsmith.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build the site
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Validate config and sidebar links without writing output
    #[command(visible_alias = "c")]
    Check,

    /// Print the resolved theme tokens as JSON
    #[command(visible_alias = "t")]
    Theme {
        #[command(flatten)]
        args: ThemeArgs,
    },
}

/// Build command arguments
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(long)]
    pub clean: bool,

    /// Run the PostCSS pipeline (overrides `build.css.enable`)
    #[arg(long, overrides_with = "no_css")]
    pub css: bool,

    /// Skip the PostCSS pipeline (overrides `build.css.enable`)
    #[arg(long, overrides_with = "css")]
    pub no_css: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// CSS pipeline override, `None` when neither flag is given.
    pub fn css_override(&self) -> Option<bool> {
        match (self.css, self.no_css) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Theme command arguments
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ThemeArgs {
    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub output_file: Option<PathBuf>,
}
