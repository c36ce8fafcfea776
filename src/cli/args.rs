//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// lintlayer - Mode-aware layered rule-set composition.
#[derive(Debug, Parser)]
#[command(name = "lintlayer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .lintlayer/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Lint mode: silence, edit, commit or release (overrides LINTLAYER_MODE)
    #[arg(short, long, global = true, value_name = "MODE")]
    pub mode: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compose the configuration and print the resulting fragments
    Compose(ComposeArgs),

    /// Show the resolved lint mode
    Mode,

    /// Print the JSON Schema of the configuration file
    Schema,
}

/// Output format for composed fragments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Arguments for the `compose` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ComposeArgs {
    /// Force every rule off while keeping rule options
    #[arg(long, env = "LINTLAYER_DISABLE")]
    pub disable: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}
