//! Command-line interface for lintlayer.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, ComposeArgs, OutputFormat};
pub use commands::{Command, CommandDispatcher, CommandResult};
