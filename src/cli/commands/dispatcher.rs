//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;
use std::path::PathBuf;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::mode::ResolvedMode;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, writing its output to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            config_override: None,
        }
    }

    /// Load this config file instead of the project's.
    pub fn with_config_override(mut self, path: Option<PathBuf>) -> Self {
        self.config_override = path;
        self
    }

    /// Dispatch and execute a command.
    ///
    /// Commands that depend on the mode resolve it here, once, from the
    /// `--mode` flag and the environment.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        match &cli.command {
            Commands::Compose(args) => {
                let resolved = ResolvedMode::from_env(cli.mode.as_deref())?;
                let cmd = super::compose::ComposeCommand::new(
                    &self.project_root,
                    self.config_override.clone(),
                    resolved.mode,
                    args.clone(),
                );
                cmd.execute(out)
            }
            Commands::Mode => {
                let resolved = ResolvedMode::from_env(cli.mode.as_deref())?;
                let cmd = super::mode::ModeCommand::new(resolved);
                cmd.execute(out)
            }
            Commands::Schema => {
                let cmd = super::schema::SchemaCommand::new();
                cmd.execute(out)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn dispatches_schema_without_config() {
        use clap::Parser;

        let cli = Cli::parse_from(["lintlayer", "schema"]);
        let dispatcher = CommandDispatcher::new(PathBuf::from("/nonexistent"));
        let mut out = Vec::new();

        let result = dispatcher.dispatch(&cli, &mut out).unwrap();

        assert!(result.success);
        assert!(String::from_utf8(out).unwrap().contains("\"$schema\""));
    }
}
