//! Compose command implementation.
//!
//! The `lintlayer compose` command loads the project config, builds every
//! fragment for the resolved mode, applies the blanket override, and prints
//! the result for the analysis engine.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::{ComposeArgs, OutputFormat};
use crate::config::{compose, load_config, ComposeOptions};
use crate::error::{LintlayerError, Result};
use crate::mode::Mode;

use super::dispatcher::{Command, CommandResult};

/// The compose command implementation.
pub struct ComposeCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    mode: Mode,
    args: ComposeArgs,
}

impl ComposeCommand {
    /// Create a new compose command.
    pub fn new(
        project_root: &Path,
        config_override: Option<PathBuf>,
        mode: Mode,
        args: ComposeArgs,
    ) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override,
            mode,
            args,
        }
    }
}

impl Command for ComposeCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let loaded = load_config(&self.project_root, self.config_override.as_deref())?;

        let options = ComposeOptions {
            mode: self.mode,
            disable: self.args.disable,
        };
        let fragments = compose(&loaded.config, loaded.base_dir(), options)?;

        let rendered = match self.args.format {
            OutputFormat::Json => serde_json::to_string_pretty(&fragments)
                .map_err(|e| LintlayerError::Other(e.into()))?,
            OutputFormat::Yaml => {
                serde_yaml::to_string(&fragments).map_err(|e| LintlayerError::Other(e.into()))?
            }
        };
        writeln!(out, "{}", rendered.trim_end())?;

        Ok(CommandResult::success())
    }
}
