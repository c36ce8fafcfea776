//! Schema command implementation.
//!
//! The `lintlayer schema` command prints the JSON Schema of the project file.

use std::io::Write;

use crate::config::SchemaGenerator;
use crate::error::{LintlayerError, Result};

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
#[derive(Default)]
pub struct SchemaCommand;

impl SchemaCommand {
    /// Create a new schema command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for SchemaCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let schema = SchemaGenerator::new().generate();
        let json =
            serde_json::to_string_pretty(&schema).map_err(|e| LintlayerError::Other(e.into()))?;
        writeln!(out, "{}", json)?;
        Ok(CommandResult::success())
    }
}
