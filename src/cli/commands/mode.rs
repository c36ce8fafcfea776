//! Mode command implementation.
//!
//! The `lintlayer mode` command shows which mode is active and why.

use std::io::Write;

use crate::error::Result;
use crate::mode::ResolvedMode;

use super::dispatcher::{Command, CommandResult};

/// The mode command implementation.
pub struct ModeCommand {
    resolved: ResolvedMode,
}

impl ModeCommand {
    /// Create a new mode command for an already resolved mode.
    pub fn new(resolved: ResolvedMode) -> Self {
        Self { resolved }
    }
}

impl Command for ModeCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        writeln!(out, "{} ({})", self.resolved.mode, self.resolved.source)?;
        Ok(CommandResult::success())
    }
}
