//! Mode-indexed severity tables.
//!
//! A table lists the entry a rule should have under each mode:
//!
//! ```yaml
//! array-callback-return:
//!   mode: { edit: off, commit: error, release: error }
//! ```

use serde::{Deserialize, Serialize};

use super::entry::RuleEntry;
use crate::mode::Mode;

/// Candidate entries for one rule, keyed by mode.
///
/// Any mode may be left out. The `silence` slot is accepted for
/// completeness but never consulted: [`select`](Self::select) short-circuits
/// silence to `off`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModeTable {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silence: Option<RuleEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit: Option<RuleEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<RuleEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<RuleEntry>,
}

impl ModeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for one mode's entry.
    pub fn with(mut self, mode: Mode, entry: impl Into<RuleEntry>) -> Self {
        *self.slot_mut(mode) = Some(entry.into());
        self
    }

    /// The entry written for `mode`, as stored.
    pub fn get(&self, mode: Mode) -> Option<&RuleEntry> {
        match mode {
            Mode::Silence => self.silence.as_ref(),
            Mode::Edit => self.edit.as_ref(),
            Mode::Commit => self.commit.as_ref(),
            Mode::Release => self.release.as_ref(),
        }
    }

    /// Project the entry for the active mode.
    ///
    /// Under [`Mode::Silence`] this is always the bare `off` entry. For the
    /// other modes it is the stored entry, or `None` if the table omits that
    /// mode; the caller then leaves the rule unset.
    pub fn select(&self, mode: Mode) -> Option<RuleEntry> {
        if mode == Mode::Silence {
            return Some(RuleEntry::off());
        }
        self.get(mode).cloned()
    }

    fn slot_mut(&mut self, mode: Mode) -> &mut Option<RuleEntry> {
        match mode {
            Mode::Silence => &mut self.silence,
            Mode::Edit => &mut self.edit,
            Mode::Commit => &mut self.commit,
            Mode::Release => &mut self.release,
        }
    }
}
