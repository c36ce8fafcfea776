//! The closed set of lint modes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::resolver::invalid_mode;
use crate::error::LintlayerError;

/// Strictness level selected at startup.
///
/// `Silence` turns every mode-table rule off; the other three pick
/// progressively stricter entries from each rule's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Every mode-table rule resolves to `off`.
    Silence,
    /// Relaxed checks while editing.
    Edit,
    /// Checks run before committing.
    Commit,
    /// Full checks for release builds.
    #[default]
    Release,
}

impl Mode {
    /// Every mode, in declaration order.
    pub const ALL: [Mode; 4] = [Mode::Silence, Mode::Edit, Mode::Commit, Mode::Release];

    /// The name used on the command line and in the environment.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Silence => "silence",
            Mode::Edit => "edit",
            Mode::Commit => "commit",
            Mode::Release => "release",
        }
    }

    /// Look up a mode by its exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == name)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = LintlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| invalid_mode(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_release() {
        assert_eq!(Mode::default(), Mode::Release);
    }

    #[test]
    fn names_round_trip_through_from_name() {
        for mode in Mode::ALL {
            assert_eq!(Mode::from_name(mode.as_str()), Some(mode));
        }
    }

    #[test]
    fn from_name_is_case_sensitive() {
        assert_eq!(Mode::from_name("Commit"), None);
        assert_eq!(Mode::from_name(" commit"), None);
    }

    #[test]
    fn from_str_rejects_unknown_name() {
        let err = "strict".parse::<Mode>().unwrap_err();
        assert!(matches!(err, LintlayerError::InvalidMode { .. }));
    }

    #[test]
    fn display_uses_lowercase_name() {
        assert_eq!(Mode::Silence.to_string(), "silence");
        assert_eq!(Mode::Release.to_string(), "release");
    }

    #[test]
    fn serde_uses_lowercase_name() {
        let json = serde_json::to_string(&Mode::Edit).unwrap();
        assert_eq!(json, "\"edit\"");
        let mode: Mode = serde_yaml::from_str("commit").unwrap();
        assert_eq!(mode, Mode::Commit);
    }
}
