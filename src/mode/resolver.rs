//! Mode resolution.
//!
//! Resolves the active mode using the priority chain:
//! 1. Explicit `--mode` flag
//! 2. `LINTLAYER_MODE` environment variable
//! 3. Fallback to "release"
//!
//! An empty value counts as absent at every level.

use super::level::Mode;
use crate::error::{LintlayerError, Result};

/// Environment variable carrying the mode signal.
pub const MODE_ENV_VAR: &str = "LINTLAYER_MODE";

/// Resolve a raw mode signal.
///
/// An absent signal yields [`Mode::Release`]. A present signal must be one
/// of the names in [`Mode::ALL`].
///
/// # Example
///
/// ```
/// use lintlayer::mode::{resolve_mode, Mode};
///
/// assert_eq!(resolve_mode(Some("commit")).unwrap(), Mode::Commit);
/// assert_eq!(resolve_mode(None).unwrap(), Mode::Release);
/// assert!(resolve_mode(Some("bogus")).is_err());
/// ```
///
/// # Errors
///
/// Returns [`LintlayerError::InvalidMode`] naming every valid mode and the
/// rejected value.
pub fn resolve_mode(signal: Option<&str>) -> Result<Mode> {
    match signal {
        None => Ok(Mode::default()),
        Some(name) => name.parse(),
    }
}

pub(crate) fn invalid_mode(value: &str) -> LintlayerError {
    LintlayerError::InvalidMode {
        value: value.to_string(),
        expected: expected_modes(),
    }
}

/// `"silence", "edit", "commit", and "release"`
fn expected_modes() -> String {
    let quoted: Vec<String> = Mode::ALL
        .iter()
        .map(|mode| format!("\"{}\"", mode))
        .collect();
    match quoted.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{}, and {}", rest.join(", "), last),
        _ => quoted.join(""),
    }
}

/// How the mode was determined.
#[derive(Debug, Clone, PartialEq)]
pub enum ModeSource {
    /// Explicitly set via `--mode` flag.
    Flag,
    /// Read from an environment variable.
    Environment(String),
    /// Fallback to "release".
    Fallback,
}

impl std::fmt::Display for ModeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => write!(f, "--mode flag"),
            Self::Environment(var) => write!(f, "set via {}", var),
            Self::Fallback => write!(f, "default"),
        }
    }
}

/// A resolved mode with how it was determined.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMode {
    /// The active mode.
    pub mode: Mode,
    /// Where the mode came from.
    pub source: ModeSource,
}

impl ResolvedMode {
    /// Resolve the mode using the priority chain.
    ///
    /// # Example
    ///
    /// ```
    /// use lintlayer::mode::{Mode, ModeSource, ResolvedMode};
    ///
    /// let resolved = ResolvedMode::resolve(Some("edit"), Some("release")).unwrap();
    /// assert_eq!(resolved.mode, Mode::Edit);
    /// assert_eq!(resolved.source, ModeSource::Flag);
    /// ```
    pub fn resolve(flag: Option<&str>, env: Option<&str>) -> Result<Self> {
        if let Some(name) = present(flag) {
            return Ok(Self {
                mode: resolve_mode(Some(name))?,
                source: ModeSource::Flag,
            });
        }

        if let Some(name) = present(env) {
            return Ok(Self {
                mode: resolve_mode(Some(name))?,
                source: ModeSource::Environment(MODE_ENV_VAR.to_string()),
            });
        }

        Ok(Self {
            mode: resolve_mode(None)?,
            source: ModeSource::Fallback,
        })
    }

    /// Resolve against the process environment.
    ///
    /// Reads [`MODE_ENV_VAR`] once. Call this a single time at startup and
    /// pass the resulting [`Mode`] along.
    pub fn from_env(flag: Option<&str>) -> Result<Self> {
        let env = std::env::var(MODE_ENV_VAR).ok();
        let resolved = Self::resolve(flag, env.as_deref())?;
        tracing::debug!("Resolved mode {} ({})", resolved.mode, resolved.source);
        Ok(resolved)
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
