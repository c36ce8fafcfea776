//! Error types for lintlayer operations.
//!
//! This module defines [`LintlayerError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Mode resolution is the only fallible step of the composition core
//!   ([`LintlayerError::InvalidMode`])
//! - Loading the project file and its presets adds the remaining variants
//! - Use `anyhow::Error` (via `LintlayerError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for lintlayer operations.
#[derive(Debug, Error)]
pub enum LintlayerError {
    /// The mode signal is present but names no known mode.
    #[error("Expected the current mode to be {expected}. Found \"{value}\"")]
    InvalidMode { value: String, expected: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a configuration or preset file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A preset extends itself, directly or through other presets.
    #[error("Circular extends detected: {path}")]
    CircularExtends { path: PathBuf },

    /// Preset chain is nested deeper than the resolver allows.
    #[error("Config extends depth exceeds maximum of {max}")]
    ExtendsDepthExceeded { max: usize },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for lintlayer operations.
pub type Result<T> = std::result::Result<T, LintlayerError>;
