//! lintlayer - Mode-aware layered rule-set composition.
//!
//! lintlayer assembles the layered configuration of a pluggable linter.
//! A single mode signal picks per-rule severities, and a blanket override
//! can silence every rule across nested `extends` chains while keeping
//! each rule's options.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Fragments, project file loading, and the blanket override
//! - [`error`] - Error types and result aliases
//! - [`mode`] - Mode resolution
//! - [`rules`] - Rule entries, rule-sets, and mode tables
//!
//! # Example
//!
//! ```
//! use lintlayer::mode::resolve_mode;
//! use lintlayer::rules::{ModeTable, RuleEntry, Severity};
//!
//! let mode = resolve_mode(Some("commit")).unwrap();
//! let table = ModeTable::new()
//!     .with(lintlayer::mode::Mode::Edit, Severity::Off)
//!     .with(lintlayer::mode::Mode::Commit, Severity::Error);
//! assert_eq!(table.select(mode), Some(RuleEntry::Bare(Severity::Error)));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod mode;
pub mod rules;

pub use error::{LintlayerError, Result};
