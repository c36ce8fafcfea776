//! Rule entries, rule-sets and their transforms.
//!
//! - [`RuleEntry`] - A severity with optional rule options
//! - [`RuleSet`] - Ordered rule entries keyed by rule name
//! - [`ModeTable`] - Per-mode candidate entries for one rule
//! - [`process_rules`] - The blanket "force off" override
//!
//! # Example
//!
//! ```
//! use lintlayer::mode::Mode;
//! use lintlayer::rules::{ModeTable, RuleEntry, Severity};
//!
//! let table = ModeTable::new()
//!     .with(Mode::Edit, Severity::Off)
//!     .with(Mode::Commit, Severity::Error)
//!     .with(Mode::Release, Severity::Error);
//!
//! assert_eq!(table.select(Mode::Commit), Some(RuleEntry::Bare(Severity::Error)));
//! assert_eq!(table.select(Mode::Silence), Some(RuleEntry::off()));
//! ```

pub mod entry;
pub mod processor;
pub mod set;
pub mod table;

pub use entry::{RuleEntry, Severity};
pub use processor::process_rules;
pub use set::RuleSet;
pub use table::ModeTable;
