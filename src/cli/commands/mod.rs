//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`].

pub mod compose;
pub mod dispatcher;
pub mod mode;
pub mod schema;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
