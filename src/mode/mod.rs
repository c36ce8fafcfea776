//! Lint mode selection.
//!
//! A [`Mode`] is the strictness level the whole composition runs under.
//! It is resolved once at startup from the first available source:
//!
//! 1. Explicit `--mode` flag
//! 2. `LINTLAYER_MODE` environment variable
//! 3. Fallback to `release`
//!
//! The resolved value is then passed explicitly to every fragment builder.

pub mod level;
pub mod resolver;

pub use level::Mode;
pub use resolver::{resolve_mode, ModeSource, ResolvedMode, MODE_ENV_VAR};
