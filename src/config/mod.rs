//! Configuration fragments, their loading, and the blanket override.
//!
//! This module handles:
//! - The project file format in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Turning sources into composed fragments in [`builder`]
//! - The per-fragment override in [`processor`]
//! - The override across nested `extends` in [`extends`]
//! - The whole pipeline in [`compose`](mod@compose)
//! - The project file's JSON Schema in [`json_schema`]
//!
//! # Example
//!
//! ```
//! use lintlayer::config::{compose, load_config, ComposeOptions};
//! use lintlayer::mode::Mode;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".lintlayer");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "fragments:\n  - rules:\n      eqeqeq: error\n").unwrap();
//!
//! let loaded = load_config(temp.path(), None).unwrap();
//! let options = ComposeOptions { mode: Mode::Release, disable: true };
//! let fragments = compose(&loaded.config, loaded.base_dir(), options).unwrap();
//! assert_eq!(
//!     serde_json::to_string(&fragments).unwrap(),
//!     r#"[{"rules":{"eqeqeq":"off"}}]"#
//! );
//! ```

pub mod builder;
pub mod compose;
pub mod extends;
pub mod fragment;
pub mod json_schema;
pub mod loader;
pub mod processor;
pub mod schema;

pub use builder::{FragmentBuilder, DEFAULT_MAX_DEPTH};
pub use compose::{compose, ComposeOptions};
pub use extends::process_extends;
pub use fragment::ConfigFragment;
pub use json_schema::SchemaGenerator;
pub use loader::{
    find_project_root, load_config, load_config_file, parse_config, project_config_path,
    LoadedConfig, CONFIG_DIR, CONFIG_FILE,
};
pub use processor::process_config;
pub use schema::{ExtendsSource, FragmentSource, LintlayerConfig, PresetRef, RuleSource};
