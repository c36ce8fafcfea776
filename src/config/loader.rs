//! Configuration file discovery and loading.
//!
//! The project file lives at `.lintlayer/config.yml` under the project
//! root. An explicit `--config` path replaces discovery entirely.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::config::schema::LintlayerConfig;
use crate::error::{LintlayerError, Result};

/// Directory holding project configuration.
pub const CONFIG_DIR: &str = ".lintlayer";

/// Project configuration file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.yml";

/// A parsed config together with the file it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: LintlayerConfig,
    pub path: PathBuf,
}

impl LoadedConfig {
    /// Directory that relative preset paths resolve against.
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Expected location of the project config for `project_root`.
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. `.lintlayer` directory (primary indicator)
/// 2. `.git` directory (fallback)
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_DIR).is_dir() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Read a file, mapping a missing file to `ConfigNotFound`.
pub(crate) fn read_config_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LintlayerError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LintlayerError::Io(e)
        }
    })
}

/// Parse YAML content, attributing failures to `source_path`.
pub(crate) fn parse_yaml<T: DeserializeOwned>(content: &str, source_path: &Path) -> Result<T> {
    serde_yaml::from_str(content).map_err(|e| LintlayerError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Parse YAML content into a [`LintlayerConfig`].
pub fn parse_config(content: &str, source_path: &Path) -> Result<LintlayerConfig> {
    parse_yaml(content, source_path)
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<LoadedConfig> {
    let content = read_config_source(path)?;
    let config = parse_config(&content, path)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(LoadedConfig {
        config,
        path: path.to_path_buf(),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads that file. Otherwise loads the
/// project config under `project_root`.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<LoadedConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => load_config_file(&project_config_path(project_root)),
    }
}
