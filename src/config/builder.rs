//! Building composed fragments from their source form.
//!
//! The builder turns [`FragmentSource`]s into [`ConfigFragment`]s:
//!
//! - mode tables are projected with [`ModeTable::select`](crate::rules::ModeTable::select)
//! - preset references are loaded and built recursively
//! - everything else is copied over

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use super::fragment::ConfigFragment;
use super::loader::{parse_yaml, read_config_source};
use super::schema::{ExtendsSource, FragmentSource, PresetFile, RuleSource};
use crate::error::{LintlayerError, Result};
use crate::mode::Mode;
use crate::rules::RuleSet;

/// Default limit on nested preset files.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Builds fragments for one resolved mode.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use lintlayer::config::{FragmentBuilder, FragmentSource};
/// use lintlayer::mode::Mode;
/// use lintlayer::rules::{RuleEntry, Severity};
///
/// let source: FragmentSource = serde_yaml::from_str(r#"
/// rules:
///   getter-return:
///     mode: { edit: off, commit: error, release: error }
/// "#).unwrap();
///
/// let fragment = FragmentBuilder::new(Mode::Commit)
///     .build(&source, Path::new("."))
///     .unwrap();
/// assert_eq!(
///     fragment.rules.unwrap().get("getter-return"),
///     Some(&RuleEntry::Bare(Severity::Error))
/// );
/// ```
#[derive(Debug, Clone)]
pub struct FragmentBuilder {
    mode: Mode,
    max_depth: usize,
}

impl FragmentBuilder {
    /// Create a builder with the default preset depth limit.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Create a builder with a custom preset depth limit.
    pub fn with_max_depth(mode: Mode, max_depth: usize) -> Self {
        Self { mode, max_depth }
    }

    /// The mode rules are selected for.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Get the maximum preset depth.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Build a rule-set, projecting mode tables for the active mode.
    ///
    /// Rules whose table has no entry for the mode are left out.
    pub fn build_rules(&self, rules: &IndexMap<String, RuleSource>) -> RuleSet {
        let mut built = RuleSet::new();
        for (name, source) in rules {
            match source {
                RuleSource::Entry(entry) => {
                    built.insert(name.clone(), entry.clone());
                }
                RuleSource::Table { mode } => match mode.select(self.mode) {
                    Some(entry) => {
                        built.insert(name.clone(), entry);
                    }
                    None => tracing::debug!(
                        "Rule '{}' has no entry for mode {}, leaving it unset",
                        name,
                        self.mode
                    ),
                },
            }
        }
        built
    }

    /// Build one fragment. Preset paths resolve against `base_dir`.
    pub fn build(&self, source: &FragmentSource, base_dir: &Path) -> Result<ConfigFragment> {
        self.build_with_chain(source, base_dir, &mut Vec::new())
    }

    /// Build a list of fragments, keeping their order.
    pub fn build_all(
        &self,
        sources: &[FragmentSource],
        base_dir: &Path,
    ) -> Result<Vec<ConfigFragment>> {
        self.build_list(sources, base_dir, &mut Vec::new())
    }

    fn build_list(
        &self,
        sources: &[FragmentSource],
        base_dir: &Path,
        chain: &mut Vec<PathBuf>,
    ) -> Result<Vec<ConfigFragment>> {
        sources
            .iter()
            .map(|source| self.build_with_chain(source, base_dir, chain))
            .collect()
    }

    fn build_with_chain(
        &self,
        source: &FragmentSource,
        base_dir: &Path,
        chain: &mut Vec<PathBuf>,
    ) -> Result<ConfigFragment> {
        let extends = match &source.extends {
            None => None,
            Some(items) => {
                let mut nested = Vec::new();
                for item in items {
                    match item {
                        ExtendsSource::Inline(inline) => {
                            nested.push(self.build_with_chain(inline, base_dir, chain)?);
                        }
                        ExtendsSource::Preset(reference) => {
                            let path = base_dir.join(&reference.preset);
                            nested.extend(self.load_preset(&path, chain)?);
                        }
                    }
                }
                Some(nested)
            }
        };

        Ok(ConfigFragment {
            name: source.name.clone(),
            language: source.language.clone(),
            files: source.files.clone(),
            ignores: source.ignores.clone(),
            plugins: source.plugins.clone(),
            extends,
            rules: source.rules.as_ref().map(|rules| self.build_rules(rules)),
            other: source.other.clone(),
        })
    }

    /// Load and build a preset file.
    ///
    /// `chain` holds the presets currently being built, so a preset that
    /// reaches itself is a cycle while one used in two branches is not.
    fn load_preset(&self, path: &Path, chain: &mut Vec<PathBuf>) -> Result<Vec<ConfigFragment>> {
        if chain.len() >= self.max_depth {
            return Err(LintlayerError::ExtendsDepthExceeded {
                max: self.max_depth,
            });
        }

        let content = read_config_source(path)?;
        let canonical = fs::canonicalize(path)?;
        if chain.contains(&canonical) {
            return Err(LintlayerError::CircularExtends {
                path: path.to_path_buf(),
            });
        }

        let preset: PresetFile = parse_yaml(&content, path)?;
        tracing::debug!("Loading preset {}", path.display());

        let preset_dir = path.parent().unwrap_or_else(|| Path::new("."));
        chain.push(canonical);
        let built = self.build_list(&preset.into_fragments(), preset_dir, chain);
        chain.pop();
        built
    }
}
