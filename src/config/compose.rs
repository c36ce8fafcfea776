//! End-to-end composition of a project config.

use std::path::Path;

use super::builder::FragmentBuilder;
use super::extends::process_extends;
use super::fragment::ConfigFragment;
use super::schema::LintlayerConfig;
use crate::error::Result;
use crate::mode::Mode;

/// Inputs fixed for a whole composition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComposeOptions {
    /// Resolved mode used to select rule entries.
    pub mode: Mode,
    /// Blanket override requested from outside the config file.
    pub disable: bool,
}

/// Build every fragment of `config`, then apply the blanket override.
///
/// The override is on when either `options.disable` or the config's own
/// `disable` is set. Preset paths resolve against `base_dir`.
pub fn compose(
    config: &LintlayerConfig,
    base_dir: &Path,
    options: ComposeOptions,
) -> Result<Vec<ConfigFragment>> {
    let builder = FragmentBuilder::new(options.mode);
    let fragments = builder.build_all(&config.fragments, base_dir)?;

    let disable = options.disable || config.disable;
    tracing::debug!(
        "Composed {} fragment(s) in {} mode (disable: {})",
        fragments.len(),
        options.mode,
        disable
    );

    Ok(process_extends(&fragments, disable))
}
