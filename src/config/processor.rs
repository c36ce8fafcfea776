//! Per-fragment override.

use super::fragment::ConfigFragment;
use crate::rules::processor::force_off;

/// Apply the blanket override to one fragment's own rule-set.
///
/// Every other field, nested `extends` included, is copied unchanged; use
/// [`process_extends`](super::extends::process_extends) to reach nested
/// fragments.
pub fn process_config(fragment: &ConfigFragment, disable: bool) -> ConfigFragment {
    let mut processed = fragment.clone();
    apply_override(&mut processed, disable);
    processed
}

/// In-place form shared with the extends walker.
pub(crate) fn apply_override(fragment: &mut ConfigFragment, disable: bool) {
    if !disable {
        return;
    }
    if let Some(rules) = fragment.rules.as_mut() {
        force_off(rules);
    }
}
