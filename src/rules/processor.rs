//! Blanket severity override for rule-sets.

use super::entry::Severity;
use super::set::RuleSet;

/// Force every rule in `rules` off when `disable` is set.
///
/// Only the severity changes: bare entries stay bare and configured
/// entries keep their options. Key order is preserved. With `disable`
/// unset the result equals the input.
///
/// # Example
///
/// ```
/// use lintlayer::rules::{process_rules, RuleEntry, RuleSet, Severity};
///
/// let rules = RuleSet::new().with("eqeqeq", Severity::Error);
/// let silenced = process_rules(&rules, true);
/// assert_eq!(silenced.get("eqeqeq"), Some(&RuleEntry::off()));
/// ```
pub fn process_rules(rules: &RuleSet, disable: bool) -> RuleSet {
    let mut processed = rules.clone();
    if disable {
        force_off(&mut processed);
    }
    processed
}

/// In-place form used on values already owned by the caller.
pub(crate) fn force_off(rules: &mut RuleSet) {
    for entry in rules.entries_mut() {
        entry.set_severity(Severity::Off);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleEntry;
    use serde_json::json;

    fn sample() -> RuleSet {
        RuleSet::new()
            .with("a", Severity::Error)
            .with(
                "b",
                RuleEntry::Configured(Severity::Error, vec![json!({"opt": 1})]),
            )
            .with("c", RuleEntry::Configured(Severity::Warn, vec![]))
    }

    #[test]
    fn disable_forces_off_and_keeps_options() {
        let processed = process_rules(&sample(), true);

        assert_eq!(processed.get("a"), Some(&RuleEntry::off()));
        assert_eq!(
            processed.get("b"),
            Some(&RuleEntry::Configured(Severity::Off, vec![json!({"opt": 1})]))
        );
        assert_eq!(
            processed.get("c"),
            Some(&RuleEntry::Configured(Severity::Off, vec![]))
        );
    }

    #[test]
    fn matches_composed_output_shape() {
        let processed = process_rules(&sample(), true);
        assert_eq!(
            serde_json::to_value(&processed).unwrap(),
            json!({"a": "off", "b": ["off", {"opt": 1}], "c": ["off"]})
        );
    }

    #[test]
    fn without_disable_is_identity() {
        let rules = sample();
        assert_eq!(process_rules(&rules, false), rules);
    }

    #[test]
    fn is_idempotent() {
        let once = process_rules(&sample(), true);
        let twice = process_rules(&once, true);
        assert_eq!(once, twice);
    }

    #[test]
    fn preserves_key_order() {
        let processed = process_rules(&sample(), true);
        let names: Vec<_> = processed.names().collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn input_is_left_untouched() {
        let rules = sample();
        let _ = process_rules(&rules, true);
        assert_eq!(rules.get("a"), Some(&RuleEntry::Bare(Severity::Error)));
    }

    #[test]
    fn empty_rule_set_stays_empty() {
        assert!(process_rules(&RuleSet::new(), true).is_empty());
    }
}
