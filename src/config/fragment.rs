//! Composed configuration fragments.
//!
//! A [`ConfigFragment`] is the unit handed to the analysis engine: file
//! matchers, plugin registrations, a rule-set, and optionally further
//! fragments it extends. Only `rules` is ever transformed here; everything
//! else is carried through as-is.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rules::RuleSet;

/// One fully built configuration fragment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFragment {
    /// Optional display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Language tag, e.g. `css/css` or `json/jsonc`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// File globs this fragment applies to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,

    /// File globs excluded from this fragment.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignores: Vec<String>,

    /// Plugin registrations, opaque to lintlayer.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub plugins: BTreeMap<String, Value>,

    /// Fragments this one extends, in order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<Vec<ConfigFragment>>,

    /// Rule-set for files matched by this fragment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<RuleSet>,

    /// Any other field (`languageOptions`, `settings`, ...), passed through.
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

impl ConfigFragment {
    /// A fragment that only ignores files, applied to every other fragment
    /// by the engine.
    pub fn global_ignores<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ignores: patterns.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Builder-style setter for `files`.
    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = files.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style setter for `rules`.
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Builder-style setter for `extends`.
    pub fn with_extends(mut self, extends: Vec<ConfigFragment>) -> Self {
        self.extends = Some(extends);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Severity;
    use serde_json::json;

    #[test]
    fn global_ignores_only_sets_ignores() {
        let fragment = ConfigFragment::global_ignores(["**/build/", "**/dist/"]);
        assert_eq!(
            serde_json::to_value(&fragment).unwrap(),
            json!({"ignores": ["**/build/", "**/dist/"]})
        );
    }

    #[test]
    fn unknown_fields_pass_through() {
        let raw = json!({
            "files": ["**/*.js"],
            "languageOptions": {"sourceType": "module"},
            "rules": {"eqeqeq": ["error", "always"]}
        });
        let fragment: ConfigFragment = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(fragment.other["languageOptions"], json!({"sourceType": "module"}));
        assert_eq!(serde_json::to_value(&fragment).unwrap(), raw);
    }

    #[test]
    fn serializes_fields_in_engine_order() {
        let fragment = ConfigFragment {
            language: Some("css/css".into()),
            ..Default::default()
        }
        .with_files(["**/*.css"])
        .with_extends(vec![ConfigFragment::default()])
        .with_rules(RuleSet::new().with("css/no-important", Severity::Off));

        let json = serde_json::to_string(&fragment).unwrap();
        let language = json.find("language").unwrap();
        let files = json.find("files").unwrap();
        let extends = json.find("extends").unwrap();
        let rules = json.find("rules").unwrap();
        assert!(language < files && files < extends && extends < rules);
    }
}
