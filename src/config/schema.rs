//! Configuration schema definitions for lintlayer.
//!
//! These structs map to `.lintlayer/config.yml` and to preset files. They
//! differ from the composed [`ConfigFragment`](super::ConfigFragment) in two
//! places: a rule may be written as a per-mode table, and an `extends` item
//! may point at a preset file instead of holding the fragment inline.

use std::collections::BTreeMap;
use std::path::PathBuf;

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::rules::{ModeTable, RuleEntry};

/// Root configuration structure for `.lintlayer/config.yml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LintlayerConfig {
    /// Force every rule off, in every fragment and preset.
    #[serde(skip_serializing_if = "is_false")]
    pub disable: bool,

    /// Fragments in output order.
    pub fragments: Vec<FragmentSource>,
}

/// A fragment as written in a config or preset file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FragmentSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignores: Vec<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub plugins: BTreeMap<String, Value>,

    /// Presets and inline fragments this fragment builds on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<Vec<ExtendsSource>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_rules"
    )]
    pub rules: Option<IndexMap<String, RuleSource>>,

    /// Unrecognized fields, copied to the composed fragment.
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

/// How a single rule is written.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RuleSource {
    /// A fixed entry used in every mode.
    Entry(RuleEntry),
    /// An entry chosen by the active mode.
    Table { mode: ModeTable },
}

impl<'de> Deserialize<'de> for RuleSource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Object(mut map) => {
                let table = map
                    .remove("mode")
                    .ok_or_else(|| D::Error::custom("rule table must have a `mode` key"))?;
                reject_extra_keys::<D::Error>(&map, "mode")?;
                let mode = serde_json::from_value(table).map_err(D::Error::custom)?;
                Ok(RuleSource::Table { mode })
            }
            other => serde_json::from_value(other)
                .map(RuleSource::Entry)
                .map_err(D::Error::custom),
        }
    }
}

/// One item of a fragment's `extends` list.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ExtendsSource {
    /// Fragments loaded from a preset file.
    Preset(PresetRef),
    /// A fragment written in place.
    Inline(FragmentSource),
}

/// Reference to a preset file, relative to the referencing file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresetRef {
    pub preset: PathBuf,
}

impl<'de> Deserialize<'de> for ExtendsSource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Object(map) if map.contains_key("preset") => {
                reject_extra_keys::<D::Error>(&map, "preset")?;
                serde_json::from_value(Value::Object(map))
                    .map(ExtendsSource::Preset)
                    .map_err(D::Error::custom)
            }
            other => serde_json::from_value(other)
                .map(ExtendsSource::Inline)
                .map_err(D::Error::custom),
        }
    }
}

/// Contents of a preset file: one fragment or a list of them.
#[derive(Debug, Clone)]
pub enum PresetFile {
    Many(Vec<FragmentSource>),
    One(FragmentSource),
}

impl<'de> Deserialize<'de> for PresetFile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let preset = if value.is_array() {
            serde_json::from_value(value).map(PresetFile::Many)
        } else {
            serde_json::from_value(value).map(PresetFile::One)
        };
        preset.map_err(D::Error::custom)
    }
}

impl PresetFile {
    pub fn into_fragments(self) -> Vec<FragmentSource> {
        match self {
            PresetFile::Many(fragments) => fragments,
            PresetFile::One(fragment) => vec![fragment],
        }
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Rule-sets keyed by name; a bad value reports which rule it belongs to.
fn deserialize_rules<'de, D>(
    deserializer: D,
) -> Result<Option<IndexMap<String, RuleSource>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<IndexMap<String, Value>>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let mut rules = IndexMap::with_capacity(raw.len());
    for (name, value) in raw {
        let source = serde_json::from_value(value)
            .map_err(|e| D::Error::custom(format!("rule \"{}\": {}", name, e)))?;
        rules.insert(name, source);
    }
    Ok(Some(rules))
}

fn reject_extra_keys<E>(map: &Map<String, Value>, expected: &str) -> Result<(), E>
where
    E: serde::de::Error,
{
    match map.keys().find(|key| key.as_str() != expected) {
        Some(key) => Err(E::custom(format!("unknown field `{}` next to `{}`", key, expected))),
        None => Ok(()),
    }
}
