//! Rule severities and entries.
//!
//! A rule is configured either with a bare severity (`"error"`) or with a
//! severity followed by rule-specific options (`["error", {"max": 3}]`).
//! [`RuleEntry`] keeps those two shapes apart so a transform can change the
//! severity without touching the options.

use serde::de::Error as _;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Severity of a rule as understood by the analysis engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Rule is disabled.
    Off,
    /// Violations are reported as warnings.
    Warn,
    /// Violations are reported as errors.
    Error,
}

impl Severity {
    /// The string form written to composed output.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Off => "off",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "off" => Some(Severity::Off),
            "warn" => Some(Severity::Warn),
            "error" => Some(Severity::Error),
            _ => None,
        }
    }

    fn from_level(level: u64) -> Option<Self> {
        match level {
            0 => Some(Severity::Off),
            1 => Some(Severity::Warn),
            2 => Some(Severity::Error),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(name) => Severity::from_name(&name).ok_or_else(|| {
                D::Error::custom(format!(
                    "unknown severity \"{}\", expected off, warn or error",
                    name
                ))
            }),
            Value::Number(level) => level
                .as_u64()
                .and_then(Severity::from_level)
                .ok_or_else(|| {
                    D::Error::custom(format!("unknown severity level {}, expected 0-2", level))
                }),
            other => Err(D::Error::custom(format!(
                "expected a severity, found {}",
                other
            ))),
        }
    }
}

/// A rule's severity plus its optional options payload.
///
/// The options are owned by the rule's implementation and are never
/// inspected here.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleEntry {
    /// `"error"`
    Bare(Severity),
    /// `["error", ...options]`, possibly with no options.
    Configured(Severity, Vec<Value>),
}

impl RuleEntry {
    /// The literal bare `"off"` entry.
    pub fn off() -> Self {
        RuleEntry::Bare(Severity::Off)
    }

    /// Current severity.
    pub fn severity(&self) -> Severity {
        match self {
            RuleEntry::Bare(severity) | RuleEntry::Configured(severity, _) => *severity,
        }
    }

    /// Options following the severity (empty for bare entries).
    pub fn options(&self) -> &[Value] {
        match self {
            RuleEntry::Bare(_) => &[],
            RuleEntry::Configured(_, options) => options,
        }
    }

    pub(crate) fn set_severity(&mut self, severity: Severity) {
        match self {
            RuleEntry::Bare(current) | RuleEntry::Configured(current, _) => *current = severity,
        }
    }
}

impl From<Severity> for RuleEntry {
    fn from(severity: Severity) -> Self {
        RuleEntry::Bare(severity)
    }
}

impl Serialize for RuleEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RuleEntry::Bare(severity) => severity.serialize(serializer),
            RuleEntry::Configured(severity, options) => {
                let mut seq = serializer.serialize_seq(Some(options.len() + 1))?;
                seq.serialize_element(severity)?;
                for option in options {
                    seq.serialize_element(option)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for RuleEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Array(mut items) => {
                if items.is_empty() {
                    return Err(D::Error::custom("rule entry array must start with a severity"));
                }
                let options = items.split_off(1);
                let severity =
                    serde_json::from_value(items.remove(0)).map_err(D::Error::custom)?;
                Ok(RuleEntry::Configured(severity, options))
            }
            other => serde_json::from_value(other)
                .map(RuleEntry::Bare)
                .map_err(D::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn severity_ordering() {
        assert!(Severity::Off < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
    }

    #[test]
    fn severity_accepts_names_and_levels() {
        let named: Severity = serde_json::from_value(json!("warn")).unwrap();
        let numeric: Severity = serde_json::from_value(json!(2)).unwrap();
        assert_eq!(named, Severity::Warn);
        assert_eq!(numeric, Severity::Error);
    }

    #[test]
    fn severity_rejects_unknown_values() {
        assert!(serde_json::from_value::<Severity>(json!("warning")).is_err());
        assert!(serde_json::from_value::<Severity>(json!(3)).is_err());
    }

    #[test]
    fn severity_serializes_as_name() {
        assert_eq!(serde_json::to_value(Severity::Off).unwrap(), json!("off"));
    }

    #[test]
    fn bare_entry_parses_from_string() {
        let entry: RuleEntry = serde_json::from_value(json!("error")).unwrap();
        assert_eq!(entry, RuleEntry::Bare(Severity::Error));
    }

    #[test]
    fn single_element_array_stays_configured() {
        let entry: RuleEntry = serde_json::from_value(json!(["error"])).unwrap();
        assert_eq!(entry, RuleEntry::Configured(Severity::Error, vec![]));
        assert_eq!(serde_json::to_value(&entry).unwrap(), json!(["error"]));
    }

    #[test]
    fn configured_entry_keeps_every_option() {
        let raw = json!(["warn", {"groups": ["r", "g", "b"]}, {"type": "alphabetical"}]);
        let entry: RuleEntry = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(entry.severity(), Severity::Warn);
        assert_eq!(entry.options().len(), 2);
        assert_eq!(serde_json::to_value(&entry).unwrap(), raw);
    }

    #[test]
    fn configured_entry_parses_from_yaml() {
        let entry: RuleEntry = serde_yaml::from_str("[1, {max: 3}]").unwrap();
        assert_eq!(
            entry,
            RuleEntry::Configured(Severity::Warn, vec![json!({"max": 3})])
        );
    }

    #[test]
    fn empty_array_is_rejected() {
        assert!(serde_json::from_value::<RuleEntry>(json!([])).is_err());
    }

    #[test]
    fn set_severity_preserves_shape() {
        let mut bare = RuleEntry::Bare(Severity::Error);
        let mut configured = RuleEntry::Configured(Severity::Error, vec![json!({"opt": 1})]);

        bare.set_severity(Severity::Off);
        configured.set_severity(Severity::Off);

        assert_eq!(bare, RuleEntry::off());
        assert_eq!(
            configured,
            RuleEntry::Configured(Severity::Off, vec![json!({"opt": 1})])
        );
    }

    #[test]
    fn unknown_severity_names_the_value() {
        let err = serde_yaml::from_str::<RuleEntry>("eror").unwrap_err();
        assert!(err.to_string().contains("unknown severity \"eror\""));

        let err = serde_yaml::from_str::<RuleEntry>("[warning, {max: 3}]").unwrap_err();
        assert!(err.to_string().contains("unknown severity \"warning\""));
    }

    #[test]
    fn non_severity_values_are_rejected() {
        let err = serde_json::from_value::<RuleEntry>(json!({"level": "error"})).unwrap_err();
        assert!(err.to_string().contains("expected a severity"));
    }
}
