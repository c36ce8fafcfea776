//! Ordered rule-sets.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::entry::RuleEntry;

/// Rule entries keyed by rule name, in insertion order.
///
/// Re-inserting an existing name replaces its entry in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet(IndexMap<String, RuleEntry>);

impl RuleSet {
    /// Create an empty rule-set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a rule, returning the entry it replaced.
    pub fn insert(&mut self, name: impl Into<String>, entry: RuleEntry) -> Option<RuleEntry> {
        self.0.insert(name.into(), entry)
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, entry: impl Into<RuleEntry>) -> Self {
        self.insert(name, entry.into());
        self
    }

    /// Look up a rule by name.
    pub fn get(&self, name: &str) -> Option<&RuleEntry> {
        self.0.get(name)
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the rule-set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Rule names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleEntry)> {
        self.0.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub(crate) fn entries_mut(&mut self) -> impl Iterator<Item = &mut RuleEntry> {
        self.0.values_mut()
    }
}

impl<N: Into<String>> FromIterator<(N, RuleEntry)> for RuleSet {
    fn from_iter<I: IntoIterator<Item = (N, RuleEntry)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, entry)| (name.into(), entry)).collect())
    }
}

impl IntoIterator for RuleSet {
    type Item = (String, RuleEntry);
    type IntoIter = indexmap::map::IntoIter<String, RuleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
