//! Blanket override across `extends` chains.
//!
//! Fragments can nest other fragments through `extends`, to any depth. The
//! walker applies the per-fragment override to every one of them and keeps
//! the tree's shape and ordering intact.

use super::fragment::ConfigFragment;
use super::processor::apply_override;

/// Apply the blanket override to `fragments` and everything they extend.
///
/// Returns a new tree; the input is never modified, so fragments shared
/// between several compositions are safe to pass in. Top-level and nested
/// ordering is preserved since precedence between overlapping matchers is
/// decided later by the engine.
///
/// # Example
///
/// ```
/// use lintlayer::config::{process_extends, ConfigFragment};
/// use lintlayer::rules::{RuleEntry, RuleSet, Severity};
///
/// let preset = ConfigFragment::default()
///     .with_rules(RuleSet::new().with("no-debugger", Severity::Error));
/// let fragments = vec![ConfigFragment::default().with_extends(vec![preset])];
///
/// let processed = process_extends(&fragments, true);
/// let nested = &processed[0].extends.as_ref().unwrap()[0];
/// assert_eq!(
///     nested.rules.as_ref().unwrap().get("no-debugger"),
///     Some(&RuleEntry::off())
/// );
/// ```
pub fn process_extends(fragments: &[ConfigFragment], disable: bool) -> Vec<ConfigFragment> {
    let mut processed = Vec::with_capacity(fragments.len());
    let mut roots = fragments.iter();
    // Explicit stack for both the walk and the copy; the derived `Clone` recurses.
    let mut stack: Vec<Frame<'_>> = Vec::new();
    let mut visited = 0usize;

    loop {
        let next = match stack.last_mut() {
            Some(frame) => frame.pending.next(),
            None => roots.next(),
        };
        if let Some(source) = next {
            visited += 1;
            stack.push(Frame::open(source, disable));
            continue;
        }

        let fragment = match stack.pop() {
            Some(frame) => frame.close(),
            None => break,
        };
        match stack.last_mut() {
            Some(parent) => parent.children.push(fragment),
            None => processed.push(fragment),
        }
    }

    if disable {
        tracing::debug!("Applied rule override to {} fragment(s)", visited);
    }
    processed
}

/// A fragment being rebuilt while its `extends` are still pending.
struct Frame<'a> {
    fragment: ConfigFragment,
    has_extends: bool,
    pending: std::slice::Iter<'a, ConfigFragment>,
    children: Vec<ConfigFragment>,
}

impl<'a> Frame<'a> {
    fn open(source: &'a ConfigFragment, disable: bool) -> Self {
        let nested = source.extends.as_deref().unwrap_or_default();
        let mut fragment = ConfigFragment {
            name: source.name.clone(),
            language: source.language.clone(),
            files: source.files.clone(),
            ignores: source.ignores.clone(),
            plugins: source.plugins.clone(),
            extends: None,
            rules: source.rules.clone(),
            other: source.other.clone(),
        };
        apply_override(&mut fragment, disable);

        Self {
            fragment,
            has_extends: source.extends.is_some(),
            pending: nested.iter(),
            children: Vec::with_capacity(nested.len()),
        }
    }

    fn close(self) -> ConfigFragment {
        let mut fragment = self.fragment;
        if self.has_extends {
            fragment.extends = Some(self.children);
        }
        fragment
    }
}
