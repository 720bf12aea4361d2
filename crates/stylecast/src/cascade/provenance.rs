//! Per-leaf provenance: which tier supplied each resolved value.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// The tier category that supplied a value.
///
/// Breakpoint and state tiers report the category they belong to, so a
/// class value reached through a breakpoint override still reports `Class`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Default,
    Global,
    Class,
    User,
}

impl Source {
    pub fn as_str(self) -> &'static str {
        match self {
            Source::Default => "default",
            Source::Global => "global",
            Source::Class => "class",
            Source::User => "user",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provenance of one resolved leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvenanceEntry {
    pub source: Source,
    /// A tier for the active (non-base) breakpoint set this exact path to a
    /// value, whichever tier ultimately won. A breakpoint tier that only
    /// unsets the path does not count; it shows up as `cleared` instead.
    pub is_responsive: bool,
    /// A tier above the winner wrote the unset sentinel here.
    pub cleared: bool,
}

impl ProvenanceEntry {
    pub fn new(source: Source) -> Self {
        Self {
            source,
            is_responsive: false,
            cleared: false,
        }
    }
}

/// Provenance keyed by dotted leaf path (`layout.margin.top`), sorted.
///
/// Consumed only by editor affordances; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProvenanceMap {
    entries: BTreeMap<String, ProvenanceEntry>,
}

impl ProvenanceMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<&ProvenanceEntry> {
        self.entries.get(path)
    }

    /// The winning tier category for a path.
    pub fn source(&self, path: &str) -> Option<Source> {
        self.get(path).map(|e| e.source)
    }

    pub fn is_responsive(&self, path: &str) -> bool {
        self.get(path).is_some_and(|e| e.is_responsive)
    }

    /// True when the value comes from below the user tier, i.e. a reset
    /// control would have nothing to reset.
    pub fn is_inherited(&self, path: &str) -> bool {
        self.get(path).is_some_and(|e| e.source != Source::User)
    }

    /// Entries whose path starts with `prefix` (a category or record path).
    pub fn under<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a ProvenanceEntry)> + 'a {
        self.iter().filter(move |(path, _)| {
            prefix.is_empty()
                || *path == prefix
                || (path.starts_with(prefix) && path[prefix.len()..].starts_with('.'))
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProvenanceEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn record_set(&mut self, path: &str, source: Source) {
        self.entries.insert(path.to_string(), ProvenanceEntry::new(source));
    }

    pub(crate) fn record_unset(&mut self, path: &str) {
        if let Some(entry) = self.entries.get_mut(path) {
            entry.cleared = true;
        }
    }

    pub(crate) fn mark_responsive(&mut self, path: &str) {
        if let Some(entry) = self.entries.get_mut(path) {
            entry.is_responsive = true;
        }
    }
}
