//! Corpus module - the URL → entry mapping evaluated by a run

use crate::entry::ComparisonEntry;
use std::collections::btree_map::{self, BTreeMap};

/// Ground-truth corpus keyed by URL
///
/// Keys are unique. Iteration follows URL order so repeated runs log entries
/// in the same sequence. A run only ever borrows the corpus immutably.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    entries: BTreeMap<String, ComparisonEntry>,
}

impl Corpus {
    /// Create an empty corpus
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the entry previously stored for that URL
    pub fn insert(
        &mut self,
        url: impl Into<String>,
        entry: ComparisonEntry,
    ) -> Option<ComparisonEntry> {
        self.entries.insert(url.into(), entry)
    }

    /// Look up the entry for a URL
    pub fn get(&self, url: &str) -> Option<&ComparisonEntry> {
        self.entries.get(url)
    }

    /// Number of entries, eligible or not
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the corpus holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries that take part in scoring
    pub fn eligible_count(&self) -> usize {
        self.entries.values().filter(|e| e.is_eligible()).count()
    }

    /// Iterate over `(url, entry)` pairs
    pub fn iter(&self) -> btree_map::Iter<'_, String, ComparisonEntry> {
        self.entries.iter()
    }
}

impl FromIterator<(String, ComparisonEntry)> for Corpus {
    fn from_iter<T: IntoIterator<Item = (String, ComparisonEntry)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = (&'a String, &'a ComparisonEntry);
    type IntoIter = btree_map::Iter<'a, String, ComparisonEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
