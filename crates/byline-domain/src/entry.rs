//! Entry module - one ground-truth record of the corpus

use crate::comparison::expected_author;

/// A ground-truth record for a single URL
///
/// `file` names the fixture document holding the page as it was captured.
/// An empty `file` means no fixture is available. `authors` is ordered: the
/// order defines the expected serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonEntry {
    /// Fixture document identifier (may be empty)
    pub file: String,

    /// Expected author names, in expected order
    pub authors: Vec<String>,
}

impl ComparisonEntry {
    /// Create a new entry
    ///
    /// # Examples
    ///
    /// ```
    /// use byline_domain::ComparisonEntry;
    ///
    /// let entry = ComparisonEntry::new("page.html", ["Jane Doe"]);
    /// assert!(entry.is_eligible());
    /// ```
    pub fn new<I, S>(file: impl Into<String>, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            file: file.into(),
            authors: authors.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the entry takes part in scoring
    ///
    /// Entries without a fixture or without any expected author are ignored.
    pub fn is_eligible(&self) -> bool {
        !self.file.is_empty() && !self.authors.is_empty()
    }

    /// The ground-truth author string for this entry
    pub fn expected_author(&self) -> String {
        expected_author(&self.authors)
    }
}
