//! Outcome module - the tagged result of evaluating one corpus entry

use std::fmt;

/// Why an entry did not take part in scoring
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No fixture document or no expected authors
    Ineligible,

    /// URL is not an absolute request URI
    InvalidUrl(String),

    /// Fixture document could not be opened
    Unreadable(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Ineligible => write!(f, "ineligible"),
            SkipReason::InvalidUrl(reason) => write!(f, "invalid url: {}", reason),
            SkipReason::Unreadable(reason) => write!(f, "unreadable: {}", reason),
        }
    }
}

/// Result of evaluating a single entry
///
/// Only the first three variants count as an evaluated document. The printed
/// report collapses them into counters; the variants keep causes apart for
/// callers that need them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Extracted author equals the ground truth
    Matched,

    /// Extracted author differs from the ground truth
    Mismatched {
        /// Ground-truth author string
        expected: String,
        /// Author string the engine produced
        actual: String,
    },

    /// Engine produced no result (or an error, which is discarded)
    ExtractionFailed {
        /// Ground-truth author string
        expected: String,
    },

    /// Entry stopped before extraction
    Skipped(SkipReason),
}

impl EntryOutcome {
    /// Whether the entry increments the document counter
    pub fn counts_as_document(&self) -> bool {
        !matches!(self, EntryOutcome::Skipped(_))
    }

    /// Whether the entry increments the correct counter
    pub fn is_correct(&self) -> bool {
        matches!(self, EntryOutcome::Matched)
    }

    /// Short label used in logs and tables
    pub fn label(&self) -> &'static str {
        match self {
            EntryOutcome::Matched => "matched",
            EntryOutcome::Mismatched { .. } => "mismatched",
            EntryOutcome::ExtractionFailed { .. } => "extraction-failed",
            EntryOutcome::Skipped(SkipReason::Ineligible) => "ineligible",
            EntryOutcome::Skipped(SkipReason::InvalidUrl(_)) => "invalid-url",
            EntryOutcome::Skipped(SkipReason::Unreadable(_)) => "unreadable",
        }
    }
}
