//! Run report - counters, timing and per-entry outcomes

use byline_domain::{EntryOutcome, RunMetrics};
use std::fmt;
use std::time::Duration;

/// Result of evaluating a whole corpus
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Final counters
    pub metrics: RunMetrics,

    /// Wall-clock time from run start to the last entry
    pub duration: Duration,

    /// Outcome of every corpus entry, in corpus order
    pub outcomes: Vec<(String, EntryOutcome)>,
}

impl RunReport {
    /// Number of evaluated documents
    pub fn n_document(&self) -> usize {
        self.metrics.n_document
    }

    /// Number of evaluated documents with a matching author
    pub fn n_correct(&self) -> usize {
        self.metrics.n_correct
    }

    /// Accuracy percentage (`0.0` when nothing was evaluated)
    pub fn accuracy(&self) -> f64 {
        self.metrics.accuracy()
    }

    /// Evaluated entries that did not match
    pub fn failures(&self) -> impl Iterator<Item = (&str, &EntryOutcome)> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.counts_as_document() && !outcome.is_correct())
            .map(|(url, outcome)| (url.as_str(), outcome))
    }

    /// Entries that never reached the engine
    pub fn skipped(&self) -> impl Iterator<Item = (&str, &EntryOutcome)> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| !outcome.counts_as_document())
            .map(|(url, outcome)| (url.as_str(), outcome))
    }

    /// The fixed four-line textual report
    pub fn summary(&self) -> String {
        let lines = [
            format!("Duration:   {:?}", self.duration),
            format!("N document: {}", self.n_document()),
            format!("N correct:  {}", self.n_correct()),
            format!("Percentage: {:.6}", self.accuracy()),
        ];
        lines.join("\n")
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
