//! Metrics module - counters accumulated over a run

use crate::outcome::EntryOutcome;
use std::time::{Duration, Instant};

/// Counters for one harness run
///
/// Created when the run starts and discarded once the report is printed.
/// Counters only ever grow.
#[derive(Debug, Clone)]
pub struct RunMetrics {
    /// Entries that were evaluated (validated, opened, handed to the engine)
    pub n_document: usize,

    /// Evaluated entries whose extracted author matched the ground truth
    pub n_correct: usize,

    started: Instant,
}

impl RunMetrics {
    /// Start a new run clock with zeroed counters
    pub fn start() -> Self {
        Self {
            n_document: 0,
            n_correct: 0,
            started: Instant::now(),
        }
    }

    /// Fold one entry outcome into the counters
    pub fn record(&mut self, outcome: &EntryOutcome) {
        if outcome.counts_as_document() {
            self.n_document += 1;
        }
        if outcome.is_correct() {
            self.n_correct += 1;
        }
    }

    /// Add another partial tally into this one
    ///
    /// The earlier of the two start times is kept.
    pub fn merge(&mut self, other: &RunMetrics) {
        self.n_document += other.n_document;
        self.n_correct += other.n_correct;
        self.started = self.started.min(other.started);
    }

    /// When the run started
    pub fn started(&self) -> Instant {
        self.started
    }

    /// Wall-clock time since the run started
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Accuracy as a percentage of evaluated documents
    ///
    /// Returns `0.0` when nothing was evaluated.
    pub fn accuracy(&self) -> f64 {
        if self.n_document == 0 {
            0.0
        } else {
            self.n_correct as f64 / self.n_document as f64 * 100.0
        }
    }
}

impl Default for RunMetrics {
    fn default() -> Self {
        Self::start()
    }
}
