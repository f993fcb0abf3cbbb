//! Core Harness implementation

use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::pipeline::evaluate_entry;
use crate::report::RunReport;
use byline_domain::traits::{DocumentSource, ExtractionEngine};
use byline_domain::{Corpus, EntryOutcome, RunMetrics};
use std::fmt::Display;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, error, info, warn};

/// Evaluates an extraction engine against a ground-truth corpus
pub struct Harness<S, E> {
    source: Arc<S>,
    engine: Arc<E>,
    config: HarnessConfig,
}

impl<S, E> Harness<S, E>
where
    S: DocumentSource,
    S::Error: Display,
    E: ExtractionEngine,
    E::Error: Display,
{
    /// Create a new Harness
    pub fn new(source: S, engine: E, config: HarnessConfig) -> Self {
        Self {
            source: Arc::new(source),
            engine: Arc::new(engine),
            config,
        }
    }

    /// The harness configuration
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// The engine under evaluation
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Evaluate the corpus one entry at a time
    ///
    /// Never fails: per-entry problems are logged and reflected in the
    /// outcomes, and the report is always produced.
    pub fn run(&self, corpus: &Corpus) -> RunReport {
        let mut metrics = RunMetrics::start();
        info!(
            "Evaluating {} with {} entries ({} eligible)",
            self.engine.name(),
            corpus.len(),
            corpus.eligible_count()
        );

        let mut outcomes = Vec::with_capacity(corpus.len());
        for (url, entry) in corpus {
            let outcome = evaluate_entry(url, entry, self.source.as_ref(), self.engine.as_ref());
            self.log_outcome(url, &outcome);
            metrics.record(&outcome);
            outcomes.push((url.clone(), outcome));
        }

        self.finish(metrics, outcomes)
    }

    fn log_outcome(&self, url: &str, outcome: &EntryOutcome) {
        if self.config.log_entries {
            info!("{}: {}", url, outcome.label());
        } else {
            debug!("{}: {}", url, outcome.label());
        }
    }

    fn finish(&self, metrics: RunMetrics, outcomes: Vec<(String, EntryOutcome)>) -> RunReport {
        let duration = metrics.elapsed();
        if metrics.n_document == 0 {
            warn!("No documents were evaluated; accuracy reported as 0");
        }
        info!(
            "Evaluation complete: {} documents, {} correct in {:?}",
            metrics.n_document, metrics.n_correct, duration
        );

        RunReport {
            metrics,
            duration,
            outcomes,
        }
    }
}

impl<S, E> Harness<S, E>
where
    S: DocumentSource + Send + Sync + 'static,
    S::Error: Display,
    E: ExtractionEngine + Send + Sync + 'static,
    E::Error: Display,
{
    /// Evaluate the corpus on a bounded pool of blocking workers
    ///
    /// At most `config.workers` entries are in flight. Outcomes are reduced
    /// into the counters after the join, in corpus order, so each entry is
    /// counted exactly once. A worker that panics scores its entry as a
    /// failed extraction; the rest of the run continues.
    pub async fn run_concurrent(&self, corpus: &Corpus) -> Result<RunReport, HarnessError> {
        let mut metrics = RunMetrics::start();
        let workers = self.config.workers.max(1);
        info!(
            "Evaluating {} with {} entries ({} eligible) on {} workers",
            self.engine.name(),
            corpus.len(),
            corpus.eligible_count(),
            workers
        );

        let semaphore = Arc::new(Semaphore::new(workers));
        let mut handles = Vec::with_capacity(corpus.len());

        for (url, entry) in corpus {
            let permit = semaphore
                .clone()
                .acquire_owned()
                .await
                .map_err(|e| HarnessError::Worker(format!("Semaphore closed: {}", e)))?;

            let source = Arc::clone(&self.source);
            let engine = Arc::clone(&self.engine);
            let task_url = url.clone();
            let task_entry = entry.clone();

            let handle = tokio::task::spawn_blocking(move || {
                let _permit = permit;
                evaluate_entry(&task_url, &task_entry, source.as_ref(), engine.as_ref())
            });
            handles.push((url.clone(), entry.expected_author(), handle));
        }

        let mut outcomes = Vec::with_capacity(handles.len());
        for (url, expected, handle) in handles {
            // A worker that died inside the engine reached extraction without a result
            let outcome = handle.await.unwrap_or_else(|e| {
                error!("Worker for {} failed: {}", url, e);
                EntryOutcome::ExtractionFailed { expected }
            });
            self.log_outcome(&url, &outcome);
            metrics.record(&outcome);
            outcomes.push((url, outcome));
        }

        Ok(self.finish(metrics, outcomes))
    }

    /// Run sequentially or concurrently depending on `config.workers`
    pub async fn execute(&self, corpus: &Corpus) -> Result<RunReport, HarnessError> {
        if self.config.is_concurrent() {
            self.run_concurrent(corpus).await
        } else {
            Ok(self.run(corpus))
        }
    }
}
