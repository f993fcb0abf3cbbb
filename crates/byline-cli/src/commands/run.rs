//! Run command implementation.

use crate::cli::RunArgs;
use crate::config::Config;
use crate::engine::ConfiguredEngine;
use crate::error::Result;
use crate::output::Formatter;
use byline_harness::{load_corpus, FixtureSource, Harness, HarnessConfig, HarnessError, RunReport};
use tracing::info;

/// Execute the run command.
pub fn execute_run(args: RunArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let show_failures = args.show_failures;
    let report = evaluate(args, config)?;

    if show_failures {
        println!("{}", formatter.format_failures(&report));
    }
    println!("{}", formatter.format_report(&report)?);

    Ok(())
}

/// Load the corpus, build the engine and evaluate it.
///
/// Fails only on setup problems. Once the corpus is loaded a report is
/// always returned.
pub fn evaluate(args: RunArgs, config: &Config) -> Result<RunReport> {
    let harness_config = harness_config(&args, config)?;
    let corpus = load_corpus(&args.corpus)?;
    info!(
        "Loaded {} entries from {}",
        corpus.len(),
        args.corpus.display()
    );

    let engine = ConfiguredEngine::from_profile(config.get_active_profile()?)?;
    let source = FixtureSource::new(&harness_config.fixture_root);
    let harness = Harness::new(source, engine, harness_config);

    if !harness.config().is_concurrent() {
        return Ok(harness.run(&corpus));
    }

    // Engines block, so the pool only needs a runtime for the duration of the run
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let report = runtime.block_on(harness.run_concurrent(&corpus))?;
    Ok(report)
}

/// Configuration file defaults with command line overrides applied.
fn harness_config(args: &RunArgs, config: &Config) -> Result<HarnessConfig> {
    let mut harness_config = config.harness.clone();
    if let Some(fixtures) = &args.fixtures {
        harness_config.fixture_root = fixtures.clone();
    }
    if let Some(workers) = args.workers {
        harness_config.workers = workers;
    }
    harness_config.validate().map_err(HarnessError::Config)?;
    Ok(harness_config)
}
