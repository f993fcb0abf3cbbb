//! Byline Harness
//!
//! Measures how accurately an extraction engine identifies document authors
//! against a hand-curated ground-truth corpus.
//!
//! # Overview
//!
//! Every corpus entry flows through a short-circuiting pipeline. An entry
//! that fails to validate or whose fixture cannot be opened is skipped and
//! does not count. An entry that reaches the engine always counts as a
//! document, and is correct only when the extracted author equals the
//! ground truth exactly.
//!
//! # Architecture
//!
//! ```text
//! Corpus → Validate → Open → Extract → Compare → Record → RunReport
//! ```
//!
//! # Key Features
//!
//! - **Strict scoring**: authors joined with `"; "`, compared byte-for-byte
//! - **Non-fatal failures**: no entry can abort a run; the report is always produced
//! - **Tagged outcomes**: matched, mismatched, extraction failed, or skipped with a reason
//! - **Worker pool**: optional bounded concurrency with a fan-in reduction
//!
//! # Example Usage
//!
//! ```no_run
//! use byline_harness::{load_corpus, FixtureSource, Harness, HarnessConfig};
//! use byline_engine::CommandEngine;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let corpus = load_corpus("comparison.json")?;
//! let config = HarnessConfig::default();
//! let source = FixtureSource::new(&config.fixture_root);
//! let engine = CommandEngine::new("trafilatura").with_args(["--json"]);
//!
//! let harness = Harness::new(source, engine, config);
//! let report = harness.run(&corpus);
//!
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod adapter;
mod config;
mod error;
mod harness;
mod loader;
mod pipeline;
mod report;
mod source;
mod validator;


pub use adapter::{invoke_engine, try_extract};
pub use config::{HarnessConfig, MAX_WORKERS};
pub use error::HarnessError;
pub use harness::Harness;
pub use loader::{load_corpus, parse_corpus};
pub use pipeline::{compare_stage, evaluate_entry};
pub use report::RunReport;
pub use source::FixtureSource;
pub use validator::validate_request_url;
