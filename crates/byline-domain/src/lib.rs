//! Byline Domain Layer
//!
//! This crate contains the data model and scoring rules for the Byline
//! author-accuracy harness. It defines the fundamental concepts, value objects,
//! and trait interfaces that the engine, harness and CLI crates depend upon.
//!
//! ## Key Concepts
//!
//! - **Entry**: A ground-truth record pairing a URL with a fixture document and
//!   an ordered list of expected authors
//! - **Corpus**: The read-only URL → entry mapping evaluated by a run
//! - **Outcome**: The tagged result of evaluating one entry
//! - **Metrics**: The document/correct counters a run accumulates
//!
//! ## Architecture
//!
//! - Pure scoring logic only, no I/O
//! - The only external dependency is `url`, for the validated request URL
//! - Trait definitions for the extraction engine and the document source

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod comparison;
pub mod corpus;
pub mod entry;
pub mod extraction;
pub mod metrics;
pub mod outcome;
pub mod request_url;
pub mod traits;

// Re-exports for convenience
pub use comparison::{authors_match, expected_author, AUTHOR_SEPARATOR};
pub use corpus::Corpus;
pub use entry::ComparisonEntry;
pub use extraction::{ExtractOptions, Extraction, Metadata};
pub use metrics::RunMetrics;
pub use outcome::{EntryOutcome, SkipReason};
pub use request_url::{RequestUrl, RequestUrlError};
