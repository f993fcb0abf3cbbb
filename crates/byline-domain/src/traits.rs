//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the scoring logic and the
//! collaborators it drives. Implementations live in other crates.

use crate::{ExtractOptions, Extraction};
use std::io::Read;

/// Trait for content/metadata extraction engines
///
/// Implemented by the engine layer (byline-engine). The engine is a black
/// box: only the author field of its result is scored.
pub trait ExtractionEngine {
    /// Error type for extraction operations
    type Error;

    /// Extract metadata from a document stream
    ///
    /// `Ok(None)` means the engine ran but produced no usable result.
    fn extract(
        &self,
        document: &mut dyn Read,
        options: &ExtractOptions,
    ) -> Result<Option<Extraction>, Self::Error>;

    /// Human-readable engine name for logs and reports
    fn name(&self) -> &str {
        "engine"
    }
}

/// Trait for resolving document identifiers to readable streams
///
/// Implemented by the harness layer (byline-harness). The returned reader
/// owns the underlying resource and releases it when dropped, so every exit
/// path of the caller releases it too.
pub trait DocumentSource {
    /// Stream type yielded for an opened document
    type Reader: Read;

    /// Error type for open failures
    type Error;

    /// Open the document named by `identifier`
    fn open(&self, identifier: &str) -> Result<Self::Reader, Self::Error>;
}
