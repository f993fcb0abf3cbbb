//! Error types for the harness

use thiserror::Error;

/// Errors that can occur while evaluating a corpus
///
/// Per-entry errors (`Validation`, `Io`, `Extraction`) never abort a run; they
/// are logged and turned into an entry outcome. The rest are setup errors.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// URL is not an absolute request URI
    #[error("failed to parse {url}: {reason}")]
    Validation {
        /// The rejected URL string
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// Fixture document could not be opened
    #[error("failed to open {identifier}: {source}")]
    Io {
        /// Document identifier that was requested
        identifier: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Extraction engine reported an error
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// Corpus file could not be read or parsed
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Worker pool error (tokio runtime issues)
    #[error("Worker error: {0}")]
    Worker(String),
}

impl From<serde_json::Error> for HarnessError {
    fn from(e: serde_json::Error) -> Self {
        HarnessError::JsonParse(e.to_string())
    }
}
