//! Extraction module - what the harness hands to, and gets back from, an engine

use crate::request_url::RequestUrl;

/// Options passed to an extraction engine for one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// URL the document was captured from, used for link resolution
    pub original_url: RequestUrl,

    /// Disable fallback heuristics for deterministic single-pass extraction
    pub no_fallback: bool,
}

impl ExtractOptions {
    /// Options for a deterministic run: fallback heuristics disabled
    pub fn deterministic(original_url: RequestUrl) -> Self {
        Self {
            original_url,
            no_fallback: true,
        }
    }
}

/// Document metadata reported by an engine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    /// Author field, as the engine serializes it
    pub author: String,

    /// Document title
    pub title: Option<String>,

    /// Host name the engine attributes the document to
    pub hostname: Option<String>,
}

/// A successful extraction result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Extracted metadata
    pub metadata: Metadata,
}

impl Extraction {
    /// Result carrying only an author field
    pub fn with_author(author: impl Into<String>) -> Self {
        Self {
            metadata: Metadata {
                author: author.into(),
                ..Default::default()
            },
        }
    }

    /// The author field
    pub fn author(&self) -> &str {
        &self.metadata.author
    }
}
