//! Byline Extraction Engines
//!
//! Pluggable extraction engine implementations.
//!
//! # Architecture
//!
//! This crate provides implementations of the `ExtractionEngine` trait from
//! `byline-domain`. The harness treats every engine as a black box and only
//! scores the author field of the result.
//!
//! # Engines
//!
//! - `MockEngine`: Deterministic mock for testing
//! - `CommandEngine`: Spawns an external extractor process per document
//! - `HttpEngine`: Posts documents to an extraction service
//!
//! # Examples
//!
//! ```
//! use byline_domain::traits::ExtractionEngine;
//! use byline_domain::{ExtractOptions, RequestUrl};
//! use byline_engine::MockEngine;
//!
//! let engine = MockEngine::new("Jane Doe");
//! let options = ExtractOptions::deterministic(RequestUrl::parse("https://example.com/").unwrap());
//! let result = engine.extract(&mut "<html></html>".as_bytes(), &options).unwrap();
//! assert_eq!(result.unwrap().author(), "Jane Doe");
//! ```

#![warn(missing_docs)]

pub mod command;
pub mod http;
mod response;

use byline_domain::traits::ExtractionEngine;
use byline_domain::{ExtractOptions, Extraction};
use std::collections::HashMap;
use std::io::Read;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

pub use command::CommandEngine;
pub use http::HttpEngine;

/// Errors that can occur while running an extraction engine
#[derive(Error, Debug)]
pub enum EngineError {
    /// Reading the document or talking to a child process failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// External extractor process exited unsuccessfully
    #[error("Process error: {0}")]
    Process(String),

    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Engine output could not be interpreted
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Generic error
    #[error("Engine error: {0}")]
    Other(String),
}

/// Scripted reply of a [`MockEngine`] for a given URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockReply {
    /// Return a result with this author
    Author(String),
    /// Return no result
    Absent,
    /// Fail with an engine error
    Error,
}

/// A recorded call to a [`MockEngine`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCall {
    /// Original URL passed in the options
    pub url: String,
    /// Whether fallback heuristics were disabled
    pub no_fallback: bool,
    /// Number of document bytes read
    pub document_len: usize,
}

/// Mock extraction engine for deterministic testing
///
/// Replies are keyed by original URL; anything unscripted gets the default
/// author. The document stream is read to the end, like a real engine would.
/// Clones share their script and call log.
///
/// # Examples
///
/// ```
/// use byline_engine::{MockEngine, MockReply};
///
/// let mut engine = MockEngine::new("Jane Doe");
/// engine.add_reply("https://example.com/b", MockReply::Absent);
/// engine.add_author("https://example.com/c", "John Smith");
/// assert_eq!(engine.call_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockEngine {
    default_reply: MockReply,
    replies: Arc<Mutex<HashMap<String, MockReply>>>,
    calls: Arc<Mutex<Vec<MockCall>>>,
}

impl MockEngine {
    /// Create a MockEngine returning `author` for every document
    pub fn new(author: impl Into<String>) -> Self {
        Self::with_default(MockReply::Author(author.into()))
    }

    /// Create a MockEngine with an arbitrary default reply
    pub fn with_default(default_reply: MockReply) -> Self {
        Self {
            default_reply,
            replies: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Script the reply for a given URL
    pub fn add_reply(&mut self, url: impl Into<String>, reply: MockReply) {
        lock(&self.replies).insert(url.into(), reply);
    }

    /// Script an author for a given URL
    pub fn add_author(&mut self, url: impl Into<String>, author: impl Into<String>) {
        self.add_reply(url, MockReply::Author(author.into()));
    }

    /// Get the number of times extract was called
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Get a snapshot of all recorded calls
    pub fn calls(&self) -> Vec<MockCall> {
        lock(&self.calls).clone()
    }

    /// Forget recorded calls
    pub fn reset_calls(&self) {
        lock(&self.calls).clear();
    }
}

impl Default for MockEngine {
    fn default() -> Self {
        Self::with_default(MockReply::Absent)
    }
}

impl ExtractionEngine for MockEngine {
    type Error = EngineError;

    fn extract(
        &self,
        document: &mut dyn Read,
        options: &ExtractOptions,
    ) -> Result<Option<Extraction>, Self::Error> {
        let mut buf = Vec::new();
        document.read_to_end(&mut buf)?;

        let url = options.original_url.as_str().to_string();
        lock(&self.calls).push(MockCall {
            url: url.clone(),
            no_fallback: options.no_fallback,
            document_len: buf.len(),
        });

        let reply = lock(&self.replies)
            .get(&url)
            .cloned()
            .unwrap_or_else(|| self.default_reply.clone());

        match reply {
            MockReply::Author(author) => Ok(Some(Extraction::with_author(author))),
            MockReply::Absent => Ok(None),
            MockReply::Error => Err(EngineError::Other(format!("Mock error for {}", url))),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

// A panicked test thread must not hide the call log from the others
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
