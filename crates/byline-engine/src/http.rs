//! HTTP extraction service engine
//!
//! Posts each document to an extraction service and reads the metadata it
//! returns.
//!
//! # Features
//!
//! - Blocking HTTP communication, safe to drive from worker threads
//! - Configurable endpoint and timeout
//! - Retry logic with exponential backoff
//!
//! # Wire format
//!
//! Request body:
//!
//! ```json
//! { "html": "<html>...</html>", "url": "https://example.com/post", "no_fallback": true }
//! ```
//!
//! The service answers with `{ "author": "...", "title": "...", "hostname": "..." }`,
//! `null`, or `204 No Content` when it could not extract anything.
//!
//! # Examples
//!
//! ```no_run
//! use byline_engine::HttpEngine;
//!
//! let engine = HttpEngine::new("http://localhost:8000/extract").unwrap();
//! ```

use crate::response::parse_response;
use crate::EngineError;
use byline_domain::traits::ExtractionEngine;
use byline_domain::{ExtractOptions, Extraction};
use serde::Serialize;
use std::io::Read;
use std::time::Duration;
use tracing::{debug, warn};

/// Default timeout for extraction requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of attempts per document
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Extraction engine backed by an HTTP service
#[derive(Debug)]
pub struct HttpEngine {
    endpoint: String,
    client: reqwest::blocking::Client,
    max_retries: u32,
    backoff_base: Duration,
}

/// Request body for the extraction service
#[derive(Serialize)]
struct ExtractRequest<'a> {
    html: &'a str,
    url: &'a str,
    no_fallback: bool,
}

impl HttpEngine {
    /// Create a new HTTP engine with the default timeout
    pub fn new(endpoint: impl Into<String>) -> Result<Self, EngineError> {
        Self::with_timeout(endpoint, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a new HTTP engine with a specific request timeout
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, EngineError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EngineError::Communication(format!("Failed to build client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_base: Duration::from_secs(1),
        })
    }

    /// Set the maximum number of attempts per document
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    /// Set the first backoff delay; later retries double it
    pub fn with_backoff_base(mut self, backoff_base: Duration) -> Self {
        self.backoff_base = backoff_base;
        self
    }

    /// Endpoint requests are sent to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn post(&self, body: &ExtractRequest<'_>) -> Result<Option<Extraction>, EngineError> {
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self.client.post(&self.endpoint).json(body).send() {
                Ok(response) => {
                    let status = response.status();
                    if status == reqwest::StatusCode::NO_CONTENT {
                        return Ok(None);
                    }
                    if status.is_success() {
                        let text = response.text().map_err(|e| {
                            EngineError::InvalidResponse(format!("Failed to read body: {}", e))
                        })?;
                        return parse_response(&text);
                    }
                    let error_text = response
                        .text()
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    let error = EngineError::Communication(format!("HTTP {}: {}", status, error_text));
                    // Client errors will not improve on retry
                    if status.is_client_error() {
                        return Err(error);
                    }
                    last_error = Some(error);
                }
                Err(e) => {
                    last_error = Some(EngineError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                let delay = self.backoff_base * 2u32.pow(attempts - 1);
                warn!(
                    "Extraction request to {} failed (attempt {}/{}), retrying in {:?}",
                    self.endpoint, attempts, self.max_retries, delay
                );
                std::thread::sleep(delay);
            }
        }

        Err(last_error
            .unwrap_or_else(|| EngineError::Communication("Max retries exceeded".to_string())))
    }
}

impl ExtractionEngine for HttpEngine {
    type Error = EngineError;

    fn extract(
        &self,
        document: &mut dyn Read,
        options: &ExtractOptions,
    ) -> Result<Option<Extraction>, Self::Error> {
        let mut raw = Vec::new();
        document.read_to_end(&mut raw)?;
        let html = String::from_utf8_lossy(&raw);

        debug!(
            "Posting {} bytes for {} to {}",
            raw.len(),
            options.original_url,
            self.endpoint
        );

        self.post(&ExtractRequest {
            html: &html,
            url: options.original_url.as_str(),
            no_fallback: options.no_fallback,
        })
    }

    fn name(&self) -> &str {
        &self.endpoint
    }
}
