//! External process engine
//!
//! Runs an extractor executable once per document. The document is piped to
//! the child's stdin and the child is expected to print a JSON object with an
//! `author` field on stdout, which is how command-line extractors such as
//! `trafilatura --json` report metadata.
//!
//! # Examples
//!
//! ```no_run
//! use byline_engine::CommandEngine;
//!
//! let engine = CommandEngine::new("trafilatura")
//!     .with_args(["--json", "--with-metadata"])
//!     .with_no_fallback_arg(Some("--fast".to_string()));
//! ```

use crate::response::parse_response;
use crate::EngineError;
use byline_domain::traits::ExtractionEngine;
use byline_domain::{ExtractOptions, Extraction};
use std::io::{Read, Write};
use std::process::{Command, Stdio};
use tracing::debug;

/// Placeholder replaced with the original URL in command arguments
pub const URL_PLACEHOLDER: &str = "{url}";

/// Default flag appended when fallback heuristics are disabled
pub const DEFAULT_NO_FALLBACK_ARG: &str = "--fast";

/// Extraction engine backed by an external process
#[derive(Debug, Clone)]
pub struct CommandEngine {
    program: String,
    args: Vec<String>,
    no_fallback_arg: Option<String>,
}

impl CommandEngine {
    /// Create an engine that runs `program` with no arguments
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            no_fallback_arg: Some(DEFAULT_NO_FALLBACK_ARG.to_string()),
        }
    }

    /// Set the argument template; `{url}` is substituted per document
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Set the flag appended when fallback heuristics are disabled
    ///
    /// `None` means the extractor has no such switch.
    pub fn with_no_fallback_arg(mut self, arg: Option<String>) -> Self {
        self.no_fallback_arg = arg;
        self
    }

    /// Program that will be executed
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Concrete argument list for one invocation
    pub fn render_args(&self, options: &ExtractOptions) -> Vec<String> {
        let url = options.original_url.as_str();
        let mut args: Vec<String> = self
            .args
            .iter()
            .map(|arg| arg.replace(URL_PLACEHOLDER, url))
            .collect();

        if options.no_fallback {
            if let Some(flag) = &self.no_fallback_arg {
                args.push(flag.clone());
            }
        }
        args
    }
}

impl ExtractionEngine for CommandEngine {
    type Error = EngineError;

    fn extract(
        &self,
        document: &mut dyn Read,
        options: &ExtractOptions,
    ) -> Result<Option<Extraction>, Self::Error> {
        let mut input = Vec::new();
        document.read_to_end(&mut input)?;

        let args = self.render_args(options);
        debug!("Running {} {:?} ({} bytes on stdin)", self.program, args, input.len());

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| EngineError::Process(format!("Failed to spawn {}: {}", self.program, e)))?;

        // Feed stdin from another thread so a chatty child cannot fill its
        // stdout pipe while we are still blocked writing
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| EngineError::Process("Child stdin unavailable".to_string()))?;
        let writer = std::thread::spawn(move || {
            let mut stdin = stdin;
            stdin.write_all(&input)
        });

        let output = child.wait_with_output()?;

        match writer.join() {
            Ok(Ok(())) => {}
            // Extractors may stop reading early; the exit status decides
            Ok(Err(e)) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
            Ok(Err(e)) => return Err(EngineError::Io(e)),
            Err(_) => return Err(EngineError::Other("stdin writer panicked".to_string())),
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(EngineError::Process(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| EngineError::InvalidResponse(format!("Output is not UTF-8: {}", e)))?;

        parse_response(&stdout)
    }

    fn name(&self) -> &str {
        &self.program
    }
}
