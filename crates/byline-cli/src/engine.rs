//! Engine selected by the active profile.

use crate::config::{EngineKind, EngineProfile};
use crate::error::Result;
use byline_domain::traits::ExtractionEngine;
use byline_domain::{ExtractOptions, Extraction};
use byline_engine::{CommandEngine, EngineError, HttpEngine};
use std::io::Read;
use std::time::Duration;

/// Either of the real engines, chosen at runtime from configuration.
pub enum ConfiguredEngine {
    /// Local extractor process
    Command(CommandEngine),
    /// Remote extraction service
    Http(HttpEngine),
}

impl ConfiguredEngine {
    /// Build the engine a profile describes.
    pub fn from_profile(profile: &EngineProfile) -> Result<Self> {
        profile.validate()?;

        let engine = match profile.kind {
            EngineKind::Command => {
                let program = profile.program.clone().unwrap_or_default();
                let no_fallback_arg = Some(profile.no_fallback_arg.clone()).filter(|a| !a.is_empty());
                Self::Command(
                    CommandEngine::new(program)
                        .with_args(profile.args.iter().cloned())
                        .with_no_fallback_arg(no_fallback_arg),
                )
            }
            EngineKind::Http => {
                let endpoint = profile.endpoint.clone().unwrap_or_default();
                Self::Http(HttpEngine::with_timeout(
                    endpoint,
                    Duration::from_secs(profile.timeout_secs),
                )?)
            }
        };
        Ok(engine)
    }
}

impl ExtractionEngine for ConfiguredEngine {
    type Error = EngineError;

    fn extract(
        &self,
        document: &mut dyn Read,
        options: &ExtractOptions,
    ) -> std::result::Result<Option<Extraction>, Self::Error> {
        match self {
            ConfiguredEngine::Command(engine) => engine.extract(document, options),
            ConfiguredEngine::Http(engine) => engine.extract(document, options),
        }
    }

    fn name(&self) -> &str {
        match self {
            ConfiguredEngine::Command(engine) => engine.name(),
            ConfiguredEngine::Http(engine) => engine.name(),
        }
    }
}
