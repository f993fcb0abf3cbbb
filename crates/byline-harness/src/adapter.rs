//! Extraction invocation stage

use crate::error::HarnessError;
use byline_domain::traits::ExtractionEngine;
use byline_domain::{ExtractOptions, Extraction, RequestUrl};
use std::fmt::Display;
use std::io::Read;
use tracing::debug;

/// Run the engine deterministically and surface its error
///
/// Fallback heuristics are always disabled and the URL is passed for link
/// resolution.
pub fn try_extract<E>(
    engine: &E,
    document: &mut dyn Read,
    url: &RequestUrl,
) -> Result<Option<Extraction>, HarnessError>
where
    E: ExtractionEngine + ?Sized,
    E::Error: Display,
{
    let options = ExtractOptions::deterministic(url.clone());
    engine
        .extract(document, &options)
        .map_err(|e| HarnessError::Extraction(e.to_string()))
}

/// Run the engine deterministically, discarding any engine error
///
/// An engine error is indistinguishable from "no result" for scoring.
pub fn invoke_engine<E>(engine: &E, document: &mut dyn Read, url: &RequestUrl) -> Option<Extraction>
where
    E: ExtractionEngine + ?Sized,
    E::Error: Display,
{
    match try_extract(engine, document, url) {
        Ok(result) => result,
        Err(e) => {
            debug!("{} returned no result for {}: {}", engine.name(), url, e);
            None
        }
    }
}
