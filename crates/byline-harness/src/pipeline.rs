//! Per-entry evaluation pipeline
//!
//! ```text
//! Validate → Open → Extract → Compare → Record
//! ```
//!
//! Each stage before extraction returns `Result<_, SkipReason>`; the first
//! failure stops the entry. Extraction never stops it: a missing result is
//! scored as incorrect. Recording is done by the caller so that sequential
//! and concurrent runs share this code.

use crate::adapter::invoke_engine;
use crate::validator::validate_request_url;
use byline_domain::traits::{DocumentSource, ExtractionEngine};
use byline_domain::{
    authors_match, ComparisonEntry, EntryOutcome, Extraction, RequestUrl, SkipReason,
};
use std::fmt::Display;
use tracing::error;

/// Evaluate one corpus entry against the engine
pub fn evaluate_entry<S, E>(
    url: &str,
    entry: &ComparisonEntry,
    source: &S,
    engine: &E,
) -> EntryOutcome
where
    S: DocumentSource + ?Sized,
    S::Error: Display,
    E: ExtractionEngine + ?Sized,
    E::Error: Display,
{
    run_stages(url, entry, source, engine).unwrap_or_else(EntryOutcome::Skipped)
}

fn run_stages<S, E>(
    url: &str,
    entry: &ComparisonEntry,
    source: &S,
    engine: &E,
) -> Result<EntryOutcome, SkipReason>
where
    S: DocumentSource + ?Sized,
    S::Error: Display,
    E: ExtractionEngine + ?Sized,
    E::Error: Display,
{
    check_eligible(entry)?;
    let request_url = validate_stage(url)?;
    let mut document = open_stage(source, &entry.file)?;
    let extraction = invoke_engine(engine, &mut document, &request_url);
    Ok(compare_stage(entry, extraction.as_ref()))
}

fn check_eligible(entry: &ComparisonEntry) -> Result<(), SkipReason> {
    if entry.is_eligible() {
        Ok(())
    } else {
        Err(SkipReason::Ineligible)
    }
}

fn validate_stage(url: &str) -> Result<RequestUrl, SkipReason> {
    validate_request_url(url).map_err(|e| {
        error!("{}", e);
        SkipReason::InvalidUrl(e.to_string())
    })
}

fn open_stage<S>(source: &S, identifier: &str) -> Result<S::Reader, SkipReason>
where
    S: DocumentSource + ?Sized,
    S::Error: Display,
{
    source.open(identifier).map_err(|e| {
        error!("{}", e);
        SkipReason::Unreadable(e.to_string())
    })
}

/// Score an extraction result against an entry's ground truth
pub fn compare_stage(entry: &ComparisonEntry, extraction: Option<&Extraction>) -> EntryOutcome {
    let expected = entry.expected_author();
    match extraction {
        None => EntryOutcome::ExtractionFailed { expected },
        Some(extraction) if authors_match(&expected, Some(extraction.author())) => {
            EntryOutcome::Matched
        }
        Some(extraction) => EntryOutcome::Mismatched {
            expected,
            actual: extraction.author().to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::FixtureSource;
    use byline_engine::{MockEngine, MockReply};
    use std::fs;
    use tempfile::TempDir;

    const URL: &str = "https://example.com/post";

    fn fixtures() -> (TempDir, FixtureSource) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("post.html"), "<html></html>").unwrap();
        let source = FixtureSource::new(dir.path());
        (dir, source)
    }

    #[test]
    fn test_matching_author() {
        let (_dir, source) = fixtures();
        let engine = MockEngine::new("Jane Doe");
        let entry = ComparisonEntry::new("post.html", ["Jane Doe"]);

        assert_eq!(
            evaluate_entry(URL, &entry, &source, &engine),
            EntryOutcome::Matched
        );
    }

    #[test]
    fn test_mismatching_author() {
        let (_dir, source) = fixtures();
        let engine = MockEngine::new("Jane D.");
        let entry = ComparisonEntry::new("post.html", ["Jane Doe"]);

        assert_eq!(
            evaluate_entry(URL, &entry, &source, &engine),
            EntryOutcome::Mismatched {
                expected: "Jane Doe".into(),
                actual: "Jane D.".into(),
            }
        );
    }

    #[test]
    fn test_multiple_authors_compare_joined() {
        let (_dir, source) = fixtures();
        let engine = MockEngine::new("Jane Doe; John Smith");
        let entry = ComparisonEntry::new("post.html", ["Jane Doe", "John Smith"]);
        assert_eq!(
            evaluate_entry(URL, &entry, &source, &engine),
            EntryOutcome::Matched
        );

        let reversed = ComparisonEntry::new("post.html", ["John Smith", "Jane Doe"]);
        assert!(matches!(
            evaluate_entry(URL, &reversed, &source, &engine),
            EntryOutcome::Mismatched { .. }
        ));
    }

    #[test]
    fn test_absent_and_failed_extraction() {
        let (_dir, source) = fixtures();
        let entry = ComparisonEntry::new("post.html", ["Jane Doe"]);

        for reply in [MockReply::Absent, MockReply::Error] {
            let engine = MockEngine::with_default(reply);
            assert_eq!(
                evaluate_entry(URL, &entry, &source, &engine),
                EntryOutcome::ExtractionFailed {
                    expected: "Jane Doe".into()
                }
            );
        }
    }

    #[test]
    fn test_ineligible_entries_skip_before_engine() {
        let (_dir, source) = fixtures();
        let engine = MockEngine::new("Jane Doe");

        let no_file = ComparisonEntry::new("", ["Jane Doe"]);
        let no_authors = ComparisonEntry::new("post.html", Vec::<String>::new());

        for entry in [no_file, no_authors] {
            assert_eq!(
                evaluate_entry(URL, &entry, &source, &engine),
                EntryOutcome::Skipped(SkipReason::Ineligible)
            );
        }
        assert_eq!(engine.call_count(), 0);
    }

    #[test]
    fn test_invalid_url_skips_before_open() {
        let (_dir, source) = fixtures();
        let engine = MockEngine::new("Jane Doe");
        // Missing fixture too: the URL stage must be the one that fires
        let entry = ComparisonEntry::new("missing.html", ["Jane Doe"]);

        let outcome = evaluate_entry("/relative/path", &entry, &source, &engine);
        assert!(matches!(
            outcome,
            EntryOutcome::Skipped(SkipReason::InvalidUrl(_))
        ));
        assert_eq!(engine.call_count(), 0);
    }

    #[test]
    fn test_unreadable_fixture_skips_before_engine() {
        let (_dir, source) = fixtures();
        let engine = MockEngine::new("Jane Doe");
        let entry = ComparisonEntry::new("missing.html", ["Jane Doe"]);

        let outcome = evaluate_entry(URL, &entry, &source, &engine);
        assert!(matches!(
            outcome,
            EntryOutcome::Skipped(SkipReason::Unreadable(_))
        ));
        assert_eq!(engine.call_count(), 0);
    }

    #[test]
    fn test_compare_stage_empty_author() {
        let entry = ComparisonEntry::new("post.html", ["Jane Doe"]);
        let extraction = Extraction::with_author("");
        assert_eq!(
            compare_stage(&entry, Some(&extraction)),
            EntryOutcome::Mismatched {
                expected: "Jane Doe".into(),
                actual: String::new(),
            }
        );
    }
}
