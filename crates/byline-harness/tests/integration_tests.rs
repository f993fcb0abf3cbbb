//! Integration tests for byline-harness
//!
//! These tests drive a full run from a corpus file on disk through the
//! fixture source and a scripted engine to the printed report.

use byline_domain::EntryOutcome;
use byline_engine::{MockEngine, MockReply};
use byline_harness::{load_corpus, FixtureSource, Harness, HarnessConfig};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CORPUS: &str = r#"{
    "https://news.example.com/2021/03/budget.html": {
        "file": "budget.html",
        "authors": ["Jane Doe"]
    },
    "https://blog.example.org/posts/rust": {
        "file": "rust.html",
        "authors": ["Jane Doe", "John Smith"]
    },
    "https://magazine.example.net/feature": {
        "file": "feature.html",
        "authors": ["Ana Lima"]
    },
    "https://wire.example.com/story": {
        "file": "story.html",
        "authors": ["Wire Staff"]
    },
    "https://missing.example.com/": {
        "file": "missing.html",
        "authors": ["Nobody"]
    },
    "https://nofixture.example.com/": {
        "file": "",
        "authors": ["Nobody"]
    },
    "relative/page.html": {
        "file": "budget.html",
        "authors": ["Jane Doe"]
    }
}"#;

fn write_fixtures(root: &Path) {
    for name in ["budget.html", "rust.html", "feature.html", "story.html"] {
        fs::write(root.join(name), format!("<html><title>{}</title></html>", name)).unwrap();
    }
}

fn scripted_engine() -> MockEngine {
    let mut engine = MockEngine::with_default(MockReply::Absent);
    engine.add_author("https://news.example.com/2021/03/budget.html", "Jane Doe");
    engine.add_author("https://blog.example.org/posts/rust", "Jane Doe; John Smith");
    engine.add_author("https://magazine.example.net/feature", "ana lima");
    engine.add_reply("https://wire.example.com/story", MockReply::Error);
    engine
}

fn setup() -> (TempDir, byline_domain::Corpus, HarnessConfig) {
    let dir = TempDir::new().unwrap();
    let fixtures = dir.path().join("fixtures");
    fs::create_dir(&fixtures).unwrap();
    write_fixtures(&fixtures);

    let corpus_path = dir.path().join("corpus.json");
    fs::write(&corpus_path, CORPUS).unwrap();
    let corpus = load_corpus(&corpus_path).unwrap();

    let config = HarnessConfig {
        fixture_root: fixtures,
        ..HarnessConfig::default()
    };
    (dir, corpus, config)
}

#[test]
fn test_full_run_from_corpus_file() {
    let (_dir, corpus, config) = setup();
    assert_eq!(corpus.len(), 7);

    let source = FixtureSource::new(&config.fixture_root);
    let harness = Harness::new(source, scripted_engine(), config);
    let report = harness.run(&corpus);

    // budget, rust, feature, story reached the engine
    assert_eq!(report.n_document(), 4);
    // budget and rust matched; feature differs in case; story errored
    assert_eq!(report.n_correct(), 2);
    assert_eq!(report.accuracy(), 50.0);
    assert_eq!(report.skipped().count(), 3);
    assert_eq!(report.failures().count(), 2);

    let lines: Vec<_> = report.summary().lines().map(str::to_string).collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Duration:   "));
    assert_eq!(lines[1], "N document: 4");
    assert_eq!(lines[2], "N correct:  2");
    assert_eq!(lines[3], "Percentage: 50.000000");
}

#[test]
fn test_failures_keep_their_cause() {
    let (_dir, corpus, config) = setup();
    let harness = Harness::new(FixtureSource::new(&config.fixture_root), scripted_engine(), config);
    let report = harness.run(&corpus);

    let feature = report
        .failures()
        .find(|(url, _)| *url == "https://magazine.example.net/feature")
        .map(|(_, outcome)| outcome.clone());
    assert_eq!(
        feature,
        Some(EntryOutcome::Mismatched {
            expected: "Ana Lima".into(),
            actual: "ana lima".into(),
        })
    );

    let story = report
        .failures()
        .find(|(url, _)| *url == "https://wire.example.com/story")
        .map(|(_, outcome)| outcome.clone());
    assert_eq!(
        story,
        Some(EntryOutcome::ExtractionFailed {
            expected: "Wire Staff".into(),
        })
    );
}

#[test]
fn test_engine_sees_fixture_bytes() {
    let (_dir, corpus, config) = setup();
    let engine = scripted_engine();
    let harness = Harness::new(FixtureSource::new(&config.fixture_root), engine.clone(), config);
    harness.run(&corpus);

    let calls = engine.calls();
    assert_eq!(calls.len(), 4);
    assert!(calls.iter().all(|call| call.no_fallback));
    assert!(calls.iter().all(|call| call.document_len > 0));
}

#[tokio::test]
async fn test_concurrent_run_agrees_with_sequential() {
    let (_dir, corpus, mut config) = setup();
    config.workers = 4;
    let harness = Harness::new(FixtureSource::new(&config.fixture_root), scripted_engine(), config);

    let sequential = harness.run(&corpus);
    let concurrent = harness.run_concurrent(&corpus).await.unwrap();

    assert_eq!(sequential.n_document(), concurrent.n_document());
    assert_eq!(sequential.n_correct(), concurrent.n_correct());
    assert_eq!(sequential.outcomes, concurrent.outcomes);
}
