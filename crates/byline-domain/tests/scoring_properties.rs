//! Property tests for the scoring rules
//!
//! These verify that counters only move for eligible, evaluated entries and
//! that the comparator never normalises its inputs.

use byline_domain::{
    authors_match, expected_author, ComparisonEntry, EntryOutcome, RunMetrics, SkipReason,
};
use proptest::prelude::*;

fn author_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z .'-]{0,20}"
}

/// Kinds 0..3 reach the engine, 3..6 are skipped before it
fn outcome(kind: u8) -> EntryOutcome {
    match kind {
        0 => EntryOutcome::Matched,
        1 => EntryOutcome::Mismatched {
            expected: "Jane Doe".into(),
            actual: "Jane D.".into(),
        },
        2 => EntryOutcome::ExtractionFailed {
            expected: "Jane Doe".into(),
        },
        3 => EntryOutcome::Skipped(SkipReason::Ineligible),
        4 => EntryOutcome::Skipped(SkipReason::InvalidUrl("no authority".into())),
        _ => EntryOutcome::Skipped(SkipReason::Unreadable("missing".into())),
    }
}

proptest! {
    #[test]
    fn expected_author_has_one_separator_between_names(
        authors in prop::collection::vec(author_name(), 1..5)
    ) {
        let expected = expected_author(&authors);
        prop_assert!(expected.starts_with(authors[0].as_str()));
        prop_assert!(expected.ends_with(authors[authors.len() - 1].as_str()));
        prop_assert_eq!(
            expected.len(),
            authors.iter().map(String::len).sum::<usize>() + 2 * (authors.len() - 1)
        );
    }

    #[test]
    fn identical_strings_always_match(author in author_name()) {
        prop_assert!(authors_match(&author, Some(author.as_str())));
    }

    #[test]
    fn case_changes_never_match(author in "[a-z]{1,20}") {
        let upper = author.to_uppercase();
        prop_assert!(!authors_match(&author, Some(upper.as_str())));
    }

    #[test]
    fn eligibility_requires_file_and_authors(
        file in prop_oneof![Just(String::new()), "[a-z]{1,8}\\.html"],
        authors in prop::collection::vec(author_name(), 0..3),
    ) {
        let entry = ComparisonEntry::new(file.clone(), authors.clone());
        prop_assert_eq!(entry.is_eligible(), !file.is_empty() && !authors.is_empty());
    }

    #[test]
    fn counters_follow_outcome_kinds(kinds in prop::collection::vec(0u8..6, 0..40)) {
        let outcomes: Vec<EntryOutcome> = kinds.iter().map(|kind| outcome(*kind)).collect();

        let mut metrics = RunMetrics::start();
        for outcome in &outcomes {
            metrics.record(outcome);
        }

        let evaluated = kinds.iter().filter(|kind| **kind < 3).count();
        let matched = kinds.iter().filter(|kind| **kind == 0).count();
        prop_assert_eq!(metrics.n_document, evaluated);
        prop_assert_eq!(metrics.n_correct, matched);
    }

    #[test]
    fn accuracy_is_bounded(correct in 0usize..50, extra in 0usize..50) {
        let mut metrics = RunMetrics::start();
        for _ in 0..correct {
            metrics.record(&EntryOutcome::Matched);
        }
        for _ in 0..extra {
            metrics.record(&EntryOutcome::ExtractionFailed { expected: "A".into() });
        }
        let accuracy = metrics.accuracy();
        prop_assert!(accuracy.is_finite());
        prop_assert!((0.0..=100.0).contains(&accuracy));
    }
}
