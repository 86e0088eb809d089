// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for score calculation invariants.
//!
//! Every score must land in a named band: the -1.0 sentinel, the 0.0
//! empty-query marker, or (0.0, 1.5]. The reported kind must agree with the
//! band, and the same pair run twice must produce identical results. This
//! catches floating-point edge cases and any NaN sneaking through.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tamis::{evaluate, score_match, MatchKind};

fuzz_target!(|input: (&str, &str)| {
    let (raw_query, raw_target) = input;

    // Cap lengths on scalar boundaries to keep the scan fast
    let query: String = raw_query.chars().take(200).collect();
    let target: String = raw_target.chars().take(200).collect();

    let result = evaluate(&query, &target);

    // INVARIANT 1: Scoring is deterministic
    let again = evaluate(&query, &target);
    assert_eq!(result.score, again.score, "Score changed between runs");
    assert_eq!(result.kind, again.kind, "Kind changed between runs");
    assert_eq!(
        result.score,
        score_match(&query, &target),
        "evaluate and score_match disagree"
    );

    // INVARIANT 2: Scores are finite and land in a named band
    assert!(result.score.is_finite(), "Score {} is not finite", result.score);
    let in_band = result.score == -1.0
        || result.score == 0.0
        || (result.score > 0.0 && result.score <= 1.5);
    assert!(in_band, "Score {} outside every band", result.score);

    // INVARIANT 3: The kind agrees with the band
    match result.kind {
        MatchKind::EmptyQuery => {
            assert!(query.is_empty(), "EmptyQuery for non-empty query {:?}", query);
            assert_eq!(result.score, 0.0, "EmptyQuery must score 0.0");
        }
        MatchKind::NoMatch => assert_eq!(result.score, -1.0, "NoMatch must score -1.0"),
        MatchKind::Exact => assert_eq!(result.score, 1.5, "Exact must score 1.5"),
        MatchKind::Containment => assert!(
            result.score > 0.5 && result.score < 1.5,
            "Containment score {} outside (0.5, 1.5)",
            result.score
        ),
        MatchKind::Subsequence => assert!(
            result.score > 0.0 && result.score < 1.0,
            "Subsequence score {} outside (0, 1)",
            result.score
        ),
    }

    // INVARIANT 4: An empty query scores 0.0 against this target too
    assert_eq!(score_match("", &target), 0.0, "Empty query must score 0.0");

    // INVARIANT 5: A non-empty query always matches itself exactly
    if !query.is_empty() {
        let own = evaluate(&query, &query);
        assert_eq!(own.score, 1.5, "Self-match for {:?} scored {}", query, own.score);
        assert_eq!(own.kind, MatchKind::Exact, "Self-match for {:?} not Exact", query);
    }
});
