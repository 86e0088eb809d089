// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for ranking invariants.
//!
//! Whatever query, candidate list, limit, and threshold the fuzzer invents,
//! the output must be sorted by the published comparator, capped at the
//! limit, filtered at the threshold, and faithful to the input list.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::cmp::Ordering;
use tamis::{compare_matches, rank, score_match, RankOptions};

fuzz_target!(|input: (String, Vec<String>, u8, i8)| {
    let (raw_query, raw_candidates, limit_raw, min_raw) = input;

    // Cap sizes on scalar boundaries to keep each run fast
    let query: String = raw_query.chars().take(100).collect();
    let candidates: Vec<String> = raw_candidates
        .into_iter()
        .take(50)
        .map(|c| c.chars().take(100).collect())
        .collect();

    let limit = usize::from(limit_raw % 16);
    // Thresholds from -16.0 to +15.875 in eighths, covering both sentinels
    let min_score = f64::from(min_raw) / 8.0;

    let options = RankOptions {
        limit: Some(limit),
        min_score,
    };
    let results = rank(&query, &candidates, &options);

    // INVARIANT 1: Ranking is deterministic
    let again = rank(&query, &candidates, &options);
    assert_eq!(results.len(), again.len(), "Result count changed between runs");
    for (a, b) in results.iter().zip(again.iter()) {
        assert_eq!(a.index, b.index, "Result order changed between runs");
        assert_eq!(a.score, b.score, "Score changed between runs");
    }

    // INVARIANT 2: The limit caps the result count
    assert!(
        results.len() <= limit,
        "{} results with limit {}",
        results.len(),
        limit
    );

    // INVARIANT 3: Every row clears the threshold
    for entry in &results {
        assert!(
            entry.score >= min_score,
            "Score {} below threshold {}",
            entry.score,
            min_score
        );
    }

    // INVARIANT 4: Rows are sorted by the published comparator
    for pair in results.windows(2) {
        assert_ne!(
            compare_matches(&pair[0], &pair[1]),
            Ordering::Greater,
            "{:?} sorted before {:?}",
            pair[0],
            pair[1]
        );
    }

    // INVARIANT 5: Every row points at a real candidate with its real score
    for entry in &results {
        assert!(entry.index < candidates.len(), "Index {} out of range", entry.index);
        assert_eq!(
            entry.target, candidates[entry.index],
            "Target does not match its index"
        );
        assert_eq!(
            entry.score,
            score_match(&query, &entry.target),
            "Stored score disagrees with score_match"
        );
    }

    // INVARIANT 6: Without a limit, exactly the qualifying rows survive
    let unlimited = rank(
        &query,
        &candidates,
        &RankOptions {
            limit: None,
            min_score,
        },
    );
    let qualifying = candidates
        .iter()
        .filter(|c| score_match(&query, c) >= min_score)
        .count();
    assert_eq!(
        unlimited.len(),
        qualifying,
        "Unlimited rank kept {} rows, {} qualify",
        unlimited.len(),
        qualifying
    );
});
