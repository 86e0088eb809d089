//! Shared test utilities and fixtures.

#![allow(dead_code)]

use tamis::{rank, RankOptions, RankedMatch};

// Re-export canonical test utilities from tamis::testing
pub use tamis::testing::{assert_score, candidates, targets, SCORE_EPSILON};

// ============================================================================
// CORPORA
// ============================================================================

/// Blog-ish page titles, the shape of list the typeahead component filters.
pub fn title_corpus() -> Vec<String> {
    candidates(&[
        "Concatenating strings in Rust",
        "Cat pictures, curated",
        "Photography in the mountains",
        "Naïve Bayes from scratch",
        "The scatter plot survival guide",
        "Résumé-driven development",
        "Über-engineering a blog search",
    ])
}

/// Single words for tier-level assertions.
pub fn word_corpus() -> Vec<String> {
    candidates(&[
        "cat", "catalog", "concatenate", "scatter", "crate", "manufacturing", "dog",
    ])
}

// ============================================================================
// RANK HELPERS
// ============================================================================

/// Rank against a corpus with default options (no limit, sentinels dropped).
pub fn rank_default(query: &str, list: &[String]) -> Vec<RankedMatch> {
    rank(query, list, &RankOptions::default())
}

/// Rank with an explicit limit, default threshold.
pub fn rank_limited(query: &str, list: &[String], limit: usize) -> Vec<RankedMatch> {
    rank(
        query,
        list,
        &RankOptions {
            limit: Some(limit),
            min_score: 0.0,
        },
    )
}

/// Assert results are in non-increasing score order.
pub fn assert_sorted_by_score(results: &[RankedMatch]) {
    for pair in results.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "results out of order: {} ({}) before {} ({})",
            pair[0].target,
            pair[0].score,
            pair[1].target,
            pair[1].score
        );
    }
}
