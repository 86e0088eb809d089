//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::RankedMatch;

/// Tolerance for score comparisons.
///
/// Scores are small rationals (`len(q)/len(t)` plus a constant), so anything
/// further apart than this is a real disagreement, not float noise.
pub const SCORE_EPSILON: f64 = 1e-9;

/// Build an owned candidate list from string literals.
///
/// This is the canonical implementation used across all tests.
pub fn candidates(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Assert two scores agree within [`SCORE_EPSILON`].
pub fn assert_score(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < SCORE_EPSILON,
        "score {} differs from expected {}",
        actual,
        expected
    );
}

/// Extract just the target strings from ranked results, in rank order.
pub fn targets(results: &[RankedMatch]) -> Vec<String> {
    results.iter().map(|r| r.target.clone()).collect()
}
