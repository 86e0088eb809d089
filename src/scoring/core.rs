// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The scoring ladder behind candidate ranking.
//!
//! A containment match always scores at least the containment bonus, while
//! subsequence ratios for realistic queries usually land well below it. The
//! tiers are NOT disjoint, though; read "Tier overlap" before touching
//! anything in this file.
//!
//! # Decision ladder (evaluated in this exact order)
//!
//! | Step | Condition                    | Score                 | Kind          |
//! |------|------------------------------|-----------------------|---------------|
//! | 1    | raw query is empty           | `0.0`                 | `EmptyQuery`  |
//! | 2    | `t` contains `q` contiguously| `len(q)/len(t) + 0.5` | `Containment` |
//! |      | (`q == t` exactly)           | `1.5`                 | `Exact`       |
//! | 3    | `q` is a subsequence of `t`  | `len(q)/len(t)`       | `Subsequence` |
//! | 4    | otherwise                    | `-1.0`                | `NoMatch`     |
//!
//! `q` and `t` are the normalized forms of query and target; `len` counts
//! Unicode scalars of those normalized forms. Step 1 fires before any
//! normalization and never looks at the target. A non-empty query against an
//! empty target falls through to step 4.
//!
//! # Tier overlap (DO NOT "FIX")
//!
//! The subsequence formula is not clamped below [`CONTAINMENT_BONUS`]. Short
//! queries against short targets cross the floor: `score_match("ct", "cat")`
//! is `2/3 ≈ 0.667`, which outranks a containment match scoring `0.55`.
//! Stored consumer thresholds and the web component's ordering depend on
//! these exact values. Clamping or re-bucketing here breaks them; the overlap
//! is pinned by tests.

use crate::normalize::normalize;
use crate::types::{MatchKind, ScoredMatch};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================
// DO NOT CHANGE: the web component's badge logic and saved filter thresholds
// compare against these exact values.

/// Score for an empty raw query. Returned before normalization runs and
/// regardless of the target, empty target included.
pub const EMPTY_QUERY_SCORE: f64 = 0.0;

/// Sentinel for "not even a subsequence". Strictly below every real score,
/// so `score >= 0.0` filters it out.
pub const NO_MATCH_SCORE: f64 = -1.0;

/// Added on top of the length ratio when the query occurs contiguously in
/// the target.
pub const CONTAINMENT_BONUS: f64 = 0.5;

/// Score when query and target are identical after normalization: length
/// ratio of exactly 1 plus the containment bonus. Not a separate code path.
pub const EXACT_MATCH_SCORE: f64 = 1.0 + CONTAINMENT_BONUS;

/// Score how well `query` matches `target`.
///
/// Runs the decision ladder documented at module level and returns the score
/// alone. Use [`match_kind`] for the branch, or [`evaluate`] for both in one
/// pass.
///
/// Total function: any two strings produce a score, no panics, no state.
pub fn score_match(query: &str, target: &str) -> f64 {
    evaluate(query, target).score
}

/// Which branch of the decision ladder `query` against `target` takes.
///
/// This cannot be recovered from the score: the tier overlap means `0.667`
/// is a legal score for both a containment and a subsequence match.
pub fn match_kind(query: &str, target: &str) -> MatchKind {
    evaluate(query, target).kind
}

/// Run the decision ladder once, returning score and branch together.
///
/// [`rank`](crate::scoring::ranking::rank) calls this per candidate so each
/// string is normalized exactly once.
pub fn evaluate(query: &str, target: &str) -> ScoredMatch {
    // Explicit emptiness check on the RAW query, before normalization and
    // before the target is looked at.
    if query.is_empty() {
        return ScoredMatch {
            score: EMPTY_QUERY_SCORE,
            kind: MatchKind::EmptyQuery,
        };
    }

    let q = normalize(query);
    let t = normalize(target);

    // INVARIANT: q is non-empty past this point. normalize never deletes
    // scalars, so a non-empty raw query cannot normalize to "". Every path
    // below that divides by t's length requires t to cover q, making t
    // non-empty on those paths as well.
    let q_chars: Vec<char> = q.chars().collect();
    let q_len = q_chars.len();
    let t_len = t.chars().count();

    if t.contains(q.as_str()) {
        let kind = if q == t {
            MatchKind::Exact
        } else {
            MatchKind::Containment
        };
        return ScoredMatch {
            score: q_len as f64 / t_len as f64 + CONTAINMENT_BONUS,
            kind,
        };
    }

    if is_subsequence(&q_chars, &t) {
        return ScoredMatch {
            score: q_len as f64 / t_len as f64,
            kind: MatchKind::Subsequence,
        };
    }

    ScoredMatch {
        score: NO_MATCH_SCORE,
        kind: MatchKind::NoMatch,
    }
}

/// Single left-to-right scan: does every scalar of `query` occur in `target`
/// in order, gaps allowed?
///
/// O(len(target)) with no backtracking.
fn is_subsequence(query: &[char], target: &str) -> bool {
    let mut qi = 0;

    for c in target.chars() {
        // INVARIANT: qi is monotone. It never resets, never skips, and stays
        // within 0..=query.len(), advancing at most once per target scalar.
        if qi < query.len() && c == query[qi] {
            qi += 1;
        }
    }

    qi == query.len()
}
