// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Batch ranking: score a whole candidate list and return the best entries.
//!
//! Ordering is by raw score, not by match kind. The tier overlap makes this
//! visible: a short subsequence match at `0.667` legitimately outranks a long
//! containment match at `0.55`, and ranked output preserves that exactly as
//! the scorer produced it. Kind is carried along for badges and filtering,
//! never as a sort key.

use crate::scoring::core::evaluate;
use crate::types::RankedMatch;
use std::cmp::Ordering;

/// Knobs for [`rank`].
///
/// The default keeps empty-query rows (score `0.0`) and drops `-1.0`
/// sentinels. Set `min_score` to `-1.0` (or anything lower) to admit
/// everything, or to `0.5` to keep only containment-or-better scores, with
/// the usual tier-overlap caveat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankOptions {
    /// Keep at most this many results after sorting. `None` keeps all.
    pub limit: Option<usize>,
    /// Drop candidates scoring below this (inclusive filter: `score >=
    /// min_score` survives).
    pub min_score: f64,
}

impl Default for RankOptions {
    fn default() -> Self {
        RankOptions {
            limit: None,
            min_score: 0.0,
        }
    }
}

/// Score every candidate against `query`, filter, sort, truncate.
///
/// Each returned entry keeps the candidate's `index` in the input slice, so
/// callers can map results back to richer records after ranking reorders
/// everything. Ranking is fully deterministic for any input order; see
/// [`compare_matches`] for the tie-breaking cascade.
///
/// With an empty query every candidate scores `0.0`, so default options
/// return the whole list ordered by target then index. Typeahead callers
/// short-circuit empty input before ranking.
pub fn rank(query: &str, candidates: &[String], options: &RankOptions) -> Vec<RankedMatch> {
    let mut matches: Vec<RankedMatch> = candidates
        .iter()
        .enumerate()
        .filter_map(|(index, target)| {
            let scored = evaluate(query, target);
            if scored.score >= options.min_score {
                Some(RankedMatch {
                    index,
                    target: target.clone(),
                    score: scored.score,
                    kind: scored.kind,
                })
            } else {
                None
            }
        })
        .collect();

    matches.sort_by(compare_matches);

    if let Some(limit) = options.limit {
        matches.truncate(limit);
    }

    matches
}

/// Compare two ranked entries for sorting.
///
/// Sort order:
/// 1. **Score** - descending (higher wins), the only ranking signal
/// 2. **Target** - ascending lexicographic tiebreaker for determinism
/// 3. **Index** - final tiebreaker when identical strings appear twice
///
/// Scores here are always finite (`-1.0`, `0.0`, or a positive ratio), so the
/// `partial_cmp` fallback arm only exists to keep the cascade total.
pub fn compare_matches(a: &RankedMatch, b: &RankedMatch) -> Ordering {
    // Primary: score (descending - higher score wins)
    match b.score.partial_cmp(&a.score) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => {
            // Secondary: target (ascending - alphabetical)
            match a.target.cmp(&b.target) {
                Ordering::Equal => {
                    // Final tie-breaker: input position for absolute determinism
                    a.index.cmp(&b.index)
                }
                ord => ord,
            }
        }
    }
}
