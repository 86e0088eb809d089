// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Public result types shared by the scoring API, the CLI, and the wasm
//! bindings. Everything here serializes in camelCase because the primary
//! consumer is a JavaScript typeahead component.

use serde::{Deserialize, Serialize};

/// Which branch of the scoring ladder produced a score.
///
/// The numeric score alone cannot tell you this: subsequence scores are not
/// clamped below the containment floor, so a `0.6667` may come from either
/// tier. Consumers that badge or filter by tier need the branch, not the
/// number.
///
/// **Gotcha**: declaration order is presentation order (best tier first), not
/// score order. A `Subsequence` can outscore a `Containment`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum MatchKind {
    /// Query and target are identical after normalization. Score is `1.5`.
    Exact,
    /// Normalized query occurs contiguously inside the target. Score is
    /// `len(q)/len(t) + 0.5`, in `(0.5, 1.5)`.
    Containment,
    /// Every query scalar occurs in the target in order, with gaps. Score is
    /// `len(q)/len(t)`, in `(0, 1)`.
    Subsequence,
    /// The raw query was empty. Score is `0.0` regardless of target.
    EmptyQuery,
    /// The query is not even a subsequence of the target. Score is `-1.0`.
    NoMatch,
}

impl MatchKind {
    /// String form matching the serde `rename_all = "camelCase"` convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::Containment => "containment",
            MatchKind::Subsequence => "subsequence",
            MatchKind::EmptyQuery => "emptyQuery",
            MatchKind::NoMatch => "noMatch",
        }
    }
}

/// Score plus the branch that produced it, from one query/target evaluation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoredMatch {
    pub score: f64,
    pub kind: MatchKind,
}

/// One entry of a ranked candidate list.
///
/// `index` is the candidate's position in the input slice, so callers can
/// map results back to their own data after filtering and sorting have
/// reordered everything.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RankedMatch {
    pub index: usize,
    pub target: String,
    pub score: f64,
    pub kind: MatchKind,
}
