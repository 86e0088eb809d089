//! Fuzzy subsequence matching for typeahead candidate filtering.
//!
//! This crate decides how well a short query matches a candidate string and
//! ranks whole candidate lists by that score. Matching is case-insensitive
//! and diacritic-insensitive (lowercase + NFKD), and scoring is tiered:
//! containment beats subsequence beats nothing.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//! │ normalize.rs │────▶│ scoring/core   │────▶│ scoring/ranking  │
//! │ (lowercase + │     │ (score_match,  │     │ (rank,           │
//! │    NFKD)     │     │  match_kind)   │     │  compare_matches)│
//! └──────────────┘     └────────────────┘     └──────────────────┘
//!        │                     │                       │
//!        ▼                     ▼                       ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          types.rs                            │
//! │   (MatchKind, ScoredMatch, RankedMatch - the shapes every    │
//! │    surface shares: native API, CLI JSON, wasm)               │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Score tiers
//!
//! | Outcome                        | Score                 |
//! |--------------------------------|-----------------------|
//! | Exact match (post-normalize)   | `1.5`                 |
//! | Containment (contiguous)       | `len(q)/len(t) + 0.5` |
//! | Subsequence (in-order, gapped) | `len(q)/len(t)`       |
//! | No match                       | `-1.0` (sentinel)     |
//! | Empty query                    | `0.0`                 |
//!
//! The tiers deliberately overlap for short strings; see `scoring` for why
//! that stays.
//!
//! # Usage
//!
//! ```ignore
//! use tamis::{rank, score_match, RankOptions};
//!
//! let score = score_match("cat", "concatenate"); // 3/11 + 0.5 ≈ 0.7727
//!
//! let candidates = vec!["catalog".to_string(), "dog".to_string()];
//! let results = rank("cat", &candidates, &RankOptions::default());
//! assert_eq!(results[0].target, "catalog");
//! ```

// Module declarations
mod candidates;
mod normalize;
mod scoring;
pub mod testing;
mod types;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use candidates::{load_candidates, parse_candidates};
pub use normalize::normalize;
pub use scoring::ranking::{compare_matches, rank, RankOptions};
pub use scoring::{
    evaluate, match_kind, score_match, CONTAINMENT_BONUS, EMPTY_QUERY_SCORE, EXACT_MATCH_SCORE,
    NO_MATCH_SCORE,
};
pub use types::{MatchKind, RankedMatch, ScoredMatch};
