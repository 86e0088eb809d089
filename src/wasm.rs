//! WebAssembly bindings for the tamis matcher.
//!
//! Thin wrappers over the scoring API for the typeahead component:
//! `scoreMatch`, `matchKind`, `normalize`, and `rank`. Candidate lists and
//! options cross the boundary as plain JS values via `serde-wasm-bindgen`;
//! an omitted options argument falls back to the defaults.

use crate::normalize::normalize;
use crate::scoring::ranking::{rank, RankOptions};
use crate::scoring::{match_kind, score_match};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Ranking options passed from JavaScript.
///
/// Matches the options object in the typeahead component: both fields are
/// optional on the JS side.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JsRankOptions {
    /// Maximum number of results to return (default: no cap)
    pub limit: Option<usize>,
    /// Minimum score to keep, inclusive (default: 0.0, drops sentinels)
    pub min_score: f64,
}

impl Default for JsRankOptions {
    fn default() -> Self {
        Self {
            limit: None,
            min_score: 0.0,
        }
    }
}

/// Score one query/target pair. Same decision ladder as the native API.
#[wasm_bindgen(js_name = scoreMatch)]
pub fn score_match_js(query: &str, target: &str) -> f64 {
    score_match(query, target)
}

/// Which branch the scorer took, as the camelCase string the component
/// switches on ("exact", "containment", "subsequence", "emptyQuery",
/// "noMatch").
#[wasm_bindgen(js_name = matchKind)]
pub fn match_kind_js(query: &str, target: &str) -> String {
    match_kind(query, target).as_str().to_string()
}

/// The normalized form the matcher compares.
#[wasm_bindgen(js_name = normalize)]
pub fn normalize_js(text: &str) -> String {
    normalize(text)
}

/// Rank an array of candidate strings against a query.
///
/// `candidates` is a JS array of strings; `options` is an optional
/// `{ limit, minScore }` object. Returns an array of
/// `{ index, target, score, kind }` entries in rank order.
#[wasm_bindgen(js_name = rank)]
pub fn rank_js(query: &str, candidates: JsValue, options: JsValue) -> Result<JsValue, JsValue> {
    let candidates: Vec<String> = from_value(candidates).map_err(|e| e.to_string())?;

    let options: JsRankOptions = if options.is_undefined() || options.is_null() {
        JsRankOptions::default()
    } else {
        from_value(options).map_err(|e| e.to_string())?
    };

    let results = rank(
        query,
        &candidates,
        &RankOptions {
            limit: options.limit,
            min_score: options.min_score,
        },
    );

    let js = to_value(&results).map_err(|e| e.to_string())?;
    Ok(js)
}
