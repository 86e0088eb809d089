// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text canonicalization for comparison.
//!
//! Every comparison in this crate happens on normalized text. The scorer never
//! sees raw input: both query and target go through [`normalize`] first, so
//! case and precomposed-vs-decomposed differences cannot affect a match.

use unicode_normalization::UnicodeNormalization;

/// Canonicalize text for matching: lowercase, then NFKD decomposition.
///
/// This makes comparison case-insensitive and diacritic-insensitive in the
/// decomposition direction:
/// - "Café" → "cafe" + combining acute (so "cafe" is a substring of it)
/// - "naïve" → "nai" + combining diaeresis + "ve"
/// - "ＲＵＳＴ" → "rust" (fullwidth forms collapse to ASCII)
/// - "ﬁle" → "file" (ligatures expand)
///
/// # Algorithm
///
/// 1. Lowercase (full Unicode lowercasing, including special casings)
/// 2. NFKD normalize (compatibility decomposition into base + combining marks)
///
/// The order matters and is fixed. Lowercasing runs on the precomposed input,
/// so compatibility expansions surface *after* the case pass: `normalize("™")`
/// is `"TM"`, not `"tm"`, because `™` has no lowercase mapping and only
/// expands during decomposition. The function is therefore not idempotent for
/// every input. Callers must not re-normalize to compensate; downstream
/// scoring depends on single-pass output.
///
/// Combining marks are kept, not stripped. The scorer relies on seeing them:
/// "e" matches inside the decomposition of "é", while "é" (2 scalars after
/// decomposition) never matches inside plain "e".
///
/// Total function: no errors, no panics, and non-empty input always produces
/// non-empty output (neither pass ever deletes a scalar).
pub fn normalize(text: &str) -> String {
    text.to_lowercase().nfkd().collect()
}
