// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for normalization totality.
//!
//! Lowercasing plus NFKD must accept any string without panicking, behave
//! deterministically, and never shrink the scalar count. Note the function
//! is not idempotent ("™" expands to uppercase "TM"), so idempotence is
//! deliberately not asserted here.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tamis::normalize;

fuzz_target!(|text: &str| {
    let capped: String = text.chars().take(400).collect();

    let normalized = normalize(&capped);

    // INVARIANT 1: Normalization is deterministic
    assert_eq!(normalized, normalize(&capped), "Output changed between runs");

    // INVARIANT 2: Decomposition never shrinks the scalar count
    assert!(
        normalized.chars().count() >= capped.chars().count(),
        "Normalizing {:?} shrank {} scalars to {}",
        capped,
        capped.chars().count(),
        normalized.chars().count()
    );

    // INVARIANT 3: Only the empty string normalizes to empty
    assert_eq!(
        normalized.is_empty(),
        capped.is_empty(),
        "Emptiness changed for {:?}",
        capped
    );

    // INVARIANT 4: The output is valid input for a second pass
    let twice = normalize(&normalized);
    assert!(
        twice.chars().count() >= normalized.chars().count(),
        "Second pass shrank the scalar count"
    );
});
