// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match scoring and candidate ranking.
//!
//! `core` is the per-pair decision ladder; `ranking` runs it over a whole
//! candidate list. Core names are re-exported here so callers write
//! `scoring::score_match` without caring about the split.

mod core;
pub mod ranking;

pub use core::*;
