// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Candidate list loading.
//!
//! The CLI feeds [`rank`](crate::rank) from plain text: one candidate per
//! line. This module owns that format so the file and stdin paths parse
//! identically.

use std::fs;
use std::path::Path;

/// Parse a candidate list: one candidate per line, trimmed.
///
/// Blank lines (including whitespace-only lines) are skipped, so list files
/// can be formatted with separator lines. CRLF input works; `lines()` strips
/// the `\r` before the trim.
pub fn parse_candidates(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a UTF-8 candidate file and parse it with [`parse_candidates`].
pub fn load_candidates(path: &Path) -> Result<Vec<String>, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read candidates file '{}': {}", path.display(), e))?;
    Ok(parse_candidates(&contents))
}
