// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the tamis command-line interface.
//!
//! Three subcommands: `score` for a single query/target pair, `rank` to order
//! a whole candidate list, and `normalize` to show what the matcher actually
//! compares. Every command takes `--json` for machine-readable output; the
//! default is a themed terminal card.

pub mod display;

use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

use tamis::{
    evaluate, load_candidates, normalize, parse_candidates, rank, RankOptions, RankedMatch,
};

#[derive(Parser)]
#[command(
    name = "tamis",
    about = "Diacritic-insensitive fuzzy matching for typeahead filtering",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a single query against a single target
    Score {
        /// Query string (what the user typed)
        query: String,

        /// Target string (the candidate being matched)
        target: String,

        /// Emit a JSON object instead of the themed card
        #[arg(long)]
        json: bool,
    },

    /// Rank a candidate list against a query
    Rank {
        /// Query string
        query: String,

        /// File with one candidate per line (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Maximum number of results to show
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Minimum score a candidate must reach (inclusive; -1 admits non-matches)
        #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
        min_score: f64,

        /// Emit a JSON array instead of the themed table
        #[arg(long)]
        json: bool,
    },

    /// Print the normalized form the matcher compares
    Normalize {
        /// Text to normalize
        text: String,

        /// Emit a JSON object instead of the themed card
        #[arg(long)]
        json: bool,
    },
}

// ═══════════════════════════════════════════════════════════════════════════
// COMMAND IMPLEMENTATIONS
// ═══════════════════════════════════════════════════════════════════════════

/// Score one pair and print the result.
pub fn run_score(query: &str, target: &str, json: bool) -> Result<(), String> {
    let scored = evaluate(query, target);

    if json {
        let payload = serde_json::json!({
            "query": query,
            "target": target,
            "score": scored.score,
            "kind": scored.kind,
        });
        println!("{}", to_json_line(&payload)?);
        return Ok(());
    }

    display::section_top("MATCH");
    display::row(&format!(
        "{}{}",
        field_key("query"),
        display::themed(display::MAGENTA, &[], query)
    ));
    display::row(&format!(
        "{}{}",
        field_key("target"),
        display::themed(display::WHITE, &[], target)
    ));
    display::section_mid("NORMALIZED");
    display::row(&format!(
        "{}{}",
        field_key("query"),
        display::themed(display::BRIGHT_CYAN, &[], &normalize(query))
    ));
    display::row(&format!(
        "{}{}",
        field_key("target"),
        display::themed(display::BRIGHT_CYAN, &[], &normalize(target))
    ));
    display::section_mid("RESULT");
    display::row(&format!(
        "{}{}",
        field_key("kind"),
        display::kind_label(scored.kind)
    ));
    display::row(&format!(
        "{}{}",
        field_key("score"),
        display::score_value(scored.score)
    ));
    display::section_bot();

    Ok(())
}

/// Rank candidates from a file or stdin and print the result list.
pub fn run_rank(
    query: &str,
    input: Option<&Path>,
    limit: usize,
    min_score: f64,
    json: bool,
) -> Result<(), String> {
    let candidates = match input {
        Some(path) => load_candidates(path)?,
        None => read_stdin_candidates()?,
    };

    let options = RankOptions {
        limit: Some(limit),
        min_score,
    };
    let results = rank(query, &candidates, &options);

    if json {
        println!("{}", to_json_line(&results)?);
        return Ok(());
    }

    print_rank_table(query, candidates.len(), &results);
    Ok(())
}

/// Show the form the matcher actually compares.
pub fn run_normalize(text: &str, json: bool) -> Result<(), String> {
    let normalized = normalize(text);

    if json {
        let payload = serde_json::json!({
            "input": text,
            "normalized": normalized,
            "scalars": normalized.chars().count(),
            "bytes": normalized.len(),
        });
        println!("{}", to_json_line(&payload)?);
        return Ok(());
    }

    display::section_top("NORMALIZE");
    display::row(&format!(
        "{}{}",
        field_key("input"),
        display::themed(display::MAGENTA, &[], text)
    ));
    display::row(&format!(
        "{}{}",
        field_key("normalized"),
        display::themed(display::BRIGHT_CYAN, &[], &normalized)
    ));
    display::row(&format!(
        "{}{}",
        field_key("scalars"),
        display::themed(display::WHITE, &[], &normalized.chars().count().to_string())
    ));
    display::row(&format!(
        "{}{}",
        field_key("bytes"),
        display::themed(display::WHITE, &[], &normalized.len().to_string())
    ));
    display::section_bot();

    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// HELPERS
// ═══════════════════════════════════════════════════════════════════════════

/// Gray field key, fixed width so values line up.
fn field_key(key: &str) -> String {
    display::themed(display::GRAY, &[], &format!(" {:<12}", key))
}

fn to_json_line<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Failed to serialize result: {}", e))
}

fn read_stdin_candidates() -> Result<Vec<String>, String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| format!("Failed to read candidates from stdin: {}", e))?;
    Ok(parse_candidates(&buffer))
}

fn print_rank_table(query: &str, total: usize, results: &[RankedMatch]) {
    display::section_top("RANK");
    display::row(&format!(
        "{}{}",
        field_key("query"),
        display::themed(display::MAGENTA, &[], query)
    ));
    display::row(&format!(
        "{}{}",
        field_key("candidates"),
        display::themed(
            display::WHITE,
            &[],
            &format!("{} scored, {} shown", total, results.len())
        )
    ));
    display::section_mid("RESULTS");

    if results.is_empty() {
        display::row(&display::themed(display::GRAY, &[display::DIM], " (no matches)"));
    }

    for (position, entry) in results.iter().enumerate() {
        let rank_col = display::pad_left(&format!("{}.", position + 1), 4);
        let score_col = display::score_value(entry.score);
        let kind_col = display::pad_right(&display::kind_label(entry.kind), 12);
        let target_col = display::truncate_target(&entry.target, 48);
        display::row(&format!(
            "{} {} {} {}",
            rank_col,
            score_col,
            kind_col,
            display::themed(display::WHITE, &[], &target_col)
        ));
    }

    display::section_bot();
}
