// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;

mod cli;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Score {
            query,
            target,
            json,
        } => cli::run_score(&query, &target, json),
        Commands::Rank {
            query,
            input,
            limit,
            min_score,
            json,
        } => cli::run_rank(&query, input.as_deref(), limit, min_score, json),
        Commands::Normalize { text, json } => cli::run_normalize(&text, json),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
