//! Custom cargo commands for the matcher crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (tests + constant alignment)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("Matcher Crate Verification Suite");
    println!("==========================================\n");

    // Step 1: Check invariant markers
    println!("[1/4] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    // Step 2: Run tests
    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    // Step 3: Clippy
    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    // Step 4: Verify scoring constants
    println!("[4/4] Verifying scoring constant alignment...");
    verify_constants()?;
    println!("✓ Constants aligned\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
    println!("\nSafe to commit changes.");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::current_dir().unwrap());

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output.stdout.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count();

    if count < 2 {
        bail!(
            "Expected at least 2 INVARIANT markers, found {}. Someone may have removed safety comments!",
            count
        );
    }

    Ok(())
}

/// The web component's badge thresholds compare against these exact values,
/// so any drift in the constants table is a release blocker.
fn verify_constants() -> Result<()> {
    let root = project_root()?;

    let core_rs = std::fs::read_to_string(root.join("src/scoring/core.rs"))
        .context("Failed to read scoring/core.rs")?;

    let no_match = extract_constant(&core_rs, "NO_MATCH_SCORE")
        .context("NO_MATCH_SCORE not found in scoring/core.rs")?;
    let empty_query = extract_constant(&core_rs, "EMPTY_QUERY_SCORE")
        .context("EMPTY_QUERY_SCORE not found in scoring/core.rs")?;
    let bonus = extract_constant(&core_rs, "CONTAINMENT_BONUS")
        .context("CONTAINMENT_BONUS not found in scoring/core.rs")?;

    if no_match != -1.0 {
        bail!("NO_MATCH_SCORE={} but the component expects -1.0", no_match);
    }
    if empty_query != 0.0 {
        bail!("EMPTY_QUERY_SCORE={} but the component expects 0.0", empty_query);
    }
    if bonus != 0.5 {
        bail!("CONTAINMENT_BONUS={} but the component expects 0.5", bonus);
    }
    if !(no_match < empty_query && empty_query < bonus) {
        bail!(
            "Sentinel ordering broken: {} < {} < {} must hold",
            no_match,
            empty_query,
            bonus
        );
    }

    // EXACT_MATCH_SCORE must stay defined in terms of the bonus, not as a
    // second literal that can drift on its own.
    let exact_line = core_rs
        .lines()
        .find(|l| l.contains("const EXACT_MATCH_SCORE"))
        .context("EXACT_MATCH_SCORE not found in scoring/core.rs")?;
    if !exact_line.contains("1.0 + CONTAINMENT_BONUS") {
        bail!("EXACT_MATCH_SCORE must be defined as 1.0 + CONTAINMENT_BONUS");
    }

    Ok(())
}

fn extract_constant(content: &str, name: &str) -> Option<f64> {
    // Look for "pub const NAME: f64 = -1.0;"
    for line in content.lines() {
        if line.contains(&format!("const {}", name)) {
            if let Some(value) = line.split('=').nth(1) {
                let value = value
                    .split("//")
                    .next()
                    .unwrap_or("")
                    .trim()
                    .trim_end_matches(';')
                    .trim();
                if let Ok(n) = value.parse::<f64>() {
                    return Some(n);
                }
            }
        }
    }
    None
}
