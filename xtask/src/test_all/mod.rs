//! Run all tests with proper cleanup.
//!
//! This module provides a test runner that:
//! - Cleans up stale pending snapshot files before testing
//! - Runs the workspace tests (or specific test filters)
//! - Reports results clearly
//! - Optionally cleans up after failed tests
//!
//! ## Commands
//!
//! - `run` - Run all tests with cleanup
//! - `clean` - Clean up all test artifacts
//! - `status` - Show test status and artifact counts
//!
//! All snapshots in the workspace are inline, so a failing snapshot leaves a `.pending-snap`
//! file next to the test source. File snapshots would leave `.snap.new` files instead.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Subcommand;

/// Directories that may contain pending snapshot files.
const SOURCE_DIRS: &[&str] = &["src", "tabswitcher-config/src"];

/// Suffixes of files insta leaves behind for failed snapshot assertions.
const PENDING_SUFFIXES: &[&str] = &[".pending-snap", ".snap.new"];

#[derive(Subcommand)]
pub enum Action {
    /// Run all tests with cleanup
    Run {
        /// Only run tests matching this filter
        #[arg(long, short)]
        filter: Option<String>,

        /// Don't clean up pending snapshots before running
        #[arg(long)]
        no_pre_clean: bool,

        /// Clean up pending snapshots after test failures
        #[arg(long)]
        post_clean: bool,

        /// Run tests in release mode
        #[arg(long)]
        release: bool,

        /// Pass --nocapture to the test binaries
        #[arg(long, short)]
        verbose: bool,
    },
    /// Clean up all test artifacts (pending snapshots)
    Clean {
        /// Show what would be cleaned without actually cleaning
        #[arg(long)]
        dry_run: bool,
    },
    /// Show test artifact counts
    Status,
}

pub fn run(action: Action) -> Result<()> {
    match action {
        Action::Run {
            filter,
            no_pre_clean,
            post_clean,
            release,
            verbose,
        } => run_tests(filter, no_pre_clean, post_clean, release, verbose),
        Action::Clean { dry_run } => clean_artifacts(dry_run),
        Action::Status => show_status(),
    }
}

// =============================================================================
// Test runner
// =============================================================================

fn run_tests(
    filter: Option<String>,
    no_pre_clean: bool,
    post_clean: bool,
    release: bool,
    verbose: bool,
) -> Result<()> {
    println!("Running all tests\n");

    if !no_pre_clean {
        let cleaned = clean_pending_files()?;
        if cleaned > 0 {
            println!("Cleaned {cleaned} stale pending snapshots\n");
        }
    }

    let mut args = vec!["test", "--workspace"];

    if release {
        args.push("--release");
    }

    if filter.is_some() || verbose {
        args.push("--");
    }
    if let Some(filter) = &filter {
        args.push(filter);
    }
    if verbose {
        args.push("--nocapture");
    }

    println!("Running: cargo {}\n", args.join(" "));

    let start = Instant::now();
    let status = Command::new("cargo")
        .args(&args)
        .status()
        .context("Failed to run cargo test")?;
    let duration = start.elapsed();

    println!();

    if status.success() {
        println!("All tests passed in {:.2}s", duration.as_secs_f64());
        return Ok(());
    }

    println!("Some tests failed (took {:.2}s)", duration.as_secs_f64());

    let pending = find_pending_files();
    if !pending.is_empty() {
        println!("\nFound {} pending snapshots (test output diffs)", pending.len());

        if post_clean {
            println!("\nCleaning up pending snapshots (--post-clean)...");
            let cleaned = clean_pending_files()?;
            println!("   Removed {cleaned} files");
        } else {
            println!("\n   To clean up: cargo xtask test-all clean");
            println!("   To view diffs: cargo insta review");
        }
    }

    std::process::exit(1);
}

// =============================================================================
// Cleanup
// =============================================================================

fn clean_artifacts(dry_run: bool) -> Result<()> {
    println!("Cleaning test artifacts\n");

    let pending = find_pending_files();

    if pending.is_empty() {
        println!("No pending snapshots found");
        return Ok(());
    }

    println!("Found {} pending snapshots:\n", pending.len());

    for path in &pending {
        if dry_run {
            println!("  [dry-run] Would remove: {}", path.display());
        } else {
            println!("  {}", path.display());
            std::fs::remove_file(path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        }
    }

    if dry_run {
        println!("\n[DRY RUN] Would have removed {} files", pending.len());
    } else {
        println!("\nRemoved {} pending snapshots", pending.len());
    }

    Ok(())
}

fn show_status() -> Result<()> {
    println!("Test Artifact Status\n");

    let pending = find_pending_files();
    println!("Pending snapshots: {} files", pending.len());

    if pending.is_empty() {
        println!("\nNo pending test artifacts");
    } else {
        for path in &pending {
            println!("  {}", path.display());
        }
        println!();
        println!("   Options:");
        println!("   - Fix the code to match the expected output");
        println!("   - View diffs: cargo insta review");
        println!("   - Clean up: cargo xtask test-all clean");
    }

    Ok(())
}

// =============================================================================
// Helpers
// =============================================================================

fn find_pending_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    for dir in SOURCE_DIRS {
        collect_pending_files(Path::new(dir), &mut files);
    }

    files.sort();
    files
}

fn collect_pending_files(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in entries.filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.is_dir() {
            collect_pending_files(&path, files);
        } else if is_pending_snapshot(&path) {
            files.push(path);
        }
    }
}

fn is_pending_snapshot(path: &Path) -> bool {
    let name = path.to_string_lossy();
    PENDING_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

fn clean_pending_files() -> Result<usize> {
    let files = find_pending_files();
    let count = files.len();

    for path in files {
        std::fs::remove_file(&path)
            .with_context(|| format!("Failed to remove {}", path.display()))?;
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_snapshot_suffixes() {
        assert!(is_pending_snapshot(Path::new("src/arithmetics/.tests.rs.pending-snap")));
        assert!(is_pending_snapshot(Path::new("src/snapshots/config.snap.new")));
        assert!(!is_pending_snapshot(Path::new("src/snapshots/config.snap")));
        assert!(!is_pending_snapshot(Path::new("src/arithmetics/tests.rs")));
    }
}
