//! Check Command
//!
//! Verify checksums from file (like sha256sum -c).

use super::hash::digest_file;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

// =============================================================================
// CHECK
// =============================================================================

/// A single `hash  filename` entry.
#[derive(Debug, PartialEq, Eq)]
struct Entry<'a> {
    expected: u64,
    path: &'a str,
}

/// Parse one checksum line. Returns `None` for lines that are not entries.
fn parse_line(line: &str) -> Option<Entry<'_>> {
    // Format: "hash  filename" (two spaces)
    let (hash, path) = line.split_once("  ")?;
    let hash = hash.trim();
    if hash.len() != 16 {
        return None;
    }
    let expected = u64::from_str_radix(hash, 16).ok()?;
    Some(Entry {
        expected,
        path: path.trim(),
    })
}

/// Verify checksums from a checksum file.
pub fn check_mode(checksum_file: &PathBuf, seed: u64) -> Result<()> {
    let file = File::open(checksum_file)
        .with_context(|| format!("Failed to open: {}", checksum_file.display()))?;

    let reader = BufReader::new(file);
    let mut total = 0;
    let mut failed = 0;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some(entry) = parse_line(line) else {
            eprintln!("Warning: Invalid format: {line}");
            continue;
        };
        total += 1;

        match digest_file(Path::new(entry.path), seed) {
            Ok(actual) if actual == entry.expected => println!("{}: OK", entry.path),
            Ok(_) => {
                println!("{}: FAILED", entry.path);
                failed += 1;
            }
            Err(e) => {
                println!("{}: FAILED ({e:#})", entry.path);
                failed += 1;
            }
        }
    }

    println!();
    if failed == 0 {
        println!("All {total} checksums verified");
    } else {
        eprintln!("WARNING: {failed} of {total} checksums did NOT match");
        std::process::exit(1);
    }

    Ok(())
}
