//! Komihash CLI
//!
//! File checksums and random numbers from the command line.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check_mode, hash_files, parse_seed, rand_mode};
use std::path::PathBuf;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "komihash")]
#[command(about = "Fast 64-bit non-cryptographic hash and PRNG", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files to hash (if no subcommand)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Hash seed, decimal or 0x-prefixed hex
    #[arg(short, long, value_parser = parse_seed, default_value = "0", global = true)]
    seed: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify checksums from file (like sha256sum -c)
    Check {
        #[arg(value_name = "FILE")]
        checksum_file: PathBuf,
    },
    /// Print Komirand output, one 64-bit value per line
    Rand {
        /// Number of values to print
        #[arg(short = 'n', long, default_value_t = 16)]
        count: usize,

        /// Keep the warm-up draws instead of skipping them
        #[arg(long)]
        raw: bool,
    },
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Check { checksum_file }) => check_mode(checksum_file, cli.seed)?,
        Some(Commands::Rand { count, raw }) => rand_mode(cli.seed, *count, *raw)?,
        None => {
            if cli.files.is_empty() {
                eprintln!("Error: No files specified");
                eprintln!("Usage: komihash [FILE]... or komihash --help");
                std::process::exit(1);
            }

            hash_files(&cli.files, cli.seed)?;
        }
    }

    Ok(())
}
