//! # `PractRand` Stream Generator
//!
//! Stream generator for `PractRand` testing.
//!
//! Writes an endless binary stream to stdout, either from the Komirand
//! generator or by hashing an incrementing 64-bit counter with komihash.
//! Usage: `komihash_stream rand | RNG_test stdin64`.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, ErrorKind, Write};

/// Output block size for the PRNG mode.
const RAND_BLOCK: usize = 64 * 1024;

#[derive(Parser)]
#[command(name = "komihash_stream")]
#[command(about = "Binary stream generator for PractRand", long_about = None)]
struct Args {
    /// `rand`, `cyclic` (16/32/64/128-byte inputs) or an input size in bytes
    #[arg(default_value = "64")]
    mode: String,

    /// Hash or PRNG seed, decimal or 0x-prefixed hex
    #[arg(short, long, value_parser = parse_seed, default_value = "0")]
    seed: u64,
}

/// Parse a seed given as decimal or `0x`-prefixed hex.
fn parse_seed(arg: &str) -> Result<u64> {
    let arg = arg.trim();
    let (digits, radix) = match arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (arg, 10),
    };

    u64::from_str_radix(&digits.replace('_', ""), radix)
        .with_context(|| format!("Invalid seed: {arg}"))
}

/// Stream source selected on the command line.
enum Mode {
    Rand,
    Cyclic,
    Fixed(usize),
}

impl Mode {
    fn parse(arg: &str) -> Result<Self> {
        match arg {
            "rand" => Ok(Self::Rand),
            "cyclic" => Ok(Self::Cyclic),
            s => Ok(Self::Fixed(s.parse()?)),
        }
    }

    /// Hash input size for the given counter value.
    const fn input_size(&self, counter: u64) -> usize {
        match self {
            // Cycle through 16, 32, 64, 128 bytes
            Self::Cyclic => 16 << (counter % 4),
            Self::Fixed(size) => *size,
            Self::Rand => 0,
        }
    }
}

/// Entry point for the `PractRand` stream generator.
fn main() -> Result<()> {
    let args = Args::parse();
    let mode = Mode::parse(&args.mode)?;

    let stdout = io::stdout();
    let mut handle = io::BufWriter::new(stdout.lock());

    let result = match mode {
        Mode::Rand => stream_rand(&mut handle, args.seed),
        _ => stream_hashes(&mut handle, &mode, args.seed),
    };

    // A closed pipe is the normal way for the consumer to stop us
    match result {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other.map_err(anyhow::Error::from),
    }
}

fn stream_rand(out: &mut impl Write, seed: u64) -> io::Result<()> {
    let mut rng = komihash::Komirand::warmed(seed);
    let mut block = vec![0u8; RAND_BLOCK];

    loop {
        rng.fill(&mut block);
        out.write_all(&block)?;
    }
}

fn stream_hashes(out: &mut impl Write, mode: &Mode, seed: u64) -> io::Result<()> {
    let mut counter: u64 = 0;
    let mut input = Vec::new();

    loop {
        let size = mode.input_size(counter);
        let counter_bytes = counter.to_le_bytes();

        // Fill input with the counter (repeatedly if needed)
        input.clear();
        input.extend((0..size).map(|i| counter_bytes[i % 8]));

        let hash = komihash::hash_seeded(&input, seed);
        out.write_all(&hash.to_le_bytes())?;

        counter = counter.wrapping_add(1);
    }
}
