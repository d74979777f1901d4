//! Rand Command
//!
//! Komirand output as hex, one value per line.

use anyhow::Result;
use komihash::Komirand;
use std::io::{BufWriter, Write};

/// Print `count` Komirand draws for `seed`.
pub fn rand_mode(seed: u64, count: usize, raw: bool) -> Result<()> {
    let rng = if raw {
        Komirand::new(seed)
    } else {
        Komirand::warmed(seed)
    };

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for value in rng.take(count) {
        writeln!(out, "{value:016x}")?;
    }
    out.flush()?;

    Ok(())
}
