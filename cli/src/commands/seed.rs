//! Seed argument parsing.

use anyhow::{Context, Result};

/// Parse a seed given as decimal or `0x`-prefixed hex.
pub fn parse_seed(arg: &str) -> Result<u64> {
    let arg = arg.trim();
    let (digits, radix) = match arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (arg, 10),
    };
    let digits = digits.replace('_', "");

    u64::from_str_radix(&digits, radix).with_context(|| format!("Invalid seed: {arg}"))
}
