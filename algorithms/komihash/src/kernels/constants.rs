//! Komihash Kernel Constants
//!
//! The eight lane constants are consecutive 64-bit words of the fractional
//! part of π:
//!
//! ```text
//! π = 3.243F6A88 85A308D3 13198A2E 03707344 A4093822 299F31D0 ...
//! ```
//!
//! Word order: `seed1`, `seed2`, `seed3`, `seed4`, `seed5`, `seed6`, `seed7`,
//! `seed8`. `seed1` and `seed5` seed the two live lanes; the other six are
//! XORed onto them before the bulk loop.

use static_assertions::const_assert;

// =============================================================================
// SEED PRECONDITIONING
// =============================================================================

/// π word 0, base of `seed1`.
pub const SEED1_INIT: u64 = 0x243F_6A88_85A3_08D3;
/// π word 4, base of `seed5`.
pub const SEED5_INIT: u64 = 0x4528_21E6_38D0_1377;

/// User seed bits routed into `seed1` (even bits).
pub const SEED1_MASK: u64 = 0x5555_5555_5555_5555;
/// User seed bits routed into `seed5` (odd bits).
pub const SEED5_MASK: u64 = 0xAAAA_AAAA_AAAA_AAAA;

// =============================================================================
// LANE DERIVATION: π words 1-3 and 5-7
// =============================================================================

/// π word 1, XORed onto `seed1` to form `seed2`.
pub const SEED2_XOR: u64 = 0x1319_8A2E_0370_7344;
/// π word 2, XORed onto `seed1` to form `seed3`.
pub const SEED3_XOR: u64 = 0xA409_3822_299F_31D0;
/// π word 3, XORed onto `seed1` to form `seed4`.
pub const SEED4_XOR: u64 = 0x082E_FA98_EC4E_6C89;
/// π word 5, XORed onto `seed5` to form `seed6`.
pub const SEED6_XOR: u64 = 0xBE54_66CF_34E9_0C6C;
/// π word 6, XORed onto `seed5` to form `seed7`.
pub const SEED7_XOR: u64 = 0xC0AC_29B7_C97C_50DD;
/// π word 7, XORed onto `seed5` to form `seed8`.
pub const SEED8_XOR: u64 = 0x3F84_D5B5_B547_0917;

// =============================================================================
// STRUCTURAL CONSTANTS
// =============================================================================

/// Bulk loop block size (in bytes).
pub const BLOCK_SIZE: usize = 64;

/// Streaming accumulation buffer capacity (in bytes).
pub const BUF_SIZE: usize = 768;

/// Look-back window needed by the tail padding (in bytes).
pub const TAIL_SIZE: usize = 8;

/// Streaming keeps at least one block of margin after a direct drain.
pub const DIRECT_MIN: usize = 2 * BLOCK_SIZE;

const_assert!(BUF_SIZE >= DIRECT_MIN);
const_assert!(BUF_SIZE % BLOCK_SIZE == 0);
const_assert!(TAIL_SIZE <= BLOCK_SIZE);

// =============================================================================
// KOMIRAND
// =============================================================================

/// Additive constant of the Komirand `seed2` update.
pub const RAND_INCREMENT: u64 = 0xAAAA_AAAA_AAAA_AAAA;

/// Draws discarded by `Komirand::warmed`.
pub const WARMUP_ROUNDS: usize = 4;
