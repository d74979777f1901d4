//! Komihash mixing core.
//!
//! Every step is one `mul128` of two lane-derived operands: the low half
//! replaces `seed1`, the high half accumulates into `seed5`, and `seed1`
//! absorbs the new `seed5`. The bulk loop runs four such pairs side by side.

use super::constants::{
    BLOCK_SIZE, SEED1_INIT, SEED1_MASK, SEED2_XOR, SEED3_XOR, SEED4_XOR, SEED5_INIT, SEED5_MASK,
    SEED6_XOR, SEED7_XOR, SEED8_XOR, TAIL_SIZE,
};
use super::padding::{pad_long3, pad_long4, pad_short};
use super::utils::{likely, mul128, read_u64};

// =============================================================================
// SEED PAIR (seed1, seed5)
// =============================================================================

/// The two live lanes used outside the bulk loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedPair {
    /// Output lane.
    pub seed1: u64,
    /// Carry lane.
    pub seed5: u64,
}

impl SeedPair {
    /// Precondition a user seed and run one no-input round.
    #[inline]
    pub const fn new(seed: u64) -> Self {
        let mut pair = Self {
            seed1: SEED1_INIT ^ (seed & SEED1_MASK),
            seed5: SEED5_INIT ^ (seed & SEED5_MASK),
        };
        pair.round();
        pair
    }

    #[allow(clippy::inline_always)]
    #[inline(always)]
    const fn mix(&mut self, a: u64, b: u64) {
        let (lo, hi) = mul128(a, b);
        self.seed5 = self.seed5.wrapping_add(hi);
        self.seed1 = lo ^ self.seed5;
    }

    /// No-input round.
    #[inline]
    pub const fn round(&mut self) {
        self.mix(self.seed1, self.seed5);
    }

    /// Absorb the 16 bytes at `msg[idx..idx + 16]`.
    #[inline]
    pub fn hash16(&mut self, msg: &[u8], idx: usize) {
        self.mix(self.seed1 ^ read_u64(msg, idx), self.seed5 ^ read_u64(msg, idx + 8));
    }

    /// Mix the two pending half-round words and return the hash.
    #[inline]
    pub const fn finish(mut self, r1h: u64, r2h: u64) -> u64 {
        self.mix(r1h, r2h);
        self.round();
        self.seed1
    }

    /// Derive all eight lanes for the bulk loop.
    #[inline]
    pub const fn expand(self) -> Lanes {
        Lanes {
            seeds: [
                self.seed1,
                SEED2_XOR ^ self.seed1,
                SEED3_XOR ^ self.seed1,
                SEED4_XOR ^ self.seed1,
                self.seed5,
                SEED6_XOR ^ self.seed5,
                SEED7_XOR ^ self.seed5,
                SEED8_XOR ^ self.seed5,
            ],
        }
    }
}

// =============================================================================
// LANES (seed1..seed8)
// =============================================================================

/// Full 512-bit bulk loop state. `seeds[0]` is `seed1`, `seeds[7]` is `seed8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lanes {
    seeds: [u64; 8],
}

impl Lanes {
    /// Run the bulk loop over every full block of `msg`.
    ///
    /// Returns the number of bytes consumed (a multiple of `BLOCK_SIZE`).
    #[inline]
    pub fn absorb(&mut self, msg: &[u8]) -> usize {
        let s = &mut self.seeds;
        let blocks = msg.chunks_exact(BLOCK_SIZE);
        let consumed = msg.len() - blocks.remainder().len();

        for block in blocks {
            let mut carry = [0u64; 4];
            for (k, c) in carry.iter_mut().enumerate() {
                let (lo, hi) = mul128(
                    s[k] ^ read_u64(block, 8 * k),
                    s[k + 4] ^ read_u64(block, 32 + 8 * k),
                );
                s[k] = lo;
                *c = hi;
            }
            for (k, c) in carry.iter().enumerate() {
                s[k + 4] = s[k + 4].wrapping_add(*c);
            }
            // Cross-couple the four pairs.
            s[1] ^= s[4];
            s[2] ^= s[5];
            s[3] ^= s[6];
            s[0] ^= s[7];
        }

        consumed
    }

    /// XOR-fold the eight lanes back into `seed1`/`seed5`.
    #[inline]
    pub const fn fold(self) -> SeedPair {
        let s = self.seeds;
        SeedPair {
            seed1: s[0] ^ s[1] ^ s[2] ^ s[3],
            seed5: s[4] ^ s[5] ^ s[6] ^ s[7],
        }
    }
}

// =============================================================================
// EPILOGUE
// =============================================================================

/// Hash the final `msg[idx..]` (at most 63 bytes) and return the result.
///
/// `cache` replaces the look-back read of a tail shorter than 8 bytes; it must
/// hold the 8 message bytes ending at `msg.len()`.
#[inline]
pub fn epilogue(
    msg: &[u8],
    mut idx: usize,
    mut pair: SeedPair,
    cache: Option<&[u8; TAIL_SIZE]>,
) -> u64 {
    let mut len = msg.len() - idx;
    debug_assert!(len < BLOCK_SIZE);

    if likely(len > 31) {
        pair.hash16(msg, idx);
        pair.hash16(msg, idx + 16);
        idx += 32;
        len -= 32;
    }

    if len > 15 {
        pair.hash16(msg, idx);
        idx += 16;
        len -= 16;
    }

    let (r1h, r2h) = if len > 7 {
        (
            pair.seed1 ^ read_u64(msg, idx),
            pair.seed5 ^ pad_long4(msg, idx + 8, len - 8, None),
        )
    } else {
        (pair.seed1 ^ pad_long4(msg, idx, len, cache), pair.seed5)
    };

    pair.finish(r1h, r2h)
}

// =============================================================================
// ONE-SHOT
// =============================================================================

/// Hash a complete message.
pub fn oneshot(msg: &[u8], seed: u64) -> u64 {
    let pair = SeedPair::new(seed);
    let len = msg.len();

    if likely(len < 16) {
        let mut r1h = pair.seed1;
        let mut r2h = pair.seed5;

        if len > 7 {
            r2h ^= pad_long3(msg, 8, len - 8);
            r1h ^= read_u64(msg, 0);
        } else if likely(len != 0) {
            r1h ^= pad_short(msg, 0, len);
        }

        return pair.finish(r1h, r2h);
    }

    if likely(len < 32) {
        let mut pair = pair;
        pair.hash16(msg, 0);

        let (r1h, r2h) = if len > 23 {
            (
                pair.seed1 ^ read_u64(msg, 16),
                pair.seed5 ^ pad_long4(msg, 24, len - 24, None),
            )
        } else {
            (pair.seed1 ^ pad_long4(msg, 16, len - 16, None), pair.seed5)
        };

        return pair.finish(r1h, r2h);
    }

    if len < BLOCK_SIZE {
        return epilogue(msg, 0, pair, None);
    }

    let mut lanes = pair.expand();
    let idx = lanes.absorb(msg);
    epilogue(msg, idx, lanes.fold(), None)
}
