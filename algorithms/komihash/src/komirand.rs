//! Komirand PRNG
//!
//! Two-word generator built on the same 128-bit multiply as the hash.
//! Period is 2^64; the first [`WARMUP_ROUNDS`] outputs are weaker and may be
//! skipped with [`Komirand::warmed`].

use crate::kernels::constants::RAND_INCREMENT;
pub use crate::kernels::constants::WARMUP_ROUNDS;
use crate::kernels::utils::mul128;

/// Komirand generator state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Komirand {
    seed1: u64,
    seed2: u64,
}

impl Komirand {
    /// Create a generator with both lanes set to `seed`.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self::with_seeds(seed, seed)
    }

    /// Create a generator from two independent lanes.
    ///
    /// Equal values give the best initial statistics.
    #[must_use]
    pub const fn with_seeds(seed1: u64, seed2: u64) -> Self {
        Self { seed1, seed2 }
    }

    /// Create a generator and discard the warm-up draws.
    #[must_use]
    pub const fn warmed(seed: u64) -> Self {
        let mut rng = Self::new(seed);
        let mut i = 0;
        while i < WARMUP_ROUNDS {
            rng.next_u64();
            i += 1;
        }
        rng
    }

    /// Produce the next 64-bit output.
    #[inline]
    pub const fn next_u64(&mut self) -> u64 {
        let (lo, hi) = mul128(self.seed1, self.seed2);
        self.seed2 = self.seed2.wrapping_add(hi.wrapping_add(RAND_INCREMENT));
        self.seed1 = lo ^ self.seed2;
        self.seed1
    }

    /// Fill `dest` with output, 8 little-endian bytes per draw.
    ///
    /// Bytes left over from the final draw are discarded.
    pub fn fill(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl Iterator for Komirand {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        Some(self.next_u64())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
