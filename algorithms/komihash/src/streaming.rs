//! Streaming Hasher
//!
//! Incremental komihash over a fixed 768-byte buffer. Produces exactly the
//! one-shot result for any chunking of the same bytes, with no allocation.

use crate::kernels::constants::{BLOCK_SIZE, BUF_SIZE, DIRECT_MIN, TAIL_SIZE};
use crate::kernels::{self, epilogue, Lanes, SeedPair};
use crate::types::StreamState;

// =============================================================================
// STREAMING HASHER
// =============================================================================

/// Streaming komihash state.
///
/// Bytes accumulate in the buffer until it would overflow; the bulk loop then
/// drains whole blocks. Inputs that never fill the buffer are hashed by the
/// one-shot kernel at finalization.
#[derive(Clone, Debug)]
pub struct KomihashHasher {
    /// Pending bytes (only `buffer[..fill]` is meaningful)
    buffer: [u8; BUF_SIZE],
    /// Buffer fill count
    fill: usize,
    /// Bulk loop lanes, `None` until the first drain
    lanes: Option<Lanes>,
    /// Last bytes consumed by the bulk loop, preceding `buffer[0]`
    tail: [u8; TAIL_SIZE],
    /// User seed
    seed: u64,
}

impl KomihashHasher {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Create a new streaming hasher with seed 0.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_seed(0)
    }

    /// Create a new streaming hasher with a seed.
    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self {
            buffer: [0u8; BUF_SIZE],
            fill: 0,
            lanes: None,
            tail: [0u8; TAIL_SIZE],
            seed,
        }
    }

    // =========================================================================
    // STATE MODIFICATION
    // =========================================================================

    /// Add data to the hasher.
    ///
    /// Small updates are only copied. Once the buffer would overflow it is
    /// topped up and drained, then large inputs are hashed in place, keeping
    /// fewer than 128 bytes for the next call.
    pub fn update(&mut self, data: &[u8]) {
        let fill = self.fill;

        // Fast path: fits in the buffer
        if fill + data.len() <= BUF_SIZE {
            self.buffer[fill..fill + data.len()].copy_from_slice(data);
            self.fill += data.len();
            return;
        }

        let seed = self.seed;
        let lanes = self
            .lanes
            .get_or_insert_with(|| SeedPair::new(seed).expand());
        let mut rest = data;

        // Top up and drain the buffer
        if fill != 0 {
            let (head, remainder) = rest.split_at(BUF_SIZE - fill);
            self.buffer[fill..].copy_from_slice(head);
            lanes.absorb(&self.buffer);
            self.tail
                .copy_from_slice(&self.buffer[BUF_SIZE - TAIL_SIZE..]);
            self.fill = 0;
            rest = remainder;
        }

        // Zero-copy drain of the input
        if rest.len() >= DIRECT_MIN {
            let direct = (rest.len() - BLOCK_SIZE) / BLOCK_SIZE * BLOCK_SIZE;
            let (bulk, remainder) = rest.split_at(direct);
            lanes.absorb(bulk);
            self.tail.copy_from_slice(&bulk[direct - TAIL_SIZE..]);
            rest = remainder;
        }

        self.buffer[..rest.len()].copy_from_slice(rest);
        self.fill = rest.len();
    }

    /// Finalize and return the hash.
    #[must_use]
    pub fn finalize(self) -> u64 {
        self.digest()
    }

    /// Reset the hasher for reuse, keeping the seed.
    pub fn reset(&mut self) {
        self.fill = 0;
        self.lanes = None;
    }

    // =========================================================================
    // INSPECTION
    // =========================================================================

    /// The seed this hasher was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of bytes waiting in the buffer.
    #[must_use]
    pub const fn buffered_len(&self) -> usize {
        self.fill
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> StreamState {
        if self.lanes.is_some() {
            StreamState::Hashing
        } else if self.fill == 0 {
            StreamState::Empty
        } else {
            StreamState::Buffering
        }
    }

    // =========================================================================
    // INTERNAL
    // =========================================================================

    /// Hash of everything written so far, leaving `self` untouched.
    fn digest(&self) -> u64 {
        let pending = &self.buffer[..self.fill];

        let Some(mut lanes) = self.lanes else {
            return kernels::oneshot(pending, self.seed);
        };

        let idx = lanes.absorb(pending);
        let pair = lanes.fold();

        if self.fill < TAIL_SIZE {
            // The look-back window reaches into bytes already consumed.
            let mut window = [0u8; TAIL_SIZE];
            let split = TAIL_SIZE - self.fill;
            window[..split].copy_from_slice(&self.tail[self.fill..]);
            window[split..].copy_from_slice(pending);
            return epilogue(pending, 0, pair, Some(&window));
        }

        epilogue(pending, idx, pair, None)
    }
}

// =============================================================================
// TRAIT IMPL
// =============================================================================

impl Default for KomihashHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl core::hash::Hasher for KomihashHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.update(bytes);
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.digest()
    }
}
