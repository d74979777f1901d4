//! Byte and bit primitives shared by the hash and the PRNG.

// =============================================================================
// LITTLE-ENDIAN READS
// =============================================================================

/// Read 4 bytes at `offset` as a little-endian `u32`.
///
/// Panics if `offset + 4 > bytes.len()`.
#[allow(clippy::inline_always)]
#[inline(always)]
pub fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&bytes[offset..offset + 4]);
    u32::from_le_bytes(word)
}

/// Read 8 bytes at `offset` as a little-endian `u64`.
///
/// Panics if `offset + 8 > bytes.len()`.
#[allow(clippy::inline_always)]
#[inline(always)]
pub fn read_u64(bytes: &[u8], offset: usize) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&bytes[offset..offset + 8]);
    u64::from_le_bytes(word)
}

// =============================================================================
// ARITHMETIC
// =============================================================================

/// Full 64x64 -> 128-bit product, returned as `(low, high)`.
#[allow(
    clippy::inline_always,
    clippy::cast_possible_truncation,
    clippy::cast_lossless
)]
#[inline(always)]
pub const fn mul128(a: u64, b: u64) -> (u64, u64) {
    let full = (a as u128) * (b as u128);
    (full as u64, (full >> 64) as u64)
}

// =============================================================================
// BRANCH HINTS
// =============================================================================

#[cold]
#[inline(always)]
#[allow(clippy::inline_always)]
const fn cold_path() {}

/// Marks `cond` as the expected outcome. Returns `cond` unchanged.
#[allow(clippy::inline_always)]
#[inline(always)]
pub const fn likely(cond: bool) -> bool {
    if !cond {
        cold_path();
    }
    cond
}
