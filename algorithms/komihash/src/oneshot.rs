//! Public API Layer
//!
use crate::kernels;

// =============================================================================
// GENERIC HASHING
// =============================================================================

/// Compute the komihash of `input` with seed 0.
///
/// # Example
/// ```rust
/// let hash = komihash::hash(b"A 16-byte string");
/// assert_eq!(hash, 0x467C_AA28_EA3D_A7A6);
/// ```
#[must_use]
#[inline]
pub fn hash(input: &[u8]) -> u64 {
    hash_seeded(input, 0)
}

/// Compute the komihash of `input` with a seed.
///
/// Any seed value is valid; different seeds give independent hash families.
///
/// # Example
/// ```rust
/// let a = komihash::hash_seeded(b"key", 1);
/// let b = komihash::hash_seeded(b"key", 2);
/// assert_ne!(a, b);
/// ```
#[must_use]
#[inline]
pub fn hash_seeded(input: &[u8], seed: u64) -> u64 {
    kernels::oneshot(input, seed)
}
