//! Tail padding.
//!
//! Each function packs the final `len < 8` message bytes into one little-endian
//! word and sets bit `8 * len`, directly above the last valid byte. The
//! sentinel keeps `"A"` and `"A\0"` apart after mixing.
//!
//! The variants differ in how far before the tail they may read:
//! - [`pad_short`]: never reads outside `msg[idx..idx + len]`.
//! - [`pad_long3`]: may read up to 3 bytes before `idx + len`.
//! - [`pad_long4`]: may read up to 8 bytes before `idx + len`, or takes the
//!   same window from a saved cache.

use super::constants::TAIL_SIZE;
use super::utils::{read_u32, read_u64};

/// Pad `1..=7` bytes starting at `idx`, reading nothing outside them.
#[inline]
pub fn pad_short(msg: &[u8], idx: usize, len: usize) -> u64 {
    debug_assert!(len > 0 && len < 8, "pad_short needs 1..=7 bytes, got {len}");
    let ml8 = len * 8;

    if len < 4 {
        let mut m = u64::from(msg[idx]);
        if len > 1 {
            m |= u64::from(msg[idx + 1]) << 8;
            if len > 2 {
                m |= u64::from(msg[idx + 2]) << 16;
            }
        }
        return 1u64 << ml8 | m;
    }

    let mh = u64::from(read_u32(msg, idx + len - 4));
    let ml = u64::from(read_u32(msg, idx));
    1u64 << ml8 | ml | (mh >> (64 - ml8)) << 32
}

/// Pad `0..=7` bytes starting at `idx`; `idx + len >= 3` must hold.
#[inline]
pub fn pad_long3(msg: &[u8], idx: usize, len: usize) -> u64 {
    debug_assert!(len < 8);
    let ml8 = len * 8;

    if len < 4 {
        let at = idx + len - 3;
        let m = u64::from(msg[at]) | u64::from(msg[at + 1]) << 8 | u64::from(msg[at + 2]) << 16;
        return 1u64 << ml8 | m >> (24 - ml8);
    }

    let mh = u64::from(read_u32(msg, idx + len - 4));
    let ml = u64::from(read_u32(msg, idx));
    1u64 << ml8 | ml | (mh >> (64 - ml8)) << 32
}

/// Pad `0..=7` bytes starting at `idx`.
///
/// Without `cache`, reads the word ending at `idx + len`, so `idx + len >= 8`
/// must hold. With `cache`, the cache must hold the 8 message bytes ending at
/// `idx + len` and `msg` is not read.
#[inline]
pub fn pad_long4(msg: &[u8], idx: usize, len: usize, cache: Option<&[u8; TAIL_SIZE]>) -> u64 {
    debug_assert!(len < 8);
    let ml8 = len * 8;

    if len < 5 {
        let m = match cache {
            Some(window) => read_u32(window, TAIL_SIZE - 4),
            None => read_u32(msg, idx + len - 4),
        };
        return 1u64 << ml8 | u64::from(m) >> (32 - ml8);
    }

    let m = match cache {
        Some(window) => read_u64(window, 0),
        None => read_u64(msg, idx + len - 8),
    };
    1u64 << ml8 | m >> (64 - ml8)
}
