//! Shared types used across the Komihash library.

use crate::streaming::KomihashHasher;
use core::hash::BuildHasher;

// =============================================================================
// STREAM STATE
// =============================================================================

/// Lifecycle of a streaming hasher.
///
/// Finalization consumes the hasher, so there is no finalized variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    /// No bytes written.
    Empty,
    /// Bytes buffered, bulk loop not started.
    Buffering,
    /// Bulk loop started, all eight lanes live.
    Hashing,
}

// =============================================================================
// HASH MAP INTEGRATION
// =============================================================================

/// Seeded [`BuildHasher`] producing [`KomihashHasher`] instances.
///
/// The default seed is 0, which makes iteration order reproducible across
/// runs. Pick a random seed when keys may be chosen by an adversary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KomihashBuildHasher {
    seed: u64,
}

impl KomihashBuildHasher {
    /// Builder with a fixed seed.
    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// The seed handed to every hasher.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl BuildHasher for KomihashBuildHasher {
    type Hasher = KomihashHasher;

    fn build_hasher(&self) -> Self::Hasher {
        KomihashHasher::with_seed(self.seed)
    }
}

/// `HashMap` keyed by komihash.
#[cfg(feature = "std")]
pub type KomihashMap<K, V> = std::collections::HashMap<K, V, KomihashBuildHasher>;

/// `HashSet` keyed by komihash.
#[cfg(feature = "std")]
pub type KomihashSet<K> = std::collections::HashSet<K, KomihashBuildHasher>;
