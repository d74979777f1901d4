#![cfg_attr(not(feature = "std"), no_std)]

//! # Komihash
//!
//! Fast, non-cryptographic 64-bit hash for hash tables and content
//! fingerprinting, with a bit-exact streaming variant and the Komirand PRNG.

//! # Usage
//! ```rust
//! // 1. One-shot hashing
//! let hash = komihash::hash(b"A 16-byte string");
//! assert_eq!(hash, 0x467C_AA28_EA3D_A7A6);
//!
//! // 2. Streaming (files, sockets): same result for any chunking
//! use komihash::Hasher;
//!
//! let mut hasher = Hasher::new();
//! hasher.update(b"A 16-");
//! hasher.update(b"byte string");
//! assert_eq!(hasher.finalize(), hash);
//!
//! // 3. Random numbers
//! let mut rng = komihash::Komirand::new(0);
//! assert_eq!(rng.next_u64(), 0xAAAA_AAAA_AAAA_AAAA);
//! ```

// =============================================================================
// MODULES
// =============================================================================

// Re-export internal kernels for benchmarking/testing, but hide from docs
#[doc(hidden)]
pub mod kernels; // Public for test/bench use only
mod komirand;
mod oneshot;
mod streaming;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use komirand::{Komirand, WARMUP_ROUNDS};
pub use oneshot::{hash, hash_seeded};
pub use streaming::{KomihashHasher, KomihashHasher as Hasher};
pub use types::{KomihashBuildHasher, StreamState};
#[cfg(feature = "std")]
pub use types::{KomihashMap, KomihashSet};
