//! Komihash Kernels
//!
//! Portable implementation of the hash and PRNG primitives. Every public
//! entry point in the crate bottoms out here.

pub mod constants;
pub mod mix;
pub mod padding;
pub mod utils;

pub use mix::{epilogue, oneshot, Lanes, SeedPair};
