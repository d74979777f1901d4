//! CLI Commands
//!
//! All komihash CLI commands organized as separate modules.

mod check;
mod hash;
mod rand;
mod seed;

pub use check::check_mode;
pub use hash::hash_files;
pub use rand::rand_mode;
pub use seed::parse_seed;
