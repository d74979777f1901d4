//! Komihash Basic Example
//!
//! Minimal usage: `let hash = komihash::hash(&data);`

#![allow(clippy::pedantic, clippy::nursery)]

fn main() {
    // Zero boilerplate:
    let data = b"Hello, World!";
    let hash = komihash::hash(data);

    println!("Data: {:?}", String::from_utf8_lossy(data));
    println!("Hash: {hash:016x}");

    // Same bytes, fed in pieces
    let mut hasher = komihash::Hasher::new();
    hasher.update(b"Hello, ");
    hasher.update(b"World!");
    println!("Streamed: {:016x}", hasher.finalize());

    // A few random numbers
    let mut rng = komihash::Komirand::warmed(hash);
    println!("Random: {:016x} {:016x}", rng.next_u64(), rng.next_u64());
}
