//! Generator for Komihash test vectors
//!
//! Generates the canonical JSON test vectors used by `tests/test_vectors.json`.
//! Covers the reference strings and a byte ramp cut at every dispatch and
//! buffer boundary, each under three seeds.
#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used)]
use serde_json::json;

const SEEDS: [u64; 3] = [0, 0x0123_4567_89AB_CDEF, 0x100];

const STRINGS: [&str; 6] = [
    "This is a 32-byte testing string",
    "The cat is out of the bag",
    "A 16-byte string",
    "The new string",
    "7 chars",
    "",
];

const LENGTHS: [usize; 30] = [
    1, 3, 4, 5, 7, 8, 9, 15, 16, 17, 23, 24, 31, 32, 33, 47, 63, 64, 65, 127, 128, 129, 175,
    256, 380, 499, 767, 768, 769, 1024,
];

fn main() {
    let bulk: Vec<u8> = (0..1024usize).map(|i| (i & 255) as u8).collect();
    let mut vectors = Vec::new();

    for seed in SEEDS {
        // =====================================================================
        // 1. REFERENCE STRINGS
        // =====================================================================

        for s in STRINGS {
            vectors.push(json!({
                "name": format!("str{}-seed{seed:x}", s.len()),
                "seed": format!("{seed:016x}"),
                "input": s,
                "hash": format!("{:016x}", komihash::hash_seeded(s.as_bytes(), seed))
            }));
        }

        // =====================================================================
        // 2. BOUNDARY CONDITIONS
        // =====================================================================

        for n in LENGTHS {
            let input = &bulk[..n];
            vectors.push(json!({
                "name": format!("bulk{n}-seed{seed:x}"),
                "seed": format!("{seed:016x}"),
                "input_hex": hex::encode(input),
                "hash": format!("{:016x}", komihash::hash_seeded(input, seed))
            }));
        }
    }

    let output = json!({ "vectors": vectors });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
