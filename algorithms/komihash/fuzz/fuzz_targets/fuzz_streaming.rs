#![no_main]

use komihash::{hash_seeded, Hasher};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }
    // Seed from the first 8 bytes, chunk size from the ninth (1 to 255)
    let (head, body) = data.split_at(9);
    let mut seed_bytes = [0u8; 8];
    seed_bytes.copy_from_slice(&head[..8]);
    let seed = u64::from_le_bytes(seed_bytes);
    let chunk_size = (head[8] as usize % 255) + 1;

    // Calculate one-shot hash as reference
    let reference_hash = hash_seeded(body, seed);

    // Calculate streaming hash by splitting into arbitrary small chunks
    let mut hasher = Hasher::with_seed(seed);
    for chunk in body.chunks(chunk_size) {
        hasher.update(chunk);
    }
    let streaming_hash = hasher.finalize();

    // They must be identical
    assert_eq!(
        reference_hash, streaming_hash,
        "Streaming and One-Shot approaches differ!"
    );
});
