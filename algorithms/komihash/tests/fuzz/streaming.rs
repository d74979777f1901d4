use bolero::check;
use komihash::{hash, hash_seeded, Hasher};

#[test]
fn fuzz_streaming_consistency() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =============================================================================
        // BASELINE (ONE-SHOT)
        // =============================================================================
        let expected = hash(data);

        // =============================================================================
        // STREAMING VARIATIONS
        // =============================================================================

        // 1. Single Update
        let mut hasher = Hasher::new();
        hasher.update(data);
        assert_eq!(hasher.finalize(), expected, "Streaming single update mismatch");

        // 2. Byte-by-Byte (Small Inputs Only)
        if data.len() < 256 {
            let mut hasher = Hasher::new();
            for b in data {
                hasher.update(&[*b]);
            }
            assert_eq!(hasher.finalize(), expected, "Byte-by-byte streaming mismatch");
        }

        // 3. Arbitrary Split Points
        if data.len() > 1 {
            for split_idx in [1, data.len() / 2, data.len() - 1] {
                let mut hasher = Hasher::new();
                let (first, second) = data.split_at(split_idx);
                hasher.update(first);
                hasher.update(second);
                assert_eq!(hasher.finalize(), expected, "Split at {split_idx} mismatch");
            }
        }
    });
}

#[test]
fn fuzz_streaming_partitions() {
    check!()
        .with_type::<(u64, Vec<u16>, Vec<u8>)>()
        .for_each(|(seed, cuts, data)| {
            let expected = hash_seeded(data, *seed);

            // Chunk lengths are driven by the fuzzer, cycling until data runs out
            let mut hasher = Hasher::with_seed(*seed);
            let mut rest = data.as_slice();
            let mut sizes = cuts.iter().map(|&c| usize::from(c) % 1600 + 1).cycle();
            while !rest.is_empty() {
                let step = sizes.next().unwrap_or(rest.len()).min(rest.len());
                let (chunk, tail) = rest.split_at(step);
                hasher.update(chunk);
                rest = tail;
            }

            assert_eq!(hasher.finalize(), expected, "Partitioned stream mismatch");
        });
}
