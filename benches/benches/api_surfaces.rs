//! API Surface Comparison Benchmark
//!
//! Compares the one-shot function, the streaming hasher, the `std::hash`
//! adapter and the raw kernel on identical inputs. Quantifies the cost of
//! buffering and of the trait plumbing.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use komihash::{kernels, KomihashBuildHasher};
use std::hash::{BuildHasher, Hasher as _};
use std::hint::black_box;

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_surfaces(c: &mut Criterion) {
    let mut group = c.benchmark_group("Komihash Surfaces");

    // Scenarios:
    // - Small (7B): Padding-only path
    // - Medium (512B): Bulk loop, fits the stream buffer
    // - Large (256KB): Zero-copy streaming drain
    let sizes = [7, 512, 256 * 1024];

    for size in sizes {
        let input = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        // 1. One-shot (Production Path)
        group.bench_function(format!("One-shot - {size} bytes"), |b| {
            b.iter(|| komihash::hash(black_box(&input)));
        });

        // 2. Kernel - Bypasses the public wrapper
        group.bench_function(format!("Kernel - {size} bytes"), |b| {
            b.iter(|| kernels::oneshot(black_box(&input), 0));
        });

        // 3. Streaming - Single update, measures buffer overhead
        group.bench_function(format!("Streaming - {size} bytes"), |b| {
            b.iter(|| {
                let mut hasher = komihash::Hasher::new();
                hasher.update(black_box(&input));
                hasher.finalize()
            });
        });

        // 4. std::hash adapter
        let builder = KomihashBuildHasher::default();
        group.bench_function(format!("BuildHasher - {size} bytes"), |b| {
            b.iter(|| {
                let mut hasher = builder.build_hasher();
                hasher.write(black_box(&input));
                hasher.finish()
            });
        });
    }
    group.finish();
}

/// Integer keys through `hash_one`, the common `HashMap` case.
fn bench_map_keys(c: &mut Criterion) {
    let builder = KomihashBuildHasher::with_seed(0x5EED);
    c.bench_function("hash_one-u64", |b| {
        let mut key = 0u64;
        b.iter(|| {
            key = key.wrapping_add(1);
            builder.hash_one(black_box(key))
        });
    });
}

criterion_group!(benches, bench_surfaces, bench_map_keys);
criterion_main!(benches);
