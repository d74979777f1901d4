//! Komihash Comprehensive Criterion Benchmark
//!
//! Statistically rigorous performance measurements across all scenarios.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn random_input(size: usize) -> Vec<u8> {
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    input
}

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot path latency for small inputs (Hash Map keys, IDs).
/// Sizes sit on both sides of each dispatch threshold.
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");

    let sizes = [
        (0, "0B"),
        (7, "7B"),
        (8, "8B"),
        (15, "15B"),
        (16, "16B"),
        (31, "31B"),
        (32, "32B"),
        (63, "63B"),
        (64, "64B"),
        (256, "256B"),
        (KB, "1KB"),
    ];

    for (size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| komihash::hash(black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: FILES
// =============================================================================

/// Bulk-loop throughput from L1-resident inputs to RAM.
fn bench_files(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Files");
    group.sample_size(50); // Reduced samples for larger inputs

    let sizes = [
        (8 * KB, "8KB-L1"),
        (64 * KB, "64KB-L2"),
        (512 * KB, "512KB-L3"),
        (4 * MB, "4MB"),
        (16 * MB, "16MB-RAM"),
    ];

    for (size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| komihash::hash(black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: STREAMING
// =============================================================================

/// Throughput for incremental updates (Network streams, large file hashing).
fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Streaming");
    group.sample_size(50);

    let test_cases = [
        (MB, 7, "1MB-7B-chunks"),
        (MB, 64, "1MB-64B-chunks"),
        (MB, 768, "1MB-768B-chunks"),
        (MB, 4 * KB, "1MB-4KB-chunks"),
        (MB, 64 * KB, "1MB-64KB-chunks"),
        (16 * MB, MB, "16MB-1MB-chunks"),
    ];

    for (total_size, chunk_size, name) in test_cases {
        let input = random_input(total_size);
        group.throughput(Throughput::Bytes(total_size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &(input, chunk_size),
            |b, (data, chunk_sz)| {
                b.iter(|| {
                    let mut hasher = komihash::Hasher::new();
                    for chunk in data.chunks(*chunk_sz) {
                        hasher.update(black_box(chunk));
                    }
                    hasher.finalize()
                })
            },
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 4: PRNG
// =============================================================================

/// Komirand draw latency and byte-fill throughput.
fn bench_komirand(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Komirand");

    group.throughput(Throughput::Bytes(8));
    group.bench_function("next_u64", |b| {
        let mut rng = komihash::Komirand::warmed(rand::rng().random());
        b.iter(|| black_box(rng.next_u64()))
    });

    for (size, name) in [(64, "fill-64B"), (4 * KB, "fill-4KB"), (MB, "fill-1MB")] {
        let mut buffer = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(name, |b| {
            let mut rng = komihash::Komirand::warmed(0);
            b.iter(|| {
                rng.fill(black_box(&mut buffer[..]));
            })
        });
    }
    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(
    benches,
    bench_latency,
    bench_files,
    bench_streaming,
    bench_komirand,
);

criterion_main!(benches);
