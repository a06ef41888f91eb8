//! # Pool Performance Benchmark
//!
//! REQUIREMENTS:
//! - O(1) alloc and free on both pools
//! - 0 allocations during churn
//!
//! Run with: `cargo bench --package lumen_core`

// Benchmarks don't need docs
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lumen_core::{FreeListPool, SortedPool};

/// Benchmark: fill and drain a free-list pool.
fn bench_free_list_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("free_list_churn");

    for capacity in [100, 1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(capacity),
            &capacity,
            |b, &capacity| {
                let mut pool: FreeListPool<[f32; 12]> = FreeListPool::new(capacity);
                b.iter(|| {
                    while let Some(index) = pool.insert([0.0; 12]) {
                        black_box(index);
                    }
                    for index in (0..capacity).rev() {
                        black_box(pool.free(index));
                    }
                });
            },
        );
    }

    group.finish();
}

/// Benchmark: fill a sorted pool, then free from the front (worst-case moves).
fn bench_sorted_pool_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorted_pool_churn");

    for capacity in [100, 1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(capacity),
            &capacity,
            |b, &capacity| {
                let mut pool: SortedPool<usize> = SortedPool::new(capacity);
                b.iter(|| {
                    while let Some(index) = pool.push(0) {
                        black_box(index);
                    }
                    while !pool.is_empty() {
                        black_box(pool.free(0));
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_free_list_churn, bench_sorted_pool_churn);
criterion_main!(benches);
