//! Criterion benchmarks for the indexed heap
//!
//! Compares the indexed heap against `std::collections::BinaryHeap` on the
//! operations both support, and measures the index-only operations
//! (`contains`, `remove`) on their own.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_bench
//!
//! # Only the removal group
//! cargo bench --bench heap_bench -- 'remove/'
//! ```

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use indexed_heap::IndexedMinHeap;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const SIZES: [usize; 3] = [1 << 8, 1 << 12, 1 << 16];

fn random_values(n: usize, seed: u64) -> Vec<u32> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0..n as u32 * 4)).collect()
}

fn benchmark_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");

    for n in SIZES {
        let values = random_values(n, 12345);

        group.bench_with_input(BenchmarkId::new("indexed", n), &values, |b, values| {
            b.iter(|| {
                let mut heap = IndexedMinHeap::with_capacity(values.len());
                for &v in values {
                    heap.push(v);
                }
                while let Some(v) = heap.pop() {
                    black_box(v);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("std_binary_heap", n), &values, |b, values| {
            b.iter(|| {
                let mut heap = BinaryHeap::with_capacity(values.len());
                for &v in values {
                    heap.push(Reverse(v));
                }
                while let Some(v) = heap.pop() {
                    black_box(v);
                }
            });
        });
    }

    group.finish();
}

fn benchmark_heapify(c: &mut Criterion) {
    let mut group = c.benchmark_group("heapify");

    for n in SIZES {
        let values = random_values(n, 777);

        group.bench_with_input(BenchmarkId::new("from_vec", n), &values, |b, values| {
            b.iter(|| black_box(IndexedMinHeap::from_vec(values.clone())));
        });

        group.bench_with_input(BenchmarkId::new("from_collection", n), &values, |b, values| {
            b.iter(|| black_box(IndexedMinHeap::from_collection(values.iter().copied())));
        });
    }

    group.finish();
}

fn benchmark_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");
    group.sample_size(20);

    for n in SIZES {
        let values = random_values(n, 4242);
        let heap = IndexedMinHeap::from_vec(values.clone());

        group.bench_with_input(BenchmarkId::new("remove_all", n), &values, |b, values| {
            b.iter(|| {
                let mut heap = heap.clone();
                for v in values {
                    black_box(heap.remove(v));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("contains", n), &values, |b, values| {
            b.iter(|| values.iter().filter(|v| heap.contains(*v)).count());
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_push_pop, benchmark_heapify, benchmark_remove);
criterion_main!(benches);
