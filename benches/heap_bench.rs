//! Priority queue and heap algorithm benchmarks
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_bench
//! ```
//!
//! Groups:
//!
//! - `insert_extract`: n inserts followed by n extracts, Vec vs inline storage
//! - `build`: bottom-up heapify against n repeated inserts
//! - `heap_sort`: in-place heap sort against `slice::sort_unstable`
//! - `top_k`: bounded selection over a stream
//! - `kway_merge`: merging k sorted runs

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_priority_heaps::heap_sort::heap_sort;
use rust_priority_heaps::kway_merge::merge_sorted;
use rust_priority_heaps::ordering::{MaxOrder, MinOrder};
use rust_priority_heaps::queue::InlinePriorityQueue;
use rust_priority_heaps::top_k::top_k_largest;
use rust_priority_heaps::PriorityQueue;

// ============================================================================
// Input generation
// ============================================================================

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state >> 16
    }

    fn values(seed: u64, n: usize) -> Vec<u64> {
        let mut rng = Lcg::new(seed);
        (0..n).map(|_| rng.next()).collect()
    }
}

const SIZES: [(&str, usize); 3] = [("1k", 1_000), ("10k", 10_000), ("100k", 100_000)];

// ============================================================================
// Benchmarks
// ============================================================================

fn benchmark_insert_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_extract");

    for (name, n) in SIZES {
        let values = Lcg::values(12345, n);

        group.bench_with_input(BenchmarkId::new("vec", name), &values, |b, vs| {
            b.iter(|| {
                let mut heap = PriorityQueue::min();
                for &v in vs {
                    heap.insert(v);
                }
                while let Ok(v) = heap.extract() {
                    black_box(v);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("inline_64", name), &values, |b, vs| {
            b.iter(|| {
                let mut heap = InlinePriorityQueue::<[u64; 64]>::with_storage(MinOrder);
                for &v in vs {
                    heap.insert(v);
                }
                while let Ok(v) = heap.extract() {
                    black_box(v);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("std_binary_heap", name), &values, |b, vs| {
            b.iter(|| {
                let mut heap = std::collections::BinaryHeap::new();
                for &v in vs {
                    heap.push(std::cmp::Reverse(v));
                }
                while let Some(v) = heap.pop() {
                    black_box(v);
                }
            });
        });
    }

    group.finish();
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for (name, n) in SIZES {
        let values = Lcg::values(54321, n);

        group.bench_with_input(BenchmarkId::new("heapify", name), &values, |b, vs| {
            b.iter(|| black_box(PriorityQueue::build_from(vs.clone(), MaxOrder)));
        });

        group.bench_with_input(BenchmarkId::new("repeated_insert", name), &values, |b, vs| {
            b.iter(|| {
                let mut heap = PriorityQueue::with_capacity(vs.len(), MaxOrder);
                for &v in vs {
                    heap.insert(v);
                }
                black_box(heap)
            });
        });
    }

    group.finish();
}

fn benchmark_heap_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_sort");

    for (name, n) in SIZES {
        let values = Lcg::values(777, n);

        group.bench_with_input(BenchmarkId::new("heap_sort", name), &values, |b, vs| {
            b.iter(|| {
                let mut data = vs.clone();
                heap_sort(&mut data);
                black_box(data)
            });
        });

        group.bench_with_input(BenchmarkId::new("sort_unstable", name), &values, |b, vs| {
            b.iter(|| {
                let mut data = vs.clone();
                data.sort_unstable();
                black_box(data)
            });
        });
    }

    group.finish();
}

fn benchmark_top_k(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_k");
    let values = Lcg::values(99, 100_000);

    for k in [10usize, 100, 1_000] {
        group.bench_with_input(BenchmarkId::new("top_k_largest", k), &k, |b, &k| {
            b.iter(|| black_box(top_k_largest(values.iter().copied(), k)));
        });
    }

    group.finish();
}

fn benchmark_kway_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("kway_merge");

    for k in [4usize, 64, 1_024] {
        let runs: Vec<Vec<u64>> = (0..k)
            .map(|seed| {
                let mut run = Lcg::values(seed as u64, 100_000 / k);
                run.sort_unstable();
                run
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("merge_sorted", k), &runs, |b, rs| {
            b.iter(|| black_box(merge_sorted(rs.iter().map(|run| run.iter().copied()))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert_extract,
    benchmark_build,
    benchmark_heap_sort,
    benchmark_top_k,
    benchmark_kway_merge,
);

criterion_main!(benches);
