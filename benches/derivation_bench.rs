//! Benchmark for derived and adapted instances.
//!
//! Compares pipeline stages against the hand-written loops they replace,
//! to measure the overhead (if any) of strategy resolution.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use retrofit::prelude::*;
use rustc_hash::FxHashSet;
use std::collections::{BTreeSet, LinkedList, VecDeque};
use std::hint::black_box;

const SIZES: [usize; 3] = [16, 1_024, 65_536];

fn numbers(size: usize) -> Vec<u64> {
    (0..size as u64).collect()
}

// =============================================================================
// map
// =============================================================================

fn benchmark_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        // Vec: adapted, reuses the allocation
        group.bench_with_input(BenchmarkId::new("vec_adapted", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || numbers(size),
                |values| black_box(values | map(|value: u64| value * 3)),
                criterion::BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("vec_hand_loop", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || numbers(size),
                |values| black_box(values.into_iter().map(|value| value * 3).collect::<Vec<_>>()),
                criterion::BatchSize::SmallInput,
            );
        });

        // VecDeque: derived through append_one
        group.bench_with_input(BenchmarkId::new("deque_derived", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || numbers(size).into_iter().collect::<VecDeque<_>>(),
                |values| black_box(values | map(|value: u64| value * 3)),
                criterion::BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("deque_hand_loop", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || numbers(size).into_iter().collect::<VecDeque<_>>(),
                |values| black_box(values.into_iter().map(|value| value * 3).collect::<VecDeque<_>>()),
                criterion::BatchSize::SmallInput,
            );
        });

        // LinkedList: borrowed entry point
        let list: LinkedList<u64> = numbers(size).into_iter().collect();
        group.bench_with_input(BenchmarkId::new("list_borrowed_derived", size), &list, |bencher, list| {
            bencher.iter(|| black_box(list | map(|value: &u64| value * 3)));
        });

        group.bench_with_input(BenchmarkId::new("list_borrowed_hand_loop", size), &list, |bencher, list| {
            bencher.iter(|| black_box(list.iter().map(|value| value * 3).collect::<LinkedList<_>>()));
        });
    }

    group.finish();
}

// =============================================================================
// filter
// =============================================================================

fn benchmark_filter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("filter");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("vec_in_place", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || numbers(size),
                |values| black_box(values | filter(|value: &u64| value % 3 == 0)),
                criterion::BatchSize::SmallInput,
            );
        });

        let values = numbers(size);
        group.bench_with_input(BenchmarkId::new("vec_rebuild", size), &values, |bencher, values| {
            bencher.iter(|| black_box(values | filter(|value: &u64| value % 3 == 0)));
        });

        group.bench_with_input(BenchmarkId::new("vec_hand_loop", size), &values, |bencher, values| {
            bencher.iter(|| {
                black_box(values.iter().filter(|value| *value % 3 == 0).copied().collect::<Vec<_>>())
            });
        });

        let set: BTreeSet<u64> = values.iter().copied().collect();
        group.bench_with_input(BenchmarkId::new("btree_set_in_place", size), &set, |bencher, set| {
            bencher.iter_batched(
                || set.clone(),
                |set| black_box(set | filter(|value: &u64| value % 3 == 0)),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// =============================================================================
// flat_map and as_
// =============================================================================

fn benchmark_flat_map_and_convert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("flat_map_and_convert");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        let values = numbers(size);

        group.bench_with_input(BenchmarkId::new("vec_flat_map", size), &values, |bencher, values| {
            bencher.iter(|| black_box(values | flat_map(|value: &u64| vec![*value, value + 1])));
        });

        group.bench_with_input(BenchmarkId::new("vec_flat_map_hand_loop", size), &values, |bencher, values| {
            bencher.iter(|| {
                black_box(values.iter().flat_map(|value| [*value, value + 1]).collect::<Vec<_>>())
            });
        });

        group.bench_with_input(BenchmarkId::new("as_fx_hash_set", size), &values, |bencher, values| {
            bencher.iter(|| black_box(values | as_::<FxHashSet<_>>()));
        });

        group.bench_with_input(BenchmarkId::new("collect_fx_hash_set", size), &values, |bencher, values| {
            bencher.iter(|| black_box(values.iter().copied().collect::<FxHashSet<_>>()));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_map, benchmark_filter, benchmark_flat_map_and_convert);
criterion_main!(benches);
