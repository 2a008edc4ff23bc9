//! Criterion benchmarks for the core queue operations.
//!
//! Run with `cargo bench --bench queue_perf`. The remove-vs-insert group
//! measures how much costlier removing an arbitrary interior element is
//! than inserting one, since a removal first has to promote the element
//! to a tree root.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

use pri_queue::{ElemHandle, PriQueue};

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn random_values(n: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0..1_000_000)).collect()
}

fn filled_queue(values: &[i64]) -> (PriQueue<i64>, Vec<ElemHandle<i64>>) {
    let mut pq = PriQueue::new();
    let handles = values.iter().map(|&v| pq.insert(v)).collect();
    (pq, handles)
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for n in SIZES {
        let values = random_values(n, 1);
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                let mut pq = PriQueue::new();
                for &v in values {
                    pq.insert(black_box(v));
                }
                pq
            });
        });
    }
    group.finish();
}

fn bench_pop_min(c: &mut Criterion) {
    let mut group = c.benchmark_group("pop_min");
    for n in SIZES {
        let values = random_values(n, 2);
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter_batched(
                || filled_queue(values).0,
                |mut pq| {
                    while let Some(v) = pq.pop_min() {
                        black_box(v);
                    }
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("update");
    for n in SIZES {
        let values = random_values(n, 3);
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            let mut rng = StdRng::seed_from_u64(4);
            let new_values: Vec<i64> = (0..n).map(|_| rng.gen_range(0..1_000_000)).collect();
            b.iter_batched(
                || filled_queue(values),
                |(mut pq, handles)| {
                    for (h, &nv) in handles.iter().zip(&new_values) {
                        pq.update_with(h, |v| *v = black_box(nv)).unwrap();
                    }
                    pq
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_meld(c: &mut Criterion) {
    let mut group = c.benchmark_group("meld");
    for n in SIZES {
        let a_values = random_values(n, 5);
        let b_values = random_values(n, 6);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(a_values, b_values),
            |b, (a_values, b_values)| {
                b.iter_batched(
                    || (filled_queue(a_values).0, filled_queue(b_values).0),
                    |(mut qa, qb)| {
                        qa.meld(qb);
                        qa
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }
    group.finish();
}

/// Compares insertion against removal by handle at the same queue size.
/// Divide the two medians to get the removal cost ratio.
fn bench_remove_vs_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_vs_insert");
    const N: usize = 10_000;
    let values = random_values(N, 7);

    group.bench_function("insert_one", |b| {
        b.iter_batched(
            || filled_queue(&values).0,
            |mut pq| {
                pq.insert(black_box(500_000));
                pq
            },
            BatchSize::LargeInput,
        );
    });

    group.bench_function("remove_one", |b| {
        let mut rng = StdRng::seed_from_u64(8);
        b.iter_batched(
            || {
                let (pq, handles) = filled_queue(&values);
                let h = handles[rng.gen_range(0..handles.len())].clone();
                (pq, h)
            },
            |(mut pq, h)| {
                pq.remove(&h).unwrap();
                pq
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_pop_min,
    bench_update,
    bench_meld,
    bench_remove_vs_insert
);
criterion_main!(benches);
