//! Criterion micro-benchmarks for list growth, slicing, and range production.

use arx_bench::{filled_list, filled_raw_list, REFERENCE_LEN};
use arx_iter::int_range;
use arx_list::List;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Benchmark: Append 10K integers to a default list, growing from 8 slots.
fn bench_list_append_10k(c: &mut Criterion) {
    c.bench_function("list_append_10k", |b| {
        b.iter(|| {
            let list = filled_list(black_box(REFERENCE_LEN)).unwrap();
            black_box(list.len());
        });
    });
}

/// Benchmark: Append 10K 8-byte elements to a type-erased list.
fn bench_raw_list_append_10k(c: &mut Criterion) {
    c.bench_function("raw_list_append_10k", |b| {
        b.iter(|| {
            let list = filled_raw_list(black_box(REFERENCE_LEN)).unwrap();
            black_box(list.len());
        });
    });
}

/// Benchmark: Deep-copy the middle half of a 10K list.
fn bench_list_slice_half(c: &mut Criterion) {
    let list = filled_list(REFERENCE_LEN).unwrap();
    let (start, end) = (REFERENCE_LEN / 4, REFERENCE_LEN * 3 / 4);
    c.bench_function("list_slice_half", |b| {
        b.iter(|| {
            let half: List<i64> = list.slice(black_box(start), black_box(end)).unwrap();
            black_box(half.get(0));
        });
    });
}

/// Benchmark: Materialize a 10K-element stepped range.
fn bench_int_range_10k(c: &mut Criterion) {
    c.bench_function("int_range_10k", |b| {
        b.iter(|| {
            let range = int_range(black_box(0), black_box(30_000), black_box(3)).unwrap();
            black_box(range.len());
        });
    });
}

criterion_group!(
    benches,
    bench_list_append_10k,
    bench_raw_list_append_10k,
    bench_list_slice_half,
    bench_int_range_10k
);
criterion_main!(benches);
