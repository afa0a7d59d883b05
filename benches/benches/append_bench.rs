//! # Append Benchmarks
//!
//! Measures `append` against the std equivalent across source sizes.
//!
//! Run: `cargo bench --bench append_bench`

use std::collections::VecDeque;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ferrule_core::prelude::*;

fn bench_append_vec(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_vec");

    for size in [16usize, 256, 4096, 65536] {
        let source: Vec<u64> = (0..size as u64).collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("ferrule", size), &source, |b, source| {
            b.iter(|| {
                let mut destination = vec![0u64; 8];
                append(black_box(source), &mut destination).unwrap();
                black_box(destination)
            })
        });

        group.bench_with_input(BenchmarkId::new("extend_from_slice", size), &source, |b, source| {
            b.iter(|| {
                let mut destination = vec![0u64; 8];
                destination.extend_from_slice(black_box(source));
                black_box(destination)
            })
        });
    }

    group.finish();
}

fn bench_append_deque(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_deque");
    let source: Vec<String> = (0..1024).map(|i| format!("item-{i}")).collect();

    group.bench_function("strings_1024", |b| {
        b.iter(|| {
            let mut destination: VecDeque<String> = VecDeque::new();
            append(black_box(&source), &mut destination).unwrap();
            black_box(destination)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_append_vec, bench_append_deque);
criterion_main!(benches);
