//! # Logistic Benchmarks
//!
//! Run: `cargo bench --bench logistic_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ferrule_core::prelude::*;

fn bench_logistic_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("logistic_scalar");

    group.bench_function("f64_positive", |b| b.iter(|| logistic(black_box(3.25_f64))));
    group.bench_function("f64_negative", |b| b.iter(|| logistic(black_box(-3.25_f64))));
    group.bench_function("f32", |b| b.iter(|| logistic(black_box(0.75_f32))));
    group.bench_function("logit", |b| b.iter(|| logit(black_box(0.3_f64))));

    group.finish();
}

fn bench_logistic_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("logistic_batch");
    let inputs: Vec<f32> = (0..4096).map(|i| (i as f32 - 2048.0) / 64.0).collect();

    group.bench_function("in_place_4096", |b| {
        b.iter(|| {
            let mut values = inputs.clone();
            logistic_in_place(black_box(&mut values));
            black_box(values)
        })
    });

    let curve = LogisticCurve::new(10.0_f64, 0.5, 2.0).unwrap();
    group.bench_function("curve_sample_1024", |b| {
        b.iter(|| black_box(curve.sample(-20.0, 20.0, 1024)))
    });

    group.finish();
}

criterion_group!(benches, bench_logistic_scalar, bench_logistic_batch);
criterion_main!(benches);
