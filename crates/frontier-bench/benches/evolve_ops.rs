//! Criterion benchmarks for evolution steps.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use frontier_bench::{balloon_evolver, disk_profile, sphere_profile};
use frontier_core::ScalarField;
use frontier_engine::{EvolverConfig, FrontierEvolver};
use frontier_policies::{MeanCurvatureSpeed, PredicatePolicy};

fn bench_balloon_step_256(c: &mut Criterion) {
    c.bench_function("balloon_step_256x256", |b| {
        b.iter_batched(
            || balloon_evolver(disk_profile(256), PredicatePolicy::AlwaysValid),
            |mut e| black_box(e.update()),
            BatchSize::LargeInput,
        );
    });
}

fn bench_balloon_step_simple_256(c: &mut Criterion) {
    c.bench_function("balloon_step_simple_256x256", |b| {
        b.iter_batched(
            || balloon_evolver(disk_profile(256), PredicatePolicy::SimplePoint),
            |mut e| black_box(e.update()),
            BatchSize::LargeInput,
        );
    });
}

fn bench_mcm_step_128(c: &mut Criterion) {
    let (topology, labels) = disk_profile(128);
    let weight = Arc::new(ScalarField::filled(labels.len(), 1.0));
    let speed = MeanCurvatureSpeed::builder()
        .curvature_weight(weight)
        .balloon(0.2)
        .build()
        .unwrap();
    let mut e = FrontierEvolver::seeded(
        topology,
        labels,
        speed,
        PredicatePolicy::SimplePoint,
        EvolverConfig::default(),
    )
    .unwrap();
    e.update();

    c.bench_function("mcm_step_128x128", |b| {
        b.iter(|| black_box(e.update()));
    });
}

fn bench_balloon_step_64_cubed(c: &mut Criterion) {
    c.bench_function("balloon_step_64x64x64", |b| {
        b.iter_batched(
            || balloon_evolver(sphere_profile(64), PredicatePolicy::SimplePoint),
            |mut e| black_box(e.update()),
            BatchSize::LargeInput,
        );
    });
}

fn bench_ten_steps_128(c: &mut Criterion) {
    c.bench_function("ten_balloon_steps_128x128", |b| {
        b.iter(|| {
            let mut e = balloon_evolver(disk_profile(128), PredicatePolicy::SimplePoint);
            for _ in 0..10 {
                black_box(e.update());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_balloon_step_256,
    bench_balloon_step_simple_256,
    bench_mcm_step_128,
    bench_balloon_step_64_cubed,
    bench_ten_steps_128
);
criterion_main!(benches);
