//! Criterion benchmarks for snapshot queries.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use swerve_bench::{reference_scene, stress_scene};
use swerve_core::ActorId;
use swerve_scene::{closest_forward, locate};
use swerve_test_utils::highway_scene;

fn bench_locate(c: &mut Criterion) {
    let snap = stress_scene(42);
    c.bench_function("locate_last_of_1000", |b| {
        b.iter(|| black_box(locate(&snap, black_box(ActorId(1000)))));
    });
    c.bench_function("locate_missing_of_1000", |b| {
        b.iter(|| black_box(locate(&snap, black_box(ActorId(5000)))));
    });
}

fn bench_closest_forward(c: &mut Criterion) {
    let snap = reference_scene(42);
    c.bench_function("closest_forward_100", |b| {
        b.iter(|| black_box(closest_forward(&snap, black_box(ActorId(30)), 0.3)));
    });
    let random = highway_scene(7, 6, 40);
    c.bench_function("closest_forward_random_240", |b| {
        b.iter(|| black_box(closest_forward(&random, black_box(ActorId(1)), 0.3)));
    });
}

criterion_group!(benches, bench_locate, bench_closest_forward);
criterion_main!(benches);
