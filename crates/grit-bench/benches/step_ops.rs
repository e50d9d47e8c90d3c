//! Criterion benchmarks for full-tick stepping.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grit_bench::{reference_scene, stress_scene};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Benchmark: one full tick over the 10K-cell reference scene.
fn bench_step_reference_10k(c: &mut Criterion) {
    let mut engine = reference_scene();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    c.bench_function("step_reference_10k", |b| {
        b.iter(|| {
            let metrics = engine.step(&mut rng);
            black_box(metrics);
        });
    });
}

/// Benchmark: one full tick over the ~100K-cell stress scene.
fn bench_step_stress_100k(c: &mut Criterion) {
    let mut engine = stress_scene();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    c.bench_function("step_stress_100k", |b| {
        b.iter(|| {
            let metrics = engine.step(&mut rng);
            black_box(metrics);
        });
    });
}

criterion_group!(benches, bench_step_reference_10k, bench_step_stress_100k);
criterion_main!(benches);
