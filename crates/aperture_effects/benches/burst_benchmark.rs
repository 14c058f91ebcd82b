//! Benchmark for burst spawn and frame cost.
//!
//! Run with: cargo bench --package aperture_effects --bench burst_benchmark

use std::time::Duration;

use aperture_effects::{BurstConfig, MemorySurface, ParticleEmitter};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn benchmark_emit(c: &mut Criterion) {
    let mut surface = MemorySurface::new();
    let mut emitter = ParticleEmitter::new(BurstConfig::sparkle(), 1).unwrap();

    c.bench_function("emit_sparkle", |b| {
        b.iter(|| {
            let spawned = emitter.emit(black_box((160.0, 40.0)), Duration::ZERO, &mut surface);
            emitter.clear(&mut surface);
            spawned
        });
    });
}

fn benchmark_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_frame");

    for bursts in [1_usize, 8, 32] {
        group.bench_with_input(BenchmarkId::from_parameter(bursts), &bursts, |b, &bursts| {
            let mut surface = MemorySurface::new();
            let mut emitter = ParticleEmitter::new(BurstConfig::nav_desktop(), 9).unwrap();
            for i in 0..bursts {
                emitter.emit((i as f32 * 10.0, 0.0), Duration::ZERO, &mut surface);
            }

            // Mid-flight: nothing expires, every node is restyled
            b.iter(|| emitter.advance(black_box(Duration::from_millis(200)), &mut surface));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_emit, benchmark_frame);
criterion_main!(benches);
