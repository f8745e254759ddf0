//! Benchmarks for the three generation strategies.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_wave::wave::{GeneratorConfig, WaveData, WaveKind};

use crate::FREQUENCY_COUNTS;

pub fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("wave/generate");

    for &count in FREQUENCY_COUNTS {
        // Random - one RNG draw per sample
        let mut wave = WaveData::new(GeneratorConfig::new(WaveKind::Random, 100.0, 0.1, count), ());
        group.bench_with_input(BenchmarkId::new("random", count), &count, |b, _| {
            b.iter(|| {
                black_box(wave.generate(false).samples());
            })
        });

        // Sine - accumulated phase, one sin() per sample
        let mut wave = WaveData::new(GeneratorConfig::new(WaveKind::Sine, 100.0, 0.1, count), ());
        group.bench_with_input(BenchmarkId::new("sine", count), &count, |b, _| {
            b.iter(|| {
                black_box(wave.generate(false).samples());
            })
        });

        // Noise - 8 gradient lookups and 7 lerps per sample
        let mut wave = WaveData::new(GeneratorConfig::new(WaveKind::Noise, 100.0, 0.1, count), ());
        group.bench_with_input(BenchmarkId::new("noise", count), &count, |b, _| {
            b.iter(|| {
                black_box(wave.generate(false).samples());
            })
        });
    }

    group.finish();
}
