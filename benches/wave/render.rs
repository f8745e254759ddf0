//! Benchmarks for eased frames drawn into a recording surface.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_wave::anim::ManualClock;
use saavy_wave::render::{CanvasWave, PathCanvas};
use saavy_wave::wave::{GeneratorConfig, SampleSequence, WaveKind};

use crate::FREQUENCY_COUNTS;

fn sequences(count: usize) -> (SampleSequence, SampleSequence) {
    let config = GeneratorConfig::new(WaveKind::Sine, 100.0, 0.1, count);
    let from = saavy_wave::wave::generator::sine_samples(&config);
    let to = from.iter().map(|s| -s).collect();
    (from, to)
}

pub fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/frame");

    for &count in FREQUENCY_COUNTS {
        let (from, to) = sequences(count);

        // Single eased frame at position 0 (restarted every iteration)
        let mut wave = CanvasWave::with_clock(PathCanvas::new(640.0, 240.0), ManualClock::new());
        wave.set_data(from.clone(), true);
        group.bench_with_input(BenchmarkId::new("eased", count), &count, |b, _| {
            b.iter(|| {
                wave.set_data(to.clone(), false);
                black_box(wave.draw());
            })
        });

        // Full morph: eleven frames plus the settle
        let clock = ManualClock::new();
        let mut wave = CanvasWave::with_clock(PathCanvas::new(640.0, 240.0), clock.clone())
            .with_interval_ms(0.0);
        group.bench_with_input(BenchmarkId::new("morph", count), &count, |b, _| {
            b.iter(|| {
                wave.set_data(from.clone(), true);
                wave.set_data(to.clone(), false);
                while wave.on_frame() {}
                black_box(wave.previous());
            })
        });
    }

    group.finish();
}
