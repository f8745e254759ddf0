//! Headless morph: drives the renderer with a manual clock and prints frames.
//!
//! Run with: cargo run --example headless_morph

use saavy_wave::{
    anim::{Clock, ManualClock},
    render::{CanvasWave, PathCanvas},
    wave::{GeneratorConfig, WaveData, WaveKind},
};

/// Simulated display refresh (~60fps)
const REFRESH_MS: f64 = 16.0;

fn main() {
    env_logger::init();

    let clock = ManualClock::new();
    let scope = CanvasWave::with_clock(PathCanvas::new(80.0, 40.0), clock.clone());
    let mut wave = WaveData::new(GeneratorConfig::new(WaveKind::Noise, 30.0, 0.15, 8), scope);

    println!("=== Noise ===");
    wave.generate(true);
    play(&mut wave, &clock);

    println!();
    println!("=== Noise -> Sine ===");
    wave.set_kind(WaveKind::Sine).set_scale("0.7").generate(true);
    play(&mut wave, &clock);
}

fn play(wave: &mut WaveData<CanvasWave<PathCanvas, ManualClock>>, clock: &ManualClock) {
    let mut refreshes = 0;
    while wave.sink().wants_frame() {
        clock.advance(REFRESH_MS);
        refreshes += 1;

        let position = wave.sink().position();
        if !wave.sink_mut().on_frame() {
            continue;
        }

        let ys: Vec<String> = wave
            .sink()
            .surface()
            .last_stroke()
            .map(|stroke| stroke.points.iter().map(|(_, y)| format!("{y:6.1}")).collect())
            .unwrap_or_default();
        println!(
            "t={:6.1}ms  pos {:.1}  [{}]",
            clock.now(),
            position.min(1.0),
            ys.join(" ")
        );
    }
    println!("settled after {refreshes} refreshes");
}
