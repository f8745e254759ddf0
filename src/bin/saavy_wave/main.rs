//! saavy_wave - Terminal waveform scope with animated redraws
//!
//! Run with: cargo run -- --kind noise
//! Logs go to stderr; set RUST_LOG=saavy_wave=debug and redirect 2> to a file.

mod app;
mod ui;

use clap::{Parser, ValueEnum};
use saavy_wave::{
    anim::valid_interval,
    render::{valid_step, Rgb},
    wave::WaveKind,
    DEFAULT_FRAME_INTERVAL_MS, DEFAULT_LERP_STEP,
};

use app::WaveApp;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindArg {
    Random,
    Sine,
    Noise,
}

impl From<KindArg> for WaveKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Random => WaveKind::Random,
            KindArg::Sine => WaveKind::Sine,
            KindArg::Noise => WaveKind::Noise,
        }
    }
}

/// Generator parameters are taken as text and parsed as floats by the
/// generator itself, exactly like values typed into the live controls.
#[derive(Parser, Debug)]
#[command(name = "saavy_wave", about = "Animated waveform scope")]
pub struct Args {
    /// Generation strategy
    #[arg(long, value_enum, default_value_t = KindArg::Noise)]
    kind: KindArg,
    /// Peak-to-peak height (peak height for sine)
    #[arg(long, default_value = "100")]
    amplitude: String,
    /// Phase step (sine) or noise x step per sample
    #[arg(long, default_value = "0.1")]
    scale: String,
    /// Sample count minus one
    #[arg(long, default_value = "40")]
    freq: String,
    /// Noise field y coordinate
    #[arg(long, default_value = "0")]
    noise_y: String,
    /// Noise field z coordinate
    #[arg(long, default_value = "0")]
    noise_z: String,
    /// Noise permutation seed
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Logical surface width
    #[arg(long, default_value_t = 640.0)]
    width: f64,
    /// Logical surface height
    #[arg(long, default_value_t = 240.0)]
    height: f64,
    /// Minimum milliseconds between animated frames
    #[arg(long, default_value_t = DEFAULT_FRAME_INTERVAL_MS, value_parser = parse_interval)]
    interval_ms: f64,
    /// Morph progress per animated frame
    #[arg(long, default_value_t = DEFAULT_LERP_STEP, value_parser = parse_step)]
    step: f64,
    /// Milliseconds between automatic regenerations
    #[arg(long, default_value_t = 1500)]
    regen_ms: u64,
    /// Start with automatic regeneration off
    #[arg(long)]
    paused: bool,
    #[arg(long, default_value = "#86d530")]
    line_color: Rgb,
    #[arg(long, default_value_t = 2.0)]
    line_width: f64,
    #[arg(long, default_value = "#707070")]
    bar_color: Rgb,
}

fn parse_interval(arg: &str) -> Result<f64, String> {
    let interval: f64 = arg.parse().map_err(|e| format!("{e}"))?;
    if !valid_interval(interval) {
        return Err(format!("{interval} is not a non-negative number of milliseconds"));
    }
    Ok(interval)
}

fn parse_step(arg: &str) -> Result<f64, String> {
    let step: f64 = arg.parse().map_err(|e| format!("{e}"))?;
    if !valid_step(step) {
        return Err(format!("{step} must be positive and finite"));
    }
    Ok(step)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = Args::parse();
    log::info!("starting with {args:?}");

    let mut app = WaveApp::new(&args);
    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();
    result
}
