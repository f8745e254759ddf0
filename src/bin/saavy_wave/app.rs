//! WaveApp - owns the generator/renderer pair and runs the frame loop
//!
//! The loop below is the display's frame signal: every pass delivers one
//! frame to the renderer, redraws the terminal, then waits for input. While
//! a morph is in flight it wakes at ~60fps; otherwise it sleeps until the
//! next automatic regeneration or a key press.

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};
use std::time::{Duration, Instant};

use saavy_wave::{
    render::{CanvasWave, PathCanvas, WaveStyle},
    wave::{GeneratorConfig, PerlinNoise, WaveData, WaveKind},
};

use super::ui::{self, Status};
use super::Args;

/// Refresh period while the renderer wants frames
const FRAME_PERIOD: Duration = Duration::from_millis(16);
/// Longest wait between passes when nothing is animating
const IDLE_PERIOD: Duration = Duration::from_millis(250);
/// How far each automatic regeneration moves through the noise field
const NOISE_DRIFT: f64 = 0.05;

pub type Scope = CanvasWave<PathCanvas>;

pub struct WaveApp {
    wave: WaveData<Scope, PerlinNoise>,
    auto: bool,
    regen_every: Duration,
    last_regen: Instant,
    generations: u64,
    should_quit: bool,
}

impl WaveApp {
    pub fn new(args: &Args) -> Self {
        let style = WaveStyle {
            line_color: args.line_color,
            line_width: args.line_width,
            bar_color: args.bar_color,
            ..WaveStyle::default()
        };
        let scope = CanvasWave::new(PathCanvas::new(args.width, args.height))
            .with_interval_ms(args.interval_ms)
            .with_step(args.step)
            .with_style(style);

        let config = GeneratorConfig::default().with_kind(args.kind.into());
        let mut wave = WaveData::new(config, scope).with_noise(PerlinNoise::new(args.seed));
        wave.set_amplitude(&args.amplitude)
            .set_scale(&args.scale)
            .set_noise_y(&args.noise_y)
            .set_noise_z(&args.noise_z)
            .set_frequency_count(&args.freq)
            .generate(true);

        Self {
            wave,
            auto: !args.paused,
            regen_every: Duration::from_millis(args.regen_ms.max(1)),
            last_regen: Instant::now(),
            generations: 1,
            should_quit: false,
        }
    }

    /// Run the frame loop until the user quits
    pub fn run(&mut self, mut terminal: DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.auto_regenerate();

            self.wave.sink_mut().on_frame();

            terminal.draw(|frame| self.render(frame))?;

            if event::poll(self.poll_timeout())? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    fn poll_timeout(&self) -> Duration {
        if self.wave.sink().wants_frame() {
            return FRAME_PERIOD;
        }
        if self.auto {
            let until_regen = self.regen_every.saturating_sub(self.last_regen.elapsed());
            return until_regen.clamp(FRAME_PERIOD, IDLE_PERIOD);
        }
        IDLE_PERIOD
    }

    fn auto_regenerate(&mut self) {
        if !self.auto || self.last_regen.elapsed() < self.regen_every {
            return;
        }
        if self.wave.kind() == WaveKind::Noise {
            let z = self.wave.config().noise_z + NOISE_DRIFT;
            self.wave.set_noise_z(z);
        }
        self.regenerate();
    }

    fn regenerate(&mut self) {
        self.wave.generate(true);
        self.generations += 1;
        self.last_regen = Instant::now();
    }

    fn handle_key(&mut self, key: KeyCode) {
        let config = *self.wave.config();
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char(' ') => {
                self.auto = !self.auto;
                self.last_regen = Instant::now();
                return;
            }
            KeyCode::Char('r') => {
                self.wave.sink_mut().reset();
                return;
            }
            KeyCode::Char('1') => {
                self.wave.set_kind(WaveKind::Random);
            }
            KeyCode::Char('2') => {
                self.wave.set_kind(WaveKind::Sine);
            }
            KeyCode::Char('3') => {
                self.wave.set_kind(WaveKind::Noise);
            }
            KeyCode::Char('g') | KeyCode::Enter => {}
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.wave.set_frequency_count(config.frequency_count() + 1);
            }
            KeyCode::Char('-') => {
                self.wave
                    .set_frequency_count(config.frequency_count().saturating_sub(1));
            }
            KeyCode::Char(']') => {
                self.wave.set_amplitude(config.amplitude * 1.1);
            }
            KeyCode::Char('[') => {
                self.wave.set_amplitude(config.amplitude / 1.1);
            }
            KeyCode::Char('.') => {
                self.wave.set_scale(config.scale * 1.25);
            }
            KeyCode::Char(',') => {
                self.wave.set_scale(config.scale / 1.25);
            }
            KeyCode::Char('y') => {
                self.wave.set_noise_y(config.noise_y + 0.1);
            }
            KeyCode::Char('Y') => {
                self.wave.set_noise_y(config.noise_y - 0.1);
            }
            KeyCode::Char('z') => {
                self.wave.set_noise_z(config.noise_z + 0.1);
            }
            KeyCode::Char('Z') => {
                self.wave.set_noise_z(config.noise_z - 0.1);
            }
            _ => return,
        }
        self.regenerate();
    }

    fn render(&self, frame: &mut Frame) {
        let status = Status {
            auto: self.auto,
            regen_every: self.regen_every,
            generations: self.generations,
        };
        ui::render(frame, &self.wave, &status);
    }
}
