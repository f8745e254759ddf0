//! TUI module for saavy_wave
//!
//! Lays out the parameter bar, the scope, and the key help line.

mod controls;
mod scope;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use std::time::Duration;

use saavy_wave::wave::{PerlinNoise, WaveData};

use super::app::Scope;
use controls::render_controls;
use scope::render_scope;

/// App-level state shown alongside the generator parameters
pub struct Status {
    pub auto: bool,
    pub regen_every: Duration,
    pub generations: u64,
}

/// Render the whole UI
pub fn render(frame: &mut Frame, wave: &WaveData<Scope, PerlinNoise>, status: &Status) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Parameter bar
            Constraint::Min(8),    // Scope
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    render_controls(frame, chunks[0], wave, status);
    render_scope(frame, chunks[1], wave.sink());

    let help = Paragraph::new(
        " [Q] Quit  [G] Generate  [Space] Auto  [1/2/3] Random/Sine/Noise  [+/-] Freq  \
         [[/]] Amp  [,/.] Scale  [y/Y z/Z] Noise  [R] Reset",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[2]);
}
