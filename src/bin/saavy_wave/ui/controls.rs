//! Parameter bar - shows the generator config and auto-regeneration state

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use saavy_wave::wave::{PerlinNoise, WaveData, WaveKind};

use super::Status;
use crate::app::Scope;

fn kind_label(kind: WaveKind) -> &'static str {
    match kind {
        WaveKind::Random => "Random",
        WaveKind::Sine => "Sine",
        WaveKind::Noise => "Noise",
    }
}

/// Render the parameter bar
pub fn render_controls(
    frame: &mut Frame,
    area: Rect,
    wave: &WaveData<Scope, PerlinNoise>,
    status: &Status,
) {
    let block = Block::default()
        .title(" saavy_wave ")
        .borders(Borders::ALL);

    let config = wave.config();
    let (auto_symbol, auto_label) = if status.auto { ("▶", "Auto") } else { ("⏸", "Manual") };

    let mut spans = vec![
        Span::styled(
            format!(" {}  ", kind_label(config.kind)),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("Amp: {:.1}  Scale: {:.3}  Freq: {}  ", config.amplitude, config.scale, config.frequency_count()),
            Style::default().fg(Color::White),
        ),
    ];

    if config.kind == WaveKind::Noise {
        spans.push(Span::styled(
            format!(
                "y: {:.2}  z: {:.2}  seed: {}  ",
                config.noise_y,
                config.noise_z,
                wave.noise().seed()
            ),
            Style::default().fg(Color::Magenta),
        ));
    }

    spans.push(Span::styled(
        format!("{} {} ({:.1}s)  ", auto_symbol, auto_label, status.regen_every.as_secs_f32()),
        Style::default().fg(if status.auto { Color::Green } else { Color::Yellow }),
    ));
    spans.push(Span::styled(
        format!("#{}  frames: {}", status.generations, wave.sink().frames_drawn()),
        Style::default().fg(Color::DarkGray),
    ));

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
