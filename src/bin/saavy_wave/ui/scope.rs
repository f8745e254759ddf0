//! Scope widget - replays the renderer's recorded strokes

use ratatui::{
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Line},
        Block, Borders,
    },
    Frame,
};

use saavy_wave::render::{PathCanvas, Rgb, Surface};

use crate::app::Scope;

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Render the scope pane
pub fn render_scope(frame: &mut Frame, area: Rect, scope: &Scope) {
    let title = if scope.is_animating() {
        format!(" Scope · morphing {:>3.0}% ", scope.position().min(1.0) * 100.0)
    } else {
        " Scope ".to_string()
    };
    let block = Block::default().title(title).borders(Borders::ALL);

    let surface: &PathCanvas = scope.surface();
    let [y_min, y_max] = surface.y_bounds();

    // Surface y points down; the terminal canvas y points up.
    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, surface.width()])
        .y_bounds([y_min, y_max])
        .paint(|ctx| {
            for stroke in surface.strokes() {
                let color = to_color(stroke.style.color);
                for pair in stroke.points.windows(2) {
                    let (x1, y1) = pair[0];
                    let (x2, y2) = pair[1];
                    ctx.draw(&Line::new(x1, -y1, x2, -y2, color));
                }
            }
        });

    frame.render_widget(canvas, area);
}
