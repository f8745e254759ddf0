//! Drawing surfaces and the animated waveform renderer.
//!
//! The renderer only speaks the small immediate-mode vocabulary of
//! [`Surface`] (clear, path, stroke). [`PathCanvas`] is a retained
//! implementation that records strokes so a terminal UI, a test, or a
//! headless tool can read back what was drawn.

/// Animated renderer that morphs between sample sequences.
pub mod canvas_wave;
/// Retained-mode surface that records stroked polylines.
pub mod path;
/// The drawing surface trait and stroke styling.
pub mod surface;

pub use canvas_wave::{valid_step, CanvasWave, Transition, WaveStyle};
pub use path::{PathCanvas, Stroke};
pub use surface::{ColorParseError, Rgb, StrokeStyle, Surface};
