pub mod anim; // Easing and frame scheduling
pub mod render; // Drawing surfaces and the animated wave renderer
pub mod wave; // Sample generators and noise

/// Interpolation advance applied per rendered transition frame.
pub const DEFAULT_LERP_STEP: f64 = 0.1;
/// Minimum time between accepted animator frames, in milliseconds.
pub const DEFAULT_FRAME_INTERVAL_MS: f64 = 35.0;
