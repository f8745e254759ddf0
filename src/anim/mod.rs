//! Timing primitives for animated redraws.
//!
//! Everything here is single-threaded and cooperative: the host loop owns the
//! display refresh and hands each frame to an [`Animator`], which decides
//! whether enough time has passed to run its callback again.

/// Frame-driven repeating task with a minimum interval.
pub mod animator;
/// Time sources for the animator (wall clock and manual).
pub mod clock;
/// Interpolation laws used by transitions.
pub mod easing;

pub use animator::{valid_interval, Animator, AnimatorState};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use easing::{ease_in_out_quad, lerp};
