#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::surface::{Rgb, StrokeStyle, Surface};
use crate::anim::{ease_in_out_quad, Animator, Clock, MonotonicClock};
use crate::wave::{SampleSequence, WaveSink};
use crate::{DEFAULT_FRAME_INTERVAL_MS, DEFAULT_LERP_STEP};

/*
Animated Waveform Renderer
==========================

The renderer keeps two sequences:

  previous   The last sequence that fully settled on screen.
  incoming   The newest pushed sequence, not yet settled.

and a `position` in [0, 1] describing how far the morph has come.

Each frame clears the surface, draws the center reference line, then draws
one of two things:

  EASED    animator running AND previous exists AND lengths match
           point i = ease(position, previous[i], incoming[i] - previous[i], 1)
           position += step; settled once position > 1

  DIRECT   anything else
           incoming drawn as-is; settled immediately

Settling promotes incoming to previous and stops the animator.

  push A (nothing before)     push B                       push C mid-morph
  ───────────────────────     ────────────────────────     ─────────────────────
  frame 1: DIRECT A, settle   frames 1..11: A ⇢ B eased    position back to 0,
  previous = A                previous = B                 A ⇢ C from A's shape

Pushing while a morph is in flight overwrites `incoming` and restarts at
position 0 from the same `previous`, so rapid pushes read as one motion toward
the latest target. There is no queue.

With step 0.1 the position after ten frames is 0.9999..., so a full morph
takes eleven frames and the last one is drawn at (almost exactly) the target.
*/

/// Colors and widths for the two strokes the renderer draws.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveStyle {
    pub line_color: Rgb,
    pub line_width: f64,
    pub bar_color: Rgb,
    pub bar_width: f64,
}

impl Default for WaveStyle {
    fn default() -> Self {
        Self {
            line_color: Rgb::new(0x86, 0xd5, 0x30),
            line_width: 2.0,
            bar_color: Rgb::new(0x70, 0x70, 0x70),
            bar_width: 1.0,
        }
    }
}

impl WaveStyle {
    pub fn line(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.line_color,
            width: self.line_width,
        }
    }

    pub fn bar(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.bar_color,
            width: self.bar_width,
        }
    }
}

/// Morph state between the settled and the incoming sequence.
#[derive(Debug, Clone)]
pub struct Transition {
    previous: Option<SampleSequence>,
    incoming: Option<SampleSequence>,
    position: f64,
    step: f64,
}

impl Transition {
    /// Falls back to the default step when `step` is not positive and finite.
    pub fn new(step: f64) -> Self {
        Self {
            previous: None,
            incoming: None,
            position: 0.0,
            step: if valid_step(step) { step } else { DEFAULT_LERP_STEP },
        }
    }

    pub fn previous(&self) -> Option<&SampleSequence> {
        self.previous.as_ref()
    }

    pub fn incoming(&self) -> Option<&SampleSequence> {
        self.incoming.as_ref()
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    fn clear(&mut self) {
        self.previous = None;
        self.incoming = None;
    }

    /// Draw one frame. Returns true once the transition has settled.
    fn paint<S: Surface + ?Sized>(&mut self, surface: &mut S, style: &WaveStyle, animating: bool) -> bool {
        surface.clear();
        draw_center(surface, style);

        surface.begin_path();
        let settled = match (&self.incoming, &self.previous) {
            (Some(incoming), Some(previous)) if animating && previous.len() == incoming.len() => {
                let position = self.position;
                let eased = previous
                    .iter()
                    .zip(incoming.iter())
                    .map(|(&from, &to)| ease_in_out_quad(position, from, to - from, 1.0));
                trace_samples(surface, eased);

                self.position += self.step;
                self.position > 1.0
            }
            (Some(incoming), previous) => {
                if let Some(previous) = previous.as_ref().filter(|_| animating) {
                    log::warn!(
                        "sequence length changed mid-transition ({} -> {}), drawing directly",
                        previous.len(),
                        incoming.len()
                    );
                }
                trace_samples(surface, incoming.iter().copied());
                true
            }
            // Nothing pending: redraw whatever already settled.
            (None, Some(previous)) => {
                trace_samples(surface, previous.iter().copied());
                true
            }
            (None, None) => true,
        };
        surface.stroke(style.line());

        if settled {
            if let Some(incoming) = self.incoming.take() {
                log::debug!("transition settled on {} samples", incoming.len());
                self.previous = Some(incoming);
            }
        }
        settled
    }
}

/// Whether `step` moves a transition forward at all.
pub fn valid_step(step: f64) -> bool {
    step.is_finite() && step > 0.0
}

fn draw_center<S: Surface + ?Sized>(surface: &mut S, style: &WaveStyle) {
    let width = surface.width();
    surface.begin_path();
    surface.move_to(0.0, 0.0);
    surface.line_to(width, 0.0);
    surface.stroke(style.bar());
}

/// Lay samples out evenly across the surface width as one polyline.
///
/// A single sample has no segments to divide the width into and becomes a
/// zero-length segment at x = 0.
fn trace_samples<S: Surface + ?Sized>(surface: &mut S, ys: impl ExactSizeIterator<Item = f64>) {
    let segments = ys.len().saturating_sub(1);
    let dx = if segments == 0 {
        0.0
    } else {
        surface.width() / segments as f64
    };

    let mut single = None;
    for (i, y) in ys.enumerate() {
        let x = i as f64 * dx;
        if i == 0 {
            surface.move_to(x, y);
            single = Some((x, y));
        } else {
            surface.line_to(x, y);
            single = None;
        }
    }
    if let Some((x, y)) = single {
        surface.line_to(x, y);
    }
}

/// Waveform renderer that eases between successive sample sequences.
///
/// Owns its surface, its transition state, and the animator that paces
/// redraws. Drive it by calling [`CanvasWave::on_frame`] once per display
/// refresh.
pub struct CanvasWave<S: Surface, C: Clock = MonotonicClock> {
    surface: S,
    transition: Transition,
    animator: Animator<C>,
    style: WaveStyle,
    frames_drawn: u64,
}

impl<S: Surface> CanvasWave<S, MonotonicClock> {
    pub fn new(surface: S) -> Self {
        Self::with_clock(surface, MonotonicClock::new())
    }
}

impl<S: Surface, C: Clock> CanvasWave<S, C> {
    pub fn with_clock(surface: S, clock: C) -> Self {
        Self {
            surface,
            transition: Transition::new(DEFAULT_LERP_STEP),
            animator: Animator::new(DEFAULT_FRAME_INTERVAL_MS, clock),
            style: WaveStyle::default(),
            frames_drawn: 0,
        }
    }

    /// Minimum time between animated frames.
    pub fn with_interval_ms(mut self, interval_ms: f64) -> Self {
        self.animator.set_interval_ms(interval_ms);
        self
    }

    /// Position advance per animated frame.
    ///
    /// A step that is not a positive finite number would never carry the
    /// position past 1, so it is ignored and the current step kept.
    pub fn with_step(mut self, step: f64) -> Self {
        if valid_step(step) {
            self.transition.step = step;
        } else {
            log::warn!("ignoring morph step {step}, keeping {}", self.transition.step);
        }
        self
    }

    pub fn with_style(mut self, style: WaveStyle) -> Self {
        self.style = style;
        self
    }

    /// Take a new sequence.
    ///
    /// With `do_reset` the old sequence is forgotten and the new one is drawn
    /// right away. Otherwise the renderer morphs toward it over the next
    /// frames, starting from whatever last settled.
    pub fn set_data(&mut self, samples: SampleSequence, do_reset: bool) {
        self.transition.incoming = Some(samples);

        if do_reset {
            self.transition.previous = None;
            self.animator.stop();
            self.draw();
        } else {
            self.transition.position = 0.0;
            self.animator.start();
        }
    }

    /// Forget both sequences without drawing.
    ///
    /// Any in-flight morph is abandoned; the surface keeps its last frame.
    pub fn reset(&mut self) {
        log::debug!("renderer reset");
        self.transition.clear();
        self.animator.stop();
    }

    /// Draw one frame now. Returns true when nothing is left to animate.
    pub fn draw(&mut self) -> bool {
        let animating = self.animator.is_running();
        let settled = self.transition.paint(&mut self.surface, &self.style, animating);
        self.frames_drawn += 1;
        if settled {
            self.animator.stop();
        }
        settled
    }

    /// Deliver one display refresh. Returns true if a frame was drawn.
    pub fn on_frame(&mut self) -> bool {
        let drew = {
            let Self {
                surface,
                transition,
                animator,
                style,
                ..
            } = &mut *self;
            animator.on_frame(|| transition.paint(surface, style, true))
        };
        if drew {
            self.frames_drawn += 1;
        }
        drew
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    pub fn wants_frame(&self) -> bool {
        self.animator.wants_frame()
    }

    pub fn previous(&self) -> Option<&SampleSequence> {
        self.transition.previous()
    }

    pub fn incoming(&self) -> Option<&SampleSequence> {
        self.transition.incoming()
    }

    pub fn position(&self) -> f64 {
        self.transition.position()
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    pub fn animator(&self) -> &Animator<C> {
        &self.animator
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn style(&self) -> &WaveStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: WaveStyle) {
        self.style = style;
    }
}

impl<S: Surface, C: Clock> WaveSink for CanvasWave<S, C> {
    fn set_data(&mut self, samples: SampleSequence, do_reset: bool) {
        CanvasWave::set_data(self, samples, do_reset)
    }

    fn reset(&mut self) {
        CanvasWave::reset(self)
    }
}
