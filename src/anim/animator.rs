use super::clock::{Clock, MonotonicClock};
use crate::DEFAULT_FRAME_INTERVAL_MS;

/*
Frame-Scheduled Animator
========================

The animator turns the host's display refresh into a throttled repeating
task. The host calls `on_frame` once per refresh; the animator only runs the
callback when at least `interval_ms` have passed since the last accepted
frame, and keeps asking for frames until the callback says it is done.

Vocabulary
----------

  frame request   A single pending "call me on the next refresh". At most one
                  exists at a time; deliveries without one are ignored.

  accepted frame  A delivery where elapsed >= interval. The timestamp is
                  recorded and the callback runs exactly once.

  settled         The callback returned true. No further requests are made.


The State Machine
-----------------

            start()                    callback() == true
    ┌──────┐ ───────────→ ┌─────────┐ ──────────────────→ ┌──────┐
    │ Idle │              │ Running │                      │ Idle │
    └──────┘ ←─────────── └─────────┘                      └──────┘
               stop()        │    ↑
                             │    │ elapsed < interval, or
                             └────┘ callback() == false  (request again)

Stopping drops the pending request, so a delivery that arrives afterwards
finds nothing to do. This is what makes `stop()` immediate even though the
host may already be waiting on the next refresh.
*/

/// Whether the animator is currently driving its callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatorState {
    Idle,
    Running,
}

pub struct Animator<C: Clock = MonotonicClock> {
    interval_ms: f64,
    last_frame: Option<f64>,
    state: AnimatorState,
    frame_requested: bool,
    clock: C,
}

impl Animator<MonotonicClock> {
    /// Animator on the wall clock with the default 35ms interval.
    pub fn wall_clock() -> Self {
        Self::new(DEFAULT_FRAME_INTERVAL_MS, MonotonicClock::new())
    }
}

impl<C: Clock> Animator<C> {
    /// An interval that is negative or not finite falls back to the default.
    pub fn new(interval_ms: f64, clock: C) -> Self {
        Self {
            interval_ms: if valid_interval(interval_ms) {
                interval_ms
            } else {
                DEFAULT_FRAME_INTERVAL_MS
            },
            last_frame: None,
            state: AnimatorState::Idle,
            frame_requested: false,
            clock,
        }
    }

    /// Begin running: stamp the current time and request the first frame.
    ///
    /// Calling `start` while already running restarts the interval from now.
    pub fn start(&mut self) {
        let now = self.clock.now();
        log::debug!("animator start at {now:.1}ms");
        self.state = AnimatorState::Running;
        self.last_frame = Some(now);
        self.frame_requested = true;
    }

    /// Force the animator idle. The callback is not invoked.
    pub fn stop(&mut self) {
        if self.state == AnimatorState::Running {
            log::debug!("animator stop");
        }
        self.state = AnimatorState::Idle;
        self.frame_requested = false;
    }

    /// Deliver one frame signal.
    ///
    /// Returns true if the callback ran on this delivery.
    pub fn on_frame(&mut self, callback: impl FnOnce() -> bool) -> bool {
        if self.state == AnimatorState::Idle || !self.frame_requested {
            return false;
        }
        self.frame_requested = false;

        let now = self.clock.now();
        let elapsed = now - self.last_frame.unwrap_or(now);

        if elapsed >= self.interval_ms {
            self.last_frame = Some(now);
            log::trace!("animator frame accepted after {elapsed:.1}ms");
            if callback() {
                log::debug!("animator settled");
                self.state = AnimatorState::Idle;
                return true;
            }
            self.frame_requested = true;
            return true;
        }

        self.frame_requested = true;
        false
    }

    pub fn is_running(&self) -> bool {
        self.state == AnimatorState::Running
    }

    /// True while a frame request is pending.
    ///
    /// Hosts use this to decide whether to keep refreshing at display rate.
    pub fn wants_frame(&self) -> bool {
        self.frame_requested
    }

    pub fn state(&self) -> AnimatorState {
        self.state
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Change the interval. Negative or non-finite values are ignored, since
    /// `elapsed >= NaN` would never accept another frame.
    pub fn set_interval_ms(&mut self, interval_ms: f64) {
        if !valid_interval(interval_ms) {
            log::warn!("ignoring frame interval {interval_ms}ms, keeping {}ms", self.interval_ms);
            return;
        }
        self.interval_ms = interval_ms;
    }

    /// Timestamp of the last accepted frame (or of `start`).
    pub fn last_frame(&self) -> Option<f64> {
        self.last_frame
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

/// Zero is allowed and means "every delivered frame".
pub fn valid_interval(interval_ms: f64) -> bool {
    interval_ms.is_finite() && interval_ms >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::clock::ManualClock;
    use std::cell::Cell;

    fn animator(interval: f64) -> (Animator<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        (Animator::new(interval, clock.clone()), clock)
    }

    #[test]
    fn idle_animator_ignores_frames() {
        let (mut anim, clock) = animator(10.0);
        clock.advance(100.0);

        let ran = anim.on_frame(|| panic!("callback must not run while idle"));
        assert!(!ran);
        assert_eq!(anim.state(), AnimatorState::Idle);
        assert!(!anim.wants_frame());
    }

    #[test]
    fn frames_inside_interval_are_skipped() {
        let (mut anim, clock) = animator(35.0);
        let calls = Cell::new(0);
        anim.start();

        clock.advance(16.0);
        assert!(!anim.on_frame(|| {
            calls.set(calls.get() + 1);
            false
        }));
        assert!(anim.wants_frame());

        clock.advance(16.0);
        assert!(!anim.on_frame(|| {
            calls.set(calls.get() + 1);
            false
        }));

        clock.advance(16.0);
        assert!(anim.on_frame(|| {
            calls.set(calls.get() + 1);
            false
        }));
        assert_eq!(calls.get(), 1);
        assert_eq!(anim.last_frame(), Some(48.0));
    }

    #[test]
    fn runs_until_callback_settles() {
        let (mut anim, clock) = animator(10.0);
        let calls = Cell::new(0);
        anim.start();

        for _ in 0..10 {
            clock.advance(10.0);
            anim.on_frame(|| {
                calls.set(calls.get() + 1);
                calls.get() == 3
            });
        }

        assert_eq!(calls.get(), 3);
        assert!(!anim.is_running());
        assert!(!anim.wants_frame());
    }

    #[test]
    fn stop_mid_run_blocks_later_deliveries() {
        let (mut anim, clock) = animator(10.0);
        let calls = Cell::new(0);
        anim.start();

        clock.advance(10.0);
        anim.on_frame(|| {
            calls.set(calls.get() + 1);
            false
        });
        assert_eq!(calls.get(), 1);

        anim.stop();
        assert!(!anim.wants_frame());

        for _ in 0..5 {
            clock.advance(50.0);
            let ran = anim.on_frame(|| {
                calls.set(calls.get() + 1);
                false
            });
            assert!(!ran);
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn restart_resets_interval_origin() {
        let (mut anim, clock) = animator(20.0);
        clock.set(100.0);
        anim.start();
        assert_eq!(anim.last_frame(), Some(100.0));

        clock.advance(15.0);
        anim.start();
        assert_eq!(anim.last_frame(), Some(115.0));

        clock.advance(10.0);
        assert!(!anim.on_frame(|| true));
        clock.advance(10.0);
        assert!(anim.on_frame(|| true));
        assert_eq!(anim.state(), AnimatorState::Idle);
    }

    #[test]
    fn zero_interval_accepts_every_frame() {
        let (mut anim, _clock) = animator(0.0);
        let calls = Cell::new(0);
        anim.start();

        for _ in 0..4 {
            anim.on_frame(|| {
                calls.set(calls.get() + 1);
                false
            });
        }
        assert_eq!(calls.get(), 4);
        assert!(anim.is_running());
    }

    #[test]
    fn invalid_intervals_never_stall_frames() {
        let (mut anim, clock) = animator(f64::NAN);
        assert_eq!(anim.interval_ms(), DEFAULT_FRAME_INTERVAL_MS);

        anim.set_interval_ms(f64::NAN);
        anim.set_interval_ms(-5.0);
        anim.set_interval_ms(f64::INFINITY);
        assert_eq!(anim.interval_ms(), DEFAULT_FRAME_INTERVAL_MS);

        anim.start();
        clock.advance(DEFAULT_FRAME_INTERVAL_MS);
        assert!(anim.on_frame(|| true));
        assert!(!anim.is_running());
    }
}
