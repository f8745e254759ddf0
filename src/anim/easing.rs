/*
Quadratic Ease-In-Out
=====================

The transition between two sample sequences is not linear. Each point
accelerates away from its old value and decelerates into the new one, which
reads as a "settling" motion rather than a mechanical slide.

  value
  s+d ┤                 ___----
      │            _--‾‾
      │         _-‾
      │       _‾            inflection at t = duration / 2
      │    _-‾
    s ┤---‾
      └──────────────────────────→ t
      0        d/2        duration

Two parabolas are stitched together at the midpoint:

  u = t / (duration / 2)

  u < 1:   value = delta/2 * u²                + start    (ease in)
  u >= 1:  value = -delta/2 * (u'(u' - 2) - 1) + start    (ease out, u' = u - 1)

Both halves meet at start + delta/2 with matching slope, so the curve is
smooth. At t = 0 the value is `start`; at t = duration it is `start + delta`.
*/

/// Quadratic ease-in-out from `start` to `start + delta` over `duration`.
///
/// `t` is the elapsed progress in the same units as `duration`. Values of
/// `t` outside `[0, duration]` extrapolate the outer parabola.
#[inline]
pub fn ease_in_out_quad(t: f64, start: f64, delta: f64, duration: f64) -> f64 {
    let u = t / (duration / 2.0);
    if u < 1.0 {
        return delta / 2.0 * u * u + start;
    }
    let u = u - 1.0;
    -delta / 2.0 * (u * (u - 2.0) - 1.0) + start
}

/// Linear interpolation of `norm` (0.0 to 1.0) between `min` and `max`.
#[inline]
pub fn lerp(norm: f64, min: f64, max: f64) -> f64 {
    (max - min) * norm + min
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn endpoints_hit_start_and_target() {
        for &(b, c) in &[(0.0, 1.0), (-3.5, 10.0), (12.0, -7.25), (5.0, 0.0)] {
            assert!((ease_in_out_quad(0.0, b, c, 1.0) - b).abs() < EPS);
            assert!((ease_in_out_quad(1.0, b, c, 1.0) - (b + c)).abs() < EPS);
        }
    }

    #[test]
    fn midpoint_is_halfway() {
        let v = ease_in_out_quad(0.5, 2.0, 8.0, 1.0);
        assert!((v - 6.0).abs() < EPS, "expected 6.0, got {v}");
    }

    #[test]
    fn monotonic_rising_for_positive_delta() {
        let mut last = ease_in_out_quad(0.0, 1.0, 4.0, 1.0);
        for i in 1..=100 {
            let v = ease_in_out_quad(i as f64 / 100.0, 1.0, 4.0, 1.0);
            assert!(v >= last - EPS, "not monotonic at step {i}: {last} -> {v}");
            last = v;
        }
    }

    #[test]
    fn monotonic_falling_for_negative_delta() {
        let mut last = ease_in_out_quad(0.0, 1.0, -4.0, 1.0);
        for i in 1..=100 {
            let v = ease_in_out_quad(i as f64 / 100.0, 1.0, -4.0, 1.0);
            assert!(v <= last + EPS, "not monotonic at step {i}: {last} -> {v}");
            last = v;
        }
    }

    #[test]
    fn duration_scales_progress() {
        let a = ease_in_out_quad(0.25, 0.0, 10.0, 1.0);
        let b = ease_in_out_quad(50.0, 0.0, 10.0, 200.0);
        assert!((a - b).abs() < EPS);
    }

    #[test]
    fn lerp_spans_range() {
        assert!((lerp(0.0, 2.0, 6.0) - 2.0).abs() < EPS);
        assert!((lerp(0.5, 2.0, 6.0) - 4.0).abs() < EPS);
        assert!((lerp(1.0, 2.0, 6.0) - 6.0).abs() < EPS);
    }
}
