// PixelBezier
// copyright zipxing@hotmail.com 2022～2025

//! Randomize-and-interpolate animation as an explicit tween state machine.
//!
//! "Pick fresh random control points, then slide the current points toward
//! them over a wall-clock duration." CurveTween captures a start set and a
//! target set once and is advanced by the frame loop with per-tick dt, so
//! it can be cancelled (dropped) or composed with other per-frame work
//! instead of blocking its caller.

use crate::curve::{BezierCurve, CurveError};
use crate::util::{Point3, Rand};
use keyframe::{ease, functions::Linear};

/// A linear interpolation from the curve's current control points to one
/// freshly randomized target set of the same cardinality.
pub struct CurveTween {
    start: Vec<Point3>,
    target: Vec<Point3>,
    duration: f32,
    elapsed: f32,
    running: bool,
}

impl CurveTween {
    /// Captures the current points as the start state and draws the random
    /// target set within the point set's range.
    pub fn start(
        curve: &BezierCurve,
        rnd: &mut Rand,
        duration_secs: f32,
    ) -> Result<Self, CurveError> {
        let cps = curve.control_points();
        let count = cps.count();
        if count < 2 {
            return Err(CurveError::InvalidDegree(count));
        }
        let r = cps.range();
        let target = (0..count)
            .map(|_| Point3::new(rnd.gen_spread(r), rnd.gen_spread(r), rnd.gen_spread(r)))
            .collect();
        Ok(Self {
            start: cps.points().to_vec(),
            target,
            duration: duration_secs,
            elapsed: 0.0,
            running: true,
        })
    }

    /// Advances the tween by dt seconds and installs the interpolated set
    /// into the curve. Returns whether the tween is still running.
    ///
    /// Once t reaches 1.0 the exact target set is installed, so the final
    /// points never carry interpolation drift.
    pub fn advance(&mut self, curve: &mut BezierCurve, dt: f32) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed += dt;
        let t = if self.duration > 0.0 {
            self.elapsed / self.duration
        } else {
            1.0
        };
        if t >= 1.0 {
            curve.replace_points(self.target.clone());
            self.running = false;
            return false;
        }
        let pts = self
            .start
            .iter()
            .zip(self.target.iter())
            .map(|(&s, &e)| ease(Linear, s, e, t))
            .collect();
        curve.replace_points(pts);
        true
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Animation progress in [0, 1]
    pub fn percent(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub fn target(&self) -> &[Point3] {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve() -> BezierCurve {
        let mut c = BezierCurve::with_range(10.0);
        c.add_point(0.0, 0.0, 0.0);
        c.add_point(1.0, 2.0, 0.0);
        c.add_point(2.0, 0.0, 0.0);
        c
    }

    #[test]
    fn needs_two_points() {
        let mut rnd = Rand::new();
        let c = BezierCurve::new();
        assert_eq!(
            CurveTween::start(&c, &mut rnd, 1.0).err(),
            Some(CurveError::InvalidDegree(0))
        );
    }

    #[test]
    fn finishes_exactly_on_target() {
        let mut rnd = Rand::new();
        rnd.srand(5);
        let mut c = curve();
        let mut tw = CurveTween::start(&c, &mut rnd, 1.0).unwrap();
        let target = tw.target().to_vec();
        // a few partial steps, then one past the end
        assert!(tw.advance(&mut c, 0.25));
        assert!(tw.advance(&mut c, 0.25));
        assert!(!tw.advance(&mut c, 10.0));
        assert_eq!(c.control_points().points(), &target[..]);
        assert!(!tw.is_running());
        // advancing a finished tween is a no-op
        assert!(!tw.advance(&mut c, 1.0));
        assert_eq!(c.control_points().points(), &target[..]);
    }

    #[test]
    fn halfway_is_midpoint_of_start_and_target() {
        let mut rnd = Rand::new();
        rnd.srand(11);
        let mut c = curve();
        let start = c.control_points().points().to_vec();
        let mut tw = CurveTween::start(&c, &mut rnd, 2.0).unwrap();
        let target = tw.target().to_vec();
        tw.advance(&mut c, 1.0);
        for ((s, e), p) in start
            .iter()
            .zip(target.iter())
            .zip(c.control_points().points())
        {
            assert!((p.x - (s.x + e.x) / 2.0).abs() < 1e-4);
            assert!((p.y - (s.y + e.y) / 2.0).abs() < 1e-4);
            assert!((p.z - (s.z + e.z) / 2.0).abs() < 1e-4);
        }
        assert!((tw.percent() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn zero_duration_snaps_to_target() {
        let mut rnd = Rand::new();
        rnd.srand(23);
        let mut c = curve();
        let mut tw = CurveTween::start(&c, &mut rnd, 0.0).unwrap();
        assert!(!tw.advance(&mut c, 0.016));
        assert_eq!(c.control_points().points(), tw.target());
    }

    #[test]
    fn cardinality_and_range_preserved() {
        let mut rnd = Rand::new();
        rnd.srand(31);
        let mut c = curve();
        let mut tw = CurveTween::start(&c, &mut rnd, 1.0).unwrap();
        assert_eq!(tw.target().len(), 3);
        for p in tw.target() {
            assert!((-10.0..=10.0).contains(&p.x));
            assert!((-10.0..=10.0).contains(&p.y));
            assert!((-10.0..=10.0).contains(&p.z));
        }
        tw.advance(&mut c, 100.0);
        assert_eq!(c.control_points().count(), 3);
        assert_eq!(c.control_points().range(), 10.0);
    }
}
