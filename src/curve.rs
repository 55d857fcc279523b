// PixelBezier
// copyright zipxing@hotmail.com 2022～2025

//! The curve data model: an ordered control point set and the BezierCurve
//! built on top of it. Math lives in algorithm::bezier and pixel output in
//! render::graph; this module holds state and invariants only.

use crate::algorithm::bezier::bezier_point_at;
use crate::util::{Point3, Rand};
use thiserror::Error;

/// default half-extent for randomized control point generation
pub const DEFAULT_RANGE: f32 = 10.0;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CurveError {
    /// evaluation needs a well-formed curve of degree >= 1
    #[error("curve of degree >= 1 needs at least 2 control points, got {0}")]
    InvalidDegree(usize),
    #[error("control point index {index} out of range 0..{count}")]
    IndexOutOfRange { index: usize, count: usize },
}

/// An ordered list of control points. Insertion order defines the curve
/// parameterization order. The range bounds randomized generation to
/// [-range, range] per axis and is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPointSet {
    points: Vec<Point3>,
    range: f32,
}

impl Default for ControlPointSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlPointSet {
    pub fn new() -> Self {
        Self::with_range(DEFAULT_RANGE)
    }

    pub fn with_range(range: f32) -> Self {
        Self {
            points: vec![],
            range,
        }
    }

    pub fn add(&mut self, x: f32, y: f32, z: f32) {
        self.points.push(Point3::new(x, y, z));
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Replaces every point with independent uniform draws in
    /// [-range, range] per axis. Count and order are unchanged.
    pub fn randomize(&mut self, rnd: &mut Rand) {
        let r = self.range;
        for p in self.points.iter_mut() {
            *p = Point3::new(rnd.gen_spread(r), rnd.gen_spread(r), rnd.gen_spread(r));
        }
    }

    /// Swaps in a whole new point list, e.g. an interpolated set during
    /// animation. The range is kept.
    pub fn replace(&mut self, points: Vec<Point3>) {
        self.points = points;
    }

    pub fn count(&self) -> usize {
        self.points.len()
    }

    pub fn range(&self) -> f32 {
        self.range
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn xs(&self) -> Vec<f32> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn ys(&self) -> Vec<f32> {
        self.points.iter().map(|p| p.y).collect()
    }

    pub fn zs(&self) -> Vec<f32> {
        self.points.iter().map(|p| p.z).collect()
    }
}

/// A Bezier curve owning one control point set. Degree is derived from the
/// point count, never stored, so it cannot drift out of sync. The two
/// display flags only affect rendering, never the math.
#[derive(Debug, Clone)]
pub struct BezierCurve {
    control_points: ControlPointSet,
    show_control_polygon: bool,
    show_control_points: bool,
}

impl Default for BezierCurve {
    fn default() -> Self {
        Self::new()
    }
}

impl BezierCurve {
    pub fn new() -> Self {
        Self {
            control_points: ControlPointSet::new(),
            show_control_polygon: false,
            show_control_points: false,
        }
    }

    pub fn with_range(range: f32) -> Self {
        Self {
            control_points: ControlPointSet::with_range(range),
            ..Self::new()
        }
    }

    pub fn add_point(&mut self, x: f32, y: f32, z: f32) {
        self.control_points.add(x, y, z);
    }

    pub fn clear(&mut self) {
        self.control_points.clear();
    }

    /// count - 1, or None for an empty set
    pub fn degree(&self) -> Option<usize> {
        self.control_points.count().checked_sub(1)
    }

    /// Curve point at t. t outside [0,1] is clamped, not rejected; fewer
    /// than 2 control points is an InvalidDegree error.
    pub fn evaluate(&self, t: f32) -> Result<Point3, CurveError> {
        let count = self.control_points.count();
        if count < 2 {
            return Err(CurveError::InvalidDegree(count));
        }
        Ok(bezier_point_at(t, self.control_points.points()))
    }

    pub fn modify_point(&mut self, index: usize, x: f32, y: f32, z: f32) -> Result<(), CurveError> {
        let p = self.point_mut(index)?;
        *p = Point3::new(x, y, z);
        Ok(())
    }

    pub fn modify_point_z(&mut self, index: usize, z: f32) -> Result<(), CurveError> {
        self.point_mut(index)?.z = z;
        Ok(())
    }

    pub fn randomize(&mut self, rnd: &mut Rand) {
        self.control_points.randomize(rnd);
    }

    pub fn replace_points(&mut self, points: Vec<Point3>) {
        self.control_points.replace(points);
    }

    pub fn set_show_control_polygon(&mut self, show: bool) {
        self.show_control_polygon = show;
    }

    pub fn set_show_control_points(&mut self, show: bool) {
        self.show_control_points = show;
    }

    pub fn show_control_polygon(&self) -> bool {
        self.show_control_polygon
    }

    pub fn show_control_points(&self) -> bool {
        self.show_control_points
    }

    pub fn control_points(&self) -> &ControlPointSet {
        &self.control_points
    }

    fn point_mut(&mut self, index: usize) -> Result<&mut Point3, CurveError> {
        let count = self.control_points.count();
        self.control_points
            .points
            .get_mut(index)
            .ok_or(CurveError::IndexOutOfRange { index, count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parabola() -> BezierCurve {
        let mut c = BezierCurve::new();
        c.add_point(0.0, 0.0, 0.0);
        c.add_point(1.0, 2.0, 0.0);
        c.add_point(2.0, 0.0, 0.0);
        c
    }

    #[test]
    fn degree_tracks_count() {
        let mut c = BezierCurve::new();
        assert_eq!(c.degree(), None);
        c.add_point(1.0, 1.0, 1.0);
        assert_eq!(c.degree(), Some(0));
        c.add_point(2.0, 2.0, 2.0);
        assert_eq!(c.degree(), Some(1));
        c.clear();
        assert_eq!(c.degree(), None);
    }

    #[test]
    fn evaluate_needs_two_points() {
        let mut c = BezierCurve::new();
        assert_eq!(c.evaluate(0.5), Err(CurveError::InvalidDegree(0)));
        c.add_point(1.0, 1.0, 1.0);
        assert_eq!(c.evaluate(0.5), Err(CurveError::InvalidDegree(1)));
        c.add_point(2.0, 2.0, 2.0);
        assert!(c.evaluate(0.5).is_ok());
    }

    #[test]
    fn evaluate_endpoints_and_midpoint() {
        let c = parabola();
        assert_eq!(c.evaluate(0.0).unwrap(), Point3::new(0.0, 0.0, 0.0));
        assert_eq!(c.evaluate(1.0).unwrap(), Point3::new(2.0, 0.0, 0.0));
        let mid = c.evaluate(0.5).unwrap();
        assert!((mid.x - 1.0).abs() < 1e-5);
        assert!((mid.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn evaluate_clamps_t() {
        let c = parabola();
        assert_eq!(c.evaluate(-3.0).unwrap(), c.evaluate(0.0).unwrap());
        assert_eq!(c.evaluate(7.0).unwrap(), c.evaluate(1.0).unwrap());
    }

    #[test]
    fn modify_point_bounds_checked() {
        let mut c = parabola();
        assert!(c.modify_point(2, 5.0, 5.0, 5.0).is_ok());
        assert_eq!(
            c.modify_point(3, 0.0, 0.0, 0.0),
            Err(CurveError::IndexOutOfRange { index: 3, count: 3 })
        );
        assert!(c.modify_point_z(0, 9.0).is_ok());
        assert_eq!(c.control_points().points()[0].z, 9.0);
        assert_eq!(
            c.modify_point_z(9, 1.0),
            Err(CurveError::IndexOutOfRange { index: 9, count: 3 })
        );
    }

    #[test]
    fn randomize_stays_in_range_and_changes_points() {
        let mut c = BezierCurve::with_range(5.0);
        for i in 0..20 {
            c.add_point(i as f32, i as f32, i as f32);
        }
        let before = c.control_points().points().to_vec();
        let mut rnd = Rand::new();
        rnd.srand(99);
        c.randomize(&mut rnd);
        let after = c.control_points().points();
        assert_eq!(after.len(), before.len());
        for (b, a) in before.iter().zip(after) {
            assert!((-5.0..=5.0).contains(&a.x));
            assert!((-5.0..=5.0).contains(&a.y));
            assert!((-5.0..=5.0).contains(&a.z));
            assert_ne!(b, a);
        }
    }

    #[test]
    fn axis_projections_keep_order() {
        let c = parabola();
        assert_eq!(c.control_points().xs(), vec![0.0, 1.0, 2.0]);
        assert_eq!(c.control_points().ys(), vec![0.0, 2.0, 0.0]);
        assert_eq!(c.control_points().zs(), vec![0.0, 0.0, 0.0]);
    }
}
