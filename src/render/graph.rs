// PixelBezier
// copyright zipxing@hotmail.com 2022～2025

//! Turns a BezierCurve into adapter draw calls: the sampled polyline, the
//! control polygon and the control point spheres.

use crate::algorithm::bezier::sample_iter;
use crate::curve::{BezierCurve, CurveError};
use crate::render::adapter::Adapter;
use crate::render::style::Color;

/// the smoothness (higher => smoother)
pub const NUM_LINE_STRIPS: usize = 100;
pub const CURVE_COLOR: Color = Color::new(0.0, 1.0, 0.0); // Green
pub const CONTROL_LINE_COLOR: Color = Color::new(1.0, 0.5, 0.0); // Orange
pub const CONTROL_POINT_COLOR: Color = Color::new(1.0, 1.0, 0.0); // Yellow
pub const CONTROL_POINT_RADIUS: f32 = 0.1;
pub const CONTROL_POINT_SLICES: u16 = 10;
pub const CONTROL_POINT_STACKS: u16 = 10;

/// Draws the curve polyline, then the overlays the display flags enable.
/// The adapter color is saved before the overlays and restored afterwards.
pub fn render_curve(curve: &BezierCurve, a: &mut dyn Adapter) -> Result<(), CurveError> {
    let pts = curve.control_points().points();
    if pts.len() < 2 {
        return Err(CurveError::InvalidDegree(pts.len()));
    }

    a.set_color(CURVE_COLOR);
    a.begin_line_strip();
    for p in sample_iter(pts, NUM_LINE_STRIPS) {
        a.vertex3f(p.x, p.y, p.z);
    }
    a.end_line_strip();

    a.push_color();
    if curve.show_control_polygon() {
        render_control_polygon(curve, a);
    }
    if curve.show_control_points() {
        render_control_points(curve, a);
    }
    a.pop_color();
    Ok(())
}

/// Straight segments joining the control points in order
pub fn render_control_polygon(curve: &BezierCurve, a: &mut dyn Adapter) {
    a.set_color(CONTROL_LINE_COLOR);
    a.begin_line_strip();
    for p in curve.control_points().points() {
        a.vertex3f(p.x, p.y, p.z);
    }
    a.end_line_strip();
}

/// A small solid sphere at every control point
pub fn render_control_points(curve: &BezierCurve, a: &mut dyn Adapter) {
    a.set_color(CONTROL_POINT_COLOR);
    for p in curve.control_points().points() {
        a.solid_sphere(
            *p,
            CONTROL_POINT_RADIUS,
            CONTROL_POINT_SLICES,
            CONTROL_POINT_STACKS,
        );
    }
}
