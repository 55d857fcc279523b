// PixelBezier
// copyright zipxing@hotmail.com 2022～2025

//! Bezier curve evaluation with the Bernstein/binomial expansion.
//!
//! A curve over control values p_0..p_n is evaluated as
//! B(t) = sum C(n,i) * t^i * (1-t)^(n-i) * p_i, with t clamped to [0,1].
//! The 3d curve point applies the same blend to each axis independently.

use crate::util::Point3;

/// n!
pub fn factorial(n: u64) -> u64 {
    (1..=n).product()
}

/// binomial (n, k)
pub fn binomial(n: u64, k: u64) -> f32 {
    (factorial(n) / (factorial(k) * factorial(n - k))) as f32
}

/// The degree-n Bernstein basis polynomial b_{i,n}(t)
pub fn bernstein(n: u64, i: u64, t: f32) -> f32 {
    binomial(n, i) * t.powi(i as i32) * (1.0 - t).powi((n - i) as i32)
}

/// nth order Bezier blend of one coordinate axis at t.
///
/// t outside [0,1] is clamped, not rejected.
pub fn bezier_at(t: f32, values: &[f32]) -> f32 {
    assert!(!values.is_empty());
    let t = t.clamp(0.0, 1.0);
    let n = (values.len() - 1) as u64;
    values
        .iter()
        .enumerate()
        .map(|(i, p)| bernstein(n, i as u64, t) * p)
        .sum()
}

/// Full 3d curve point at t: the per-axis blend applied to x, y and z in
/// one pass over the control points.
pub fn bezier_point_at(t: f32, points: &[Point3]) -> Point3 {
    assert!(!points.is_empty());
    let t = t.clamp(0.0, 1.0);
    let n = (points.len() - 1) as u64;
    let mut out = Point3::default();
    for (i, p) in points.iter().enumerate() {
        let b = bernstein(n, i as u64, t);
        out.x += b * p.x;
        out.y += b * p.y;
        out.z += b * p.z;
    }
    out
}

/// Lazy polyline approximation: samples + 1 curve points at t = i / samples.
/// Smoothness is controlled solely by the sample count.
pub fn sample_iter(points: &[Point3], samples: usize) -> impl Iterator<Item = Point3> + '_ {
    assert!(samples > 0);
    (0..=samples).map(move |i| bezier_point_at(i as f32 / samples as f32, points))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn factorial_values() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(5), 120);
    }

    #[test]
    fn binomial_values() {
        assert_eq!(binomial(4, 2), 6.0);
        assert_eq!(binomial(0, 0), 1.0);
        assert_eq!(binomial(5, 0), 1.0);
        assert_eq!(binomial(5, 5), 1.0);
    }

    #[test]
    fn binomial_symmetry() {
        for n in 0..=10u64 {
            for k in 0..=n {
                assert_eq!(binomial(n, k), binomial(n, n - k));
            }
        }
    }

    #[test]
    fn bernstein_partition_of_unity() {
        for n in 1..=6u64 {
            let s: f32 = (0..=n).map(|i| bernstein(n, i, 0.37)).sum();
            assert!((s - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn endpoints_hit_first_and_last_value() {
        let vs = [3.0, -1.0, 7.5, 2.0];
        assert!((bezier_at(0.0, &vs) - 3.0).abs() < EPS);
        assert!((bezier_at(1.0, &vs) - 2.0).abs() < EPS);
    }

    #[test]
    fn out_of_range_t_clamps() {
        let vs = [3.0, -1.0, 7.5, 2.0];
        assert_eq!(bezier_at(-0.5, &vs), bezier_at(0.0, &vs));
        assert_eq!(bezier_at(1.5, &vs), bezier_at(1.0, &vs));
    }

    #[test]
    fn quadratic_midpoint() {
        // degree 2 parabola through (0,0,0) (1,2,0) (2,0,0)
        let pts = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 2.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ];
        let p = bezier_point_at(0.5, &pts);
        assert!((p.x - 1.0).abs() < EPS);
        assert!((p.y - 1.0).abs() < EPS);
        assert!(p.z.abs() < EPS);
    }

    #[test]
    fn linear_curve_is_lerp() {
        let pts = [Point3::new(0.0, 0.0, 0.0), Point3::new(4.0, 4.0, 4.0)];
        let p = bezier_point_at(0.25, &pts);
        assert!((p.x - 1.0).abs() < EPS);
        assert!((p.y - 1.0).abs() < EPS);
        assert!((p.z - 1.0).abs() < EPS);
    }

    #[test]
    fn stays_inside_convex_hull() {
        let pts = [
            Point3::new(-2.0, 0.0, 1.0),
            Point3::new(0.0, 5.0, -3.0),
            Point3::new(3.0, -1.0, 2.0),
            Point3::new(4.0, 2.0, 0.0),
        ];
        for i in 0..=100 {
            let p = bezier_point_at(i as f32 / 100.0, &pts);
            assert!((-2.0..=4.0).contains(&p.x));
            assert!((-1.0..=5.0).contains(&p.y));
            assert!((-3.0..=2.0).contains(&p.z));
        }
    }

    #[test]
    fn sample_iter_len_and_endpoints() {
        let pts = [Point3::new(0.0, 0.0, 0.0), Point3::new(4.0, 4.0, 4.0)];
        let samples: Vec<Point3> = sample_iter(&pts, 10).collect();
        assert_eq!(samples.len(), 11);
        assert_eq!(samples[0], pts[0]);
        assert_eq!(samples[10], pts[1]);
    }
}
