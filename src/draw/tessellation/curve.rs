//! Bezier curve flattening

use crate::draw::geometry::Point;

/// Evaluate a Bezier curve at `t` by de Casteljau's construction:
/// repeatedly interpolate adjacent control points until one remains.
pub fn de_casteljau(controls: &[Point], t: f64) -> Point {
    let mut work: Vec<Point> = controls.to_vec();
    let mut n = work.len();
    while n > 1 {
        for i in 0..n - 1 {
            work[i] = work[i].lerp(work[i + 1], t);
        }
        n -= 1;
    }
    work.first().copied().unwrap_or_default()
}

/// Sample a Bezier curve at `t = 0, 1/n, ..., 1`, returning `n + 1` points.
///
/// `controls` holds 3 points for a quadratic or 4 for a cubic; any degree
/// works. A sample count of 0 is treated as 1. The first and last samples
/// are exactly the first and last control points.
pub fn sample_bezier(controls: &[Point], samples: u32) -> Vec<Point> {
    let n = samples.max(1);
    (0..=n)
        .map(|i| de_casteljau(controls, i as f64 / n as f64))
        .collect()
}

pub fn sample_quadratic(p0: Point, c: Point, p1: Point, samples: u32) -> Vec<Point> {
    sample_bezier(&[p0, c, p1], samples)
}

pub fn sample_cubic(p0: Point, c1: Point, c2: Point, p1: Point, samples: u32) -> Vec<Point> {
    sample_bezier(&[p0, c1, c2, p1], samples)
}
