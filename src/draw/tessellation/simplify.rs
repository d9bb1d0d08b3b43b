//! Contour simplification
//!
//! Douglas-Peucker applied to closed loops. Flattened curves at a high
//! resolution carry many nearly collinear points; thinning them before
//! triangulation keeps vertex counts down.

use crate::draw::geometry::Point;

/// Douglas-Peucker simplification of an open polyline.
///
/// Both endpoints are always kept; an interior point survives only if it
/// lies farther than `tolerance` from the chord of its current span.
pub fn douglas_peucker(points: &[Point], tolerance: f64) -> Vec<Point> {
    let (first, last) = match points {
        [first, _, .., last] => (*first, *last),
        _ => return points.to_vec(),
    };

    let farthest = points[1..points.len() - 1]
        .iter()
        .enumerate()
        .map(|(i, &p)| (i + 1, distance_to_segment(p, first, last)))
        .fold(None, |best: Option<(usize, f64)>, (i, d)| match best {
            Some((_, bd)) if bd >= d => best,
            _ => Some((i, d)),
        });

    match farthest {
        Some((split, d)) if d > tolerance => {
            let mut kept = douglas_peucker(&points[..=split], tolerance);
            kept.pop();
            kept.extend(douglas_peucker(&points[split..], tolerance));
            kept
        }
        _ => vec![first, last],
    }
}

/// Simplify a closed loop (no explicit closing point).
///
/// The loop is split at its first point and the point farthest from it, and
/// each half is simplified independently so both anchors survive. Returns the
/// input unchanged if simplification would leave fewer than three points.
pub fn simplify_loop(points: &[Point], tolerance: f64) -> Vec<Point> {
    if tolerance <= 0.0 || points.len() < 4 {
        return points.to_vec();
    }

    let origin = points[0];
    let far = (1..points.len())
        .max_by(|&a, &b| {
            origin
                .distance_to(points[a])
                .total_cmp(&origin.distance_to(points[b]))
        })
        .unwrap_or(1);

    let mut first_half = douglas_peucker(&points[0..=far], tolerance);
    let mut second: Vec<Point> = points[far..].to_vec();
    second.push(origin);
    let second_half = douglas_peucker(&second, tolerance);

    first_half.pop();
    first_half.extend(&second_half[..second_half.len() - 1]);

    if first_half.len() < 3 {
        return points.to_vec();
    }
    first_half
}

/// Distance from `p` to the closest point of segment `a..b`
fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let d = b - a;
    let len_sq = d.dot(d);
    if len_sq == 0.0 {
        return p.distance_to(a);
    }
    let t = ((p - a).dot(d) / len_sq).clamp(0.0, 1.0);
    p.distance_to(a.lerp(b, t))
}
