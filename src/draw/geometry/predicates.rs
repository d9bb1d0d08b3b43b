//! Geometric predicates shared by the classifier, the hole eliminator and
//! the ear clipper.

use super::types::Point;

/// Signed turn of the triple `(a, b, c)`: `(b - a) x (c - a)`.
///
/// Returns:
/// - >0 if `c` lies to the left of `a -> b` in a y-up frame
/// - <0 if it lies to the right
/// - =0 if the three points are collinear
///
/// With the y axis pointing down (glyph space) the visual sense flips, which
/// is why outer loops are the ones with a *positive* turn at their anchor.
pub fn orient2d(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Twice the signed area of a closed loop given by indices into `vertices`
pub fn signed_area2(vertices: &[Point], indices: &[usize]) -> f64 {
    let n = indices.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let p = vertices[indices[i]];
        let q = vertices[indices[(i + 1) % n]];
        sum += p.cross(q);
    }
    sum
}

/// Signed area of a closed loop, positive for outer-oriented loops
pub fn signed_area(vertices: &[Point], indices: &[usize]) -> f64 {
    signed_area2(vertices, indices) * 0.5
}

/// Barycentric coordinates of `p` with respect to triangle `(a, b, c)`.
///
/// Each weight is a sub-triangle orientation divided by the full one, so its
/// sign is exactly the sign of the corresponding orientation test.
/// Returns `None` for a degenerate (zero-area) triangle.
pub fn barycentric(p: Point, a: Point, b: Point, c: Point) -> Option<[f64; 3]> {
    let area = orient2d(a, b, c);
    if area == 0.0 {
        return None;
    }
    Some([
        orient2d(b, c, p) / area,
        orient2d(c, a, p) / area,
        orient2d(a, b, p) / area,
    ])
}

/// True if `p` lies strictly inside triangle `(a, b, c)`
pub fn point_in_triangle(p: Point, a: Point, b: Point, c: Point) -> bool {
    match barycentric(p, a, b, c) {
        Some([u, v, w]) => u > 0.0 && v > 0.0 && w > 0.0,
        None => false,
    }
}

/// True if `p` lies inside triangle `(a, b, c)` or on its boundary
pub fn point_in_triangle_inclusive(p: Point, a: Point, b: Point, c: Point) -> bool {
    match barycentric(p, a, b, c) {
        Some([u, v, w]) => u >= 0.0 && v >= 0.0 && w >= 0.0,
        None => false,
    }
}

/// True if the direction from `v` towards `target` enters the polygon
/// interior at the corner `prev -> v -> next` of a positively oriented loop.
pub fn locally_inside(prev: Point, v: Point, next: Point, target: Point) -> bool {
    if orient2d(prev, v, next) >= 0.0 {
        orient2d(prev, v, target) >= 0.0 && orient2d(v, next, target) >= 0.0
    } else {
        orient2d(prev, v, target) >= 0.0 || orient2d(v, next, target) >= 0.0
    }
}
