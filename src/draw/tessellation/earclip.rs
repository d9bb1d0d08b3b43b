//! Ear-clipping triangulation of a single (weakly) simple loop

use std::collections::VecDeque;

use crate::draw::geometry::{orient2d, point_in_triangle_inclusive, Point};
use crate::error::TessellationError;

/// Circular doubly linked list over loop positions
struct Ring<'a> {
    vertices: &'a [Point],
    indices: &'a [usize],
    prev: Vec<usize>,
    next: Vec<usize>,
    removed: Vec<bool>,
}

impl<'a> Ring<'a> {
    fn new(vertices: &'a [Point], indices: &'a [usize]) -> Self {
        let n = indices.len();
        Ring {
            vertices,
            indices,
            prev: (0..n).map(|i| (i + n - 1) % n).collect(),
            next: (0..n).map(|i| (i + 1) % n).collect(),
            removed: vec![false; n],
        }
    }

    fn point(&self, k: usize) -> Point {
        self.vertices[self.indices[k]]
    }

    fn turn(&self, k: usize) -> f64 {
        orient2d(self.point(self.prev[k]), self.point(k), self.point(self.next[k]))
    }

    /// A corner is an ear when it is convex and no reflex vertex of the
    /// remaining loop lies in the triangle it spans. Convex vertices can
    /// never be the only obstruction, and copies of the corner points left
    /// by hole bridges are not obstructions at all.
    fn is_ear(&self, k: usize) -> bool {
        let p = self.prev[k];
        let n = self.next[k];
        let (a, b, c) = (self.point(p), self.point(k), self.point(n));
        let turn = orient2d(a, b, c);
        if turn < 0.0 {
            return false;
        }
        if turn == 0.0 {
            // Collinear corner: clipping it removes no area
            return true;
        }

        let mut m = self.next[n];
        while m != p {
            let q = self.point(m);
            if q != a && q != b && q != c && self.turn(m) <= 0.0 && point_in_triangle_inclusive(q, a, b, c) {
                return false;
            }
            m = self.next[m];
        }
        true
    }

    fn unlink(&mut self, k: usize) {
        let p = self.prev[k];
        let n = self.next[k];
        self.next[p] = n;
        self.prev[n] = p;
        self.removed[k] = true;
    }

    fn triangle(&self, k: usize) -> [usize; 3] {
        [
            self.indices[self.prev[k]],
            self.indices[k],
            self.indices[self.next[k]],
        ]
    }
}

/// Triangulate one positively oriented loop given as indices into
/// `vertices`.
///
/// Emits triangles as vertex-index triples. Collinear corners are clipped
/// without emitting a triangle, so the result has exactly `len - 2`
/// triangles for a loop with no degenerate corners and never contains a
/// zero-area triangle. Fails with [`TessellationError::NoEarFound`] when the
/// loop is not simple enough to clip.
pub fn triangulate_loop(vertices: &[Point], indices: &[usize]) -> Result<Vec<[usize; 3]>, TessellationError> {
    let len = indices.len();
    if len < 3 {
        return Ok(Vec::new());
    }
    if len == 3 {
        return Ok(vec![[indices[0], indices[1], indices[2]]]);
    }

    let mut ring = Ring::new(vertices, indices);
    let mut triangles = Vec::with_capacity(len - 2);
    let mut queue: VecDeque<usize> = (0..len).filter(|&k| ring.is_ear(k)).collect();
    let mut remaining = len;
    let mut head = 0;

    while remaining > 3 {
        let k = match queue.pop_front() {
            Some(k) => k,
            None => {
                // Neighbour re-evaluation can miss ears that opened up
                // elsewhere; rescan once before giving up
                queue.extend((0..len).filter(|&k| !ring.removed[k] && ring.is_ear(k)));
                match queue.pop_front() {
                    Some(k) => k,
                    None => return Err(TessellationError::NoEarFound { remaining }),
                }
            }
        };
        if ring.removed[k] || !ring.is_ear(k) {
            continue;
        }

        if ring.turn(k) > 0.0 {
            triangles.push(ring.triangle(k));
        }
        let (p, n) = (ring.prev[k], ring.next[k]);
        ring.unlink(k);
        remaining -= 1;
        head = n;

        for neighbour in [p, n] {
            if ring.is_ear(neighbour) {
                queue.push_back(neighbour);
            }
        }
    }

    if ring.turn(head) != 0.0 {
        triangles.push(ring.triangle(head));
    }
    Ok(triangles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::geometry::signed_area2;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn total_area(vertices: &[Point], triangles: &[[usize; 3]]) -> f64 {
        triangles
            .iter()
            .map(|t| orient2d(vertices[t[0]], vertices[t[1]], vertices[t[2]]) * 0.5)
            .sum()
    }

    #[test]
    fn test_square_gives_two_triangles() {
        let verts = vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0), pt(0.0, 1.0)];
        let tris = triangulate_loop(&verts, &[0, 1, 2, 3]).unwrap();
        assert_eq!(tris.len(), 2);
        assert!((total_area(&verts, &tris) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_triangle_is_returned_unchanged() {
        let verts = vec![pt(0.0, 0.0), pt(4.0, 0.0), pt(0.0, 3.0)];
        let tris = triangulate_loop(&verts, &[2, 0, 1]).unwrap();
        assert_eq!(tris, vec![[2, 0, 1]]);
    }

    #[test]
    fn test_concave_loop() {
        // L shape
        let verts = vec![
            pt(0.0, 0.0), pt(2.0, 0.0), pt(2.0, 1.0),
            pt(1.0, 1.0), pt(1.0, 2.0), pt(0.0, 2.0),
        ];
        let idx: Vec<usize> = (0..6).collect();
        let tris = triangulate_loop(&verts, &idx).unwrap();
        assert_eq!(tris.len(), 4);
        assert!((total_area(&verts, &tris) - 3.0).abs() < 1e-12);
        for t in &tris {
            assert!(orient2d(verts[t[0]], verts[t[1]], verts[t[2]]) > 0.0);
        }
    }

    #[test]
    fn test_collinear_corners_emit_no_degenerate_triangles() {
        // Square with an extra midpoint on every side
        let verts = vec![
            pt(0.0, 0.0), pt(1.0, 0.0), pt(2.0, 0.0), pt(2.0, 1.0),
            pt(2.0, 2.0), pt(1.0, 2.0), pt(0.0, 2.0), pt(0.0, 1.0),
        ];
        let idx: Vec<usize> = (0..8).collect();
        let tris = triangulate_loop(&verts, &idx).unwrap();
        assert!(!tris.is_empty());
        for t in &tris {
            assert!(orient2d(verts[t[0]], verts[t[1]], verts[t[2]]).abs() > 0.0);
        }
        let area2 = signed_area2(&verts, &idx);
        assert!((total_area(&verts, &tris) - area2 * 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_reversed_loop_has_no_ears() {
        let verts = vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0), pt(0.0, 1.0)];
        let err = triangulate_loop(&verts, &[3, 2, 1, 0]).unwrap_err();
        assert_eq!(err, TessellationError::NoEarFound { remaining: 4 });
    }
}
