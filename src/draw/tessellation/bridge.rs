//! Hole elimination
//!
//! Every hole is cut into the outer loop that encloses it through a bridge:
//! a pair of coincident edges from the hole's max-x anchor to a vertex of the
//! outer loop it can see. The bridged outer loop walks out to the hole, around
//! it, and back, so it is a single (weakly) simple polygon ear clipping can
//! consume directly.

use super::contour::Contours;
use crate::draw::geometry::{locally_inside, orient2d, point_in_triangle_inclusive, Point};
use crate::error::TessellationError;

/// Where a hole gets attached
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bridge {
    /// Index into the outer-loop list
    pub outer: usize,
    /// Position within that loop of the vertex the hole anchor connects to
    pub position: usize,
}

/// Nearest outer edge crossed by the ray from `o` towards +x.
///
/// Returns `(outer, edge start position, intersection x)`. Only edges whose
/// interior side faces `o` qualify, which picks the correct one of the two
/// coincident edges of an earlier bridge.
fn nearest_edge_crossing(vertices: &[Point], outers: &[Vec<usize>], o: Point) -> Option<(usize, usize, f64)> {
    let mut best: Option<(usize, usize, f64)> = None;
    for (li, outer) in outers.iter().enumerate() {
        let n = outer.len();
        for pos in 0..n {
            let a = vertices[outer[pos]];
            let b = vertices[outer[(pos + 1) % n]];
            // Horizontal edges are covered by their neighbours' endpoints
            if a.y == b.y {
                continue;
            }
            let straddles = (a.y <= o.y && o.y <= b.y) || (b.y <= o.y && o.y <= a.y);
            if !straddles || orient2d(a, b, o) <= 0.0 {
                continue;
            }
            let x = a.x + (o.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if x > o.x && best.map_or(true, |(_, _, bx)| x < bx) {
                best = Some((li, pos, x));
            }
        }
    }
    best
}

/// Find the outer vertex the hole anchor `o` bridges to
pub fn find_bridge(vertices: &[Point], outers: &[Vec<usize>], o: Point) -> Option<Bridge> {
    let (li, edge_pos, hit_x) = nearest_edge_crossing(vertices, outers, o)?;
    let outer = &outers[li];
    let n = outer.len();
    let c = Point::new(hit_x, o.y);

    // The edge's start vertex is the first guess. When it lies left of the
    // anchor the triangle below could reach holes not bridged yet, so the
    // end vertex (necessarily right of the anchor) is used instead.
    let end_pos = (edge_pos + 1) % n;
    let end = vertices[outer[end_pos]];
    let mut best_pos = edge_pos;
    if end == c || vertices[outer[edge_pos]].x <= o.x {
        best_pos = end_pos;
    }
    let candidate = vertices[outer[best_pos]];

    if candidate != c {
        // Any vertex inside (o, candidate, c) may hide the candidate from o.
        // Among those, the one making the smallest angle with the ray is
        // visible: score by the x component of the unit direction from o.
        let score = |p: Point| (p - o).normalized().x;
        let mut best_score = score(candidate);
        let mut best_dist = o.distance_to(candidate);

        for pos in 0..n {
            let r = vertices[outer[pos]];
            if pos == best_pos || r == candidate || r == o {
                continue;
            }
            if !point_in_triangle_inclusive(r, o, candidate, c) {
                continue;
            }
            let s = score(r);
            let d = o.distance_to(r);
            if s > best_score || (s == best_score && d < best_dist) {
                best_score = s;
                best_dist = d;
                best_pos = pos;
            }
        }
    }

    Some(Bridge {
        outer: li,
        position: resolve_duplicate(vertices, outer, best_pos, o),
    })
}

/// Earlier bridges leave coincident vertex pairs in the outer loop. Pick the
/// copy whose corner actually opens towards `o`.
fn resolve_duplicate(vertices: &[Point], outer: &[usize], pos: usize, o: Point) -> usize {
    let target = vertices[outer[pos]];
    let n = outer.len();
    let copies: Vec<usize> = (0..n).filter(|&q| vertices[outer[q]] == target).collect();
    if copies.len() < 2 {
        return pos;
    }
    copies
        .into_iter()
        .find(|&q| {
            let prev = vertices[outer[(q + n - 1) % n]];
            let next = vertices[outer[(q + 1) % n]];
            locally_inside(prev, target, next, o)
        })
        .unwrap_or(pos)
}

/// Splice `hole` into `outer` after `position`, closing the slit with fresh
/// duplicates of the hole anchor and of the bridged outer vertex.
pub fn splice_hole(contours: &mut Contours, outer: &[usize], position: usize, hole: &[usize]) -> Vec<usize> {
    let anchor = contours.vertices[hole[0]];
    let target = contours.vertices[outer[position]];
    let anchor_copy = contours.push_vertex(anchor);
    let target_copy = contours.push_vertex(target);

    let mut merged = Vec::with_capacity(outer.len() + hole.len() + 2);
    merged.extend_from_slice(&outer[..=position]);
    merged.extend_from_slice(hole);
    merged.push(anchor_copy);
    merged.push(target_copy);
    merged.extend_from_slice(&outer[position + 1..]);
    merged
}

/// Merge every hole into the outer loop that encloses it.
///
/// Holes must already be rotated so their max-x anchor comes first. They are
/// bridged right to left, so a bridge built earlier is never crossed by a
/// later one, and every search sees the current, already-bridged outers.
pub fn eliminate_holes(
    contours: &mut Contours,
    outers: &mut [Vec<usize>],
    mut holes: Vec<Vec<usize>>,
) -> Result<(), TessellationError> {
    holes.sort_by(|a, b| {
        let pa = contours.vertices[a[0]];
        let pb = contours.vertices[b[0]];
        pb.x.total_cmp(&pa.x)
    });

    for hole in &holes {
        let o = contours.vertices[hole[0]];
        let bridge = find_bridge(&contours.vertices, outers, o)
            .ok_or(TessellationError::UnenclosedHole { x: o.x, y: o.y })?;
        let merged = splice_hole(contours, &outers[bridge.outer], bridge.position, hole);
        tracing::trace!(
            anchor_x = o.x,
            anchor_y = o.y,
            outer = bridge.outer,
            "bridged hole"
        );
        outers[bridge.outer] = merged;
    }

    if !holes.is_empty() {
        tracing::debug!(holes = holes.len(), "eliminated holes");
    }
    Ok(())
}
