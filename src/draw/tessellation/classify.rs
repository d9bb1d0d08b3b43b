//! Contour classification into outer boundaries and holes

use super::contour::Contours;
use crate::draw::geometry::{orient2d, Point};

/// Role of a closed loop within its shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopKind {
    Outer,
    Hole,
}

/// Position (within `indices`) of the loop's minimum-x vertex, ties broken
/// by minimum y
pub fn min_anchor(vertices: &[Point], indices: &[usize]) -> usize {
    let mut best = 0;
    for (pos, &i) in indices.iter().enumerate().skip(1) {
        let p = vertices[i];
        let b = vertices[indices[best]];
        if p.x < b.x || (p.x == b.x && p.y < b.y) {
            best = pos;
        }
    }
    best
}

/// Position (within `indices`) of the loop's maximum-x vertex, ties broken
/// by maximum y
pub fn max_anchor(vertices: &[Point], indices: &[usize]) -> usize {
    let mut best = 0;
    for (pos, &i) in indices.iter().enumerate().skip(1) {
        let p = vertices[i];
        let b = vertices[indices[best]];
        if p.x > b.x || (p.x == b.x && p.y > b.y) {
            best = pos;
        }
    }
    best
}

/// Classify one loop by the turn at its min-x anchor.
///
/// The y axis points down, so a positive turn marks an outer loop and a
/// zero or negative turn marks a hole. A loop of fewer than three vertices
/// has no turn and is reported as a hole.
pub fn classify_loop(vertices: &[Point], indices: &[usize]) -> LoopKind {
    let n = indices.len();
    if n < 3 {
        return LoopKind::Hole;
    }
    let a = min_anchor(vertices, indices);
    let prev = vertices[indices[(a + n - 1) % n]];
    let anchor = vertices[indices[a]];
    let next = vertices[indices[(a + 1) % n]];
    if orient2d(prev, anchor, next) > 0.0 {
        LoopKind::Outer
    } else {
        LoopKind::Hole
    }
}

/// Rotate a hole so its max-x anchor comes first; bridging reads the first
/// vertex as the bridge endpoint.
pub fn rotate_to_max_anchor(vertices: &[Point], indices: &mut [usize]) {
    let a = max_anchor(vertices, indices);
    indices.rotate_left(a);
}

/// Outer loops and anchored holes of one shape
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedLoops {
    pub outers: Vec<Vec<usize>>,
    pub holes: Vec<Vec<usize>>,
}

/// Split every loop of the arena into outers and (rotated) holes
pub fn classify_loops(contours: &Contours) -> ClassifiedLoops {
    let mut classified = ClassifiedLoops::default();
    for indices in &contours.loops {
        match classify_loop(&contours.vertices, indices) {
            LoopKind::Outer => classified.outers.push(indices.clone()),
            LoopKind::Hole => {
                let mut hole = indices.clone();
                rotate_to_max_anchor(&contours.vertices, &mut hole);
                classified.holes.push(hole);
            }
        }
    }
    tracing::debug!(
        outers = classified.outers.len(),
        holes = classified.holes.len(),
        "classified contours"
    );
    classified
}
