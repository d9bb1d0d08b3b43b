//! Tessellation module for glyph and vector outlines
//!
//! Turns closed outlines (path commands, point loops or explicit polygons
//! with holes) into triangle meshes for GPU rendering.
//!
//! # Submodules
//! - `options` - tunable parameters (curve resolution, simplification)
//! - `curve` - de Casteljau Bezier sampling
//! - `contour` - path commands to deduplicated closed loops, vertex arena
//! - `simplify` - Douglas-Peucker simplification of closed loops
//! - `classify` - outer/hole classification and hole anchoring
//! - `bridge` - hole elimination by bridging into the enclosing outer loop
//! - `earclip` - ear-clipping triangulation of a single loop

mod options;
mod curve;
mod contour;
mod simplify;
mod classify;
mod bridge;
mod earclip;

use crate::draw::geometry::{signed_area2, Mesh, Point, Polygon};
use crate::draw::parsing::PathCommand;
use crate::error::TessellationError;

pub use options::{TessellationOptions, DEFAULT_CURVE_RESOLUTION};

pub use curve::{de_casteljau, sample_bezier, sample_quadratic, sample_cubic};

pub use contour::{dedupe_loop, build_contours, ContourBuilder, Contours};

pub use simplify::{douglas_peucker, simplify_loop};

pub use classify::{
    LoopKind,
    ClassifiedLoops,
    classify_loop,
    classify_loops,
    min_anchor,
    max_anchor,
    rotate_to_max_anchor,
};

pub use bridge::{Bridge, find_bridge, splice_hole, eliminate_holes};

pub use earclip::triangulate_loop;

fn simplify_all(loops: Vec<Vec<Point>>, tolerance: f64) -> Vec<Vec<Point>> {
    if tolerance > 0.0 {
        loops.iter().map(|l| simplify_loop(l, tolerance)).collect()
    } else {
        loops
    }
}

/// Tessellate a shape given as a path command stream.
///
/// Loops are classified by orientation (positive at the min-x anchor is an
/// outer boundary, anything else a hole). An empty or fully degenerate
/// outline yields an empty mesh.
pub fn tessellate_path(commands: &[PathCommand], options: &TessellationOptions) -> Result<Mesh, TessellationError> {
    options.validate()?;
    let loops = build_contours(commands, options.curve_resolution);
    let loops = simplify_all(loops, options.simplify_tolerance);
    triangulate_contours(Contours::from_loops(loops))
}

/// Tessellate already-flattened closed loops, classified by orientation
pub fn tessellate_loops(loops: Vec<Vec<Point>>) -> Result<Mesh, TessellationError> {
    triangulate_contours(Contours::from_loops(loops))
}

/// Tessellate a polygon with holes.
///
/// Unlike [`tessellate_loops`], the roles are given by the caller: the
/// outer ring is rewound positive and every hole negative before bridging.
/// `tolerance > 0` simplifies every ring with Douglas-Peucker first.
pub fn tessellate_polygon(polygon: &Polygon, tolerance: f64) -> Result<Mesh, TessellationError> {
    let mut contours = Contours::default();

    let outer = simplify_all(vec![polygon.outer_ring.clone()], tolerance);
    let outer = outer.into_iter().next().unwrap_or_default();
    if !contours.push_loop(outer) {
        return Ok(Mesh::default());
    }
    let mut outers = contours.loops.clone();
    wind(&contours.vertices, &mut outers[0], true);

    let mut holes = Vec::with_capacity(polygon.holes.len());
    for ring in simplify_all(polygon.holes.clone(), tolerance) {
        if !contours.push_loop(ring) {
            continue;
        }
        if let Some(last) = contours.loops.last() {
            let mut hole = last.clone();
            wind(&contours.vertices, &mut hole, false);
            rotate_to_max_anchor(&contours.vertices, &mut hole);
            holes.push(hole);
        }
    }

    finish(contours, outers, holes)
}

fn wind(vertices: &[Point], indices: &mut [usize], positive: bool) {
    if (signed_area2(vertices, indices) > 0.0) != positive {
        indices.reverse();
    }
}

/// Classify, bridge and clip every loop of an arena
pub fn triangulate_contours(contours: Contours) -> Result<Mesh, TessellationError> {
    let ClassifiedLoops { outers, holes } = classify_loops(&contours);
    finish(contours, outers, holes)
}

fn finish(mut contours: Contours, mut outers: Vec<Vec<usize>>, holes: Vec<Vec<usize>>) -> Result<Mesh, TessellationError> {
    eliminate_holes(&mut contours, &mut outers, holes)?;

    let mut triangles = Vec::new();
    for outer in &outers {
        triangles.extend(triangulate_loop(&contours.vertices, outer)?);
    }

    tracing::debug!(
        loops = outers.len(),
        vertices = contours.vertices.len(),
        triangles = triangles.len(),
        "tessellated shape"
    );
    Ok(Mesh::new(contours.vertices, triangles))
}
