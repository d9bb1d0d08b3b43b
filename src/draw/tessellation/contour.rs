//! Contour building: path commands to closed point loops, and the shared
//! vertex arena the rest of the pipeline indexes into.

use super::curve::{sample_cubic, sample_quadratic};
use crate::draw::geometry::{signed_area2, Point};
use crate::draw::parsing::PathCommand;

/// Collapse consecutive identical points and strip explicit closing
/// duplicates (last point equal to the first). Idempotent.
pub fn dedupe_loop(points: &mut Vec<Point>) {
    points.dedup();
    while points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
}

/// Accumulates path commands into closed loops
pub struct ContourBuilder {
    resolution: u32,
    loops: Vec<Vec<Point>>,
    current: Vec<Point>,
    start: Point,
    cursor: Point,
    open: bool,
    /// Start point of the sub-path closed last; drawing after a close
    /// continues from there
    reopen_at: Option<Point>,
}

impl ContourBuilder {
    pub fn new(resolution: u32) -> Self {
        ContourBuilder {
            resolution,
            loops: Vec::new(),
            current: Vec::new(),
            start: Point::default(),
            cursor: Point::default(),
            open: false,
            reopen_at: None,
        }
    }

    fn begin(&mut self, p: Point) {
        self.current.clear();
        self.current.push(p);
        self.start = p;
        self.cursor = p;
        self.open = true;
    }

    /// Drawing with no open sub-path starts one (canvas semantics)
    fn ensure_subpath(&mut self, first: Point) {
        if !self.open {
            let at = self.reopen_at.take().unwrap_or(first);
            self.begin(at);
        }
    }

    fn close_current(&mut self) {
        let mut points = std::mem::take(&mut self.current);
        points.push(self.start);
        dedupe_loop(&mut points);
        self.loops.push(points);
        self.open = false;
        self.cursor = self.start;
    }

    pub fn push(&mut self, command: &PathCommand) {
        match *command {
            PathCommand::MoveTo { x, y } => {
                if self.open {
                    tracing::trace!("implicitly closing sub-path before move_to");
                    self.close_current();
                }
                self.reopen_at = None;
                self.begin(Point::new(x, y));
            }
            PathCommand::LineTo { x, y } => {
                let p = Point::new(x, y);
                self.ensure_subpath(p);
                self.current.push(p);
                self.cursor = p;
            }
            PathCommand::QuadTo { cx, cy, x, y } => {
                let c = Point::new(cx, cy);
                let p = Point::new(x, y);
                self.ensure_subpath(c);
                let samples = sample_quadratic(self.cursor, c, p, self.resolution);
                self.current.extend(samples.into_iter().skip(1));
                self.cursor = p;
            }
            PathCommand::CubicTo { c1x, c1y, c2x, c2y, x, y } => {
                let c1 = Point::new(c1x, c1y);
                let c2 = Point::new(c2x, c2y);
                let p = Point::new(x, y);
                self.ensure_subpath(c1);
                let samples = sample_cubic(self.cursor, c1, c2, p, self.resolution);
                self.current.extend(samples.into_iter().skip(1));
                self.cursor = p;
            }
            PathCommand::Close => {
                if self.open {
                    let start = self.start;
                    self.close_current();
                    self.reopen_at = Some(start);
                }
            }
        }
    }

    /// Close any open sub-path and return every loop built so far
    pub fn finish(mut self) -> Vec<Vec<Point>> {
        if self.open {
            tracing::trace!("implicitly closing trailing sub-path");
            self.close_current();
        }
        self.loops
    }
}

/// Flatten a command stream into closed, deduplicated point loops
pub fn build_contours(commands: &[PathCommand], resolution: u32) -> Vec<Vec<Point>> {
    let mut builder = ContourBuilder::new(resolution);
    for command in commands {
        builder.push(command);
    }
    builder.finish()
}

/// Vertex arena shared by every loop of one shape
///
/// Loops hold indices into `vertices`. The arena only grows during a
/// tessellation pass (hole bridging appends duplicates); it never shrinks.
#[derive(Debug, Clone, Default)]
pub struct Contours {
    pub vertices: Vec<Point>,
    pub loops: Vec<Vec<usize>>,
}

impl Contours {
    /// Move point loops into a fresh arena, dropping degenerate ones
    /// (fewer than three distinct points, or zero area).
    pub fn from_loops(loops: Vec<Vec<Point>>) -> Self {
        let mut contours = Contours::default();
        for points in loops {
            contours.push_loop(points);
        }
        contours
    }

    /// Append a loop; returns false if it was dropped as degenerate or
    /// carries a NaN or infinite coordinate
    pub fn push_loop(&mut self, mut points: Vec<Point>) -> bool {
        if let Some(bad) = points.iter().find(|p| !p.is_finite()) {
            tracing::warn!(x = bad.x, y = bad.y, "dropping contour with non-finite point");
            return false;
        }
        dedupe_loop(&mut points);
        if points.len() < 3 {
            tracing::warn!(points = points.len(), "dropping degenerate contour");
            return false;
        }
        let base = self.vertices.len();
        let indices: Vec<usize> = (base..base + points.len()).collect();
        self.vertices.extend(points);
        if signed_area2(&self.vertices, &indices) == 0.0 {
            tracing::warn!(points = indices.len(), "dropping zero-area contour");
            self.vertices.truncate(base);
            return false;
        }
        self.loops.push(indices);
        true
    }

    /// Append a vertex to the arena, returning its index
    pub fn push_vertex(&mut self, p: Point) -> usize {
        self.vertices.push(p);
        self.vertices.len() - 1
    }
}
