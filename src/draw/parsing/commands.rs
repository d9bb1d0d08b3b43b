//! Path commands
//!
//! The contour source (font outline extraction, shape generators, SVG path
//! data) hands the tessellator an ordered stream of these commands.

use crate::draw::geometry::Point;
use serde::{Deserialize, Serialize};

/// Cubic control-point distance that approximates a quarter circle
const KAPPA: f64 = 0.552_284_749_830_793_4;

/// One outline drawing command
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    QuadTo { cx: f64, cy: f64, x: f64, y: f64 },
    CubicTo { c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64 },
    Close,
}

impl PathCommand {
    /// End point of the command, if it has one
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathCommand::MoveTo { x, y }
            | PathCommand::LineTo { x, y }
            | PathCommand::QuadTo { x, y, .. }
            | PathCommand::CubicTo { x, y, .. } => Some(Point::new(x, y)),
            PathCommand::Close => None,
        }
    }
}

/// Which side of a generated shape is filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Winding {
    /// Positive turn at the leftmost vertex: bounds filled area
    #[default]
    Outer,
    /// Opposite orientation: cuts a hole out of the enclosing outer loop
    Hole,
}

/// Outline path built from commands
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::MoveTo { x, y });
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::LineTo { x, y });
    }

    /// Quadratic Bezier through control point `(cx, cy)`
    pub fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.commands.push(PathCommand::QuadTo { cx, cy, x, y });
    }

    /// Cubic Bezier through control points `(c1x, c1y)` and `(c2x, c2y)`
    pub fn cubic_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        self.commands.push(PathCommand::CubicTo { c1x, c1y, c2x, c2y, x, y });
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// Closed axis-aligned rectangle
    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, winding: Winding) {
        self.move_to(x, y);
        match winding {
            Winding::Outer => {
                self.line_to(x + width, y);
                self.line_to(x + width, y + height);
                self.line_to(x, y + height);
            }
            Winding::Hole => {
                self.line_to(x, y + height);
                self.line_to(x + width, y + height);
                self.line_to(x + width, y);
            }
        }
        self.close();
    }

    /// Closed ellipse made of four cubic quarter arcs
    pub fn ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, winding: Winding) {
        let kx = rx * KAPPA;
        // Flipping the y radius mirrors the arcs and reverses the loop
        let ry = match winding {
            Winding::Outer => ry,
            Winding::Hole => -ry,
        };
        let ky = ry * KAPPA;

        self.move_to(cx + rx, cy);
        self.cubic_to(cx + rx, cy + ky, cx + kx, cy + ry, cx, cy + ry);
        self.cubic_to(cx - kx, cy + ry, cx - rx, cy + ky, cx - rx, cy);
        self.cubic_to(cx - rx, cy - ky, cx - kx, cy - ry, cx, cy - ry);
        self.cubic_to(cx + kx, cy - ry, cx + rx, cy - ky, cx + rx, cy);
        self.close();
    }

    /// Append all commands of another path
    pub fn extend_from(&mut self, other: &Path) {
        self.commands.extend_from_slice(&other.commands);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<PathCommand> {
        self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl From<Vec<PathCommand>> for Path {
    fn from(commands: Vec<PathCommand>) -> Self {
        Path { commands }
    }
}
