//! Core geometry types for outline tessellation
//!
//! Points are plain `f64` pairs. The y axis grows downward, matching the
//! font and canvas coordinate systems the outlines come from.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A 2D point (also used as a 2D vector)
///
/// Equality is exact coordinate equality. It is only meant for collapsing
/// duplicates that were sampled from the same coordinates, not for
/// geometric coincidence within a tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product
    pub fn cross(self, other: Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction; the zero vector stays zero
    pub fn normalized(self) -> Point {
        let len = self.length();
        if len == 0.0 {
            return self;
        }
        Point {
            x: self.x / len,
            y: self.y / len,
        }
    }

    /// Linear interpolation written as `a*(1-t) + b*t` so that `t == 0`
    /// and `t == 1` reproduce the endpoints bit for bit.
    pub fn lerp(self, other: Point, t: f64) -> Point {
        let s = 1.0 - t;
        Point {
            x: self.x * s + other.x * t,
            y: self.y * s + other.y * t,
        }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (other - self).length()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, s: f64) -> Point {
        Point {
            x: self.x * s,
            y: self.y * s,
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

/// Axis-aligned bounds as `[min_x, min_y, max_x, max_y]`
pub fn bounds_of(points: &[Point]) -> Option<[f64; 4]> {
    let first = points.first()?;
    let mut bounds = [first.x, first.y, first.x, first.y];
    for p in &points[1..] {
        bounds[0] = bounds[0].min(p.x);
        bounds[1] = bounds[1].min(p.y);
        bounds[2] = bounds[2].max(p.x);
        bounds[3] = bounds[3].max(p.y);
    }
    Some(bounds)
}

/// A filled region: one outer ring with optional holes
///
/// Rings are closed implicitly (the last point connects back to the first)
/// and may be wound either way; tessellation normalises the winding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub outer_ring: Vec<Point>,
    #[serde(default)]
    pub holes: Vec<Vec<Point>>,
}

impl Polygon {
    pub fn new(outer_ring: Vec<Point>) -> Self {
        Polygon { outer_ring, holes: Vec::new() }
    }

    pub fn with_hole(mut self, hole: Vec<Point>) -> Self {
        self.holes.push(hole);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_ops() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, -1.0);
        assert_eq!(a + b, Point::new(4.0, 1.0));
        assert_eq!(a - b, Point::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
        assert_eq!(a.dot(b), 1.0);
        assert_eq!(Point::new(1.0, 0.0).cross(Point::new(0.0, 1.0)), 1.0);
    }

    #[test]
    fn test_normalized() {
        let v = Point::new(3.0, 4.0).normalized();
        assert!((v.length() - 1.0).abs() < 1e-12);
        assert_eq!(Point::default().normalized(), Point::default());
    }

    #[test]
    fn test_lerp_endpoints_exact() {
        let a = Point::new(0.1, 0.7);
        let b = Point::new(0.3, 1.9);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn test_bounds() {
        let pts = [Point::new(1.0, 5.0), Point::new(-2.0, 3.0), Point::new(4.0, -1.0)];
        assert_eq!(bounds_of(&pts), Some([-2.0, -1.0, 4.0, 5.0]));
        assert_eq!(bounds_of(&[]), None);
    }
}
