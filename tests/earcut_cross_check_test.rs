//! Compares covered area against earcutr on the same rings

use outline_tess::draw::geometry::{Point, Polygon};
use outline_tess::draw::tessellation::{build_contours, tessellate_polygon, DEFAULT_CURVE_RESOLUTION};
use outline_tess::{Path, Winding};

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Area covered by earcut's triangulation of the polygon
fn earcut_area(polygon: &Polygon) -> f64 {
    let mut flat: Vec<f64> = Vec::new();
    let mut hole_indices: Vec<usize> = Vec::new();
    for p in &polygon.outer_ring {
        flat.push(p.x);
        flat.push(p.y);
    }
    for hole in &polygon.holes {
        hole_indices.push(flat.len() / 2);
        for p in hole {
            flat.push(p.x);
            flat.push(p.y);
        }
    }

    let indices = earcutr::earcut(&flat, &hole_indices, 2).expect("earcut failed");
    indices
        .chunks_exact(3)
        .map(|t| {
            let a = pt(flat[t[0] * 2], flat[t[0] * 2 + 1]);
            let b = pt(flat[t[1] * 2], flat[t[1] * 2 + 1]);
            let c = pt(flat[t[2] * 2], flat[t[2] * 2 + 1]);
            ((b - a).cross(c - a) * 0.5).abs()
        })
        .sum()
}

fn assert_same_area(name: &str, polygon: &Polygon) {
    let mesh = tessellate_polygon(polygon, 0.0).expect("tessellation failed");
    let ours = mesh.area();
    let theirs = earcut_area(polygon);
    println!("{}: ours={:.6} earcut={:.6} ({} triangles)", name, ours, theirs, mesh.triangle_count());
    assert!((ours - theirs).abs() < 1e-9 * theirs.max(1.0), "{}: {} vs {}", name, ours, theirs);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_with_hole_matches_earcut() {
        let polygon = Polygon::new(vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0), pt(0.0, 1.0)])
            .with_hole(vec![pt(0.4, 0.4), pt(0.4, 0.6), pt(0.6, 0.6), pt(0.6, 0.4)]);
        assert_same_area("square", &polygon);
    }

    #[test]
    fn test_concave_outline_with_holes_matches_earcut() {
        // U shape with a hole in each arm
        let polygon = Polygon::new(vec![
            pt(0.0, 0.0), pt(3.0, 0.0), pt(3.0, 7.0), pt(5.0, 7.0), pt(5.0, 0.0),
            pt(8.0, 0.0), pt(8.0, 10.0), pt(0.0, 10.0),
        ])
        .with_hole(vec![pt(1.0, 1.0), pt(1.0, 5.0), pt(2.0, 5.0), pt(2.0, 1.0)])
        .with_hole(vec![pt(6.0, 1.0), pt(6.0, 5.0), pt(7.0, 5.0), pt(7.0, 1.0)]);
        assert_same_area("u-shape", &polygon);
    }

    #[test]
    fn test_flattened_ring_matches_earcut() {
        let mut path = Path::new();
        path.ellipse(0.0, 0.0, 10.0, 6.0, Winding::Outer);
        path.ellipse(1.0, 0.0, 4.0, 3.0, Winding::Hole);
        let mut loops = build_contours(path.commands(), DEFAULT_CURVE_RESOLUTION).into_iter();
        let outer = loops.next().unwrap();
        let hole = loops.next().unwrap();
        assert_same_area("ring", &Polygon::new(outer).with_hole(hole));
    }

    #[test]
    fn test_many_small_holes_match_earcut() {
        let mut polygon = Polygon::new(vec![pt(0.0, 0.0), pt(20.0, 0.0), pt(20.0, 12.0), pt(0.0, 12.0)]);
        for row in 0..3 {
            for col in 0..5 {
                let x = 1.0 + col as f64 * 3.8;
                let y = 1.0 + row as f64 * 3.7;
                polygon = polygon.with_hole(vec![
                    pt(x, y),
                    pt(x + 2.0 + 0.1 * row as f64, y + 0.3),
                    pt(x + 1.5, y + 2.5 - 0.1 * col as f64),
                ]);
            }
        }
        assert_same_area("grid", &polygon);
    }
}
