use std::f64::consts::PI;

use outline_tess::draw::geometry::{orient2d, Mesh, Point};
use outline_tess::draw::tessellation::{build_contours, tessellate_path, TessellationOptions};
use outline_tess::{Path, PathCommand, Winding};

/// Net signed area of the flattened contours (outers positive, holes negative)
fn contour_area(commands: &[PathCommand], resolution: u32) -> f64 {
    build_contours(commands, resolution)
        .iter()
        .map(|points| {
            let n = points.len();
            (0..n).map(|i| points[i].cross(points[(i + 1) % n])).sum::<f64>() * 0.5
        })
        .sum()
}

fn assert_well_formed(mesh: &Mesh) {
    for i in 0..mesh.triangle_count() {
        let [a, b, c] = mesh.triangle_points(i);
        assert!(orient2d(a, b, c) > 0.0, "triangle {} is degenerate or inverted", i);
    }
}

fn glyph_o() -> Path {
    let mut path = Path::new();
    path.ellipse(50.0, 50.0, 40.0, 45.0, Winding::Outer);
    path.ellipse(50.0, 50.0, 25.0, 30.0, Winding::Hole);
    path
}

fn glyph_i() -> Path {
    let mut path = Path::new();
    path.rect(0.0, 3.0, 1.0, 7.0, Winding::Outer);
    path.ellipse(0.5, 1.0, 0.5, 0.5, Winding::Outer);
    path
}

fn glyph_b() -> Path {
    let mut path = Path::new();
    path.move_to(0.0, 0.0);
    path.line_to(6.0, 0.0);
    path.cubic_to(9.0, 0.0, 9.0, 7.0, 6.0, 7.0);
    path.cubic_to(10.0, 7.0, 10.0, 14.0, 6.0, 14.0);
    path.line_to(0.0, 14.0);
    path.close();
    path.rect(2.0, 2.0, 3.0, 3.0, Winding::Hole);
    path.rect(2.0, 9.0, 3.0, 3.0, Winding::Hole);
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_o_ring() {
        let path = glyph_o();
        let options = TessellationOptions::default();
        let mesh = tessellate_path(path.commands(), &options).expect("'o' should tessellate");
        println!("'o': {} triangles, {} vertices", mesh.triangle_count(), mesh.vertices.len());

        let expected = contour_area(path.commands(), options.curve_resolution);
        assert!((mesh.area() - expected).abs() < 1e-6 * expected);

        let analytic = PI * (40.0 * 45.0 - 25.0 * 30.0);
        assert!((mesh.area() - analytic).abs() < 0.02 * analytic);

        // Counter stays empty
        for i in 0..mesh.triangle_count() {
            let [a, b, c] = mesh.triangle_points(i);
            assert!(!outline_tess::draw::geometry::point_in_triangle(Point::new(50.0, 50.0), a, b, c));
        }
        assert_well_formed(&mesh);
    }

    #[test]
    fn test_glyph_i_two_outers() {
        let path = glyph_i();
        let options = TessellationOptions::default();
        let mesh = tessellate_path(path.commands(), &options).unwrap();

        let expected = contour_area(path.commands(), options.curve_resolution);
        assert!((mesh.area() - expected).abs() < 1e-9);
        assert!(mesh.area() > 7.0 && mesh.area() < 7.0 + PI * 0.25);

        let bounds = mesh.bounds().unwrap();
        assert_eq!(bounds[1], 0.5);
        assert_eq!(bounds[3], 10.0);
        assert_well_formed(&mesh);
    }

    #[test]
    fn test_glyph_b_two_counters() {
        let path = glyph_b();
        let options = TessellationOptions::with_resolution(12);
        let mesh = tessellate_path(path.commands(), &options).unwrap();

        let expected = contour_area(path.commands(), options.curve_resolution);
        assert!((mesh.area() - expected).abs() < 1e-9, "area {} vs {}", mesh.area(), expected);
        assert_well_formed(&mesh);
    }

    #[test]
    fn test_resolution_refines_curves() {
        let path = glyph_o();
        let analytic = PI * (40.0 * 45.0 - 25.0 * 30.0);

        let coarse = tessellate_path(path.commands(), &TessellationOptions::with_resolution(2)).unwrap();
        let fine = tessellate_path(path.commands(), &TessellationOptions::with_resolution(16)).unwrap();

        assert!(fine.vertices.len() > coarse.vertices.len());
        assert!((fine.area() - analytic).abs() < (coarse.area() - analytic).abs());
    }

    #[test]
    fn test_simplification_thins_contours() {
        let path = glyph_o();
        let full = tessellate_path(path.commands(), &TessellationOptions::with_resolution(32)).unwrap();
        let options = TessellationOptions {
            curve_resolution: 32,
            simplify_tolerance: 0.05,
        };
        let thinned = tessellate_path(path.commands(), &options).unwrap();

        assert!(thinned.vertices.len() < full.vertices.len());
        assert!((thinned.area() - full.area()).abs() < 0.01 * full.area());
        assert_well_formed(&thinned);
    }
}
