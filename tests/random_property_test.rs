//! Seeded randomized checks: star-shaped outlines with rectangular holes

use std::f64::consts::PI;

use outline_tess::draw::geometry::{orient2d, point_in_triangle, Point};
use outline_tess::draw::tessellation::tessellate_loops;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Outline star-shaped around the origin, radii in [5, 10]
fn random_star(rng: &mut StdRng) -> Vec<Point> {
    let n = rng.random_range(12..40);
    let step = 2.0 * PI / n as f64;
    (0..n)
        .map(|k| {
            let angle = k as f64 * step + rng.random_range(0.0..0.5) * step;
            let radius = rng.random_range(5.0..10.0);
            Point::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// Up to four holes, one per quadrant cell, well inside radius 4.3
fn random_holes(rng: &mut StdRng) -> Vec<Vec<Point>> {
    let cells = [(-3.0, -3.0), (0.3, -3.0), (-3.0, 0.3), (0.3, 0.3)];
    let mut holes = Vec::new();
    for &(cx, cy) in &cells {
        if rng.random_bool(0.25) {
            continue;
        }
        let x0 = cx + rng.random_range(0.0..1.0);
        let y0 = cy + rng.random_range(0.0..1.0);
        let x1 = x0 + rng.random_range(0.3..1.7);
        let y1 = y0 + rng.random_range(0.3..1.7);
        // Hole orientation
        holes.push(vec![
            Point::new(x0, y0),
            Point::new(x0, y1),
            Point::new(x1, y1),
            Point::new(x1, y0),
        ]);
    }
    holes
}

fn shoelace(points: &[Point]) -> f64 {
    let n = points.len();
    (0..n).map(|i| points[i].cross(points[(i + 1) % n])).sum::<f64>() * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_outlines_conserve_area() {
        for seed in 0..64u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let outer = random_star(&mut rng);
            let holes = random_holes(&mut rng);

            let expected = shoelace(&outer) + holes.iter().map(|h| shoelace(h)).sum::<f64>();
            let centres: Vec<Point> = holes
                .iter()
                .map(|h| Point::new((h[0].x + h[2].x) * 0.5, (h[0].y + h[2].y) * 0.5))
                .collect();

            let mut loops = vec![outer];
            loops.extend(holes);
            let mesh = tessellate_loops(loops)
                .unwrap_or_else(|e| panic!("seed {}: tessellation failed: {}", seed, e));

            assert!(
                (mesh.area() - expected).abs() < 1e-9 * expected,
                "seed {}: area {} vs {}",
                seed,
                mesh.area(),
                expected
            );

            for i in 0..mesh.triangle_count() {
                let [a, b, c] = mesh.triangle_points(i);
                assert!(orient2d(a, b, c) > 0.0, "seed {}: triangle {} is degenerate", seed, i);
                for &centre in &centres {
                    assert!(!point_in_triangle(centre, a, b, c), "seed {}: hole covered", seed);
                }
            }
        }
    }

    #[test]
    fn test_random_convex_fans_have_full_triangle_count() {
        for seed in 100..132u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let n = rng.random_range(3..50);
            let offset = rng.random_range(0.0..PI);
            let radius = rng.random_range(0.5..100.0);
            let ring: Vec<Point> = (0..n)
                .map(|k| {
                    let angle = offset + 2.0 * PI * k as f64 / n as f64;
                    Point::new(radius * angle.cos(), radius * angle.sin())
                })
                .collect();

            let mesh = tessellate_loops(vec![ring.clone()]).unwrap();
            assert_eq!(mesh.triangle_count(), n - 2, "seed {}", seed);
            assert!((mesh.area() - shoelace(&ring)).abs() < 1e-9 * shoelace(&ring));
        }
    }
}
