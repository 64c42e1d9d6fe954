use polyshape::hull::convex_hull;
use polyshape::triangulation::{delaunay_triangulation, in_circumcircle, supra_triangle};
use polyshape::{Circle2, Point2, Polygon};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn star(seed: u64, count: usize) -> Polygon<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    Polygon::generate(Point2::new(0.0, 0.0), count, 1.0, 5.0, &mut rng)
}

/// Comb with `teeth` teeth of random height, every vertex nudged a little.
fn comb(seed: u64, teeth: usize) -> Polygon<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let width = (2 * teeth - 1) as f64;
    let mut points = vec![Point2::new(0.0, 0.0), Point2::new(width, 0.0)];
    for i in (0..teeth).rev() {
        let x = 2.0 * i as f64;
        let top = 1.0 + rng.gen_range(1.0..4.0);
        points.push(Point2::new(x + 1.0, top));
        points.push(Point2::new(x, top));
        if i > 0 {
            points.push(Point2::new(x, 1.0));
            points.push(Point2::new(x - 1.0, 1.0));
        }
    }
    for p in &mut points {
        p.x += rng.gen_range(-0.05..0.05);
        p.y += rng.gen_range(-0.05..0.05);
    }
    Polygon::new(points)
}

/// Band wound one and a half turns around the origin, starting at `phase`.
fn spiral(phase: f64) -> Polygon<f64> {
    const STEPS: usize = 48;
    let at = |i: usize, base: f64| {
        let t = 3.0 * std::f64::consts::PI * i as f64 / (STEPS - 1) as f64;
        let r = base + 0.3 * t;
        Point2::new(r * (t + phase).cos(), r * (t + phase).sin())
    };
    let outer = (0..STEPS).map(|i| at(i, 1.0));
    let inner = (0..STEPS).rev().map(|i| at(i, 0.5));
    Polygon::new(outer.chain(inner).collect())
}

fn grid_points(raw: &[(i32, i32)]) -> Vec<Point2<f64>> {
    raw.iter()
        .map(|&(x, y)| Point2::new(x as f64, y as f64))
        .collect()
}

proptest! {
    /// Reversal flips the winding of any polygon with area.
    #[test]
    fn reverse_flips_winding(seed in any::<u64>(), count in 3usize..24) {
        let poly = star(seed, count);
        prop_assume!(poly.area() > 1e-9);
        prop_assert_eq!(poly.reversed().is_clockwise(), !poly.is_clockwise());
    }

    /// Reversal negates the signed area and keeps its magnitude.
    #[test]
    fn reverse_negates_area(seed in any::<u64>(), count in 3usize..24) {
        let poly = star(seed, count);
        let reversed = poly.reversed();
        prop_assert!((reversed.signed_area() + poly.signed_area()).abs() < 1e-9);
        prop_assert!((reversed.area() - poly.area()).abs() < 1e-9);
        prop_assert!(poly.area() >= 0.0);
    }

    /// Regular n-gons have their centroid at the circle centre.
    #[test]
    fn regular_ngon_centroid(
        cx in -100.0f64..100.0,
        cy in -100.0f64..100.0,
        r in 0.1f64..50.0,
        n in 3usize..64,
    ) {
        let poly = Polygon::from_circle(&Circle2::new(Point2::new(cx, cy), r), n);
        let c = poly.centroid().unwrap();
        prop_assert!((c.x - cx).abs() < 1e-6 * r.max(1.0));
        prop_assert!((c.y - cy).abs() < 1e-6 * r.max(1.0));
    }

    /// Ear clipping of a simple polygon yields n - 2 triangles covering
    /// exactly its area.
    #[test]
    fn ear_clipping_conserves_area(seed in any::<u64>(), count in 3usize..24) {
        let poly = star(seed, count);
        prop_assume!(poly.area() > 1e-6);
        let triangles = poly.triangulate_with_rng(&mut StdRng::seed_from_u64(seed ^ 0x5eed));
        prop_assert_eq!(triangles.len(), count - 2);
        prop_assert!((triangles.area() - poly.area()).abs() < 1e-9 * poly.area().max(1.0));
    }

    /// Ear clipping also conserves the area of polygons that are not
    /// star-shaped.
    #[test]
    fn ear_clipping_handles_comb_and_spiral(
        seed in any::<u64>(),
        teeth in 2usize..9,
        phase in 0.0f64..std::f64::consts::TAU,
    ) {
        for poly in [comb(seed, teeth), spiral(phase)] {
            let n = poly.len();
            let triangles = poly.triangulate_with_rng(&mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(triangles.len(), n - 2);
            prop_assert!((triangles.area() - poly.area()).abs() < 1e-9 * poly.area());
            for tri in triangles.iter() {
                prop_assert!(tri.signed_area() > 0.0);
            }
        }
    }

    /// The hull of a hull is itself.
    #[test]
    fn hull_is_idempotent(raw in prop::collection::vec((-50i32..50, -50i32..50), 0..40)) {
        let points = grid_points(&raw);
        let hull = convex_hull(&points);
        prop_assert_eq!(convex_hull(&hull), hull);
    }

    /// Every input point lies inside or on the hull, which winds
    /// counter-clockwise.
    #[test]
    fn hull_contains_inputs(raw in prop::collection::vec((-50i32..50, -50i32..50), 3..40)) {
        let points = grid_points(&raw);
        let hull = Polygon::from_convex_hull(&points);
        prop_assume!(hull.len() >= 3);
        prop_assert!(hull.signed_area() > 0.0);
        prop_assert!(hull.is_convex());
        for p in points {
            let on_boundary = hull.distance_squared_to(p).unwrap() < 1e-12;
            prop_assert!(hull.contains_point(p) || on_boundary);
        }
    }

    /// Point overlap is point containment, a contained point overlaps as a
    /// zero-radius circle, and a contained circle overlaps.
    #[test]
    fn contains_implies_overlap(
        seed in any::<u64>(),
        count in 3usize..16,
        px in -6.0f64..6.0,
        py in -6.0f64..6.0,
        r in 0.01f64..3.0,
    ) {
        let poly = star(seed, count);
        let p = Point2::new(px, py);
        prop_assert_eq!(poly.overlaps_point(p), poly.contains_point(p));

        if poly.contains_point(p) {
            prop_assert!(poly.overlaps(&Circle2::new(p, 0.0)));
        }

        let circle = Circle2::new(p, r);
        if poly.contains_shape(&circle) {
            prop_assert!(poly.overlaps(&circle));
            prop_assert!(poly.contains_point(p));
        }
    }

    /// The closest boundary point is never farther than the nearest vertex.
    #[test]
    fn closest_point_bounded_by_vertices(
        seed in any::<u64>(),
        count in 3usize..16,
        px in -20.0f64..20.0,
        py in -20.0f64..20.0,
    ) {
        let poly = star(seed, count);
        let p = Point2::new(px, py);
        let result = poly.closest_point(p).unwrap();
        let nearest_vertex = poly
            .iter()
            .map(|v| v.distance_squared(p))
            .fold(f64::INFINITY, f64::min);
        prop_assert!(result.distance_squared <= nearest_vertex + 1e-12);
        prop_assert!(result.self_index < poly.len());
    }

    /// Delaunay triangles tile the convex hull of the input.
    #[test]
    fn delaunay_covers_hull(raw in prop::collection::vec((-50i32..50, -50i32..50), 3..40)) {
        let points = grid_points(&raw);
        let triangles = delaunay_triangulation(&points);
        let hull = Polygon::from_convex_hull(&points);
        prop_assert!((triangles.area() - hull.area()).abs() < 1e-9 * hull.area().max(1.0));
    }

    /// No Delaunay triangle keeps a supra-triangle corner, every corner is
    /// an input point and no input point is inside a circumcircle.
    #[test]
    fn delaunay_output_is_clean(raw in prop::collection::vec((-50i32..50, -50i32..50), 3..30)) {
        let points = grid_points(&raw);
        let triangles = delaunay_triangulation(&points);
        let Some(supra) = supra_triangle(&points) else {
            prop_assert!(triangles.is_empty());
            return Ok(());
        };

        for tri in triangles.iter() {
            prop_assert!(tri.signed_area() > 0.0);
            for corner in supra.points() {
                prop_assert!(!tri.has_corner(corner));
            }
            for corner in tri.points() {
                prop_assert!(points.contains(&corner));
            }
            for &p in &points {
                if !tri.has_corner(p) {
                    prop_assert!(!in_circumcircle(p, tri.a, tri.b, tri.c));
                }
            }
        }
    }
}
