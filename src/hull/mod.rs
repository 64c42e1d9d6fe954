//! Convex hull by gift wrapping (Jarvis march).
//!
//! # Example
//!
//! ```
//! use polyshape::hull::convex_hull;
//! use polyshape::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 0.5), // interior
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ];
//!
//! let hull = convex_hull(&points);
//! assert_eq!(hull.len(), 4);
//! assert_eq!(hull[0], Point2::new(0.0, 0.0));
//! ```

use crate::polygon::{dedup_exact, Polygon};
use crate::primitives::Point2;
use num_traits::Float;

/// Computes the convex hull of `points` in counter-clockwise order.
///
/// Starts at the lowest-x point (lowest y on ties) and repeatedly wraps
/// to the point with no other point on its clockwise side. Collinear
/// candidates resolve to the farther point, so hull vertices lying on a
/// straight edge are skipped.
///
/// Exact duplicates are ignored. Fewer than 3 distinct points are returned
/// as they are; fully collinear input yields its two extremes.
///
/// # Complexity
///
/// O(n·h) for `h` hull vertices.
pub fn convex_hull<F: Float>(points: &[Point2<F>]) -> Vec<Point2<F>> {
    let pts = dedup_exact(points);
    if pts.len() < 3 {
        return pts;
    }

    let start = (1..pts.len()).fold(0, |best, i| {
        let (p, b) = (pts[i], pts[best]);
        if p.x < b.x || (p.x == b.x && p.y < b.y) {
            i
        } else {
            best
        }
    });

    let mut hull = Vec::new();
    let mut current = start;

    // Each wrap step adds one hull vertex, so `pts.len()` steps suffice.
    for _ in 0..pts.len() {
        hull.push(pts[current]);

        let origin = pts[current];
        let mut next = if current == 0 { 1 } else { 0 };
        for (i, &candidate) in pts.iter().enumerate() {
            if i == current {
                continue;
            }
            let cross = (pts[next] - origin).cross(candidate - origin);
            let farther = origin.distance_squared(candidate) > origin.distance_squared(pts[next]);
            if cross < F::zero() || (cross == F::zero() && farther) {
                next = i;
            }
        }

        current = next;
        if current == start {
            break;
        }
    }

    hull
}

impl<F: Float> Polygon<F> {
    /// Convex hull of this polygon's vertices.
    pub fn convex_hull(&self) -> Polygon<F> {
        Polygon::from_convex_hull(self.points())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::polygon_signed_area;

    #[test]
    fn test_few_points() {
        assert!(convex_hull::<f64>(&[]).is_empty());

        let one = [Point2::new(1.0_f64, 2.0)];
        assert_eq!(convex_hull(&one), one.to_vec());

        let dup = [Point2::new(1.0_f64, 2.0), Point2::new(1.0, 2.0), Point2::new(3.0, 0.0)];
        assert_eq!(convex_hull(&dup).len(), 2);
    }

    #[test]
    fn test_collinear_keeps_extremes() {
        let pts: Vec<Point2<f64>> = (0..5).map(|i| Point2::new(i as f64, i as f64)).collect();
        let hull = convex_hull(&pts);
        assert_eq!(hull, vec![Point2::new(0.0, 0.0), Point2::new(4.0, 4.0)]);
    }

    #[test]
    fn test_ccw_and_skips_edge_points() {
        let pts = vec![
            Point2::new(2.0_f64, 2.0),
            Point2::new(0.0, 2.0),
            Point2::new(1.0, 0.0), // on the bottom edge
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(1.0, 1.0),
        ];
        let hull = convex_hull(&pts);
        assert_eq!(
            hull,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(2.0, 0.0),
                Point2::new(2.0, 2.0),
                Point2::new(0.0, 2.0),
            ]
        );
        assert!(polygon_signed_area(&hull) > 0.0);
    }

    #[test]
    fn test_seed_prefers_lowest_y_on_tie() {
        let pts = vec![
            Point2::new(0.0_f64, 3.0),
            Point2::new(0.0, -1.0),
            Point2::new(4.0, 1.0),
        ];
        assert_eq!(convex_hull(&pts)[0], Point2::new(0.0, -1.0));
    }

    #[test]
    fn test_idempotent() {
        let pts: Vec<Point2<f64>> = (0..12)
            .map(|i| {
                let a = i as f64 * 0.7;
                Point2::new(a.cos() * (1.0 + (i % 3) as f64), a.sin() * 2.0)
            })
            .collect();
        let once = convex_hull(&pts);
        assert_eq!(convex_hull(&once), once);
    }

    #[test]
    fn test_polygon_hull() {
        let concave = Polygon::new(vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(4.0, 0.0),
            Point2::new(2.0, 4.0),
        ]);
        let hull = concave.convex_hull();
        assert_eq!(hull.len(), 3);
        assert!(hull.is_convex());
    }
}
