//! Polygon triangulation: randomized ear clipping and Delaunay.
//!
//! # Algorithm
//!
//! Ear clipping works on a counter-clockwise copy of the vertices:
//! - a candidate vertex is drawn at random from a pool of untried ones
//! - it forms an ear if its turn is strictly convex and no other
//!   remaining vertex lies inside (or on) the candidate triangle
//! - an accepted ear is emitted, its tip is removed and the pool refills
//!
//! The walk ends at 3 remaining vertices, which form the last triangle.
//! If every remaining vertex has been tried without success (a
//! self-intersecting or badly degenerate input), the triangles found so
//! far are returned.
//!
//! # Complexity
//!
//! - Time: O(n³) worst case, O(n²) typical
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use polyshape::polygon::Polygon;
//! use polyshape::Point2;
//! use rand::SeedableRng;
//!
//! let square: Polygon<f64> = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ]);
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let triangles = square.triangulate_with_rng(&mut rng);
//! assert_eq!(triangles.len(), 2);
//! assert!((triangles.area() - 1.0).abs() < 1e-12);
//! ```

use super::Polygon;
use crate::primitives::Triangle2;
use crate::triangulation::{delaunay_triangulation, Triangulation};
use num_traits::Float;
use rand::Rng;
use tracing::debug;

impl<F: Float> Polygon<F> {
    /// Ear-clipping triangulation using the thread-local RNG.
    pub fn triangulate(&self) -> Triangulation<F> {
        self.triangulate_with_rng(&mut rand::thread_rng())
    }

    /// Ear-clipping triangulation drawing candidates from `rng`.
    ///
    /// Degenerate polygons give an empty triangulation; a triangle gives
    /// itself. Output triangles are counter-clockwise.
    pub fn triangulate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Triangulation<F> {
        let n = self.len();
        if n < 3 {
            return Triangulation::new();
        }

        let mut working = self.points().to_vec();
        if self.is_clockwise() {
            working.reverse();
        }

        let mut triangles = Vec::with_capacity(n - 2);
        let mut pool: Vec<usize> = (0..working.len()).collect();

        while working.len() > 3 {
            if pool.is_empty() {
                debug!(
                    vertices = n,
                    remaining = working.len(),
                    emitted = triangles.len(),
                    "ear clipping stalled, returning partial triangulation"
                );
                return Triangulation::from(triangles);
            }

            let i = pool.swap_remove(rng.gen_range(0..pool.len()));
            let m = working.len();
            let ear = Triangle2::new(working[(i + m - 1) % m], working[i], working[(i + 1) % m]);

            if (ear.b - ear.a).cross(ear.c - ear.b) <= F::zero() {
                continue;
            }
            let blocked = working
                .iter()
                .any(|&p| !ear.has_corner(p) && ear.contains_point(p));
            if blocked {
                continue;
            }

            triangles.push(ear);
            working.remove(i);
            pool.clear();
            pool.extend(0..working.len());
        }

        triangles.push(Triangle2::new(working[0], working[1], working[2]));
        Triangulation::from(triangles)
    }

    /// Delaunay triangulation of the vertices.
    ///
    /// Covers the convex hull of the vertices, so concave polygons get
    /// triangles outside their boundary.
    pub fn triangulate_delaunay(&self) -> Triangulation<F> {
        delaunay_triangulation(self.points())
    }
}
