//! An owned list of triangles and the queries that run over it.
//!
//! Queries delegate to each triangle in turn. Point and shape containment
//! and overlap stop at the first matching triangle; closest-point queries
//! scan everything and keep the strictly closest result; intersection
//! collects hits per triangle index.
//!
//! # Example
//!
//! ```
//! use polyshape::triangulation::Triangulation;
//! use polyshape::{Circle2, Point2};
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ];
//! let mesh = Triangulation::delaunay(&points);
//!
//! assert_eq!(mesh.len(), 2);
//! assert!(mesh.contains_point(Point2::new(1.5, 0.5)));
//! assert!(mesh.overlaps(&Circle2::new(Point2::new(3.0, 1.0), 1.5)));
//! ```

use super::delaunay::delaunay_triangulation;
use crate::config::SubdivideConfig;
use crate::error::GeomError;
use crate::polygon::{dedup_exact, Polygon};
use crate::primitives::{Point2, Segment2, Triangle2};
use crate::query::{edges, ClosestPointResult, IntersectionMap, Shape2};
use num_traits::Float;
use rand::distributions::WeightedIndex;
use rand::Rng;
use std::collections::VecDeque;
use std::ops::Index;
use tracing::debug;

/// A collection of triangles with no overlap or connectivity invariant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Triangulation<F> {
    triangles: Vec<Triangle2<F>>,
}

impl<F: Float> Triangulation<F> {
    /// Empty collection.
    #[inline]
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    /// Delaunay triangulation of `points`, see
    /// [`delaunay_triangulation`](super::delaunay_triangulation).
    pub fn delaunay(points: &[Point2<F>]) -> Self {
        delaunay_triangulation(points)
    }

    #[inline]
    pub fn push(&mut self, triangle: Triangle2<F>) {
        self.triangles.push(triangle);
    }

    /// Number of triangles.
    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Triangle2<F>> {
        self.triangles.iter()
    }

    #[inline]
    pub fn triangles(&self) -> &[Triangle2<F>] {
        &self.triangles
    }

    /// Consumes the collection, returning its triangles.
    pub fn into_triangles(self) -> Vec<Triangle2<F>> {
        self.triangles
    }

    /// Sum of the absolute triangle areas.
    pub fn area(&self) -> F {
        self.triangles
            .iter()
            .fold(F::zero(), |acc, t| acc + t.area())
    }

    /// Copy without the triangles whose area is below `threshold`.
    pub fn with_min_area(&self, threshold: F) -> Self {
        self.triangles
            .iter()
            .filter(|t| t.area() >= threshold)
            .copied()
            .collect()
    }

    /// Drops triangles whose area is below `threshold`. Returns how many
    /// were removed.
    pub fn remove_below_area(&mut self, threshold: F) -> usize {
        let before = self.triangles.len();
        self.triangles.retain(|t| t.area() >= threshold);
        before - self.triangles.len()
    }

    /// Distinct corners in first-seen order.
    pub fn unique_points(&self) -> Vec<Point2<F>> {
        let corners: Vec<Point2<F>> = self.triangles.iter().flat_map(|t| t.points()).collect();
        dedup_exact(&corners)
    }

    /// Distinct edges; an edge and its reverse count once.
    pub fn unique_segments(&self) -> Vec<Segment2<F>> {
        let mut out: Vec<Segment2<F>> = Vec::new();
        for edge in self.triangles.iter().flat_map(|t| t.edges()) {
            if !out.iter().any(|e| e.is_same_undirected(edge)) {
                out.push(edge);
            }
        }
        out
    }

    /// Distinct triangles; corner order and winding are ignored.
    pub fn unique_triangles(&self) -> Vec<Triangle2<F>> {
        let mut out: Vec<Triangle2<F>> = Vec::new();
        for &tri in &self.triangles {
            let seen = out
                .iter()
                .any(|t| tri.points().iter().all(|&p| t.has_corner(p)));
            if !seen {
                out.push(tri);
            }
        }
        out
    }

    /// One three-vertex polygon per triangle.
    pub fn to_polygons(&self) -> Vec<Polygon<F>> {
        self.triangles.iter().map(|&t| Polygon::from(t)).collect()
    }

    /// Random triangle, picked with probability proportional to its area.
    /// `None` when the collection is empty or has no area.
    pub fn random_triangle<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Triangle2<F>> {
        let weights = self
            .triangles
            .iter()
            .map(|t| t.area().to_f64().unwrap_or(0.0));
        let index = WeightedIndex::new(weights).ok()?;
        Some(self.triangles[rng.sample(&index)])
    }

    /// Uniformly distributed point over the covered area.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Point2<F>> {
        self.random_triangle(rng).map(|t| t.random_point(rng))
    }

    /// Stochastic refinement.
    ///
    /// Every triangle is visited once, pieces included:
    /// - below `min_area` or narrow: kept
    /// - above `max_area`: split
    /// - otherwise: kept with probability `keep_chance`, else split
    ///
    /// A split re-triangulates the triangle with
    /// [`Triangle2::triangulate`] at `min_area` and queues the pieces, so a
    /// large triangle is refined over several rounds. The pieces always
    /// cover the triangle they came from.
    pub fn subdivide<R: Rng + ?Sized>(
        &self,
        config: &SubdivideConfig<F>,
        rng: &mut R,
    ) -> Result<Self, GeomError> {
        config.validate()?;

        let mut queue: VecDeque<Triangle2<F>> = self.triangles.iter().copied().collect();
        let mut out = Vec::with_capacity(self.triangles.len());
        let mut splits = 0usize;

        while let Some(tri) = queue.pop_front() {
            let area = tri.area();
            let keep = if area < config.min_area || tri.is_narrow(config.narrow_value) {
                true
            } else if area > config.max_area {
                false
            } else {
                rng.gen_bool(config.keep_chance)
            };

            if keep {
                out.push(tri);
                continue;
            }

            let pieces = tri.triangulate(config.min_area, rng);
            if pieces.len() < 2 {
                out.push(tri);
                continue;
            }
            splits += 1;
            queue.extend(pieces.into_triangles());
        }

        debug!(
            input = self.triangles.len(),
            output = out.len(),
            splits,
            "subdivided triangulation"
        );
        Ok(Self { triangles: out })
    }

    /// True if any triangle contains `p`.
    pub fn contains_point(&self, p: Point2<F>) -> bool {
        self.triangles.iter().any(|t| t.contains_point(p))
    }

    /// True if a single triangle contains all of `other`.
    pub fn contains_shape<S: Shape2<F> + ?Sized>(&self, other: &S) -> bool {
        self.triangles
            .iter()
            .any(|t| edges::contains_shape(&t.edges(), |p| t.contains_point(p), other))
    }

    /// Closest boundary point of any triangle to `p`.
    ///
    /// `self_index` is the index of the triangle that won.
    pub fn closest_point(&self, p: Point2<F>) -> Option<ClosestPointResult<F>> {
        self.closest_by(|t| edges::closest_to_point(&t.edges(), p))
    }

    /// Closest pair between any triangle and `other`.
    ///
    /// `self_index` is the index of the triangle that won; `other_index`
    /// identifies the part of `other`.
    pub fn closest_point_to_shape<S: Shape2<F> + ?Sized>(
        &self,
        other: &S,
    ) -> Option<ClosestPointResult<F>> {
        self.closest_by(|t| edges::closest_to_shape(&t.edges(), other))
    }

    fn closest_by(
        &self,
        query: impl Fn(&Triangle2<F>) -> Option<ClosestPointResult<F>>,
    ) -> Option<ClosestPointResult<F>> {
        let mut best = None;
        for (i, tri) in self.triangles.iter().enumerate() {
            let candidate = query(tri).map(|r| ClosestPointResult { self_index: i, ..r });
            best = ClosestPointResult::keep_closer(best, candidate);
        }
        best
    }

    /// True if any triangle overlaps `other`.
    pub fn overlaps<S: Shape2<F> + ?Sized>(&self, other: &S) -> bool {
        self.triangles.iter().any(|t| Self::triangle_overlaps(t, other))
    }

    /// Indices of every triangle overlapping `other`.
    pub fn overlap_indices<S: Shape2<F> + ?Sized>(&self, other: &S) -> Vec<usize> {
        self.triangles
            .iter()
            .enumerate()
            .filter(|(_, t)| Self::triangle_overlaps(t, other))
            .map(|(i, _)| i)
            .collect()
    }

    fn triangle_overlaps<S: Shape2<F> + ?Sized>(tri: &Triangle2<F>, other: &S) -> bool {
        edges::overlaps_shape(&tri.edges(), |p| tri.contains_point(p), other)
    }

    /// Boundary hits of `other`, grouped by triangle index. `None` when no
    /// triangle is hit.
    pub fn intersect<S: Shape2<F> + ?Sized>(&self, other: &S) -> Option<IntersectionMap<F>> {
        let mut map = IntersectionMap::new();
        for (i, tri) in self.triangles.iter().enumerate() {
            if let Some(hits) = edges::intersect(&tri.edges(), other) {
                map.insert(i, hits);
            }
        }
        (!map.is_empty()).then_some(map)
    }
}

impl<F> From<Vec<Triangle2<F>>> for Triangulation<F> {
    fn from(triangles: Vec<Triangle2<F>>) -> Self {
        Self { triangles }
    }
}

impl<F> FromIterator<Triangle2<F>> for Triangulation<F> {
    fn from_iter<I: IntoIterator<Item = Triangle2<F>>>(iter: I) -> Self {
        Self {
            triangles: iter.into_iter().collect(),
        }
    }
}

impl<F> Index<usize> for Triangulation<F> {
    type Output = Triangle2<F>;

    fn index(&self, index: usize) -> &Triangle2<F> {
        &self.triangles[index]
    }
}

impl<F> IntoIterator for Triangulation<F> {
    type Item = Triangle2<F>;
    type IntoIter = std::vec::IntoIter<Triangle2<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.into_iter()
    }
}

impl<'a, F> IntoIterator for &'a Triangulation<F> {
    type Item = &'a Triangle2<F>;
    type IntoIter = std::slice::Iter<'a, Triangle2<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}
