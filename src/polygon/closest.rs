//! Closest-point queries.
//!
//! Distances are measured to the polygon boundary, also for points and
//! shapes lying inside it. The reported normal is the outward normal of
//! the polygon edge that was closest, assuming counter-clockwise winding.

use super::Polygon;
use crate::primitives::Point2;
use crate::query::{edges, ClosestPointResult, Shape2};
use num_traits::Float;

impl<F: Float> Polygon<F> {
    /// Closest boundary point to `p`.
    ///
    /// `self_index` is the index of the closest edge (edge `i` runs from
    /// vertex `i` to vertex `i + 1`). Returns `None` for degenerate
    /// polygons.
    ///
    /// # Example
    ///
    /// ```
    /// use polyshape::polygon::Polygon;
    /// use polyshape::{Point2, Rect2};
    ///
    /// let square = Polygon::from(Rect2::new(0.0, 0.0, 2.0, 2.0));
    /// let hit = square.closest_point(Point2::new(1.0, 5.0)).unwrap();
    /// assert_eq!(hit.self_point.point, Point2::new(1.0, 2.0));
    /// assert_eq!(hit.self_index, 2);
    /// ```
    pub fn closest_point(&self, p: Point2<F>) -> Option<ClosestPointResult<F>> {
        edges::closest_to_point(&self.edges(), p)
    }

    /// Closest pair between this polygon's boundary and `other`.
    ///
    /// `other_index` identifies the part of `other` that was closest
    /// (its edge index for edge-based shapes, 0 otherwise).
    pub fn closest_point_to_shape<S: Shape2<F> + ?Sized>(
        &self,
        other: &S,
    ) -> Option<ClosestPointResult<F>> {
        edges::closest_to_shape(&self.edges(), other)
    }

    /// Index of the closest edge and the closest point on it.
    pub fn closest_point_on_edge(&self, p: Point2<F>) -> Option<(usize, Point2<F>)> {
        self.closest_point(p)
            .map(|r| (r.self_index, r.self_point.point))
    }

    /// Squared distance from `p` to the boundary.
    pub fn distance_squared_to(&self, p: Point2<F>) -> Option<F> {
        self.closest_point(p).map(|r| r.distance_squared)
    }
}
