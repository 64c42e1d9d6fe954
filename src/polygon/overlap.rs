//! Overlap queries.

use super::Polygon;
use crate::primitives::Point2;
use crate::query::{edges, Shape2};
use num_traits::Float;

impl<F: Float> Polygon<F> {
    /// Same as [`contains_point`](Self::contains_point).
    #[inline]
    pub fn overlaps_point(&self, p: Point2<F>) -> bool {
        self.contains_point(p)
    }

    /// True if `other` touches this polygon's edges or interior.
    ///
    /// Any edge contact answers immediately. Without one, the shapes
    /// overlap only if one lies inside the other, which is settled by
    /// testing a single point of each.
    pub fn overlaps<S: Shape2<F> + ?Sized>(&self, other: &S) -> bool {
        edges::overlaps_shape(&self.edges(), |p| self.contains_point(p), other)
    }
}
