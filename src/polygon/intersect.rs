//! Boundary intersection queries.

use super::Polygon;
use crate::query::{edges, CollisionPoint, Shape2};
use num_traits::Float;

impl<F: Float> Polygon<F> {
    /// Every point where `other`'s boundary crosses an edge of this
    /// polygon, each tagged with that edge's normal. `None` when nothing
    /// crosses, including the case where `other` lies strictly inside.
    pub fn intersect<S: Shape2<F> + ?Sized>(&self, other: &S) -> Option<Vec<CollisionPoint<F>>> {
        edges::intersect(&self.edges(), other)
    }

    /// Appends crossings to `out` and returns how many were added.
    ///
    /// With `return_after_first_valid` the scan stops at the first hit.
    pub fn intersect_into<S: Shape2<F> + ?Sized>(
        &self,
        other: &S,
        out: &mut Vec<CollisionPoint<F>>,
        return_after_first_valid: bool,
    ) -> usize {
        edges::intersect_into(&self.edges(), other, out, return_after_first_valid)
    }
}
