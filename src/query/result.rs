//! Result records produced by the query families.

use crate::primitives::{Point2, Vec2};
use num_traits::Float;
use std::collections::BTreeMap;

/// A contact point together with the surface normal of the edge it lies on.
///
/// Normals are unit length for proper edges and zero for features without
/// a direction (points, degenerate edges).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionPoint<F> {
    /// Contact location.
    pub point: Point2<F>,
    /// Outward normal of the edge through `point`.
    pub normal: Vec2<F>,
}

impl<F: Float> CollisionPoint<F> {
    /// Creates a contact point.
    #[inline]
    pub fn new(point: Point2<F>, normal: Vec2<F>) -> Self {
        Self { point, normal }
    }
}

/// Closest pair of points between the receiver of a query and another shape.
///
/// `self_index` is the edge of the receiver the pair was found on (or the
/// triangle, for triangulation queries); `other_index` is the matching
/// feature of the other shape, 0 when it has only one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPointResult<F> {
    /// Point on the receiver, with the normal of its edge.
    pub self_point: CollisionPoint<F>,
    /// Matching point on the other shape.
    pub other_point: Point2<F>,
    /// Squared distance between the two points.
    pub distance_squared: F,
    /// Edge or triangle of the receiver holding `self_point`.
    pub self_index: usize,
    /// Feature of the other shape holding `other_point`.
    pub other_index: usize,
}

impl<F: Float> ClosestPointResult<F> {
    /// Distance between the two points.
    #[inline]
    pub fn distance(&self) -> F {
        self.distance_squared.sqrt()
    }

    /// Strict comparison: equal distances are not closer.
    #[inline]
    pub fn is_closer_than(&self, other: &Self) -> bool {
        self.distance_squared < other.distance_squared
    }

    /// Keeps the closer of `best` and `candidate`, `best` on ties.
    #[inline]
    pub(crate) fn keep_closer(best: Option<Self>, candidate: Option<Self>) -> Option<Self> {
        match (best, candidate) {
            (Some(b), Some(c)) if c.is_closer_than(&b) => Some(c),
            (None, c) => c,
            (b, _) => b,
        }
    }
}

/// Closest pair between one query segment and a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentContact<F> {
    /// Point on the query segment.
    pub on_segment: Point2<F>,
    /// Point on the shape.
    pub on_shape: Point2<F>,
    /// Feature of the shape the contact lies on.
    pub shape_index: usize,
    /// Squared distance between the two points.
    pub distance_squared: F,
}

/// Intersection hits keyed by the index of the triangle that produced them.
pub type IntersectionMap<F> = BTreeMap<usize, Vec<CollisionPoint<F>>>;

#[cfg(test)]
mod tests {
    use super::*;

    fn result(d: f64, index: usize) -> ClosestPointResult<f64> {
        ClosestPointResult {
            self_point: CollisionPoint::new(Point2::origin(), Vec2::zero()),
            other_point: Point2::origin(),
            distance_squared: d,
            self_index: index,
            other_index: 0,
        }
    }

    #[test]
    fn test_is_closer_is_strict() {
        assert!(result(1.0, 0).is_closer_than(&result(2.0, 1)));
        assert!(!result(1.0, 0).is_closer_than(&result(1.0, 1)));
    }

    #[test]
    fn test_keep_closer_prefers_first_on_ties() {
        let kept = ClosestPointResult::keep_closer(Some(result(1.0, 0)), Some(result(1.0, 1)));
        assert_eq!(kept.unwrap().self_index, 0);

        let kept = ClosestPointResult::keep_closer(None, Some(result(3.0, 2)));
        assert_eq!(kept.unwrap().self_index, 2);

        let kept = ClosestPointResult::keep_closer(Some(result(3.0, 0)), Some(result(0.5, 4)));
        assert_eq!(kept.unwrap().self_index, 4);
    }

    #[test]
    fn test_distance() {
        assert_eq!(result(9.0, 0).distance(), 3.0);
    }
}
