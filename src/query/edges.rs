//! Query families evaluated over the edges of a closed shape.
//!
//! The receiver is described by its edge list and a point-containment
//! test; the other shape is anything implementing [`Shape2`].

use super::result::{ClosestPointResult, CollisionPoint};
use super::shape::Shape2;
use crate::primitives::{Point2, Segment2, Vec2};
use num_traits::Float;

/// Closest boundary point of `edges` to `p`. First edge wins ties.
pub(crate) fn closest_to_point<F: Float>(
    edges: &[Segment2<F>],
    p: Point2<F>,
) -> Option<ClosestPointResult<F>> {
    let mut best: Option<ClosestPointResult<F>> = None;

    for (i, edge) in edges.iter().enumerate() {
        let (q, _) = edge.closest_point(p);
        let candidate = ClosestPointResult {
            self_point: CollisionPoint::new(q, edge.normal()),
            other_point: p,
            distance_squared: q.distance_squared(p),
            self_index: i,
            other_index: 0,
        };
        best = ClosestPointResult::keep_closer(best, Some(candidate));
    }

    best
}

/// Closest pair between `edges` and the boundary of `other`.
pub(crate) fn closest_to_shape<F: Float, S: Shape2<F> + ?Sized>(
    edges: &[Segment2<F>],
    other: &S,
) -> Option<ClosestPointResult<F>> {
    let mut best: Option<ClosestPointResult<F>> = None;

    for (i, edge) in edges.iter().enumerate() {
        let candidate = other.closest_to_segment(edge).map(|c| ClosestPointResult {
            self_point: CollisionPoint::new(c.on_segment, edge.normal()),
            other_point: c.on_shape,
            distance_squared: c.distance_squared,
            self_index: i,
            other_index: c.shape_index,
        });
        best = ClosestPointResult::keep_closer(best, candidate);
        if best.map_or(false, |b| b.distance_squared <= F::zero()) {
            break;
        }
    }

    best
}

/// Edge overlap first. Without edge contact the shapes overlap only if
/// one lies inside the other: some boundary point of `other` inside the
/// receiver, or the receiver's first vertex inside `other`.
pub(crate) fn overlaps_shape<F: Float, S: Shape2<F> + ?Sized>(
    edges: &[Segment2<F>],
    contains: impl Fn(Point2<F>) -> bool,
    other: &S,
) -> bool {
    if edges.is_empty() {
        return false;
    }
    if edges.iter().any(|e| other.overlaps_segment(e)) {
        return true;
    }
    if other.boundary_points().into_iter().any(&contains) {
        return true;
    }
    other.contains_point(edges[0].start)
}

/// True if `other` lies entirely inside the region bounded by `edges`.
pub(crate) fn contains_shape<F: Float, S: Shape2<F> + ?Sized>(
    edges: &[Segment2<F>],
    contains: impl Fn(Point2<F>) -> bool,
    other: &S,
) -> bool {
    !edges.is_empty() && other.fits_inside(edges, &contains)
}

/// Appends the boundary hits of `other` on `edges` to `out`, tagged with
/// the normal of the edge that was hit. Returns the number added.
pub(crate) fn intersect_into<F: Float, S: Shape2<F> + ?Sized>(
    edges: &[Segment2<F>],
    other: &S,
    out: &mut Vec<CollisionPoint<F>>,
    first_only: bool,
) -> usize {
    let before = out.len();

    for edge in edges {
        let normal: Vec2<F> = edge.normal();
        for point in other.hits_with_segment(edge) {
            out.push(CollisionPoint::new(point, normal));
            if first_only {
                return out.len() - before;
            }
        }
    }

    out.len() - before
}

/// Exhaustive hits, `None` when there are none.
pub(crate) fn intersect<F: Float, S: Shape2<F> + ?Sized>(
    edges: &[Segment2<F>],
    other: &S,
) -> Option<Vec<CollisionPoint<F>>> {
    let mut hits = Vec::new();
    (intersect_into(edges, other, &mut hits, false) > 0).then_some(hits)
}
