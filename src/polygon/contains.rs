//! Containment queries.
//!
//! Point containment uses the even-odd crossing rule, so self-intersecting
//! polygons report their alternating regions as inside. Points exactly on
//! an edge may go either way.

use super::Polygon;
use crate::primitives::Point2;
use crate::query::{edges, Shape2};
use num_traits::Float;

/// Even-odd crossing test against a closed ring of `vertices`.
///
/// Returns false for fewer than 3 vertices.
///
/// # Example
///
/// ```
/// use polyshape::polygon::polygon_contains;
/// use polyshape::Point2;
///
/// let square = [
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ];
/// assert!(polygon_contains(&square, Point2::new(0.5, 0.5)));
/// assert!(!polygon_contains(&square, Point2::new(1.5, 0.5)));
/// ```
pub fn polygon_contains<F: Float>(vertices: &[Point2<F>], point: Point2<F>) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for (i, &vi) in vertices.iter().enumerate() {
        let vj = vertices[j];
        if ((vi.y > point.y) != (vj.y > point.y))
            && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

impl<F: Float> Polygon<F> {
    /// Even-odd point test, see [`polygon_contains`].
    #[inline]
    pub fn contains_point(&self, p: Point2<F>) -> bool {
        polygon_contains(self.points(), p)
    }

    /// True if every point is inside. An empty slice is never contained.
    pub fn contains_points(&self, points: &[Point2<F>]) -> bool {
        !points.is_empty() && points.iter().all(|&p| self.contains_point(p))
    }

    /// True if `other` lies entirely inside this polygon: all of its
    /// boundary points are inside and none of its edges cross ours.
    ///
    /// Rays and lines are unbounded and never contained. A circle is
    /// contained when its centre is inside and it reaches no edge.
    pub fn contains_shape<S: Shape2<F> + ?Sized>(&self, other: &S) -> bool {
        edges::contains_shape(&self.edges(), |p| self.contains_point(p), other)
    }
}
