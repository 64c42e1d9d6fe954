//! Infinite lines, used as query shapes and to lay out fracture cuts.

use super::circle2::boundary_params;
use super::{Circle2, Point2, Ray2, Segment2, Vec2};
use num_traits::Float;

/// A 2D infinite line through `origin` along `direction`.
///
/// # Example
///
/// ```
/// use polyshape::primitives::{Line2, Point2};
///
/// let line: Line2<f64> = Line2::horizontal(1.0);
/// assert_eq!(line.closest_point(Point2::new(5.0, 3.0)), Point2::new(5.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2<F> {
    /// Any point on the line.
    pub origin: Point2<F>,
    /// Direction, not necessarily unit length.
    pub direction: Vec2<F>,
}

impl<F: Float> Line2<F> {
    /// Creates a line through `origin` along `direction`.
    #[inline]
    pub fn new(origin: Point2<F>, direction: Vec2<F>) -> Self {
        Self { origin, direction }
    }

    /// Creates the line passing through two points.
    #[inline]
    pub fn from_points(p1: Point2<F>, p2: Point2<F>) -> Self {
        Self::new(p1, p2 - p1)
    }

    /// Extends a segment infinitely in both directions.
    #[inline]
    pub fn from_segment(segment: &Segment2<F>) -> Self {
        Self::new(segment.start, segment.direction())
    }

    /// Line parallel to the X axis at height `y`.
    #[inline]
    pub fn horizontal(y: F) -> Self {
        Self::new(Point2::new(F::zero(), y), Vec2::new(F::one(), F::zero()))
    }

    /// Line parallel to the Y axis at `x`.
    #[inline]
    pub fn vertical(x: F) -> Self {
        Self::new(Point2::new(x, F::zero()), Vec2::new(F::zero(), F::one()))
    }

    #[inline]
    pub fn point_at(&self, t: F) -> Point2<F> {
        self.origin + self.direction * t
    }

    /// Orthogonal projection of `point` onto the line.
    pub fn closest_point(&self, point: Point2<F>) -> Point2<F> {
        let len_sq = self.direction.magnitude_squared();
        if len_sq < F::epsilon() {
            return self.origin;
        }

        self.point_at((point - self.origin).dot(self.direction) / len_sq)
    }

    /// Squared perpendicular distance to `point`.
    #[inline]
    pub fn distance_squared_to_point(&self, point: Point2<F>) -> F {
        point.distance_squared(self.closest_point(point))
    }

    /// Signed side test: positive left of the direction, negative right.
    #[inline]
    pub fn side(&self, point: Point2<F>) -> F {
        self.direction.cross(point - self.origin)
    }

    /// Intersects the line with a segment.
    ///
    /// Returns `(point, t_line, t_segment)` with `t_segment` in [0, 1].
    pub fn intersect_segment(&self, segment: &Segment2<F>) -> Option<(Point2<F>, F, F)> {
        let seg_dir = segment.direction();
        let cross = self.direction.cross(seg_dir);

        if cross.abs() < F::epsilon() {
            return None;
        }

        let delta = segment.start - self.origin;
        let t_line = delta.cross(seg_dir) / cross;
        let t_seg = delta.cross(self.direction) / cross;

        if t_seg >= F::zero() && t_seg <= F::one() {
            Some((self.point_at(t_line), t_line, t_seg))
        } else {
            None
        }
    }

    /// Intersects the line with a ray. Returns `(point, t_line, t_ray)`.
    pub fn intersect_ray(&self, ray: &Ray2<F>) -> Option<(Point2<F>, F, F)> {
        let cross = self.direction.cross(ray.direction);

        if cross.abs() < F::epsilon() {
            return None;
        }

        let delta = ray.origin - self.origin;
        let t_line = delta.cross(ray.direction) / cross;
        let t_ray = delta.cross(self.direction) / cross;

        (t_ray >= F::zero()).then(|| (self.point_at(t_line), t_line, t_ray))
    }

    /// Boundary crossings with a circle (0, 1 or 2 points).
    pub fn intersect_circle(&self, circle: &Circle2<F>) -> Vec<Point2<F>> {
        boundary_params(circle, self.origin, self.direction)
            .into_iter()
            .map(|t| self.point_at(t))
            .collect()
    }

    #[inline]
    pub fn overlaps_circle(&self, circle: &Circle2<F>) -> bool {
        self.distance_squared_to_point(circle.center) <= circle.radius * circle.radius
    }

    #[inline]
    pub fn translated(&self, offset: Vec2<F>) -> Self {
        Self::new(self.origin + offset, self.direction)
    }
}
