//! Half-infinite rays, as used for sight lines and projectile traces.

use super::circle2::boundary_params;
use super::{Circle2, Point2, Segment2, Vec2};
use num_traits::Float;

/// Ray from `origin` along `direction`; parameter `t >= 0`.
///
/// `direction` keeps its length, so `t` is measured in multiples of it.
///
/// # Example
///
/// ```
/// use polyshape::primitives::{Ray2, Point2, Vec2, Segment2};
///
/// let ray: Ray2<f64> = Ray2::new(Point2::origin(), Vec2::new(1.0, 0.0));
/// let segment = Segment2::new(Point2::new(5.0, -1.0), Point2::new(5.0, 1.0));
///
/// let (hit, t, _) = ray.intersect_segment(&segment).unwrap();
/// assert_eq!(hit.x, 5.0);
/// assert_eq!(t, 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray2<F> {
    /// Start of the ray.
    pub origin: Point2<F>,
    /// Direction, not necessarily unit length.
    pub direction: Vec2<F>,
}

impl<F: Float> Ray2<F> {
    /// Creates a ray from `origin` along `direction`.
    #[inline]
    pub fn new(origin: Point2<F>, direction: Vec2<F>) -> Self {
        Self { origin, direction }
    }

    /// Creates a ray from `origin` passing through `through`.
    #[inline]
    pub fn from_points(origin: Point2<F>, through: Point2<F>) -> Self {
        Self::new(origin, through - origin)
    }

    /// Returns the point at parameter `t` along the direction.
    #[inline]
    pub fn point_at(&self, t: F) -> Point2<F> {
        self.origin + self.direction * t
    }

    /// Closest point on the ray to `point` and its parameter (t ≥ 0).
    pub fn closest_point(&self, point: Point2<F>) -> (Point2<F>, F) {
        let len_sq = self.direction.magnitude_squared();
        if len_sq < F::epsilon() {
            return (self.origin, F::zero());
        }

        let t = ((point - self.origin).dot(self.direction) / len_sq).max(F::zero());
        (self.point_at(t), t)
    }

    #[inline]
    pub fn distance_squared_to_point(&self, point: Point2<F>) -> F {
        point.distance_squared(self.closest_point(point).0)
    }

    /// Intersects the ray with a segment.
    ///
    /// Returns `(point, t_ray, t_segment)` with `t_ray ≥ 0` and
    /// `t_segment` in [0, 1]. Parallel inputs never intersect.
    pub fn intersect_segment(&self, segment: &Segment2<F>) -> Option<(Point2<F>, F, F)> {
        let seg_dir = segment.direction();
        let cross = self.direction.cross(seg_dir);

        if cross.abs() < F::epsilon() {
            return None;
        }

        let delta = segment.start - self.origin;
        let t_ray = delta.cross(seg_dir) / cross;
        let t_seg = delta.cross(self.direction) / cross;

        if t_ray >= F::zero() && t_seg >= F::zero() && t_seg <= F::one() {
            Some((self.point_at(t_ray), t_ray, t_seg))
        } else {
            None
        }
    }

    /// Boundary crossings with a circle, nearest first.
    pub fn intersect_circle(&self, circle: &Circle2<F>) -> Vec<Point2<F>> {
        boundary_params(circle, self.origin, self.direction)
            .into_iter()
            .filter(|&t| t >= F::zero())
            .map(|t| self.point_at(t))
            .collect()
    }

    /// True if the ray reaches into the disk of `circle`.
    #[inline]
    pub fn overlaps_circle(&self, circle: &Circle2<F>) -> bool {
        self.distance_squared_to_point(circle.center) <= circle.radius * circle.radius
    }

    /// Returns a ray translated by `offset`.
    #[inline]
    pub fn translated(&self, offset: Vec2<F>) -> Self {
        Self::new(self.origin + offset, self.direction)
    }

    /// Returns a ray rotated by `angle` radians around its origin.
    #[inline]
    pub fn rotated(&self, angle: F) -> Self {
        Self::new(self.origin, self.direction.rotate(angle))
    }
}
