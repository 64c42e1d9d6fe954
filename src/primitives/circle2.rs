//! 2D circle type.
//!
//! Circles are treated as solid disks by the query engine: a circle
//! "overlaps" anything that reaches inside it, and "contains" only what
//! fits within its radius.

use super::{Point2, Segment2, Vec2};
use num_traits::Float;

/// A 2D circle defined by center and radius.
///
/// # Example
///
/// ```
/// use polyshape::primitives::{Circle2, Point2};
///
/// let circle: Circle2<f64> = Circle2::new(Point2::new(0.0, 0.0), 1.0);
/// assert!(circle.contains(Point2::new(0.5, 0.0)));
/// assert!(!circle.contains(Point2::new(2.0, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle2<F> {
    /// Centre point.
    pub center: Point2<F>,
    /// Non-negative radius
    pub radius: F,
}

impl<F: Float> Circle2<F> {
    /// Creates a new circle from center and radius.
    #[inline]
    pub fn new(center: Point2<F>, radius: F) -> Self {
        Self { center, radius }
    }

    /// Creates a circle from center coordinates and radius.
    #[inline]
    pub fn from_coords(cx: F, cy: F, radius: F) -> Self {
        Self::new(Point2::new(cx, cy), radius)
    }

    /// Returns the area of the disk.
    #[inline]
    pub fn area(&self) -> F {
        F::from(std::f64::consts::PI).unwrap() * self.radius * self.radius
    }

    /// Checks if a point lies inside the disk, boundary included.
    #[inline]
    pub fn contains(&self, point: Point2<F>) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }

    /// Returns the point on the circle at `angle` radians from +X.
    #[inline]
    pub fn point_at(&self, angle: F) -> Point2<F> {
        self.center + Vec2::from_angle(angle) * self.radius
    }

    /// Returns the closest point on the boundary to `point`.
    ///
    /// A point at the center maps to the boundary point at angle 0.
    pub fn nearest_point(&self, point: Point2<F>) -> Point2<F> {
        match (point - self.center).normalize() {
            Some(dir) => self.center + dir * self.radius,
            None => Point2::new(self.center.x + self.radius, self.center.y),
        }
    }

    /// Returns the axis-aligned bounding box as (min, max) points.
    #[inline]
    pub fn bounding_box(&self) -> (Point2<F>, Point2<F>) {
        let r = Vec2::new(self.radius, self.radius);
        (self.center - r, self.center + r)
    }

    /// Samples `count` evenly spaced boundary points, counter-clockwise
    /// starting at angle 0. At least 3 points are produced.
    pub fn boundary_points(&self, count: usize) -> Vec<Point2<F>> {
        let n = count.max(3);
        let tau = F::from(std::f64::consts::TAU).unwrap();
        let step = tau / F::from(n).unwrap();

        (0..n)
            .map(|i| self.point_at(step * F::from(i).unwrap()))
            .collect()
    }

    /// Points where a segment crosses the boundary, ordered from the
    /// segment's start.
    pub fn intersect_segment(&self, segment: &Segment2<F>) -> Vec<Point2<F>> {
        boundary_params(self, segment.start, segment.direction())
            .into_iter()
            .filter(|&t| t >= F::zero() && t <= F::one())
            .map(|t| segment.point_at(t))
            .collect()
    }

    /// True if the two disks share at least one point.
    #[inline]
    pub fn overlaps_circle(&self, other: &Circle2<F>) -> bool {
        let r = self.radius + other.radius;
        self.center.distance_squared(other.center) <= r * r
    }

    /// Boundary intersection points with another circle.
    ///
    /// Empty when the circles are apart, nested, or coincident.
    pub fn intersect_circle(&self, other: &Circle2<F>) -> Vec<Point2<F>> {
        let d = self.center.distance(other.center);
        let (r1, r2) = (self.radius, other.radius);

        if d > r1 + r2 || d < (r1 - r2).abs() || d < F::epsilon() {
            return Vec::new();
        }

        let a = (r1 * r1 - r2 * r2 + d * d) / (d + d);
        let h_sq = r1 * r1 - a * a;
        let dir = (other.center - self.center) / d;
        let base = self.center + dir * a;

        if h_sq < F::epsilon() {
            return vec![base];
        }

        let off = dir.perpendicular() * h_sq.sqrt();
        vec![base - off, base + off]
    }

    /// Closest pair of boundary points between two circles.
    ///
    /// Returns `(on_self, on_other, distance_squared)`; zero distance when
    /// the disks overlap.
    pub fn closest_pair_circle(&self, other: &Circle2<F>) -> (Point2<F>, Point2<F>, F) {
        let on_self = self.nearest_point(other.center);
        let on_other = other.nearest_point(self.center);
        let gap = (self.center.distance(other.center) - self.radius - other.radius).max(F::zero());
        (on_self, on_other, gap * gap)
    }

    /// Returns a circle translated by the given vector.
    #[inline]
    pub fn translated(&self, offset: Vec2<F>) -> Self {
        Self::new(self.center + offset, self.radius)
    }

    /// Returns a circle scaled by `factor` around its center.
    #[inline]
    pub fn scaled(&self, factor: F) -> Self {
        Self::new(self.center, self.radius * factor)
    }
}

/// Solves |origin + t·dir − center| = r for t, ascending. Tangent hits
/// are reported once.
pub(crate) fn boundary_params<F: Float>(
    circle: &Circle2<F>,
    origin: Point2<F>,
    dir: Vec2<F>,
) -> Vec<F> {
    let two = F::from(2.0).unwrap();
    let oc = origin - circle.center;

    let a = dir.dot(dir);
    if a < F::epsilon() {
        return Vec::new();
    }
    let b = two * oc.dot(dir);
    let c = oc.dot(oc) - circle.radius * circle.radius;

    let disc = b * b - two * two * a * c;
    if disc < F::zero() {
        return Vec::new();
    }

    let sqrt_disc = disc.sqrt();
    let t1 = (-b - sqrt_disc) / (two * a);
    if disc <= F::epsilon() {
        return vec![t1];
    }
    vec![t1, (-b + sqrt_disc) / (two * a)]
}
