//! 2D line segment type and its pairwise primitives.
//!
//! Every polygon query in this crate is decomposed into segment-vs-shape
//! tests, so this file holds the primitives the query families reduce to.

use super::{Circle2, Line2, Point2, Ray2, Vec2};
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    /// First endpoint.
    pub start: Point2<F>,
    /// Second endpoint.
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the squared length of the segment.
    #[inline]
    pub fn length_squared(self) -> F {
        self.start.distance_squared(self.end)
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// Returns the midpoint of the segment.
    #[inline]
    pub fn midpoint(self) -> Point2<F> {
        self.start.midpoint(self.end)
    }

    /// Returns the point at parameter `t` (0 = start, 1 = end).
    #[inline]
    pub fn point_at(self, t: F) -> Point2<F> {
        self.start.lerp(self.end, t)
    }

    /// Returns the segment with start and end swapped.
    #[inline]
    pub fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Unit normal on the right-hand side of the direction.
    ///
    /// For the edges of a counter-clockwise polygon this is the outward
    /// normal. Zero for a degenerate segment.
    #[inline]
    pub fn normal(self) -> Vec2<F> {
        self.direction().perpendicular_right().normalize_or_zero()
    }

    /// Returns true if both endpoints match `other`'s in either direction.
    #[inline]
    pub fn is_same_undirected(self, other: Self) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }

    /// Computes the closest point on the segment to `p`.
    ///
    /// Returns `(closest_point, t)` with `t` clamped to [0, 1].
    pub fn closest_point(self, p: Point2<F>) -> (Point2<F>, F) {
        let v = self.direction();
        let len_sq = v.magnitude_squared();

        if len_sq <= F::epsilon() {
            return (self.start, F::zero());
        }

        let t = ((p - self.start).dot(v) / len_sq)
            .max(F::zero())
            .min(F::one());
        (self.point_at(t), t)
    }

    /// Squared distance from `p` to the segment.
    #[inline]
    pub fn distance_squared_to_point(self, p: Point2<F>) -> F {
        p.distance_squared(self.closest_point(p).0)
    }

    /// Intersection point with another segment, endpoints included.
    ///
    /// Parallel and collinear segments report no intersection.
    pub fn intersect_segment(self, other: &Segment2<F>) -> Option<Point2<F>> {
        let d1 = self.direction();
        let d2 = other.direction();
        let denom = d1.cross(d2);

        if denom.abs() < F::epsilon() {
            return None;
        }

        let delta = other.start - self.start;
        let t = delta.cross(d2) / denom;
        let u = delta.cross(d1) / denom;

        if t >= F::zero() && t <= F::one() && u >= F::zero() && u <= F::one() {
            Some(self.point_at(t))
        } else {
            None
        }
    }

    /// Intersection point with a ray.
    #[inline]
    pub fn intersect_ray(self, ray: &Ray2<F>) -> Option<Point2<F>> {
        ray.intersect_segment(&self).map(|(p, _, _)| p)
    }

    /// Intersection point with an infinite line.
    #[inline]
    pub fn intersect_line(self, line: &Line2<F>) -> Option<Point2<F>> {
        line.intersect_segment(&self).map(|(p, _, _)| p)
    }

    /// Points where the segment crosses the circle's boundary (0, 1 or 2).
    #[inline]
    pub fn intersect_circle(self, circle: &Circle2<F>) -> Vec<Point2<F>> {
        circle.intersect_segment(&self)
    }

    /// True if the segment touches the solid disk of `circle`.
    #[inline]
    pub fn overlaps_circle(self, circle: &Circle2<F>) -> bool {
        self.distance_squared_to_point(circle.center) <= circle.radius * circle.radius
    }

    /// Closest pair of points between two segments.
    ///
    /// Returns `(on_self, on_other, distance_squared)`.
    pub fn closest_pair_segment(self, other: &Segment2<F>) -> (Point2<F>, Point2<F>, F) {
        if let Some(p) = self.intersect_segment(other) {
            return (p, p, F::zero());
        }

        let candidates = [
            (self.closest_point(other.start).0, other.start),
            (self.closest_point(other.end).0, other.end),
            (self.start, other.closest_point(self.start).0),
            (self.end, other.closest_point(self.end).0),
        ];
        closest_of(&candidates)
    }

    /// Closest pair of points between the segment and a ray.
    ///
    /// Returns `(on_self, on_ray, distance_squared)`.
    pub fn closest_pair_ray(self, ray: &Ray2<F>) -> (Point2<F>, Point2<F>, F) {
        if let Some(p) = self.intersect_ray(ray) {
            return (p, p, F::zero());
        }

        let candidates = [
            (self.start, ray.closest_point(self.start).0),
            (self.end, ray.closest_point(self.end).0),
            (self.closest_point(ray.origin).0, ray.origin),
        ];
        closest_of(&candidates)
    }

    /// Closest pair of points between the segment and an infinite line.
    ///
    /// Returns `(on_self, on_line, distance_squared)`.
    pub fn closest_pair_line(self, line: &Line2<F>) -> (Point2<F>, Point2<F>, F) {
        if let Some(p) = self.intersect_line(line) {
            return (p, p, F::zero());
        }

        let candidates = [
            (self.start, line.closest_point(self.start)),
            (self.end, line.closest_point(self.end)),
        ];
        closest_of(&candidates)
    }

    /// Closest pair of points between the segment and a circle boundary.
    ///
    /// Returns `(on_self, on_circle, distance_squared)`; the distance is
    /// zero when the segment reaches into the disk.
    pub fn closest_pair_circle(self, circle: &Circle2<F>) -> (Point2<F>, Point2<F>, F) {
        let (on_self, _) = self.closest_point(circle.center);
        let on_circle = circle.nearest_point(on_self);
        let gap = (on_self.distance(circle.center) - circle.radius).max(F::zero());
        (on_self, on_circle, gap * gap)
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}

fn closest_of<F: Float>(candidates: &[(Point2<F>, Point2<F>)]) -> (Point2<F>, Point2<F>, F) {
    let (a0, b0) = candidates[0];
    let mut best = (a0, b0, a0.distance_squared(b0));
    for &(a, b) in &candidates[1..] {
        let d = a.distance_squared(b);
        if d < best.2 {
            best = (a, b, d);
        }
    }
    best
}
