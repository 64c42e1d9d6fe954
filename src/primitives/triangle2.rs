//! 2D triangle type.
//!
//! Triangles are the unit of work for both triangulation algorithms and
//! the [`Triangulation`](crate::triangulation::Triangulation) collection.

use super::{Circle2, Point2, Segment2};
use crate::triangulation::{delaunay_triangulation, Triangulation};
use num_traits::Float;
use rand::Rng;

/// Scale toward the centroid applied to points scattered by
/// [`Triangle2::triangulate`].
const SCATTER_INSET: f64 = 0.9;

/// Most interior points [`Triangle2::triangulate`] scatters in one call.
const MAX_SCATTER: usize = 32;

/// A triangle given by its three corners.
///
/// The corners may be in either winding; [`signed_area`](Self::signed_area)
/// is positive for counter-clockwise order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle2<F> {
    /// First corner.
    pub a: Point2<F>,
    /// Second corner.
    pub b: Point2<F>,
    /// Third corner.
    pub c: Point2<F>,
}

impl<F: Float> Triangle2<F> {
    /// Creates a triangle from its corners.
    #[inline]
    pub fn new(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Self {
        Self { a, b, c }
    }

    /// Returns the corners as an array in stored order.
    #[inline]
    pub fn points(&self) -> [Point2<F>; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns the edges AB, BC, CA.
    #[inline]
    pub fn edges(&self) -> [Segment2<F>; 3] {
        [
            Segment2::new(self.a, self.b),
            Segment2::new(self.b, self.c),
            Segment2::new(self.c, self.a),
        ]
    }

    /// Signed area, positive when the corners run counter-clockwise.
    #[inline]
    pub fn signed_area(&self) -> F {
        (self.b - self.a).cross(self.c - self.a) / F::from(2.0).unwrap()
    }

    /// Unsigned area.
    #[inline]
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    #[inline]
    pub fn centroid(&self) -> Point2<F> {
        let three = F::from(3.0).unwrap();
        Point2::new(
            (self.a.x + self.b.x + self.c.x) / three,
            (self.a.y + self.b.y + self.c.y) / three,
        )
    }

    /// Returns the same triangle with counter-clockwise corners.
    #[inline]
    pub fn to_ccw(self) -> Self {
        if self.signed_area() < F::zero() {
            Self::new(self.a, self.c, self.b)
        } else {
            self
        }
    }

    /// True if `p` lies inside the triangle or on its boundary.
    ///
    /// Works for either winding.
    pub fn contains_point(&self, p: Point2<F>) -> bool {
        let d1 = (self.b - self.a).cross(p - self.a);
        let d2 = (self.c - self.b).cross(p - self.b);
        let d3 = (self.a - self.c).cross(p - self.c);

        let has_neg = d1 < F::zero() || d2 < F::zero() || d3 < F::zero();
        let has_pos = d1 > F::zero() || d2 > F::zero() || d3 > F::zero();

        !(has_neg && has_pos)
    }

    /// True if any corner equals `p` exactly.
    #[inline]
    pub fn has_corner(&self, p: Point2<F>) -> bool {
        self.a == p || self.b == p || self.c == p
    }

    /// Circle through all three corners, `None` for collinear corners.
    pub fn circumcircle(&self) -> Option<Circle2<F>> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        let d = F::from(2.0).unwrap() * ab.cross(ac);

        if d.abs() < F::epsilon() {
            return None;
        }

        let ab2 = ab.magnitude_squared();
        let ac2 = ac.magnitude_squared();
        let ux = (ac.y * ab2 - ab.y * ac2) / d;
        let uy = (ab.x * ac2 - ac.x * ab2) / d;

        let center = Point2::new(self.a.x + ux, self.a.y + uy);
        Some(Circle2::new(center, center.distance(self.a)))
    }

    /// Length of the longest edge, squared.
    #[inline]
    pub fn longest_edge_squared(&self) -> F {
        self.edges()
            .iter()
            .map(|e| e.length_squared())
            .fold(F::zero(), F::max)
    }

    /// Height over the longest edge divided by that edge's length.
    ///
    /// About 0.87 for an equilateral triangle, 0 for a degenerate one.
    pub fn aspect_ratio(&self) -> F {
        let longest = self.longest_edge_squared();
        if longest <= F::zero() {
            return F::zero();
        }
        F::from(2.0).unwrap() * self.area() / longest
    }

    /// A triangle is narrow when its aspect ratio is below `narrow_value`.
    #[inline]
    pub fn is_narrow(&self, narrow_value: F) -> bool {
        self.aspect_ratio() < narrow_value
    }

    /// Uniformly distributed point inside the triangle.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point2<F> {
        let mut u: f64 = rng.gen();
        let mut v: f64 = rng.gen();
        if u + v > 1.0 {
            u = 1.0 - u;
            v = 1.0 - v;
        }

        let u = F::from(u).unwrap();
        let v = F::from(v).unwrap();
        self.a + (self.b - self.a) * u + (self.c - self.a) * v
    }

    /// Splits the triangle into roughly `area / min_area` pieces.
    ///
    /// Scatters `floor(area / min_area)` random interior points, at most
    /// 32 per call, kept slightly away from the edges, and
    /// Delaunay-triangulates them together with the corners. Callers that
    /// need finer pieces split the results again.
    ///
    /// The pieces always cover the triangle. Should the point set come out
    /// degenerate, the triangle is split at its centroid instead. A
    /// non-positive `min_area`, or a triangle no larger than it, yields the
    /// triangle itself.
    pub fn triangulate<R: Rng + ?Sized>(&self, min_area: F, rng: &mut R) -> Triangulation<F> {
        let area = self.area();
        if min_area <= F::zero() || area <= min_area {
            return Triangulation::from(vec![*self]);
        }

        let count = (area / min_area)
            .floor()
            .to_usize()
            .unwrap_or(MAX_SCATTER)
            .min(MAX_SCATTER);
        let mut points = Vec::with_capacity(count + 3);
        points.extend_from_slice(&self.points());

        // Interior points stay off the outline so no sliver forms along
        // an edge.
        let centroid = self.centroid();
        let inset = F::from(SCATTER_INSET).unwrap();
        for _ in 0..count {
            let p = self.random_point(rng);
            points.push(centroid + (p - centroid) * inset);
        }

        let pieces = delaunay_triangulation(&points);
        if pieces.is_empty() || (pieces.area() - area).abs() > area * F::epsilon().sqrt() {
            self.split_at_centroid()
        } else {
            pieces
        }
    }

    /// Three triangles fanning from the centroid to each edge.
    fn split_at_centroid(&self) -> Triangulation<F> {
        let m = self.centroid();
        Triangulation::from(vec![
            Self::new(self.a, self.b, m),
            Self::new(self.b, self.c, m),
            Self::new(self.c, self.a, m),
        ])
    }

    /// Returns the triangle translated so its centroid sits at `center`.
    pub fn centered_at(&self, center: Point2<F>) -> Self {
        let offset = center - self.centroid();
        Self::new(self.a + offset, self.b + offset, self.c + offset)
    }
}
