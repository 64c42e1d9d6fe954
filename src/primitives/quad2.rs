//! 2D quadrilateral type.

use super::{Point2, Segment2, Triangle2};
use num_traits::Float;

/// A quadrilateral given by four corners in boundary order.
///
/// Convexity is not required; the quad is split along whichever
/// diagonal stays inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad2<F> {
    /// First corner.
    pub a: Point2<F>,
    /// Second corner.
    pub b: Point2<F>,
    /// Third corner.
    pub c: Point2<F>,
    /// Fourth corner.
    pub d: Point2<F>,
}

impl<F: Float> Quad2<F> {
    /// Creates a quad from its corners in boundary order.
    #[inline]
    pub fn new(a: Point2<F>, b: Point2<F>, c: Point2<F>, d: Point2<F>) -> Self {
        Self { a, b, c, d }
    }

    #[inline]
    pub fn points(&self) -> [Point2<F>; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Returns the edges AB, BC, CD, DA.
    #[inline]
    pub fn edges(&self) -> [Segment2<F>; 4] {
        [
            Segment2::new(self.a, self.b),
            Segment2::new(self.b, self.c),
            Segment2::new(self.c, self.d),
            Segment2::new(self.d, self.a),
        ]
    }

    /// Splits the quad into two triangles.
    ///
    /// Uses ABC + ACD unless B or D is reflex, in which case the B–D
    /// diagonal is used.
    pub fn triangles(&self) -> [Triangle2<F>; 2] {
        let abc = Triangle2::new(self.a, self.b, self.c);
        let acd = Triangle2::new(self.a, self.c, self.d);
        let s1 = abc.signed_area();
        let s2 = acd.signed_area();

        if (s1 >= F::zero()) == (s2 >= F::zero()) {
            [abc, acd]
        } else {
            [
                Triangle2::new(self.a, self.b, self.d),
                Triangle2::new(self.b, self.c, self.d),
            ]
        }
    }

    /// Signed shoelace area, positive for counter-clockwise corners.
    pub fn signed_area(&self) -> F {
        let pts = self.points();
        let mut sum = F::zero();
        for i in 0..4 {
            let p = pts[i];
            let q = pts[(i + 1) % 4];
            sum = sum + p.x * q.y - q.x * p.y;
        }
        sum / F::from(2.0).unwrap()
    }

    /// Mean of the four corners.
    #[inline]
    pub fn centroid(&self) -> Point2<F> {
        let four = F::from(4.0).unwrap();
        Point2::new(
            (self.a.x + self.b.x + self.c.x + self.d.x) / four,
            (self.a.y + self.b.y + self.c.y + self.d.y) / four,
        )
    }

    /// True if `p` is inside or on the boundary.
    #[inline]
    pub fn contains_point(&self, p: Point2<F>) -> bool {
        self.triangles().iter().any(|t| t.contains_point(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square() -> Quad2<f64> {
        Quad2::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        )
    }

    #[test]
    fn test_area_and_centroid() {
        let q = unit_square();
        assert_relative_eq!(q.signed_area(), 1.0);
        assert_eq!(q.centroid(), Point2::new(0.5, 0.5));
    }

    #[test]
    fn test_contains_point() {
        let q = unit_square();
        assert!(q.contains_point(Point2::new(0.25, 0.75)));
        assert!(q.contains_point(Point2::new(1.0, 0.5)));
        assert!(!q.contains_point(Point2::new(1.5, 0.5)));
    }

    #[test]
    fn test_concave_quad() {
        let dart: Quad2<f64> = Quad2::new(
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(4.0, 0.0),
            Point2::new(2.0, 4.0),
        );
        assert!(!dart.contains_point(Point2::new(2.0, 0.5)));
        assert!(dart.contains_point(Point2::new(2.0, 2.0)));
    }
}
