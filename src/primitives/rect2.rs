//! Axis-aligned 2D rectangle type.

use super::{Point2, Segment2, Vec2};
use num_traits::Float;

/// An axis-aligned rectangle anchored at its minimum corner.
///
/// # Example
///
/// ```
/// use polyshape::primitives::{Point2, Rect2};
///
/// let r: Rect2<f64> = Rect2::new(0.0, 0.0, 10.0, 5.0);
/// assert!(r.contains_point(Point2::new(10.0, 5.0)));
/// assert_eq!(r.center(), Point2::new(5.0, 2.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect2<F> {
    /// Left edge.
    pub x: F,
    /// Bottom edge.
    pub y: F,
    /// Extent along X.
    pub width: F,
    /// Extent along Y.
    pub height: F,
}

impl<F: Float> Rect2<F> {
    /// Creates a rectangle from its minimum corner and size.
    #[inline]
    pub fn new(x: F, y: F, width: F, height: F) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates the rectangle spanning two opposite corners in any order.
    pub fn from_corners(p: Point2<F>, q: Point2<F>) -> Self {
        let min_x = p.x.min(q.x);
        let min_y = p.y.min(q.y);
        Self::new(min_x, min_y, p.x.max(q.x) - min_x, p.y.max(q.y) - min_y)
    }

    /// Smallest rectangle enclosing every point, `None` for no points.
    pub fn from_points(points: &[Point2<F>]) -> Option<Self> {
        let first = *points.first()?;
        let (min, max) = points.iter().skip(1).fold((first, first), |(min, max), p| {
            (
                Point2::new(min.x.min(p.x), min.y.min(p.y)),
                Point2::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some(Self::from_corners(min, max))
    }

    /// Minimum corner.
    #[inline]
    pub fn min(&self) -> Point2<F> {
        Point2::new(self.x, self.y)
    }

    /// Maximum corner.
    #[inline]
    pub fn max(&self) -> Point2<F> {
        Point2::new(self.x + self.width, self.y + self.height)
    }

    #[inline]
    pub fn center(&self) -> Point2<F> {
        self.min().midpoint(self.max())
    }

    #[inline]
    pub fn area(&self) -> F {
        self.width * self.height
    }

    /// Corners in counter-clockwise order starting at the minimum corner.
    pub fn corners(&self) -> [Point2<F>; 4] {
        let (min, max) = (self.min(), self.max());
        [
            min,
            Point2::new(max.x, min.y),
            max,
            Point2::new(min.x, max.y),
        ]
    }

    /// Edges counter-clockwise from the bottom: bottom, right, top, left.
    pub fn edges(&self) -> [Segment2<F>; 4] {
        let c = self.corners();
        [
            Segment2::new(c[0], c[1]),
            Segment2::new(c[1], c[2]),
            Segment2::new(c[2], c[3]),
            Segment2::new(c[3], c[0]),
        ]
    }

    /// True if `p` is inside or on the boundary.
    #[inline]
    pub fn contains_point(&self, p: Point2<F>) -> bool {
        let max = self.max();
        p.x >= self.x && p.x <= max.x && p.y >= self.y && p.y <= max.y
    }

    /// Grows the rectangle by `margin` on every side.
    #[inline]
    pub fn expanded(&self, margin: F) -> Self {
        Self::new(
            self.x - margin,
            self.y - margin,
            self.width + margin + margin,
            self.height + margin + margin,
        )
    }

    #[inline]
    pub fn translated(&self, offset: Vec2<F>) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }
}
