//! Open 2D polyline type.

use super::{Point2, Segment2, Vec2};
use num_traits::Float;

/// An open chain of points. `n` points form `n - 1` edges; the last point
/// is not connected back to the first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline2<F> {
    points: Vec<Point2<F>>,
}

impl<F: Float> Polyline2<F> {
    /// Creates a polyline from its points in chain order.
    #[inline]
    pub fn new(points: Vec<Point2<F>>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn push(&mut self, p: Point2<F>) {
        self.points.push(p);
    }

    #[inline]
    pub fn first(&self) -> Option<Point2<F>> {
        self.points.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<Point2<F>> {
        self.points.last().copied()
    }

    /// Iterates the `n - 1` edges in chain order.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        self.points.windows(2).map(|w| Segment2::new(w[0], w[1]))
    }

    /// Total length of all edges.
    pub fn length(&self) -> F {
        self.edges().fold(F::zero(), |acc, e| acc + e.length())
    }

    /// Copy moved by `offset`.
    pub fn translated(&self, offset: Vec2<F>) -> Self {
        Self::new(self.points.iter().map(|&p| p + offset).collect())
    }

    #[inline]
    pub fn into_points(self) -> Vec<Point2<F>> {
        self.points
    }
}

impl<F: Float> From<Vec<Point2<F>>> for Polyline2<F> {
    fn from(points: Vec<Point2<F>>) -> Self {
        Self::new(points)
    }
}

impl<F: Float> FromIterator<Point2<F>> for Polyline2<F> {
    fn from_iter<I: IntoIterator<Item = Point2<F>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_edges_are_open() {
        let line: Polyline2<f64> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(3.0, 4.0),
        ]
        .into();
        assert_eq!(line.edges().count(), 2);
        assert_relative_eq!(line.length(), 7.0);
    }

    #[test]
    fn test_single_point_has_no_edges() {
        let line: Polyline2<f64> = std::iter::once(Point2::new(1.0, 1.0)).collect();
        assert_eq!(line.edges().count(), 0);
        assert_eq!(line.length(), 0.0);
        assert_eq!(line.first(), line.last());
    }
}
