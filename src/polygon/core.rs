//! Core polygon type: construction, winding and measurements.

use crate::error::GeomError;
use crate::hull::convex_hull;
use crate::primitives::{Circle2, Point2, Polyline2, Quad2, Rect2, Segment2, Triangle2, Vec2};
use num_traits::Float;
use std::ops::Index;

/// A closed polygon given by its vertices; the last vertex connects back
/// to the first.
///
/// Counter-clockwise winding is expected but not enforced; use
/// [`fix_winding_order`](Self::fix_winding_order) after building a polygon
/// from untrusted input. Fewer than 3 vertices is a degenerate polygon:
/// it has zero area, triangulates to nothing and contains nothing.
/// Self-intersecting polygons are accepted.
///
/// # Example
///
/// ```
/// use polyshape::polygon::Polygon;
/// use polyshape::Point2;
///
/// let mut square = Polygon::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(0.0, 1.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(1.0, 0.0),
/// ]);
/// assert!(square.is_clockwise());
///
/// square.fix_winding_order();
/// assert!(!square.is_clockwise());
/// assert_eq!(square.area(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon<F> {
    points: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a polygon from vertices without validation.
    #[inline]
    pub fn new(points: Vec<Point2<F>>) -> Self {
        Self { points }
    }

    /// Polygon with no vertices.
    #[inline]
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Creates a polygon, rejecting degenerate or non-finite input.
    pub fn try_new(points: Vec<Point2<F>>) -> Result<Self, GeomError> {
        if points.len() < 3 {
            return Err(GeomError::DegeneratePolygon {
                vertices: points.len(),
            });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(GeomError::NonFinite { index });
        }
        Ok(Self { points })
    }

    /// Approximates a circle with `segments` vertices (at least 3),
    /// counter-clockwise.
    pub fn from_circle(circle: &Circle2<F>, segments: usize) -> Self {
        Self::new(circle.boundary_points(segments))
    }

    /// Convex hull of `points` as a counter-clockwise polygon.
    pub fn from_convex_hull(points: &[Point2<F>]) -> Self {
        Self::new(convex_hull(points))
    }

    // Vertex access

    /// Vertices in boundary order.
    #[inline]
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    /// Iterates over the vertices.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point2<F>> {
        self.points.iter()
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if there are no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True for fewer than 3 vertices.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3
    }

    /// Vertex at `index`, wrapping around in both directions.
    pub fn vertex(&self, index: isize) -> Option<Point2<F>> {
        let n = self.points.len() as isize;
        if n == 0 {
            return None;
        }
        Some(self.points[index.rem_euclid(n) as usize])
    }

    /// Edge from vertex `index` to the next one, wrapping.
    pub fn edge(&self, index: usize) -> Option<Segment2<F>> {
        if self.is_degenerate() {
            return None;
        }
        let n = self.points.len();
        let i = index % n;
        Some(Segment2::new(self.points[i], self.points[(i + 1) % n]))
    }

    /// All `n` closing edges; empty for a degenerate polygon.
    pub fn edges(&self) -> Vec<Segment2<F>> {
        if self.is_degenerate() {
            return Vec::new();
        }
        let n = self.points.len();
        (0..n)
            .map(|i| Segment2::new(self.points[i], self.points[(i + 1) % n]))
            .collect()
    }

    /// Appends a vertex after the last one.
    #[inline]
    pub fn push(&mut self, p: Point2<F>) {
        self.points.push(p);
    }

    /// Inserts a vertex before `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    #[inline]
    pub fn insert(&mut self, index: usize, p: Point2<F>) {
        self.points.insert(index, p);
    }

    /// Removes and returns the vertex at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Point2<F> {
        self.points.remove(index)
    }

    /// Replaces the vertex at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn set(&mut self, index: usize, p: Point2<F>) {
        self.points[index] = p;
    }

    /// Removes every vertex.
    #[inline]
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Consumes the polygon, returning its vertices.
    #[inline]
    pub fn into_points(self) -> Vec<Point2<F>> {
        self.points
    }

    pub(crate) fn points_mut(&mut self) -> &mut Vec<Point2<F>> {
        &mut self.points
    }

    /// Closed chain of the boundary: every vertex, then the first again.
    pub fn to_polyline(&self) -> Polyline2<F> {
        let mut points = self.points.clone();
        if let Some(&first) = self.points.first() {
            points.push(first);
        }
        Polyline2::new(points)
    }

    // Winding

    /// Shoelace area, positive for counter-clockwise winding.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.points)
    }

    /// Unsigned area.
    #[inline]
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// True for a negative signed area. Zero-area polygons are not
    /// clockwise.
    #[inline]
    pub fn is_clockwise(&self) -> bool {
        self.signed_area() < F::zero()
    }

    /// Reverses the vertex order in place.
    #[inline]
    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// Copy with the vertex order reversed.
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// Reverses the vertices if they wind counter-clockwise.
    pub fn make_clockwise(&mut self) {
        if self.signed_area() > F::zero() {
            self.reverse();
        }
    }

    /// Reverses the vertices if they wind clockwise.
    pub fn make_counter_clockwise(&mut self) {
        if self.is_clockwise() {
            self.reverse();
        }
    }

    /// Normalizes to counter-clockwise winding.
    #[inline]
    pub fn fix_winding_order(&mut self) {
        self.make_counter_clockwise();
    }

    // Measurements

    /// Area-weighted centroid.
    ///
    /// Falls back to the vertex mean for up to 3 vertices or zero area;
    /// `None` when there are no vertices.
    pub fn centroid(&self) -> Option<Point2<F>> {
        polygon_centroid(&self.points)
    }

    /// True if every turn has the same direction. Collinear turns are
    /// ignored; degenerate polygons are not convex.
    pub fn is_convex(&self) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }

        let mut sign = 0;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            let c = self.points[(i + 2) % n];
            let cross = (b - a).cross(c - b);

            let s = if cross > F::zero() {
                1
            } else if cross < F::zero() {
                -1
            } else {
                continue;
            };

            if sign == 0 {
                sign = s;
            } else if s != sign {
                return false;
            }
        }

        sign != 0
    }

    /// Total length of the closing edges.
    pub fn perimeter(&self) -> F {
        self.edges().iter().fold(F::zero(), |acc, e| acc + e.length())
    }

    /// Sum of squared edge lengths.
    pub fn perimeter_squared(&self) -> F {
        self.edges()
            .iter()
            .fold(F::zero(), |acc, e| acc + e.length_squared())
    }

    /// Axis-aligned bounds, `None` without vertices.
    pub fn bounding_box(&self) -> Option<Rect2<F>> {
        Rect2::from_points(&self.points)
    }

    /// Circle around the centroid reaching the furthest vertex.
    pub fn bounding_circle(&self) -> Option<Circle2<F>> {
        let center = self.centroid()?;
        let radius_sq = self
            .points
            .iter()
            .map(|p| p.distance_squared(center))
            .fold(F::zero(), F::max);
        Some(Circle2::new(center, radius_sq.sqrt()))
    }

    /// Index and position of the vertex nearest to `p`; first wins ties.
    pub fn closest_vertex(&self, p: Point2<F>) -> Option<(usize, Point2<F>)> {
        self.extreme_vertex(p, |d, best| d < best)
    }

    /// Index and position of the vertex furthest from `p`.
    pub fn furthest_vertex(&self, p: Point2<F>) -> Option<(usize, Point2<F>)> {
        self.extreme_vertex(p, |d, best| d > best)
    }

    fn extreme_vertex(
        &self,
        p: Point2<F>,
        better: impl Fn(F, F) -> bool,
    ) -> Option<(usize, Point2<F>)> {
        let mut best: Option<(usize, F)> = None;
        for (i, v) in self.points.iter().enumerate() {
            let d = v.distance_squared(p);
            if best.map_or(true, |(_, b)| better(d, b)) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| (i, self.points[i]))
    }

    /// Area swept by the polygon moving along `offset`: the convex hull of
    /// the vertices and their translated copies.
    pub fn projected_shape(&self, offset: Vec2<F>) -> Self {
        let mut all = self.points.clone();
        all.extend(self.points.iter().map(|&p| p + offset));
        Self::from_convex_hull(&all)
    }
}

impl<F: Float> Index<usize> for Polygon<F> {
    type Output = Point2<F>;

    #[inline]
    fn index(&self, index: usize) -> &Point2<F> {
        &self.points[index]
    }
}

impl<F: Float> From<Vec<Point2<F>>> for Polygon<F> {
    fn from(points: Vec<Point2<F>>) -> Self {
        Self::new(points)
    }
}

impl<F: Float> FromIterator<Point2<F>> for Polygon<F> {
    fn from_iter<I: IntoIterator<Item = Point2<F>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<F: Float> From<Polyline2<F>> for Polygon<F> {
    fn from(line: Polyline2<F>) -> Self {
        Self::new(line.into_points())
    }
}

impl<F: Float> From<Rect2<F>> for Polygon<F> {
    fn from(rect: Rect2<F>) -> Self {
        Self::new(rect.corners().to_vec())
    }
}

impl<F: Float> From<Triangle2<F>> for Polygon<F> {
    fn from(t: Triangle2<F>) -> Self {
        Self::new(t.points().to_vec())
    }
}

impl<F: Float> From<Quad2<F>> for Polygon<F> {
    fn from(q: Quad2<F>) -> Self {
        Self::new(q.points().to_vec())
    }
}

impl<'a, F: Float> IntoIterator for &'a Polygon<F> {
    type Item = &'a Point2<F>;
    type IntoIter = std::slice::Iter<'a, Point2<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Shoelace area of a closed vertex ring, positive for counter-clockwise
/// order. Zero for fewer than 3 vertices.
pub fn polygon_signed_area<F: Float>(points: &[Point2<F>]) -> F {
    let n = points.len();
    if n < 3 {
        return F::zero();
    }

    let mut area = F::zero();
    for i in 0..n {
        let j = (i + 1) % n;
        area = area + points[i].x * points[j].y - points[j].x * points[i].y;
    }

    area / F::from(2.0).unwrap()
}

/// Area-weighted centroid of a vertex ring with a vertex-mean fallback.
pub fn polygon_centroid<F: Float>(points: &[Point2<F>]) -> Option<Point2<F>> {
    if points.is_empty() {
        return None;
    }

    let area = polygon_signed_area(points);
    if points.len() <= 3 || area.abs() <= F::epsilon() {
        return Some(vertex_mean(points));
    }

    let n = points.len();
    let mut cx = F::zero();
    let mut cy = F::zero();
    for i in 0..n {
        let j = (i + 1) % n;
        let cross = points[i].x * points[j].y - points[j].x * points[i].y;
        cx = cx + (points[i].x + points[j].x) * cross;
        cy = cy + (points[i].y + points[j].y) * cross;
    }

    let six_area = F::from(6.0).unwrap() * area;
    Some(Point2::new(cx / six_area, cy / six_area))
}

fn vertex_mean<F: Float>(points: &[Point2<F>]) -> Point2<F> {
    let n = F::from(points.len()).unwrap();
    let (sx, sy) = points
        .iter()
        .fold((F::zero(), F::zero()), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point2::new(sx / n, sy / n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square() -> Polygon<f64> {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ])
    }

    #[test]
    fn test_try_new() {
        assert_eq!(
            Polygon::<f64>::try_new(vec![Point2::origin(); 2]),
            Err(GeomError::DegeneratePolygon { vertices: 2 })
        );
        let bad = vec![
            Point2::new(0.0, 0.0),
            Point2::new(f64::NAN, 0.0),
            Point2::new(1.0, 1.0),
        ];
        assert_eq!(Polygon::try_new(bad), Err(GeomError::NonFinite { index: 1 }));
        assert!(Polygon::try_new(unit_square().into_points()).is_ok());
    }

    #[test]
    fn test_winding() {
        let mut sq = unit_square();
        assert!(!sq.is_clockwise());
        assert_relative_eq!(sq.signed_area(), 1.0);

        sq.make_clockwise();
        assert!(sq.is_clockwise());
        assert_relative_eq!(sq.signed_area(), -1.0);
        assert_relative_eq!(sq.area(), 1.0);

        sq.fix_winding_order();
        assert_eq!(sq, unit_square());
    }

    #[test]
    fn test_degenerate() {
        let line = Polygon::new(vec![Point2::new(0.0_f64, 0.0), Point2::new(1.0, 1.0)]);
        assert!(line.is_degenerate());
        assert_eq!(line.area(), 0.0);
        assert!(line.edges().is_empty());
        assert!(line.edge(0).is_none());
        assert!(!line.is_convex());
        assert_eq!(line.centroid(), Some(Point2::new(0.5, 0.5)));
        assert!(Polygon::<f64>::empty().centroid().is_none());
    }

    #[test]
    fn test_centroid() {
        let c = unit_square().centroid().unwrap();
        assert_relative_eq!(c.x, 0.5);
        assert_relative_eq!(c.y, 0.5);

        // L-shape: area-weighted, not the vertex mean.
        let l = Polygon::new(vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 2.0),
            Point2::new(0.0, 2.0),
        ]);
        let c = l.centroid().unwrap();
        assert_relative_eq!(c.x, 5.0 / 6.0, epsilon = 1e-12);
        assert_relative_eq!(c.y, 5.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_is_convex() {
        assert!(unit_square().is_convex());
        assert!(unit_square().reversed().is_convex());

        let dart = Polygon::new(vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(4.0, 0.0),
            Point2::new(2.0, 4.0),
        ]);
        assert!(!dart.is_convex());

        // A collinear midpoint does not break convexity.
        let mut sq = unit_square();
        sq.insert(1, Point2::new(0.5, 0.0));
        assert!(sq.is_convex());
    }

    #[test]
    fn test_perimeter() {
        assert_relative_eq!(unit_square().perimeter(), 4.0);
        assert_relative_eq!(unit_square().perimeter_squared(), 4.0);
    }

    #[test]
    fn test_wrapping_access() {
        let sq = unit_square();
        assert_eq!(sq.vertex(-1), Some(Point2::new(0.0, 1.0)));
        assert_eq!(sq.vertex(4), Some(Point2::new(0.0, 0.0)));
        let e = sq.edge(3).unwrap();
        assert_eq!(e.end, Point2::new(0.0, 0.0));
    }

    #[test]
    fn test_bounds() {
        let sq = unit_square();
        assert_eq!(sq.bounding_box(), Some(Rect2::new(0.0, 0.0, 1.0, 1.0)));

        let c = sq.bounding_circle().unwrap();
        assert_relative_eq!(c.radius, 0.5_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_closest_and_furthest_vertex() {
        let sq = unit_square();
        assert_eq!(sq.closest_vertex(Point2::new(0.9, 0.8)).unwrap().0, 2);
        assert_eq!(sq.furthest_vertex(Point2::new(0.9, 0.8)).unwrap().0, 0);
        assert!(Polygon::<f64>::empty().closest_vertex(Point2::origin()).is_none());
    }

    #[test]
    fn test_projected_shape() {
        let swept = unit_square().projected_shape(Vec2::new(2.0, 0.0));
        assert_relative_eq!(swept.area(), 3.0, epsilon = 1e-12);
        assert!(!swept.is_clockwise());
    }

    #[test]
    fn test_to_polyline_closes_ring() {
        let line = unit_square().to_polyline();
        assert_eq!(line.len(), 5);
        assert_relative_eq!(line.length(), 4.0);
    }

    #[test]
    fn test_conversions() {
        let p: Polygon<f64> = Rect2::new(0.0, 0.0, 2.0, 3.0).into();
        assert_relative_eq!(p.signed_area(), 6.0);

        let t: Polygon<f64> = Triangle2::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        )
        .into();
        assert_eq!(t.len(), 3);

        let c = Polygon::from_circle(&Circle2::new(Point2::origin(), 1.0), 64);
        assert_relative_eq!(c.area(), std::f64::consts::PI, epsilon = 0.01);
    }
}
