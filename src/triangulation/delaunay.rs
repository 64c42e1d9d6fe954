//! Bowyer-Watson Delaunay triangulation of a point cloud.
//!
//! Points are inserted into a scaffold triangle enclosing the whole cloud.
//! Every insertion deletes the triangles whose circumcircle holds the new
//! point and fans the hole's rim to it. Triangles still touching a
//! scaffold corner are discarded at the end.
//!
//! The scaffold corners take part in circumcircle tests as points pushed
//! out to infinity, each one infinitely farther than the next. A circle
//! through one far corner degenerates into a half-plane, so the result is
//! never short of hull triangles however thin they are: it covers the
//! convex hull of the input exactly.
//!
//! Exact duplicate points are inserted once. Rim edges are collected in an
//! ordered map, so the output order depends only on the input. Fewer than
//! 3 distinct points, or a collinear cloud, give an empty triangulation.
//!
//! Runs in O(n²) for n points.
//!
//! # Example
//!
//! ```
//! use polyshape::triangulation::delaunay_triangulation;
//! use polyshape::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 1.0),
//!     Point2::new(0.5, 0.3),
//! ];
//!
//! let triangles = delaunay_triangulation(&points);
//! assert_eq!(triangles.len(), 3);
//!
//! // Output triangles are counter-clockwise.
//! for tri in triangles.iter() {
//!     assert!(tri.signed_area() > 0.0);
//! }
//! ```

use super::Triangulation;
use crate::polygon::dedup_exact;
use crate::primitives::{Point2, Rect2, Triangle2, Vec2};
use num_traits::Float;
use std::collections::BTreeMap;
use tracing::trace;

/// Corner distance of [`supra_triangle`], in bounding-box extents.
const SUPRA_MARGIN: f64 = 10.0;

/// A triangle represented by indices into the working point array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct IndexTriangle {
    a: usize,
    b: usize,
    c: usize,
}

impl IndexTriangle {
    #[inline]
    fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    #[inline]
    fn edges(&self) -> [(usize, usize); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    #[inline]
    fn contains_vertex(&self, v: usize) -> bool {
        self.a == v || self.b == v || self.c == v
    }
}

/// An undirected edge, smaller index first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Edge(usize, usize);

impl Edge {
    fn new(a: usize, b: usize) -> Self {
        if a < b {
            Edge(a, b)
        } else {
            Edge(b, a)
        }
    }
}

/// True if `p` lies strictly inside the circle through `a`, `b` and `c`.
///
/// The triangle must wind counter-clockwise; points on the circle count
/// as outside.
///
/// # Example
///
/// ```
/// use polyshape::triangulation::in_circumcircle;
/// use polyshape::Point2;
///
/// let a = Point2::new(0.0_f64, 0.0);
/// let b = Point2::new(1.0, 0.0);
/// let c = Point2::new(0.0, 1.0);
///
/// assert!(in_circumcircle(Point2::new(0.9, 0.9), a, b, c));
/// assert!(!in_circumcircle(Point2::new(1.0, 1.0), a, b, c));
/// assert!(!in_circumcircle(Point2::new(2.0, 0.5), a, b, c));
/// ```
pub fn in_circumcircle<F: Float>(p: Point2<F>, a: Point2<F>, b: Point2<F>, c: Point2<F>) -> bool {
    // | ax-px  ay-py  (ax-px)²+(ay-py)² |
    // | bx-px  by-py  (bx-px)²+(by-py)² | > 0  iff p is inside (CCW triangle)
    // | cx-px  cy-py  (cx-px)²+(cy-py)² |
    let ax = a.x - p.x;
    let ay = a.y - p.y;
    let bx = b.x - p.x;
    let by = b.y - p.y;
    let cx = c.x - p.x;
    let cy = c.y - p.y;

    let aa = ax * ax + ay * ay;
    let bb = bx * bx + by * by;
    let cc = cx * cx + cy * cy;

    let det = ax * (by * cc - cy * bb) - ay * (bx * cc - cx * bb) + aa * (bx * cy - cx * by);

    det > F::zero()
}

/// Positive if CCW, negative if CW, zero if collinear.
#[inline]
fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Direction in which scaffold corner `k` leaves the bounding-box centre.
fn corner_direction<F: Float>(k: usize) -> Vec2<F> {
    match k {
        0 => Vec2::new(-F::one(), -F::one()),
        1 => Vec2::new(F::one(), -F::one()),
        _ => Vec2::new(F::zero(), F::one()),
    }
}

/// Counter-clockwise scaffold triangle around `points`.
///
/// Its corners sit [`SUPRA_MARGIN`] bounding-box extents from the box
/// centre, down-left, down-right and straight up. The triangulation itself
/// treats these corners as infinitely far along the same directions.
/// Returns `None` for an empty slice or when all points coincide.
pub fn supra_triangle<F: Float>(points: &[Point2<F>]) -> Option<Triangle2<F>> {
    let bounds = Rect2::from_points(points)?;
    let delta = bounds.width.max(bounds.height);
    if !(delta > F::zero()) {
        return None;
    }

    let mid = bounds.center();
    let reach = F::from(SUPRA_MARGIN).unwrap() * delta;
    Some(Triangle2::new(
        mid + corner_direction(0) * reach,
        mid + corner_direction(1) * reach,
        mid + corner_direction(2) * reach,
    ))
}

/// Input points plus the three far scaffold corners, indexed `n..n + 3`.
struct Scaffold<F> {
    points: Vec<Point2<F>>,
    mid: Point2<F>,
}

impl<F: Float> Scaffold<F> {
    /// True if inserting `p` destroys `tri`, i.e. `p` lies strictly inside
    /// its circumcircle with far corners taken at infinity.
    fn in_conflict(&self, tri: &IndexTriangle, p: Point2<F>) -> bool {
        let n = self.points.len();
        let corners = [tri.a, tri.b, tri.c];
        let mut far = [0usize; 3];
        let mut far_count = 0;
        for (slot, &v) in corners.iter().enumerate() {
            if v >= n {
                far[far_count] = slot;
                far_count += 1;
            }
        }

        match far_count {
            0 => in_circumcircle(
                p,
                self.points[tri.a],
                self.points[tri.b],
                self.points[tri.c],
            ),
            // The circle through a, b and a far corner is the half-plane
            // left of a -> b together with the open chord.
            1 => {
                let k = far[0];
                let a = self.points[corners[(k + 1) % 3]];
                let b = self.points[corners[(k + 2) % 3]];
                let side = orient2d(a, b, p);
                side > F::zero() || (side == F::zero() && strictly_between(a, b, p))
            }
            // Two far corners: the nearer one fixes a line through the real
            // corner, the farther one picks the side. Lower rank is farther.
            2 => {
                let a = self.points[corners[3 - far[0] - far[1]]];
                let (ri, rj) = (corners[far[0]] - n, corners[far[1]] - n);
                let near: Vec2<F> = corner_direction(ri.max(rj));
                let want = near.cross(corner_direction(ri.min(rj)));

                let offset = p - a;
                let mut side = near.cross(offset);
                if side == F::zero() {
                    side = (self.mid - a).cross(offset);
                }
                if side == F::zero() {
                    return near.dot(offset) > F::zero();
                }
                (side > F::zero()) == (want > F::zero())
            }
            _ => true,
        }
    }
}

/// True if `p`, known to lie on the line through `a` and `b`, is strictly
/// between them.
#[inline]
fn strictly_between<F: Float>(a: Point2<F>, b: Point2<F>, p: Point2<F>) -> bool {
    (p - a).dot(b - a) > F::zero() && (p - b).dot(a - b) > F::zero()
}

/// Computes the Delaunay triangulation of a set of points.
///
/// Uses the Bowyer-Watson incremental insertion algorithm. The triangles
/// cover the convex hull of the points and are counter-clockwise. Returns
/// an empty triangulation when fewer than 3 distinct points are given or
/// the points are all collinear.
///
/// # Example
///
/// ```
/// use polyshape::triangulation::delaunay_triangulation;
/// use polyshape::Point2;
///
/// // Square with center point
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
///     Point2::new(0.5, 0.5),
/// ];
///
/// let triangles = delaunay_triangulation(&points);
/// assert_eq!(triangles.len(), 4);
/// ```
pub fn delaunay_triangulation<F: Float>(points: &[Point2<F>]) -> Triangulation<F> {
    let points = dedup_exact(points);
    if points.len() < 3 {
        trace!(points = points.len(), "too few distinct points for a triangulation");
        return Triangulation::new();
    }
    let Some(bounds) = Rect2::from_points(&points) else {
        return Triangulation::new();
    };

    let n = points.len();
    let scaffold = Scaffold {
        points,
        mid: bounds.center(),
    };

    // The far corners wind counter-clockwise and enclose every point.
    let mut triangles: Vec<IndexTriangle> = vec![IndexTriangle::new(n, n + 1, n + 2)];

    for i in 0..n {
        let p = scaffold.points[i];

        let bad_triangles: Vec<usize> = triangles
            .iter()
            .enumerate()
            .filter(|(_, tri)| scaffold.in_conflict(tri, p))
            .map(|(ti, _)| ti)
            .collect();

        // The cavity rim is made of edges used by exactly one bad triangle.
        // Each keeps the direction it had there, so the cavity lies on its
        // left and the new triangle is counter-clockwise.
        let mut rim: BTreeMap<Edge, Option<(usize, usize)>> = BTreeMap::new();
        for &ti in &bad_triangles {
            for (ea, eb) in triangles[ti].edges() {
                rim.entry(Edge::new(ea, eb))
                    .and_modify(|e| *e = None)
                    .or_insert(Some((ea, eb)));
            }
        }

        // Reverse order keeps the remaining indices valid.
        for &ti in bad_triangles.iter().rev() {
            triangles.swap_remove(ti);
        }

        for (ea, eb) in rim.into_values().flatten() {
            triangles.push(IndexTriangle::new(ea, eb, i));
        }
    }

    let points = &scaffold.points;
    triangles
        .into_iter()
        .filter(|tri| !(n..n + 3).any(|s| tri.contains_vertex(s)))
        .map(|tri| Triangle2::new(points[tri.a], points[tri.b], points[tri.c]))
        .collect()
}
