//! Vertex density: reduction, refinement, cleanup and smoothing.

use super::Polygon;
use crate::primitives::{Point2, Vec2};
use num_traits::Float;

impl<F: Float> Polygon<F> {
    /// Removes vertices until at most `target` remain.
    ///
    /// Each step drops the start vertex of the shortest edge. A target
    /// below 3 clears the polygon.
    pub fn reduce_vertex_count(&mut self, target: usize) {
        if target < 3 {
            self.clear();
            return;
        }

        let points = self.points_mut();
        while points.len() > target {
            let n = points.len();
            let shortest = (0..n)
                .map(|i| (i, points[i].distance_squared(points[(i + 1) % n])))
                .fold((0, F::infinity()), |best, cur| if cur.1 < best.1 { cur } else { best })
                .0;
            points.remove(shortest);
        }
    }

    /// Removes roughly `factor` (0..=1) of the vertices.
    pub fn reduce_vertex_count_by_factor(&mut self, factor: F) {
        let factor = factor.max(F::zero()).min(F::one());
        let keep = F::from(self.len()).unwrap() * (F::one() - factor);
        let target = keep.round().to_usize().unwrap_or(0);
        self.reduce_vertex_count(target);
    }

    /// Splits the longest edge at its midpoint until at least `target`
    /// vertices exist. Degenerate polygons are left alone.
    pub fn increase_vertex_count(&mut self, target: usize) {
        if self.is_degenerate() {
            return;
        }

        let points = self.points_mut();
        while points.len() < target {
            let n = points.len();
            let (longest, _) = (0..n)
                .map(|i| (i, points[i].distance_squared(points[(i + 1) % n])))
                .fold((0, F::neg_infinity()), |best, cur| if cur.1 > best.1 { cur } else { best });
            let mid = points[longest].midpoint(points[(longest + 1) % n]);
            points.insert(longest + 1, mid);
        }
    }

    /// Drops vertices whose adjacent edges have an exactly zero cross
    /// product. Returns the number removed.
    pub fn remove_colinear_vertices(&mut self) -> usize {
        self.remove_colinear_vertices_eps(F::zero())
    }

    /// Like [`remove_colinear_vertices`](Self::remove_colinear_vertices)
    /// but treats `|cross| <= eps` as collinear.
    pub fn remove_colinear_vertices_eps(&mut self, eps: F) -> usize {
        let points = self.points_mut();
        let before = points.len();

        let mut i = 0;
        while points.len() >= 3 && i < points.len() {
            let n = points.len();
            let prev = points[(i + n - 1) % n];
            let cur = points[i];
            let next = points[(i + 1) % n];

            if (cur - prev).cross(next - cur).abs() <= eps {
                points.remove(i);
            } else {
                i += 1;
            }
        }

        before - points.len()
    }

    /// Drops every vertex whose squared distance to the following vertex
    /// is at most `tolerance_squared`, walking backwards so the wrap edge
    /// is checked too. Returns the number removed.
    pub fn remove_duplicates(&mut self, tolerance_squared: F) -> usize {
        let points = self.points_mut();
        let before = points.len();

        let mut i = points.len();
        while i > 0 {
            i -= 1;
            let n = points.len();
            if n < 2 {
                break;
            }
            if i >= n {
                continue;
            }
            if points[i].distance_squared(points[(i + 1) % n]) <= tolerance_squared {
                points.remove(i);
            }
        }

        before - points.len()
    }

    /// Laplacian smoothing with a pull toward the centroid.
    ///
    /// Every vertex moves by `amount * ((prev - p) + (next - p) +
    /// (centroid - p) * base_weight)`, computed from the unmodified
    /// vertices.
    pub fn smooth(&mut self, amount: F, base_weight: F) {
        if self.is_degenerate() {
            return;
        }
        let Some(centroid) = self.centroid() else {
            return;
        };

        let old = self.points().to_vec();
        let n = old.len();
        let points = self.points_mut();
        for i in 0..n {
            let p = old[i];
            let pull: Vec2<F> =
                (old[(i + n - 1) % n] - p) + (old[(i + 1) % n] - p) + (centroid - p) * base_weight;
            points[i] = p + pull * amount;
        }
    }

    /// Smoothed copy, see [`smooth`](Self::smooth).
    pub fn smoothed(&self, amount: F, base_weight: F) -> Self {
        let mut copy = self.clone();
        copy.smooth(amount, base_weight);
        copy
    }
}

/// Distinct points in first-seen order, compared exactly.
pub(crate) fn dedup_exact<F: Float>(points: &[Point2<F>]) -> Vec<Point2<F>> {
    let mut out: Vec<Point2<F>> = Vec::with_capacity(points.len());
    for &p in points {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}
