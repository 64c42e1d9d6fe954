//! The [`Shape2`] trait: every shape kind seen from a single query edge.
//!
//! Polygon and triangulation queries walk their own edges and ask the
//! other shape about each edge in turn, so one generic implementation per
//! query family covers every shape kind.

use super::result::SegmentContact;
use crate::polygon::Polygon;
use crate::primitives::{
    Circle2, Line2, Point2, Polyline2, Quad2, Ray2, Rect2, Segment2, Triangle2,
};
use num_traits::Float;

/// Number of boundary samples a circle reports.
const CIRCLE_SAMPLES: usize = 16;

/// A shape that can be queried edge by edge.
pub trait Shape2<F: Float> {
    /// Points where `segment` crosses this shape's boundary.
    fn hits_with_segment(&self, segment: &Segment2<F>) -> Vec<Point2<F>>;

    /// True if `segment` touches the shape, interior included for closed
    /// shapes.
    fn overlaps_segment(&self, segment: &Segment2<F>) -> bool;

    /// Closest pair between `segment` and this shape's boundary.
    fn closest_to_segment(&self, segment: &Segment2<F>) -> Option<SegmentContact<F>>;

    /// Interior containment; always false for open shapes.
    fn contains_point(&self, p: Point2<F>) -> bool;

    /// Points that must all lie inside a container for the shape to fit.
    fn boundary_points(&self) -> Vec<Point2<F>>;

    /// True if the shape lies inside the region bounded by `edges`.
    ///
    /// The default requires every boundary point to satisfy `inside` and
    /// no container edge to cross the shape.
    fn fits_inside(&self, edges: &[Segment2<F>], inside: &dyn Fn(Point2<F>) -> bool) -> bool {
        let points = self.boundary_points();
        !points.is_empty()
            && points.iter().all(|&p| inside(p))
            && edges.iter().all(|e| self.hits_with_segment(e).is_empty())
    }
}

fn hits_on_edges<F: Float>(
    edges: impl IntoIterator<Item = Segment2<F>>,
    segment: &Segment2<F>,
) -> Vec<Point2<F>> {
    edges
        .into_iter()
        .filter_map(|e| e.intersect_segment(segment))
        .collect()
}

fn closest_on_edges<F: Float>(
    edges: impl IntoIterator<Item = Segment2<F>>,
    segment: &Segment2<F>,
) -> Option<SegmentContact<F>> {
    let mut best: Option<SegmentContact<F>> = None;
    for (i, edge) in edges.into_iter().enumerate() {
        let (on_segment, on_shape, d) = segment.closest_pair_segment(&edge);
        if best.map_or(true, |b| d < b.distance_squared) {
            best = Some(SegmentContact {
                on_segment,
                on_shape,
                shape_index: i,
                distance_squared: d,
            });
        }
    }
    best
}

fn single_contact<F: Float>(
    (on_segment, on_shape, d): (Point2<F>, Point2<F>, F),
) -> SegmentContact<F> {
    SegmentContact {
        on_segment,
        on_shape,
        shape_index: 0,
        distance_squared: d,
    }
}

/// Implements [`Shape2`] for a type with closed `edges()` and its own
/// `contains_point`.
macro_rules! impl_closed_shape {
    ($ty:ident, |$this:ident| $points:expr) => {
        impl<F: Float> Shape2<F> for $ty<F> {
            fn hits_with_segment(&self, segment: &Segment2<F>) -> Vec<Point2<F>> {
                hits_on_edges(self.edges(), segment)
            }

            fn overlaps_segment(&self, segment: &Segment2<F>) -> bool {
                self.edges()
                    .into_iter()
                    .any(|e| e.intersect_segment(segment).is_some())
                    || $ty::contains_point(self, segment.start)
            }

            fn closest_to_segment(&self, segment: &Segment2<F>) -> Option<SegmentContact<F>> {
                closest_on_edges(self.edges(), segment)
            }

            fn contains_point(&self, p: Point2<F>) -> bool {
                $ty::contains_point(self, p)
            }

            fn boundary_points(&self) -> Vec<Point2<F>> {
                let $this = self;
                $points
            }
        }
    };
}

impl_closed_shape!(Triangle2, |t| t.points().to_vec());
impl_closed_shape!(Quad2, |q| q.points().to_vec());
impl_closed_shape!(Rect2, |r| r.corners().to_vec());
impl_closed_shape!(Polygon, |p| p.points().to_vec());

impl<F: Float> Shape2<F> for Segment2<F> {
    fn hits_with_segment(&self, segment: &Segment2<F>) -> Vec<Point2<F>> {
        self.intersect_segment(segment).into_iter().collect()
    }

    fn overlaps_segment(&self, segment: &Segment2<F>) -> bool {
        self.intersect_segment(segment).is_some()
    }

    fn closest_to_segment(&self, segment: &Segment2<F>) -> Option<SegmentContact<F>> {
        Some(single_contact(segment.closest_pair_segment(self)))
    }

    fn contains_point(&self, _p: Point2<F>) -> bool {
        false
    }

    fn boundary_points(&self) -> Vec<Point2<F>> {
        vec![self.start, self.end]
    }
}

impl<F: Float> Shape2<F> for Ray2<F> {
    fn hits_with_segment(&self, segment: &Segment2<F>) -> Vec<Point2<F>> {
        segment.intersect_ray(self).into_iter().collect()
    }

    fn overlaps_segment(&self, segment: &Segment2<F>) -> bool {
        segment.intersect_ray(self).is_some()
    }

    fn closest_to_segment(&self, segment: &Segment2<F>) -> Option<SegmentContact<F>> {
        Some(single_contact(segment.closest_pair_ray(self)))
    }

    fn contains_point(&self, _p: Point2<F>) -> bool {
        false
    }

    fn boundary_points(&self) -> Vec<Point2<F>> {
        vec![self.origin]
    }

    /// Unbounded shapes never fit inside anything.
    fn fits_inside(&self, _edges: &[Segment2<F>], _inside: &dyn Fn(Point2<F>) -> bool) -> bool {
        false
    }
}

impl<F: Float> Shape2<F> for Line2<F> {
    fn hits_with_segment(&self, segment: &Segment2<F>) -> Vec<Point2<F>> {
        segment.intersect_line(self).into_iter().collect()
    }

    fn overlaps_segment(&self, segment: &Segment2<F>) -> bool {
        segment.intersect_line(self).is_some()
    }

    fn closest_to_segment(&self, segment: &Segment2<F>) -> Option<SegmentContact<F>> {
        Some(single_contact(segment.closest_pair_line(self)))
    }

    fn contains_point(&self, _p: Point2<F>) -> bool {
        false
    }

    fn boundary_points(&self) -> Vec<Point2<F>> {
        vec![self.origin]
    }

    fn fits_inside(&self, _edges: &[Segment2<F>], _inside: &dyn Fn(Point2<F>) -> bool) -> bool {
        false
    }
}

impl<F: Float> Shape2<F> for Circle2<F> {
    fn hits_with_segment(&self, segment: &Segment2<F>) -> Vec<Point2<F>> {
        self.intersect_segment(segment)
    }

    fn overlaps_segment(&self, segment: &Segment2<F>) -> bool {
        segment.overlaps_circle(self)
    }

    fn closest_to_segment(&self, segment: &Segment2<F>) -> Option<SegmentContact<F>> {
        Some(single_contact(segment.closest_pair_circle(self)))
    }

    fn contains_point(&self, p: Point2<F>) -> bool {
        self.contains(p)
    }

    fn boundary_points(&self) -> Vec<Point2<F>> {
        Circle2::boundary_points(self, CIRCLE_SAMPLES)
    }

    /// The centre must be inside and no container edge may reach the disk.
    fn fits_inside(&self, edges: &[Segment2<F>], inside: &dyn Fn(Point2<F>) -> bool) -> bool {
        let r_sq = self.radius * self.radius;
        inside(self.center)
            && edges
                .iter()
                .all(|e| e.distance_squared_to_point(self.center) > r_sq)
    }
}

impl<F: Float> Shape2<F> for Polyline2<F> {
    fn hits_with_segment(&self, segment: &Segment2<F>) -> Vec<Point2<F>> {
        hits_on_edges(self.edges(), segment)
    }

    fn overlaps_segment(&self, segment: &Segment2<F>) -> bool {
        self.edges().any(|e| e.intersect_segment(segment).is_some())
    }

    fn closest_to_segment(&self, segment: &Segment2<F>) -> Option<SegmentContact<F>> {
        closest_on_edges(self.edges(), segment)
    }

    fn contains_point(&self, _p: Point2<F>) -> bool {
        false
    }

    fn boundary_points(&self) -> Vec<Point2<F>> {
        self.points().to_vec()
    }
}

impl<F: Float> Shape2<F> for [Segment2<F>] {
    fn hits_with_segment(&self, segment: &Segment2<F>) -> Vec<Point2<F>> {
        hits_on_edges(self.iter().copied(), segment)
    }

    fn overlaps_segment(&self, segment: &Segment2<F>) -> bool {
        self.iter().any(|e| e.intersect_segment(segment).is_some())
    }

    fn closest_to_segment(&self, segment: &Segment2<F>) -> Option<SegmentContact<F>> {
        closest_on_edges(self.iter().copied(), segment)
    }

    fn contains_point(&self, _p: Point2<F>) -> bool {
        false
    }

    fn boundary_points(&self) -> Vec<Point2<F>> {
        self.iter().flat_map(|s| [s.start, s.end]).collect()
    }
}
