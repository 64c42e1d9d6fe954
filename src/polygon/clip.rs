//! Polygon boolean operations, splitting and fracturing.
//!
//! Boolean operations run through `i_overlay` in `f64`. Results are the
//! outer contours of the produced shapes, wound counter-clockwise; holes
//! are dropped and contours with fewer than 3 points are discarded.
//!
//! Splitting subtracts a thin band (see [`ClipConfig::cut_width`]) around
//! a segment or polyline, so the pieces are separated by that gap.
//!
//! # Example
//!
//! ```
//! use polyshape::polygon::Polygon;
//! use polyshape::{Rect2, Segment2};
//!
//! let square = Polygon::from(Rect2::new(0.0, 0.0, 10.0, 10.0));
//! let pieces = square
//!     .split(&Segment2::from_coords(-1.0, 5.0, 11.0, 5.0))
//!     .unwrap();
//!
//! assert_eq!(pieces.len(), 2);
//! for piece in &pieces {
//!     assert!((piece.area() - 50.0_f64).abs() < 0.01);
//! }
//! ```

use super::Polygon;
use crate::config::{ClipConfig, FractureConfig};
use crate::primitives::{Line2, Point2, Polyline2, Segment2, Vec2};
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::single::SingleFloatOverlay;
use num_traits::Float;
use rand::Rng;
use tracing::debug;

/// Pieces left after cutting a shape out of a polygon.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CutResult<F> {
    /// What remains of the polygon outside the cut.
    pub new_shapes: Vec<Polygon<F>>,
    /// The parts of the polygon that were removed.
    pub cutouts: Vec<Polygon<F>>,
}

/// Result of merging another polygon into this one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CombineResult<F> {
    /// The merged outline(s).
    pub new_shapes: Vec<Polygon<F>>,
    /// The region both polygons covered.
    pub overlaps: Vec<Polygon<F>>,
}

type Contour = Vec<[f64; 2]>;

fn to_f64<F: Float>(v: F) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

fn from_f64<F: Float>(v: f64) -> F {
    F::from(v).unwrap_or_else(F::nan)
}

fn to_contour<F: Float>(points: &[Point2<F>]) -> Contour {
    points.iter().map(|p| [to_f64(p.x), to_f64(p.y)]).collect()
}

/// Runs one overlay and collects the outer contour of every shape.
fn overlay<F: Float>(
    subject: &Polygon<F>,
    clips: Vec<Contour>,
    rule: OverlayRule,
    config: &ClipConfig<F>,
) -> Vec<Polygon<F>> {
    if subject.is_degenerate() {
        return Vec::new();
    }

    let shapes = to_contour(subject.points()).overlay(&clips, rule, config.fill_rule.into());

    let mut out = Vec::with_capacity(shapes.len());
    for shape in shapes {
        let Some(outer) = shape.into_iter().next() else {
            continue;
        };
        if outer.len() < 3 {
            continue;
        }
        let mut polygon: Polygon<F> = outer
            .into_iter()
            .map(|[x, y]| Point2::new(from_f64(x), from_f64(y)))
            .collect();
        polygon.fix_winding_order();
        out.push(polygon);
    }

    if out.is_empty() {
        debug!(
            vertices = subject.len(),
            clips = clips.len(),
            "overlay produced no polygons"
        );
    }
    out
}

fn contours<F: Float>(polygons: &[Polygon<F>]) -> Vec<Contour> {
    polygons
        .iter()
        .filter(|p| !p.is_degenerate())
        .map(|p| to_contour(p.points()))
        .collect()
}

/// Rectangle of total width `width` centred on `segment`.
fn band<F: Float>(segment: &Segment2<F>, width: F) -> Contour {
    let half = width / F::from(2.0).unwrap();
    let offset: Vec2<F> = segment.direction().perpendicular().normalize_or_zero() * half;
    to_contour(&[
        segment.start - offset,
        segment.end - offset,
        segment.end + offset,
        segment.start + offset,
    ])
}

impl<F: Float> Polygon<F> {
    /// Region covered by either polygon. Disjoint operands come back as
    /// two pieces.
    pub fn union(&self, other: &Polygon<F>) -> Vec<Polygon<F>> {
        self.union_with(other, &ClipConfig::default())
    }

    /// [`union`](Self::union) with explicit options.
    pub fn union_with(&self, other: &Polygon<F>, config: &ClipConfig<F>) -> Vec<Polygon<F>> {
        self.union_many_with(std::slice::from_ref(other), config)
    }

    /// Union with every polygon in `others`.
    pub fn union_many(&self, others: &[Polygon<F>]) -> Vec<Polygon<F>> {
        self.union_many_with(others, &ClipConfig::default())
    }

    pub fn union_many_with(
        &self,
        others: &[Polygon<F>],
        config: &ClipConfig<F>,
    ) -> Vec<Polygon<F>> {
        overlay(self, contours(others), OverlayRule::Union, config)
    }

    /// Region covered by both polygons, empty when they are disjoint.
    pub fn intersection(&self, other: &Polygon<F>) -> Vec<Polygon<F>> {
        self.intersection_with(other, &ClipConfig::default())
    }

    /// [`intersection`](Self::intersection) with explicit options.
    pub fn intersection_with(
        &self,
        other: &Polygon<F>,
        config: &ClipConfig<F>,
    ) -> Vec<Polygon<F>> {
        let clips = contours(std::slice::from_ref(other));
        overlay(self, clips, OverlayRule::Intersect, config)
    }

    /// Region covered by this polygon and by every polygon in `others`.
    pub fn intersection_many(&self, others: &[Polygon<F>]) -> Vec<Polygon<F>> {
        self.intersection_many_with(others, &ClipConfig::default())
    }

    pub fn intersection_many_with(
        &self,
        others: &[Polygon<F>],
        config: &ClipConfig<F>,
    ) -> Vec<Polygon<F>> {
        others.iter().fold(vec![self.clone()], |acc, other| {
            acc.iter()
                .flat_map(|piece| piece.intersection_with(other, config))
                .collect()
        })
    }

    /// This polygon minus `other`.
    pub fn difference(&self, other: &Polygon<F>) -> Vec<Polygon<F>> {
        self.difference_with(other, &ClipConfig::default())
    }

    /// [`difference`](Self::difference) with explicit options.
    pub fn difference_with(
        &self,
        other: &Polygon<F>,
        config: &ClipConfig<F>,
    ) -> Vec<Polygon<F>> {
        self.difference_many_with(std::slice::from_ref(other), config)
    }

    /// This polygon minus every polygon in `others`.
    pub fn difference_many(&self, others: &[Polygon<F>]) -> Vec<Polygon<F>> {
        self.difference_many_with(others, &ClipConfig::default())
    }

    pub fn difference_many_with(
        &self,
        others: &[Polygon<F>],
        config: &ClipConfig<F>,
    ) -> Vec<Polygon<F>> {
        overlay(self, contours(others), OverlayRule::Difference, config)
    }

    /// Removes `cut` from this polygon, keeping the removed parts too.
    pub fn cut_shape(&self, cut: &Polygon<F>) -> CutResult<F> {
        self.cut_shape_with(cut, &ClipConfig::default())
    }

    pub fn cut_shape_with(&self, cut: &Polygon<F>, config: &ClipConfig<F>) -> CutResult<F> {
        CutResult {
            new_shapes: self.difference_with(cut, config),
            cutouts: self.intersection_with(cut, config),
        }
    }

    /// Merges `other` into this polygon, keeping the shared region too.
    pub fn combine_shape(&self, other: &Polygon<F>) -> CombineResult<F> {
        self.combine_shape_with(other, &ClipConfig::default())
    }

    pub fn combine_shape_with(
        &self,
        other: &Polygon<F>,
        config: &ClipConfig<F>,
    ) -> CombineResult<F> {
        CombineResult {
            new_shapes: self.union_with(other, config),
            overlaps: self.intersection_with(other, config),
        }
    }

    /// Splits along `segment`. `None` when the cut leaves nothing.
    ///
    /// A segment that does not cross the polygon leaves it whole (or
    /// notched), so check the piece count to see whether it was divided.
    pub fn split(&self, segment: &Segment2<F>) -> Option<Vec<Polygon<F>>> {
        self.split_with(segment, &ClipConfig::default())
    }

    /// [`split`](Self::split) with explicit options; `config.cut_width`
    /// sets the width of the removed band.
    pub fn split_with(
        &self,
        segment: &Segment2<F>,
        config: &ClipConfig<F>,
    ) -> Option<Vec<Polygon<F>>> {
        let pieces = overlay(
            self,
            vec![band(segment, config.cut_width)],
            OverlayRule::Difference,
            config,
        );
        (!pieces.is_empty()).then_some(pieces)
    }

    /// Splits along every edge of `polyline`.
    pub fn split_by_polyline(&self, polyline: &Polyline2<F>) -> Option<Vec<Polygon<F>>> {
        self.split_by_polyline_with(polyline, &ClipConfig::default())
    }

    pub fn split_by_polyline_with(
        &self,
        polyline: &Polyline2<F>,
        config: &ClipConfig<F>,
    ) -> Option<Vec<Polygon<F>>> {
        let bands: Vec<Contour> = polyline
            .edges()
            .filter(|e| e.length_squared() > F::zero())
            .map(|e| band(&e, config.cut_width))
            .collect();
        if bands.is_empty() {
            return None;
        }

        let pieces = overlay(self, bands, OverlayRule::Difference, config);
        (!pieces.is_empty()).then_some(pieces)
    }

    /// Builds a jagged line crossing the polygon through its centroid.
    ///
    /// The line runs at `config.angle` (random when unset). Its ends are
    /// the outermost boundary crossings, pushed slightly outside so a cut
    /// along it severs the polygon. `config.points` interior points are
    /// spaced evenly between the ends and each is displaced sideways by up
    /// to `max_offset_percentage` of the spacing.
    ///
    /// Returns `None` for degenerate polygons, invalid configs, or when the
    /// line misses the boundary (possible for self-intersecting input).
    pub fn generate_fracture_line<R: Rng + ?Sized>(
        &self,
        config: &FractureConfig<F>,
        rng: &mut R,
    ) -> Option<Polyline2<F>> {
        if let Err(err) = config.validate() {
            debug!(%err, "rejected fracture config");
            return None;
        }
        let centroid = self.centroid().filter(|_| !self.is_degenerate())?;

        let angle = match config.angle {
            Some(a) => a,
            None => from_f64(rng.gen::<f64>() * std::f64::consts::TAU),
        };
        let dir = Vec2::from_angle(angle);
        let line = Line2::new(centroid, dir);

        let (t_min, t_max) = self
            .edges()
            .iter()
            .filter_map(|e| e.intersect_line(&line))
            .map(|p| (p - centroid).dot(dir))
            .fold(None, |acc: Option<(F, F)>, t| match acc {
                None => Some((t, t)),
                Some((lo, hi)) => Some((lo.min(t), hi.max(t))),
            })?;

        let span = t_max - t_min;
        if span <= F::zero() {
            debug!(vertices = self.len(), "fracture line touches the polygon in one point");
            return None;
        }

        let margin = config.clip.cut_width + span * F::from(0.01).unwrap();
        let start = line.point_at(t_min - margin);
        let end = line.point_at(t_max + margin);

        let count = config.points;
        let step = span / from_f64((count + 1) as f64);
        let max_offset = to_f64(config.max_offset_percentage);
        let side = dir.perpendicular();

        let mut points = Vec::with_capacity(count + 2);
        points.push(start);
        for i in 1..=count {
            let base = line.point_at(t_min + step * from_f64(i as f64));
            let fraction: F = from_f64(rng.gen_range(-max_offset..=max_offset));
            points.push(base + side * (fraction * step));
        }
        points.push(end);

        Some(Polyline2::new(points))
    }

    /// Splits along a freshly generated fracture line.
    pub fn fracture_split<R: Rng + ?Sized>(
        &self,
        config: &FractureConfig<F>,
        rng: &mut R,
    ) -> Option<Vec<Polygon<F>>> {
        let line = self.generate_fracture_line(config, rng)?;
        self.split_by_polyline_with(&line, &config.clip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Rect2;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn square(x: f64, y: f64, size: f64) -> Polygon<f64> {
        Polygon::from(Rect2::new(x, y, size, size))
    }

    fn total_area(polys: &[Polygon<f64>]) -> f64 {
        polys.iter().map(Polygon::area).sum()
    }

    #[test]
    fn test_union() {
        let out = square(0.0, 0.0, 2.0).union(&square(1.0, 1.0, 2.0));
        assert_eq!(out.len(), 1);
        assert_relative_eq!(out[0].area(), 7.0, epsilon = 1e-9);
        assert!(!out[0].is_clockwise());
    }

    #[test]
    fn test_disjoint_union_keeps_both() {
        let out = square(0.0, 0.0, 1.0).union(&square(5.0, 0.0, 1.0));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_intersection_and_difference() {
        let a = square(0.0, 0.0, 2.0);
        let b = square(1.0, 1.0, 2.0);

        let both = a.intersection(&b);
        assert_eq!(both.len(), 1);
        assert_relative_eq!(both[0].area(), 1.0, epsilon = 1e-9);

        let rest = a.difference(&b);
        assert_relative_eq!(total_area(&rest), 3.0, epsilon = 1e-9);

        assert!(a.intersection(&square(10.0, 10.0, 1.0)).is_empty());
    }

    #[test]
    fn test_many_variants() {
        let base = square(0.0, 0.0, 4.0);
        let holes = [square(0.0, 0.0, 1.0), square(3.0, 3.0, 1.0)];
        assert_relative_eq!(total_area(&base.difference_many(&holes)), 14.0, epsilon = 1e-9);

        let clips = [square(1.0, 1.0, 3.0), square(2.0, 0.0, 2.0)];
        let inter = base.intersection_many(&clips);
        assert_relative_eq!(total_area(&inter), 2.0, epsilon = 1e-9);

        let merged = base.union_many(&[square(3.5, 0.0, 1.0), square(-0.5, 0.0, 1.0)]);
        assert_eq!(merged.len(), 1);
        assert_relative_eq!(merged[0].area(), 17.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cut_and_combine() {
        let a = square(0.0, 0.0, 2.0);
        let b = square(1.0, 0.0, 2.0);

        let cut = a.cut_shape(&b);
        assert_relative_eq!(total_area(&cut.new_shapes), 2.0, epsilon = 1e-9);
        assert_relative_eq!(total_area(&cut.cutouts), 2.0, epsilon = 1e-9);

        let combined = a.combine_shape(&b);
        assert_relative_eq!(total_area(&combined.new_shapes), 6.0, epsilon = 1e-9);
        assert_relative_eq!(total_area(&combined.overlaps), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_split_square() {
        let pieces = square(0.0, 0.0, 10.0)
            .split(&Segment2::from_coords(-1.0, 5.0, 11.0, 5.0))
            .unwrap();
        assert_eq!(pieces.len(), 2);
        for p in &pieces {
            assert_relative_eq!(p.area(), 50.0, epsilon = 0.01);
        }
    }

    #[test]
    fn test_split_missing_segment_keeps_polygon() {
        let pieces = square(0.0, 0.0, 1.0)
            .split(&Segment2::from_coords(5.0, 5.0, 6.0, 6.0))
            .unwrap();
        assert_eq!(pieces.len(), 1);
        assert_relative_eq!(pieces[0].area(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_split_degenerate() {
        let p = Polygon::new(vec![Point2::new(0.0_f64, 0.0), Point2::new(1.0, 0.0)]);
        assert!(p.split(&Segment2::from_coords(0.5, -1.0, 0.5, 1.0)).is_none());
    }

    #[test]
    fn test_split_by_polyline() {
        let bend = Polyline2::new(vec![
            Point2::new(-1.0, 2.0),
            Point2::new(2.0, 2.0),
            Point2::new(2.0, -1.0),
        ]);
        let pieces = square(0.0, 0.0, 4.0).split_by_polyline(&bend).unwrap();
        assert_eq!(pieces.len(), 2);
        assert_relative_eq!(total_area(&pieces), 16.0, epsilon = 0.05);
    }

    #[test]
    fn test_fracture_line_crosses_polygon() {
        let poly = square(0.0, 0.0, 10.0);
        let config = FractureConfig::default().angle(0.0);
        let line = poly
            .generate_fracture_line(&config, &mut StdRng::seed_from_u64(9))
            .unwrap();

        assert_eq!(line.len(), config.points + 2);
        let first = line.first().unwrap();
        let last = line.last().unwrap();
        assert!(first.x < 0.0 && last.x > 10.0);
        assert!(!poly.contains_point(first));
        assert!(!poly.contains_point(last));

        // Sideways offsets stay within the configured fraction of the spacing.
        let step = 10.0 / (config.points + 1) as f64;
        for p in &line.points()[1..line.len() - 1] {
            assert!((p.y - 5.0).abs() <= 0.25 * step + 1e-9);
        }
    }

    #[test]
    fn test_fracture_split() {
        let poly = square(0.0, 0.0, 10.0);
        let config = FractureConfig::default();
        for seed in 0..5 {
            let pieces = poly
                .fracture_split(&config, &mut StdRng::seed_from_u64(seed))
                .unwrap();
            assert_eq!(pieces.len(), 2);
            assert!(total_area(&pieces) < 100.0);
            assert!(total_area(&pieces) > 99.0);
        }
    }

    #[test]
    fn test_fracture_rejects_bad_config() {
        let config = FractureConfig::default().max_offset_percentage(-1.0);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(square(0.0, 0.0, 1.0)
            .generate_fracture_line(&config, &mut rng)
            .is_none());
    }
}
