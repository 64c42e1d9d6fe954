//! Random sampling on and inside polygons, and random polygon generation.
//!
//! Every function takes the random source as an argument, so a seeded
//! `StdRng` gives reproducible output.

use super::Polygon;
use crate::primitives::{Point2, Segment2, Vec2};
use num_traits::Float;
use rand::distributions::WeightedIndex;
use rand::seq::SliceRandom;
use rand::Rng;

fn to_f64<F: Float>(v: F) -> f64 {
    v.to_f64().unwrap_or(0.0)
}

impl<F: Float> Polygon<F> {
    /// Uniformly distributed point inside the polygon.
    ///
    /// Picks a triangle of an ear-clipping triangulation weighted by area,
    /// then a uniform point in it. `None` for degenerate or zero-area
    /// polygons.
    pub fn random_point_inside<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Point2<F>> {
        self.triangulate_with_rng(rng).random_point(rng)
    }

    /// `count` uniformly distributed interior points sharing one
    /// triangulation. Empty when the polygon has no area.
    pub fn random_points_inside<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Vec<Point2<F>> {
        let triangles = self.triangulate_with_rng(rng);
        (0..count).map_while(|_| triangles.random_point(rng)).collect()
    }

    /// One of the vertices, uniformly; `None` without vertices.
    pub fn random_vertex<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Point2<F>> {
        self.points().choose(rng).copied()
    }

    /// Uniformly chosen edge, closing edge included.
    pub fn random_edge<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Segment2<F>> {
        if self.is_degenerate() {
            return None;
        }
        self.edge(rng.gen_range(0..self.len()))
    }

    /// Uniformly distributed point on the boundary; edges are weighted by
    /// their length.
    pub fn random_point_on_edge<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Point2<F>> {
        let edges = self.edges();
        let weights = WeightedIndex::new(edges.iter().map(|e| to_f64(e.length()))).ok()?;
        let edge = edges[rng.sample(&weights)];
        let t = F::from(rng.gen::<f64>())?;
        Some(edge.point_at(t))
    }

    /// Random star-shaped polygon around `center`.
    ///
    /// The full turn is cut into `count` equal sectors and one vertex is
    /// placed at a uniform angle inside each, at a uniform distance
    /// between `min_len` and `max_len` from `center`. Every gap between
    /// neighbouring angles is below two sectors, so from 4 vertices up
    /// `center` sees the whole outline and it cannot self-intersect. The
    /// result winds counter-clockwise.
    ///
    /// # Example
    ///
    /// ```
    /// use polyshape::polygon::Polygon;
    /// use polyshape::Point2;
    /// use rand::SeedableRng;
    ///
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    /// let rock = Polygon::generate(Point2::new(0.0, 0.0), 12, 1.0, 2.0, &mut rng);
    /// assert_eq!(rock.len(), 12);
    /// assert!(!rock.is_clockwise());
    /// assert!(rock.contains_point(Point2::new(0.0, 0.0)));
    /// ```
    pub fn generate<R: Rng + ?Sized>(
        center: Point2<F>,
        count: usize,
        min_len: F,
        max_len: F,
        rng: &mut R,
    ) -> Self {
        let (lo, hi) = (to_f64(min_len.min(max_len)), to_f64(min_len.max(max_len)));
        let sector = std::f64::consts::TAU / count.max(1) as f64;

        let mut poly: Self = (0..count)
            .filter_map(|i| {
                let angle = F::from((i as f64 + rng.gen::<f64>()) * sector)?;
                let len = F::from(rng.gen_range(lo..=hi))?;
                Some(center + Vec2::from_angle(angle) * len)
            })
            .collect();
        poly.fix_winding_order();
        poly
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Rect2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn l_shape() -> Polygon<f64> {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 2.0),
            Point2::new(0.0, 2.0),
        ])
    }

    #[test]
    fn test_points_inside_concave() {
        let poly = l_shape();
        let mut rng = StdRng::seed_from_u64(11);
        let points = poly.random_points_inside(200, &mut rng);
        assert_eq!(points.len(), 200);
        for p in points {
            // Inclusive bounds: samples may land on a triangle edge.
            assert!(p.x >= 0.0 && p.y >= 0.0 && p.x <= 2.0 && p.y <= 2.0);
            assert!(p.x <= 1.0 + 1e-9 || p.y <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let poly = l_shape();
        let a = poly.random_point_inside(&mut StdRng::seed_from_u64(3));
        let b = poly.random_point_inside(&mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
        assert!(a.is_some());
    }

    #[test]
    fn test_degenerate_sampling() {
        let mut rng = StdRng::seed_from_u64(0);
        let empty: Polygon<f64> = Polygon::empty();
        assert!(empty.random_point_inside(&mut rng).is_none());
        assert!(empty.random_points_inside(5, &mut rng).is_empty());
        assert!(empty.random_vertex(&mut rng).is_none());
        assert!(empty.random_edge(&mut rng).is_none());
        assert!(empty.random_point_on_edge(&mut rng).is_none());
    }

    #[test]
    fn test_vertex_and_edge() {
        let poly = Polygon::from(Rect2::new(0.0, 0.0, 1.0, 1.0));
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            let v = poly.random_vertex(&mut rng).unwrap();
            assert!(poly.points().contains(&v));

            let e = poly.random_edge(&mut rng).unwrap();
            assert!(poly.edges().contains(&e));
        }
    }

    #[test]
    fn test_point_on_edge_lies_on_boundary() {
        let poly = Polygon::from(Rect2::new(0.0, 0.0, 4.0, 1.0));
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..50 {
            let p = poly.random_point_on_edge(&mut rng).unwrap();
            assert!(poly.distance_squared_to(p).unwrap() < 1e-18);
        }
    }

    #[test]
    fn test_generate_ranges() {
        let center = Point2::new(3.0, -2.0);
        let mut rng = StdRng::seed_from_u64(21);
        let poly = Polygon::generate(center, 16, 2.0, 3.0, &mut rng);
        assert_eq!(poly.len(), 16);
        for p in poly.iter() {
            let d = p.distance(center);
            assert!((2.0 - 1e-9..=3.0 + 1e-9).contains(&d));
        }
        assert!(poly.signed_area() > 0.0);
    }
}
