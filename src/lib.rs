//! polyshape - 2D polygon and triangulation geometry kernel
//!
//! Polygons and triangle collections with the algorithms a 2D game needs
//! around them: winding normalization, convex hulls, ear-clipping and
//! Delaunay triangulation, boolean clipping and splitting, and closest
//! point, containment, overlap and intersection queries against every
//! primitive shape.
//!
//! Everything is generic over [`num_traits::Float`], so `f32` and `f64`
//! both work. Randomized operations take a [`rand::Rng`], which makes
//! seeded runs reproducible.
//!
//! # Example
//!
//! ```
//! use polyshape::{Point2, Polygon, Segment2};
//! use rand::SeedableRng;
//!
//! let poly: Polygon<f64> = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(2.0, 1.0),
//!     Point2::new(0.0, 4.0),
//! ]);
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//! let triangles = poly.triangulate_with_rng(&mut rng);
//! assert_eq!(triangles.len(), 3);
//! assert!((triangles.area() - poly.area()).abs() < 1e-12);
//!
//! let cut = Segment2::new(Point2::new(-1.0, 2.0), Point2::new(5.0, 2.0));
//! assert_eq!(poly.intersect(&cut).map(|hits| hits.len()), Some(4));
//! ```

pub mod config;
pub mod error;
pub mod hull;
pub mod polygon;
pub mod primitives;
pub mod query;
pub mod triangulation;

pub use config::{ClipConfig, FillRule, FractureConfig, SubdivideConfig};
pub use error::GeomError;
pub use polygon::Polygon;
pub use primitives::{
    Circle2, Line2, Point2, Polyline2, Quad2, Ray2, Rect2, Segment2, Triangle2, Vec2,
};
pub use query::{ClosestPointResult, CollisionPoint, IntersectionMap, Shape2};
pub use triangulation::Triangulation;
