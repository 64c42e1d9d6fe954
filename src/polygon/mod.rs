//! The [`Polygon`] type and its algorithms.
//!
//! A polygon is an ordered ring of vertices, expected counter-clockwise
//! but not required to be. Fewer than 3 vertices is degenerate: it has no
//! area, no triangulation, contains nothing and answers queries with
//! `None`.
//!
//! Operations are grouped by concern:
//! - winding, area, centroid and measurements
//! - vertex density: reduction, refinement, cleanup, smoothing
//! - transforms, in place or on a copy
//! - ear-clipping and Delaunay triangulation
//! - boolean operations, splitting and fracturing
//! - closest point, containment, overlap and intersection queries
//! - random sampling
//!
//! # Example
//!
//! ```
//! use polyshape::polygon::Polygon;
//! use polyshape::{Circle2, Point2};
//!
//! let mut poly: Polygon<f64> = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(0.0, 2.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(2.0, 0.0),
//! ]);
//! assert!(poly.is_clockwise());
//!
//! poly.fix_winding_order();
//! assert!((poly.signed_area() - 4.0).abs() < 1e-12);
//!
//! let circle = Circle2::new(Point2::new(3.0, 1.0), 1.5);
//! assert!(poly.overlaps(&circle));
//! assert!(!poly.contains_shape(&circle));
//! ```

mod clip;
mod closest;
mod contains;
mod core;
mod density;
mod intersect;
mod overlap;
mod sampling;
mod transform;
mod triangulate;

pub use clip::{CombineResult, CutResult};
pub use contains::polygon_contains;
pub use self::core::{polygon_centroid, polygon_signed_area, Polygon};
pub(crate) use density::dedup_exact;
