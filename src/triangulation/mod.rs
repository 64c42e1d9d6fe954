//! Triangle collections and Delaunay triangulation of point sets.
//!
//! [`Triangulation`] is what both polygon triangulation algorithms
//! produce, and what area-weighted sampling and per-triangle queries run
//! over.

mod collection;
mod delaunay;

pub use collection::Triangulation;
pub use delaunay::{delaunay_triangulation, in_circumcircle, supra_triangle};
