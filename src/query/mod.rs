//! Shape queries: closest point, containment, overlap and intersection.
//!
//! Every query is decomposed into checks of the other shape against single
//! edges of the receiver. [`Shape2`] is that interface; the result
//! records live in this module as well.

pub(crate) mod edges;
mod result;
mod shape;

pub use result::{ClosestPointResult, CollisionPoint, IntersectionMap, SegmentContact};
pub use shape::Shape2;
