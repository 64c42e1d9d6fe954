//! Floating-point geometric primitives and their pairwise operations.

mod circle2;
mod line2;
mod point2;
mod polyline2;
mod quad2;
mod ray2;
mod rect2;
mod segment2;
mod triangle2;
mod vec2;

pub use circle2::Circle2;
pub use line2::Line2;
pub use point2::Point2;
pub use polyline2::Polyline2;
pub use quad2::Quad2;
pub use ray2::Ray2;
pub use rect2::Rect2;
pub use segment2::Segment2;
pub use triangle2::Triangle2;
pub use vec2::Vec2;
