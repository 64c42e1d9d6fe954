//! Error types for polyshape operations.

use thiserror::Error;

/// Errors raised by validated construction and configuration.
///
/// Geometric queries never fail; degenerate input yields `None`, an empty
/// result, `false` or zero instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// A polygon needs at least three vertices.
    #[error("degenerate polygon: {vertices} vertices, at least 3 required")]
    DegeneratePolygon {
        /// Number of vertices supplied.
        vertices: usize,
    },

    /// A coordinate was NaN or infinite.
    #[error("non-finite coordinate at vertex {index}")]
    NonFinite {
        /// Index of the offending vertex.
        index: usize,
    },

    /// A configuration value is out of range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending field.
        name: &'static str,
        /// What the value violates.
        reason: &'static str,
    },
}
