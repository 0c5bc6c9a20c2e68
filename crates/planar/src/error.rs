//! Error type for shape construction and derived queries.

use thiserror::Error;

/// Errors surfaced by constructors and by queries that solve for a point.
///
/// Cross-variant comparisons are not errors; they return `false`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// Two points that must be distinct coincide (within `EPS`).
    #[error("degenerate input: points coincide")]
    CoincidentPoints,

    /// Lines are parallel or coincident; no unique intersection.
    #[error("lines are parallel")]
    ParallelLines,

    /// Implicit-form coefficients with `a = b = 0` (or non-finite).
    #[error("degenerate line coefficients")]
    DegenerateLine,

    /// A polygon needs at least three vertices.
    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices {
        /// Number of vertices supplied.
        count: usize,
    },

    /// Triangle vertices lie on one line.
    #[error("triangle vertices are collinear")]
    CollinearVertices,

    /// Ellipse focal sum does not exceed the focal distance.
    #[error("ellipse diameter {diameter} must exceed focal distance {focal_distance}")]
    InvalidDiameter {
        /// Requested focal sum.
        diameter: f64,
        /// Distance between the foci.
        focal_distance: f64,
    },

    /// Circle radius must be finite and positive.
    #[error("circle radius {radius} must be finite and positive")]
    InvalidRadius {
        /// Requested radius.
        radius: f64,
    },

    /// Rectangle side ratio must be finite and positive.
    #[error("rectangle side ratio {ratio} must be finite and positive")]
    InvalidRatio {
        /// Requested ratio.
        ratio: f64,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GeomError>;
