//! Planar geometry: points, lines and a closed family of 2D shapes.
//!
//! Layout
//! - Primitives: `point::Point`, `line::Line`.
//! - Shapes: `polygon::Polygon`, `conic::{Ellipse, Circle}`,
//!   `quad::{Rectangle, Square}`, `triangle::Triangle`, all implementing the
//!   `shape::Shape` capability set.
//! - `rand`: deterministic random shapes for tests and benchmarks.
//!
//! Numerics
//! - Comparisons are tolerance based (`cfg::EPS = 1e-9`); see `cfg`.
//! - Constructors validate their input and return `Result<_, GeomError>`;
//!   rejected inputs are logged at `debug` level through `tracing`.

pub mod cfg;
pub mod conic;
pub mod error;
pub mod line;
pub mod point;
pub mod polygon;
pub mod quad;
pub mod rand;
pub mod shape;
pub mod triangle;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use conic::{Circle, Ellipse};
pub use error::{GeomError, Result};
pub use line::Line;
pub use point::Point;
pub use polygon::Polygon;
pub use quad::{Rectangle, Square};
pub use shape::{Shape, ShapeRef};
pub use triangle::Triangle;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::EPS;
    pub use crate::rand::{draw_polygon_radial, draw_triangle, RadialCfg, ReplayToken, VertexCount};
    pub use crate::{
        Circle, Ellipse, GeomError, Line, Point, Polygon, Rectangle, Shape, ShapeRef, Square,
        Triangle,
    };
}
