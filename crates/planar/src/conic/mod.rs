//! Conic shapes in focal form.
//!
//! - `Ellipse`: two foci plus the focal sum `diameter = 2a`; a point is on the
//!   boundary iff its distances to the foci add up to `diameter`.
//! - `Circle`: coincident foci, exact metrics.
//!
//! Containment is boundary inclusive with `EPS` slack. `scale` multiplies the
//! focal sum by `|k|` so the focal-sum definition survives the transform.

mod circle;
mod ellipse;

pub use circle::Circle;
pub use ellipse::Ellipse;
