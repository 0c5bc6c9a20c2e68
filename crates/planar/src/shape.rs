//! Shape capability set shared by every planar shape.
//!
//! Dispatch
//! - `Shape` is object safe; callers may hold `&dyn Shape` or `Box<dyn Shape>`.
//! - Comparisons take `&dyn Shape` and match on [`ShapeRef`], a borrowed tag of
//!   the concrete variant. A variant pair that differs is simply `false`; there
//!   is no downcasting.
//! - No method has a default body: each variant states its own formula.

use crate::conic::{Circle, Ellipse};
use crate::line::Line;
use crate::point::Point;
use crate::polygon::Polygon;
use crate::quad::{Rectangle, Square};
use crate::triangle::Triangle;

/// Borrowed view of a concrete shape variant.
#[derive(Clone, Copy, Debug)]
pub enum ShapeRef<'a> {
    Polygon(&'a Polygon),
    Ellipse(&'a Ellipse),
    Circle(&'a Circle),
    Rectangle(&'a Rectangle),
    Square(&'a Square),
    Triangle(&'a Triangle),
}

impl ShapeRef<'_> {
    /// Variant name, used in logs and reports.
    pub fn kind(&self) -> &'static str {
        match self {
            ShapeRef::Polygon(_) => "polygon",
            ShapeRef::Ellipse(_) => "ellipse",
            ShapeRef::Circle(_) => "circle",
            ShapeRef::Rectangle(_) => "rectangle",
            ShapeRef::Square(_) => "square",
            ShapeRef::Triangle(_) => "triangle",
        }
    }
}

/// Metrics, predicates and in-place transforms of a planar shape.
pub trait Shape {
    /// Concrete variant of `self`.
    fn view(&self) -> ShapeRef<'_>;

    fn perimeter(&self) -> f64;
    fn area(&self) -> f64;

    /// Tolerance-based structural equality; `false` across variants.
    fn equals(&self, other: &dyn Shape) -> bool;
    /// Isometric copy (rotation, reflection, translation); `false` across variants.
    fn is_congruent_to(&self, other: &dyn Shape) -> bool;
    /// Uniformly scaled isometric copy; `false` across variants.
    fn is_similar_to(&self, other: &dyn Shape) -> bool;
    /// Boundary inclusive.
    fn contains_point(&self, p: Point) -> bool;

    /// Rotate counterclockwise about `pivot` by `angle` radians.
    fn rotate(&mut self, pivot: Point, angle: f64);
    /// Point reflection through `center`.
    fn reflect_point(&mut self, center: Point);
    /// Mirror across `axis`.
    fn reflect_line(&mut self, axis: &Line);
    /// Homothety about `center` with factor `k`.
    fn scale(&mut self, center: Point, k: f64);
}
