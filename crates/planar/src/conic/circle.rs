use std::f64::consts::PI;

use crate::cfg::{approx_eq, EPS};
use crate::error::{GeomError, Result};
use crate::line::Line;
use crate::point::Point;
use crate::shape::{Shape, ShapeRef};

use super::Ellipse;

/// Circle: an ellipse with coincident foci and `diameter = 2r`.
///
/// Metrics use the exact circular formulas instead of the ellipse approximations.
#[derive(Clone, Debug)]
pub struct Circle {
    ellipse: Ellipse,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Result<Circle> {
        if !radius.is_finite() || radius <= 0.0 {
            tracing::debug!(radius, "rejected circle");
            return Err(GeomError::InvalidRadius { radius });
        }
        Ok(Circle {
            ellipse: Ellipse::centered(center, 2.0 * radius),
        })
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.ellipse.center()
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.ellipse.diameter() / 2.0
    }

    /// The underlying ellipse (eccentricity 0, no directrices).
    #[inline]
    pub fn as_ellipse(&self) -> &Ellipse {
        &self.ellipse
    }
}

impl Shape for Circle {
    fn view(&self) -> ShapeRef<'_> {
        ShapeRef::Circle(self)
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius()
    }

    fn area(&self) -> f64 {
        PI * self.radius() * self.radius()
    }

    fn equals(&self, other: &dyn Shape) -> bool {
        match other.view() {
            ShapeRef::Circle(o) => self.ellipse.same_as(&o.ellipse),
            _ => false,
        }
    }

    fn is_congruent_to(&self, other: &dyn Shape) -> bool {
        match other.view() {
            ShapeRef::Circle(o) => approx_eq(self.radius(), o.radius()),
            _ => false,
        }
    }

    fn is_similar_to(&self, other: &dyn Shape) -> bool {
        matches!(other.view(), ShapeRef::Circle(_))
    }

    fn contains_point(&self, p: Point) -> bool {
        p.distance(self.center()) <= self.radius() + EPS
    }

    fn rotate(&mut self, pivot: Point, angle: f64) {
        self.ellipse.rotate(pivot, angle);
    }

    fn reflect_point(&mut self, center: Point) {
        self.ellipse.reflect_point(center);
    }

    fn reflect_line(&mut self, axis: &Line) {
        self.ellipse.reflect_line(axis);
    }

    fn scale(&mut self, center: Point, k: f64) {
        self.ellipse.scale(center, k);
    }
}
