//! Rectangles and squares built from a diagonal.
//!
//! Vertex layout `[p1, q1, p2, q2]`: indices 0/2 and 1/3 are the diagonals, and
//! the same order is a boundary walk. Both types wrap a `Polygon` and reuse its
//! containment and matching; metrics use the closed forms.
//!
//! Code cross-refs: `polygon::{same_cycle, congruent, similar}`.

use crate::cfg::REL_EPS;
use crate::conic::Circle;
use crate::error::{GeomError, Result};
use crate::line::Line;
use crate::point::Point;
use crate::polygon::{self, Polygon};
use crate::shape::{Shape, ShapeRef};

/// Rectangle with vertices `[p1, q1, p2, q2]`.
#[derive(Clone, Debug)]
pub struct Rectangle {
    poly: Polygon,
}

impl Rectangle {
    /// Rectangle with opposite corners `p1`, `p2` and side ratio `ratio`
    /// (long / short; values below 1 are inverted).
    ///
    /// The long side leaves `p1` rotated by `−atan(1/ratio)` from the diagonal,
    /// the short side a quarter turn counterclockwise from the long side.
    pub fn new(p1: Point, p2: Point, ratio: f64) -> Result<Rectangle> {
        if !ratio.is_finite() || ratio <= 0.0 {
            tracing::debug!(ratio, "rejected rectangle ratio");
            return Err(GeomError::InvalidRatio { ratio });
        }
        let dir = (p2 - p1).normalized().ok_or_else(|| {
            tracing::debug!(?p1, ?p2, "rectangle corners coincide");
            GeomError::CoincidentPoints
        })?;
        let r = if ratio < 1.0 { 1.0 / ratio } else { ratio };
        let diagonal = p1.distance(p2);
        let short = diagonal / r.hypot(1.0);
        // Sides below the resolution of the diagonal collapse the rectangle.
        if short <= REL_EPS * diagonal {
            tracing::debug!(ratio, diagonal, "rectangle collapses to a segment");
            return Err(GeomError::InvalidRatio { ratio });
        }
        let long = r * short;
        let alpha = (1.0 / r).atan();

        let along = dir.rotated(Point::ORIGIN, -alpha);
        let q1 = p1 + along * long;
        let q2 = p1 + along.perpendicular() * short;
        Ok(Rectangle {
            poly: Polygon::new(vec![p1, q1, p2, q2])?,
        })
    }

    #[inline]
    pub fn as_polygon(&self) -> &Polygon {
        &self.poly
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        self.poly.vertices()
    }

    /// Lines through `v0, v2` and `v1, v3`.
    pub fn diagonals(&self) -> Result<(Line, Line)> {
        let v = self.poly.vertices();
        Ok((Line::through(v[0], v[2])?, Line::through(v[1], v[3])?))
    }

    /// Intersection of the diagonals.
    pub fn center(&self) -> Result<Point> {
        let (d1, d2) = self.diagonals()?;
        d1.intersection(&d2)
    }

    /// Side lengths `(long, short)`.
    pub fn sides(&self) -> (f64, f64) {
        let v = self.poly.vertices();
        let a = v[0].distance(v[1]);
        let b = v[1].distance(v[2]);
        (a.max(b), a.min(b))
    }
}

impl Shape for Rectangle {
    fn view(&self) -> ShapeRef<'_> {
        ShapeRef::Rectangle(self)
    }

    fn perimeter(&self) -> f64 {
        let (long, short) = self.sides();
        2.0 * (long + short)
    }

    fn area(&self) -> f64 {
        let (long, short) = self.sides();
        long * short
    }

    fn equals(&self, other: &dyn Shape) -> bool {
        match other.view() {
            ShapeRef::Rectangle(o) => polygon::same_cycle(self.vertices(), o.vertices()),
            _ => false,
        }
    }

    fn is_congruent_to(&self, other: &dyn Shape) -> bool {
        match other.view() {
            ShapeRef::Rectangle(o) => polygon::congruent(self.vertices(), o.vertices()),
            _ => false,
        }
    }

    fn is_similar_to(&self, other: &dyn Shape) -> bool {
        match other.view() {
            ShapeRef::Rectangle(o) => polygon::similar(self.vertices(), o.vertices()),
            _ => false,
        }
    }

    fn contains_point(&self, p: Point) -> bool {
        self.poly.contains_point(p)
    }

    fn rotate(&mut self, pivot: Point, angle: f64) {
        self.poly.rotate(pivot, angle);
    }

    fn reflect_point(&mut self, center: Point) {
        self.poly.reflect_point(center);
    }

    fn reflect_line(&mut self, axis: &Line) {
        self.poly.reflect_line(axis);
    }

    fn scale(&mut self, center: Point, k: f64) {
        self.poly.scale(center, k);
    }
}

/// Square with vertices `[p1, q1, p2, q2]`.
#[derive(Clone, Debug)]
pub struct Square {
    rect: Rectangle,
}

impl Square {
    /// Square with opposite corners `p1`, `p2`; the other corners sit at
    /// `midpoint ± perpendicular(p2 − p1) / 2`.
    pub fn new(p1: Point, p2: Point) -> Result<Square> {
        if p1 == p2 {
            tracing::debug!(?p1, "square corners coincide");
            return Err(GeomError::CoincidentPoints);
        }
        let mid = p1.midpoint(p2);
        let half_across = (p2 - p1).perpendicular() / 2.0;
        let poly = Polygon::new(vec![p1, mid + half_across, p2, mid - half_across])?;
        Ok(Square {
            rect: Rectangle { poly },
        })
    }

    #[inline]
    pub fn as_rectangle(&self) -> &Rectangle {
        &self.rect
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        self.rect.vertices()
    }

    #[inline]
    pub fn side(&self) -> f64 {
        let v = self.vertices();
        v[0].distance(v[1])
    }

    pub fn center(&self) -> Point {
        let v = self.vertices();
        v[0].midpoint(v[2])
    }

    /// Circle through all four corners.
    pub fn circumscribed_circle(&self) -> Result<Circle> {
        let center = self.center();
        Circle::new(center, center.distance(self.vertices()[0]))
    }

    /// Circle touching all four sides.
    pub fn inscribed_circle(&self) -> Result<Circle> {
        Circle::new(self.center(), self.side() / 2.0)
    }
}

impl Shape for Square {
    fn view(&self) -> ShapeRef<'_> {
        ShapeRef::Square(self)
    }

    fn perimeter(&self) -> f64 {
        4.0 * self.side()
    }

    fn area(&self) -> f64 {
        self.side() * self.side()
    }

    fn equals(&self, other: &dyn Shape) -> bool {
        match other.view() {
            ShapeRef::Square(o) => polygon::same_cycle(self.vertices(), o.vertices()),
            _ => false,
        }
    }

    /// Squares are congruent iff their sides match.
    fn is_congruent_to(&self, other: &dyn Shape) -> bool {
        match other.view() {
            ShapeRef::Square(o) => polygon::congruent(self.vertices(), o.vertices()),
            _ => false,
        }
    }

    /// Any two squares are similar.
    fn is_similar_to(&self, other: &dyn Shape) -> bool {
        matches!(other.view(), ShapeRef::Square(_))
    }

    fn contains_point(&self, p: Point) -> bool {
        self.rect.contains_point(p)
    }

    fn rotate(&mut self, pivot: Point, angle: f64) {
        self.rect.rotate(pivot, angle);
    }

    fn reflect_point(&mut self, center: Point) {
        self.rect.reflect_point(center);
    }

    fn reflect_line(&mut self, axis: &Line) {
        self.rect.reflect_line(axis);
    }

    fn scale(&mut self, center: Point, k: f64) {
        self.rect.scale(center, k);
    }
}
