//! Polygons as ordered vertex walks.
//!
//! Conventions
//! - Vertices are stored in boundary walk order; the walk is cyclic and may be
//!   clockwise or counterclockwise.
//! - At least three vertices. Degenerate and self-intersecting walks are
//!   accepted: no operation panics on them, only the metrics lose meaning.
//! - Equality ignores the start vertex and the winding direction.
//!
//! Code cross-refs: `signature::{same_cycle, congruent, similar}`,
//! `quad::{Rectangle, Square}`, `triangle::Triangle` (all wrap a `Polygon`).

mod signature;

pub(crate) use signature::{congruent, same_cycle, similar};

use crate::cfg::EPS;
use crate::error::{GeomError, Result};
use crate::line::Line;
use crate::point::Point;
use crate::shape::{Shape, ShapeRef};

/// Closed polygon given by its vertex walk.
#[derive(Clone, Debug)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Result<Polygon> {
        if vertices.len() < 3 {
            tracing::debug!(count = vertices.len(), "polygon with too few vertices");
            return Err(GeomError::TooFewVertices {
                count: vertices.len(),
            });
        }
        Ok(Polygon { vertices })
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn vertices_count(&self) -> usize {
        self.vertices.len()
    }

    /// Directed edges `(v[i], v[i+1])`, wrapping last → first.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Signed area, positive for counterclockwise walks.
    ///
    /// Accumulates `cross(v0 − vi, v0 − v(i+1))` pinned at vertex 0.
    pub fn signed_area(&self) -> f64 {
        let v0 = self.vertices[0];
        let n = self.vertices.len();
        let twice: f64 = (1..n)
            .map(|i| (v0 - self.vertices[i]).cross(v0 - self.vertices[(i + 1) % n]))
            .sum();
        twice / 2.0
    }

    #[inline]
    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Convex iff consecutive edge turns never take both signs.
    /// Collinear triples (`|cross| <= EPS`) are neutral.
    pub fn is_convex(&self) -> bool {
        let n = self.vertices.len();
        let mut positive = false;
        let mut negative = false;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            let c = self.vertices[(i + 2) % n];
            let turn = (b - a).cross(c - b);
            if turn > EPS {
                positive = true;
            } else if turn < -EPS {
                negative = true;
            }
        }
        !(positive && negative)
    }
}

impl TryFrom<Vec<Point>> for Polygon {
    type Error = GeomError;
    fn try_from(vertices: Vec<Point>) -> Result<Self> {
        Polygon::new(vertices)
    }
}

/// `q` lies on segment `a`–`b`: perpendicular distance and projection within `EPS`.
fn on_segment(a: Point, b: Point, q: Point) -> bool {
    let ab = b - a;
    let len = ab.length();
    if len <= EPS {
        return q == a;
    }
    let aq = q - a;
    if (ab.cross(aq) / len).abs() > EPS {
        return false;
    }
    let t = ab.dot(aq) / len;
    t >= -EPS && t <= len + EPS
}

/// Boundary-inclusive even–odd test.
fn contains(vertices: &[Point], p: Point) -> bool {
    let n = vertices.len();
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let a = vertices[j];
        let b = vertices[i];
        if on_segment(a, b, p) {
            return true;
        }
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (b.x - a.x) * (p.y - a.y) / (b.y - a.y);
            if x_cross > p.x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

impl Shape for Polygon {
    fn view(&self) -> ShapeRef<'_> {
        ShapeRef::Polygon(self)
    }

    fn perimeter(&self) -> f64 {
        signature::perimeter(&self.vertices)
    }

    fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    fn equals(&self, other: &dyn Shape) -> bool {
        match other.view() {
            ShapeRef::Polygon(o) => same_cycle(&self.vertices, &o.vertices),
            _ => false,
        }
    }

    fn is_congruent_to(&self, other: &dyn Shape) -> bool {
        match other.view() {
            ShapeRef::Polygon(o) => congruent(&self.vertices, &o.vertices),
            _ => false,
        }
    }

    fn is_similar_to(&self, other: &dyn Shape) -> bool {
        match other.view() {
            ShapeRef::Polygon(o) => similar(&self.vertices, &o.vertices),
            _ => false,
        }
    }

    fn contains_point(&self, p: Point) -> bool {
        contains(&self.vertices, p)
    }

    fn rotate(&mut self, pivot: Point, angle: f64) {
        for v in &mut self.vertices {
            v.rotate(pivot, angle);
        }
    }

    fn reflect_point(&mut self, center: Point) {
        for v in &mut self.vertices {
            v.reflect(center);
        }
    }

    fn reflect_line(&mut self, axis: &Line) {
        for v in &mut self.vertices {
            v.reflect_line(axis);
        }
    }

    fn scale(&mut self, center: Point, k: f64) {
        for v in &mut self.vertices {
            v.scale(center, k);
        }
    }
}

#[cfg(test)]
mod tests;
