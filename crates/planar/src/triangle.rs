//! Triangles and their classical centres.
//!
//! Centres are recomputed from the three vertices on every call; nothing is
//! cached, so the transforms only need to move the vertices. Line-intersection
//! based queries return `Result` because a transform such as `scale(_, 0.0)`
//! can collapse a triangle after construction.

use crate::cfg::{EPS, REL_EPS};
use crate::conic::Circle;
use crate::error::{GeomError, Result};
use crate::line::Line;
use crate::point::Point;
use crate::polygon::{self, Polygon};
use crate::shape::{Shape, ShapeRef};

/// Triangle with vertices `[a, b, c]`.
#[derive(Clone, Debug)]
pub struct Triangle {
    poly: Polygon,
}

impl Triangle {
    /// Fails for collinear vertices: the sine of the angle at `a` is at most
    /// `REL_EPS`, so the test does not depend on the triangle's size.
    pub fn new(a: Point, b: Point, c: Point) -> Result<Triangle> {
        let (ab, ac) = (b - a, c - a);
        if ab.cross(ac).abs() <= REL_EPS * ab.length() * ac.length() {
            tracing::debug!(?a, ?b, ?c, "collinear triangle");
            return Err(GeomError::CollinearVertices);
        }
        Ok(Triangle {
            poly: Polygon::new(vec![a, b, c])?,
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

    #[inline]
    fn abc(&self) -> (Point, Point, Point) {
        let v = self.poly.vertices();
        (v[0], v[1], v[2])
    }

    /// Intersection of the perpendicular bisectors of `ab` and `bc`.
    pub fn circumcenter(&self) -> Result<Point> {
        let (a, b, c) = self.abc();
        let bisector_ab = Line::from_point_direction(a.midpoint(b), (a - b).perpendicular())?;
        let bisector_bc = Line::from_point_direction(b.midpoint(c), (b - c).perpendicular())?;
        bisector_ab.intersection(&bisector_bc)
    }

    pub fn circumscribed_circle(&self) -> Result<Circle> {
        let center = self.circumcenter()?;
        Circle::new(center, center.distance(self.abc().0))
    }

    /// Intersection of the medians from `c` and `a`.
    pub fn centroid(&self) -> Result<Point> {
        let (a, b, c) = self.abc();
        let median_c = Line::through(a.midpoint(b), c)?;
        let median_a = Line::through(b.midpoint(c), a)?;
        median_c.intersection(&median_a)
    }

    /// Intersection of the altitudes from `a` and `b`.
    pub fn orthocenter(&self) -> Result<Point> {
        let (a, b, c) = self.abc();
        let altitude_a = Line::from_point_direction(a, (c - b).perpendicular())?;
        let altitude_b = Line::from_point_direction(b, (c - a).perpendicular())?;
        altitude_a.intersection(&altitude_b)
    }

    /// Vertex average weighted by the length of the opposite side.
    pub fn incenter(&self) -> Result<Point> {
        let (a, b, c) = self.abc();
        let wa = b.distance(c);
        let wb = c.distance(a);
        let wc = a.distance(b);
        let total = wa + wb + wc;
        if total <= EPS {
            return Err(GeomError::CoincidentPoints);
        }
        Ok((a * wa + b * wb + c * wc) / total)
    }

    /// Centre at the incenter, radius `2·area / perimeter`.
    pub fn inscribed_circle(&self) -> Result<Circle> {
        Circle::new(self.incenter()?, 2.0 * self.area() / self.perimeter())
    }

    /// Line through the circumcenter and the centroid.
    ///
    /// Fails for equilateral triangles, where all centres coincide.
    pub fn euler_line(&self) -> Result<Line> {
        Line::through(self.circumcenter()?, self.centroid()?)
    }

    /// Centre halfway between orthocenter and circumcenter, half the circumradius.
    pub fn nine_points_circle(&self) -> Result<Circle> {
        let outer = self.circumscribed_circle()?;
        let center = self.orthocenter()?.midpoint(outer.center());
        Circle::new(center, outer.radius() / 2.0)
    }
}

impl Shape for Triangle {
    fn view(&self) -> ShapeRef<'_> {
        ShapeRef::Triangle(self)
    }

    fn perimeter(&self) -> f64 {
        self.poly.perimeter()
    }

    fn area(&self) -> f64 {
        let (a, b, c) = self.abc();
        (b - a).cross(c - a).abs() / 2.0
    }

    fn equals(&self, other: &dyn Shape) -> bool {
        match other.view() {
            ShapeRef::Triangle(o) => polygon::same_cycle(self.vertices(), o.vertices()),
            _ => false,
        }
    }

    fn is_congruent_to(&self, other: &dyn Shape) -> bool {
        match other.view() {
            ShapeRef::Triangle(o) => polygon::congruent(self.vertices(), o.vertices()),
            _ => false,
        }
    }

    fn is_similar_to(&self, other: &dyn Shape) -> bool {
        match other.view() {
            ShapeRef::Triangle(o) => polygon::similar(self.vertices(), o.vertices()),
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
