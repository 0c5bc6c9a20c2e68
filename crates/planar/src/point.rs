//! 2D point / vector with arithmetic, metric and transform primitives.
//!
//! - `Point` doubles as a position and as a displacement vector.
//! - Equality is tolerance-based (`|Δx| < EPS && |Δy| < EPS`), hence not
//!   transitive; `Point` has no `Eq`/`Hash`.
//! - In-place transforms (`rotate`, `reflect`, `reflect_line`, `scale`) are what
//!   the shapes use; the `*ed` companions return a transformed copy.
//!
//! Code cross-refs: `line::Line::reflected_point`, `shape::Shape`.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use nalgebra::{Rotation2, Vector2};

use crate::cfg::EPS;
use crate::line::Line;

/// A point (or vector) in the plane.
#[derive(Clone, Copy, Debug, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean norm.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length2().sqrt()
    }

    /// Squared norm; use for comparisons to skip the square root.
    #[inline]
    pub fn length2(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Distance to `other`.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        (*self - other).length()
    }

    /// Scalar 2D cross product `x·o.y − o.x·y`.
    /// Positive when `other` lies counterclockwise of `self`.
    #[inline]
    pub fn cross(&self, other: Point) -> f64 {
        self.x * other.y - other.x * self.y
    }

    #[inline]
    pub fn dot(&self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Midpoint of the segment `self`–`other`.
    #[inline]
    pub fn midpoint(&self, other: Point) -> Point {
        (*self + other) / 2.0
    }

    /// Vector rotated by +90° (`(x, y) ↦ (−y, x)`), no trigonometry involved.
    #[inline]
    pub fn perpendicular(&self) -> Point {
        Point::new(-self.y, self.x)
    }

    /// Unit vector in the same direction; `None` for the zero vector.
    #[inline]
    pub fn normalized(&self) -> Option<Point> {
        let len = self.length();
        if len <= EPS || !len.is_finite() {
            return None;
        }
        Some(*self / len)
    }

    /// Rotate counterclockwise about `pivot` by `angle` radians.
    pub fn rotate(&mut self, pivot: Point, angle: f64) {
        let v = Rotation2::new(angle) * Vector2::from(*self - pivot);
        *self = pivot + Point::from(v);
    }

    /// Point reflection through `center`.
    #[inline]
    pub fn reflect(&mut self, center: Point) {
        *self = center * 2.0 - *self;
    }

    /// Mirror across `axis`.
    #[inline]
    pub fn reflect_line(&mut self, axis: &Line) {
        *self = axis.reflected_point(*self);
    }

    /// Homothety about `center` with factor `k`.
    #[inline]
    pub fn scale(&mut self, center: Point, k: f64) {
        *self = center + (*self - center) * k;
    }

    #[inline]
    pub fn rotated(mut self, pivot: Point, angle: f64) -> Point {
        self.rotate(pivot, angle);
        self
    }

    #[inline]
    pub fn reflected(mut self, center: Point) -> Point {
        self.reflect(center);
        self
    }

    #[inline]
    pub fn scaled(mut self, center: Point, k: f64) -> Point {
        self.scale(center, k);
        self
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < EPS && (self.y - other.y).abs() < EPS
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        Vector2::new(p.x, p.y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}
impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}
impl SubAssign for Point {
    #[inline]
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}
impl Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, k: f64) -> Point {
        Point::new(self.x * k, self.y * k)
    }
}
impl Div<f64> for Point {
    type Output = Point;
    #[inline]
    fn div(self, k: f64) -> Point {
        Point::new(self.x / k, self.y / k)
    }
}
impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn norms_and_cross() {
        let p = Point::new(3.0, 4.0);
        assert!((p.length() - 5.0).abs() < 1e-12);
        assert!((p.length2() - 25.0).abs() < 1e-12);
        // e_x × e_y = +1 (counterclockwise turn)
        assert!((Point::new(1.0, 0.0).cross(Point::new(0.0, 1.0)) - 1.0).abs() < 1e-12);
        assert!((Point::new(0.0, 1.0).cross(Point::new(1.0, 0.0)) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn rotate_quarter_turn_about_pivot() {
        let mut p = Point::new(2.0, 1.0);
        p.rotate(Point::new(1.0, 1.0), FRAC_PI_2);
        assert_eq!(p, Point::new(1.0, 2.0));
        // Half turn equals point reflection.
        let q = Point::new(5.0, -3.0);
        assert_eq!(q.rotated(Point::new(1.0, 1.0), PI), q.reflected(Point::new(1.0, 1.0)));
    }

    #[test]
    fn reflect_and_scale() {
        let mut p = Point::new(1.0, 2.0);
        p.reflect(Point::ORIGIN);
        assert_eq!(p, Point::new(-1.0, -2.0));
        let mut q = Point::new(3.0, 3.0);
        q.scale(Point::new(1.0, 1.0), 0.5);
        assert_eq!(q, Point::new(2.0, 2.0));
    }

    #[test]
    fn reflect_across_diagonal() {
        let axis = Line::through(Point::ORIGIN, Point::new(1.0, 1.0)).unwrap();
        let mut p = Point::new(2.0, 0.0);
        p.reflect_line(&axis);
        assert_eq!(p, Point::new(0.0, 2.0));
    }

    #[test]
    fn perpendicular_is_ccw_quarter_turn() {
        let v = Point::new(3.0, 1.0);
        let w = v.perpendicular();
        assert!(v.dot(w).abs() < 1e-12);
        assert!(v.cross(w) > 0.0);
        assert_eq!(w, v.rotated(Point::ORIGIN, FRAC_PI_2));
    }

    #[test]
    fn equality_is_tolerant() {
        assert_eq!(Point::new(1.0, 1.0), Point::new(1.0 + 1e-12, 1.0 - 1e-12));
        assert_ne!(Point::new(1.0, 1.0), Point::new(1.0 + 1e-6, 1.0));
        assert!(Point::ORIGIN.normalized().is_none());
    }
}
