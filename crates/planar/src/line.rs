//! Infinite line in implicit form `a·x + b·y + c = 0`.
//!
//! - Constructors: two points, point + slope, slope + intercept, raw coefficients.
//! - Equality is geometric: coefficient triples compare equal when proportional,
//!   so `(a, b, c)` and `(2a, 2b, 2c)` describe the same line.
//! - Every constructor guarantees `(a, b) ≠ 0`, so reflection is always defined.
//!
//! Code cross-refs: `point::Point::reflect_line`, `quad::Rectangle::center`,
//! `triangle::Triangle`.

use nalgebra::{matrix, vector};

use crate::cfg::EPS;
use crate::error::{GeomError, Result};
use crate::point::Point;

/// Line `a·x + b·y + c = 0` with `(a, b) ≠ 0`.
#[derive(Clone, Copy, Debug)]
pub struct Line {
    a: f64,
    b: f64,
    c: f64,
}

impl Line {
    /// Line through two distinct points.
    pub fn through(p: Point, q: Point) -> Result<Line> {
        if p == q {
            tracing::debug!(?p, ?q, "line through coincident points");
            return Err(GeomError::CoincidentPoints);
        }
        let a = q.y - p.y;
        let b = p.x - q.x;
        Ok(Line {
            a,
            b,
            c: -a * p.x - b * p.y,
        })
    }

    /// Line through `p` with slope `k` (`y − p.y = k (x − p.x)`).
    #[inline]
    pub fn from_point_slope(p: Point, k: f64) -> Line {
        Line {
            a: k,
            b: -1.0,
            c: p.y - k * p.x,
        }
    }

    /// Line `y = k·x + intercept`.
    #[inline]
    pub fn from_slope_intercept(k: f64, intercept: f64) -> Line {
        Line {
            a: k,
            b: -1.0,
            c: intercept,
        }
    }

    /// Line from raw implicit-form coefficients.
    pub fn from_coefficients(a: f64, b: f64, c: f64) -> Result<Line> {
        if !(a.is_finite() && b.is_finite() && c.is_finite()) || a.hypot(b) <= EPS {
            tracing::debug!(a, b, c, "degenerate line coefficients");
            return Err(GeomError::DegenerateLine);
        }
        Ok(Line { a, b, c })
    }

    /// Line through `p` with direction vector `dir`.
    pub fn from_point_direction(p: Point, dir: Point) -> Result<Line> {
        Line::through(p, p + dir)
    }

    /// Coefficients `(a, b, c)` as stored.
    #[inline]
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// Normal vector `(a, b)`.
    #[inline]
    pub fn normal(&self) -> Point {
        Point::new(self.a, self.b)
    }

    /// Direction vector `(−b, a)`.
    #[inline]
    pub fn direction(&self) -> Point {
        self.normal().perpendicular()
    }

    /// Signed distance from `p`; the sign tells the side relative to the normal.
    #[inline]
    pub fn signed_distance(&self, p: Point) -> f64 {
        (self.a * p.x + self.b * p.y + self.c) / self.a.hypot(self.b)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.signed_distance(p).abs() < EPS
    }

    /// Mirror image of `p`: `p − 2(a·x+b·y+c)/(a²+b²) · (a, b)`.
    pub fn reflected_point(&self, p: Point) -> Point {
        let factor = 2.0 * (self.a * p.x + self.b * p.y + self.c) / (self.a * self.a + self.b * self.b);
        Point::new(p.x - factor * self.a, p.y - factor * self.b)
    }

    /// Unique intersection point; fails for parallel or coincident lines.
    pub fn intersection(&self, other: &Line) -> Result<Point> {
        let (a1, b1, c1) = self.unit();
        let (a2, b2, c2) = other.unit();
        let m = matrix![a1, b1; a2, b2];
        // Unit normals: det = sin of the angle between the lines.
        if m.determinant().abs() < EPS {
            return Err(GeomError::ParallelLines);
        }
        let inv = m.try_inverse().ok_or(GeomError::ParallelLines)?;
        Ok(Point::from(inv * vector![-c1, -c2]))
    }

    /// Coefficients scaled so that `(a, b)` has unit length.
    #[inline]
    fn unit(&self) -> (f64, f64, f64) {
        let n = self.a.hypot(self.b);
        (self.a / n, self.b / n, self.c / n)
    }
}

impl PartialEq for Line {
    /// Proportional coefficient triples (all 2×2 cross terms vanish).
    ///
    /// Terms involving `c` carry its rounding error, so their tolerance grows
    /// with the distance of the lines from the origin.
    fn eq(&self, other: &Self) -> bool {
        let (a1, b1, c1) = self.unit();
        let (a2, b2, c2) = other.unit();
        let c_tol = EPS * 1f64.max(c1.abs()).max(c2.abs());
        (a1 * b2 - b1 * a2).abs() < EPS
            && (a1 * c2 - c1 * a2).abs() < c_tol
            && (c1 * b2 - b1 * c2).abs() < c_tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_under_rescale() {
        let l1 = Line::from_coefficients(1.0, -2.0, 3.0).unwrap();
        let l2 = Line::from_coefficients(2.0, -4.0, 6.0).unwrap();
        let l3 = Line::from_coefficients(-0.5, 1.0, -1.5).unwrap();
        assert_eq!(l1, l2);
        assert_eq!(l1, l3);
        let shifted = Line::from_coefficients(1.0, -2.0, 3.5).unwrap();
        assert_ne!(l1, shifted);
    }

    #[test]
    fn equality_far_from_origin() {
        // y = x − 1e7 + 1, built from two different pairs of its points.
        let l1 = Line::through(Point::new(1e7, 1.0), Point::new(1e7 + 1.0, 2.0)).unwrap();
        let l2 = Line::through(Point::new(1e7 + 5.0, 6.0), Point::new(1e7 + 10.0, 11.0)).unwrap();
        assert_eq!(l1, l2);
        let shifted = Line::through(Point::new(1e7, 2.0), Point::new(1e7 + 1.0, 3.0)).unwrap();
        assert_ne!(l1, shifted);
    }

    #[test]
    fn constructors_agree() {
        // y = 2x + 1
        let a = Line::from_slope_intercept(2.0, 1.0);
        let b = Line::from_point_slope(Point::new(1.0, 3.0), 2.0);
        let c = Line::through(Point::new(0.0, 1.0), Point::new(-1.0, -1.0)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert!(a.contains(Point::new(2.0, 5.0)));
    }

    #[test]
    fn degenerate_inputs_are_rejected() {
        let p = Point::new(1.0, 1.0);
        assert_eq!(Line::through(p, p), Err(GeomError::CoincidentPoints));
        assert_eq!(
            Line::from_coefficients(0.0, 0.0, 1.0).unwrap_err(),
            GeomError::DegenerateLine
        );
    }

    #[test]
    fn intersection_and_parallel() {
        let x_axis = Line::through(Point::ORIGIN, Point::new(1.0, 0.0)).unwrap();
        let diag = Line::through(Point::new(0.0, -2.0), Point::new(2.0, 0.0)).unwrap();
        assert_eq!(x_axis.intersection(&diag).unwrap(), Point::new(2.0, 0.0));
        let parallel = Line::from_slope_intercept(0.0, 5.0);
        assert_eq!(x_axis.intersection(&parallel), Err(GeomError::ParallelLines));
        assert_eq!(x_axis.intersection(&x_axis), Err(GeomError::ParallelLines));
    }

    #[test]
    fn reflection_is_involution() {
        let l = Line::from_slope_intercept(0.5, -1.0);
        let p = Point::new(3.0, 7.0);
        let q = l.reflected_point(p);
        assert!((l.signed_distance(p) + l.signed_distance(q)).abs() < 1e-12);
        assert_eq!(l.reflected_point(q), p);
        // Points on the line are fixed.
        let on = Point::new(2.0, 0.0);
        assert_eq!(l.reflected_point(on), on);
    }
}
