//! Cyclic vertex matching and isometry-invariant signatures.
//!
//! - `same_cycle`: vertex lists describe the same boundary, whatever the start
//!   vertex and winding direction.
//! - `congruent` / `similar`: compare per-vertex signatures `(edge length, signed
//!   turn)` under cyclic shifts, against the other walk, its reversal and the
//!   mirror images of both. Turn angles make this strictly stronger than
//!   comparing area/perimeter.
//!
//! Costs are O(n²) in the vertex count; polygons here are small.

use std::f64::consts::PI;

use crate::cfg::{approx_eq, EPS, REL_EPS};
use crate::point::Point;

/// Edge length and the signed turn at the edge's end vertex.
#[derive(Clone, Copy, Debug)]
struct Corner {
    len: f64,
    turn: f64,
}

/// Same boundary up to start vertex and winding.
pub(crate) fn same_cycle(a: &[Point], b: &[Point]) -> bool {
    let n = a.len();
    if n != b.len() {
        return false;
    }
    if n == 0 {
        return true;
    }
    (0..n).filter(|&s| a[0] == b[s]).any(|s| {
        let forward = (0..n).all(|i| a[i] == b[(s + i) % n]);
        forward || (0..n).all(|i| a[i] == b[(s + n - i) % n])
    })
}

/// Isometric copies: equal lengths and turns under some alignment.
pub(crate) fn congruent(a: &[Point], b: &[Point]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let sa = signature(a, 1.0);
    walks(b).any(|w| cyclic_match(&sa, &signature(&w, 1.0)))
}

/// Uniformly scaled isometric copies: lengths compared relative to perimeter.
pub(crate) fn similar(a: &[Point], b: &[Point]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let pa = perimeter(a);
    let pb = perimeter(b);
    if pa <= EPS || pb <= EPS {
        // Collapsed to a point: only similar to another collapsed polygon.
        return pa <= EPS && pb <= EPS;
    }
    let sa = signature(a, 1.0 / pa);
    walks(b).any(|w| cyclic_match(&sa, &signature(&w, 1.0 / pb)))
}

pub(crate) fn perimeter(v: &[Point]) -> f64 {
    let n = v.len();
    (0..n).map(|i| v[i].distance(v[(i + 1) % n])).sum()
}

/// The given walk, its reversal, and the mirror image of both.
fn walks(v: &[Point]) -> impl Iterator<Item = Vec<Point>> + '_ {
    let mirror = |p: &Point| Point::new(p.x, -p.y);
    let fwd: Vec<Point> = v.to_vec();
    let rev: Vec<Point> = v.iter().rev().copied().collect();
    let fwd_m: Vec<Point> = v.iter().map(mirror).collect();
    let rev_m: Vec<Point> = v.iter().rev().map(mirror).collect();
    [fwd, rev, fwd_m, rev_m].into_iter()
}

fn signature(v: &[Point], len_scale: f64) -> Vec<Corner> {
    let n = v.len();
    (0..n)
        .map(|i| {
            let e1 = v[(i + 1) % n] - v[i];
            let e2 = v[(i + 2) % n] - v[(i + 1) % n];
            Corner {
                len: e1.length() * len_scale,
                turn: e1.cross(e2).atan2(e1.dot(e2)),
            }
        })
        .collect()
}

fn cyclic_match(a: &[Corner], b: &[Corner]) -> bool {
    let n = a.len();
    if n != b.len() {
        return false;
    }
    (0..n).any(|s| (0..n).all(|i| corner_eq(a[i], b[(s + i) % n])))
}

#[inline]
fn corner_eq(a: Corner, b: Corner) -> bool {
    approx_eq(a.len, b.len) && angle_diff(a.turn, b.turn) <= REL_EPS * PI
}

/// Absolute angular difference on the circle, in [0, π].
#[inline]
fn angle_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(2.0 * PI);
    d.min(2.0 * PI - d)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(c: &[(f64, f64)]) -> Vec<Point> {
        c.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn same_cycle_ignores_start_and_winding() {
        let a = pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0)]);
        let shifted = pts(&[(2.0, 1.0), (0.0, 1.0), (0.0, 0.0), (2.0, 0.0)]);
        let reversed = pts(&[(2.0, 0.0), (0.0, 0.0), (0.0, 1.0), (2.0, 1.0)]);
        let crossed = pts(&[(0.0, 0.0), (2.0, 1.0), (2.0, 0.0), (0.0, 1.0)]);
        assert!(same_cycle(&a, &shifted));
        assert!(same_cycle(&a, &reversed));
        assert!(!same_cycle(&a, &crossed));
    }

    #[test]
    fn turn_signature_separates_equal_edge_multisets() {
        // Same edge lengths in the same order, but a rhombus is not a square.
        let square = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let rhombus = pts(&[(0.0, 0.0), (1.0, 0.0), (1.5, 0.75f64.sqrt()), (0.5, 0.75f64.sqrt())]);
        assert!(!congruent(&square, &rhombus));
        assert!(!similar(&square, &rhombus));
    }

    #[test]
    fn angle_diff_wraps() {
        assert!(angle_diff(PI, -PI) < 1e-12);
        assert!((angle_diff(0.1, -0.1) - 0.2).abs() < 1e-12);
    }
}
