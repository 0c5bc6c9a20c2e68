use super::*;
use crate::conic::Circle;
use std::f64::consts::FRAC_PI_3;

fn poly(c: &[(f64, f64)]) -> Polygon {
    Polygon::new(c.iter().copied().map(Point::from).collect()).unwrap()
}

fn square4() -> Polygon {
    poly(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)])
}

#[test]
fn too_few_vertices() {
    let err = Polygon::new(vec![Point::ORIGIN, Point::new(1.0, 0.0)]).unwrap_err();
    assert_eq!(err, GeomError::TooFewVertices { count: 2 });
}

#[test]
fn area_perimeter_either_winding() {
    let ccw = square4();
    assert!((ccw.area() - 16.0).abs() < 1e-12);
    assert!((ccw.signed_area() - 16.0).abs() < 1e-12);
    assert!((ccw.perimeter() - 16.0).abs() < 1e-12);
    assert!(ccw.is_counter_clockwise());

    let cw = poly(&[(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)]);
    assert!((cw.area() - 16.0).abs() < 1e-12);
    assert!(cw.signed_area() < 0.0);
}

#[test]
fn containment_boundary_inclusive() {
    let s = square4();
    assert!(s.contains_point(Point::new(0.0, 0.0)));
    assert!(s.contains_point(Point::new(2.0, 0.0)));
    assert!(s.contains_point(Point::new(2.0, 2.0)));
    assert!(s.contains_point(Point::new(4.0, 1.0)));
    assert!(!s.contains_point(Point::new(5.0, 5.0)));
    assert!(!s.contains_point(Point::new(-1.0, 2.0)));
    // On the extension of an edge but outside the segment.
    assert!(!s.contains_point(Point::new(6.0, 0.0)));
}

#[test]
fn containment_non_convex() {
    let arrow = poly(&[(0.0, 0.0), (2.0, 0.0), (1.0, 1.0), (2.0, 2.0), (0.0, 2.0)]);
    assert!(arrow.contains_point(Point::new(0.5, 1.0)));
    assert!(!arrow.contains_point(Point::new(1.5, 1.0)));
    // Ray passes exactly through the reflex vertex.
    assert!(arrow.contains_point(Point::new(1.0, 1.0)));
}

#[test]
fn convexity() {
    assert!(square4().is_convex());
    let reflex = poly(&[(0.0, 0.0), (2.0, 0.0), (1.0, 1.0), (2.0, 2.0), (0.0, 2.0)]);
    assert!(!reflex.is_convex());
    // Collinear midpoint on an edge does not break convexity.
    let with_mid = poly(&[(0.0, 0.0), (2.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
    assert!(with_mid.is_convex());
}

#[test]
fn degenerate_walks_do_not_panic() {
    let flat = poly(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
    assert!(flat.area().abs() < 1e-12);
    assert!(flat.contains_point(Point::new(1.5, 0.0)));
    let repeated = poly(&[(1.0, 1.0), (1.0, 1.0), (1.0, 1.0)]);
    assert!(repeated.perimeter().abs() < 1e-12);
    assert!(repeated.is_similar_to(&repeated));
    let bow_tie = poly(&[(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)]);
    let _ = bow_tie.area();
    let _ = bow_tie.is_convex();
}

#[test]
fn equality_start_vertex_and_winding() {
    let a = square4();
    let b = poly(&[(4.0, 4.0), (0.0, 4.0), (0.0, 0.0), (4.0, 0.0)]);
    let c = poly(&[(4.0, 0.0), (0.0, 0.0), (0.0, 4.0), (4.0, 4.0)]);
    assert!(a.equals(&a));
    assert!(a.equals(&b) && b.equals(&a));
    assert!(a.equals(&c) && c.equals(&a));
    let moved = poly(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 5.0)]);
    assert!(!a.equals(&moved));
}

#[test]
fn cross_variant_comparisons_are_false() {
    let s = square4();
    let c = Circle::new(Point::ORIGIN, 2.0).unwrap();
    assert!(!s.equals(&c));
    assert!(!s.is_congruent_to(&c));
    assert!(!s.is_similar_to(&c));
}

#[test]
fn congruence_under_isometries() {
    let base = poly(&[(0.0, 0.0), (3.0, 0.0), (4.0, 2.0), (1.0, 3.0), (-1.0, 1.0)]);
    let mut moved = base.clone();
    moved.rotate(Point::new(2.0, -1.0), 0.7);
    moved.reflect_line(&Line::from_slope_intercept(1.3, 2.0));
    moved.reflect_point(Point::new(-3.0, 4.0));
    assert!(base.is_congruent_to(&moved));
    assert!(moved.is_congruent_to(&base));
    assert!(base.is_similar_to(&moved));
    assert!(!base.equals(&moved));

    let mut scaled = moved.clone();
    scaled.scale(Point::new(1.0, 1.0), 2.5);
    assert!(!base.is_congruent_to(&scaled));
    assert!(base.is_similar_to(&scaled));
}

#[test]
fn equal_metrics_do_not_imply_congruence() {
    // 3×2 rectangle: area 6, perimeter 10.
    let rect = poly(&[(0.0, 0.0), (3.0, 0.0), (3.0, 2.0), (0.0, 2.0)]);
    // Isosceles trapezoid, bases 3.2 and 1.8, height 2.4, legs 2.5: area 6, perimeter 10.
    let trap = poly(&[(0.0, 0.0), (3.2, 0.0), (2.5, 2.4), (0.7, 2.4)]);
    assert!((rect.area() - trap.area()).abs() < 1e-9);
    assert!((rect.perimeter() - trap.perimeter()).abs() < 1e-9);
    assert!(!rect.is_congruent_to(&trap));
    assert!(!rect.is_similar_to(&trap));
}

#[test]
fn equilateral_rotation_by_third_turn_is_equal() {
    let tri = poly(&[(0.0, 0.0), (2.0, 0.0), (1.0, 3f64.sqrt())]);
    let center = Point::new(1.0, 3f64.sqrt() / 3.0);
    let mut turned = tri.clone();
    turned.rotate(center, 2.0 * FRAC_PI_3);
    assert!(tri.equals(&turned));
}
