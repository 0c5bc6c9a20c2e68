//! Print the classical centres of a triangle and check that the Euler line
//! passes through the orthocenter and the nine-point centre.
//!
//! Usage:
//!   cargo run -p planar --example triangle_centers -- 0,0 7,1 2,5

use planar::prelude::*;

fn parse_point(s: &str) -> Option<Point> {
    let (x, y) = s.split_once(',')?;
    Some(Point::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let pts: Vec<Point> = if args.is_empty() {
        vec![Point::new(0.0, 0.0), Point::new(7.0, 1.0), Point::new(2.0, 5.0)]
    } else {
        args.iter().filter_map(|a| parse_point(a)).collect()
    };
    if pts.len() != 3 {
        eprintln!("usage: triangle_centers x,y x,y x,y");
        return;
    }
    let t = match Triangle::new(pts[0], pts[1], pts[2]) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("invalid triangle: {e}");
            return;
        }
    };
    println!("area = {:.6}, perimeter = {:.6}", t.area(), t.perimeter());
    let centres = [
        ("circumcenter", t.circumcenter()),
        ("centroid", t.centroid()),
        ("orthocenter", t.orthocenter()),
        ("incenter", t.incenter()),
    ];
    for (name, c) in centres {
        match c {
            Ok(p) => println!("{name:>12}: ({:.6}, {:.6})", p.x, p.y),
            Err(e) => println!("{name:>12}: {e}"),
        }
    }
    match (t.euler_line(), t.orthocenter(), t.nine_points_circle()) {
        (Ok(line), Ok(h), Ok(nine)) => println!(
            "euler line through orthocenter: {}, through nine-point centre: {}",
            line.contains(h),
            line.contains(nine.center())
        ),
        _ => println!("euler line undefined (equilateral triangle)"),
    }
}
