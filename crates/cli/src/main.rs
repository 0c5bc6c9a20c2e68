use anyhow::{bail, ensure, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use planar::{
    Circle, Ellipse, GeomError, Point, Polygon, Rectangle, Shape, ShapeRef, Square, Triangle,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "planar")]
#[command(about = "Measure and query planar shapes", version = planar::VERSION)]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print area, perimeter and shape-specific data as JSON
    Measure(ShapeArgs),
    /// Report whether a point lies inside or on the boundary of a shape
    Contains {
        #[command(flatten)]
        shape: ShapeArgs,
        #[arg(long, allow_hyphen_values = true, value_parser = parse_point)]
        point: Point,
    },
    /// Print the classical centres of a triangle
    Centers {
        #[arg(long, num_args = 3, required = true, allow_hyphen_values = true, value_parser = parse_point)]
        triangle: Vec<Point>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Kind {
    Polygon,
    Triangle,
    Ellipse,
    Circle,
    Rectangle,
    Square,
}

/// A shape given by its kind, its defining points (`x,y`) and any scalar parameter.
///
/// Points accept negative coordinates and swallow everything after them, so
/// options come first: `planar measure ellipse --diameter 10 -3,0 3,0`.
#[derive(Args, Debug)]
struct ShapeArgs {
    kind: Kind,
    #[arg(required = true, allow_hyphen_values = true, value_parser = parse_point)]
    points: Vec<Point>,
    /// Ellipse diameter (sum of focal distances)
    #[arg(long)]
    diameter: Option<f64>,
    /// Circle radius
    #[arg(long)]
    radius: Option<f64>,
    /// Rectangle side ratio (long / short)
    #[arg(long)]
    ratio: Option<f64>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let out = match cmd.action {
        Action::Measure(args) => measure(&args)?,
        Action::Contains { shape, point } => contains(&shape, point)?,
        Action::Centers { triangle } => centers(&triangle)?,
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn parse_point(s: &str) -> std::result::Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let coord = |t: &str| {
        t.trim()
            .parse::<f64>()
            .map_err(|e| format!("bad coordinate `{t}`: {e}"))
    };
    Ok(Point::new(coord(x)?, coord(y)?))
}

fn expect_points(kind: Kind, points: &[Point], n: usize) -> Result<()> {
    ensure!(
        points.len() == n,
        "{kind:?} takes {n} points, got {}",
        points.len()
    );
    Ok(())
}

fn build(args: &ShapeArgs) -> Result<Box<dyn Shape>> {
    let p = &args.points;
    let shape: Box<dyn Shape> = match args.kind {
        Kind::Polygon => Box::new(Polygon::new(p.clone()).context("building polygon")?),
        Kind::Triangle => {
            expect_points(args.kind, p, 3)?;
            Box::new(Triangle::new(p[0], p[1], p[2]).context("building triangle")?)
        }
        Kind::Ellipse => {
            expect_points(args.kind, p, 2)?;
            let Some(d) = args.diameter else {
                bail!("ellipse requires --diameter");
            };
            Box::new(Ellipse::new(p[0], p[1], d).context("building ellipse")?)
        }
        Kind::Circle => {
            expect_points(args.kind, p, 1)?;
            let Some(r) = args.radius else {
                bail!("circle requires --radius");
            };
            Box::new(Circle::new(p[0], r).context("building circle")?)
        }
        Kind::Rectangle => {
            expect_points(args.kind, p, 2)?;
            let Some(ratio) = args.ratio else {
                bail!("rectangle requires --ratio");
            };
            Box::new(Rectangle::new(p[0], p[1], ratio).context("building rectangle")?)
        }
        Kind::Square => {
            expect_points(args.kind, p, 2)?;
            Box::new(Square::new(p[0], p[1]).context("building square")?)
        }
    };
    Ok(shape)
}

fn xy(p: Point) -> [f64; 2] {
    [p.x, p.y]
}

fn details(shape: &dyn Shape) -> Result<Value> {
    let v = match shape.view() {
        ShapeRef::Polygon(s) => json!({
            "vertices": s.vertices().iter().copied().map(xy).collect::<Vec<_>>(),
            "convex": s.is_convex(),
            "counter_clockwise": s.is_counter_clockwise(),
        }),
        ShapeRef::Triangle(s) => json!({
            "vertices": s.vertices().iter().copied().map(xy).collect::<Vec<_>>(),
            "centroid": xy(s.centroid()?),
        }),
        ShapeRef::Ellipse(s) => json!({
            "center": xy(s.center()),
            "semi_major": s.semi_major(),
            "semi_minor": s.semi_minor(),
            "eccentricity": s.eccentricity(),
            "focal_distance": s.focal_distance(),
        }),
        ShapeRef::Circle(s) => json!({
            "center": xy(s.center()),
            "radius": s.radius(),
        }),
        ShapeRef::Rectangle(s) => {
            let (long, short) = s.sides();
            json!({
                "vertices": s.vertices().iter().copied().map(xy).collect::<Vec<_>>(),
                "center": xy(s.center()?),
                "sides": [long, short],
            })
        }
        ShapeRef::Square(s) => json!({
            "vertices": s.vertices().iter().copied().map(xy).collect::<Vec<_>>(),
            "center": xy(s.center()),
            "side": s.side(),
        }),
    };
    Ok(v)
}

fn measure(args: &ShapeArgs) -> Result<Value> {
    let shape = build(args)?;
    let kind = shape.view().kind();
    tracing::info!(kind, points = args.points.len(), "measure");
    Ok(json!({
        "kind": kind,
        "area": shape.area(),
        "perimeter": shape.perimeter(),
        "details": details(&*shape)?,
    }))
}

fn contains(args: &ShapeArgs, point: Point) -> Result<Value> {
    let shape = build(args)?;
    let inside = shape.contains_point(point);
    tracing::info!(kind = shape.view().kind(), x = point.x, y = point.y, inside, "contains");
    Ok(json!({
        "kind": shape.view().kind(),
        "point": xy(point),
        "inside": inside,
    }))
}

/// Euler line coefficients; `None` when all centres coincide (equilateral).
fn euler_line(t: &Triangle) -> Result<Option<[f64; 3]>> {
    // A collapsed triangle also reports coincident points; rule it out first.
    t.circumcenter().context("computing circumcenter")?;
    t.centroid().context("computing centroid")?;
    match t.euler_line() {
        Ok(l) => {
            let (a, b, c) = l.coefficients();
            Ok(Some([a, b, c]))
        }
        Err(GeomError::CoincidentPoints) => Ok(None),
        Err(e) => Err(e).context("computing Euler line"),
    }
}

/// Classical centres of a triangle, as reported by `centers`.
#[derive(Serialize)]
struct Centers {
    circumcenter: [f64; 2],
    circumradius: f64,
    centroid: [f64; 2],
    orthocenter: [f64; 2],
    incenter: [f64; 2],
    inradius: f64,
    nine_point_center: [f64; 2],
    nine_point_radius: f64,
    /// Coefficients `(a, b, c)`; `None` for equilateral triangles.
    euler_line: Option<[f64; 3]>,
}

fn centers(points: &[Point]) -> Result<Value> {
    expect_points(Kind::Triangle, points, 3)?;
    let t = Triangle::new(points[0], points[1], points[2]).context("building triangle")?;
    tracing::info!("centers");
    let outer = t.circumscribed_circle()?;
    let inner = t.inscribed_circle()?;
    let nine = t.nine_points_circle()?;
    let report = Centers {
        circumcenter: xy(outer.center()),
        circumradius: outer.radius(),
        centroid: xy(t.centroid()?),
        orthocenter: xy(t.orthocenter()?),
        incenter: xy(inner.center()),
        inradius: inner.radius(),
        nine_point_center: xy(nine.center()),
        nine_point_radius: nine.radius(),
        euler_line: euler_line(&t)?,
    };
    Ok(serde_json::to_value(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cmd {
        Cmd::try_parse_from(std::iter::once("planar").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn command_is_well_formed() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn parses_points() {
        assert_eq!(parse_point("1.5, -2").unwrap(), Point::new(1.5, -2.0));
        assert!(parse_point("1.5").is_err());
        assert!(parse_point("a,2").is_err());
    }

    #[test]
    fn measure_square() {
        let Action::Measure(args) = parse(&["measure", "square", "0,0", "2,2"]).action else {
            panic!("expected measure");
        };
        let out = measure(&args).unwrap();
        assert_eq!(out["kind"], "square");
        assert!((out["area"].as_f64().unwrap() - 4.0).abs() < 1e-12);
        assert!((out["details"]["side"].as_f64().unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn negative_coordinates_and_missing_parameters() {
        let Action::Measure(args) = parse(&["measure", "ellipse", "-3,0", "3,0"]).action else {
            panic!("expected measure");
        };
        assert!(measure(&args).is_err());

        let Action::Measure(args) =
            parse(&["measure", "ellipse", "--diameter", "10", "-3,0", "3,0"]).action
        else {
            panic!("expected measure");
        };
        let out = measure(&args).unwrap();
        assert!((out["details"]["semi_minor"].as_f64().unwrap() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn contains_on_polygon() {
        let Action::Contains { shape, point } =
            parse(&["contains", "polygon", "--point", "2,2", "0,0", "4,0", "4,4", "0,4"]).action
        else {
            panic!("expected contains");
        };
        assert_eq!(contains(&shape, point).unwrap()["inside"], true);
    }

    #[test]
    fn triangle_centres() {
        let Action::Centers { triangle } =
            parse(&["centers", "--triangle", "0,0", "4,0", "0,3"]).action
        else {
            panic!("expected centers");
        };
        let out = centers(&triangle).unwrap();
        let at = |key: &str, i: usize| out[key][i].as_f64().unwrap();
        assert!((at("circumcenter", 0) - 2.0).abs() < 1e-12);
        assert!((at("circumcenter", 1) - 1.5).abs() < 1e-12);
        assert!((at("incenter", 0) - 1.0).abs() < 1e-12);
        assert!((at("orthocenter", 1)).abs() < 1e-12);
        assert!((out["inradius"].as_f64().unwrap() - 1.0).abs() < 1e-12);
        assert!(out["euler_line"].is_array());

        let Action::Centers { triangle } =
            parse(&["centers", "--triangle", "0,0", "2,0", "1,1.7320508075688772"]).action
        else {
            panic!("expected centers");
        };
        assert!(centers(&triangle).unwrap()["euler_line"].is_null());
    }

    #[test]
    fn euler_line_errors_other_than_equilateral_propagate() {
        let equilateral =
            Triangle::new(Point::ORIGIN, Point::new(2.0, 0.0), Point::new(1.0, 3f64.sqrt())).unwrap();
        assert!(euler_line(&equilateral).unwrap().is_none());

        let scalene =
            Triangle::new(Point::ORIGIN, Point::new(7.0, 1.0), Point::new(2.0, 5.0)).unwrap();
        assert!(euler_line(&scalene).unwrap().is_some());

        // Collapsed after construction: the centres are undefined.
        let mut collapsed = scalene.clone();
        collapsed.scale(Point::ORIGIN, 0.0);
        assert!(euler_line(&collapsed).is_err());
    }
}
