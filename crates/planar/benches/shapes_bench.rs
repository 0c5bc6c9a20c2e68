//! Criterion benchmarks for polygon predicates.
//! Focus sizes: n in {4, 16, 64, 256} vertices.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use planar::prelude::*;

fn random_polygon(n: usize, seed: u64) -> Polygon {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        ..RadialCfg::default()
    };
    draw_polygon_radial(cfg, ReplayToken { seed, index: 0 }).unwrap()
}

fn bench_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon");
    for &n in &[4usize, 16, 64, 256] {
        group.bench_with_input(BenchmarkId::new("contains_point", n), &n, |b, &n| {
            let poly = random_polygon(n, 43);
            b.iter(|| poly.contains_point(Point::new(0.1, -0.2)))
        });

        group.bench_with_input(BenchmarkId::new("is_congruent_to", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let poly = random_polygon(n, 44);
                    let mut moved = poly.clone();
                    moved.rotate(Point::new(0.3, -0.2), 1.1);
                    moved.reflect_line(&Line::from_slope_intercept(0.5, 0.1));
                    (poly, moved)
                },
                |(poly, moved)| poly.is_congruent_to(&moved),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("area", n), &n, |b, &n| {
            let poly = random_polygon(n, 45);
            b.iter(|| poly.area())
        });
    }
    group.finish();
}

fn bench_triangle(c: &mut Criterion) {
    let t = draw_triangle(RadialCfg::default(), ReplayToken { seed: 46, index: 0 }).unwrap();
    c.bench_function("triangle/nine_points_circle", |b| {
        b.iter(|| t.nine_points_circle())
    });
}

criterion_group!(benches, bench_polygon, bench_triangle);
criterion_main!(benches);
