// Copyright 2025 the Alembic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alembic_view2d::{EnvironmentBounds, ViewportTransform, Wormhole};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};

fn grid(n: usize, env: EnvironmentBounds) -> Vec<Point> {
    let side = (n as f64).sqrt().ceil() as usize;
    (0..n)
        .map(|i| {
            let fx = (i % side) as f64 / side as f64;
            let fy = (i / side) as f64 / side as f64;
            Point::new(
                env.offset.x + fx * env.width(),
                env.offset.y + fy * env.height(),
            )
        })
        .collect()
}

fn bench_forward_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform/to_view");
    let view = Size::new(1920.0, 1080.0);
    let flat = EnvironmentBounds::new(Point::new(-500.0, -500.0), Size::new(1000.0, 1000.0));
    let geo = EnvironmentBounds::new(Point::new(11.30, 44.47), Size::new(0.08, 0.05));

    let mut euclidean = ViewportTransform::euclidean(view, flat);
    euclidean.center();
    euclidean.optimal_zoom();
    euclidean
        .rotate_around_point(Point::new(960.0, 540.0), 0.3)
        .unwrap();
    let mut map = ViewportTransform::map(view, geo);
    map.optimal_zoom();

    // One frame's worth of entities, mapped once each.
    for len in [1_000usize, 10_000, 100_000] {
        group.throughput(Throughput::Elements(len as u64));
        let flat_points = grid(len, flat);
        let geo_points = grid(len, geo);

        group.bench_with_input(BenchmarkId::new("euclidean", len), &flat_points, |b, pts| {
            b.iter(|| {
                let mut acc = 0.0;
                for &p in pts {
                    acc += euclidean.to_view(black_box(p)).x;
                }
                black_box(acc)
            });
        });

        group.bench_with_input(BenchmarkId::new("map", len), &geo_points, |b, pts| {
            b.iter(|| {
                let mut acc = 0.0;
                for &p in pts {
                    acc += map.to_view(black_box(p)).x;
                }
                black_box(acc)
            });
        });
    }
    group.finish();
}

fn bench_anchored_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform/anchored");
    let view = Size::new(1920.0, 1080.0);
    let env = EnvironmentBounds::new(Point::ZERO, Size::new(100.0, 100.0));
    let mut t = ViewportTransform::euclidean(view, env);
    t.center();

    group.bench_function("zoom_on_point", |b| {
        let mut zoom = 1.0;
        b.iter(|| {
            zoom = if zoom > 100.0 { 1.0 } else { zoom * 1.1 };
            t.zoom_on_point(black_box(Point::new(300.0, 200.0)), zoom);
        });
    });
    group.finish();
}

fn bench_map_optimal_zoom(c: &mut Criterion) {
    let view = Size::new(1920.0, 1080.0);
    let mut group = c.benchmark_group("map/optimal_zoom");
    for (name, env) in [
        (
            "city",
            EnvironmentBounds::new(Point::new(11.30, 44.47), Size::new(0.08, 0.05)),
        ),
        (
            "continent",
            EnvironmentBounds::new(Point::new(-10.0, 35.0), Size::new(40.0, 30.0)),
        ),
    ] {
        let mut map = ViewportTransform::map(view, env);
        group.bench_function(name, |b| b.iter(|| black_box(&mut map).optimal_zoom()));
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_forward_mapping,
    bench_anchored_ops,
    bench_map_optimal_zoom
);
criterion_main!(benches);
