// Copyright 2025 the Alembic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alembic_display::{
    Display2D, DisplayConfig, EntitySnapshot, EntityState, project_links, project_visible,
};
use alembic_view2d::EnvironmentBounds;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};

/// Entities on a jittered grid, each linked to its right and upper neighbor.
fn entities(side: u32) -> Vec<EntityState<u32>> {
    (0..side * side)
        .map(|id| {
            let (x, y) = (id % side, id / side);
            let mut neighbors = Vec::new();
            if x + 1 < side {
                neighbors.push(id + 1);
            }
            if y + 1 < side {
                neighbors.push(id + side);
            }
            let jitter = f64::from(id.wrapping_mul(2_654_435_761) % 100) / 200.0;
            EntityState::new(id, Point::new(f64::from(x) + jitter, f64::from(y) - jitter))
                .with_neighbors(neighbors)
        })
        .collect()
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("display/frame");
    for side in [32_u32, 100, 316] {
        let count = u64::from(side * side);
        group.throughput(Throughput::Elements(count));

        let mut display =
            Display2D::new(DisplayConfig::default(), Size::new(1280.0, 720.0)).unwrap();
        let extent = f64::from(side);
        display
            .initialize(EnvironmentBounds::new(Point::ZERO, Size::new(extent, extent)))
            .unwrap();
        // Zoom in so roughly half the entities fall outside the view.
        display.on_wheel(Point::new(640.0, 360.0), 8);

        let snapshot = EntitySnapshot::new();
        snapshot.replace(entities(side));

        group.bench_with_input(BenchmarkId::new("project_visible", count), &snapshot, |b, s| {
            b.iter(|| black_box(project_visible(s, display.transform())));
        });
        group.bench_with_input(BenchmarkId::new("project_links", count), &snapshot, |b, s| {
            b.iter(|| black_box(project_links(s, display.transform())));
        });
        group.bench_function(BenchmarkId::new("replace", count), |b| {
            let fresh = entities(side);
            b.iter(|| snapshot.replace(black_box(fresh.iter().cloned())));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_frame);
criterion_main!(benches);
