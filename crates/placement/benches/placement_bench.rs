//! Criterion benchmarks for the placement core.
//!
//! Benchmarks:
//!   - footprint resolution for a single-cell and a 2x2 kind
//!   - pick-point to cell snapping
//!   - a full place/remove cycle on an empty and a crowded grid
//!
//! Run with: cargo bench -p placement --bench placement_bench

use bevy::math::Vec2;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use placement::{footprint_of, Editor, GridCoord, GridModel, ShapeCatalog, ShapeKind};

// ---------------------------------------------------------------------------
// Benchmark: footprint resolution
// ---------------------------------------------------------------------------

fn bench_footprint(c: &mut Criterion) {
    let mut group = c.benchmark_group("footprint_of");
    group.sample_size(1000);

    let grid = GridModel::default();
    let catalog = ShapeCatalog::default();

    group.bench_function("box", |b| {
        b.iter(|| {
            black_box(footprint_of(
                &grid,
                &catalog,
                ShapeKind::Box,
                black_box(GridCoord::new(7, 9)),
            ))
        });
    });

    group.bench_function("large_square", |b| {
        b.iter(|| {
            black_box(footprint_of(
                &grid,
                &catalog,
                ShapeKind::LargeSquare,
                black_box(GridCoord::new(7, 9)),
            ))
        });
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: pick snapping
// ---------------------------------------------------------------------------

fn bench_pick(c: &mut Criterion) {
    let grid = GridModel::default();
    c.bench_function("grid_pick", |b| {
        b.iter(|| black_box(grid.pick(black_box(Vec2::new(12.3, -31.7)))));
    });
}

// ---------------------------------------------------------------------------
// Benchmark: place + remove
// ---------------------------------------------------------------------------

fn bench_place_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("place_remove_cycle");

    let mut empty = Editor::default();
    group.bench_function("empty_grid", |b| {
        b.iter(|| {
            if let Ok(placed) = empty.place_at(ShapeKind::LargeSquare, GridCoord::new(10, 10)) {
                let _ = black_box(empty.remove_shape(placed.id));
            }
        });
    });

    // Every other column filled with boxes, leaving a free 2x2 hole at (10,10).
    let mut crowded = Editor::default();
    for y in 0..20 {
        for x in (0..20).step_by(2) {
            if !(10..12).contains(&x) || !(10..12).contains(&y) {
                let _ = crowded.place_at(ShapeKind::Box, GridCoord::new(x, y));
            }
        }
    }
    group.bench_function("crowded_grid", |b| {
        b.iter(|| {
            if let Ok(placed) = crowded.place_at(ShapeKind::LargeSquare, GridCoord::new(10, 10)) {
                let _ = black_box(crowded.remove_shape(placed.id));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_footprint, bench_pick, bench_place_remove);
criterion_main!(benches);
