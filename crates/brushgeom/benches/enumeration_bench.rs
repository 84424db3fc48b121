//! Criterion benchmarks for both brush conversions.
//!
//! Vertex enumeration runs on random plane sets with a growing number of
//! cuts; facet enumeration runs on the resulting vertex sets, so both sides of
//! the O(n⁴) scaling are visible on the same brushes.

use brushgeom::geom3::{facet_enumeration, vertex_enumeration};
use brushgeom::rand3::{random_brush, RandomBrushParams};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn bench_vertex_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("vertex_enumeration");
    for &cuts in &[0usize, 6, 12, 24, 36] {
        group.bench_with_input(BenchmarkId::from_parameter(cuts + 6), &cuts, |b, &m| {
            b.iter_batched(
                || random_brush(&RandomBrushParams::with_cuts(m), 123 + m as u64).unwrap(),
                |brush| {
                    let _ = black_box(vertex_enumeration(&brush.planes));
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_facet_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("facet_enumeration");
    for &cuts in &[0usize, 6, 12, 24] {
        let brush = random_brush(&RandomBrushParams::with_cuts(cuts), 321 + cuts as u64).unwrap();
        let vertices = vertex_enumeration(&brush.planes);
        group.bench_with_input(
            BenchmarkId::from_parameter(vertices.len()),
            &vertices,
            |b, vs| b.iter(|| black_box(facet_enumeration(vs))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_vertex_enumeration, bench_facet_enumeration);
criterion_main!(benches);
