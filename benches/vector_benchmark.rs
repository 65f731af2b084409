// ============================================================================
// Vector Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Arithmetic - Element-wise operations across dimensions
// 2. Norms - Magnitude and normalisation (includes the f64 square root)
// 3. Geometry - Angle, parallelism and 3D cross product
//
// Dimensions up to 4 are stored inline; larger ones spill to the heap,
// which the arithmetic group makes visible.
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use decimal_vector::prelude::*;
use rust_decimal::Decimal;
use std::hint::black_box;

fn make_vector(dimension: usize, seed: i64) -> Vector {
    Vector::from_decimals(
        (0..dimension as i64)
            .map(|i| Decimal::new(seed * 1000 + i * 37 - 500, 3))
            .collect(),
    )
    .unwrap()
}

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    for dimension in [2usize, 3, 4, 16, 128].iter() {
        let a = make_vector(*dimension, 1);
        let b = make_vector(*dimension, 2);

        group.bench_with_input(BenchmarkId::new("plus", dimension), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(a.plus(b).unwrap()));
        });

        group.bench_with_input(
            BenchmarkId::new("dot_product", dimension),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| black_box(a.dot_product(b).unwrap()));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Norm Benchmarks
// ============================================================================

fn benchmark_norms(c: &mut Criterion) {
    let mut group = c.benchmark_group("norms");

    for dimension in [3usize, 16].iter() {
        let v = make_vector(*dimension, 3);

        group.bench_with_input(BenchmarkId::new("magnitude", dimension), &v, |bench, v| {
            bench.iter(|| black_box(v.magnitude().unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("normalisation", dimension), &v, |bench, v| {
            bench.iter(|| black_box(v.normalisation().unwrap()));
        });
    }

    group.finish();
}

// ============================================================================
// Geometry Benchmarks
// ============================================================================

fn benchmark_geometry(c: &mut Criterion) {
    let a = make_vector(3, 4);
    let b = make_vector(3, 5);

    c.bench_function("angle_3d", |bench| {
        bench.iter(|| black_box(a.angle(&b, AngleUnit::Radians).unwrap()));
    });

    c.bench_function("is_parallel_3d", |bench| {
        bench.iter(|| black_box(a.is_parallel(&b).unwrap()));
    });

    c.bench_function("cross_product", |bench| {
        bench.iter(|| black_box(a.cross_product(&b).unwrap()));
    });

    c.bench_function("decompose_3d", |bench| {
        bench.iter(|| black_box(a.decompose(&b).unwrap()));
    });
}

criterion_group!(benches, benchmark_arithmetic, benchmark_norms, benchmark_geometry);
criterion_main!(benches);
