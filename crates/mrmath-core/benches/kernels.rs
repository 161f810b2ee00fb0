//! Matrix and packing kernel benchmarks

use std::f32::consts::PI;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use mrmath_core::packing::{pack_oct24_batch, pack_oct32_batch, unpack_oct32_batch};
use mrmath_core::{Matrix4d, Matrix4f, Norm3f, PackedNorm24, Radians, Vec3};

/// A typical model matrix: scale, arbitrary rotation, translation
fn model_matrix() -> Matrix4f {
    Matrix4f::scale(Vec3::new([1.5, 2.0, 0.5]))
        * Matrix4f::rotate(Radians(0.7), Norm3f::new(0.3, -0.2, 0.9))
        * Matrix4f::translate(Vec3::new([10.0, -3.0, 2.5]))
}

/// Normals spread over the whole sphere
fn generate_normals(count: usize) -> Vec<Norm3f> {
    (0..count)
        .map(|i| {
            let t = i as f32 / count as f32;
            let theta = t * PI;
            let phi = t * 37.0 * PI;
            Norm3f::new(theta.sin() * phi.cos(), theta.sin() * phi.sin(), theta.cos())
        })
        .collect()
}

// ============================================================================
// Matrix Benchmarks
// ============================================================================

fn bench_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix4");

    let a = model_matrix();
    let b = Matrix4f::rotate_y(Radians(1.2));
    let ad = Matrix4d::from_fn(|i, j| a[i][j] as f64);

    group.bench_function("multiply_f32", |bench| {
        bench.iter(|| black_box(a) * black_box(b))
    });
    group.bench_function("transposed_f32", |bench| {
        bench.iter(|| black_box(a).transposed())
    });
    group.bench_function("determinant_f32", |bench| {
        bench.iter(|| black_box(a).determinant())
    });
    group.bench_function("inversed_f32", |bench| bench.iter(|| black_box(a).inversed()));
    group.bench_function("inversed_f64", |bench| bench.iter(|| black_box(ad).inversed()));
    group.bench_function("rotate_axis_f32", |bench| {
        bench.iter(|| Matrix4f::rotate(black_box(Radians(0.3)), black_box(Norm3f::Y)))
    });

    group.finish();
}

// ============================================================================
// Packing Benchmarks
// ============================================================================

fn bench_packing_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("oct_packing");

    for size in [100, 1000, 10000, 100000].iter() {
        let normals = generate_normals(*size);
        let mut p32 = vec![0u32; *size];
        let mut p24 = vec![PackedNorm24::default(); *size];
        let mut unpacked = vec![Norm3f::Z; *size];

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("pack32", size), size, |b, _| {
            b.iter(|| pack_oct32_batch(black_box(&normals), &mut p32))
        });
        group.bench_with_input(BenchmarkId::new("pack24", size), size, |b, _| {
            b.iter(|| pack_oct24_batch(black_box(&normals), &mut p24))
        });

        pack_oct32_batch(&normals, &mut p32).expect("buffer sized to input");
        group.bench_with_input(BenchmarkId::new("unpack32", size), size, |b, _| {
            b.iter(|| unpack_oct32_batch(black_box(&p32), &mut unpacked))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_matrix, bench_packing_batch);
criterion_main!(benches);
