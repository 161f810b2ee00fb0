//! Comparison benchmarks for the packing tiers and matrix inversion
//!
//! Compares the three octahedral tiers against each other and the
//! elimination-based inverse against the pivoted LU reference.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use math_tests::patterns::{NormalPattern, generate_normals, random_invertible};
use math_tests::reference;
use mrmath_core::{
    Matrix4d, pack_oct16, pack_oct24, pack_oct32, unpack_oct16, unpack_oct24, unpack_oct32,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const NORMAL_COUNTS: &[usize] = &[16, 256, 4096, 65536];

fn bench_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("Normal round trip");

    for &count in NORMAL_COUNTS {
        let normals = generate_normals(NormalPattern::Random(count as u64), count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("oct32", count), &count, |b, _| {
            b.iter(|| {
                for &n in black_box(&normals) {
                    black_box(unpack_oct32(pack_oct32(n)));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("oct24", count), &count, |b, _| {
            b.iter(|| {
                for &n in black_box(&normals) {
                    black_box(unpack_oct24(pack_oct24(n)));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("oct16", count), &count, |b, _| {
            b.iter(|| {
                for &n in black_box(&normals) {
                    black_box(unpack_oct16(pack_oct16(n)));
                }
            })
        });
    }

    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("Inverse 4x4");
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let m: Matrix4d = random_invertible(&mut rng);

    group.bench_function("gauss_jordan", |b| b.iter(|| black_box(m).inversed()));
    group.bench_function("reference_lu", |b| {
        b.iter(|| reference::inverse(black_box(&m)))
    });

    group.finish();
}

criterion_group!(benches, bench_round_trip, bench_inverse);
criterion_main!(benches);
