//! Algebraic properties of SquareMatrix on random well-conditioned input

use math_tests::{init_tracing, max_abs_diff, random_invertible, random_matrix};
use mrmath_core::{Matrix3d, Matrix4d, Matrix4f, Norm3d, Radians, SquareMatrix, Vec3d};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SAMPLES: usize = 200;

fn check_inverse<const N: usize>(seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let identity = SquareMatrix::<f64, N>::identity();

    for _ in 0..SAMPLES {
        let a = random_invertible::<N>(&mut rng);
        let inv = a.inversed();

        let left = max_abs_diff(&(a * inv), &identity);
        let right = max_abs_diff(&(inv * a), &identity);
        assert!(left < 1e-12, "N={N}: A * inv(A) off by {left}\n{a}");
        assert!(right < 1e-12, "N={N}: inv(A) * A off by {right}\n{a}");

        // Inverting twice returns the input
        assert!(max_abs_diff(&inv.inversed(), &a) < 1e-10);
    }
}

#[test]
fn inverse_times_matrix_is_identity() {
    init_tracing();
    check_inverse::<2>(1);
    check_inverse::<3>(2);
    check_inverse::<4>(3);
    check_inverse::<6>(4);
}

#[test]
fn determinant_is_multiplicative() {
    init_tracing();
    let mut rng = ChaCha8Rng::seed_from_u64(10);

    for _ in 0..SAMPLES {
        let a = random_invertible::<4>(&mut rng);
        let b = random_invertible::<4>(&mut rng);
        let lhs = (a * b).determinant();
        let rhs = a.determinant() * b.determinant();
        assert!(
            (lhs - rhs).abs() <= 1e-10 * rhs.abs().max(1.0),
            "det(AB) = {lhs}, det(A)det(B) = {rhs}"
        );
    }
}

#[test]
fn determinant_of_inverse_is_reciprocal() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    for _ in 0..SAMPLES {
        let a = random_invertible::<3>(&mut rng);
        let d = a.determinant() * a.inversed().determinant();
        assert!((d - 1.0).abs() < 1e-10, "{d}");
    }
}

#[test]
fn transpose_properties() {
    let mut rng = ChaCha8Rng::seed_from_u64(20);

    for _ in 0..SAMPLES {
        let a = random_matrix::<4>(&mut rng);
        let b = random_matrix::<4>(&mut rng);

        // Exact: transposition only moves elements
        assert_eq!(a.transposed().transposed(), a);

        let mut c = a;
        c.transpose();
        assert_eq!(c, a.transposed());

        // (AB)^T = B^T A^T
        assert!(max_abs_diff(&(a * b).transposed(), &(b.transposed() * a.transposed())) < 1e-12);

        // Transposition keeps the determinant
        let d = random_invertible::<4>(&mut rng);
        let (det, det_t) = (d.determinant(), d.transposed().determinant());
        assert!((det - det_t).abs() <= 1e-12 * det.abs(), "{det} vs {det_t}");
    }
}

#[test]
fn identity_is_neutral() {
    let mut rng = ChaCha8Rng::seed_from_u64(30);
    let identity = Matrix4d::identity();

    for _ in 0..SAMPLES {
        let a = random_matrix::<4>(&mut rng);
        assert_eq!(a * identity, a);
        assert_eq!(identity * a, a);
    }
    assert_eq!(Matrix4d::IDENTITY, identity);
    assert_eq!(identity.inversed(), identity);
    assert_eq!(identity.determinant(), 1.0);
}

#[test]
fn multiplication_is_associative() {
    let mut rng = ChaCha8Rng::seed_from_u64(40);

    for _ in 0..SAMPLES {
        let a = random_matrix::<3>(&mut rng);
        let b = random_matrix::<3>(&mut rng);
        let c = random_matrix::<3>(&mut rng);
        assert!(max_abs_diff(&((a * b) * c), &(a * (b * c))) < 1e-12);
    }
}

#[test]
fn singular_input_degrades_without_panic() {
    init_tracing();

    // Rank 2: the third row is the sum of the first two
    let singular = Matrix3d::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [5.0, 7.0, 9.0]]);
    assert!(singular.determinant().abs() < 1e-12);
    let inv = singular.inversed();
    for i in 0..3 {
        for j in 0..3 {
            assert!(inv[i][j].is_finite());
        }
    }

    // Every pivot of the zero matrix is skipped, so the augmented half
    // comes back untouched
    let zero = Matrix4f::zero();
    assert_eq!(zero.determinant(), 0.0);
    assert_eq!(zero.inversed(), Matrix4f::identity());
}

#[test]
fn affine_round_trip() {
    let m = Matrix4d::scale(Vec3d::new([2.0, 0.5, 4.0]))
        * Matrix4d::rotate(Radians(0.9), Norm3d::new(1.0, -2.0, 0.5))
        * Matrix4d::translate(Vec3d::new([3.0, -7.0, 1.0]));
    let inv = m.inversed();

    let p = Vec3d::new([0.25, -1.5, 8.0]);
    let q = inv.transform_point(m.transform_point(p));
    assert!((q - p).length() < 1e-12, "{q} != {p}");

    // det = product of the scale factors
    assert!((m.determinant() - 4.0).abs() < 1e-12);
}

#[test]
fn f32_inverse_is_close() {
    let mut rng = ChaCha8Rng::seed_from_u64(50);

    for _ in 0..SAMPLES {
        let a = random_invertible::<4>(&mut rng);
        let af = Matrix4f::from_fn(|i, j| a[i][j] as f32);
        assert!((af * af.inversed()).is_identity(1e-5));
    }
}
