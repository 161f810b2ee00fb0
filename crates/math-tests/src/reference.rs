//! Reference linear algebra
//!
//! LU decomposition with partial pivoting in `f64`, written independently of
//! the elimination code under test. Unlike the library it rejects singular
//! input instead of degrading.

use anyhow::{Result, bail};
use mrmath_core::SquareMatrix;

/// Singularity threshold on the pivot magnitude
const SINGULAR: f64 = 1e-12;

/// LU factors packed into one matrix plus the row permutation
struct Lu<const N: usize> {
    lu: [[f64; N]; N],
    perm: [usize; N],
    sign: f64,
}

fn decompose<const N: usize>(m: &SquareMatrix<f64, N>) -> Result<Lu<N>> {
    let mut lu: [[f64; N]; N] = std::array::from_fn(|i| m[i].into_array());
    let mut perm: [usize; N] = std::array::from_fn(|i| i);
    let mut sign = 1.0;

    for k in 0..N {
        let p = (k..N)
            .max_by(|&a, &b| lu[a][k].abs().total_cmp(&lu[b][k].abs()))
            .unwrap_or(k);
        if lu[p][k].abs() < SINGULAR {
            bail!("matrix is singular at column {k}");
        }
        if p != k {
            lu.swap(p, k);
            perm.swap(p, k);
            sign = -sign;
        }
        for i in (k + 1)..N {
            let f = lu[i][k] / lu[k][k];
            lu[i][k] = f;
            for j in (k + 1)..N {
                lu[i][j] -= f * lu[k][j];
            }
        }
    }

    Ok(Lu { lu, perm, sign })
}

/// Determinant via pivoted LU; zero for singular input
pub fn determinant<const N: usize>(m: &SquareMatrix<f64, N>) -> f64 {
    match decompose(m) {
        Ok(lu) => (0..N).fold(lu.sign, |acc, i| acc * lu.lu[i][i]),
        Err(_) => 0.0,
    }
}

/// Inverse via pivoted LU
pub fn inverse<const N: usize>(m: &SquareMatrix<f64, N>) -> Result<SquareMatrix<f64, N>> {
    let Lu { lu, perm, .. } = decompose(m)?;
    let mut inv = [[0.0; N]; N];

    // Solve A x = e_col for every column
    for col in 0..N {
        let mut x: [f64; N] = std::array::from_fn(|i| if perm[i] == col { 1.0 } else { 0.0 });
        for i in 0..N {
            for j in 0..i {
                x[i] -= lu[i][j] * x[j];
            }
        }
        for i in (0..N).rev() {
            for j in (i + 1)..N {
                x[i] -= lu[i][j] * x[j];
            }
            x[i] /= lu[i][i];
        }
        for (row, value) in inv.iter_mut().zip(x) {
            row[col] = value;
        }
    }

    Ok(SquareMatrix::from(inv))
}
