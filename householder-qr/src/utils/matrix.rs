//! Dense matrix helpers

use mdarray::DTensor;
use num_complex::Complex;
use num_traits::{One, Zero};

use crate::error::QrError;
use crate::{CMatrix, RMatrix};

/// Create an n x n identity matrix
pub fn identity(n: usize) -> CMatrix {
    DTensor::<Complex<f64>, 2>::from_fn([n, n], |idx| {
        if idx[0] == idx[1] {
            Complex::one()
        } else {
            Complex::zero()
        }
    })
}

/// Conjugate transpose
pub fn adjoint(matrix: &CMatrix) -> CMatrix {
    let (m, n) = *matrix.shape();
    DTensor::<Complex<f64>, 2>::from_fn([n, m], |idx| matrix[[idx[1], idx[0]]].conj())
}

/// Matrix multiplication
pub fn matmul(a: &CMatrix, b: &CMatrix) -> Result<CMatrix, QrError> {
    let (m, k1) = *a.shape();
    let (k2, n) = *b.shape();
    if k1 != k2 {
        return Err(QrError::DimensionMismatch {
            expected: k1,
            found: k2,
        });
    }

    Ok(DTensor::<Complex<f64>, 2>::from_fn([m, n], |idx| {
        let mut sum: Complex<f64> = Complex::zero();
        for k in 0..k1 {
            sum += a[[idx[0], k]] * b[[k, idx[1]]];
        }
        sum
    }))
}

/// First `ncols` columns of a matrix
pub fn leading_columns(matrix: &CMatrix, ncols: usize) -> CMatrix {
    let (m, n) = *matrix.shape();
    assert!(
        ncols <= n,
        "ncols={} must not exceed matrix width={}",
        ncols,
        n
    );
    DTensor::<Complex<f64>, 2>::from_fn([m, ncols], |idx| matrix[[idx[0], idx[1]]])
}

/// Promote a real matrix to complex with zero imaginary parts
pub fn from_real(matrix: &RMatrix) -> CMatrix {
    let (m, n) = *matrix.shape();
    DTensor::<Complex<f64>, 2>::from_fn([m, n], |idx| Complex::new(matrix[[idx[0], idx[1]]], 0.0))
}
