//! Result validation utilities

use num_complex::Complex;
use num_traits::Zero;

use super::matrix::{leading_columns, matmul};
use super::norms::{max_nan, norm_frobenius};
use crate::error::QrError;
use crate::CMatrix;

/// Largest deviation of Q^H * Q from the identity, entrywise
///
/// NaN if Q contains NaN, so `is_unitary` rejects such a matrix.
pub fn unitarity_error(q: &CMatrix) -> f64 {
    let (m, k) = *q.shape();
    let mut max_err = 0.0_f64;

    for i in 0..k {
        for j in 0..k {
            let mut sum: Complex<f64> = Complex::zero();
            for row in 0..m {
                sum += q[[row, i]].conj() * q[[row, j]];
            }
            let expected = if i == j { 1.0 } else { 0.0 };
            max_err = max_nan(max_err, (sum - Complex::new(expected, 0.0)).norm());
        }
    }

    max_err
}

/// Check if the columns of a matrix are orthonormal
pub fn is_unitary(q: &CMatrix, tolerance: f64) -> bool {
    unitarity_error(q) <= tolerance
}

/// Largest magnitude strictly below the diagonal, NaN if any such entry is NaN
pub fn max_below_diagonal(r: &CMatrix) -> f64 {
    let (m, n) = *r.shape();
    let mut max_val = 0.0_f64;
    for j in 0..n {
        for i in (j + 1)..m {
            max_val = max_nan(max_val, r[[i, j]].norm());
        }
    }
    max_val
}

pub fn is_upper_triangular(r: &CMatrix, tolerance: f64) -> bool {
    max_below_diagonal(r) <= tolerance
}

/// Relative Frobenius error of `Q[:, :n] * R` against `A`
///
/// Returns the absolute error when `A` is the zero matrix.
pub fn reconstruction_error(a: &CMatrix, q: &CMatrix, r: &CMatrix) -> Result<f64, QrError> {
    let (m, n) = *a.shape();
    let (qm, qn) = *q.shape();
    if qm != m {
        return Err(QrError::DimensionMismatch {
            expected: m,
            found: qm,
        });
    }
    if qn < n {
        return Err(QrError::DimensionMismatch {
            expected: n,
            found: qn,
        });
    }

    let product = matmul(&leading_columns(q, n), r)?;
    if *product.shape() != (m, n) {
        return Err(QrError::DimensionMismatch {
            expected: n,
            found: product.shape().1,
        });
    }

    let diff = CMatrix::from_fn([m, n], |idx| product[[idx[0], idx[1]]] - a[[idx[0], idx[1]]]);
    let scale = norm_frobenius(a);
    let err = norm_frobenius(&diff);
    Ok(if scale > 0.0 { err / scale } else { err })
}

/// Validate a QR factorization
///
/// Checks that Q is unitary, R is upper triangular (relative to the size of
/// A) and that `Q[:, :n] * R` reproduces A.
pub fn validate_qr(a: &CMatrix, q: &CMatrix, r: &CMatrix, tolerance: f64) -> bool {
    if !is_unitary(q, tolerance) {
        return false;
    }

    let scale = norm_frobenius(a).max(1.0);
    if !is_upper_triangular(r, tolerance * scale) {
        return false;
    }

    match reconstruction_error(a, q, r) {
        Ok(err) => err <= tolerance,
        Err(_) => false,
    }
}
