//! Triangular solves and least-squares fitting on top of the factorization

use mdarray::DTensor;
use num_complex::Complex;

use super::factorize::factorize;
use super::reconstruct::apply_q_adjoint;
use crate::config::QrConfig;
use crate::error::QrError;
use crate::utils::norms::max_nan;
use crate::CMatrix;

/// Solve R * X = C by back substitution
///
/// R is n x n upper triangular (entries below the diagonal are ignored),
/// C is n x p. A diagonal entry with `|R[k,k]| <= rank_rtol * max_j |R[j,j]|`
/// is reported as `QrError::RankDeficient`.
pub fn solve_upper_triangular(
    r: &CMatrix,
    c: &CMatrix,
    rank_rtol: f64,
) -> Result<CMatrix, QrError> {
    let (n, n2) = *r.shape();
    if n != n2 {
        return Err(QrError::DimensionMismatch {
            expected: n,
            found: n2,
        });
    }
    let (rows, p) = *c.shape();
    if rows != n {
        return Err(QrError::DimensionMismatch {
            expected: n,
            found: rows,
        });
    }

    let max_diag = (0..n).map(|k| r[[k, k]].norm()).fold(0.0_f64, max_nan);
    let threshold = rank_rtol * max_diag;
    for k in 0..n {
        let d = r[[k, k]].norm();
        if d == 0.0 || d <= threshold {
            return Err(QrError::RankDeficient { column: k });
        }
    }

    let mut x = c.clone();
    for j in 0..p {
        for k in (0..n).rev() {
            let mut sum = x[[k, j]];
            for l in (k + 1)..n {
                sum -= r[[k, l]] * x[[l, j]];
            }
            x[[k, j]] = sum / r[[k, k]];
        }
    }
    Ok(x)
}

/// Minimize ||A * X - B|| in the Frobenius norm
///
/// A is m x n with m >= n and full column rank, B is m x p; returns the
/// n x p solution.
pub fn least_squares(a: &CMatrix, b: &CMatrix) -> Result<CMatrix, QrError> {
    least_squares_with_config(a, b, &QrConfig::default())
}

pub fn least_squares_with_config(
    a: &CMatrix,
    b: &CMatrix,
    config: &QrConfig,
) -> Result<CMatrix, QrError> {
    config.validate()?;

    let (m, n) = *a.shape();
    if m < n {
        return Err(QrError::ShapeError { rows: m, cols: n });
    }
    if b.shape().0 != m {
        return Err(QrError::DimensionMismatch {
            expected: m,
            found: b.shape().0,
        });
    }

    let (reflectors, r) = factorize(a)?;
    solve_with_factors(&reflectors, &r, b, config.rank_rtol)
}

pub(crate) fn solve_with_factors(
    reflectors: &super::Reflectors,
    r: &CMatrix,
    b: &CMatrix,
    rank_rtol: f64,
) -> Result<CMatrix, QrError> {
    let qhb = apply_q_adjoint(reflectors, b)?;
    let n = r.shape().0;
    let p = qhb.shape().1;
    let c = DTensor::<Complex<f64>, 2>::from_fn([n, p], |idx| qhb[[idx[0], idx[1]]]);
    solve_upper_triangular(r, &c, rank_rtol)
}
