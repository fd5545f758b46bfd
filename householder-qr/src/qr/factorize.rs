//! Householder QR factorization (reflector builder)

use num_complex::Complex;
use num_traits::Zero;

use super::householder::{make_reflector, reflector_apply};
use super::reflectors::Reflectors;
use crate::error::QrError;
use crate::CMatrix;

/// Factorize a tall complex matrix with Householder reflections
///
/// For an m x n matrix A with m >= n, returns the reflector matrix W
/// (m x n, column k zero above row k and unit norm below) and the n x n
/// upper-triangular R such that `Q[:, :n] * R == A` with
/// `Q = H_0 H_1 ... H_{n-1}` and `H_k = I - 2 w_k w_k^H`.
///
/// A column whose working segment is entirely zero produces a zero column
/// in W and leaves the working matrix unchanged at that step.
///
/// # Errors
/// * `QrError::ShapeError` if m < n. Nothing is computed in that case.
pub fn factorize(a: &CMatrix) -> Result<(Reflectors, CMatrix), QrError> {
    let (m, n) = *a.shape();
    if m < n {
        return Err(QrError::ShapeError { rows: m, cols: n });
    }
    tracing::debug!("Householder QR factorization of {}x{} matrix", m, n);

    // Working copy owned by this call; it is reduced to R in place
    let mut work = a.clone();
    let mut w = CMatrix::from_fn([m, n], |_| Complex::zero());

    for k in 0..n {
        let mut v: Vec<Complex<f64>> = (k..m).map(|i| work[[i, k]]).collect();

        if !make_reflector(&mut v) {
            tracing::debug!("Degenerate reflector at column {}: working segment is zero", k);
            continue;
        }

        for (offset, vi) in v.iter().enumerate() {
            w[[k + offset, k]] = *vi;
        }
        reflector_apply(&v, &mut work, k, k);
    }

    let r = CMatrix::from_fn([n, n], |idx| work[[idx[0], idx[1]]]);
    Ok((Reflectors::new_unchecked(w), r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn c(re: f64, im: f64) -> Complex<f64> {
        Complex::new(re, im)
    }

    #[test]
    fn test_single_column() {
        let a = CMatrix::from_fn([4, 1], |idx| c([1.0, 4.0, 3.0, 8.0][idx[0]], 0.0));
        let (w, r) = factorize(&a).unwrap();

        assert_eq!(*r.shape(), (1, 1));
        assert_abs_diff_eq!(r[[0, 0]].re, -(90.0_f64.sqrt()), epsilon = 1e-13);
        assert_abs_diff_eq!(r[[0, 0]].im, 0.0, epsilon = 1e-15);

        let v = w.vector(0);
        let norm: f64 = v.iter().map(|z| z.norm_sqr()).sum::<f64>().sqrt();
        assert_abs_diff_eq!(norm, 1.0, epsilon = 1e-14);
    }

    #[test]
    fn test_wide_matrix_rejected() {
        let a = CMatrix::from_fn([2, 3], |_| c(1.0, 0.0));
        assert!(matches!(
            factorize(&a),
            Err(QrError::ShapeError { rows: 2, cols: 3 })
        ));
    }

    #[test]
    fn test_input_untouched() {
        let a = CMatrix::from_fn([3, 2], |idx| c(idx[0] as f64 + 1.0, idx[1] as f64 - 0.5));
        let copy = a.clone();
        let _ = factorize(&a).unwrap();
        for i in 0..3 {
            for j in 0..2 {
                assert_eq!(a[[i, j]], copy[[i, j]]);
            }
        }
    }

    #[test]
    fn test_zero_prefix_of_reflectors() {
        let a = CMatrix::from_fn([5, 3], |idx| c((idx[0] * 3 + idx[1]) as f64, idx[0] as f64));
        let (w, _) = factorize(&a).unwrap();
        let w = w.as_matrix();
        for k in 0..3 {
            for i in 0..k {
                assert_eq!(w[[i, k]], Complex::zero());
            }
        }
    }

    #[test]
    fn test_degenerate_column() {
        // Column 0 is zero, so the first step is the identity
        let a = CMatrix::from_fn([3, 2], |idx| {
            if idx[1] == 0 {
                Complex::zero()
            } else {
                c(idx[0] as f64 + 1.0, 0.0)
            }
        });
        let (w, r) = factorize(&a).unwrap();

        assert!(w.is_degenerate(0));
        assert!(!w.is_degenerate(1));
        assert_eq!(r[[0, 0]], Complex::zero());
        // Step 0 left row 0 of column 1 unchanged
        assert_eq!(r[[0, 1]], c(1.0, 0.0));
        // Step 1 reduces rows 1..3 of column 1: ||[2, 3]|| = sqrt(13)
        assert_abs_diff_eq!(r[[1, 1]].re, -(13.0_f64.sqrt()), epsilon = 1e-13);
        for i in 0..2 {
            for j in 0..2 {
                assert!(r[[i, j]].re.is_finite() && r[[i, j]].im.is_finite());
            }
        }
    }

    #[test]
    fn test_no_columns() {
        let a = CMatrix::from_fn([3, 0], |_| Complex::zero());
        let (w, r) = factorize(&a).unwrap();
        assert_eq!(w.nrows(), 3);
        assert_eq!(w.ncols(), 0);
        assert_eq!(*r.shape(), (0, 0));
    }
}
