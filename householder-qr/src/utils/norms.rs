//! Vector and matrix norm computations

use num_complex::Complex;

use crate::CMatrix;

/// Maximum of two values that propagates NaN
///
/// `f64::max` drops a NaN operand, which would hide NaN entries from the
/// reductions below.
pub(crate) fn max_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

/// Compute the 2-norm (Euclidean norm) of a complex vector
///
/// Components are scaled by the largest real/imaginary magnitude before
/// squaring, so the result neither overflows nor underflows to zero
/// for representable inputs. Any NaN component makes the result NaN.
pub fn norm_2(vec: &[Complex<f64>]) -> f64 {
    let scale = vec
        .iter()
        .fold(0.0_f64, |acc, z| max_nan(max_nan(acc, z.re.abs()), z.im.abs()));
    if scale == 0.0 || !scale.is_finite() {
        return scale;
    }

    let mut sum = 0.0;
    for z in vec {
        let re = z.re / scale;
        let im = z.im / scale;
        sum += re * re + im * im;
    }
    scale * sum.sqrt()
}

/// Compute the Frobenius norm of a matrix
pub fn norm_frobenius(mat: &CMatrix) -> f64 {
    let (m, n) = *mat.shape();
    let mut entries = Vec::with_capacity(m * n);
    for i in 0..m {
        for j in 0..n {
            entries.push(mat[[i, j]]);
        }
    }
    norm_2(&entries)
}

/// Compute the maximum absolute value in a matrix
pub fn norm_max(mat: &CMatrix) -> f64 {
    let (m, n) = *mat.shape();
    let mut max_val = 0.0_f64;
    for i in 0..m {
        for j in 0..n {
            max_val = max_nan(max_val, mat[[i, j]].norm());
        }
    }
    max_val
}
