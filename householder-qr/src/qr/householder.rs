//! Householder reflection utilities for complex QR decomposition
//!
//! A reflector is stored as a unit vector v and acts as H = I - 2 v v^H.
//! A zero vector marks a degenerate reflection and acts as the identity.

use num_complex::Complex;
use num_traits::{One, Zero};

use crate::utils::norms::{max_nan, norm_2};
use crate::CMatrix;

/// Complex sign (unit phase) of a scalar
///
/// Returns `z / |z|`, and 1 for `z == 0`. For real inputs this is the
/// usual +1/-1 sign, with +1 chosen at zero.
pub fn complex_sign(z: Complex<f64>) -> Complex<f64> {
    let r = z.norm();
    if r == 0.0 {
        Complex::one()
    } else {
        z / r
    }
}

/// Turn `x` into the unit reflector that maps it onto a multiple of e_1
///
/// On return `x` holds v with ||v|| = 1, and H x_orig = -phase * ||x_orig|| e_1
/// where `phase = complex_sign(x_orig[0])`. The phase is added to the
/// leading entry so the update never cancels.
///
/// Returns `false` and leaves `x` untouched (all zeros) when `x` has zero
/// norm; the caller must then treat the reflection as the identity.
pub fn make_reflector(x: &mut [Complex<f64>]) -> bool {
    let scale = x
        .iter()
        .fold(0.0_f64, |acc, z| max_nan(max_nan(acc, z.re.abs()), z.im.abs()));
    if scale == 0.0 {
        return false;
    }

    // Work on x / scale so the leading update cannot overflow; the final
    // normalization removes the scale again
    for xi in x.iter_mut() {
        *xi /= scale;
    }
    let norm = norm_2(x);

    let phase = complex_sign(x[0]);
    x[0] += phase * norm;

    // |x[0]| >= norm > 0 here, so the updated norm cannot vanish
    let updated = norm_2(x);
    for xi in x.iter_mut() {
        *xi /= updated;
    }
    true
}

/// Apply H = I - 2 v v^H from the left to `a[row.., col..]`
///
/// Computed as a rank-1 update: first the projection row p = v^H A,
/// then A -= 2 v p.
pub fn reflector_apply(v: &[Complex<f64>], a: &mut CMatrix, row: usize, col: usize) {
    let (m, n) = *a.shape();
    assert_eq!(
        row + v.len(),
        m,
        "reflector length {} does not span rows {}..{}",
        v.len(),
        row,
        m
    );

    if col >= n || v.is_empty() {
        return;
    }

    let projection: Vec<Complex<f64>> = (col..n)
        .map(|j| {
            let mut sum: Complex<f64> = Complex::zero();
            for (i, vi) in v.iter().enumerate() {
                sum += vi.conj() * a[[row + i, j]];
            }
            sum
        })
        .collect();

    // Subtract v * p twice instead of 2 * v * p, which can overflow for
    // entries near f64::MAX
    for (offset, p) in projection.into_iter().enumerate() {
        let j = col + offset;
        for (i, vi) in v.iter().enumerate() {
            let t = *vi * p;
            a[[row + i, j]] -= t;
            a[[row + i, j]] -= t;
        }
    }
}

/// Apply H = I - 2 v v^H to the trailing segment of a single column
///
/// `x` must have the same length as `v`.
pub fn reflector_apply_vec(v: &[Complex<f64>], x: &mut [Complex<f64>]) {
    debug_assert_eq!(v.len(), x.len());

    let mut coeff: Complex<f64> = Complex::zero();
    for (vi, xi) in v.iter().zip(x.iter()) {
        coeff += vi.conj() * *xi;
    }
    for (vi, xi) in v.iter().zip(x.iter_mut()) {
        let t = *vi * coeff;
        *xi -= t;
        *xi -= t;
    }
}
