//! Orthogonal factor reconstruction and implicit application of Q
//!
//! Q = H_0 H_1 ... H_{n-1}. Applying Q to a vector replays the reflectors
//! from the last to the first; applying Q^H replays them in generation
//! order. Degenerate (zero) reflectors are skipped.

use mdarray::DTensor;
use num_complex::Complex;
use num_traits::{One, Zero};
use rayon::prelude::*;

use super::householder::reflector_apply_vec;
use super::reflectors::Reflectors;
use crate::config::QrConfig;
use crate::error::QrError;
use crate::CMatrix;

/// Build the full m x m unitary factor from the reflectors
///
/// Uses the default configuration, which builds columns in parallel.
pub fn build_q(reflectors: &Reflectors) -> CMatrix {
    build_q_with_config(reflectors, &QrConfig::default())
}

/// Build the full m x m unitary factor with an explicit configuration
///
/// Each column of Q is computed independently from the matching column of
/// the identity; with `config.parallel` the columns are distributed over
/// the rayon thread pool.
pub fn build_q_with_config(reflectors: &Reflectors, config: &QrConfig) -> CMatrix {
    let m = reflectors.nrows();
    let n = reflectors.ncols();
    tracing::debug!(
        "Building {}x{} Q from {} reflectors (parallel = {})",
        m,
        m,
        n,
        config.parallel
    );

    let vectors = reflectors.active_vectors();
    let skipped = vectors.iter().filter(|v| v.is_none()).count();
    if skipped > 0 {
        tracing::debug!("Skipping {} degenerate reflectors", skipped);
    }

    let columns: Vec<Vec<Complex<f64>>> = if config.parallel {
        (0..m)
            .into_par_iter()
            .map(|i| q_column(&vectors, m, i))
            .collect()
    } else {
        (0..m).map(|i| q_column(&vectors, m, i)).collect()
    };

    DTensor::<Complex<f64>, 2>::from_fn([m, m], |idx| columns[idx[1]][idx[0]])
}

/// Column i of Q, i.e. Q e_i
fn q_column(vectors: &[Option<Vec<Complex<f64>>>], m: usize, i: usize) -> Vec<Complex<f64>> {
    let mut col: Vec<Complex<f64>> = vec![Complex::zero(); m];
    col[i] = Complex::one();

    // H_k only touches rows k.., where e_i is zero for k > i
    let start = vectors.len().min(i + 1);
    for k in (0..start).rev() {
        if let Some(v) = &vectors[k] {
            reflector_apply_vec(v, &mut col[k..]);
        }
    }
    col
}

/// Compute Q * B without forming Q
///
/// # Errors
/// * `QrError::DimensionMismatch` if B does not have m rows.
pub fn apply_q(reflectors: &Reflectors, b: &CMatrix) -> Result<CMatrix, QrError> {
    apply_reflectors(reflectors, b, true)
}

/// Compute Q^H * B without forming Q
///
/// With B = A this yields R stacked on top of m - n (numerically) zero rows.
///
/// # Errors
/// * `QrError::DimensionMismatch` if B does not have m rows.
pub fn apply_q_adjoint(reflectors: &Reflectors, b: &CMatrix) -> Result<CMatrix, QrError> {
    apply_reflectors(reflectors, b, false)
}

fn apply_reflectors(
    reflectors: &Reflectors,
    b: &CMatrix,
    reverse: bool,
) -> Result<CMatrix, QrError> {
    let m = reflectors.nrows();
    let (rows, p) = *b.shape();
    if rows != m {
        return Err(QrError::DimensionMismatch {
            expected: m,
            found: rows,
        });
    }

    let vectors = reflectors.active_vectors();
    let mut order: Vec<usize> = (0..vectors.len()).collect();
    if reverse {
        order.reverse();
    }

    let columns: Vec<Vec<Complex<f64>>> = (0..p)
        .map(|j| {
            let mut col: Vec<Complex<f64>> = (0..m).map(|i| b[[i, j]]).collect();
            for &k in &order {
                if let Some(v) = &vectors[k] {
                    reflector_apply_vec(v, &mut col[k..]);
                }
            }
            col
        })
        .collect();

    Ok(DTensor::<Complex<f64>, 2>::from_fn([m, p], |idx| columns[idx[1]][idx[0]]))
}
