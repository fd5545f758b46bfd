//! Reflector matrix W: the data carried from factorization to reconstruction

use num_complex::Complex;
use num_traits::Zero;

use crate::error::QrError;
use crate::utils::norms::norm_2;
use crate::CMatrix;

/// Householder reflectors stored column-wise in an m x n matrix
///
/// Column k is zero in rows 0..k and holds either a unit 2-norm vector or,
/// for a degenerate reflection, all zeros in rows k..m. Values built by
/// [`factorize`](super::factorize) satisfy this by construction;
/// [`Reflectors::from_matrix`] checks it for caller-supplied matrices.
#[derive(Debug, Clone)]
pub struct Reflectors {
    w: CMatrix,
}

impl Reflectors {
    /// Wrap a matrix produced by the factorization loop
    pub(crate) fn new_unchecked(w: CMatrix) -> Self {
        Self { w }
    }

    /// Validate and wrap an m x n reflector matrix
    ///
    /// `tolerance` bounds both the magnitude of entries above the diagonal
    /// and the deviation of every non-zero column norm from one.
    pub fn from_matrix(w: CMatrix, tolerance: f64) -> Result<Self, QrError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(QrError::InvalidTolerance(format!(
                "reflector tolerance must be finite and non-negative, got {}",
                tolerance
            )));
        }

        let (m, n) = *w.shape();
        if m < n {
            return Err(QrError::ShapeError { rows: m, cols: n });
        }

        for k in 0..n {
            for i in 0..m {
                let z = w[[i, k]];
                if !z.re.is_finite() || !z.im.is_finite() {
                    return Err(QrError::InvalidReflector {
                        column: k,
                        reason: format!("non-finite entry at row {}", i),
                    });
                }
            }

            for i in 0..k {
                let magnitude = w[[i, k]].norm();
                if magnitude > tolerance {
                    return Err(QrError::InvalidReflector {
                        column: k,
                        reason: format!(
                            "entry at row {} above the diagonal has magnitude {:e}",
                            i, magnitude
                        ),
                    });
                }
            }

            let v: Vec<Complex<f64>> = (k..m).map(|i| w[[i, k]]).collect();
            if v.iter().all(|z| z.is_zero()) {
                continue;
            }
            let norm = norm_2(&v);
            if (norm - 1.0).abs() > tolerance {
                return Err(QrError::InvalidReflector {
                    column: k,
                    reason: format!("norm {} is neither 0 nor 1", norm),
                });
            }
        }

        Ok(Self { w })
    }

    /// Number of rows (m)
    pub fn nrows(&self) -> usize {
        self.w.shape().0
    }

    /// Number of reflectors (n)
    pub fn ncols(&self) -> usize {
        self.w.shape().1
    }

    pub fn as_matrix(&self) -> &CMatrix {
        &self.w
    }

    pub fn into_matrix(self) -> CMatrix {
        self.w
    }

    /// Rows k..m of column k
    ///
    /// # Panics
    /// Panics if `k >= self.ncols()`.
    pub fn vector(&self, k: usize) -> Vec<Complex<f64>> {
        assert!(k < self.ncols(), "reflector index {} out of range", k);
        (k..self.nrows()).map(|i| self.w[[i, k]]).collect()
    }

    /// Whether column k holds the identity (all-zero) reflection
    ///
    /// # Panics
    /// Panics if `k >= self.ncols()`.
    pub fn is_degenerate(&self, k: usize) -> bool {
        assert!(k < self.ncols(), "reflector index {} out of range", k);
        (k..self.nrows()).all(|i| self.w[[i, k]].is_zero())
    }

    /// All reflector vectors, with `None` for degenerate columns
    pub(crate) fn active_vectors(&self) -> Vec<Option<Vec<Complex<f64>>>> {
        (0..self.ncols())
            .map(|k| {
                if self.is_degenerate(k) {
                    None
                } else {
                    Some(self.vector(k))
                }
            })
            .collect()
    }
}

impl AsRef<CMatrix> for Reflectors {
    fn as_ref(&self) -> &CMatrix {
        &self.w
    }
}

impl TryFrom<CMatrix> for Reflectors {
    type Error = QrError;

    fn try_from(w: CMatrix) -> Result<Self, Self::Error> {
        Self::from_matrix(w, crate::QrConfig::default().norm_tolerance)
    }
}
