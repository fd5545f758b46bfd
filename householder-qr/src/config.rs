//! Tunables shared by the reconstruction and solve routines

use crate::error::QrError;

/// Configuration for Q reconstruction, reflector validation and solves
#[derive(Debug, Clone, PartialEq)]
pub struct QrConfig {
    /// Build the columns of Q on the rayon thread pool
    pub parallel: bool,
    /// Tolerance on unit norm and zero prefix when validating a reflector matrix
    pub norm_tolerance: f64,
    /// Relative threshold on |R[k,k]| / max |R[j,j]| below which R is treated as singular
    pub rank_rtol: f64,
}

impl QrConfig {
    pub fn new(norm_tolerance: f64) -> Self {
        Self {
            norm_tolerance,
            ..Self::default()
        }
    }

    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), QrError> {
        if !self.norm_tolerance.is_finite() || self.norm_tolerance < 0.0 {
            return Err(QrError::InvalidTolerance(format!(
                "norm_tolerance must be finite and non-negative, got {}",
                self.norm_tolerance
            )));
        }
        if !self.rank_rtol.is_finite() || self.rank_rtol < 0.0 {
            return Err(QrError::InvalidTolerance(format!(
                "rank_rtol must be finite and non-negative, got {}",
                self.rank_rtol
            )));
        }
        Ok(())
    }
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            norm_tolerance: 1e-10,
            rank_rtol: f64::EPSILON * 1e2,
        }
    }
}
