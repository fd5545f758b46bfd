//! Owning wrapper around the reflectors and triangular factor

use num_complex::Complex;
use num_traits::Zero;

use super::factorize::factorize;
use super::reconstruct::{apply_q, build_q_with_config};
use super::reflectors::Reflectors;
use super::solve::solve_with_factors;
use crate::config::QrConfig;
use crate::error::QrError;
use crate::CMatrix;

/// Result of a Householder QR factorization
#[derive(Debug, Clone)]
pub struct HouseholderQR {
    reflectors: Reflectors,
    r: CMatrix,
    config: QrConfig,
}

impl HouseholderQR {
    pub fn new(a: &CMatrix) -> Result<Self, QrError> {
        Self::with_config(a, QrConfig::default())
    }

    pub fn with_config(a: &CMatrix, config: QrConfig) -> Result<Self, QrError> {
        config.validate()?;
        let (reflectors, r) = factorize(a)?;
        Ok(Self {
            reflectors,
            r,
            config,
        })
    }

    pub fn nrows(&self) -> usize {
        self.reflectors.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.reflectors.ncols()
    }

    pub fn reflectors(&self) -> &Reflectors {
        &self.reflectors
    }

    /// Upper-triangular factor (n x n)
    pub fn r(&self) -> &CMatrix {
        &self.r
    }

    /// Full unitary factor (m x m)
    pub fn q(&self) -> CMatrix {
        build_q_with_config(&self.reflectors, &self.config)
    }

    /// `Q[:, :n] * R`, computed without forming Q
    pub fn reconstruct(&self) -> Result<CMatrix, QrError> {
        let (m, n) = (self.nrows(), self.ncols());
        let padded = CMatrix::from_fn([m, n], |idx| {
            if idx[0] < n {
                self.r[[idx[0], idx[1]]]
            } else {
                Complex::zero()
            }
        });
        apply_q(&self.reflectors, &padded)
    }

    /// Least-squares solution of A * X = B
    pub fn solve(&self, b: &CMatrix) -> Result<CMatrix, QrError> {
        solve_with_factors(&self.reflectors, &self.r, b, self.config.rank_rtol)
    }

    pub fn into_parts(self) -> (Reflectors, CMatrix) {
        (self.reflectors, self.r)
    }
}
