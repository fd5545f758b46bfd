//! Common test utilities

#![allow(dead_code)]

use householder_qr::{CMatrix, Complex};

/// Simple deterministic pseudo-random number generator (LCG)
///
/// Uses the Numerical Recipes parameters a = 1664525, c = 1013904223.
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next f64 in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        ((self.state >> 16) as f64) / ((1u64 << 48) as f64)
    }

    /// Next f64 in [-1, 1)
    pub fn next_signed(&mut self) -> f64 {
        2.0 * self.next_f64() - 1.0
    }

    pub fn next_complex(&mut self) -> Complex<f64> {
        let re = self.next_signed();
        let im = self.next_signed();
        Complex::new(re, im)
    }
}

/// Random complex m x n matrix with entries in the unit square
pub fn random_matrix(m: usize, n: usize, seed: u64) -> CMatrix {
    let mut rng = SimpleRng::new(seed);
    let values: Vec<Complex<f64>> = (0..m * n).map(|_| rng.next_complex()).collect();
    CMatrix::from_fn([m, n], |idx| values[idx[0] * n + idx[1]])
}

/// Random real m x n matrix stored as complex with zero imaginary parts
pub fn random_real_matrix(m: usize, n: usize, seed: u64) -> CMatrix {
    let mut rng = SimpleRng::new(seed);
    let values: Vec<f64> = (0..m * n).map(|_| rng.next_signed()).collect();
    CMatrix::from_fn([m, n], |idx| Complex::new(values[idx[0] * n + idx[1]], 0.0))
}

/// Largest entrywise difference between two matrices of equal shape
pub fn max_abs_diff(a: &CMatrix, b: &CMatrix) -> f64 {
    assert_eq!(*a.shape(), *b.shape());
    let (m, n) = *a.shape();
    let mut max_val = 0.0_f64;
    for i in 0..m {
        for j in 0..n {
            max_val = max_val.max((a[[i, j]] - b[[i, j]]).norm());
        }
    }
    max_val
}
