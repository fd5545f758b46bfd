//! # householder-qr: Complex Householder QR
//!
//! QR factorization of tall complex matrices (rows >= columns) with
//! Householder reflections. The factorization is split in two stages:
//!
//! 1. [`factorize`] reduces A to upper-triangular R and records every
//!    reflection as a unit column of the reflector matrix W.
//! 2. [`build_q`] replays the reflections stored in W to materialize the
//!    full unitary factor Q, so that `Q[:, :n] * R == A`.
//!
//! Matrices are `mdarray` tensors of `num_complex::Complex<f64>`.

pub mod config;
pub mod error;
pub mod qr;
pub mod utils;

pub use config::QrConfig;
pub use error::QrError;
pub use qr::{
    HouseholderQR, Reflectors, apply_q, apply_q_adjoint, build_q, build_q_with_config, complex_sign,
    factorize, least_squares, least_squares_with_config, solve_upper_triangular,
};
pub use utils::{
    adjoint, from_real, identity, is_unitary, is_upper_triangular, leading_columns, matmul,
    max_below_diagonal, norm_2, norm_frobenius, norm_max, reconstruction_error, unitarity_error,
    validate_qr,
};

// Re-export external dependencies for convenience
pub use mdarray::DTensor;
pub use num_complex::Complex;

/// Dense complex matrix
pub type CMatrix = DTensor<Complex<f64>, 2>;

/// Dense real matrix
pub type RMatrix = DTensor<f64, 2>;
