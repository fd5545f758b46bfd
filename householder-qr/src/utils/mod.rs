//! Utility functions for norms, dense matrix helpers and result validation

pub mod matrix;
pub mod norms;
pub mod validation;

pub use matrix::{adjoint, from_real, identity, leading_columns, matmul};
pub use norms::{norm_2, norm_frobenius, norm_max};
pub use validation::{
    is_unitary, is_upper_triangular, max_below_diagonal, reconstruction_error, unitarity_error,
    validate_qr,
};
