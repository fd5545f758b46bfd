//! Householder QR: factorization, Q reconstruction and solves

pub mod decomposition;
pub mod factorize;
pub mod householder;
pub mod reconstruct;
pub mod reflectors;
pub mod solve;

pub use decomposition::HouseholderQR;
pub use factorize::factorize;
pub use householder::complex_sign;
pub use reconstruct::{apply_q, apply_q_adjoint, build_q, build_q_with_config};
pub use reflectors::Reflectors;
pub use solve::{least_squares, least_squares_with_config, solve_upper_triangular};
