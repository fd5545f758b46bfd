//! Error types for QR computation

/// Errors reported by the factorization, reconstruction and solve routines
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QrError {
    #[error("QR factorization requires rows >= cols, got {rows}x{cols}")]
    ShapeError { rows: usize, cols: usize },

    #[error("Dimension mismatch: expected {expected} rows, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Invalid reflector in column {column}: {reason}")]
    InvalidReflector { column: usize, reason: String },

    #[error("R is numerically singular at column {column}")]
    RankDeficient { column: usize },

    #[error("Invalid tolerance: {0}")]
    InvalidTolerance(String),
}
