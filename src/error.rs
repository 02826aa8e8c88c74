//! Error type shared by the direct solvers

use thiserror::Error;

/// Errors that can occur while solving a dense linear system
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("Matrix is singular: the system has no unique solution")]
    SingularMatrix,
    #[error("Matrix dimensions mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}
