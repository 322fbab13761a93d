use thiserror::Error;

use crate::linear::ValidationError;

/// Errors that can occur during Gauss-Seidel iteration.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid system: {0}")]
    Validation(#[from] ValidationError),

    #[error("zero diagonal entry in row {row}")]
    ZeroDiagonal { row: usize },
}
