use thiserror::Error;

use crate::linear::ValidationError;

/// Errors that can occur during LU decomposition.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid system: {0}")]
    Validation(#[from] ValidationError),

    #[error("zero pivot in row {row}: the matrix cannot be factored without pivoting")]
    ZeroPivot { row: usize },
}
