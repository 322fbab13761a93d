use stepwise_core::Scalar;
use thiserror::Error;

use crate::linear::ValidationError;

/// Errors that can occur when applying Cramer's rule.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid system: {0}")]
    Validation(#[from] ValidationError),

    #[error("the system has no unique solution: det(A) = {det}")]
    Singular { det: Scalar },
}
