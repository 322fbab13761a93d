//! Solvers for square linear systems `A x = b`.
//!
//! Matrices are [`SquareMatrix`] values, so squareness is checked once at
//! construction. Every solver still checks that `b` matches the matrix
//! dimension.
//!
//! # Solvers
//!
//! - [`cramer`]: ratios of determinants, for 2×2 and 3×3 systems
//! - [`lu`]: Doolittle factorization followed by forward and back
//!   substitution
//! - [`gauss_seidel`]: fixed-count iteration for real systems
//!
//! [`SquareMatrix`]: stepwise_core::SquareMatrix

pub mod cramer;
pub mod gauss_seidel;
pub mod lu;

use thiserror::Error;

/// Errors for inputs whose shapes do not fit the solver.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("vector has length {found}, expected {expected}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("unsupported dimension {n}, expected {min} to {max}")]
    UnsupportedDimension { n: usize, min: usize, max: usize },

    #[error("column {column} is out of range for dimension {n}")]
    ColumnOutOfRange { column: usize, n: usize },
}

/// Checks that a vector length matches the matrix dimension.
pub(crate) fn check_len(n: usize, found: usize) -> Result<(), ValidationError> {
    if found == n {
        Ok(())
    } else {
        Err(ValidationError::LengthMismatch { expected: n, found })
    }
}
