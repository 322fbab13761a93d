//! LU decomposition by Doolittle's method, without pivoting.
//!
//! # Algorithm
//!
//! `A` is factored as `L U` with a unit diagonal on `L`. Row `i` of `U` and
//! column `i` of `L` are produced together:
//!
//! ```text
//! U[i][j] = A[i][j] - Σ_{k<i} L[i][k] U[k][j]             for j ≥ i
//! L[j][i] = (A[j][i] - Σ_{k<i} L[j][k] U[k][i]) / U[i][i]  for j > i
//! ```
//!
//! Snapshots of `L` and `U` after each row are recorded as [`Step`]s. The
//! system is then solved by forward substitution `L y = b` and back
//! substitution `U x = y`.
//!
//! Rows are never exchanged, so a pivot `U[i][i]` with magnitude at most
//! `1e-12` fails with [`Error::ZeroPivot`] even when `A` is nonsingular.
//!
//! A [`Decomposition`] can be reused for several right-hand sides, which is
//! how [`inverse_column`] recovers columns of `A⁻¹`.

mod decompose;
mod error;
mod solution;

#[cfg(test)]
mod tests;

pub use decompose::{Decomposition, PIVOT_TOL, decompose};
pub use error::Error;
pub use solution::{Solution, Step};

use ndarray::Array1;
use stepwise_core::{Scalar, SquareMatrix};

/// Solves `A x = b` by LU decomposition.
///
/// # Errors
///
/// Returns an error if a pivot vanishes or `b` does not match the dimension
/// of `A`.
pub fn solve(a: &SquareMatrix<Scalar>, b: &Array1<Scalar>) -> Result<Solution, Error> {
    decompose(a)?.solve(b)
}

/// Solves for column `column` (zero-based) of `A⁻¹`.
///
/// # Errors
///
/// Returns an error if a pivot vanishes or `column` is out of range.
pub fn inverse_column(a: &SquareMatrix<Scalar>, column: usize) -> Result<Solution, Error> {
    decompose(a)?.inverse_column(column)
}
