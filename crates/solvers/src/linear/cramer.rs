//! Cramer's rule for 2×2 and 3×3 systems.
//!
//! Each unknown is a ratio of determinants: `x_i = det(A_i) / det(A)`, where
//! `A_i` is `A` with column `i` replaced by `b`. Every `A_i` and its
//! determinant is recorded as a [`Step`].
//!
//! Determinants are computed by cofactor expansion. A system whose
//! determinant has magnitude at most `1e-8` is rejected as singular.

mod determinant;
mod error;
mod solution;


pub use determinant::determinant;
pub use error::Error;
pub use solution::{Solution, Step};

use ndarray::Array1;
use stepwise_core::{Scalar, SquareMatrix};

use super::{ValidationError, check_len};

/// Determinants at or below this magnitude are treated as zero.
pub const SINGULAR_TOL: f64 = 1e-8;

/// Solves `A x = b` by Cramer's rule.
///
/// # Errors
///
/// Returns an error if `A` is not 2×2 or 3×3, `b` does not match its
/// dimension, or `A` is singular.
pub fn solve(a: &SquareMatrix<Scalar>, b: &Array1<Scalar>) -> Result<Solution, Error> {
    let n = a.dim();
    if !(2..=3).contains(&n) {
        return Err(ValidationError::UnsupportedDimension { n, min: 2, max: 3 }.into());
    }
    check_len(n, b.len())?;

    let det = determinant(a);
    if det.norm() <= SINGULAR_TOL {
        return Err(Error::Singular { det });
    }

    let steps: Vec<Step> = (0..n)
        .map(|i| {
            let matrix = a.with_column(i, b);
            let det = determinant(&matrix);
            Step {
                column: i + 1,
                matrix,
                det,
            }
        })
        .collect();

    let solution = steps.iter().map(|step| step.det / det).collect();

    Ok(Solution {
        det,
        steps,
        solution,
    })
}
