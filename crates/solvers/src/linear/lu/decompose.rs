use ndarray::Array1;
use stepwise_core::{Scalar, SquareMatrix};

use crate::linear::{ValidationError, check_len};

use super::{Error, Solution, Step};

/// Pivots at or below this magnitude are treated as zero.
pub const PIVOT_TOL: f64 = 1e-12;

/// The factors `L` and `U` of a matrix, with the steps that built them.
#[derive(Debug, Clone, PartialEq)]
pub struct Decomposition {
    /// Unit lower triangular factor.
    pub l: SquareMatrix<Scalar>,

    /// Upper triangular factor.
    pub u: SquareMatrix<Scalar>,

    /// Snapshots after each row.
    pub steps: Vec<Step>,
}

/// Factors `A` into `L U` by Doolittle's method.
///
/// # Errors
///
/// Returns [`Error::ZeroPivot`] if any diagonal entry of `U` vanishes.
pub fn decompose(a: &SquareMatrix<Scalar>) -> Result<Decomposition, Error> {
    let n = a.dim();
    let mut l = SquareMatrix::zeros(n);
    let mut u = SquareMatrix::zeros(n);
    let mut steps = Vec::with_capacity(n);

    for i in 0..n {
        for j in i..n {
            let sum: Scalar = (0..i).map(|k| l[(i, k)] * u[(k, j)]).sum();
            u[(i, j)] = a[(i, j)] - sum;
        }

        let pivot = u[(i, i)];
        if pivot.norm() <= PIVOT_TOL {
            return Err(Error::ZeroPivot { row: i + 1 });
        }

        l[(i, i)] = Scalar::new(1.0, 0.0);
        for j in i + 1..n {
            let sum: Scalar = (0..i).map(|k| l[(j, k)] * u[(k, i)]).sum();
            l[(j, i)] = (a[(j, i)] - sum) / pivot;
        }

        steps.push(Step {
            row: i + 1,
            l: l.clone(),
            u: u.clone(),
        });
    }

    Ok(Decomposition { l, u, steps })
}

impl Decomposition {
    /// Returns the dimension of the factored matrix.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.l.dim()
    }

    /// Solves `L U x = b` using the stored factors.
    ///
    /// # Errors
    ///
    /// Returns an error if `b` does not match the dimension.
    pub fn solve(&self, b: &Array1<Scalar>) -> Result<Solution, Error> {
        check_len(self.dim(), b.len())?;

        let y = self.forward(b);
        let x = self.back(&y);

        Ok(Solution {
            l: self.l.clone(),
            u: self.u.clone(),
            y,
            x,
            steps: self.steps.clone(),
        })
    }

    /// Solves for column `column` (zero-based) of the inverse.
    ///
    /// # Errors
    ///
    /// Returns an error if `column` is out of range.
    pub fn inverse_column(&self, column: usize) -> Result<Solution, Error> {
        let n = self.dim();
        if column >= n {
            return Err(ValidationError::ColumnOutOfRange { column, n }.into());
        }

        let mut e = Array1::zeros(n);
        e[column] = Scalar::new(1.0, 0.0);
        self.solve(&e)
    }

    /// Forward substitution: `L y = b`.
    fn forward(&self, b: &Array1<Scalar>) -> Array1<Scalar> {
        let n = self.dim();
        let mut y = Array1::zeros(n);
        for i in 0..n {
            let sum: Scalar = (0..i).map(|k| self.l[(i, k)] * y[k]).sum();
            y[i] = b[i] - sum;
        }
        y
    }

    /// Back substitution: `U x = y`.
    fn back(&self, y: &Array1<Scalar>) -> Array1<Scalar> {
        let n = self.dim();
        let mut x = Array1::zeros(n);
        for i in (0..n).rev() {
            let sum: Scalar = (i + 1..n).map(|k| self.u[(i, k)] * x[k]).sum();
            x[i] = (y[i] - sum) / self.u[(i, i)];
        }
        x
    }
}
