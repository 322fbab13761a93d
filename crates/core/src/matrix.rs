use std::ops::{Index, IndexMut};

use ndarray::{Array1, Array2, Axis};
use num_traits::{One, Zero};
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::{Scalar, format::Normalized};

/// Errors that can occur when building a [`SquareMatrix`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    #[error("matrix is empty")]
    Empty,

    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("row {row} has {len} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// An `n`×`n` matrix whose dimension is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T> {
    data: Array2<T>,
}

impl<T> SquareMatrix<T> {
    /// Wraps an array, checking that it is square and non-empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the array is empty or not square.
    pub fn new(data: Array2<T>) -> Result<Self, MatrixError> {
        let (rows, cols) = data.dim();
        if rows == 0 && cols == 0 {
            return Err(MatrixError::Empty);
        }
        if rows != cols {
            return Err(MatrixError::NotSquare { rows, cols });
        }
        Ok(Self { data })
    }

    /// Returns the dimension `n`.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.nrows()
    }

    /// Borrows the underlying array.
    #[must_use]
    pub fn as_array(&self) -> &Array2<T> {
        &self.data
    }
}

impl<T: Clone> SquareMatrix<T> {
    /// Builds a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, a row length differs from the
    /// first row, or the row count differs from the column count.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, MatrixError> {
        let expected = rows.first().map_or(0, Vec::len);
        if rows.is_empty() || expected == 0 {
            return Err(MatrixError::Empty);
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(MatrixError::RaggedRow {
                row: row + 1,
                len: r.len(),
                expected,
            });
        }
        let flat: Vec<T> = rows.iter().flatten().cloned().collect();
        let data = Array2::from_shape_vec((rows.len(), expected), flat)
            .map_err(|_| MatrixError::Empty)?;
        Self::new(data)
    }

    /// Returns a copy with column `col` replaced by `values`.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds or `values` has the wrong length.
    #[must_use]
    pub fn with_column(&self, col: usize, values: &Array1<T>) -> Self {
        let mut data = self.data.clone();
        data.column_mut(col).assign(values);
        Self { data }
    }

    /// Returns a copy with row `row` and column `col` removed.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is 1×1 or the indices are out of bounds.
    #[must_use]
    pub fn minor(&self, row: usize, col: usize) -> Self {
        assert!(self.dim() > 1, "a 1x1 matrix has no minors");
        let data = self
            .data
            .select(Axis(0), &indices_except(self.dim(), row))
            .select(Axis(1), &indices_except(self.dim(), col));
        Self { data }
    }
}

impl<T: Clone + Zero + One> SquareMatrix<T> {
    /// Returns the `n`×`n` zero matrix.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub fn zeros(n: usize) -> Self {
        assert!(n > 0, "dimension must be positive");
        Self {
            data: Array2::zeros((n, n)),
        }
    }

    /// Returns the `n`×`n` identity matrix.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        assert!(n > 0, "dimension must be positive");
        Self {
            data: Array2::eye(n),
        }
    }
}

fn indices_except(n: usize, skip: usize) -> Vec<usize> {
    (0..n).filter(|&i| i != skip).collect()
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<(usize, usize)> for SquareMatrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut T {
        &mut self.data[index]
    }
}

/// Serializes as nested rows of [`Normalized`] values.
impl Serialize for SquareMatrix<Scalar> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            self.data
                .rows()
                .into_iter()
                .map(|row| row.iter().map(|&v| Normalized::new(v)).collect::<Vec<_>>()),
        )
    }
}

/// Serializes as nested rows of numbers.
impl Serialize for SquareMatrix<f64> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.data.rows().into_iter().map(|row| row.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::array;

    #[test]
    fn from_rows_builds_square_matrix() {
        let m = SquareMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.dim(), 2);
        assert_eq!(m[(1, 0)], 3.0);
    }

    #[test]
    fn from_rows_rejects_bad_shapes() {
        assert_eq!(
            SquareMatrix::<f64>::from_rows(&[]),
            Err(MatrixError::Empty)
        );
        assert_eq!(
            SquareMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]),
            Err(MatrixError::RaggedRow {
                row: 2,
                len: 1,
                expected: 2
            })
        );
        assert_eq!(
            SquareMatrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]),
            Err(MatrixError::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn new_rejects_non_square() {
        let data = Array2::<f64>::zeros((2, 3));
        assert_eq!(
            SquareMatrix::new(data),
            Err(MatrixError::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn with_column_replaces_one_column() {
        let m = SquareMatrix::new(array![[2.0, -1.0], [1.0, 3.0]]).unwrap();
        let replaced = m.with_column(1, &array![1.0, 4.0]);
        assert_eq!(replaced.as_array(), &array![[2.0, 1.0], [1.0, 4.0]]);
        assert_eq!(m[(0, 1)], -1.0);
    }

    #[test]
    fn minor_drops_row_and_column() {
        let m = SquareMatrix::new(array![[1, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap();
        assert_eq!(m.minor(0, 1).as_array(), &array![[4, 6], [7, 9]]);
    }

    #[test]
    fn identity_has_unit_diagonal() {
        let id = SquareMatrix::<f64>::identity(3);
        assert_eq!(id[(2, 2)], 1.0);
        assert_eq!(id[(0, 2)], 0.0);
    }

    #[test]
    fn complex_matrix_serializes_as_normalized_rows() {
        let m = SquareMatrix::new(array![
            [Scalar::new(1.0, 0.0), Scalar::new(0.0, 2.0)],
            [Scalar::new(3.0, 1e-12), Scalar::new(4.0, 0.0)],
        ])
        .unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"[[1.0,{"re":0.0,"im":2.0}],[3.0,4.0]]"#);
    }
}
