use ndarray::Array1;
use serde::Serialize;
use stepwise_core::{Scalar, SquareMatrix, format::serialize_scalars};

/// Snapshots of `L` and `U` after one row is processed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    /// Processed row, starting at 1.
    pub row: usize,
    pub l: SquareMatrix<Scalar>,
    pub u: SquareMatrix<Scalar>,
}

/// The result of solving a system by LU decomposition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    pub l: SquareMatrix<Scalar>,
    pub u: SquareMatrix<Scalar>,

    /// Intermediate vector from `L y = b`.
    #[serde(serialize_with = "serialize_scalars")]
    pub y: Array1<Scalar>,

    /// The unknowns, from `U x = y`.
    #[serde(serialize_with = "serialize_scalars")]
    pub x: Array1<Scalar>,

    /// Snapshots after each row of the decomposition.
    pub steps: Vec<Step>,
}
