use ndarray::Array1;
use serde::Serialize;
use stepwise_core::{
    Scalar, SquareMatrix,
    format::{Format, serialize_scalar, serialize_scalars},
};

/// One column replacement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    /// Replaced column, starting at 1.
    pub column: usize,

    /// `A` with the column replaced by `b`.
    pub matrix: SquareMatrix<Scalar>,

    #[serde(serialize_with = "serialize_scalar")]
    pub det: Scalar,
}

/// The result of Cramer's rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    /// Determinant of `A`.
    #[serde(serialize_with = "serialize_scalar")]
    pub det: Scalar,

    /// One step per column of `A`.
    pub steps: Vec<Step>,

    /// The unknowns `x1, x2, ...`.
    #[serde(serialize_with = "serialize_scalars")]
    pub solution: Array1<Scalar>,
}

impl Solution {
    /// Returns the unknowns as `("x1", value)` pairs, formatted to six
    /// decimals with trailing zeros stripped.
    #[must_use]
    pub fn named(&self) -> Vec<(String, String)> {
        let format = Format::trimmed(6);
        self.solution
            .iter()
            .enumerate()
            .map(|(i, &x)| (format!("x{}", i + 1), format.scalar(x)))
            .collect()
    }
}
