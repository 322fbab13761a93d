//! Parsers for user-entered text, used as clap value parsers.
//!
//! Scalars accept an `i` or `j` suffix (`3-2i`, `i`, `-4.5j`). Matrices are
//! written row by row, with `;` between rows and `,` between entries
//! (`"2,-1;1,3"`).

use anyhow::{Context, Result, bail, ensure};
use ndarray::Array1;

use stepwise_core::{Formula, Scalar, SquareMatrix, format::IMAG_TOL, parse_scalar};

/// Parses a formula in `x`.
pub fn formula(text: &str) -> Result<Formula> {
    text.parse::<Formula>()
        .with_context(|| format!("invalid formula `{text}`"))
}

/// Parses a real or complex number.
pub fn scalar(text: &str) -> Result<Scalar> {
    parse_scalar(text).with_context(|| format!("invalid number `{text}`"))
}

/// Parses a number that must be real.
pub fn real(text: &str) -> Result<f64> {
    let value = scalar(text)?;
    ensure!(
        value.im.abs() <= IMAG_TOL,
        "`{text}` must be a real number"
    );
    Ok(value.re)
}

/// Parses a comma-separated complex vector.
pub fn complex_vector(text: &str) -> Result<Array1<Scalar>> {
    entries(text, scalar).map(Array1::from)
}

/// Parses a comma-separated real vector.
pub fn real_vector(text: &str) -> Result<Array1<f64>> {
    entries(text, real).map(Array1::from)
}

/// Parses a complex square matrix.
pub fn complex_matrix(text: &str) -> Result<SquareMatrix<Scalar>> {
    matrix(text, scalar)
}

/// Parses a real square matrix.
pub fn real_matrix(text: &str) -> Result<SquareMatrix<f64>> {
    matrix(text, real)
}

fn matrix<T: Clone>(text: &str, parse: fn(&str) -> Result<T>) -> Result<SquareMatrix<T>> {
    let rows = text
        .split(';')
        .enumerate()
        .map(|(i, row)| entries(row, parse).with_context(|| format!("in row {}", i + 1)))
        .collect::<Result<Vec<_>>>()?;
    SquareMatrix::from_rows(&rows).with_context(|| format!("invalid matrix `{text}`"))
}

fn entries<T>(text: &str, parse: fn(&str) -> Result<T>) -> Result<Vec<T>> {
    if text.trim().is_empty() {
        bail!("expected comma-separated numbers");
    }
    text.split(',').map(|entry| parse(entry.trim())).collect()
}
