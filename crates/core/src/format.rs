//! Display formatting for real and complex values.
//!
//! Every value a solver records is a [`Scalar`]. Before it is shown, the value
//! is normalized: an imaginary part within [`IMAG_TOL`] of zero is dropped and
//! the value is treated as real. A [`Format`] then renders the normalized value
//! either at fixed precision (`1.500+0.250i`) or with trailing zeros trimmed
//! (`1.5+0.25i`).

use ndarray::{Array1, Array2};
use serde::{Serialize, Serializer};

use crate::Scalar;

/// Absolute tolerance below which an imaginary part is considered zero.
pub const IMAG_TOL: f64 = 1e-8;

/// A scalar after collapsing a negligible imaginary part.
///
/// Serializes as a bare number when real and as `{"re": .., "im": ..}`
/// otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Normalized {
    Real(f64),
    Complex { re: f64, im: f64 },
}

impl Normalized {
    /// Normalizes `value` using [`IMAG_TOL`].
    #[must_use]
    pub fn new(value: Scalar) -> Self {
        Self::with_tol(value, IMAG_TOL)
    }

    /// Normalizes `value`, treating `|im| <= imag_tol` as zero.
    #[must_use]
    pub fn with_tol(value: Scalar, imag_tol: f64) -> Self {
        if value.im.abs() <= imag_tol {
            Self::Real(value.re)
        } else {
            Self::Complex {
                re: value.re,
                im: value.im,
            }
        }
    }

    /// Returns true if the imaginary part was dropped.
    #[must_use]
    pub fn is_real(&self) -> bool {
        matches!(self, Self::Real(_))
    }
}

/// Rendering rules for scalars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Format {
    decimals: usize,
    trim: bool,
    imag_tol: f64,
}

impl Default for Format {
    fn default() -> Self {
        Self::fixed(3)
    }
}

impl Format {
    /// Always shows exactly `decimals` digits after the decimal point.
    #[must_use]
    pub const fn fixed(decimals: usize) -> Self {
        Self {
            decimals,
            trim: false,
            imag_tol: IMAG_TOL,
        }
    }

    /// Shows up to `decimals` digits, stripping trailing zeros.
    #[must_use]
    pub const fn trimmed(decimals: usize) -> Self {
        Self {
            decimals,
            trim: true,
            imag_tol: IMAG_TOL,
        }
    }

    /// Overrides the tolerance used to collapse imaginary parts.
    #[must_use]
    pub const fn with_imag_tol(self, imag_tol: f64) -> Self {
        Self { imag_tol, ..self }
    }

    /// Formats a real value.
    #[must_use]
    pub fn real(&self, value: f64) -> String {
        let text = format!("{value:.prec$}", prec = self.decimals);
        let text = if self.trim { trim_zeros(&text) } else { text };
        // A value that rounds to zero may keep its sign bit ("-0.000").
        if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
            text[1..].to_string()
        } else {
            text
        }
    }

    /// Formats a scalar, dropping a negligible imaginary part.
    #[must_use]
    pub fn scalar(&self, value: Scalar) -> String {
        match Normalized::with_tol(value, self.imag_tol) {
            Normalized::Real(re) => self.real(re),
            Normalized::Complex { re, im } => {
                let sign = if im.is_sign_negative() { '-' } else { '+' };
                format!("{}{sign}{}i", self.real(re), self.real(im.abs()))
            }
        }
    }

    /// Formats an optional real value, rendering `None` as an empty string.
    #[must_use]
    pub fn optional(&self, value: Option<f64>) -> String {
        value.map(|v| self.real(v)).unwrap_or_default()
    }

    /// Formats every entry of a vector.
    #[must_use]
    pub fn vector(&self, values: &Array1<Scalar>) -> Vec<String> {
        values.iter().map(|&v| self.scalar(v)).collect()
    }

    /// Formats a matrix as rows of strings.
    #[must_use]
    pub fn matrix(&self, matrix: &Array2<Scalar>) -> Vec<Vec<String>> {
        matrix
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|&v| self.scalar(v)).collect())
            .collect()
    }
}

fn trim_zeros(text: &str) -> String {
    if !text.contains('.') {
        return text.to_string();
    }
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Serializes a scalar in its [`Normalized`] form.
///
/// Intended for `#[serde(serialize_with = "...")]`.
///
/// # Errors
///
/// Propagates serializer errors.
pub fn serialize_scalar<S: Serializer>(value: &Scalar, serializer: S) -> Result<S::Ok, S::Error> {
    Normalized::new(*value).serialize(serializer)
}

/// Serializes a sequence of scalars in their [`Normalized`] form.
///
/// # Errors
///
/// Propagates serializer errors.
pub fn serialize_scalars<S, T>(values: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    for<'a> &'a T: IntoIterator<Item = &'a Scalar>,
{
    serializer.collect_seq(values.into_iter().map(|&v| Normalized::new(v)))
}
