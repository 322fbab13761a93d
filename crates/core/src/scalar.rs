use thiserror::Error;

use crate::formula::{Formula, ParseError};

/// A real or complex number.
///
/// Real values are complex values with a zero imaginary part.
pub type Scalar = num_complex::Complex64;

/// Errors that can occur when parsing a scalar literal.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseScalarError {
    #[error("invalid number '{text}': {source}")]
    Syntax {
        text: String,
        #[source]
        source: ParseError,
    },

    #[error("invalid number '{text}': must not depend on x")]
    NotConstant { text: String },

    #[error("invalid number '{text}': value is undefined")]
    Undefined { text: String },
}

/// Parses a real or complex literal such as `2`, `-1.5e3`, `3-2i` or `4j`.
///
/// The input is read as a constant formula, so both `i` and `j` work as the
/// imaginary unit and simple arithmetic such as `1/3` or `-pi` is accepted.
///
/// # Errors
///
/// Returns an error if the text is not a finite constant.
pub fn parse_scalar(text: &str) -> Result<Scalar, ParseScalarError> {
    let formula = Formula::parse(text).map_err(|source| ParseScalarError::Syntax {
        text: text.to_string(),
        source,
    })?;
    if !formula.is_constant() {
        return Err(ParseScalarError::NotConstant {
            text: text.to_string(),
        });
    }
    formula
        .evaluate(Scalar::new(0.0, 0.0))
        .map_err(|_| ParseScalarError::Undefined {
            text: text.to_string(),
        })
}
