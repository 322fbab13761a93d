//! A constrained expression evaluator for user-entered formulas.
//!
//! Formulas are written in the single variable `x` and evaluated over complex
//! numbers. Supported syntax:
//!
//! - operators `+ - * /` and powers written as `^` or `**`
//! - parentheses and unary minus
//! - real literals (`2`, `0.5`, `1e-3`) and imaginary literals (`2i`, `0.5j`)
//! - constants `pi`, `e`, and `i` (or `j`)
//! - functions `sqrt exp ln log log10 sin cos tan abs`
//!
//! Parsing builds a small expression tree; no user text is ever executed.

mod expr;
mod lexer;
mod parser;

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{Model, Scalar, format::IMAG_TOL};

use expr::Expr;
use parser::Parser;

/// Errors that can occur when parsing a formula.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("formula is empty")]
    Empty,

    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("invalid number '{text}' at position {pos}")]
    InvalidNumber { text: String, pos: usize },

    #[error("unknown name '{name}' at position {pos}")]
    UnknownIdentifier { name: String, pos: usize },

    #[error("expected {expected} at position {pos}")]
    Expected { expected: &'static str, pos: usize },

    #[error("unexpected input at position {pos}")]
    Trailing { pos: usize },

    #[error("formula is nested too deeply at position {pos}")]
    TooDeep { pos: usize },
}

/// Errors that can occur when evaluating a formula.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum EvalError {
    /// The result was infinite or NaN, as with a division by zero.
    #[error("formula is undefined at x = {x}")]
    Undefined { x: Scalar },

    /// A real result was required but the value has an imaginary part.
    #[error("formula is not real at x = {x}: got {value}")]
    NotReal { x: f64, value: Scalar },
}

/// A parsed formula in the variable `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    source: String,
    expr: Expr,
}

impl Formula {
    /// Parses formula text.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] describing the first problem found.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let tokens = lexer::tokenize(source)?;
        let expr = Parser::new(tokens).parse()?;
        Ok(Self {
            source: source.trim().to_string(),
            expr,
        })
    }

    /// Returns the text the formula was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns true if the formula does not reference `x`.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        !self.expr.contains_variable()
    }

    /// Evaluates the formula at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::Undefined`] if the result is not finite.
    pub fn evaluate(&self, x: Scalar) -> Result<Scalar, EvalError> {
        let value = self.expr.eval(x);
        if value.re.is_finite() && value.im.is_finite() {
            Ok(value)
        } else {
            Err(EvalError::Undefined { x })
        }
    }

    /// Returns a real-valued view of this formula.
    ///
    /// The view implements [`Model`] over `f64` and fails with
    /// [`EvalError::NotReal`] when a result has a non-negligible imaginary part.
    #[must_use]
    pub fn real(&self) -> RealFormula<'_> {
        RealFormula { formula: self }
    }
}

impl FromStr for Formula {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Model for Formula {
    type Input = Scalar;
    type Output = Scalar;
    type Error = EvalError;

    fn call(&self, input: &Scalar) -> Result<Scalar, EvalError> {
        self.evaluate(*input)
    }
}

/// Real-valued view of a [`Formula`], created by [`Formula::real`].
#[derive(Debug, Clone, Copy)]
pub struct RealFormula<'a> {
    formula: &'a Formula,
}

impl Model for RealFormula<'_> {
    type Input = f64;
    type Output = f64;
    type Error = EvalError;

    fn call(&self, input: &f64) -> Result<f64, EvalError> {
        let value = self.formula.evaluate(Scalar::new(*input, 0.0))?;
        if value.im.abs() <= IMAG_TOL {
            Ok(value.re)
        } else {
            Err(EvalError::NotReal { x: *input, value })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn eval_real(source: &str, x: f64) -> f64 {
        let formula = Formula::parse(source).expect("should parse");
        formula.real().call(&x).expect("should evaluate")
    }

    #[test]
    fn polynomial_with_caret_and_double_star() {
        assert_relative_eq!(eval_real("x^3 - 6*x + 8", 2.0), 4.0);
        assert_relative_eq!(eval_real("x**3 - 6*x + 8", 2.0), 4.0);
    }

    #[test]
    fn precedence_and_associativity() {
        assert_relative_eq!(eval_real("1 + 2 * 3", 0.0), 7.0);
        assert_relative_eq!(eval_real("(1 + 2) * 3", 0.0), 9.0);
        assert_relative_eq!(eval_real("2^3^2", 0.0), 512.0);
        assert_relative_eq!(eval_real("-x^2", 3.0), -9.0);
        assert_relative_eq!(eval_real("2^-1", 0.0), 0.5);
        assert_relative_eq!(eval_real("8 / 4 / 2", 0.0), 1.0);
        assert_relative_eq!(eval_real("1 - 2 - 3", 0.0), -4.0);
    }

    #[test]
    fn functions_and_constants() {
        assert_relative_eq!(eval_real("sqrt(x)", 16.0), 4.0);
        assert_relative_eq!(eval_real("ln(e)", 0.0), 1.0);
        assert_relative_eq!(eval_real("log10(1000)", 0.0), 3.0, epsilon = 1e-12);
        assert_relative_eq!(eval_real("sin(pi / 2)", 0.0), 1.0);
        assert_relative_eq!(eval_real("abs(x)", -2.5), 2.5);
        assert_relative_eq!(
            eval_real("e^-x * (x^2 - 3*x + 2)", 1.0),
            0.0,
            epsilon = 1e-15
        );
    }

    #[test]
    fn complex_literals_and_arguments() {
        let formula = Formula::parse("x^2 + 1").unwrap();
        let value = formula.evaluate(Scalar::new(0.0, 1.0)).unwrap();
        assert_relative_eq!(value.norm(), 0.0);

        let constant = Formula::parse("3 - 2i").unwrap();
        assert!(constant.is_constant());
        assert_eq!(
            constant.evaluate(Scalar::new(0.0, 0.0)).unwrap(),
            Scalar::new(3.0, -2.0)
        );

        let unit = Formula::parse("i * i").unwrap();
        assert_eq!(
            unit.evaluate(Scalar::new(0.0, 0.0)).unwrap(),
            Scalar::new(-1.0, 0.0)
        );
    }

    #[test]
    fn sqrt_of_negative_is_imaginary() {
        let formula = Formula::parse("sqrt(x)").unwrap();
        let value = formula.evaluate(Scalar::new(-9.0, 0.0)).unwrap();
        assert_relative_eq!(value.im, 3.0);
        assert!(matches!(
            formula.real().call(&-9.0),
            Err(EvalError::NotReal { .. })
        ));
    }

    #[test]
    fn division_by_zero_is_undefined() {
        let formula = Formula::parse("1 / (x - 1)").unwrap();
        assert_eq!(
            formula.evaluate(Scalar::new(1.0, 0.0)),
            Err(EvalError::Undefined {
                x: Scalar::new(1.0, 0.0)
            })
        );
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Formula::parse("   "), Err(ParseError::Empty));
        assert_eq!(
            Formula::parse("y + 1"),
            Err(ParseError::UnknownIdentifier {
                name: "y".into(),
                pos: 0
            })
        );
        assert_eq!(
            Formula::parse("(x + 1"),
            Err(ParseError::Expected {
                expected: "')'",
                pos: 6
            })
        );
        assert_eq!(
            Formula::parse("x 2"),
            Err(ParseError::Trailing { pos: 2 })
        );
        assert!(matches!(
            Formula::parse("sqrt x"),
            Err(ParseError::Expected { .. })
        ));
        assert!(matches!(
            Formula::parse("x +"),
            Err(ParseError::Expected { pos: 3, .. })
        ));
    }

    #[test]
    fn deep_nesting_is_a_parse_error() {
        let too_deep = [
            format!("{}x{}", "(".repeat(20_000), ")".repeat(20_000)),
            format!("{}x", "-".repeat(20_000)),
            format!("{}x{}", "sin(".repeat(5_000), ")".repeat(5_000)),
            vec!["x"; 20_000].join(" + "),
            vec!["2"; 20_000].join("^"),
        ];
        for source in &too_deep {
            assert!(
                matches!(Formula::parse(source), Err(ParseError::TooDeep { .. })),
                "expected a depth error for input of length {}",
                source.len()
            );
        }
    }

    #[test]
    fn moderate_nesting_still_parses() {
        let parens = format!("{}x{}", "(".repeat(100), ")".repeat(100));
        assert_relative_eq!(eval_real(&parens, 2.0), 2.0);

        let negations = format!("{}x", "-".repeat(100));
        assert_relative_eq!(eval_real(&negations, 2.0), 2.0);

        let sum = vec!["x"; 200].join(" + ");
        assert_relative_eq!(eval_real(&sum, 0.5), 100.0);
    }

    #[test]
    fn no_code_execution_names() {
        assert!(matches!(
            Formula::parse("__import__"),
            Err(ParseError::UnknownIdentifier { .. })
        ));
    }

    #[test]
    fn source_round_trips_through_display() {
        let formula: Formula = " x^2 - 2 ".parse().unwrap();
        assert_eq!(formula.to_string(), "x^2 - 2");
        assert_eq!(formula.source(), "x^2 - 2");
        assert!(!formula.is_constant());
    }
}
