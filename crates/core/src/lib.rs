//! Core traits and types for the Stepwise numerical methods.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! the command-line caller build on:
//!
//! - [`Model`]: a callable that maps a typed input to a typed output
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`Scalar`]: the complex number type used by the complex-valued solvers
//! - [`Formula`]: a constrained expression evaluator in one variable `x`
//! - [`SquareMatrix`]: an `n`×`n` matrix checked at construction
//! - [`format`]: rendering of step values for display

pub mod format;
pub mod formula;
mod matrix;
mod model;
mod observer;
mod scalar;

pub use formula::{Formula, RealFormula};
pub use matrix::{MatrixError, SquareMatrix};
pub use model::{FnModel, Model, from_fn};
pub use observer::Observer;
pub use scalar::{ParseScalarError, Scalar, parse_scalar};
