//! Classic numerical methods that record every step they take.
//!
//! Each solver lives in its own module with the same shape: a `Config` (for
//! iterative methods), a `solve` entry point, an `Error` enum, and a
//! `Solution` carrying the final answer together with the ordered step
//! history. Iterative solvers also accept an [`Observer`] that sees each step
//! as it is produced and may stop the run early.
//!
//! # Modules
//!
//! - [`root`]: Muller's method and the secant method
//! - [`optimization`]: golden section search and quadratic interpolation
//! - [`linear`]: Cramer's rule, LU decomposition, and Gauss-Seidel iteration
//!
//! [`Observer`]: stepwise_core::Observer

pub mod linear;
pub mod optimization;
pub mod root;
