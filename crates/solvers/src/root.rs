//! Root finders for a single complex-valued function.
//!
//! Both solvers run a fixed number of iterations and report every one of
//! them. There is no convergence exit; attach an observer to stop early.
//!
//! # Solvers
//!
//! - [`muller`]: fits a parabola through three points, so it can step off the
//!   real axis and find complex roots from real guesses
//! - [`secant`]: straight-line interpolation through the last two points

pub mod muller;
pub mod secant;
