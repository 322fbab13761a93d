//! One-dimensional optimization of a real function.
//!
//! Functions are any [`Model`] from `f64` to `f64`; a parsed formula can be
//! used through [`Formula::real`], which rejects complex results.
//!
//! # Solvers
//!
//! - [`golden_section`]: shrinks a bracket by the golden ratio toward a
//!   maximum or minimum
//! - [`quadratic`]: repeatedly moves to the vertex of the parabola through
//!   the three most recent points
//!
//! [`Model`]: stepwise_core::Model
//! [`Formula::real`]: stepwise_core::Formula::real

pub mod golden_section;
pub mod quadratic;
