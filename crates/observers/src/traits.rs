//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasIteration`]: events that know their iteration number
//! - [`HasResidual`]: events that carry a residual `|f(x)|`
//! - [`HasApproxError`]: events that carry an approximate percent error
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use stepwise_core::Observer;
//! use stepwise_observers::traits::{CanStopEarly, HasIteration, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//!     min_iters: usize,
//! }
//!
//! impl<E: HasIteration + HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.iteration() >= self.min_iters && event.residual() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use stepwise_solvers::{
    linear::gauss_seidel,
    optimization::{golden_section, quadratic},
    root::{muller, secant},
};

/// An event that knows which iteration produced it.
pub trait HasIteration {
    /// Returns the iteration number, starting at 1.
    fn iteration(&self) -> usize;
}

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the magnitude of the function at the new estimate.
    fn residual(&self) -> f64;
}

/// An event that carries an approximate percent error.
pub trait HasApproxError {
    /// Returns the approximate percent error, if one is defined yet.
    fn approx_error(&self) -> Option<f64>;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- HasIteration ---

impl HasIteration for muller::Event<'_> {
    fn iteration(&self) -> usize {
        self.step.iter
    }
}

impl HasIteration for secant::Event<'_> {
    fn iteration(&self) -> usize {
        self.step.iter
    }
}

impl HasIteration for golden_section::Event<'_> {
    fn iteration(&self) -> usize {
        self.step.iter
    }
}

impl HasIteration for quadratic::Event<'_> {
    fn iteration(&self) -> usize {
        self.step.iter
    }
}

impl HasIteration for gauss_seidel::Event<'_> {
    fn iteration(&self) -> usize {
        self.step.iter
    }
}

// --- HasResidual for the root finders ---

impl HasResidual for muller::Event<'_> {
    fn residual(&self) -> f64 {
        self.step.fx3.norm()
    }
}

impl HasResidual for secant::Event<'_> {
    fn residual(&self) -> f64 {
        self.step.fx2.norm()
    }
}

// --- HasApproxError ---

impl HasApproxError for muller::Event<'_> {
    fn approx_error(&self) -> Option<f64> {
        self.step.ea
    }
}

impl HasApproxError for gauss_seidel::Event<'_> {
    fn approx_error(&self) -> Option<f64> {
        Some(self.max_error())
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for muller::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for secant::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for golden_section::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for quadratic::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for gauss_seidel::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
