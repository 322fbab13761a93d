use stepwise_core::Observer;

use crate::traits::{CanStopEarly, HasApproxError, HasIteration, HasResidual};

/// Stops a root finder once `|f(x)|` drops below a tolerance.
///
/// The fixed-iteration solvers never stop on their own; attach this
/// observer to opt into a convergence exit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidualTolerance {
    tolerance: f64,
    min_iters: usize,
}

impl ResidualTolerance {
    /// Creates an observer that stops once the residual is below `tolerance`.
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            min_iters: 1,
        }
    }

    /// Requires at least `min_iters` iterations before stopping.
    #[must_use]
    pub fn with_min_iters(self, min_iters: usize) -> Self {
        Self { min_iters, ..self }
    }
}

impl<E, A> Observer<E, A> for ResidualTolerance
where
    E: HasIteration + HasResidual,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.iteration() >= self.min_iters && event.residual() < self.tolerance)
            .then(A::stop_early)
    }
}

/// Stops once the approximate percent error drops below a tolerance.
///
/// This is the usual `εa < εs` stopping rule. Events without a defined
/// error, such as the first Muller step, never stop the solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorTolerance {
    percent: f64,
}

impl ErrorTolerance {
    /// Creates an observer that stops once the error is below `percent`.
    #[must_use]
    pub fn new(percent: f64) -> Self {
        Self { percent }
    }

    /// Creates an observer that stops once the result is correct to at
    /// least `digits` significant figures.
    ///
    /// Uses the Scarborough criterion `εs = 0.5 × 10^(2-n) %`.
    #[must_use]
    pub fn significant_figures(digits: u8) -> Self {
        Self::new(0.5 * 10f64.powi(2 - i32::from(digits)))
    }

    /// Returns the tolerance in percent.
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.percent
    }
}

impl<E, A> Observer<E, A> for ErrorTolerance
where
    E: HasApproxError,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        event
            .approx_error()
            .is_some_and(|ea| ea < self.percent)
            .then(A::stop_early)
    }
}
