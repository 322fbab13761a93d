//! Reusable observers for Stepwise solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the iterative solvers.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasIteration`], [`HasResidual`], [`HasApproxError`],
//!   [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`TraceObserver`]: logs every step as a `tracing` event
//! - [`ResidualTolerance`]: stops once `|f(x)|` is small enough
//! - [`ErrorTolerance`]: stops once the approximate percent error is small
//!   enough
//! - [`Chain`]: runs two observers on every event
//!
//! [`Observer`]: stepwise_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasResidual`]: traits::HasResidual
//! [`HasApproxError`]: traits::HasApproxError
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod chain;
mod tolerance;
mod trace;

pub use chain::Chain;
pub use tolerance::{ErrorTolerance, ResidualTolerance};
pub use trace::TraceObserver;
