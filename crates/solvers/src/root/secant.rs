//! The secant method for real and complex roots.
//!
//! # Algorithm
//!
//! Each iteration draws the secant line through the last two points and
//! moves to where it crosses zero:
//!
//! ```text
//! x2 = x1 - f(x1) * (x1 - x0) / (f(x1) - f(x0))
//! ```
//!
//! The window then shifts to `(x1, x2)`. If `f(x1)` and `f(x0)` are exactly
//! equal the secant is flat and the run fails with
//! [`Error::DivisionByZero`]; no partial history is returned.
//!
//! # Observer Events
//!
//! One [`Event`] is emitted per iteration. Observers can return
//! [`Action::StopEarly`] to end the run with the steps recorded so far.

mod action;
mod config;
mod error;
mod event;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status, Step};

use stepwise_core::{Model, Observer, Scalar};

/// Runs the secant method from two initial guesses.
///
/// Exactly [`Config::max_iters`] iterations are run unless the observer
/// stops the solver early.
///
/// # Errors
///
/// Returns an error if the function values at the two current points are
/// exactly equal, or if the model fails.
pub fn solve<M, Obs>(
    model: &M,
    guesses: [Scalar; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: Model<Input = Scalar, Output = Scalar>,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let eval = |x: Scalar| model.call(&x).map_err(Error::model);

    let [mut x0, mut x1] = guesses;
    let (mut fx0, mut fx1) = (eval(x0)?, eval(x1)?);
    let mut steps: Vec<Step> = Vec::with_capacity(config.max_iters());

    for iter in 1..=config.max_iters() {
        if fx1 == fx0 {
            return Err(Error::DivisionByZero { iter });
        }

        let x2 = x1 - fx1 * (x1 - x0) / (fx1 - fx0);
        let fx2 = eval(x2)?;

        let step = Step {
            iter,
            x0,
            fx0,
            x1,
            fx1,
            x2,
            fx2,
        };

        let action = observer.observe(&Event { step: &step });
        steps.push(step);

        if let Some(Action::StopEarly) = action {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                root: x2,
                steps,
            });
        }

        (x0, x1) = (x1, x2);
        (fx0, fx1) = (fx1, fx2);
    }

    Ok(Solution {
        status: Status::Complete,
        root: x1,
        steps,
    })
}

/// Runs the secant method without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the function values at the two current points are
/// exactly equal, or if the model fails.
pub fn solve_unobserved<M>(model: &M, guesses: [Scalar; 2], config: &Config) -> Result<Solution, Error>
where
    M: Model<Input = Scalar, Output = Scalar>,
{
    solve(model, guesses, config, ())
}
