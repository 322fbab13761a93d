//! Muller's method for real and complex roots.
//!
//! # Algorithm
//!
//! Each iteration fits a parabola through the three most recent points
//! `x0, x1, x2` and moves to the parabola's root nearest `x2`:
//!
//! ```text
//! h0 = x1 - x0                 h1 = x2 - x1
//! s0 = (f(x1) - f(x0)) / h0    s1 = (f(x2) - f(x1)) / h1
//! a  = (s1 - s0) / (h1 + h0)   b  = a*h1 + s1          c = f(x2)
//! x3 = x2 - 2c / (b + sign(Re b) * sqrt(b² - 4ac))
//! ```
//!
//! The window then shifts to `(x1, x2, x3)`. The square root is the complex
//! principal root, so real guesses can lead to complex roots. `sign(0)` is
//! zero, which leaves only `b` in the denominator.
//!
//! Once the iterates converge exactly, two points of the window coincide and
//! the divided differences are undefined. The solver then holds: it repeats
//! `x2` as the new estimate and marks the step as [`Step::held`].
//!
//! # Observer Events
//!
//! One [`Event`] is emitted per iteration, after its step is computed.
//! Observers can return [`Action::StopEarly`] to end the run with the steps
//! recorded so far.

mod action;
mod config;
mod error;
mod event;
mod solution;
mod step;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};
pub use step::Step;

use stepwise_core::{Model, Observer, Scalar};

/// Runs Muller's method from three initial guesses.
///
/// Exactly [`Config::max_iters`] iterations are run unless the observer
/// stops the solver early.
///
/// # Errors
///
/// Returns an error if the guesses are not pairwise distinct, the update's
/// denominator is exactly zero, or the model fails.
pub fn solve<M, Obs>(
    model: &M,
    guesses: [Scalar; 3],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: Model<Input = Scalar, Output = Scalar>,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let [mut x0, mut x1, mut x2] = guesses;
    if x0 == x1 || x1 == x2 || x0 == x2 {
        return Err(Error::IndistinctGuesses);
    }

    let eval = |x: Scalar| model.call(&x).map_err(Error::model);
    let (mut f0, mut f1, mut f2) = (eval(x0)?, eval(x1)?, eval(x2)?);

    let zero = Scalar::new(0.0, 0.0);
    let mut steps = Vec::with_capacity(config.max_iters());

    for iter in 1..=config.max_iters() {
        let h0 = x1 - x0;
        let h1 = x2 - x1;
        let held = h0 == zero || h1 == zero || h0 + h1 == zero;

        let (s0, s1, a, b, x3, fx3) = if held {
            (zero, zero, zero, zero, x2, f2)
        } else {
            let s0 = (f1 - f0) / h0;
            let s1 = (f2 - f1) / h1;
            let a = (s1 - s0) / (h1 + h0);
            let b = a * h1 + s1;
            let discriminant = (b * b - 4.0 * a * f2).sqrt();
            let denominator = b + sign(b.re) * discriminant;
            if denominator == zero {
                return Err(Error::ZeroDenominator { iter });
            }
            let x3 = x2 - 2.0 * f2 / denominator;
            (s0, s1, a, b, x3, eval(x3)?)
        };

        let step = Step {
            iter,
            h0,
            h1,
            s0,
            s1,
            a,
            b,
            c: f2,
            x3,
            fx3,
            ea: if iter > 1 {
                percent_error(x2, x3)
            } else {
                None
            },
            et: config
                .true_root()
                .and_then(|root| percent_error(x3, root)),
            held,
        };

        let action = observer.observe(&Event { step: &step });
        steps.push(step);

        if let Some(Action::StopEarly) = action {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                root: x3,
                steps,
            });
        }

        (x0, x1, x2) = (x1, x2, x3);
        (f0, f1, f2) = (f1, f2, fx3);
    }

    Ok(Solution {
        status: Status::Complete,
        root: x2,
        steps,
    })
}

/// Runs Muller's method without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the guesses are not pairwise distinct, the update's
/// denominator is exactly zero, or the model fails.
pub fn solve_unobserved<M>(model: &M, guesses: [Scalar; 3], config: &Config) -> Result<Solution, Error>
where
    M: Model<Input = Scalar, Output = Scalar>,
{
    solve(model, guesses, config, ())
}

/// Sign of a real number, with `sign(0) == 0`.
fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Percent difference between `value` and `reference`, relative to `reference`.
///
/// Undefined when `reference` is zero.
fn percent_error(value: Scalar, reference: Scalar) -> Option<f64> {
    if reference == Scalar::new(0.0, 0.0) {
        return None;
    }
    Some(((reference - value) / reference).norm() * 100.0)
}
