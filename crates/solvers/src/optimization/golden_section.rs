//! Golden section search for the optimum of a real function.
//!
//! # Algorithm
//!
//! Each iteration places two interior points by the inverse golden ratio
//! `φ⁻¹ ≈ 0.618`:
//!
//! ```text
//! d  = φ⁻¹ (xu - xl)
//! x1 = xl + d
//! x2 = xu - d
//! ```
//!
//! For a maximum, the bracket becomes `[x2, xu]` when `f(x1) > f(x2)` and
//! `[xl, x1]` otherwise. A minimum uses the opposite comparison. After the
//! configured number of iterations the optimum is reported at the midpoint
//! of the final bracket.
//!
//! # When to Use
//!
//! Golden section search is appropriate when the function is unimodal on the
//! bracket and derivatives are unavailable. It narrows the bracket by a fixed
//! ratio per iteration regardless of the function's shape.
//!
//! # Observer Events
//!
//! One [`Event`] is emitted per iteration. Observers can return
//! [`Action::StopEarly`] to end the run; the optimum is then reported at the
//! midpoint of the bracket the last step produced.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use bracket::BracketError;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Goal, Solution, Status, Step};

use stepwise_core::{Model, Observer};

use bracket::Bracket;

/// Searches the bracket for the optimum named by `goal`.
///
/// Reversed bounds are swapped.
///
/// # Errors
///
/// Returns an error if the bounds are non-finite or equal, or if the model
/// fails.
pub fn solve<M, Obs>(
    model: &M,
    bounds: [f64; 2],
    goal: Goal,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: Model<Input = f64, Output = f64>,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let eval = |x: f64| model.call(&x).map_err(Error::model);

    let mut bracket = Bracket::new(bounds)?;
    let mut steps = Vec::with_capacity(config.max_iters());
    let mut status = Status::Complete;

    for iter in 1..=config.max_iters() {
        let (d, x1, x2) = bracket.interior();
        let (fx1, fx2) = (eval(x1)?, eval(x2)?);

        let step = Step {
            iter,
            xl: bracket.xl,
            fxl: eval(bracket.xl)?,
            x2,
            fx2,
            x1,
            fx1,
            xu: bracket.xu,
            fxu: eval(bracket.xu)?,
            d,
        };

        if goal.prefers(fx1, fx2) {
            bracket.xl = x2;
        } else {
            bracket.xu = x1;
        }

        let action = observer.observe(&Event { step: &step, goal });
        steps.push(step);

        if let Some(Action::StopEarly) = action {
            status = Status::StoppedByObserver;
            break;
        }
    }

    let x_opt = bracket.midpoint();
    Ok(Solution {
        status,
        goal,
        x_opt,
        f_opt: eval(x_opt)?,
        steps,
    })
}

/// Searches the bracket without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the bounds are non-finite or equal, or if the model
/// fails.
pub fn solve_unobserved<M>(
    model: &M,
    bounds: [f64; 2],
    goal: Goal,
    config: &Config,
) -> Result<Solution, Error>
where
    M: Model<Input = f64, Output = f64>,
{
    solve(model, bounds, goal, config, ())
}
