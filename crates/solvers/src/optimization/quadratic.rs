//! Successive parabolic interpolation toward an optimum.
//!
//! # Algorithm
//!
//! Each step fits a parabola through `(x0, f0), (x1, f1), (x2, f2)` and
//! moves to its vertex:
//!
//! ```text
//!      f0 (x1² - x2²) + f1 (x2² - x0²) + f2 (x0² - x1²)
//! x3 = ------------------------------------------------
//!      2 f0 (x1 - x2) + 2 f1 (x2 - x0) + 2 f2 (x0 - x1)
//! ```
//!
//! The window then shifts to `(x1, x2, x3)`. A single step is the classic
//! one-shot quadratic interpolation estimate.
//!
//! The denominator vanishes when the three points are collinear; the run
//! then fails with [`Error::ZeroDenominator`]. Once the iterates converge
//! exactly two points of the window coincide, and the solver holds `x2` as
//! its estimate instead.
//!
//! The method does not distinguish maxima from minima: it moves to whatever
//! stationary point the parabola has.

mod action;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status, Step};

use stepwise_core::{Model, Observer};

/// Runs successive parabolic interpolation from three points.
///
/// # Errors
///
/// Returns an error if the initial points are not pairwise distinct, the
/// points of a step are collinear, or the model fails.
pub fn solve<M, Obs>(
    model: &M,
    points: [f64; 3],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: Model<Input = f64, Output = f64>,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let [mut x0, mut x1, mut x2] = points;
    if points.iter().any(|x| !x.is_finite()) {
        return Err(Error::NonFinite);
    }
    #[allow(clippy::float_cmp)]
    if x0 == x1 || x1 == x2 || x0 == x2 {
        return Err(Error::IndistinctPoints);
    }

    let eval = |x: f64| model.call(&x).map_err(Error::model);
    let (mut f0, mut f1, mut f2) = (eval(x0)?, eval(x1)?, eval(x2)?);
    let mut steps = Vec::with_capacity(config.max_iters());

    for iter in 1..=config.max_iters() {
        #[allow(clippy::float_cmp)]
        let held = x0 == x1 || x1 == x2 || x0 == x2;

        let (x3, f3) = if held {
            (x2, f2)
        } else {
            let x3 = vertex([x0, x1, x2], [f0, f1, f2]).ok_or(Error::ZeroDenominator { iter })?;
            (x3, eval(x3)?)
        };

        let step = Step {
            iter,
            x0,
            f0,
            x1,
            f1,
            x2,
            f2,
            x3,
            f3,
            held,
        };

        let action = observer.observe(&Event { step: &step });
        steps.push(step);

        if let Some(Action::StopEarly) = action {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x_opt: x3,
                f_opt: f3,
                steps,
            });
        }

        (x0, x1, x2) = (x1, x2, x3);
        (f0, f1, f2) = (f1, f2, f3);
    }

    Ok(Solution {
        status: Status::Complete,
        x_opt: x2,
        f_opt: f2,
        steps,
    })
}

/// Runs successive parabolic interpolation without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the initial points are not pairwise distinct, the
/// points of a step are collinear, or the model fails.
pub fn solve_unobserved<M>(model: &M, points: [f64; 3], config: &Config) -> Result<Solution, Error>
where
    M: Model<Input = f64, Output = f64>,
{
    solve(model, points, config, ())
}

/// Abscissa of the parabola's vertex, or `None` for collinear points.
fn vertex([x0, x1, x2]: [f64; 3], [f0, f1, f2]: [f64; 3]) -> Option<f64> {
    let numerator = f0 * (x1 * x1 - x2 * x2) + f1 * (x2 * x2 - x0 * x0) + f2 * (x0 * x0 - x1 * x1);
    let denominator = 2.0 * f0 * (x1 - x2) + 2.0 * f1 * (x2 - x0) + 2.0 * f2 * (x0 - x1);

    #[allow(clippy::float_cmp)]
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator)
}
