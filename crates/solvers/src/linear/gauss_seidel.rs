//! Gauss-Seidel iteration for real linear systems.
//!
//! # Algorithm
//!
//! Each sweep updates the unknowns in order, always using the newest
//! values:
//!
//! ```text
//! x[i] = (b[i] - Σ_{j≠i} A[i][j] x[j]) / A[i][i]
//! ```
//!
//! After a sweep the approximate percent error of each unknown is
//! `|(x_new - x_old) / x_new| · 100`, or zero when `x_new` is zero. The
//! first sweep has no meaningful previous value, so its errors are
//! reported as 100.
//!
//! Convergence is only guaranteed for suitable matrices, such as strictly
//! diagonally dominant ones. The solver runs a fixed number of sweeps
//! either way.
//!
//! # Observer Events
//!
//! One [`Event`] is emitted per sweep. Observers can return
//! [`Action::StopEarly`] to end the run with the sweeps recorded so far.

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

use ndarray::Array1;
use stepwise_core::{Observer, SquareMatrix};

use super::check_len;

/// Runs Gauss-Seidel iteration on `A x = b`.
///
/// The initial guess defaults to zeros.
///
/// # Errors
///
/// Returns an error if `b` or the guess does not match the dimension of
/// `A`, or a diagonal entry of `A` is zero.
pub fn solve<Obs>(
    a: &SquareMatrix<f64>,
    b: &Array1<f64>,
    guess: Option<&Array1<f64>>,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let n = a.dim();
    check_len(n, b.len())?;

    let mut x = match guess {
        Some(guess) => {
            check_len(n, guess.len())?;
            guess.clone()
        }
        None => Array1::zeros(n),
    };

    #[allow(clippy::float_cmp)]
    if let Some(row) = (0..n).find(|&i| a[(i, i)] == 0.0) {
        return Err(Error::ZeroDiagonal { row: row + 1 });
    }

    let mut steps = Vec::with_capacity(config.max_iters());

    for iter in 1..=config.max_iters() {
        let old = x.clone();

        for i in 0..n {
            let sigma: f64 = (0..n).filter(|&j| j != i).map(|j| a[(i, j)] * x[j]).sum();
            x[i] = (b[i] - sigma) / a[(i, i)];
        }

        let ea = if iter == 1 {
            vec![100.0; n]
        } else {
            x.iter()
                .zip(old.iter())
                .map(|(&new, &old)| percent_change(new, old))
                .collect()
        };

        let step = Step {
            iter,
            x: x.to_vec(),
            ea,
        };

        let action = observer.observe(&Event { step: &step });
        steps.push(step);

        if let Some(Action::StopEarly) = action {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x: x.to_vec(),
                steps,
            });
        }
    }

    Ok(Solution {
        status: Status::Complete,
        x: x.to_vec(),
        steps,
    })
}

/// Runs Gauss-Seidel iteration without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if `b` or the guess does not match the dimension of
/// `A`, or a diagonal entry of `A` is zero.
pub fn solve_unobserved(
    a: &SquareMatrix<f64>,
    b: &Array1<f64>,
    guess: Option<&Array1<f64>>,
    config: &Config,
) -> Result<Solution, Error> {
    solve(a, b, guess, config, ())
}

fn percent_change(new: f64, old: f64) -> f64 {
    #[allow(clippy::float_cmp)]
    if new == 0.0 {
        return 0.0;
    }
    ((new - old) / new).abs() * 100.0
}
