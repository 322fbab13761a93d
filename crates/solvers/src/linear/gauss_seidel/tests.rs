use approx::assert_relative_eq;
use ndarray::array;

use stepwise_core::SquareMatrix;

use super::{Action, Config, ConfigError, Error, Event, Status, solve, solve_unobserved};
use crate::linear::ValidationError;

fn dominant() -> SquareMatrix<f64> {
    SquareMatrix::new(array![
        [3.0, -0.1, -0.2],
        [0.1, 7.0, -0.3],
        [0.3, -0.2, 10.0],
    ])
    .unwrap()
}

#[test]
fn converges_on_diagonally_dominant_system() {
    let b = array![7.85, -19.3, 71.4];

    let solution = solve_unobserved(&dominant(), &b, None, &Config::default()).unwrap();

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.steps.len(), 10);
    assert_relative_eq!(solution.x[0], 3.0, epsilon = 1e-9);
    assert_relative_eq!(solution.x[1], -2.5, epsilon = 1e-9);
    assert_relative_eq!(solution.x[2], 7.0, epsilon = 1e-9);
}

#[test]
fn first_sweep_uses_newest_values() {
    let b = array![7.85, -19.3, 71.4];
    let config = Config::new(2).unwrap();

    let solution = solve_unobserved(&dominant(), &b, None, &config).unwrap();
    let [first, second] = [&solution.steps[0], &solution.steps[1]];

    let x1 = 7.85 / 3.0;
    let x2 = (-19.3 - 0.1 * x1) / 7.0;
    let x3 = (71.4 - 0.3 * x1 + 0.2 * x2) / 10.0;
    assert_relative_eq!(first.x[0], x1, epsilon = 1e-12);
    assert_relative_eq!(first.x[1], x2, epsilon = 1e-12);
    assert_relative_eq!(first.x[2], x3, epsilon = 1e-12);
    assert_eq!(first.ea, vec![100.0; 3]);

    let expected = ((second.x[0] - x1) / second.x[0]).abs() * 100.0;
    assert_relative_eq!(second.ea[0], expected, epsilon = 1e-12);
    assert!(second.ea.iter().all(|&e| e < 100.0));
}

#[test]
fn unchanged_zero_unknown_has_zero_error() {
    let a = SquareMatrix::new(array![[2.0, 0.0], [0.0, 4.0]]).unwrap();
    let b = array![0.0, 8.0];
    let config = Config::new(2).unwrap();

    let solution = solve_unobserved(&a, &b, None, &config).unwrap();

    assert_eq!(solution.steps[1].ea, vec![0.0, 0.0]);
    assert_eq!(solution.x, vec![0.0, 2.0]);
}

#[test]
fn starts_from_initial_guess() {
    let b = array![7.85, -19.3, 71.4];
    let guess = array![3.0, -2.5, 7.0];
    let config = Config::new(1).unwrap();

    let solution = solve_unobserved(&dominant(), &b, Some(&guess), &config).unwrap();

    assert_relative_eq!(solution.x[0], 3.0, epsilon = 1e-12);
    assert_relative_eq!(solution.x[2], 7.0, epsilon = 1e-12);
}

#[test]
fn rejects_bad_inputs() {
    let b = array![1.0, 2.0];
    assert_eq!(
        solve_unobserved(&dominant(), &b, None, &Config::default()),
        Err(Error::Validation(ValidationError::LengthMismatch {
            expected: 3,
            found: 2
        }))
    );

    let a = SquareMatrix::new(array![[1.0, 2.0], [3.0, 0.0]]).unwrap();
    assert_eq!(
        solve_unobserved(&a, &b, None, &Config::default()),
        Err(Error::ZeroDiagonal { row: 2 })
    );

    assert_eq!(Config::new(0), Err(ConfigError::ZeroIters));
}

#[test]
fn observer_can_stop_when_errors_are_small() {
    let b = array![7.85, -19.3, 71.4];
    let observer = |event: &Event<'_>| (event.max_error() < 1e-3).then_some(Action::StopEarly);

    let solution = solve(&dominant(), &b, None, &Config::default(), observer).unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert!(solution.steps.len() < 10);
    assert!(solution.steps.last().unwrap().ea.iter().all(|&e| e < 1e-3));
}
