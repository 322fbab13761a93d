use approx::assert_relative_eq;

use stepwise_core::{Formula, Scalar, from_fn};

use super::{Action, Config, ConfigError, Error, Event, Status, solve, solve_unobserved};

fn c(re: f64) -> Scalar {
    Scalar::new(re, 0.0)
}

#[test]
fn converges_on_real_cubic() {
    let f = Formula::parse("x^3 - x - 2").unwrap();
    let config = Config::new(7).unwrap();

    let solution = solve_unobserved(&f, [c(1.0), c(2.0)], &config).expect("should complete");

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.steps.len(), 7);
    assert_relative_eq!(solution.root.re, 1.521_379_706_804_567_6, epsilon = 1e-9);
    assert_relative_eq!(solution.root.im, 0.0);
}

#[test]
fn first_step_and_window_shift() {
    let f = Formula::parse("x^3 - x - 2").unwrap();
    let config = Config::new(2).unwrap();

    let solution = solve_unobserved(&f, [c(1.0), c(2.0)], &config).unwrap();
    let [first, second] = [&solution.steps[0], &solution.steps[1]];

    assert_eq!(first.iter, 1);
    assert_relative_eq!(first.fx0.re, -2.0);
    assert_relative_eq!(first.fx1.re, 4.0);
    assert_relative_eq!(first.x2.re, 4.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(first.fx2.re, -26.0 / 27.0, epsilon = 1e-12);

    assert_eq!(second.x0, first.x1);
    assert_eq!(second.x1, first.x2);
    assert_eq!(second.fx1, first.fx2);
    assert_eq!(solution.root, second.x2);
}

#[test]
fn finds_complex_root_from_complex_guess() {
    let f = Formula::parse("x^2 + 1").unwrap();
    let guesses = [c(0.5), Scalar::new(1.0, 0.5)];
    let config = Config::new(9).unwrap();

    let solution = solve_unobserved(&f, guesses, &config).unwrap();

    assert_relative_eq!(solution.root.re, 0.0, epsilon = 1e-9);
    assert_relative_eq!(solution.root.im, 1.0, epsilon = 1e-9);
}

#[test]
fn equal_function_values_fail() {
    // x² takes the same value at -1 and 1.
    let f = from_fn(|x: &Scalar| x * x);

    let result = solve_unobserved(&f, [c(-1.0), c(1.0)], &Config::default());

    assert!(matches!(result, Err(Error::DivisionByZero { iter: 1 })));
}

#[test]
fn zero_iterations_is_a_config_error() {
    assert_eq!(Config::new(0), Err(ConfigError::ZeroIters));
}

#[test]
fn observer_can_stop_early() {
    let f = Formula::parse("x^3 - x - 2").unwrap();
    let observer = |event: &Event<'_>| (event.step.fx2.norm() < 1e-3).then_some(Action::StopEarly);

    let solution = solve(&f, [c(1.0), c(2.0)], &Config::default(), observer).unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.steps.len(), 5);
}

#[test]
fn model_errors_are_propagated() {
    let f = Formula::parse("sqrt(x) / (x - 2)").unwrap();

    let result = solve_unobserved(&f, [c(1.0), c(2.0)], &Config::default());

    assert!(matches!(result, Err(Error::Model(_))));
}
