use approx::assert_relative_eq;

use stepwise_core::{Formula, Scalar, from_fn};

use super::{Action, Config, ConfigError, Error, Event, Status, solve, solve_unobserved};

fn c(re: f64) -> Scalar {
    Scalar::new(re, 0.0)
}

#[test]
fn finds_complex_root_of_cubic() {
    let f = Formula::parse("x^3 - 6*x + 8").unwrap();

    let solution = solve_unobserved(&f, [c(0.0), c(1.0), c(2.0)], &Config::default())
        .expect("should complete");

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.steps.len(), 10);

    let last = solution.steps.last().unwrap();
    assert!(last.fx3.norm() < 1e-6);
    assert_relative_eq!(solution.root.re, 1.475_686_517_795_7, epsilon = 1e-6);
    assert_relative_eq!(solution.root.im.abs(), 0.730_035_681_602, epsilon = 1e-6);
}

#[test]
fn first_step_matches_hand_computation() {
    let f = Formula::parse("x^3 - 6*x + 8").unwrap();
    let config = Config::new(1, None).unwrap();

    let solution = solve_unobserved(&f, [c(0.0), c(1.0), c(2.0)], &config).unwrap();
    let step = &solution.steps[0];

    assert_eq!(step.iter, 1);
    assert_relative_eq!(step.h0.re, 1.0);
    assert_relative_eq!(step.h1.re, 1.0);
    assert_relative_eq!(step.s0.re, -5.0);
    assert_relative_eq!(step.s1.re, 1.0);
    assert_relative_eq!(step.a.re, 3.0);
    assert_relative_eq!(step.b.re, 4.0);
    assert_relative_eq!(step.c.re, 4.0);
    assert_relative_eq!(step.x3.re, 4.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(step.x3.im, 0.942_809_041_582_063, epsilon = 1e-12);
    assert_eq!(step.ea, None);
    assert_eq!(step.et, None);
    assert!(!step.held);
}

#[test]
fn quadratic_is_solved_exactly_then_held() {
    // A parabola through three points of a quadratic is the quadratic itself.
    let f = from_fn(|x: &Scalar| x * x - 4.0);
    let config = Config::new(3, Some(c(2.0))).unwrap();

    let solution = solve_unobserved(&f, [c(0.0), c(1.0), c(3.0)], &config).unwrap();
    let steps = &solution.steps;

    assert_relative_eq!(steps[0].a.re, 1.0);
    assert_relative_eq!(steps[0].b.re, 6.0);
    assert_relative_eq!(steps[0].c.re, 5.0);
    assert_relative_eq!(steps[0].x3.re, 2.0, epsilon = 1e-12);
    assert_relative_eq!(steps[0].et.unwrap(), 0.0, epsilon = 1e-10);

    assert!(!steps[1].held);
    assert_relative_eq!(steps[1].x3.re, 2.0, epsilon = 1e-12);
    assert_relative_eq!(steps[1].ea.unwrap(), 0.0, epsilon = 1e-10);

    assert!(steps[2].held);
    assert_eq!(steps[2].x3, steps[1].x3);
    assert_eq!(steps[2].a, c(0.0));
    assert_relative_eq!(solution.root.re, 2.0, epsilon = 1e-12);
}

#[test]
fn constant_function_has_zero_denominator() {
    let f = from_fn(|_: &Scalar| c(5.0));

    let result = solve_unobserved(&f, [c(0.0), c(1.0), c(2.0)], &Config::default());

    assert!(matches!(result, Err(Error::ZeroDenominator { iter: 1 })));
}

#[test]
fn rejects_repeated_guesses() {
    let f = from_fn(|x: &Scalar| *x);

    let result = solve_unobserved(&f, [c(0.0), c(1.0), c(0.0)], &Config::default());

    assert!(matches!(result, Err(Error::IndistinctGuesses)));
}

#[test]
fn config_validation() {
    assert_eq!(Config::new(0, None), Err(ConfigError::ZeroIters));
    assert_eq!(Config::new(5, Some(c(0.0))), Err(ConfigError::TrueRoot));
    assert_eq!(Config::default().max_iters(), 10);
}

#[test]
fn model_errors_are_propagated() {
    let f = Formula::parse("1/x").unwrap();

    let result = solve_unobserved(&f, [c(0.0), c(1.0), c(2.0)], &Config::default());

    assert!(matches!(result, Err(Error::Model(_))));
}

#[test]
fn observer_can_stop_early() {
    let f = Formula::parse("x^3 - 6*x + 8").unwrap();

    let mut seen = Vec::new();
    let observer = |event: &Event<'_>| {
        seen.push(event.step.iter);
        (event.step.iter == 2).then_some(Action::StopEarly)
    };

    let solution = solve(&f, [c(0.0), c(1.0), c(2.0)], &Config::default(), observer).unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.steps.len(), 2);
    assert_eq!(solution.root, solution.steps[1].x3);
    assert_eq!(seen, vec![1, 2]);
}

#[test]
fn repeated_runs_are_identical() {
    let f = Formula::parse("x^3 - 6*x + 8").unwrap();
    let guesses = [c(0.0), c(1.0), c(2.0)];

    let first = solve_unobserved(&f, guesses, &Config::default()).unwrap();
    let second = solve_unobserved(&f, guesses, &Config::default()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn steps_serialize_with_normalized_scalars() {
    let f = from_fn(|x: &Scalar| x * x - 4.0);
    let config = Config::new(1, None).unwrap();

    let solution = solve_unobserved(&f, [c(0.0), c(1.0), c(3.0)], &config).unwrap();
    let json = serde_json::to_value(&solution.steps[0]).unwrap();

    assert_eq!(json["iter"], 1);
    assert_eq!(json["h1"], 2.0);
    assert!(json["ea"].is_null());
    assert_eq!(json["held"], false);
}
