use approx::assert_relative_eq;
use ndarray::{Array1, array};

use stepwise_core::{Scalar, SquareMatrix};

use super::{Error, decompose, inverse_column, solve};
use crate::linear::ValidationError;

fn c(re: f64) -> Scalar {
    Scalar::new(re, 0.0)
}

fn real_matrix(rows: &[&[f64]]) -> SquareMatrix<Scalar> {
    let rows: Vec<Vec<Scalar>> = rows.iter().map(|r| r.iter().map(|&v| c(v)).collect()).collect();
    SquareMatrix::from_rows(&rows).unwrap()
}

fn real_vector(values: &[f64]) -> Array1<Scalar> {
    values.iter().map(|&v| c(v)).collect()
}

fn example() -> SquareMatrix<Scalar> {
    real_matrix(&[&[2.0, -1.0, -2.0], &[-4.0, 6.0, 3.0], &[-4.0, -2.0, 8.0]])
}

#[test]
fn factors_and_solves_example_system() {
    let solution = solve(&example(), &real_vector(&[3.0, 9.0, -2.0])).unwrap();

    assert_eq!(
        solution.l,
        real_matrix(&[&[1.0, 0.0, 0.0], &[-2.0, 1.0, 0.0], &[-2.0, -1.0, 1.0]])
    );
    assert_eq!(
        solution.u,
        real_matrix(&[&[2.0, -1.0, -2.0], &[0.0, 4.0, -1.0], &[0.0, 0.0, 3.0]])
    );

    assert_eq!(solution.y, real_vector(&[3.0, 15.0, 19.0]));
    assert_relative_eq!(solution.x[0].re, 10.5, epsilon = 1e-12);
    assert_relative_eq!(solution.x[1].re, 16.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(solution.x[2].re, 19.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn steps_snapshot_each_row() {
    let decomposition = decompose(&example()).unwrap();
    let steps = &decomposition.steps;

    assert_eq!(steps.len(), 3);
    assert_eq!(steps.iter().map(|s| s.row).collect::<Vec<_>>(), vec![1, 2, 3]);

    // After row 1, only the first column of L and first row of U are filled.
    assert_eq!(
        steps[0].l,
        real_matrix(&[&[1.0, 0.0, 0.0], &[-2.0, 0.0, 0.0], &[-2.0, 0.0, 0.0]])
    );
    assert_eq!(
        steps[0].u,
        real_matrix(&[&[2.0, -1.0, -2.0], &[0.0, 0.0, 0.0], &[0.0, 0.0, 0.0]])
    );
    assert_eq!(steps[2].l, decomposition.l);
    assert_eq!(steps[2].u, decomposition.u);
}

#[test]
fn decomposition_is_reusable() {
    let decomposition = decompose(&example()).unwrap();

    let first = decomposition.solve(&real_vector(&[3.0, 9.0, -2.0])).unwrap();
    let second = decomposition.solve(&real_vector(&[1.0, 0.0, 0.0])).unwrap();

    assert_ne!(first.x, second.x);
    assert_eq!(first.steps, second.steps);
}

#[test]
fn inverse_columns_form_the_inverse() {
    let a = real_matrix(&[&[4.0, 7.0], &[2.0, 6.0]]);
    // A⁻¹ = [[0.6, -0.7], [-0.2, 0.4]]
    let first = inverse_column(&a, 0).unwrap();
    let second = inverse_column(&a, 1).unwrap();

    assert_relative_eq!(first.x[0].re, 0.6, epsilon = 1e-12);
    assert_relative_eq!(first.x[1].re, -0.2, epsilon = 1e-12);
    assert_relative_eq!(second.x[0].re, -0.7, epsilon = 1e-12);
    assert_relative_eq!(second.x[1].re, 0.4, epsilon = 1e-12);

    assert_eq!(
        inverse_column(&a, 2),
        Err(Error::Validation(ValidationError::ColumnOutOfRange { column: 2, n: 2 }))
    );
}

#[test]
fn solves_complex_system() {
    let i = Scalar::new(0.0, 1.0);
    let a = SquareMatrix::new(array![[c(2.0), i], [-i, c(3.0)]]).unwrap();
    let x = array![c(1.0), Scalar::new(1.0, -1.0)];
    let b = a.as_array().dot(&x);

    let solution = solve(&a, &b).unwrap();

    for (found, expected) in solution.x.iter().zip(x.iter()) {
        assert_relative_eq!(found.re, expected.re, epsilon = 1e-12);
        assert_relative_eq!(found.im, expected.im, epsilon = 1e-12);
    }
}

#[test]
fn zero_pivots_are_reported_by_row() {
    let permutation = real_matrix(&[&[0.0, 1.0], &[1.0, 0.0]]);
    assert_eq!(decompose(&permutation), Err(Error::ZeroPivot { row: 1 }));

    let singular = real_matrix(&[&[1.0, 2.0], &[2.0, 4.0]]);
    assert_eq!(decompose(&singular), Err(Error::ZeroPivot { row: 2 }));
}

#[test]
fn length_mismatch_is_rejected() {
    assert_eq!(
        solve(&example(), &real_vector(&[1.0, 2.0])),
        Err(Error::Validation(ValidationError::LengthMismatch {
            expected: 3,
            found: 2
        }))
    );
}
