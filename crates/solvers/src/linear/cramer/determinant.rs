use stepwise_core::{Scalar, SquareMatrix};

/// Computes the determinant by cofactor expansion along the first row.
///
/// The cost grows factorially with the dimension.
#[must_use]
pub fn determinant(a: &SquareMatrix<Scalar>) -> Scalar {
    let n = a.dim();
    if n == 1 {
        return a[(0, 0)];
    }

    (0..n)
        .map(|j| {
            let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
            sign * a[(0, j)] * determinant(&a.minor(0, j))
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    fn real(rows: &[Vec<f64>]) -> SquareMatrix<Scalar> {
        let rows: Vec<Vec<Scalar>> = rows
            .iter()
            .map(|row| row.iter().map(|&v| Scalar::new(v, 0.0)).collect())
            .collect();
        SquareMatrix::from_rows(&rows).unwrap()
    }

    #[test]
    fn small_determinants() {
        assert_relative_eq!(determinant(&real(&[vec![4.0]])).re, 4.0);
        assert_relative_eq!(
            determinant(&real(&[vec![2.0, -1.0], vec![1.0, 3.0]])).re,
            7.0
        );
        assert_relative_eq!(
            determinant(&real(&[
                vec![2.0, 1.0, -1.0],
                vec![-3.0, -1.0, 2.0],
                vec![-2.0, 1.0, 2.0],
            ]))
            .re,
            -1.0
        );
    }

    #[test]
    fn complex_determinant() {
        let i = Scalar::new(0.0, 1.0);
        let one = Scalar::new(1.0, 0.0);
        let a = SquareMatrix::new(array![[one, i], [i, one]]).unwrap();

        let det = determinant(&a);

        assert_relative_eq!(det.re, 2.0);
        assert_relative_eq!(det.im, 0.0);
    }
}
