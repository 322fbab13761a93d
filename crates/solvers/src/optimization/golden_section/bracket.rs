use thiserror::Error;

/// The golden ratio: φ = (1 + √5) / 2
const PHI: f64 = 1.618_033_988_749_895;

/// The inverse golden ratio: 1/φ
///
/// This equals φ - 1 due to the golden ratio's unique property.
const INV_PHI: f64 = PHI - 1.0;

/// Errors that can occur when validating the search bounds.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    #[error("bounds must be finite: [{xl}, {xu}]")]
    NonFinite { xl: f64, xu: f64 },

    #[error("bounds must differ, got {x} twice")]
    Empty { x: f64 },
}

/// The current search interval `[xl, xu]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    pub(super) xl: f64,
    pub(super) xu: f64,
}

impl Bracket {
    /// Creates a bracket, swapping reversed bounds.
    pub(super) fn new(bounds: [f64; 2]) -> Result<Self, BracketError> {
        let [a, b] = bounds;
        if !a.is_finite() || !b.is_finite() {
            return Err(BracketError::NonFinite { xl: a, xu: b });
        }
        #[allow(clippy::float_cmp)]
        if a == b {
            return Err(BracketError::Empty { x: a });
        }
        let (xl, xu) = if a < b { (a, b) } else { (b, a) };
        Ok(Self { xl, xu })
    }

    /// Returns the golden distance `d` and the interior points `(x1, x2)`.
    ///
    /// `x1 = xl + d` lies right of `x2 = xu - d`.
    pub(super) fn interior(&self) -> (f64, f64, f64) {
        let d = INV_PHI * (self.xu - self.xl);
        (d, self.xl + d, self.xu - d)
    }

    pub(super) fn midpoint(&self) -> f64 {
        (self.xl + self.xu) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn reversed_bounds_are_swapped() {
        let bracket = Bracket::new([2.0, 0.0]).unwrap();
        assert_eq!(bracket, Bracket { xl: 0.0, xu: 2.0 });
    }

    #[test]
    fn interior_points_follow_golden_ratio() {
        let bracket = Bracket::new([0.0, 1.0]).unwrap();
        let (d, x1, x2) = bracket.interior();

        assert_relative_eq!(d, INV_PHI);
        assert_relative_eq!(x1, INV_PHI);
        assert_relative_eq!(x2, 1.0 - INV_PHI);
        assert_relative_eq!(INV_PHI * INV_PHI, 1.0 - INV_PHI, epsilon = 1e-15);
    }

    #[test]
    fn invalid_bounds() {
        assert_eq!(
            Bracket::new([1.0, 1.0]),
            Err(BracketError::Empty { x: 1.0 })
        );
        assert!(matches!(
            Bracket::new([0.0, f64::INFINITY]),
            Err(BracketError::NonFinite { .. })
        ));
    }
}
