use super::Step;

/// Event emitted by Gauss-Seidel iteration after each sweep.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The sweep just recorded.
    pub step: &'a Step,
}

impl Event<'_> {
    /// Returns the largest approximate percent error of the sweep.
    #[must_use]
    pub fn max_error(&self) -> f64 {
        self.step.ea.iter().copied().fold(0.0, f64::max)
    }
}
