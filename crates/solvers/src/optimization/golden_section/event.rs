use super::{Goal, Step};

/// Event emitted by golden section search after each iteration.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The step just recorded, with the bracket it started from.
    pub step: &'a Step,

    /// The goal being searched for.
    pub goal: Goal,
}

impl Event<'_> {
    /// Returns the better interior point of the step as `(x, f(x))`.
    #[must_use]
    pub fn best(&self) -> (f64, f64) {
        let step = self.step;
        if self.goal.prefers(step.fx1, step.fx2) {
            (step.x1, step.fx1)
        } else {
            (step.x2, step.fx2)
        }
    }
}
