use super::Step;

/// Event emitted by quadratic interpolation after each step.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The step just recorded.
    pub step: &'a Step,
}
