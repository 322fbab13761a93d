use super::Step;

/// Event emitted by the secant method after each iteration.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The step just recorded.
    pub step: &'a Step,
}
