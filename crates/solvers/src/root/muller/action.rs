/// Control actions supported by Muller's method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the steps taken so far.
    StopEarly,
}
