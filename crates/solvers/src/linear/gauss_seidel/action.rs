/// Control actions supported by Gauss-Seidel iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the sweeps taken so far.
    StopEarly,
}
