use serde::Serialize;

/// One recorded sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    /// Sweep number, starting at 1.
    pub iter: usize,

    /// The unknowns after the sweep.
    pub x: Vec<f64>,

    /// Approximate percent error of each unknown.
    pub ea: Vec<f64>,
}

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Completed all configured sweeps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of Gauss-Seidel iteration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// The unknowns after the last sweep.
    pub x: Vec<f64>,

    /// Every sweep, in order.
    pub steps: Vec<Step>,
}
