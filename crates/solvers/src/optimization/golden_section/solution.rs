use serde::Serialize;

/// Whether to search for a maximum or a minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Maximize,
    Minimize,
}

impl Goal {
    /// Returns true if `fx1` beats `fx2` under this goal.
    pub(super) fn prefers(self, fx1: f64, fx2: f64) -> bool {
        match self {
            Self::Maximize => fx1 > fx2,
            Self::Minimize => fx1 < fx2,
        }
    }
}

/// One recorded iteration of golden section search.
///
/// Fields are listed left to right along the bracket: `xl < x2 < x1 < xu`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    /// Iteration number, starting at 1.
    pub iter: usize,
    pub xl: f64,
    pub fxl: f64,
    pub x2: f64,
    pub fx2: f64,
    pub x1: f64,
    pub fx1: f64,
    pub xu: f64,
    pub fxu: f64,

    /// Golden distance `φ⁻¹ (xu - xl)`.
    pub d: f64,
}

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Completed all configured iterations.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of golden section search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// The goal that was searched for.
    pub goal: Goal,

    /// Midpoint of the final bracket.
    pub x_opt: f64,

    /// Function value at `x_opt`.
    pub f_opt: f64,

    /// Every iteration, in order.
    pub steps: Vec<Step>,
}
