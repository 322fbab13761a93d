use serde::Serialize;

/// One recorded step of quadratic interpolation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    /// Step number, starting at 1.
    pub iter: usize,
    pub x0: f64,
    pub f0: f64,
    pub x1: f64,
    pub f1: f64,
    pub x2: f64,
    pub f2: f64,

    /// Vertex of the interpolating parabola.
    pub x3: f64,
    pub f3: f64,

    /// Whether the estimate was held because two points coincided.
    pub held: bool,
}

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Completed all configured steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of quadratic interpolation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// The last vertex estimate.
    pub x_opt: f64,

    /// Function value at `x_opt`.
    pub f_opt: f64,

    /// Every step, in order.
    pub steps: Vec<Step>,
}
