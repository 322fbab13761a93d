use serde::Serialize;
use stepwise_core::{Scalar, format::serialize_scalar};

/// One recorded iteration of the secant method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    /// Iteration number, starting at 1.
    pub iter: usize,

    #[serde(serialize_with = "serialize_scalar")]
    pub x0: Scalar,

    #[serde(serialize_with = "serialize_scalar")]
    pub fx0: Scalar,

    #[serde(serialize_with = "serialize_scalar")]
    pub x1: Scalar,

    #[serde(serialize_with = "serialize_scalar")]
    pub fx1: Scalar,

    /// The new root estimate.
    #[serde(serialize_with = "serialize_scalar")]
    pub x2: Scalar,

    #[serde(serialize_with = "serialize_scalar")]
    pub fx2: Scalar,
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

/// The result of the secant method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// The last `x2`.
    #[serde(serialize_with = "serialize_scalar")]
    pub root: Scalar,

    /// Every iteration, in order.
    pub steps: Vec<Step>,
}
