use serde::Serialize;
use stepwise_core::{Scalar, format::serialize_scalar};

use super::Step;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Completed all configured iterations.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of Muller's method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// The last root estimate.
    #[serde(serialize_with = "serialize_scalar")]
    pub root: Scalar,

    /// Every iteration, in order.
    pub steps: Vec<Step>,
}
