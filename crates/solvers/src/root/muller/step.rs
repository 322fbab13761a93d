use serde::Serialize;
use stepwise_core::{Scalar, format::serialize_scalar};

/// One recorded iteration of Muller's method.
///
/// Complex values serialize as a bare number when their imaginary part is
/// negligible.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    /// Iteration number, starting at 1.
    pub iter: usize,

    #[serde(serialize_with = "serialize_scalar")]
    pub h0: Scalar,

    #[serde(serialize_with = "serialize_scalar")]
    pub h1: Scalar,

    #[serde(serialize_with = "serialize_scalar")]
    pub s0: Scalar,

    #[serde(serialize_with = "serialize_scalar")]
    pub s1: Scalar,

    #[serde(serialize_with = "serialize_scalar")]
    pub a: Scalar,

    #[serde(serialize_with = "serialize_scalar")]
    pub b: Scalar,

    #[serde(serialize_with = "serialize_scalar")]
    pub c: Scalar,

    /// The new root estimate.
    #[serde(serialize_with = "serialize_scalar")]
    pub x3: Scalar,

    /// Function value at `x3`.
    #[serde(serialize_with = "serialize_scalar")]
    pub fx3: Scalar,

    /// Approximate percent error, absent on the first iteration.
    pub ea: Option<f64>,

    /// True percent error, present when a true root is configured.
    pub et: Option<f64>,

    /// Whether the iterate was held because two points coincided.
    ///
    /// A held step repeats `x2` and reports zero slopes and coefficients.
    pub held: bool,
}
