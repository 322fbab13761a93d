use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during quadratic interpolation.
#[derive(Debug, Error)]
pub enum Error {
    #[error("initial points must be finite")]
    NonFinite,

    #[error("initial points must be pairwise distinct")]
    IndistinctPoints,

    #[error("zero denominator at step {iter}: the points are collinear")]
    ZeroDenominator { iter: usize },

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn model<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Model(Box::new(err))
    }
}
