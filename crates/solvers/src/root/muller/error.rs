use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during Muller's method.
#[derive(Debug, Error)]
pub enum Error {
    #[error("initial guesses must be pairwise distinct")]
    IndistinctGuesses,

    #[error("zero denominator in the update at iteration {iter}")]
    ZeroDenominator { iter: usize },

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn model<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Model(Box::new(err))
    }
}
