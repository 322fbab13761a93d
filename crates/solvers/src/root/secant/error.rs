use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during the secant method.
#[derive(Debug, Error)]
pub enum Error {
    #[error("division by zero at iteration {iter}: f(x1) equals f(x0)")]
    DivisionByZero { iter: usize },

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn model<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Model(Box::new(err))
    }
}
