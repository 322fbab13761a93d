use stepwise_core::Scalar;
use thiserror::Error;

/// Configuration for Muller's method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    true_root: Option<Scalar>,
}

/// Errors that can occur when validating a Muller config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    ZeroIters,

    #[error("true_root must be finite and non-zero")]
    TrueRoot,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 10,
            true_root: None,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// The true root, when given, is used to report the true percent error
    /// of every iterate.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or the true root is zero or
    /// non-finite.
    pub fn new(max_iters: usize, true_root: Option<Scalar>) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::ZeroIters);
        }
        if let Some(root) = true_root
            && (!root.is_finite() || root == Scalar::new(0.0, 0.0))
        {
            return Err(ConfigError::TrueRoot);
        }

        Ok(Self {
            max_iters,
            true_root,
        })
    }

    /// Returns the number of iterations to run.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the known true root, if any.
    #[must_use]
    pub fn true_root(&self) -> Option<Scalar> {
        self.true_root
    }
}
