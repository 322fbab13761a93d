use thiserror::Error;

/// Configuration for Gauss-Seidel iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_iters: usize,
}

/// Errors that can occur when validating a Gauss-Seidel config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    ZeroIters,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_iters: 10 }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero.
    pub fn new(max_iters: usize) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::ZeroIters);
        }
        Ok(Self { max_iters })
    }

    /// Returns the number of sweeps to run.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
