use thiserror::Error;

use linsys_core::SnapshotPolicy;

/// Configuration for the iterative solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tolerance: f64,
    snapshots: SnapshotPolicy,
}

/// Errors that can occur when validating an iterative solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    ZeroMaxIters,

    #[error("tolerance must be finite and positive")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 50,
            tolerance: 1e-8,
            snapshots: SnapshotPolicy::Always,
        }
    }
}

impl Config {
    /// Creates a new config with a validated sweep cap and tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or `tolerance` is not a
    /// finite positive number.
    pub fn new(
        max_iters: usize,
        tolerance: f64,
        snapshots: SnapshotPolicy,
    ) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::ZeroMaxIters);
        }
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            max_iters,
            tolerance,
            snapshots,
        })
    }

    /// Returns the maximum number of sweeps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the error norm below which a sweep counts as converged.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns whether steps carry snapshots of the iterate.
    #[must_use]
    pub fn snapshots(&self) -> SnapshotPolicy {
        self.snapshots
    }

    /// Returns a copy of this config with a different snapshot policy.
    #[must_use]
    pub fn with_snapshots(self, snapshots: SnapshotPolicy) -> Self {
        Self { snapshots, ..self }
    }
}
