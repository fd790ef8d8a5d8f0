use thiserror::Error;

use linsys_core::SnapshotPolicy;

use crate::ops::DEFAULT_PIVOT_TOL;

/// Configuration shared by the direct solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pivot_tol: f64,
    snapshots: SnapshotPolicy,
}

/// Errors that can occur when validating a direct solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("pivot_tol must be finite and non-negative")]
    PivotTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pivot_tol: DEFAULT_PIVOT_TOL,
            snapshots: SnapshotPolicy::Always,
        }
    }
}

impl Config {
    /// Creates a new config with a validated pivot tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `pivot_tol` is negative or non-finite.
    pub fn new(pivot_tol: f64, snapshots: SnapshotPolicy) -> Result<Self, ConfigError> {
        if !pivot_tol.is_finite() || pivot_tol < 0.0 {
            return Err(ConfigError::PivotTol);
        }
        Ok(Self {
            pivot_tol,
            snapshots,
        })
    }

    /// Returns the magnitude at or below which a pivot counts as zero.
    #[must_use]
    pub fn pivot_tol(&self) -> f64 {
        self.pivot_tol
    }

    /// Returns whether steps carry snapshots of the working state.
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
