use linsys_core::{ErrorKind, Trace};

use crate::Method;

/// Indicates whether the solver converged or hit the sweep cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// An error norm fell below the configured tolerance.
    Converged,

    /// Reached the sweep cap without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

impl Status {
    /// Classifies a non-converged outcome.
    ///
    /// Only [`Status::MaxIters`] maps to [`ErrorKind::NonConvergence`]; it is
    /// a result state, not an error.
    #[must_use]
    pub fn kind(self) -> Option<ErrorKind> {
        match self {
            Self::MaxIters => Some(ErrorKind::NonConvergence),
            Self::Converged | Self::StoppedByObserver => None,
        }
    }
}

/// The result of a Jacobi or Gauss–Seidel solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// The method that produced this solution.
    pub method: Method,

    /// Final solver status.
    pub status: Status,

    /// The latest iterate.
    pub x: Vec<f64>,

    /// Number of sweeps performed.
    pub iters: usize,

    /// Euclidean norm of `b − A·x` for the returned `x`.
    pub residual_norm: f64,

    /// Error norm of every sweep, in order.
    pub convergence: Vec<f64>,

    pub trace: Trace,
}

impl Solution {
    /// Returns true if the solve met its tolerance.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }
}
