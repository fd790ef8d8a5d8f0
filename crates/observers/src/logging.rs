use log::{debug, info};

use linsys_core::Observer;

use crate::traits::{HasErrNorm, HasIteration};

/// An observer that logs every sweep through the `log` facade.
///
/// Each sweep is logged at `debug`. The first sweep whose error norm falls
/// below `tolerance` is also logged at `info`. The observer never acts.
#[derive(Debug, Clone)]
pub struct LogObserver {
    label: String,
    tolerance: f64,
    reported: bool,
}

impl LogObserver {
    /// Creates an observer whose messages start with `label`, reporting
    /// convergence once the error norm falls below `tolerance`.
    #[must_use]
    pub fn new(label: impl Into<String>, tolerance: f64) -> Self {
        Self {
            label: label.into(),
            tolerance,
            reported: false,
        }
    }

    /// Returns true once a converged sweep has been logged.
    #[must_use]
    pub fn reported_convergence(&self) -> bool {
        self.reported
    }
}

impl<E, A> Observer<E, A> for LogObserver
where
    E: HasIteration + HasErrNorm,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let iter = event.iteration();
        let err_norm = event.err_norm();
        debug!("{}: iter {iter}: err_norm = {err_norm:e}", self.label);

        if !self.reported && err_norm < self.tolerance {
            self.reported = true;
            info!(
                "{}: converged after {iter} iterations (err_norm = {err_norm:e})",
                self.label
            );
        }
        None
    }
}
