use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use linsys_core::Observer;

use crate::traits::CanStopEarly;

/// A shared flag that requests cancellation of a running solve.
///
/// Clones share the same flag, so one clone can be handed to the thread
/// running the solver (inside a [`CancelObserver`]) while another stays with
/// whoever decides to cancel.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Idempotent.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// An observer that stops the solve once its token is cancelled.
///
/// The token is checked after every sweep, so a solve ends at most one sweep
/// after cancellation is requested.
#[derive(Debug, Clone)]
pub struct CancelObserver {
    token: CancellationToken,
}

impl CancelObserver {
    #[must_use]
    pub fn new(token: CancellationToken) -> Self {
        Self { token }
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for CancelObserver {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.token.is_cancelled().then(A::stop_early)
    }
}
