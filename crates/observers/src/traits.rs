//! Capability traits for generic observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer written once works with every solver that implements them.
//!
//! # Event traits
//!
//! - [`HasIteration`] — events that carry a 1-based sweep number
//! - [`HasErrNorm`] — events that carry the distance between successive iterates
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use linsys_core::Observer;
//! use linsys_observers::traits::{CanStopEarly, HasErrNorm};
//!
//! /// Stops once the error norm is small enough for display purposes.
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasErrNorm, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.err_norm() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use linsys_solvers::iterative;

/// An event that carries a sweep number.
pub trait HasIteration {
    /// Returns the 1-based sweep number of this event.
    fn iteration(&self) -> usize;
}

/// An event that carries an error norm.
pub trait HasErrNorm {
    /// Returns the distance between this event's iterate and the previous one.
    fn err_norm(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasIteration for iterative::Event<'_> {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl HasErrNorm for iterative::Event<'_> {
    fn err_norm(&self) -> f64 {
        self.err_norm
    }
}

impl CanStopEarly for iterative::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
