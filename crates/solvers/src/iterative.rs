//! Stationary iterative solvers for square linear systems `Ax = b`.
//!
//! # Algorithm
//!
//! Starting from `x0` (or zeros), each sweep computes a new iterate from the
//! previous one. After every sweep the error norm `‖x⁽ᵏ⁺¹⁾ − x⁽ᵏ⁾‖₂` is
//! appended to the convergence sequence. The solve stops as soon as that norm
//! falls below [`Config::tolerance`], or after [`Config::max_iters`] sweeps.
//!
//! Diagonal dominance is never checked. A system that does not converge runs
//! to the cap and is reported with [`Status::MaxIters`].
//!
//! # Solvers
//!
//! - [`jacobi`] — every component from the previous iterate
//! - [`gauss_seidel`] — new components used immediately
//! - [`compare`] — both from the same start, for comparing error sequences
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] after every sweep, including the sweep that
//! converges. Observers can return [`Action::StopEarly`] to end the solve
//! with [`Status::StoppedByObserver`]; a converging sweep reports
//! [`Status::Converged`] regardless.
//!
//! # Trace
//!
//! 1. `Initial guess: [0.0, 0.0]`
//! 2. One step per sweep, `Iter 3: [...] (err=8.924e-2)`, with the iterate.
//! 3. A closing status step unless the solve converged.

mod action;
mod compare;
mod config;
mod event;
mod iterate;
mod solution;

pub mod gauss_seidel;
pub mod jacobi;


pub use action::Action;
pub use compare::{Comparison, compare};
pub use config::{Config, ConfigError};
pub use event::Event;
pub use solution::{Solution, Status};
