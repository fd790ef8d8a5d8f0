//! Reusable observers for the linsys iterative solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits
//! that work with any solver whose events carry an iteration number and an
//! error norm.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for generic observers
//!   ([`HasIteration`], [`HasErrNorm`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`CancelObserver`] — stops a solve once a [`CancellationToken`] is set
//! - [`LogObserver`] — forwards every sweep to the `log` facade
//! - [`PlotObserver`] — collects convergence traces and shows them via egui
//!   (feature `plot`)
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] for visualizing solver behavior via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: linsys_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasErrNorm`]: traits::HasErrNorm
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod cancel;
mod logging;

#[cfg(feature = "plot")]
mod plot;

pub use cancel::{CancelObserver, CancellationToken};
pub use logging::LogObserver;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig};
