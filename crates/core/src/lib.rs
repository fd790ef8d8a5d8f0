//! Core types for the linsys solver engine.
//!
//! This crate defines the shared abstractions that matrix operations,
//! solvers, and observers build on:
//!
//! - [`Matrix`] — a dense, row-major `f64` matrix with fixed dimensions
//! - [`Trace`] and [`Step`] — the ordered, append-only record of what a
//!   solver did, with optional [`Snapshot`]s of the working state
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`Error`] and [`ErrorKind`] — failures and their classification
//!
//! # Features
//!
//! - `serde` — derives `Serialize`/`Deserialize` for [`Matrix`] (as nested
//!   rows), [`ErrorKind`], and [`SnapshotPolicy`].

mod error;
mod matrix;
mod observer;
mod trace;

pub use error::{Error, ErrorKind};
pub use matrix::{Matrix, require_finite};
pub use observer::Observer;
pub use trace::{Snapshot, SnapshotPolicy, Step, Trace, format_vector};
