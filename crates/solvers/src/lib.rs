//! Dense linear system solvers that explain themselves.
//!
//! Every solver returns its numeric answer together with a [`Trace`]: the
//! ordered steps it took, each with a human-readable description and, when
//! enabled, a snapshot of the working matrix or vector.
//!
//! # Modules
//!
//! - [`ops`] — determinant, inverse, transpose, norms, products
//! - [`direct`] — Gaussian elimination and LU decomposition
//! - [`iterative`] — Jacobi and Gauss–Seidel, observable per sweep
//! - [`dispatch`] — serializable requests and responses routed by [`Method`]
//!
//! All functions are synchronous and pure with respect to their inputs.
//!
//! [`Trace`]: linsys_core::Trace

pub mod direct;
pub mod dispatch;
pub mod iterative;
pub mod ops;

mod method;
mod system;

pub use method::{Method, ParseMethodError};
