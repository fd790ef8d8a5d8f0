//! Direct solvers for square linear systems `Ax = b`.
//!
//! Both solvers run a fixed number of arithmetic steps and either return an
//! exact (up to rounding) solution or fail on a zero pivot. Neither
//! interchanges rows.
//!
//! # Solvers
//!
//! - [`gauss`] — Gaussian elimination on the augmented matrix `[A | b]`
//! - [`lu`] — Doolittle LU decomposition with forward and back substitution

mod config;

pub mod gauss;
pub mod lu;

pub use config::{Config, ConfigError};
