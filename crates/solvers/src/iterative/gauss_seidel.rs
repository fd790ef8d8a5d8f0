//! Gauss–Seidel iteration.
//!
//! Like Jacobi, except each new component is used as soon as it is
//! computed within the same sweep:
//!
//! ```text
//! x_i⁽ᵏ⁺¹⁾ = (b_i − Σ_{j<i} A_ij·x_j⁽ᵏ⁺¹⁾ − Σ_{j>i} A_ij·x_j⁽ᵏ⁾) / A_ii
//! ```
//!
//! For strictly diagonally dominant systems this typically needs fewer
//! sweeps than Jacobi.

use linsys_core::{Error, Matrix, Observer};

use crate::Method;

use super::{Action, Config, Event, Solution, iterate::iterate};

/// Solves `Ax = b` by Gauss–Seidel iteration starting from `x0` (zeros if
/// `None`).
///
/// Observer and status behavior match [`jacobi::solve`](super::jacobi::solve).
///
/// # Errors
///
/// Returns a dimension error if `a` is not square or `b` or `x0` do not
/// match its order, and an invalid-input error for non-finite entries or a
/// zero diagonal entry.
pub fn solve<Obs>(
    a: &Matrix,
    b: &[f64],
    x0: Option<&[f64]>,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    iterate(Method::GaussSeidel, a, b, x0, config, observer, sweep)
}

/// Solves `Ax = b` by Gauss–Seidel iteration without observer support.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved(
    a: &Matrix,
    b: &[f64],
    x0: Option<&[f64]>,
    config: &Config,
) -> Result<Solution, Error> {
    solve(a, b, x0, config, ())
}

fn sweep(a: &Matrix, b: &[f64], prev: &[f64], next: &mut [f64]) {
    next.copy_from_slice(prev);
    for (i, row) in a.iter_rows().enumerate() {
        // Entries before `i` already hold this sweep's values.
        let off: f64 = (0..row.len())
            .filter(|&j| j != i)
            .map(|j| row[j] * next[j])
            .sum();
        next[i] = (b[i] - off) / row[i];
    }
}
