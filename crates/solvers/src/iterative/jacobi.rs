//! Jacobi iteration.
//!
//! Every component of the next iterate is computed from the previous
//! iterate only:
//!
//! ```text
//! x_i⁽ᵏ⁺¹⁾ = (b_i − Σ_{j≠i} A_ij·x_j⁽ᵏ⁾) / A_ii
//! ```

use linsys_core::{Error, Matrix, Observer};

use crate::Method;

use super::{Action, Config, Event, Solution, iterate::iterate};

/// Solves `Ax = b` by Jacobi iteration starting from `x0` (zeros if `None`).
///
/// The observer receives an [`Event`] after every sweep and may return
/// [`Action::StopEarly`]. Failing to converge within
/// [`Config::max_iters`] sweeps is reported through the solution status,
/// not as an error.
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
    iterate(Method::Jacobi, a, b, x0, config, observer, sweep)
}

/// Solves `Ax = b` by Jacobi iteration without observer support.
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
    for (i, row) in a.iter_rows().enumerate() {
        let off: f64 = row
            .iter()
            .zip(prev)
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, (a_ij, x_j))| a_ij * x_j)
            .sum();
        next[i] = (b[i] - off) / row[i];
    }
}
