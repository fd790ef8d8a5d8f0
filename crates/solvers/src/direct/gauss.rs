//! Gaussian elimination without row interchange.
//!
//! # Algorithm
//!
//! The augmented matrix `[A | b]` is reduced to upper-triangular form using
//! each diagonal entry, in natural row order, as the pivot. Rows below the
//! pivot are updated with `R_j ← R_j − (a_ji / a_ii)·R_i`. Back substitution
//! then recovers `x` from the last unknown to the first.
//!
//! # Limitations
//!
//! Rows are never interchanged. A system whose leading diagonal entry
//! becomes zero during elimination is reported as singular even if a row
//! swap would have rescued it.
//!
//! # Trace
//!
//! 1. `Initial augmented matrix`
//! 2. One step per row operation, `R3 -> R3 - 0.50 * R1`, with the
//!    augmented matrix after the operation.
//! 3. One step per back-substituted component, `Calculated x[3] = -0.75`,
//!    with the partially filled solution vector.

use linsys_core::{Error, Matrix, Snapshot, Trace};

use crate::{ops::subtract_row, system};

use super::Config;

/// The result of Gaussian elimination.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Solution vector.
    pub x: Vec<f64>,

    /// Every step taken, in order.
    pub trace: Trace,
}

/// Solves `Ax = b` by Gaussian elimination.
///
/// # Errors
///
/// Returns a dimension error if `a` is not square or `b` does not match its
/// order, an invalid-input error for non-finite entries, and
/// [`Error::ZeroPivot`] if a pivot's magnitude is at or below
/// [`Config::pivot_tol`].
pub fn solve(a: &Matrix, b: &[f64], config: &Config) -> Result<Solution, Error> {
    let n = system::validate(a, b)?;
    let mut aug = a.augment(b)?;
    let mut trace = Trace::new(config.snapshots());

    trace.record_with("Initial augmented matrix", || Snapshot::Matrix(aug.clone()));

    for i in 0..n {
        let pivot = aug[(i, i)];
        if pivot.abs() <= config.pivot_tol() {
            return Err(Error::ZeroPivot {
                row: i + 1,
                value: pivot,
            });
        }

        for j in (i + 1)..n {
            let ratio = aug[(j, i)] / pivot;
            subtract_row(&mut aug, j, i, ratio);
            trace.record_with(
                format!("R{} -> R{} - {ratio:.2} * R{}", j + 1, j + 1, i + 1),
                || Snapshot::Matrix(aug.clone()),
            );
        }
    }

    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let row = aug.row(i);
        let tail: f64 = ((i + 1)..n).map(|k| row[k] * x[k]).sum();
        x[i] = (row[n] - tail) / row[i];
        trace.record_with(format!("Calculated x[{}] = {:.2}", i + 1, x[i]), || {
            Snapshot::Vector(x.clone())
        });
    }

    Ok(Solution { x, trace })
}
