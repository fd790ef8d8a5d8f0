//! LU decomposition (Doolittle form) with forward and back substitution.
//!
//! # Algorithm
//!
//! `A = L·U` with `L` unit lower-triangular and `U` upper-triangular. For
//! each `i` in natural order, row `i` of `U` is computed first:
//!
//! ```text
//! U[i][k] = A[i][k] − Σ_{j<i} L[i][j]·U[j][k]        k ≥ i
//! ```
//!
//! then column `i` of `L`, dividing by the fresh pivot `U[i][i]`:
//!
//! ```text
//! L[k][i] = (A[k][i] − Σ_{j<i} L[k][j]·U[j][i]) / U[i][i]        k > i
//! ```
//!
//! [`solve`] then runs forward substitution on `Ly = b` and back
//! substitution on `Ux = y`.
//!
//! A zero last pivot `U[n−1][n−1]` is never used as a divisor during
//! decomposition, so [`decompose`] succeeds for such a matrix and the
//! failure surfaces in back substitution instead.

use linsys_core::{Error, Matrix, Snapshot, Trace, format_vector};

use crate::system;

use super::Config;

/// The factors of a Doolittle decomposition.
#[derive(Debug, Clone, PartialEq)]
pub struct Decomposition {
    /// Unit lower-triangular factor.
    pub l: Matrix,

    /// Upper-triangular factor.
    pub u: Matrix,

    /// One step per computed row of `U` and column of `L`.
    pub trace: Trace,
}

/// The result of solving `Ax = b` through an LU decomposition.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub l: Matrix,
    pub u: Matrix,

    /// Intermediate vector from forward substitution (`Ly = b`).
    pub y: Vec<f64>,

    /// Solution vector.
    pub x: Vec<f64>,

    /// Decomposition steps followed by substitution steps.
    pub trace: Trace,
}

/// Factors a square matrix as `L·U`.
///
/// # Errors
///
/// Returns a dimension error if `a` is not square, an invalid-input error for
/// non-finite entries, and [`Error::ZeroPivot`] if a pivot needed as a
/// divisor has magnitude at or below [`Config::pivot_tol`].
pub fn decompose(a: &Matrix, config: &Config) -> Result<Decomposition, Error> {
    let n = a.require_square()?;
    a.require_finite()?;

    let mut l = Matrix::zeros(n, n);
    let mut u = Matrix::zeros(n, n);
    let mut trace = Trace::new(config.snapshots());

    for i in 0..n {
        for k in i..n {
            let sum: f64 = (0..i).map(|j| l[(i, j)] * u[(j, k)]).sum();
            u[(i, k)] = a[(i, k)] - sum;
        }
        trace.record_with(
            format!("Step {}: Calculated row {} of U.", i + 1, i + 1),
            || Snapshot::Matrix(u.clone()),
        );

        l[(i, i)] = 1.0;
        let pivot = u[(i, i)];
        if i + 1 < n && pivot.abs() <= config.pivot_tol() {
            return Err(Error::ZeroPivot {
                row: i + 1,
                value: pivot,
            });
        }
        for k in (i + 1)..n {
            let sum: f64 = (0..i).map(|j| l[(k, j)] * u[(j, i)]).sum();
            l[(k, i)] = (a[(k, i)] - sum) / pivot;
        }
        trace.record_with(
            format!("Step {}: Calculated column {} of L.", i + 1, i + 1),
            || Snapshot::Matrix(l.clone()),
        );
    }

    Ok(Decomposition { l, u, trace })
}

/// Solves `Ax = b` by LU decomposition followed by substitution.
///
/// # Errors
///
/// Returns a dimension error if `a` is not square or `b` does not match its
/// order, an invalid-input error for non-finite entries, and
/// [`Error::ZeroPivot`] if any diagonal entry of `U` used as a divisor has
/// magnitude at or below [`Config::pivot_tol`].
pub fn solve(a: &Matrix, b: &[f64], config: &Config) -> Result<Solution, Error> {
    system::validate(a, b)?;
    let Decomposition { l, u, mut trace } = decompose(a, config)?;

    let y = forward_substitute(&l, b, &mut trace);
    let x = back_substitute(&u, &y, config.pivot_tol(), &mut trace)?;

    Ok(Solution { l, u, y, x, trace })
}

/// Solves `Ly = b` for unit lower-triangular `L`.
fn forward_substitute(l: &Matrix, b: &[f64], trace: &mut Trace) -> Vec<f64> {
    let n = b.len();
    let mut y = vec![0.0; n];
    for i in 0..n {
        let sum: f64 = (0..i).map(|j| l[(i, j)] * y[j]).sum();
        y[i] = b[i] - sum;
        trace.record_with(format!("y[{}] = {}", i + 1, y[i]), || {
            Snapshot::Vector(y.clone())
        });
    }
    trace.record(format!("Forward substitution gives y = {}", format_vector(&y)));
    y
}

/// Solves `Ux = y` for upper-triangular `U`.
fn back_substitute(
    u: &Matrix,
    y: &[f64],
    pivot_tol: f64,
    trace: &mut Trace,
) -> Result<Vec<f64>, Error> {
    let n = y.len();
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let pivot = u[(i, i)];
        if pivot.abs() <= pivot_tol {
            return Err(Error::ZeroPivot {
                row: i + 1,
                value: pivot,
            });
        }
        let sum: f64 = ((i + 1)..n).map(|j| u[(i, j)] * x[j]).sum();
        x[i] = (y[i] - sum) / pivot;
        trace.record_with(format!("x[{}] = {}", i + 1, x[i]), || {
            Snapshot::Vector(x.clone())
        });
    }
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use linsys_core::{ErrorKind, SnapshotPolicy};

    use crate::{direct::gauss, ops};

    fn sample() -> Matrix {
        Matrix::from_rows(&[[2.0, 2.0, -1.0], [0.0, 4.0, 1.0], [1.0, -1.0, 3.0]]).unwrap()
    }

    #[test]
    fn factors_reconstruct_matrix() {
        let a = Matrix::from_rows(&[
            [4.0, 3.0, -2.0, 1.0],
            [2.0, 5.0, 1.0, -3.0],
            [-1.0, 2.0, 6.0, 2.0],
            [3.0, -2.0, 1.0, 7.0],
        ])
        .unwrap();
        let Decomposition { l, u, .. } = decompose(&a, &Config::default()).unwrap();
        let lu = ops::matmul(&l, &u).unwrap();

        for i in 0..4 {
            assert_relative_eq!(l[(i, i)], 1.0);
            for j in 0..4 {
                if j > i {
                    assert_eq!(l[(i, j)], 0.0);
                }
                if j < i {
                    assert_eq!(u[(i, j)], 0.0);
                }
                assert_abs_diff_eq!(lu[(i, j)], a[(i, j)], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn decomposition_trace_alternates_u_rows_and_l_columns() {
        let d = decompose(&sample(), &Config::default()).unwrap();
        let descriptions: Vec<&str> = d.trace.descriptions().collect();
        assert_eq!(
            descriptions,
            [
                "Step 1: Calculated row 1 of U.",
                "Step 1: Calculated column 1 of L.",
                "Step 2: Calculated row 2 of U.",
                "Step 2: Calculated column 2 of L.",
                "Step 3: Calculated row 3 of U.",
                "Step 3: Calculated column 3 of L.",
            ]
        );
    }

    #[test]
    fn solve_agrees_with_gauss() {
        let a = sample();
        let b = [1.0, 3.0, -4.0];
        let config = Config::default();

        let lu = solve(&a, &b, &config).unwrap();
        let gauss = gauss::solve(&a, &b, &config).unwrap();

        for (x_lu, x_gauss) in lu.x.iter().zip(&gauss.x) {
            assert_abs_diff_eq!(x_lu, x_gauss, epsilon = 1e-6);
        }
    }

    #[test]
    fn solve_trace_appends_substitution_steps() {
        let a = sample();
        let solution = solve(&a, &[1.0, 3.0, -4.0], &Config::default()).unwrap();
        let descriptions: Vec<&str> = solution.trace.descriptions().collect();

        // 6 decomposition steps, 3 forward, 1 summary, 3 backward.
        assert_eq!(descriptions.len(), 13);
        assert_eq!(descriptions[6], "y[1] = 1");
        assert_eq!(descriptions[9], "Forward substitution gives y = [1.0, 3.0, -3.0]");
        assert_eq!(descriptions[10], "x[3] = -0.75");
        assert_eq!(descriptions[12], "x[1] = -0.8125");

        let indices: Vec<usize> = solution.trace.steps().iter().map(|s| s.index()).collect();
        assert_eq!(indices, (0..13).collect::<Vec<_>>());
    }

    #[test]
    fn forward_substitution_solves_lower_system() {
        let solution = solve(&sample(), &[1.0, 3.0, -4.0], &Config::default()).unwrap();
        let ly = ops::product(&solution.l, &solution.y).unwrap();
        for (lhs, rhs) in ly.iter().zip([1.0, 3.0, -4.0]) {
            assert_abs_diff_eq!(*lhs, rhs, epsilon = 1e-12);
        }
    }

    #[test]
    fn zero_leading_pivot_fails_decomposition() {
        let a = Matrix::from_rows(&[[0.0, 1.0], [1.0, 1.0]]).unwrap();
        let err = decompose(&a, &Config::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SingularMatrix);
        assert!(matches!(err, Error::ZeroPivot { row: 1, .. }));
    }

    #[test]
    fn zero_last_pivot_fails_in_back_substitution() {
        let a = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();

        let d = decompose(&a, &Config::default()).expect("last pivot is not a divisor");
        assert_eq!(d.u[(1, 1)], 0.0);

        let err = solve(&a, &[1.0, 2.0], &Config::default()).unwrap_err();
        assert!(matches!(err, Error::ZeroPivot { row: 2, .. }));
    }

    #[test]
    fn solve_checks_shape_first() {
        let err = solve(&sample(), &[1.0, 2.0], &Config::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DimensionMismatch);
    }

    #[test]
    fn snapshots_hold_factor_progress() {
        let d = decompose(&sample(), &Config::default()).unwrap();
        let Some(Snapshot::Matrix(u)) = d.trace.steps()[0].snapshot() else {
            panic!("expected U snapshot");
        };
        assert_eq!(u.row(0), &[2.0, 2.0, -1.0]);
        assert_eq!(u.row(1), &[0.0, 0.0, 0.0]);

        let quiet = Config::default().with_snapshots(SnapshotPolicy::Never);
        let d = decompose(&sample(), &quiet).unwrap();
        assert!(d.trace.steps().iter().all(|s| s.snapshot().is_none()));
    }
}
