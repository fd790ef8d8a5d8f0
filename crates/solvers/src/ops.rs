//! Elementary dense matrix operations.
//!
//! All functions are pure: they borrow their inputs and return freshly
//! allocated results. Triangular reductions never interchange rows, matching
//! the direct solvers in [`crate::direct`].
//!
//! # Operations
//!
//! - [`determinant`] — product of the pivots of a no-interchange reduction
//! - [`inverse`] — Gauss–Jordan elimination on `[A | I]`
//! - [`transpose`]
//! - [`norm`] and [`vector_norm`] — 1, 2, ∞, and Frobenius norms
//! - [`product`], [`matmul`], [`residual`]
//! - [`is_diagonally_dominant`]

mod norm;

pub use norm::{NormKind, ParseNormKindError, norm, vector_norm};

use linsys_core::{Error, Matrix, require_finite};

/// Pivots with magnitude at or below this value are treated as zero.
pub const DEFAULT_PIVOT_TOL: f64 = 1e-12;

/// Computes the determinant of a square matrix.
///
/// The matrix is reduced to upper-triangular form without row interchange
/// and the pivots are multiplied together. If a pivot is exactly zero the
/// reduction stops and `0.0` is returned; singularity is not an error here.
///
/// # Errors
///
/// Returns a dimension error if `a` is not square, or an invalid-input error
/// if it has non-finite entries.
#[allow(clippy::float_cmp)]
pub fn determinant(a: &Matrix) -> Result<f64, Error> {
    let n = a.require_square()?;
    a.require_finite()?;

    let mut work = a.clone();
    let mut det = 1.0;
    for i in 0..n {
        let pivot = work[(i, i)];
        if pivot == 0.0 {
            return Ok(0.0);
        }
        det *= pivot;
        for j in (i + 1)..n {
            let ratio = work[(j, i)] / pivot;
            subtract_row(&mut work, j, i, ratio);
        }
    }
    Ok(det)
}

/// Computes the inverse of a square matrix using [`DEFAULT_PIVOT_TOL`].
///
/// # Errors
///
/// See [`inverse_with_tol`].
pub fn inverse(a: &Matrix) -> Result<Matrix, Error> {
    inverse_with_tol(a, DEFAULT_PIVOT_TOL)
}

/// Computes the inverse of a square matrix by Gauss–Jordan elimination.
///
/// Each pivot is taken from the diagonal in natural order; rows are never
/// interchanged.
///
/// # Errors
///
/// Returns a dimension error if `a` is not square, an invalid-input error if
/// it has non-finite entries, or [`Error::ZeroPivot`] if a pivot's magnitude
/// is at or below `pivot_tol`.
pub fn inverse_with_tol(a: &Matrix, pivot_tol: f64) -> Result<Matrix, Error> {
    let n = a.require_square()?;
    a.require_finite()?;

    let mut work = a.clone();
    let mut inv = Matrix::identity(n);

    for i in 0..n {
        let pivot = work[(i, i)];
        if pivot.abs() <= pivot_tol {
            return Err(Error::ZeroPivot {
                row: i + 1,
                value: pivot,
            });
        }

        for value in work.row_mut(i) {
            *value /= pivot;
        }
        for value in inv.row_mut(i) {
            *value /= pivot;
        }

        for j in (0..n).filter(|&j| j != i) {
            let ratio = work[(j, i)];
            subtract_row(&mut work, j, i, ratio);
            subtract_row(&mut inv, j, i, ratio);
        }
    }

    Ok(inv)
}

/// Returns the transpose of `a`.
#[must_use]
pub fn transpose(a: &Matrix) -> Matrix {
    let (rows, cols) = a.dims();
    let mut t = Matrix::zeros(cols, rows);
    for i in 0..rows {
        for j in 0..cols {
            t[(j, i)] = a[(i, j)];
        }
    }
    t
}

/// Computes the matrix–vector product `A·x`.
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] if `x.len() != a.cols()`, or an
/// invalid-input error for non-finite entries.
pub fn product(a: &Matrix, x: &[f64]) -> Result<Vec<f64>, Error> {
    if x.len() != a.cols() {
        return Err(Error::LengthMismatch {
            expected: a.cols(),
            got: x.len(),
        });
    }
    a.require_finite()?;
    require_finite("vector", x)?;

    Ok(a.iter_rows().map(|row| dot(row, x)).collect())
}

/// Computes the matrix product `A·B`.
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] if `a.cols() != b.rows()`.
pub fn matmul(a: &Matrix, b: &Matrix) -> Result<Matrix, Error> {
    if a.cols() != b.rows() {
        return Err(Error::LengthMismatch {
            expected: a.cols(),
            got: b.rows(),
        });
    }

    let mut c = Matrix::zeros(a.rows(), b.cols());
    for i in 0..a.rows() {
        for k in 0..a.cols() {
            let a_ik = a[(i, k)];
            for j in 0..b.cols() {
                c[(i, j)] += a_ik * b[(k, j)];
            }
        }
    }
    Ok(c)
}

/// Computes the residual `b − A·x`.
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] if `x` or `b` do not fit `a`.
pub fn residual(a: &Matrix, x: &[f64], b: &[f64]) -> Result<Vec<f64>, Error> {
    if b.len() != a.rows() {
        return Err(Error::LengthMismatch {
            expected: a.rows(),
            got: b.len(),
        });
    }
    let ax = product(a, x)?;
    Ok(b.iter().zip(ax).map(|(bi, axi)| bi - axi).collect())
}

/// Returns true if every row satisfies `|a_ii| > Σ_{j≠i} |a_ij|`.
///
/// Strict row diagonal dominance is sufficient for Jacobi and Gauss–Seidel
/// to converge. The iterative solvers do not call this; it is exposed so
/// callers can explain a result.
///
/// # Errors
///
/// Returns a dimension error if `a` is not square.
pub fn is_diagonally_dominant(a: &Matrix) -> Result<bool, Error> {
    a.require_square()?;
    Ok(a.iter_rows().enumerate().all(|(i, row)| {
        let off: f64 = row
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, v)| v.abs())
            .sum();
        row[i].abs() > off
    }))
}

/// Replaces row `target` with `target − ratio × source`.
pub(crate) fn subtract_row(m: &mut Matrix, target: usize, source: usize, ratio: f64) {
    for col in 0..m.cols() {
        let delta = ratio * m[(source, col)];
        m[(target, col)] -= delta;
    }
}

pub(crate) fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
