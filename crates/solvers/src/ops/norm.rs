use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use linsys_core::{Error, Matrix, require_finite};

use super::dot;

/// Maximum power-iteration sweeps used to estimate the 2-norm.
const POWER_MAX_ITERS: usize = 1000;

/// Relative change in the eigenvalue estimate at which power iteration stops.
const POWER_REL_TOL: f64 = 1e-14;

/// Which norm to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormKind {
    /// Maximum absolute column sum (sum of absolute values for a vector).
    #[serde(rename = "1", alias = "one")]
    One,

    /// Largest singular value (Euclidean length for a vector).
    #[serde(rename = "2", alias = "two")]
    Two,

    /// Maximum absolute row sum (largest absolute entry for a vector).
    #[serde(rename = "inf", alias = "infinity")]
    Inf,

    /// Square root of the sum of squared entries.
    #[serde(rename = "fro", alias = "frobenius")]
    Frobenius,
}

/// Returned when a string does not name a [`NormKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown norm kind {0:?} (expected 1, 2, inf, or fro)")]
pub struct ParseNormKindError(String);

impl FromStr for NormKind {
    type Err = ParseNormKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "1" | "one" => Ok(Self::One),
            "2" | "two" => Ok(Self::Two),
            "inf" | "infinity" => Ok(Self::Inf),
            "fro" | "frobenius" => Ok(Self::Frobenius),
            _ => Err(ParseNormKindError(s.to_owned())),
        }
    }
}

impl fmt::Display for NormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::One => "1",
            Self::Two => "2",
            Self::Inf => "inf",
            Self::Frobenius => "fro",
        };
        f.write_str(name)
    }
}

/// Computes a matrix norm.
///
/// The 2-norm is estimated by power iteration on `AᵀA`, which is exact to
/// within floating-point tolerance for the small dense matrices this crate
/// targets.
///
/// # Errors
///
/// Returns an invalid-input error if `a` has non-finite entries.
pub fn norm(a: &Matrix, kind: NormKind) -> Result<f64, Error> {
    a.require_finite()?;

    let value = match kind {
        NormKind::One => (0..a.cols())
            .map(|j| a.iter_rows().map(|row| row[j].abs()).sum::<f64>())
            .fold(0.0, f64::max),
        NormKind::Inf => a
            .iter_rows()
            .map(|row| row.iter().map(|v| v.abs()).sum::<f64>())
            .fold(0.0, f64::max),
        NormKind::Frobenius => a.as_slice().iter().map(|v| v * v).sum::<f64>().sqrt(),
        NormKind::Two => spectral_norm(a),
    };
    Ok(value)
}

/// Computes a vector norm. The Frobenius norm of a vector is its 2-norm.
///
/// # Errors
///
/// Returns an invalid-input error if `x` has non-finite entries.
pub fn vector_norm(x: &[f64], kind: NormKind) -> Result<f64, Error> {
    require_finite("vector", x)?;
    Ok(match kind {
        NormKind::One => x.iter().map(|v| v.abs()).sum(),
        NormKind::Two | NormKind::Frobenius => euclidean(x),
        NormKind::Inf => x.iter().map(|v| v.abs()).fold(0.0, f64::max),
    })
}

pub(crate) fn euclidean(x: &[f64]) -> f64 {
    dot(x, x).sqrt()
}

/// Largest singular value of `a`, via power iteration on the Gram matrix.
///
/// Runs once from each basis vector `eᵢ` and keeps the largest estimate.
/// The dominant eigenvector has a nonzero component along at least one
/// `eᵢ`, so at least one run converges to the largest eigenvalue.
#[allow(clippy::float_cmp)]
fn spectral_norm(a: &Matrix) -> f64 {
    let gram = gram(a);
    let n = gram.rows();

    let lambda = (0..n)
        .filter(|&i| gram[(i, i)] != 0.0)
        .map(|i| dominant_eigenvalue(&gram, i))
        .fold(0.0, f64::max);

    lambda.sqrt()
}

/// Rayleigh-quotient estimate of the eigenvalue that power iteration on the
/// symmetric `gram` reaches when started from basis vector `start`.
#[allow(clippy::float_cmp)]
fn dominant_eigenvalue(gram: &Matrix, start: usize) -> f64 {
    let apply = |v: &[f64]| -> Vec<f64> { gram.iter_rows().map(|row| dot(row, v)).collect() };

    let mut w = apply(&basis(gram.rows(), start));
    let mut lambda = gram[(start, start)];
    for _ in 0..POWER_MAX_ITERS {
        let len = euclidean(&w);
        if len == 0.0 {
            return 0.0;
        }
        let v: Vec<f64> = w.iter().map(|x| x / len).collect();
        w = apply(&v);

        let next = dot(&v, &w);
        let done = (next - lambda).abs() <= POWER_REL_TOL * next.abs();
        lambda = next;
        if done {
            break;
        }
    }

    lambda.max(0.0)
}

fn basis(n: usize, i: usize) -> Vec<f64> {
    let mut e = vec![0.0; n];
    e[i] = 1.0;
    e
}

/// Computes `AᵀA`.
fn gram(a: &Matrix) -> Matrix {
    let n = a.cols();
    let mut g = Matrix::zeros(n, n);
    for row in a.iter_rows() {
        for i in 0..n {
            for j in 0..n {
                g[(i, j)] += row[i] * row[j];
            }
        }
    }
    g
}
