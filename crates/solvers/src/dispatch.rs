//! Serializable request and response types, and the routing between them.
//!
//! This is the boundary a transport (the `linsys` CLI, or any other caller
//! speaking JSON) talks to. Requests name a [`Method`] or [`Operation`];
//! responses carry the numeric answer together with the rendered trace.
//! Failures become an [`ErrorReport`] with the error's [`ErrorKind`].
//!
//! No I/O happens here.

use serde::{Deserialize, Serialize};

use linsys_core::{Error, ErrorKind, Matrix};

use crate::{
    Method, direct,
    direct::{gauss, lu},
    iterative,
    ops::{self, NormKind},
};

/// Solver configurations used when routing a request.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Options {
    pub direct: direct::Config,
    pub iterative: iterative::Config,
}

/// A request to solve `Ax = b`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveRequest {
    pub matrix: Matrix,

    /// Right-hand side. Required by every method except `lu`, which returns
    /// the decomposition alone when it is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector: Option<Vec<f64>>,

    /// Starting iterate for the iterative methods; zeros when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x0: Option<Vec<f64>>,

    pub method: Method,
}

/// The result of a [`SolveRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResponse {
    pub method: Method,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<Vec<f64>>,

    /// Rendered trace, one entry per step.
    pub steps: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub convergence: Option<Vec<f64>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub converged: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterations: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residual_norm: Option<f64>,

    #[serde(rename = "L", default, skip_serializing_if = "Option::is_none")]
    pub l: Option<Matrix>,

    #[serde(rename = "U", default, skip_serializing_if = "Option::is_none")]
    pub u: Option<Matrix>,
}

impl SolveResponse {
    fn new(method: Method, solution: Option<Vec<f64>>, steps: Vec<String>) -> Self {
        Self {
            method,
            solution,
            steps,
            convergence: None,
            converged: None,
            iterations: None,
            residual_norm: None,
            l: None,
            u: None,
        }
    }
}

/// Routes a [`SolveRequest`] to its solver.
///
/// # Errors
///
/// Returns [`Error::MissingVector`] if a method other than `lu` has no
/// vector, and otherwise whatever the selected solver returns.
pub fn solve(request: &SolveRequest, options: &Options) -> Result<SolveResponse, Error> {
    let a = &request.matrix;
    let method = request.method;

    let Some(b) = request.vector.as_deref() else {
        if method == Method::Lu {
            let d = lu::decompose(a, &options.direct)?;
            return Ok(SolveResponse {
                l: Some(d.l),
                u: Some(d.u),
                ..SolveResponse::new(method, None, d.trace.render())
            });
        }
        return Err(Error::MissingVector {
            method: method.name(),
        });
    };

    let response = match method {
        Method::Gauss => {
            let s = gauss::solve(a, b, &options.direct)?;
            SolveResponse::new(method, Some(s.x), s.trace.render())
        }
        Method::Lu => {
            let s = lu::solve(a, b, &options.direct)?;
            SolveResponse {
                l: Some(s.l),
                u: Some(s.u),
                ..SolveResponse::new(method, Some(s.x), s.trace.render())
            }
        }
        Method::Jacobi | Method::GaussSeidel => {
            let x0 = request.x0.as_deref();
            let s = if method == Method::Jacobi {
                iterative::jacobi::solve_unobserved(a, b, x0, &options.iterative)?
            } else {
                iterative::gauss_seidel::solve_unobserved(a, b, x0, &options.iterative)?
            };
            iterative_response(s)
        }
    };
    Ok(response)
}

/// Builds the response for an iterative solution.
#[must_use]
pub fn iterative_response(solution: iterative::Solution) -> SolveResponse {
    let converged = solution.converged();
    SolveResponse {
        convergence: Some(solution.convergence),
        converged: Some(converged),
        iterations: Some(solution.iters),
        residual_norm: Some(solution.residual_norm),
        ..SolveResponse::new(solution.method, Some(solution.x), solution.trace.render())
    }
}

/// A single-matrix operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Determinant,
    Inverse,
    Transpose,
    Norm,
    Product,
}

/// A request to apply an [`Operation`] to a matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpRequest {
    pub operation: Operation,
    pub matrix: Matrix,

    /// Required by [`Operation::Product`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector: Option<Vec<f64>>,

    /// Norm used by [`Operation::Norm`]; Frobenius when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub norm: Option<NormKind>,
}

/// The value an operation produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OpValue {
    Scalar(f64),
    Vector(Vec<f64>),
    Matrix(Matrix),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpResponse {
    pub operation: Operation,
    pub result: OpValue,
}

/// Applies an [`OpRequest`].
///
/// # Errors
///
/// Returns [`Error::MissingVector`] when a product has no vector, and
/// otherwise whatever the operation returns.
pub fn apply(request: &OpRequest, options: &Options) -> Result<OpResponse, Error> {
    let a = &request.matrix;
    let result = match request.operation {
        Operation::Determinant => OpValue::Scalar(ops::determinant(a)?),
        Operation::Inverse => OpValue::Matrix(ops::inverse_with_tol(a, options.direct.pivot_tol())?),
        Operation::Transpose => OpValue::Matrix(ops::transpose(a)),
        Operation::Norm => {
            let kind = request.norm.unwrap_or(NormKind::Frobenius);
            OpValue::Scalar(ops::norm(a, kind)?)
        }
        Operation::Product => {
            let x = request
                .vector
                .as_deref()
                .ok_or(Error::MissingVector { method: "product" })?;
            OpValue::Vector(ops::product(a, x)?)
        }
    };
    Ok(OpResponse {
        operation: request.operation,
        result,
    })
}

/// A request to compare Jacobi and Gauss–Seidel on the same system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceRequest {
    pub matrix: Matrix,
    pub vector: Vec<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x0: Option<Vec<f64>>,
}

/// Error-norm sequences of both iterative methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvergenceComparison {
    pub jacobi: Vec<f64>,
    pub gauss_seidel: Vec<f64>,
}

/// Runs both iterative methods and returns their error sequences.
///
/// # Errors
///
/// Returns whatever [`iterative::compare`] returns.
pub fn compare(
    request: &ConvergenceRequest,
    options: &Options,
) -> Result<ConvergenceComparison, Error> {
    let comparison = iterative::compare(
        &request.matrix,
        &request.vector,
        request.x0.as_deref(),
        &options.iterative,
    )?;
    Ok(ConvergenceComparison {
        jacobi: comparison.jacobi.convergence,
        gauss_seidel: comparison.gauss_seidel.convergence,
    })
}

/// The serializable body of a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&Error> for ErrorReport {
    fn from(error: &Error) -> Self {
        Self {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}
