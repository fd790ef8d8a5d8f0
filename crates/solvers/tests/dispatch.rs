//! JSON boundary tests for request routing.

use approx::assert_relative_eq;
use serde_json::{Value, json};

use linsys_core::ErrorKind;
use linsys_solvers::{
    Method,
    dispatch::{self, ErrorReport, OpRequest, OpValue, Options, SolveRequest},
};

fn solve_json(request: Value) -> Result<Value, ErrorReport> {
    let request: SolveRequest = serde_json::from_value(request).expect("valid request");
    dispatch::solve(&request, &Options::default())
        .map(|response| serde_json::to_value(response).expect("serializable"))
        .map_err(|err| ErrorReport::from(&err))
}

#[test]
fn gauss_response_shape() {
    let response = solve_json(json!({
        "matrix": [[2, 2, -1], [0, 4, 1], [1, -1, 3]],
        "vector": [1, 3, -4],
        "method": "gauss",
    }))
    .unwrap();

    assert_eq!(response["method"], "gauss");
    assert_eq!(response["solution"], json!([-0.8125, 0.9375, -0.75]));
    assert_eq!(response["steps"].as_array().map(Vec::len), Some(7));
    assert!(response.get("convergence").is_none());
    assert!(response.get("L").is_none());
}

#[test]
fn lu_response_has_factors() {
    let response = solve_json(json!({
        "matrix": [[4, 3], [6, 3]],
        "vector": [10, 12],
        "method": "lu",
    }))
    .unwrap();

    assert_eq!(response["L"], json!([[1.0, 0.0], [1.5, 1.0]]));
    assert_eq!(response["U"], json!([[4.0, 3.0], [0.0, -1.5]]));
    assert_eq!(response["solution"], json!([1.0, 2.0]));
}

#[test]
fn iterative_response_has_convergence_fields() {
    let response = solve_json(json!({
        "matrix": [[5, 2, -1], [1, 6, -3], [2, 1, 4]],
        "vector": [6, 4, 2],
        "x0": [0, 0, 0],
        "method": "gauss-seidel",
    }))
    .unwrap();

    assert_eq!(response["converged"], true);
    let convergence = response["convergence"].as_array().unwrap();
    assert_eq!(Some(convergence.len() as u64), response["iterations"].as_u64());
    assert!(response["residualNorm"].as_f64().unwrap() < 1e-6);
}

#[test]
fn failures_become_error_reports() {
    let report = solve_json(json!({
        "matrix": [[1, 2], [2, 4]],
        "vector": [1, 2],
        "method": "gauss",
    }))
    .unwrap_err();
    assert_eq!(report.kind, ErrorKind::SingularMatrix);

    let body = serde_json::to_value(&report).unwrap();
    assert_eq!(body["kind"], "SingularMatrix");
    assert!(body["message"].as_str().unwrap().contains("row 2"));

    let report = solve_json(json!({
        "matrix": [[1, 2, 3], [4, 5, 6], [7, 8, 10]],
        "vector": [1, 2],
        "method": "lu",
    }))
    .unwrap_err();
    assert_eq!(report.kind, ErrorKind::DimensionMismatch);
}

#[test]
fn ragged_matrix_is_rejected_while_parsing() {
    let result = serde_json::from_value::<SolveRequest>(json!({
        "matrix": [[1, 2], [3]],
        "method": "jacobi",
    }));
    assert!(result.is_err());
}

#[test]
fn unknown_method_is_rejected_while_parsing() {
    let result = serde_json::from_value::<SolveRequest>(json!({
        "matrix": [[1]],
        "vector": [1],
        "method": "cholesky",
    }));
    assert!(result.is_err());

    let request: SolveRequest = serde_json::from_value(json!({
        "matrix": [[1]],
        "vector": [1],
        "method": "jacobi",
    }))
    .unwrap();
    assert_eq!(request.method, Method::Jacobi);
}

#[test]
fn operations_produce_scalars_vectors_and_matrices() {
    let apply = |request: Value| {
        let request: OpRequest = serde_json::from_value(request).unwrap();
        dispatch::apply(&request, &Options::default()).unwrap().result
    };

    let det = apply(json!({ "operation": "determinant", "matrix": [[1, 2], [3, 4]] }));
    let OpValue::Scalar(det) = det else {
        panic!("expected a scalar");
    };
    assert_relative_eq!(det, -2.0, epsilon = 1e-12);

    let norm = apply(json!({ "operation": "norm", "matrix": [[1, -2], [-3, 4]], "norm": "inf" }));
    assert_eq!(norm, OpValue::Scalar(7.0));

    let fro = apply(json!({ "operation": "norm", "matrix": [[1, -2], [-3, 4]] }));
    let OpValue::Scalar(fro) = fro else {
        panic!("expected a scalar");
    };
    assert_relative_eq!(fro, 30.0_f64.sqrt(), epsilon = 1e-12);

    let product = apply(json!({ "operation": "product", "matrix": [[1, 2], [3, 4]], "vector": [1, 1] }));
    assert_eq!(product, OpValue::Vector(vec![3.0, 7.0]));

    let transpose = apply(json!({ "operation": "transpose", "matrix": [[1, 2, 3]] }));
    assert_eq!(
        serde_json::to_value(transpose).unwrap(),
        json!([[1.0], [2.0], [3.0]])
    );
}

#[test]
fn convergence_comparison_uses_camel_case() {
    let request = serde_json::from_value(json!({
        "matrix": [[5, 2, -1], [1, 6, -3], [2, 1, 4]],
        "vector": [6, 4, 2],
    }))
    .unwrap();
    let comparison = dispatch::compare(&request, &Options::default()).unwrap();
    let body = serde_json::to_value(&comparison).unwrap();

    assert!(body["gaussSeidel"].as_array().unwrap().len() < body["jacobi"].as_array().unwrap().len());
}
