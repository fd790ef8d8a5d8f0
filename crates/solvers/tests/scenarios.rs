//! End-to-end scenarios across the public solver API.

use approx::assert_abs_diff_eq;

use linsys_core::{Error, ErrorKind, Matrix};
use linsys_solvers::{
    direct::{self, gauss, lu},
    iterative::{self, Status, gauss_seidel, jacobi},
    ops,
};

fn matrix<const N: usize>(rows: [[f64; N]; N]) -> Matrix {
    Matrix::from_rows(&rows).expect("valid matrix")
}

#[test]
fn direct_solve_of_three_by_three() {
    let a = matrix([[2.0, 2.0, -1.0], [0.0, 4.0, 1.0], [1.0, -1.0, 3.0]]);
    let b = [1.0, 3.0, -4.0];

    let solution = gauss::solve(&a, &b, &direct::Config::default()).unwrap();

    // A·[1, 0, -1] = [3, -1, -2], so that vector does not solve this system.
    let expected = [-0.8125, 0.9375, -0.75];
    for (x, e) in solution.x.iter().zip(expected) {
        assert_abs_diff_eq!(*x, e, epsilon = 1e-12);
    }
    let r = ops::residual(&a, &solution.x, &b).unwrap();
    assert!(ops::vector_norm(&r, ops::NormKind::Two).unwrap() < 1e-12);
}

#[test]
fn iterative_solve_of_dominant_system() {
    let a = matrix([[5.0, 2.0, -1.0], [1.0, 6.0, -3.0], [2.0, 1.0, 4.0]]);
    let b = [6.0, 4.0, 2.0];
    let x0 = [0.0; 3];
    let config = iterative::Config::default();

    let j = jacobi::solve_unobserved(&a, &b, Some(&x0), &config).unwrap();
    let gs = gauss_seidel::solve_unobserved(&a, &b, Some(&x0), &config).unwrap();

    assert_eq!(j.status, Status::Converged);
    assert_eq!(gs.status, Status::Converged);
    assert!(gs.convergence.iter().take(5).any(|&e| e < 0.02));

    for x in [&j.x, &gs.x] {
        assert_abs_diff_eq!(x[0], 1.00, epsilon = 5e-3);
        assert_abs_diff_eq!(x[1], 0.446, epsilon = 5e-3);
        assert_abs_diff_eq!(x[2], -0.113, epsilon = 5e-3);
    }
}

#[test]
fn rank_deficient_system_is_singular() {
    let a = matrix([[1.0, 2.0], [2.0, 4.0]]);

    let err = gauss::solve(&a, &[1.0, 5.0], &direct::Config::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SingularMatrix);
    assert!(matches!(err, Error::ZeroPivot { row: 2, .. }));

    assert_eq!(ops::determinant(&a).unwrap(), 0.0);
}

#[test]
fn short_vector_fails_every_method_before_arithmetic() {
    // A zero diagonal would fail the iterative methods, and a NaN would fail
    // any value check, so only a shape check can produce this error.
    let a = matrix([[0.0, 1.0, 2.0], [1.0, f64::NAN, 0.0], [2.0, 0.0, 1.0]]);
    let b = [1.0, 2.0];
    let dc = direct::Config::default();
    let ic = iterative::Config::default();

    let errors = [
        gauss::solve(&a, &b, &dc).unwrap_err(),
        lu::solve(&a, &b, &dc).unwrap_err(),
        jacobi::solve_unobserved(&a, &b, None, &ic).unwrap_err(),
        gauss_seidel::solve_unobserved(&a, &b, None, &ic).unwrap_err(),
    ];
    for err in errors {
        assert_eq!(err.kind(), ErrorKind::DimensionMismatch, "{err}");
    }
}

#[test]
fn gauss_and_lu_agree() {
    let a = matrix([
        [4.0, -1.0, 0.0, 2.0],
        [1.0, 5.0, -2.0, 0.0],
        [0.0, 3.0, 6.0, -1.0],
        [2.0, 0.0, 1.0, 3.0],
    ]);
    let config = direct::Config::default();

    for b in [[1.0, 2.0, 3.0, 4.0], [-3.0, 0.5, 7.0, 0.0]] {
        let g = gauss::solve(&a, &b, &config).unwrap();
        let l = lu::solve(&a, &b, &config).unwrap();
        for (xg, xl) in g.x.iter().zip(&l.x) {
            assert_abs_diff_eq!(*xg, *xl, epsilon = 1e-6);
        }
    }
}

#[test]
fn lu_factors_reproduce_matrix() {
    let a = matrix([[2.0, -1.0, 0.0], [-1.0, 2.0, -1.0], [0.0, -1.0, 2.0]]);
    let d = lu::decompose(&a, &direct::Config::default()).unwrap();
    let product = ops::matmul(&d.l, &d.u).unwrap();
    for (p, e) in product.as_slice().iter().zip(a.as_slice()) {
        assert_abs_diff_eq!(*p, *e, epsilon = 1e-9);
    }
}

#[test]
fn inverse_times_matrix_is_identity() {
    let a = matrix([[3.0, 0.0, 2.0], [2.0, 0.5, -2.0], [0.0, 1.0, 1.0]]);
    let inv = ops::inverse(&a).unwrap();
    let id = ops::matmul(&inv, &a).unwrap();
    for (p, e) in id.as_slice().iter().zip(Matrix::identity(3).as_slice()) {
        assert_abs_diff_eq!(*p, *e, epsilon = 1e-6);
    }
}

#[test]
fn gauss_seidel_leads_on_dominant_systems() {
    let a = matrix([
        [10.0, -1.0, 2.0, 0.0],
        [-1.0, 11.0, -1.0, 3.0],
        [2.0, -1.0, 10.0, -1.0],
        [0.0, 3.0, -1.0, 8.0],
    ]);
    let b = [6.0, 25.0, -11.0, 15.0];
    assert!(ops::is_diagonally_dominant(&a).unwrap());

    let comparison = iterative::compare(&a, &b, None, &iterative::Config::default()).unwrap();
    assert!(comparison.jacobi.converged());
    assert!(comparison.gauss_seidel.converged());
    assert!(comparison.gauss_seidel_leads());

    for (x, e) in comparison.gauss_seidel.x.iter().zip([1.0, 2.0, -1.0, 1.0]) {
        assert_abs_diff_eq!(*x, e, epsilon = 1e-7);
    }
}
