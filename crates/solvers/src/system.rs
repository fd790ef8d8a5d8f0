use linsys_core::{Error, Matrix, require_finite};

/// Validates a square system `Ax = b` and returns its order.
///
/// Every shape check runs before any value check, so a malformed system is
/// rejected before a single entry is inspected.
pub(crate) fn validate(a: &Matrix, b: &[f64]) -> Result<usize, Error> {
    let n = a.require_square()?;
    if b.len() != n {
        return Err(Error::LengthMismatch {
            expected: n,
            got: b.len(),
        });
    }
    a.require_finite()?;
    require_finite("vector", b)?;
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_square_system() {
        let a = Matrix::identity(3);
        assert_eq!(validate(&a, &[1.0, 2.0, 3.0]), Ok(3));
    }

    #[test]
    fn shape_is_checked_before_values() {
        let a = Matrix::from_rows(&[[f64::NAN, 0.0], [0.0, 1.0]]).unwrap();
        assert_eq!(
            validate(&a, &[1.0]),
            Err(Error::LengthMismatch {
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn rejects_non_square_matrix() {
        let a = Matrix::zeros(2, 3);
        assert_eq!(validate(&a, &[1.0, 2.0]), Err(Error::NotSquare { rows: 2, cols: 3 }));
    }

    #[test]
    fn rejects_non_finite_rhs() {
        let a = Matrix::identity(2);
        assert!(matches!(
            validate(&a, &[1.0, f64::INFINITY]),
            Err(Error::NonFinite {
                name: "vector",
                index: 1,
                ..
            })
        ));
    }
}
