use linsys_core::{Error, Matrix};

use super::{Config, Solution, gauss_seidel, jacobi};

/// Jacobi and Gauss–Seidel run side by side on the same system.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub jacobi: Solution,
    pub gauss_seidel: Solution,
}

impl Comparison {
    /// Returns true if Gauss–Seidel's error norm is at or below Jacobi's at
    /// every sweep both methods performed.
    #[must_use]
    pub fn gauss_seidel_leads(&self) -> bool {
        self.gauss_seidel
            .convergence
            .iter()
            .zip(&self.jacobi.convergence)
            .all(|(gs, j)| gs <= j)
    }
}

/// Runs both iterative methods from the same starting vector.
///
/// # Errors
///
/// Returns the first error either method raises; both validate their inputs
/// identically, so in practice this is the Jacobi error.
pub fn compare(
    a: &Matrix,
    b: &[f64],
    x0: Option<&[f64]>,
    config: &Config,
) -> Result<Comparison, Error> {
    Ok(Comparison {
        jacobi: jacobi::solve_unobserved(a, b, x0, config)?,
        gauss_seidel: gauss_seidel::solve_unobserved(a, b, x0, config)?,
    })
}
