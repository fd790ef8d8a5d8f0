//! Interactive convergence plots for the iterative solvers.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- compare
//! cargo run --example plot --features plot -- diverge
//! ```
//!
//! # Modes
//!
//! - **compare** — Jacobi and Gauss–Seidel on a strictly diagonally dominant
//!   3×3 system. Both error norms fall as straight lines on the log scale;
//!   Gauss–Seidel's is steeper.
//!
//! - **diverge** — Jacobi on a system that is not diagonally dominant. The
//!   error norm grows until the 50-sweep cap ends the solve.

use std::error::Error;

use linsys_core::Matrix;
use linsys_observers::{PlotObserver, ShowConfig};
use linsys_solvers::iterative::{self, gauss_seidel, jacobi};

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "compare".into());
    match mode.as_str() {
        "compare" => compare(),
        "diverge" => diverge(),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [compare|diverge]");
            std::process::exit(1);
        }
    }
}

/// Plots both methods' error norms on one log-scale chart.
fn compare() -> Result<(), Box<dyn Error>> {
    let a = Matrix::from_rows(&[[5.0, 2.0, -1.0], [1.0, 6.0, -3.0], [2.0, 1.0, 4.0]])?;
    let b = [6.0, 4.0, 2.0];
    let config = iterative::Config::default();

    let mut obs = PlotObserver::<2>::new(["Jacobi", "Gauss–Seidel"]);

    let j = jacobi::solve(&a, &b, None, &config, |e: &iterative::Event<'_>| {
        #[allow(clippy::cast_precision_loss)]
        let x = e.iter as f64;
        obs.record(x, [Some(e.err_norm), None]);
        None
    })?;
    let gs = gauss_seidel::solve(&a, &b, None, &config, |e: &iterative::Event<'_>| {
        #[allow(clippy::cast_precision_loss)]
        let x = e.iter as f64;
        obs.record(x, [None, Some(e.err_norm)]);
        None
    })?;

    obs.show(
        ShowConfig::new()
            .title(format!(
                "Jacobi ({} sweeps) vs. Gauss–Seidel ({} sweeps)",
                j.iters, gs.iters
            ))
            .legend()
            .log_y()
            .markers(),
    )?;

    Ok(())
}

/// Plots a diverging Jacobi solve through the direct observer path.
fn diverge() -> Result<(), Box<dyn Error>> {
    let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 1.0]])?;
    let mut obs = PlotObserver::convergence();

    let solution = jacobi::solve(&a, &[1.0, 1.0], None, &iterative::Config::default(), &mut obs)?;

    obs.show(
        ShowConfig::new()
            .title(format!("Jacobi without diagonal dominance: {:?}", solution.status))
            .log_y(),
    )?;

    Ok(())
}
