use linsys_core::{Error, Matrix, Observer, Snapshot, Trace, format_vector, require_finite};

use crate::{Method, ops::dot, system};

use super::{Action, Config, Event, Solution, Status};

/// Core fixed-point iteration shared by Jacobi and Gauss–Seidel.
///
/// The `sweep` function writes the next iterate into its last argument given
/// the system and the previous iterate. Everything else (validation, error
/// norms, the trace, the observer, and the stopping rule) lives here.
pub(super) fn iterate<Obs, F>(
    method: Method,
    a: &Matrix,
    b: &[f64],
    x0: Option<&[f64]>,
    config: &Config,
    mut observer: Obs,
    sweep: F,
) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
    F: Fn(&Matrix, &[f64], &[f64], &mut [f64]),
{
    let n = system::validate(a, b)?;
    let mut x = initial_guess(n, x0)?;
    require_nonzero_diagonal(a)?;

    let mut trace = Trace::new(config.snapshots());
    trace.record_with(format!("Initial guess: {}", format_vector(&x)), || {
        Snapshot::Vector(x.clone())
    });

    let mut next = vec![0.0; n];
    let mut convergence = Vec::new();

    for iter in 1..=config.max_iters() {
        sweep(a, b, &x, &mut next);
        let err_norm = distance(&next, &x);
        std::mem::swap(&mut x, &mut next);

        convergence.push(err_norm);
        trace.record_with(
            format!("Iter {iter}: {} (err={err_norm:.3e})", format_vector(&x)),
            || Snapshot::Vector(x.clone()),
        );

        let event = Event {
            method,
            iter,
            x: &x,
            err_norm,
        };
        let action = observer.observe(&event);

        if err_norm < config.tolerance() {
            return Ok(finish(method, Status::Converged, a, b, x, convergence, trace));
        }

        if let Some(Action::StopEarly) = action {
            trace.record(format!("Stopped by observer after iteration {iter}"));
            return Ok(finish(
                method,
                Status::StoppedByObserver,
                a,
                b,
                x,
                convergence,
                trace,
            ));
        }
    }

    trace.record(format!(
        "Did not converge within {} iterations",
        config.max_iters()
    ));
    Ok(finish(method, Status::MaxIters, a, b, x, convergence, trace))
}

/// Returns the supplied starting vector, or zeros.
fn initial_guess(n: usize, x0: Option<&[f64]>) -> Result<Vec<f64>, Error> {
    let Some(x0) = x0 else {
        return Ok(vec![0.0; n]);
    };
    if x0.len() != n {
        return Err(Error::LengthMismatch {
            expected: n,
            got: x0.len(),
        });
    }
    require_finite("x0", x0)?;
    Ok(x0.to_vec())
}

/// Every sweep divides by each diagonal entry, so a zero anywhere fails up
/// front rather than partway through the first sweep.
#[allow(clippy::float_cmp)]
fn require_nonzero_diagonal(a: &Matrix) -> Result<(), Error> {
    match a.diagonal().iter().position(|&d| d == 0.0) {
        Some(i) => Err(Error::ZeroDiagonal { row: i + 1 }),
        None => Ok(()),
    }
}

fn distance(x: &[f64], y: &[f64]) -> f64 {
    x.iter()
        .zip(y)
        .map(|(xi, yi)| (xi - yi).powi(2))
        .sum::<f64>()
        .sqrt()
}

fn finish(
    method: Method,
    status: Status,
    a: &Matrix,
    b: &[f64],
    x: Vec<f64>,
    convergence: Vec<f64>,
    trace: Trace,
) -> Solution {
    // Diverging iterates may overflow, so this skips the finiteness checks
    // of `ops::residual` and lets the norm become infinite or NaN.
    let residual_norm = a
        .iter_rows()
        .zip(b)
        .map(|(row, bi)| (bi - dot(row, &x)).powi(2))
        .sum::<f64>()
        .sqrt();

    Solution {
        method,
        status,
        iters: convergence.len(),
        x,
        residual_norm,
        convergence,
        trace,
    }
}
