//! `linsys` — solve linear systems from JSON requests.
//!
//! Reads one JSON request from `--input` (or stdin) and writes one JSON
//! response to stdout. Failures are written as `{ "kind", "message" }` and
//! exit with status 1. Logs go to stderr; set `RUST_LOG=debug` to see every
//! sweep of an iterative solve.
//!
//! ```text
//! echo '{"matrix": [[4, 1], [2, 3]], "vector": [1, 2], "method": "gauss"}' | linsys solve
//! linsys op --input det.json --pretty
//! linsys compare --input system.json --max-iters 100
//! ```

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use log::{info, warn};
use serde::Serialize;
use thiserror::Error;

use linsys_core::{ErrorKind, SnapshotPolicy};
use linsys_observers::LogObserver;
use linsys_solvers::{
    Method, direct,
    dispatch::{self, ConvergenceRequest, ErrorReport, OpRequest, Options, SolveRequest, SolveResponse},
    iterative::{self, gauss_seidel, jacobi},
    ops::{self, DEFAULT_PIVOT_TOL, NormKind},
};

#[derive(Parser, Debug)]
#[command(
    name = "linsys",
    version,
    about = "Solve dense linear systems and explain every step"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Read the request from this file instead of stdin
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Pretty-print the JSON response
    #[arg(long, global = true)]
    pretty: bool,

    /// Error norm below which an iterative solve counts as converged
    #[arg(long, global = true, default_value_t = 1e-8)]
    tolerance: f64,

    /// Maximum number of iterative sweeps
    #[arg(long, global = true, default_value_t = 50)]
    max_iters: usize,

    /// Pivot magnitude at or below which a direct solve reports a singular matrix
    #[arg(long, global = true, default_value_t = DEFAULT_PIVOT_TOL)]
    pivot_tol: f64,

    /// Record step descriptions only, without matrix or vector snapshots
    #[arg(long, global = true)]
    no_snapshots: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve Ax = b with gauss, lu, jacobi, or gauss-seidel
    Solve {
        /// Add the residual norm ‖b − Ax‖₂ to direct solutions
        #[arg(long)]
        verify: bool,
    },

    /// Apply determinant, inverse, transpose, norm, or product to a matrix
    Op,

    /// Compare Jacobi and Gauss–Seidel error sequences on the same system
    Compare,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read request: {0}")]
    Io(#[from] io::Error),

    #[error("invalid request: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    DirectConfig(#[from] direct::ConfigError),

    #[error(transparent)]
    IterativeConfig(#[from] iterative::ConfigError),

    #[error(transparent)]
    Solve(#[from] linsys_core::Error),
}

impl CliError {
    fn report(&self) -> ErrorReport {
        match self {
            Self::Solve(err) => ErrorReport::from(err),
            other => ErrorReport {
                kind: ErrorKind::InvalidInput,
                message: other.to_string(),
            },
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = read_input(cli.input.as_ref()).and_then(|input| run(&cli, &input));

    match result {
        Ok(body) => {
            println!("{body}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            warn!("{err}");
            match render(&err.report(), cli.pretty) {
                Ok(body) => println!("{body}"),
                Err(json_err) => eprintln!("{err} (and the report failed to serialize: {json_err})"),
            }
            ExitCode::FAILURE
        }
    }
}

fn read_input(path: Option<&PathBuf>) -> Result<String, CliError> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

/// Parses the request in `input`, routes it, and renders the response.
fn run(cli: &Cli, input: &str) -> Result<String, CliError> {
    let options = options(cli)?;
    match cli.command {
        Command::Solve { verify } => {
            let request: SolveRequest = serde_json::from_str(input)?;
            let response = solve(&request, &options, verify)?;
            Ok(render(&response, cli.pretty)?)
        }
        Command::Op => {
            let request: OpRequest = serde_json::from_str(input)?;
            info!("applying {:?} to a {:?} matrix", request.operation, request.matrix.dims());
            Ok(render(&dispatch::apply(&request, &options)?, cli.pretty)?)
        }
        Command::Compare => {
            let request: ConvergenceRequest = serde_json::from_str(input)?;
            info!("comparing iterative methods on a {:?} system", request.matrix.dims());
            Ok(render(&dispatch::compare(&request, &options)?, cli.pretty)?)
        }
    }
}

fn options(cli: &Cli) -> Result<Options, CliError> {
    let snapshots = if cli.no_snapshots {
        SnapshotPolicy::Never
    } else {
        SnapshotPolicy::Always
    };
    Ok(Options {
        direct: direct::Config::new(cli.pivot_tol, snapshots)?,
        iterative: iterative::Config::new(cli.max_iters, cli.tolerance, snapshots)?,
    })
}

/// Routes a solve, logging each iterative sweep through a [`LogObserver`].
fn solve(
    request: &SolveRequest,
    options: &Options,
    verify: bool,
) -> Result<SolveResponse, CliError> {
    let method = request.method;
    info!("solving a {:?} system with {method}", request.matrix.dims());

    let mut response = match request.vector.as_deref() {
        Some(b) if method.is_iterative() => {
            let observer = LogObserver::new(method.name(), options.iterative.tolerance());
            let (a, x0, config) = (&request.matrix, request.x0.as_deref(), &options.iterative);
            let solution = if method == Method::Jacobi {
                jacobi::solve(a, b, x0, config, observer)?
            } else {
                gauss_seidel::solve(a, b, x0, config, observer)?
            };
            if !solution.converged() {
                warn!(
                    "{method} stopped after {} iterations without converging ({:?})",
                    solution.iters, solution.status
                );
            }
            dispatch::iterative_response(solution)
        }
        _ => dispatch::solve(request, options)?,
    };

    if verify && response.residual_norm.is_none() {
        if let (Some(x), Some(b)) = (&response.solution, &request.vector) {
            let r = ops::residual(&request.matrix, x, b)?;
            response.residual_norm = Some(ops::vector_norm(&r, NormKind::Two)?);
        }
    }
    Ok(response)
}

fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
