use thiserror::Error;

/// Errors raised by matrix operations and solvers.
///
/// Every variant aborts the computation where it is detected; no partial
/// result accompanies it. Use [`Error::kind`] to map a variant onto the
/// coarse [`ErrorKind`] taxonomy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("matrix must be square (dims: {rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },

    #[error("length mismatch: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("row {row} has {got} entries, expected {expected}")]
    RaggedRows {
        /// 1-based row number.
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("matrix must have at least one row and one column")]
    Empty,

    #[error("zero pivot at row {row} (value {value:e})")]
    ZeroPivot {
        /// 1-based row number of the pivot.
        row: usize,
        value: f64,
    },

    #[error("{name} entry {index} is not finite ({value})")]
    NonFinite {
        name: &'static str,
        index: usize,
        value: f64,
    },

    #[error("division by zero: diagonal entry at row {row} is zero")]
    ZeroDiagonal {
        /// 1-based row number.
        row: usize,
    },

    #[error("the vector b is required for method {method}")]
    MissingVector { method: &'static str },
}

impl Error {
    /// Classifies this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotSquare { .. }
            | Self::LengthMismatch { .. }
            | Self::RaggedRows { .. } => ErrorKind::DimensionMismatch,
            Self::ZeroPivot { .. } => ErrorKind::SingularMatrix,
            Self::Empty
            | Self::NonFinite { .. }
            | Self::ZeroDiagonal { .. }
            | Self::MissingVector { .. } => ErrorKind::InvalidInput,
        }
    }
}

/// Coarse failure taxonomy shared by every solver.
///
/// `NonConvergence` is never carried by an [`Error`]: iterative solvers
/// report it through their solution status instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    DimensionMismatch,
    SingularMatrix,
    InvalidInput,
    NonConvergence,
}
