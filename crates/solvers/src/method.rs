use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A linear system solution method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    /// Gaussian elimination without row interchange.
    Gauss,

    /// Doolittle LU decomposition with substitution.
    Lu,

    /// Jacobi iteration.
    Jacobi,

    /// Gauss–Seidel iteration.
    GaussSeidel,
}

/// Returned when a string does not name a [`Method`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown method {0:?} (expected gauss, lu, jacobi, or gauss-seidel)")]
pub struct ParseMethodError(String);

impl Method {
    /// Returns the wire name of this method.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Gauss => "gauss",
            Self::Lu => "lu",
            Self::Jacobi => "jacobi",
            Self::GaussSeidel => "gauss-seidel",
        }
    }

    /// Returns true for the iterative methods.
    #[must_use]
    pub fn is_iterative(self) -> bool {
        matches!(self, Self::Jacobi | Self::GaussSeidel)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gauss" => Ok(Self::Gauss),
            "lu" => Ok(Self::Lu),
            "jacobi" => Ok(Self::Jacobi),
            "gauss-seidel" | "gauss_seidel" => Ok(Self::GaussSeidel),
            _ => Err(ParseMethodError(s.to_owned())),
        }
    }
}
