//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! input validation failures (mismatched dimensions, non-finite axes, empty grids) and
//! invalid configuration. Every variant maps to a stable integer status code through
//! [`Error::status_code`], with `0` reserved for success.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Status code reported for a successful call.
pub const STATUS_OK: i32 = 0;

#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("dimension mismatch for {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("non-finite value in {axis} axis at index {index}")]
    NonFiniteAxis { axis: Axis, index: usize },

    #[error("grid has no samples ({nx} x {ny})")]
    EmptyGrid { nx: usize, ny: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Grid axis named in validation errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

impl Error {
    /// Non-zero status code for this error.
    pub fn status_code(&self) -> i32 {
        match self {
            Error::DimensionMismatch { .. } => 1,
            Error::NonFiniteAxis { .. } => 2,
            Error::EmptyGrid { .. } => 3,
            Error::InvalidConfig(_) => 4,
        }
    }
}

/// Maps a call result onto its status code: [`STATUS_OK`] on success, the error's code otherwise.
pub fn status_code<T>(result: &Result<T>) -> i32 {
    match result {
        Ok(_) => STATUS_OK,
        Err(e) => e.status_code(),
    }
}
