//! Errors reported by the factorization-based operations

use ndarray::Array2;
use thiserror::Error;

/// Errors that can occur while solving, inverting or computing a determinant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    /// A backend routine returned a nonzero status code.
    ///
    /// The code is kept verbatim: positive values name the failing pivot or
    /// leading minor (one-based), negative values an illegal argument.
    #[error("{routine} failed in {operation} (info = {code})")]
    FactorizationFailed {
        /// Backend routine that reported the failure, e.g. `getrf`
        routine: &'static str,
        /// Published operation that called it, e.g. `lu_solve`
        operation: &'static str,
        /// Raw status code
        code: i32,
    },
    #[error("Matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    #[error("Matrix dimensions mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

impl LinalgError {
    /// Backend status code, if this error came from a backend routine
    pub fn code(&self) -> Option<i32> {
        match self {
            LinalgError::FactorizationFailed { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Turn a backend status code into a result
pub(crate) fn check_info(
    info: i32,
    routine: &'static str,
    operation: &'static str,
) -> Result<(), LinalgError> {
    if info == 0 {
        return Ok(());
    }
    log::debug!("{routine} returned info = {info} in {operation}");
    Err(LinalgError::FactorizationFailed {
        routine,
        operation,
        code: info,
    })
}

/// Order of a square matrix, or [`LinalgError::NotSquare`]
pub(crate) fn square_order<T>(a: &Array2<T>) -> Result<usize, LinalgError> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(LinalgError::NotSquare { rows, cols });
    }
    Ok(rows)
}

pub(crate) fn check_len(expected: usize, got: usize) -> Result<(), LinalgError> {
    if expected != got {
        return Err(LinalgError::DimensionMismatch { expected, got });
    }
    Ok(())
}
