//! LAPACK-style dense kernels
//!
//! Every routine works in place on `Array2` storage and reports the outcome
//! through an `info` status code, following LAPACK conventions:
//!
//! - `0`: success
//! - `> 0`: one-based index of the pivot or leading minor that failed
//! - `< 0`: one-based position of an illegal argument
//!
//! Routines carry their LAPACK names (`getrf`, `potrf`, ...) and contracts.
//! With the `ndarray-linalg` feature they call the LAPACK routines of the
//! same name; without it a pure-Rust implementation of the same contracts
//! is used.
//!
//! Pivot sequences are 0-based: `ipiv[k] = r` means rows `k` and `r` were
//! interchanged at step `k`, in order.

#[cfg(feature = "ndarray-linalg")]
mod binding;
mod cholesky;
mod lu;
mod symmetric;

pub use cholesky::{posv, potrf, potrf_log_det, potri, potrs};
pub use lu::{getrf, getrf_det, getri, getrs};
pub use symmetric::mksym;

/// Triangle of a symmetric matrix that holds the data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Triangle {
    /// Lower triangle (`A = L·Lᵀ` for Cholesky)
    #[default]
    Lower,
    /// Upper triangle (`A = Uᵀ·U` for Cholesky)
    Upper,
}

impl Triangle {
    /// Storage index of the lower-triangle entry `(i, j)`, `j <= i`.
    ///
    /// Kernels are written once against the lower triangle; the upper
    /// triangle is reached through the transpose.
    #[inline]
    pub(crate) fn index(self, i: usize, j: usize) -> [usize; 2] {
        match self {
            Triangle::Lower => [i, j],
            Triangle::Upper => [j, i],
        }
    }
}
