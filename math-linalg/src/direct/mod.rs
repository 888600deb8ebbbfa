//! Direct solvers for dense linear systems
//!
//! This module provides the factorization-based operations:
//! - [`lu_solve`], [`lu_invert`], [`lu_determinant`]: LU with partial pivoting
//!   for general square matrices
//! - [`cholesky_solve`], [`cholesky_invert`], [`cholesky_determinant`],
//!   [`log_cholesky_determinant`]: Cholesky for symmetric positive definite
//!   matrices
//!
//! Each operation works on a private copy of its input, runs the backend
//! routines from [`crate::lapack`] in a fixed sequence and fails with
//! [`crate::LinalgError::FactorizationFailed`] on the first nonzero status.
//! [`LuFactorization`] and [`CholeskyFactorization`] keep a factorization
//! around to reuse it for several right-hand sides.

mod cholesky;
mod lu;

pub use cholesky::{
    CholeskyConfig, CholeskyFactorization, cholesky_determinant, cholesky_invert, cholesky_solve,
    cholesky_solve_matrix, log_cholesky_determinant,
};
pub use lu::{LuFactorization, lu_determinant, lu_invert, lu_solve, lu_solve_matrix};
