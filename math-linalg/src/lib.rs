//! Dense LU and Cholesky solvers
//!
//! This crate solves dense linear systems, inverts matrices and computes
//! determinants through two factorizations, on top of a small set of
//! LAPACK-style kernels.
//!
//! # Features
//!
//! - **LU** (general square matrices): [`lu_solve`], [`lu_invert`], [`lu_determinant`]
//! - **Cholesky** (symmetric positive definite): [`cholesky_solve`], [`cholesky_invert`],
//!   [`cholesky_determinant`], [`log_cholesky_determinant`]
//! - **Reusable factorizations**: [`LuFactorization`], [`CholeskyFactorization`]
//! - **Shape utilities**: [`select_lower_triangular`], [`select_upper_triangular`],
//!   [`make_symmetric`]
//! - **Kernels**: [`lapack`] with `getrf`/`getrs`/`getri` and `potrf`/`potrs`/`posv`/`potri`
//!   reporting LAPACK `info` status codes
//! - **LAPACK backend** (feature `ndarray-linalg`): the kernels call LAPACK through
//!   `ndarray-linalg`; without it they run a pure-Rust implementation
//! - **Generic Scalar Types**: Works with f64 and f32
//!
//! Every operation works on a private copy of its input and turns a nonzero
//! backend status into [`LinalgError::FactorizationFailed`], which carries the
//! routine, the calling operation and the raw code.
//!
//! # Example
//!
//! ```
//! use math_audio_linalg::{cholesky_solve, lu_determinant};
//! use ndarray::array;
//!
//! let a = array![[4.0_f64, 0.0], [0.0, 9.0]];
//! let x = cholesky_solve(&a, &array![8.0, 18.0])?;
//! assert_eq!(x, array![2.0, 2.0]);
//!
//! let det = lu_determinant(&a)?;
//! assert!((det - 36.0).abs() < 1e-12);
//! # Ok::<(), math_audio_linalg::LinalgError>(())
//! ```

pub mod direct;
pub mod error;
pub mod lapack;
pub mod shape;
pub mod traits;

pub use error::LinalgError;
pub use lapack::Triangle;
pub use traits::RealField;

// Re-export direct solvers
pub use direct::{
    CholeskyConfig, CholeskyFactorization, LuFactorization, cholesky_determinant,
    cholesky_invert, cholesky_solve, cholesky_solve_matrix, log_cholesky_determinant,
    lu_determinant, lu_invert, lu_solve, lu_solve_matrix,
};

// Re-export shape utilities
pub use shape::{
    make_symmetric, make_symmetric_from, select_lower_triangular, select_upper_triangular,
};
