//! Cholesky-based solve, inverse and determinant
//!
//! For symmetric positive definite matrices. Positive definiteness is not
//! checked up front: the factorization itself fails with the order of the
//! first leading minor that is not positive definite.

use crate::error::{LinalgError, check_info, check_len, square_order};
use crate::lapack::{self, Triangle};
use crate::shape::{make_symmetric_from, select_lower_triangular, select_upper_triangular};
use crate::traits::RealField;
use ndarray::{Array1, Array2};
use num_traits::Float;

/// Solve `A·x = y` for symmetric positive definite `A`
pub fn cholesky_solve<T: RealField>(
    a: &Array2<T>,
    y: &Array1<T>,
) -> Result<Array1<T>, LinalgError> {
    let n = square_order(a)?;
    check_len(n, y.len())?;

    let mut a = a.to_owned();
    let mut rhs = Array2::<T>::zeros((n, 1));
    rhs.column_mut(0).assign(y);

    check_info(
        lapack::posv(&mut a, Triangle::Lower, &mut rhs),
        "posv",
        "cholesky_solve",
    )?;

    Ok(rhs.column(0).to_owned())
}

/// Solve `A·X = B` for every column of `B`, `A` symmetric positive definite
pub fn cholesky_solve_matrix<T: RealField>(
    a: &Array2<T>,
    b: &Array2<T>,
) -> Result<Array2<T>, LinalgError> {
    let n = square_order(a)?;
    check_len(n, b.nrows())?;

    let mut a = a.to_owned();
    let mut x = b.to_owned();
    check_info(
        lapack::posv(&mut a, Triangle::Lower, &mut x),
        "posv",
        "cholesky_solve_matrix",
    )?;

    Ok(x)
}

/// Invert a symmetric positive definite matrix.
///
/// The inverse is symmetric in storage.
pub fn cholesky_invert<T: RealField>(a: &Array2<T>) -> Result<Array2<T>, LinalgError> {
    square_order(a)?;

    let mut a = a.to_owned();
    check_info(
        lapack::potrf(&mut a, Triangle::Lower),
        "potrf",
        "cholesky_invert",
    )?;
    check_info(
        lapack::potri(&mut a, Triangle::Lower),
        "potri",
        "cholesky_invert",
    )?;

    // potri only fills the lower triangle
    make_symmetric_from(a, Triangle::Lower)
}

/// Natural logarithm of the determinant of a symmetric positive definite matrix
pub fn log_cholesky_determinant<T: RealField>(a: &Array2<T>) -> Result<T, LinalgError> {
    square_order(a)?;

    let mut a = a.to_owned();
    check_info(
        lapack::potrf(&mut a, Triangle::Lower),
        "potrf",
        "log_cholesky_determinant",
    )?;

    Ok(lapack::potrf_log_det(&a))
}

/// Determinant of a symmetric positive definite matrix.
///
/// Computed as `exp` of [`log_cholesky_determinant`]. Stay with the log form
/// when the determinant may overflow or underflow.
pub fn cholesky_determinant<T: RealField>(a: &Array2<T>) -> Result<T, LinalgError> {
    Ok(Float::exp(log_cholesky_determinant(a)?))
}

/// Cholesky factorization configuration
#[derive(Debug, Clone, Default)]
pub struct CholeskyConfig {
    /// Triangle that receives the factor
    pub triangle: Triangle,
}

/// Cholesky factorization result
#[derive(Debug, Clone)]
pub struct CholeskyFactorization<T: RealField> {
    /// Factor in the selected triangle; the other triangle holds the input
    factor: Array2<T>,
    /// Triangle holding the factor
    triangle: Triangle,
}

impl<T: RealField> CholeskyFactorization<T> {
    /// Factorize with the default configuration (lower triangle)
    pub fn factorize(a: &Array2<T>) -> Result<Self, LinalgError> {
        Self::factorize_with(a, &CholeskyConfig::default())
    }

    /// Factorize into the triangle chosen by `config`
    pub fn factorize_with(a: &Array2<T>, config: &CholeskyConfig) -> Result<Self, LinalgError> {
        let n = square_order(a)?;
        log::trace!(
            "Cholesky factorization of order {n} ({:?} triangle)",
            config.triangle
        );

        let mut factor = a.to_owned();
        check_info(
            lapack::potrf(&mut factor, config.triangle),
            "potrf",
            "cholesky_factorize",
        )?;

        Ok(Self {
            factor,
            triangle: config.triangle,
        })
    }

    /// Matrix dimension
    pub fn order(&self) -> usize {
        self.factor.nrows()
    }

    /// Triangle holding the factor
    pub fn triangle(&self) -> Triangle {
        self.triangle
    }

    /// Solve `A·x = b` using the pre-computed factorization
    pub fn solve(&self, b: &Array1<T>) -> Result<Array1<T>, LinalgError> {
        let n = self.order();
        check_len(n, b.len())?;

        let mut rhs = Array2::<T>::zeros((n, 1));
        rhs.column_mut(0).assign(b);
        check_info(
            lapack::potrs(&self.factor, self.triangle, &mut rhs),
            "potrs",
            "CholeskyFactorization::solve",
        )?;

        Ok(rhs.column(0).to_owned())
    }

    /// Solve `A·X = B` for every column of `B`
    pub fn solve_matrix(&self, b: &Array2<T>) -> Result<Array2<T>, LinalgError> {
        check_len(self.order(), b.nrows())?;

        let mut x = b.to_owned();
        check_info(
            lapack::potrs(&self.factor, self.triangle, &mut x),
            "potrs",
            "CholeskyFactorization::solve_matrix",
        )?;

        Ok(x)
    }

    /// Natural logarithm of the determinant, without overflow
    pub fn log_determinant(&self) -> T {
        lapack::potrf_log_det(&self.factor)
    }

    /// Determinant, `exp` of [`Self::log_determinant`]
    pub fn determinant(&self) -> T {
        Float::exp(self.log_determinant())
    }

    /// Inverse of the factorized matrix, symmetric in storage
    pub fn inverse(&self) -> Result<Array2<T>, LinalgError> {
        let mut inv = self.factor.clone();
        check_info(
            lapack::potri(&mut inv, self.triangle),
            "potri",
            "CholeskyFactorization::inverse",
        )?;
        make_symmetric_from(inv, self.triangle)
    }

    /// Triangular factor: `L` with `A = L·Lᵀ`, or `U` with `A = Uᵀ·U`
    pub fn factor(&self) -> Array2<T> {
        match self.triangle {
            Triangle::Lower => select_lower_triangular(&self.factor),
            Triangle::Upper => select_upper_triangular(&self.factor),
        }
    }
}
