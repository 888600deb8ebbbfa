//! LU-based solve, inverse and determinant
//!
//! LU factorization with partial pivoting for general (non-symmetric) square
//! matrices.

use crate::error::{LinalgError, check_info, check_len, square_order};
use crate::lapack;
use crate::shape::{select_lower_triangular, select_upper_triangular};
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// Solve `A·x = y` using LU decomposition
pub fn lu_solve<T: RealField>(a: &Array2<T>, y: &Array1<T>) -> Result<Array1<T>, LinalgError> {
    let n = square_order(a)?;
    check_len(n, y.len())?;

    let mut a = a.to_owned();
    // y becomes the single column of an n x 1 right-hand side
    let mut rhs = Array2::<T>::zeros((n, 1));
    rhs.column_mut(0).assign(y);

    let mut ipiv = vec![0; n];
    check_info(lapack::getrf(&mut a, &mut ipiv), "getrf", "lu_solve")?;
    check_info(lapack::getrs(&a, &ipiv, &mut rhs), "getrs", "lu_solve")?;

    Ok(rhs.column(0).to_owned())
}

/// Solve `A·X = B` for every column of `B` using LU decomposition
pub fn lu_solve_matrix<T: RealField>(
    a: &Array2<T>,
    b: &Array2<T>,
) -> Result<Array2<T>, LinalgError> {
    let n = square_order(a)?;
    check_len(n, b.nrows())?;

    let mut a = a.to_owned();
    let mut x = b.to_owned();
    let mut ipiv = vec![0; n];
    check_info(lapack::getrf(&mut a, &mut ipiv), "getrf", "lu_solve_matrix")?;
    check_info(lapack::getrs(&a, &ipiv, &mut x), "getrs", "lu_solve_matrix")?;

    Ok(x)
}

/// Invert a general square matrix using LU decomposition.
///
/// The result is a general inverse and is not symmetrized.
pub fn lu_invert<T: RealField>(a: &Array2<T>) -> Result<Array2<T>, LinalgError> {
    let n = square_order(a)?;

    let mut a = a.to_owned();
    let mut ipiv = vec![0; n];
    check_info(lapack::getrf(&mut a, &mut ipiv), "getrf", "lu_invert")?;
    check_info(lapack::getri(&mut a, &ipiv), "getri", "lu_invert")?;

    Ok(a)
}

/// Signed determinant of a general square matrix using LU decomposition
pub fn lu_determinant<T: RealField>(a: &Array2<T>) -> Result<T, LinalgError> {
    let n = square_order(a)?;

    let mut a = a.to_owned();
    let mut ipiv = vec![0; n];
    check_info(lapack::getrf(&mut a, &mut ipiv), "getrf", "lu_determinant")?;

    Ok(lapack::getrf_det(&a, &ipiv))
}

/// LU factorization result
///
/// Stores L and U factors along with pivot information. Only
/// [`LuFactorization::factorize`] builds one, so the factors and the pivots
/// always agree on the matrix order.
#[derive(Debug, Clone)]
pub struct LuFactorization<T: RealField> {
    /// Combined L and U matrices (L is unit lower triangular, stored below diagonal)
    lu: Array2<T>,
    /// Pivot indices, in [`lapack::getrf`] convention
    pivots: Vec<usize>,
}

impl<T: RealField> LuFactorization<T> {
    /// Compute the LU factorization of a square matrix.
    ///
    /// Fails if `U` would have an exactly-zero pivot, so a successful
    /// factorization can always be solved with and inverted.
    pub fn factorize(a: &Array2<T>) -> Result<Self, LinalgError> {
        let n = square_order(a)?;
        log::trace!("LU factorization of order {n}");

        let mut lu = a.to_owned();
        let mut pivots = vec![0; n];
        check_info(lapack::getrf(&mut lu, &mut pivots), "getrf", "lu_factorize")?;

        Ok(Self { lu, pivots })
    }

    /// Matrix dimension
    pub fn order(&self) -> usize {
        self.lu.nrows()
    }

    /// Row interchanges, in [`lapack::getrf`] convention
    pub fn pivots(&self) -> &[usize] {
        &self.pivots
    }

    /// Solve `A·x = b` using the pre-computed LU factorization
    pub fn solve(&self, b: &Array1<T>) -> Result<Array1<T>, LinalgError> {
        let n = self.order();
        check_len(n, b.len())?;

        let mut rhs = Array2::<T>::zeros((n, 1));
        rhs.column_mut(0).assign(b);
        check_info(
            lapack::getrs(&self.lu, &self.pivots, &mut rhs),
            "getrs",
            "LuFactorization::solve",
        )?;

        Ok(rhs.column(0).to_owned())
    }

    /// Solve `A·X = B` for every column of `B`
    pub fn solve_matrix(&self, b: &Array2<T>) -> Result<Array2<T>, LinalgError> {
        check_len(self.order(), b.nrows())?;

        let mut x = b.to_owned();
        check_info(
            lapack::getrs(&self.lu, &self.pivots, &mut x),
            "getrs",
            "LuFactorization::solve_matrix",
        )?;

        Ok(x)
    }

    /// Signed determinant of the factorized matrix
    pub fn determinant(&self) -> T {
        lapack::getrf_det(&self.lu, &self.pivots)
    }

    /// Inverse of the factorized matrix
    pub fn inverse(&self) -> Result<Array2<T>, LinalgError> {
        let mut inv = self.lu.clone();
        check_info(
            lapack::getri(&mut inv, &self.pivots),
            "getri",
            "LuFactorization::inverse",
        )?;
        Ok(inv)
    }

    /// Unit lower triangular factor `L`
    pub fn lower(&self) -> Array2<T> {
        let mut l = select_lower_triangular(&self.lu);
        l.diag_mut().fill(T::one());
        l
    }

    /// Upper triangular factor `U`
    pub fn upper(&self) -> Array2<T> {
        select_upper_triangular(&self.lu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_lu_solve_real() {
        let a = array![[4.0_f64, 1.0], [1.0, 3.0],];

        let b = array![1.0_f64, 2.0];

        let x = lu_solve(&a, &b).expect("LU solve should succeed");

        // Verify: Ax = b
        let ax = a.dot(&x);
        for i in 0..2 {
            assert_relative_eq!(ax[i], b[i], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_lu_solve_does_not_touch_input() {
        let a = array![[0.0_f64, 2.0], [3.0, 1.0]];
        let b = array![4.0_f64, 5.0];
        let a_before = a.clone();

        let x = lu_solve(&a, &b).expect("LU solve should succeed");

        assert_eq!(a, a_before);
        assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_lu_identity() {
        let n = 5;
        let a = Array2::from_diag(&Array1::from_elem(n, 1.0_f64));
        let b = Array1::from_iter((1..=n).map(|i| i as f64));

        let x = lu_solve(&a, &b).expect("LU solve should succeed");

        for i in 0..n {
            assert_relative_eq!(x[i], b[i], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_lu_singular() {
        let a = array![[1.0_f64, 2.0], [2.0, 4.0],]; // Singular matrix

        let b = array![1.0_f64, 2.0];

        let err = lu_solve(&a, &b).unwrap_err();
        assert_eq!(
            err,
            LinalgError::FactorizationFailed {
                routine: "getrf",
                operation: "lu_solve",
                code: 2,
            }
        );

        let err = lu_invert(&a).unwrap_err();
        assert_eq!(err.code(), Some(2));
        assert_eq!(err.to_string(), "getrf failed in lu_invert (info = 2)");
    }

    #[test]
    fn test_lu_solve_dimension_errors() {
        let rect = Array2::<f64>::zeros((2, 3));
        assert_eq!(
            lu_solve(&rect, &array![1.0, 2.0]),
            Err(LinalgError::NotSquare { rows: 2, cols: 3 })
        );

        let a = Array2::<f64>::eye(3);
        assert_eq!(
            lu_solve(&a, &array![1.0, 2.0]),
            Err(LinalgError::DimensionMismatch {
                expected: 3,
                got: 2
            })
        );
    }

    #[test]
    fn test_lu_solve_matrix() {
        let a = array![[2.0_f64, 1.0, 1.0], [4.0, -6.0, 0.0], [-2.0, 7.0, 2.0]];
        let b = array![[5.0_f64, 1.0], [-2.0, 0.0], [9.0, 0.0]];

        let x = lu_solve_matrix(&a, &b).expect("LU solve should succeed");

        let ax = a.dot(&x);
        for i in 0..3 {
            for j in 0..2 {
                assert_relative_eq!(ax[[i, j]], b[[i, j]], epsilon = 1e-10);
            }
        }
        // First column is the textbook solution (1, 1, 2)
        assert_relative_eq!(x[[0, 0]], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[[1, 0]], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[[2, 0]], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_lu_invert() {
        let a = array![[4.0_f64, 7.0], [2.0, 6.0]];

        let inv = lu_invert(&a).expect("LU invert should succeed");

        let expected = array![[0.6_f64, -0.7], [-0.2, 0.4]];
        for i in 0..2 {
            for j in 0..2 {
                assert_relative_eq!(inv[[i, j]], expected[[i, j]], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_lu_determinant() {
        assert_relative_eq!(
            lu_determinant(&Array2::<f64>::eye(2)).expect("identity"),
            1.0,
            epsilon = 1e-12
        );

        let a = array![[1.0_f64, 2.0], [3.0, 4.0]];
        assert_relative_eq!(lu_determinant(&a).expect("regular"), -2.0, epsilon = 1e-12);

        let b = array![[2.0_f64, -3.0, 1.0], [2.0, 0.0, -1.0], [1.0, 4.0, 5.0]];
        assert_relative_eq!(lu_determinant(&b).expect("regular"), 49.0, epsilon = 1e-10);
    }

    #[test]
    fn test_lu_determinant_singular_fails() {
        let a = array![[1.0_f64, 2.0], [2.0, 4.0]];
        let err = lu_determinant(&a).unwrap_err();
        assert_eq!(err.to_string(), "getrf failed in lu_determinant (info = 2)");
    }

    #[test]
    fn test_lu_empty() {
        let a = Array2::<f64>::zeros((0, 0));
        assert_eq!(lu_determinant(&a), Ok(1.0));
        assert_eq!(lu_invert(&a).expect("empty").dim(), (0, 0));
        assert_eq!(lu_solve(&a, &Array1::zeros(0)).expect("empty").len(), 0);
    }

    #[test]
    fn test_lu_solve_f32() {
        let a = array![[3.0_f32, 2.0], [1.0, 2.0]];
        let b = array![5.0_f32, 3.0];

        let x = lu_solve(&a, &b).expect("LU solve should succeed");

        assert_relative_eq!(x[0], 1.0, epsilon = 1e-5);
        assert_relative_eq!(x[1], 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_lu_factorize_and_solve() {
        let a = array![[4.0_f64, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 2.0],];

        let factorization = LuFactorization::factorize(&a).expect("Factorization should succeed");

        // Solve multiple RHS
        let b1 = array![1.0_f64, 2.0, 3.0];
        let x1 = factorization.solve(&b1).expect("Solve should succeed");

        let ax1 = a.dot(&x1);
        for i in 0..3 {
            assert_relative_eq!(ax1[i], b1[i], epsilon = 1e-10);
        }

        let b2 = array![4.0_f64, 5.0, 6.0];
        let x2 = factorization.solve(&b2).expect("Solve should succeed");

        let ax2 = a.dot(&x2);
        for i in 0..3 {
            assert_relative_eq!(ax2[i], b2[i], epsilon = 1e-10);
        }

        assert_relative_eq!(factorization.determinant(), 18.0, epsilon = 1e-10);
    }

    #[test]
    fn test_lu_factors_reconstruct_permuted_matrix() {
        let a = array![[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]];
        let factorization = LuFactorization::factorize(&a).expect("Factorization should succeed");
        // Largest remaining entry is in the last row at every step
        assert_eq!(factorization.pivots(), &[2, 2, 2]);
        assert_eq!(factorization.order(), 3);

        let mut pa = a.clone();
        for (k, &p) in factorization.pivots().iter().enumerate() {
            for j in 0..3 {
                pa.swap([k, j], [p, j]);
            }
        }

        let l = factorization.lower();
        let u = factorization.upper();
        for i in 0..3 {
            assert_eq!(l[[i, i]], 1.0);
            for j in (i + 1)..3 {
                assert_eq!(l[[i, j]], 0.0);
                assert_eq!(u[[j, i]], 0.0);
            }
        }

        let lu = l.dot(&u);
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(lu[[i, j]], pa[[i, j]], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_lu_factorization_rhs_must_match_factors() {
        let factorization =
            LuFactorization::factorize(&Array2::<f64>::eye(2)).expect("Factorization should succeed");
        assert_eq!(factorization.order(), 2);
        assert_eq!(factorization.pivots().len(), 2);

        // A shape error, not a getrs status
        assert_eq!(
            factorization.solve(&array![1.0, 1.0, 1.0]).unwrap_err(),
            LinalgError::DimensionMismatch {
                expected: 2,
                got: 3
            }
        );
        assert_eq!(
            factorization.solve_matrix(&Array2::zeros((3, 1))).unwrap_err(),
            LinalgError::DimensionMismatch {
                expected: 2,
                got: 3
            }
        );
    }

    #[test]
    fn test_lu_factorization_inverse() {
        let a = array![[2.0_f64, 0.0, 1.0], [1.0, 3.0, 0.0], [0.0, 1.0, 4.0]];
        let factorization = LuFactorization::factorize(&a).expect("Factorization should succeed");

        let inv = factorization.inverse().expect("Inverse should succeed");
        let identity = a.dot(&inv);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(identity[[i, j]], expected, epsilon = 1e-12);
            }
        }

        let b = Array2::<f64>::eye(3);
        let x = factorization.solve_matrix(&b).expect("Solve should succeed");
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(x[[i, j]], inv[[i, j]], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_lu_factorize_singular() {
        let a = array![[0.0_f64, 0.0], [0.0, 1.0]];
        let err = LuFactorization::factorize(&a).unwrap_err();
        assert_eq!(err.to_string(), "getrf failed in lu_factorize (info = 1)");
    }
}
