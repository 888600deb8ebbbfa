//! Cholesky kernels: `potrf`, `potrs`, `posv`, `potri`
//!
//! Only the selected [`Triangle`] is read and written. The other triangle keeps
//! whatever it held before the call.

use super::Triangle;
use crate::traits::RealField;
use ndarray::Array2;
use num_traits::Float;

/// Cholesky factorization of a symmetric positive definite matrix.
///
/// Computes `L` with `A = L·Lᵀ` (or `U = Lᵀ` with `A = Uᵀ·U`) in the selected
/// triangle. Returns `k > 0` if the leading minor of order `k` is not positive
/// definite; the factorization stops there and the result must not be used.
pub fn potrf<T: RealField>(a: &mut Array2<T>, uplo: Triangle) -> i32 {
    let n = a.nrows();
    if a.ncols() != n {
        return -2;
    }

    #[cfg(feature = "ndarray-linalg")]
    {
        super::binding::potrf(a, uplo)
    }

    #[cfg(not(feature = "ndarray-linalg"))]
    {
        potrf_native(a, uplo)
    }
}

#[cfg(not(feature = "ndarray-linalg"))]
fn potrf_native<T: RealField>(a: &mut Array2<T>, uplo: Triangle) -> i32 {
    let n = a.nrows();
    for j in 0..n {
        let mut d = a[uplo.index(j, j)];
        for k in 0..j {
            let l = a[uplo.index(j, k)];
            d -= l * l;
        }
        if d <= T::zero() || d.is_nan() {
            return (j + 1) as i32;
        }
        let ljj = d.sqrt();
        a[uplo.index(j, j)] = ljj;

        for i in (j + 1)..n {
            let mut s = a[uplo.index(i, j)];
            for k in 0..j {
                s -= a[uplo.index(i, k)] * a[uplo.index(j, k)];
            }
            a[uplo.index(i, j)] = s / ljj;
        }
    }

    0
}

/// Solve `A·X = B` in place from a completed [`potrf`] factorization.
pub fn potrs<T: RealField>(a: &Array2<T>, uplo: Triangle, b: &mut Array2<T>) -> i32 {
    let n = a.nrows();
    if a.ncols() != n {
        return -2;
    }
    if b.nrows() != n {
        return -3;
    }

    #[cfg(feature = "ndarray-linalg")]
    {
        super::binding::potrs(a, uplo, b)
    }

    #[cfg(not(feature = "ndarray-linalg"))]
    {
        potrs_native(a, uplo, b)
    }
}

#[cfg(not(feature = "ndarray-linalg"))]
fn potrs_native<T: RealField>(a: &Array2<T>, uplo: Triangle, b: &mut Array2<T>) -> i32 {
    let n = a.nrows();
    for c in 0..b.ncols() {
        // L·Y = B
        for i in 0..n {
            let mut s = b[[i, c]];
            for k in 0..i {
                s -= a[uplo.index(i, k)] * b[[k, c]];
            }
            b[[i, c]] = s / a[[i, i]];
        }

        // Lᵀ·X = Y
        for i in (0..n).rev() {
            let mut s = b[[i, c]];
            for k in (i + 1)..n {
                s -= a[uplo.index(k, i)] * b[[k, c]];
            }
            b[[i, c]] = s / a[[i, i]];
        }
    }

    0
}

/// Factorize `a` with [`potrf`] and solve `A·X = B` in place.
///
/// On failure `b` is left untouched and the [`potrf`] status is returned.
pub fn posv<T: RealField>(a: &mut Array2<T>, uplo: Triangle, b: &mut Array2<T>) -> i32 {
    if a.nrows() != a.ncols() {
        return -2;
    }
    if b.nrows() != a.nrows() {
        return -3;
    }

    let info = potrf(a, uplo);
    if info != 0 {
        return info;
    }
    potrs(a, uplo, b)
}

/// Overwrite a completed [`potrf`] factorization with `A⁻¹`.
///
/// Only the selected triangle of the inverse is stored; mirror it with
/// [`super::mksym`] to obtain the full symmetric matrix. Returns `k > 0` if
/// the factor has a zero on its diagonal.
pub fn potri<T: RealField>(a: &mut Array2<T>, uplo: Triangle) -> i32 {
    let n = a.nrows();
    if a.ncols() != n {
        return -2;
    }

    #[cfg(feature = "ndarray-linalg")]
    {
        super::binding::potri(a, uplo)
    }

    #[cfg(not(feature = "ndarray-linalg"))]
    {
        potri_native(a, uplo)
    }
}

#[cfg(not(feature = "ndarray-linalg"))]
fn potri_native<T: RealField>(a: &mut Array2<T>, uplo: Triangle) -> i32 {
    let n = a.nrows();
    if let Some(k) = (0..n).find(|&k| a[[k, k]] == T::zero()) {
        return (k + 1) as i32;
    }

    // L⁻¹, lower triangular
    let mut linv = Array2::<T>::zeros((n, n));
    for j in 0..n {
        linv[[j, j]] = T::one() / a[[j, j]];
        for i in (j + 1)..n {
            let mut s = T::zero();
            for k in j..i {
                s += a[uplo.index(i, k)] * linv[[k, j]];
            }
            linv[[i, j]] = -s / a[[i, i]];
        }
    }

    // A⁻¹ = L⁻ᵀ·L⁻¹
    for i in 0..n {
        for j in 0..=i {
            let mut s = T::zero();
            for k in i..n {
                s += linv[[k, i]] * linv[[k, j]];
            }
            a[uplo.index(i, j)] = s;
        }
    }

    0
}

/// Log-determinant of `A` from a completed [`potrf`] factorization.
///
/// `ln det(A) = 2·Σ ln L(i, i)`; both triangles share the diagonal. Summing
/// logarithms avoids the overflow and underflow of multiplying the diagonal
/// entries first.
pub fn potrf_log_det<T: RealField>(a: &Array2<T>) -> T {
    let sum = a.diag().iter().fold(T::zero(), |acc, &d| acc + Float::ln(d));
    (T::one() + T::one()) * sum
}
