//! LU factorization kernels: `getrf`, `getrs`, `getri`
//!
//! `A` is overwritten with `L` (unit lower, stored below the diagonal) and `U`
//! (upper, including the diagonal) such that `P·A = L·U`.

use crate::traits::RealField;
use ndarray::Array2;

/// LU factorization with partial pivoting.
///
/// `ipiv` must have length `n` and receives the row interchanges. Returns `0`
/// on success, `k > 0` if `U(k-1, k-1)` is exactly zero, in which case `U` is
/// singular and must not be used to solve or invert.
pub fn getrf<T: RealField>(a: &mut Array2<T>, ipiv: &mut [usize]) -> i32 {
    let n = a.nrows();
    if a.ncols() != n {
        return -1;
    }
    if ipiv.len() != n {
        return -2;
    }

    #[cfg(feature = "ndarray-linalg")]
    {
        super::binding::getrf(a, ipiv)
    }

    #[cfg(not(feature = "ndarray-linalg"))]
    {
        getrf_native(a, ipiv)
    }
}

#[cfg(not(feature = "ndarray-linalg"))]
fn getrf_native<T: RealField>(a: &mut Array2<T>, ipiv: &mut [usize]) -> i32 {
    let n = a.nrows();
    let mut info = 0;
    for k in 0..n {
        // Find pivot
        let mut max_val = a[[k, k]].abs();
        let mut max_row = k;
        for i in (k + 1)..n {
            let val = a[[i, k]].abs();
            if val > max_val {
                max_val = val;
                max_row = i;
            }
        }
        ipiv[k] = max_row;

        // Completed past a zero pivot, like LAPACK
        if max_val == T::zero() {
            if info == 0 {
                info = (k + 1) as i32;
            }
            continue;
        }

        if max_row != k {
            for j in 0..n {
                a.swap([k, j], [max_row, j]);
            }
        }

        // Compute multipliers and eliminate
        let pivot = a[[k, k]];
        for i in (k + 1)..n {
            let mult = a[[i, k]] / pivot;
            a[[i, k]] = mult;
            for j in (k + 1)..n {
                let update = mult * a[[k, j]];
                a[[i, j]] -= update;
            }
        }
    }

    info
}

/// Solve `A·X = B` in place using the factorization computed by [`getrf`].
///
/// Every column of `b` is a right-hand side and is overwritten with its
/// solution.
pub fn getrs<T: RealField>(a: &Array2<T>, ipiv: &[usize], b: &mut Array2<T>) -> i32 {
    let n = a.nrows();
    if a.ncols() != n {
        return -1;
    }
    if ipiv.len() != n || ipiv.iter().any(|&p| p >= n) {
        return -2;
    }
    if b.nrows() != n {
        return -3;
    }

    #[cfg(feature = "ndarray-linalg")]
    {
        super::binding::getrs(a, ipiv, b)
    }

    #[cfg(not(feature = "ndarray-linalg"))]
    {
        getrs_native(a, ipiv, b)
    }
}

#[cfg(not(feature = "ndarray-linalg"))]
fn getrs_native<T: RealField>(a: &Array2<T>, ipiv: &[usize], b: &mut Array2<T>) -> i32 {
    let n = a.nrows();
    let nrhs = b.ncols();

    // Apply row interchanges: B := P·B
    for (k, &p) in ipiv.iter().enumerate() {
        if p != k {
            for c in 0..nrhs {
                b.swap([k, c], [p, c]);
            }
        }
    }

    for c in 0..nrhs {
        // Forward substitution: L·Y = P·B
        for i in 0..n {
            let mut sum = b[[i, c]];
            for j in 0..i {
                sum -= a[[i, j]] * b[[j, c]];
            }
            b[[i, c]] = sum;
        }

        // Backward substitution: U·X = Y
        for i in (0..n).rev() {
            let mut sum = b[[i, c]];
            for j in (i + 1)..n {
                sum -= a[[i, j]] * b[[j, c]];
            }
            b[[i, c]] = sum / a[[i, i]];
        }
    }

    0
}

/// Overwrite the factorization computed by [`getrf`] with `A⁻¹`.
///
/// Returns `k > 0` if `U(k-1, k-1)` is exactly zero, leaving `a` untouched.
pub fn getri<T: RealField>(a: &mut Array2<T>, ipiv: &[usize]) -> i32 {
    let n = a.nrows();
    if a.ncols() != n {
        return -1;
    }
    if ipiv.len() != n || ipiv.iter().any(|&p| p >= n) {
        return -2;
    }

    #[cfg(feature = "ndarray-linalg")]
    {
        super::binding::getri(a, ipiv)
    }

    #[cfg(not(feature = "ndarray-linalg"))]
    {
        getri_native(a, ipiv)
    }
}

#[cfg(not(feature = "ndarray-linalg"))]
fn getri_native<T: RealField>(a: &mut Array2<T>, ipiv: &[usize]) -> i32 {
    let n = a.nrows();
    if let Some(k) = (0..n).find(|&k| a[[k, k]] == T::zero()) {
        return (k + 1) as i32;
    }

    let mut inverse = Array2::eye(n);
    let info = getrs_native(a, ipiv, &mut inverse);
    if info != 0 {
        return info;
    }
    a.assign(&inverse);
    0
}

/// Signed determinant from a completed [`getrf`] factorization.
///
/// The product of `U`'s diagonal, negated when the pivots encode an odd
/// number of row interchanges.
pub fn getrf_det<T: RealField>(a: &Array2<T>, ipiv: &[usize]) -> T {
    let det = a.diag().iter().fold(T::one(), |acc, &d| acc * d);
    let swaps = ipiv
        .iter()
        .enumerate()
        .filter(|&(k, &p)| p != k)
        .count();
    if swaps % 2 == 1 { -det } else { det }
}
