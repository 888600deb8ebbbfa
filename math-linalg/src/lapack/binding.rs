//! LAPACK binding through `ndarray-linalg`
//!
//! The public kernels validate their arguments and forward here. Data is
//! copied into column-major buffers so LAPACK factorizes `A` itself and not
//! its transpose; pivots are converted between the 1-based `i32` form LAPACK
//! uses and the crate's 0-based form.

use super::Triangle;
use lax::Transpose;
use lax::error::Error;
use lax::layout::MatrixLayout;
use ndarray::{Array1, Array2};
use ndarray_linalg::{Lapack, UPLO};

/// LAPACK `info` from a binding result
fn status(result: Result<(), Error>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(Error::LapackComputationalFailure { return_code })
        | Err(Error::LapackInvalidValue { return_code }) => return_code,
        Err(_) => -1,
    }
}

fn square_layout(n: usize) -> MatrixLayout {
    MatrixLayout::F {
        col: n as i32,
        lda: n as i32,
    }
}

fn uplo(triangle: Triangle) -> UPLO {
    match triangle {
        Triangle::Lower => UPLO::Lower,
        Triangle::Upper => UPLO::Upper,
    }
}

fn to_column_major<T: Copy>(a: &Array2<T>) -> Vec<T> {
    a.t().iter().copied().collect()
}

fn assign_column_major<T: Copy>(a: &mut Array2<T>, buf: &[T]) {
    let rows = a.nrows();
    for ((i, j), value) in a.indexed_iter_mut() {
        *value = buf[i + j * rows];
    }
}

fn lapack_pivots(ipiv: &[usize]) -> Vec<i32> {
    ipiv.iter().map(|&p| p as i32 + 1).collect()
}

/// Solve column by column; `solve` receives one right-hand side at a time
fn solve_columns<T, F>(b: &mut Array2<T>, mut solve: F) -> i32
where
    T: Copy,
    F: FnMut(&mut [T]) -> Result<(), Error>,
{
    for c in 0..b.ncols() {
        let mut column = b.column(c).to_vec();
        let info = status(solve(&mut column));
        if info != 0 {
            return info;
        }
        b.column_mut(c).assign(&Array1::from(column));
    }
    0
}

pub(super) fn getrf<T: Lapack>(a: &mut Array2<T>, ipiv: &mut [usize]) -> i32 {
    let n = a.nrows();
    if n == 0 {
        return 0;
    }
    let mut buf = to_column_major(a);
    match T::lu(square_layout(n), &mut buf) {
        Ok(pivots) => {
            assign_column_major(a, &buf);
            for (slot, p) in ipiv.iter_mut().zip(pivots) {
                *slot = (p - 1) as usize;
            }
            0
        }
        Err(e) => status(Err(e)),
    }
}

pub(super) fn getrs<T: Lapack>(a: &Array2<T>, ipiv: &[usize], b: &mut Array2<T>) -> i32 {
    let n = a.nrows();
    if n == 0 {
        return 0;
    }
    let lu = to_column_major(a);
    let pivots = lapack_pivots(ipiv);
    solve_columns(b, |column| {
        T::solve(square_layout(n), Transpose::No, &lu, &pivots, column)
    })
}

pub(super) fn getri<T: Lapack>(a: &mut Array2<T>, ipiv: &[usize]) -> i32 {
    let n = a.nrows();
    if n == 0 {
        return 0;
    }
    let mut buf = to_column_major(a);
    let info = status(T::inv(square_layout(n), &mut buf, &lapack_pivots(ipiv)));
    if info == 0 {
        assign_column_major(a, &buf);
    }
    info
}

pub(super) fn potrf<T: Lapack>(a: &mut Array2<T>, triangle: Triangle) -> i32 {
    let n = a.nrows();
    if n == 0 {
        return 0;
    }
    let mut buf = to_column_major(a);
    let info = status(T::cholesky(square_layout(n), uplo(triangle), &mut buf));
    if info == 0 {
        assign_column_major(a, &buf);
    }
    info
}

pub(super) fn potrs<T: Lapack>(a: &Array2<T>, triangle: Triangle, b: &mut Array2<T>) -> i32 {
    let n = a.nrows();
    if n == 0 {
        return 0;
    }
    let factor = to_column_major(a);
    solve_columns(b, |column| {
        T::solve_cholesky(square_layout(n), uplo(triangle), &factor, column)
    })
}

pub(super) fn potri<T: Lapack>(a: &mut Array2<T>, triangle: Triangle) -> i32 {
    let n = a.nrows();
    if n == 0 {
        return 0;
    }
    let mut buf = to_column_major(a);
    let info = status(T::inv_cholesky(square_layout(n), uplo(triangle), &mut buf));
    if info == 0 {
        assign_column_major(a, &buf);
    }
    info
}
