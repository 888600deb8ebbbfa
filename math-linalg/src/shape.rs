//! Triangular extraction and symmetrization
//!
//! Factorizations overwrite only one triangle of their input. These helpers
//! cut the populated triangle out as a proper square matrix, or mirror it so
//! the result is exactly symmetric in storage.

use crate::error::{LinalgError, square_order};
use crate::lapack::{self, Triangle};
use ndarray::Array2;
use num_traits::Zero;

/// Select the lower triangular part of a matrix.
///
/// Returns a `dim × dim` matrix with `dim = min(nrows, ncols)`. For a tall
/// matrix the block is aligned to the bottom rows: entry `(i, j)`, `j <= i`,
/// is `m(nrows - ncols + i, j)`. Entries above the diagonal are zero.
pub fn select_lower_triangular<T: Clone + Zero>(m: &Array2<T>) -> Array2<T> {
    let (nrows, ncols) = m.dim();
    let dim = nrows.min(ncols);
    let row_offset = nrows.saturating_sub(ncols);

    Array2::from_shape_fn((dim, dim), |(i, j)| {
        if j <= i {
            m[[row_offset + i, j]].clone()
        } else {
            T::zero()
        }
    })
}

/// Select the upper triangular part of a matrix.
///
/// Returns a `dim × dim` matrix with `dim = min(nrows, ncols)`. For a wide
/// matrix the block is aligned to the rightmost columns: entry `(i, j)`,
/// `j >= i`, is `m(i, ncols - nrows + j)`. Entries below the diagonal are zero.
pub fn select_upper_triangular<T: Clone + Zero>(m: &Array2<T>) -> Array2<T> {
    let (nrows, ncols) = m.dim();
    let dim = nrows.min(ncols);
    let col_offset = ncols.saturating_sub(nrows);

    Array2::from_shape_fn((dim, dim), |(i, j)| {
        if j >= i {
            m[[i, col_offset + j]].clone()
        } else {
            T::zero()
        }
    })
}

/// Make a square matrix symmetric by copying its lower triangle onto the upper one.
pub fn make_symmetric<T: Clone>(m: Array2<T>) -> Result<Array2<T>, LinalgError> {
    make_symmetric_from(m, Triangle::Lower)
}

/// Make a square matrix symmetric by copying the `source` triangle onto the other one.
pub fn make_symmetric_from<T: Clone>(
    mut m: Array2<T>,
    source: Triangle,
) -> Result<Array2<T>, LinalgError> {
    square_order(&m)?;
    lapack::mksym(&mut m, source);
    Ok(m)
}
