//! Core traits for dense factorizations
//!
//! [`RealField`] is the scalar abstraction shared by the LAPACK-style kernels in
//! [`crate::lapack`] and the solve/invert/determinant layer in [`crate::direct`].

use num_traits::{Float, NumAssign};
use std::fmt::{Debug, Display};

/// Trait for real scalar types that can be used in dense factorizations.
///
/// With the `ndarray-linalg` feature the type must also have LAPACK routines
/// behind it. Methods that both [`Float`] and `ndarray_linalg::Scalar` provide
/// (`ln`, `exp`, `sqrt`, ...) are then ambiguous on a generic `T`; call them as
/// `Float::ln(x)`.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default for most applications)
/// - `f32` (for memory-constrained applications)
#[cfg(feature = "ndarray-linalg")]
pub trait RealField:
    Float + NumAssign + Send + Sync + Debug + Display + ndarray_linalg::Lapack + 'static
{
}

/// Trait for real scalar types that can be used in dense factorizations.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default for most applications)
/// - `f32` (for memory-constrained applications)
#[cfg(not(feature = "ndarray-linalg"))]
pub trait RealField: Float + NumAssign + Send + Sync + Debug + Display + 'static {}

impl RealField for f64 {}

impl RealField for f32 {}
