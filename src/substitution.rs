//! Triangular substitution routines
//!
//! Forward substitution for lower-triangular systems and backward
//! substitution for upper-triangular systems. These compose with
//! [`lu_decompose`](crate::lu::lu_decompose) to solve Ax = b, but are usable
//! on their own for any triangular system with the documented shape.

use crate::error::SolveError;
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// Solve Ly = b by forward substitution.
///
/// `l` must be unit lower triangular (ones on the diagonal), as produced by
/// [`lu_decompose`](crate::lu::lu_decompose); no division by the diagonal is
/// performed. Entries above the diagonal are never read.
pub fn forward_substitution<T: RealField>(
    l: &Array2<T>,
    b: &Array1<T>,
) -> Result<Array1<T>, SolveError> {
    let n = check_square(l)?;
    check_len(n, b.len())?;

    let mut y = Array1::zeros(n);
    for i in 0..n {
        let mut sum = T::zero();
        for j in 0..i {
            sum += l[[i, j]] * y[j];
        }
        y[i] = b[i] - sum;
    }
    Ok(y)
}

/// Solve Ux = y by backward substitution.
///
/// `u` must be upper triangular; entries below the diagonal are never read.
/// Unknowns are resolved in strictly reverse order, last row first. Returns
/// [`SolveError::SingularMatrix`] if a diagonal entry is exactly zero.
pub fn backward_substitution<T: RealField>(
    u: &Array2<T>,
    y: &Array1<T>,
) -> Result<Array1<T>, SolveError> {
    let n = check_square(u)?;
    check_len(n, y.len())?;

    let mut x = Array1::zeros(n);
    for i in (0..n).rev() {
        let u_ii = u[[i, i]];
        if u_ii == T::zero() {
            return Err(SolveError::SingularMatrix);
        }
        let mut sum = T::zero();
        for j in (i + 1)..n {
            sum += u[[i, j]] * x[j];
        }
        x[i] = (y[i] - sum) / u_ii;
    }
    Ok(x)
}

pub(crate) fn check_square<T: RealField>(a: &Array2<T>) -> Result<usize, SolveError> {
    let n = a.nrows();
    if a.ncols() != n {
        return Err(SolveError::DimensionMismatch {
            expected: n,
            got: a.ncols(),
        });
    }
    Ok(n)
}

pub(crate) fn check_len(expected: usize, got: usize) -> Result<(), SolveError> {
    if got != expected {
        return Err(SolveError::DimensionMismatch { expected, got });
    }
    Ok(())
}
