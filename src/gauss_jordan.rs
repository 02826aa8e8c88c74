//! Gauss-Jordan elimination solver
//!
//! Solves Ax = b by reducing the augmented matrix [A | b] all the way to
//! reduced row echelon form, with partial pivoting for numerical stability.

use crate::error::SolveError;
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// Solve Ax = b by Gauss-Jordan elimination with partial pivoting.
///
/// Works on a private augmented copy of the inputs; `a` and `b` are never
/// modified. For each pivot column the remaining row with the
/// largest-magnitude entry is swapped into place (first occurrence wins
/// ties), the pivot row is normalized, and the column is eliminated from
/// every other row. Once the left block is the identity, the last column of
/// the augmented matrix is the solution.
///
/// Returns [`SolveError::SingularMatrix`] if a selected pivot is exactly
/// zero, and [`SolveError::DimensionMismatch`] if `a` is not square or `b`
/// has the wrong length.
pub fn gauss_jordan_solve<T: RealField>(
    a: &Array2<T>,
    b: &Array1<T>,
) -> Result<Array1<T>, SolveError> {
    let n = a.nrows();
    if a.ncols() != n {
        return Err(SolveError::DimensionMismatch {
            expected: n,
            got: a.ncols(),
        });
    }
    if b.len() != n {
        return Err(SolveError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }

    // Augmented matrix M = [A | b], n rows by n+1 columns
    let mut m = Array2::zeros((n, n + 1));
    for i in 0..n {
        for j in 0..n {
            m[[i, j]] = a[[i, j]];
        }
        m[[i, n]] = b[i];
    }

    for i in 0..n {
        // Partial pivoting: largest |M[r, i]| among rows i..n
        let mut max_val = m[[i, i]].abs();
        let mut max_row = i;
        for r in (i + 1)..n {
            let val = m[[r, i]].abs();
            if val > max_val {
                max_val = val;
                max_row = r;
            }
        }

        if max_val == T::zero() {
            return Err(SolveError::SingularMatrix);
        }

        if max_row != i {
            log::trace!("gauss-jordan: swapping row {} into pivot position {}", max_row, i);
            for k in 0..=n {
                let tmp = m[[i, k]];
                m[[i, k]] = m[[max_row, k]];
                m[[max_row, k]] = tmp;
            }
        }

        // Normalize the pivot row so M[i, i] becomes 1
        let pivot = m[[i, i]];
        for k in 0..=n {
            m[[i, k]] = m[[i, k]] / pivot;
        }

        // Eliminate column i from every other row
        for j in 0..n {
            if j == i {
                continue;
            }
            let factor = m[[j, i]];
            for k in 0..=n {
                let update = m[[i, k]] * factor;
                m[[j, k]] -= update;
            }
        }
    }

    Ok(m.column(n).to_owned())
}
