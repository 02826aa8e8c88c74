//! LU decomposition solver
//!
//! Doolittle factorization of a dense square matrix into explicit L and U
//! factors, plus a convenience solver that chains the factorization with
//! forward and backward substitution.
//!
//! This factorization performs no pivoting. It fails on any matrix with a
//! zero leading principal minor even when the system itself is solvable;
//! [`gauss_jordan_solve`](crate::gauss_jordan::gauss_jordan_solve) handles
//! such systems via partial pivoting.

use crate::error::SolveError;
use crate::substitution::{backward_substitution, check_len, check_square, forward_substitution};
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// LU factorization result
///
/// Stores the explicit L and U factors: `l` is unit lower triangular
/// (`l[[i, i]] == 1`, zeros above the diagonal) and `u` is upper triangular
/// (zeros below the diagonal), with `a ≈ l · u`.
#[derive(Debug, Clone)]
pub struct LuDecomposition<T: RealField> {
    /// Unit lower triangular factor
    pub l: Array2<T>,
    /// Upper triangular factor
    pub u: Array2<T>,
    /// Matrix dimension
    pub n: usize,
}

impl<T: RealField> LuDecomposition<T> {
    /// Solve Ax = b using the pre-computed factors.
    ///
    /// Runs forward substitution on L then backward substitution on U; the
    /// factorization can be reused for any number of right-hand sides.
    pub fn solve(&self, b: &Array1<T>) -> Result<Array1<T>, SolveError> {
        check_len(self.n, b.len())?;
        let y = forward_substitution(&self.l, b)?;
        backward_substitution(&self.u, &y)
    }
}

/// Compute the LU factorization of `a` by Doolittle's method (no pivoting).
///
/// Returns [`SolveError::SingularMatrix`] when a diagonal pivot `u[[i, i]]`
/// comes out exactly zero, and [`SolveError::DimensionMismatch`] when `a` is
/// not square. `a` is never modified.
pub fn lu_decompose<T: RealField>(a: &Array2<T>) -> Result<LuDecomposition<T>, SolveError> {
    let n = check_square(a)?;

    let mut l = Array2::zeros((n, n));
    let mut u = Array2::zeros((n, n));

    for i in 0..n {
        // Row i of U
        for k in i..n {
            let mut sum = T::zero();
            for j in 0..i {
                sum += l[[i, j]] * u[[j, k]];
            }
            u[[i, k]] = a[[i, k]] - sum;
        }

        l[[i, i]] = T::one();

        // A zero pivot here leaves the multipliers below undefined
        let pivot = u[[i, i]];
        if pivot == T::zero() {
            return Err(SolveError::SingularMatrix);
        }

        // Column i of L
        for k in (i + 1)..n {
            let mut sum = T::zero();
            for j in 0..i {
                sum += l[[k, j]] * u[[j, i]];
            }
            l[[k, i]] = (a[[k, i]] - sum) / pivot;
        }
    }

    Ok(LuDecomposition { l, u, n })
}

/// Solve Ax = b using LU decomposition.
///
/// This is a convenience function that combines factorization and the two
/// substitution passes, propagating any failure unchanged.
pub fn lu_solve<T: RealField>(a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>, SolveError> {
    let decomposition = lu_decompose(a)?;
    decomposition.solve(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gauss_jordan::gauss_jordan_solve;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_lu_solve_3x3() {
        let a = array![[2.0_f64, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]];
        let b = array![8.0_f64, -11.0, -3.0];

        let x = lu_solve(&a, &b).expect("LU solve should succeed");

        assert_relative_eq!(x[0], 2.0, epsilon = 1e-10);
        assert_relative_eq!(x[1], 3.0, epsilon = 1e-10);
        assert_relative_eq!(x[2], -1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_lu_round_trip_and_invariants() {
        let a = array![[4.0_f64, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 2.0]];

        let f = lu_decompose(&a).expect("factorization should succeed");

        // L unit lower triangular, U upper triangular
        for i in 0..3 {
            assert_relative_eq!(f.l[[i, i]], 1.0);
            for j in (i + 1)..3 {
                assert_relative_eq!(f.l[[i, j]], 0.0);
                assert_relative_eq!(f.u[[j, i]], 0.0);
            }
        }

        let lu = f.l.dot(&f.u);
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(lu[[i, j]], a[[i, j]], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_lu_decompose_and_solve_multiple_rhs() {
        let a = array![[4.0_f64, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 2.0]];

        let f = lu_decompose(&a).expect("factorization should succeed");

        let b1 = array![1.0_f64, 2.0, 3.0];
        let x1 = f.solve(&b1).expect("solve should succeed");
        let ax1 = a.dot(&x1);
        for i in 0..3 {
            assert_relative_eq!(ax1[i], b1[i], epsilon = 1e-10);
        }

        let b2 = array![4.0_f64, 5.0, 6.0];
        let x2 = f.solve(&b2).expect("solve should succeed");
        let ax2 = a.dot(&x2);
        for i in 0..3 {
            assert_relative_eq!(ax2[i], b2[i], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_lu_singular() {
        let a = array![[1.0_f64, 1.0], [1.0, 1.0]];
        let b = array![2.0_f64, 2.0];

        assert_eq!(lu_solve(&a, &b).unwrap_err(), SolveError::SingularMatrix);
    }

    #[test]
    fn test_lu_zero_leading_pivot_asymmetry() {
        // Nonsingular, but the (0,0) pivot is zero: without pivoting the
        // factorization must fail while Gauss-Jordan still solves it.
        let a = array![[0.0_f64, 1.0], [1.0, 0.0]];
        let b = array![1.0_f64, 2.0];

        assert_eq!(lu_decompose(&a).unwrap_err(), SolveError::SingularMatrix);

        let x = gauss_jordan_solve(&a, &b).expect("Gauss-Jordan should still solve");
        assert_relative_eq!(x[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_lu_matches_gauss_jordan() {
        let a = array![[2.0_f64, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]];
        let b = array![8.0_f64, -11.0, -3.0];

        let x_lu = lu_solve(&a, &b).expect("LU solve should succeed");
        let x_gj = gauss_jordan_solve(&a, &b).expect("Gauss-Jordan should succeed");

        for i in 0..3 {
            assert_relative_eq!(x_lu[i], x_gj[i], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_lu_solve_f32() {
        let a = array![[4.0_f32, 1.0], [1.0, 3.0]];
        let b = array![1.0_f32, 2.0];

        let x = lu_solve(&a, &b).expect("LU solve should succeed");

        let ax = a.dot(&x);
        for i in 0..2 {
            assert_relative_eq!(ax[i], b[i], epsilon = 1e-5);
        }
    }

    #[test]
    fn test_lu_dimension_mismatch() {
        let a = array![[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]];
        assert_eq!(
            lu_decompose(&a).unwrap_err(),
            SolveError::DimensionMismatch {
                expected: 2,
                got: 3
            }
        );

        let a = array![[1.0_f64, 0.0], [0.0, 1.0]];
        let f = lu_decompose(&a).expect("factorization should succeed");
        let b = array![1.0_f64, 2.0, 3.0];
        assert_eq!(
            f.solve(&b).unwrap_err(),
            SolveError::DimensionMismatch {
                expected: 2,
                got: 3
            }
        );
    }
}
