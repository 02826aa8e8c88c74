//! Direct solvers for small dense linear systems
//!
//! This crate solves square systems Ax = b by two classical direct methods:
//!
//! - **Gauss-Jordan elimination** with partial pivoting: [`gauss_jordan_solve`]
//! - **LU decomposition** (Doolittle, no pivoting) with forward/backward
//!   substitution: [`lu_solve`], or [`lu_decompose`] plus the substitution
//!   routines for reuse across right-hand sides
//!
//! Inputs are never modified; every routine works on its own copy. The two
//! methods differ deliberately in robustness: Gauss-Jordan pivots and handles
//! any nonsingular system, while the LU factorization fails on a zero leading
//! principal minor.
//!
//! # Example
//!
//! ```
//! use dense_solvers::{gauss_jordan_solve, lu_solve};
//! use ndarray::array;
//!
//! let a = array![[2.0_f64, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]];
//! let b = array![8.0_f64, -11.0, -3.0];
//!
//! let x = gauss_jordan_solve(&a, &b)?;
//! let x_lu = lu_solve(&a, &b)?;
//! # Ok::<(), dense_solvers::SolveError>(())
//! ```

pub mod error;
pub mod gauss_jordan;
pub mod lu;
pub mod substitution;
pub mod traits;

pub use error::SolveError;
pub use gauss_jordan::gauss_jordan_solve;
pub use lu::{LuDecomposition, lu_decompose, lu_solve};
pub use substitution::{backward_substitution, forward_substitution};
pub use traits::RealField;
