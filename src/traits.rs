//! Scalar trait for dense linear algebra
//!
//! This module defines [`RealField`], the bound used by every solver in this
//! crate. It abstracts over the fixed-width floating-point types so the same
//! elimination code serves `f64` and `f32`.

use num_traits::{Float, NumAssign};
use std::fmt::Debug;

/// Trait for real scalar types usable in the direct solvers.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default for most applications)
/// - `f32` (for memory-constrained applications)
pub trait RealField: Float + NumAssign + Debug + Send + Sync + 'static {}

impl RealField for f64 {}

impl RealField for f32 {}
