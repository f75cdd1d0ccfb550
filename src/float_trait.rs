//! Float trait abstraction for f32/f64 support.
//!
//! This module provides a unified trait for floating-point operations,
//! enabling the transform engine to work with both f32 and f64 precision
//! from a single algorithm body.

use num_traits::{Float, FromPrimitive, NumAssign};
use std::fmt::Debug;
use std::iter::Sum;

use crate::error::FourierError;

/// Trait alias for floating point types supported by the transform engine.
///
/// This trait combines all the bounds needed for the kernels and the blur
/// metric:
/// - Basic float operations (Float, NumAssign)
/// - Conversion from primitive types (FromPrimitive)
/// - Iteration support (Sum)
/// - Debug printing
pub trait FourierFloat:
    Float + FromPrimitive + NumAssign + Sum + Debug + Send + Sync + 'static
{
    /// The constant PI for this float type.
    const PI: Self;

    /// Create a value from an f64 constant.
    fn from_f64_c(val: f64) -> Self;

    /// Create a value from a usize constant.
    fn usize_as(val: usize) -> Self;
}

impl FourierFloat for f32 {
    const PI: Self = std::f32::consts::PI;

    #[inline]
    fn from_f64_c(val: f64) -> Self {
        val as f32
    }

    #[inline]
    fn usize_as(val: usize) -> Self {
        val as f32
    }
}

impl FourierFloat for f64 {
    const PI: Self = std::f64::consts::PI;

    #[inline]
    fn from_f64_c(val: f64) -> Self {
        val
    }

    #[inline]
    fn usize_as(val: usize) -> Self {
        val as f64
    }
}

/// Scalar division that surfaces a zero divisor as an error instead of
/// producing an infinity.
pub fn checked_div<F: FourierFloat>(num: F, den: F) -> Result<F, FourierError> {
    if den == F::zero() {
        Err(FourierError::DivisionByZero)
    } else {
        Ok(num / den)
    }
}
