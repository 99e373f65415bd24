//! Two-operand minimum and maximum
//!
//! Integers use their total order. Doubles go straight to the provider, whose
//! contract is NaN dominance (either operand NaN gives NaN) with +0 ordered
//! above -0. Singles are promoted, resolved as doubles and narrowed, which
//! keeps both the NaN dominance and the signed-zero tie-break.
//!
//! # Example
//!
//! ```rust
//! use prim_math::minmax::{max_f32, min_f64};
//! use prim_math::LibmProvider;
//!
//! assert!(max_f32::<LibmProvider>(f32::NAN, 5.0).is_nan());
//! assert_eq!(min_f64::<LibmProvider>(-2.0, 3.0), -2.0);
//! ```

use crate::traits::{MinMax, PrimitiveProvider};
use crate::widen::{narrow, promote};

/// Larger of two `i32`
#[inline]
pub fn max_i32<P: PrimitiveProvider>(val1: i32, val2: i32) -> i32 {
    P::max_i32(val1, val2)
}

/// Smaller of two `i32`
#[inline]
pub fn min_i32<P: PrimitiveProvider>(val1: i32, val2: i32) -> i32 {
    P::min_i32(val1, val2)
}

/// Larger of two doubles; NaN if either is NaN
#[inline]
pub fn max_f64<P: PrimitiveProvider>(val1: f64, val2: f64) -> f64 {
    P::max(val1, val2)
}

/// Smaller of two doubles; NaN if either is NaN
#[inline]
pub fn min_f64<P: PrimitiveProvider>(val1: f64, val2: f64) -> f64 {
    P::min(val1, val2)
}

/// Larger of two singles, resolved in double precision
#[inline]
pub fn max_f32<P: PrimitiveProvider>(val1: f32, val2: f32) -> f32 {
    narrow(P::max(promote(val1), promote(val2)))
}

/// Smaller of two singles, resolved in double precision
#[inline]
pub fn min_f32<P: PrimitiveProvider>(val1: f32, val2: f32) -> f32 {
    narrow(P::min(promote(val1), promote(val2)))
}

impl MinMax for i32 {
    #[inline]
    fn max_with<P: PrimitiveProvider>(self, other: Self) -> Self {
        max_i32::<P>(self, other)
    }

    #[inline]
    fn min_with<P: PrimitiveProvider>(self, other: Self) -> Self {
        min_i32::<P>(self, other)
    }
}

impl MinMax for f64 {
    #[inline]
    fn max_with<P: PrimitiveProvider>(self, other: Self) -> Self {
        max_f64::<P>(self, other)
    }

    #[inline]
    fn min_with<P: PrimitiveProvider>(self, other: Self) -> Self {
        min_f64::<P>(self, other)
    }
}

impl MinMax for f32 {
    #[inline]
    fn max_with<P: PrimitiveProvider>(self, other: Self) -> Self {
        max_f32::<P>(self, other)
    }

    #[inline]
    fn min_with<P: PrimitiveProvider>(self, other: Self) -> Self {
        min_f32::<P>(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LibmProvider;

    #[test]
    fn test_i32_extremes() {
        assert_eq!(max_i32::<LibmProvider>(i32::MIN, i32::MAX), i32::MAX);
        assert_eq!(min_i32::<LibmProvider>(i32::MIN, i32::MAX), i32::MIN);
        assert_eq!(min_i32::<LibmProvider>(-4, -4), -4);
    }

    #[test]
    fn test_f32_signed_zero_survives_narrowing() {
        assert!(max_f32::<LibmProvider>(-0.0, 0.0).is_sign_positive());
        assert!(min_f32::<LibmProvider>(0.0, -0.0).is_sign_negative());
    }

    #[test]
    fn test_f32_infinities() {
        assert_eq!(
            max_f32::<LibmProvider>(f32::NEG_INFINITY, f32::MIN),
            f32::MIN
        );
        assert_eq!(
            min_f32::<LibmProvider>(f32::INFINITY, f32::MAX),
            f32::MAX
        );
    }
}
