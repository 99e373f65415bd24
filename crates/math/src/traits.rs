//! Core provider and overloading traits
//!
//! [`PrimitiveProvider`] is the seam between this crate and whatever supplies
//! correctly-rounded double-precision math (a software libm, the platform math
//! runtime, or hardware intrinsics). Everything the composition layer does is
//! expressed in terms of this trait plus the NaN and width policies in
//! [`crate::clamp`], [`crate::minmax`] and [`crate::sign`].
//!
//! The remaining traits ([`Clamp`], [`MinMax`], [`Sign`], [`Abs`]) stand in for
//! per-width overloads so that `Math::clamp(3.0f32, 1.0, 2.0)` and
//! `Math::clamp(3i64, 1, 2)` resolve to the right specialization.

use crate::error::Result;

/// Source of double-precision transcendental, rounding and comparison primitives
///
/// Implementors are zero-sized marker types; every primitive is an associated
/// function. The composition layer assumes the contracts documented on each
/// function and never re-checks them.
///
/// # Example
///
/// ```rust
/// use prim_math::{LibmProvider, PrimitiveProvider};
///
/// assert_eq!(LibmProvider::round(2.5), 2.0);
/// assert!(LibmProvider::max(f64::NAN, 1.0).is_nan());
/// ```
pub trait PrimitiveProvider: Copy + Send + Sync + 'static {
    /// Short name of the provider, used in test and bench labels
    const NAME: &'static str;

    // Trigonometric

    /// Sine of an angle in radians; NaN for NaN or ±∞
    fn sin(a: f64) -> f64;

    /// Cosine of an angle in radians; NaN for NaN or ±∞
    fn cos(a: f64) -> f64;

    /// Tangent of an angle in radians; NaN for NaN or ±∞
    fn tan(a: f64) -> f64;

    /// Arcsine in [-π/2, π/2]; NaN outside [-1, 1]
    fn asin(d: f64) -> f64;

    /// Arccosine in [0, π]; NaN outside [-1, 1]
    fn acos(d: f64) -> f64;

    /// Arctangent in [-π/2, π/2]; ±π/2 for ±∞
    fn atan(d: f64) -> f64;

    /// Angle of the point (x, y) in [-π, π]
    fn atan2(y: f64, x: f64) -> f64;

    // Hyperbolic

    /// Hyperbolic sine
    fn sinh(value: f64) -> f64;

    /// Hyperbolic cosine; +∞ for ±∞
    fn cosh(value: f64) -> f64;

    /// Hyperbolic tangent; ±1 for ±∞
    fn tanh(value: f64) -> f64;

    // Exponential and logarithmic

    /// e raised to `d`; 0 for -∞
    fn exp(d: f64) -> f64;

    /// Natural logarithm
    fn log(d: f64) -> f64;

    /// Base-10 logarithm
    fn log10(d: f64) -> f64;

    /// Cube root
    fn cbrt(d: f64) -> f64;

    /// `x` raised to `y`
    fn pow(x: f64, y: f64) -> f64;

    /// Positive square root
    fn sqrt(d: f64) -> f64;

    // Rounding

    /// Smallest integral value >= `d`; NaN and ±∞ returned unchanged
    fn ceiling(d: f64) -> f64;

    /// Largest integral value <= `d`; NaN and ±∞ returned unchanged
    fn floor(d: f64) -> f64;

    /// Nearest integral value, ties to even
    fn round(a: f64) -> f64;

    /// Integral part of `d`
    fn truncate(d: f64) -> f64;

    /// `x - y * Q` where `Q` is `x / y` rounded to nearest, ties to even
    ///
    /// NaN when `y` is zero. A zero result carries the sign of `x`.
    fn ieee_remainder(x: f64, y: f64) -> f64;

    // Magnitude, sign and ordering

    /// Absolute value of a double (clears the sign bit)
    fn abs(value: f64) -> f64;

    /// Absolute value of a single (clears the sign bit)
    fn abs_f32(value: f32) -> f32;

    /// -1, 0 or 1 by the sign of `value`, both zeros mapping to 0
    ///
    /// # Errors
    ///
    /// [`MathError::NanDomain`](crate::MathError::NanDomain) when `value` is NaN.
    fn sign(value: f64) -> Result<i32>;

    /// Larger operand; NaN if either operand is NaN
    ///
    /// +0 is considered larger than -0.
    fn max(val1: f64, val2: f64) -> f64;

    /// Smaller operand; NaN if either operand is NaN
    ///
    /// -0 is considered smaller than +0.
    fn min(val1: f64, val2: f64) -> f64;

    // Native-width integers

    /// Magnitude of `value`
    ///
    /// Callers guarantee `value != i32::MIN`.
    fn abs_i32(value: i32) -> i32;

    /// Larger of two integers
    fn max_i32(val1: i32, val2: i32) -> i32;

    /// Smaller of two integers
    fn min_i32(val1: i32, val2: i32) -> i32;
}

/// Range clamping with a fallible bound check
///
/// Implemented for `f64`, `f32` and every primitive integer.
pub trait Clamp: Copy {
    /// Constrain `self` to `[min, max]`
    ///
    /// # Errors
    ///
    /// [`MathError::InvalidArgument`](crate::MathError::InvalidArgument) when
    /// `max < min`.
    fn clamp_to(self, min: Self, max: Self) -> Result<Self>;
}

/// Two-operand ordering resolved through a provider
pub trait MinMax: Copy {
    /// Larger of `self` and `other`
    fn max_with<P: PrimitiveProvider>(self, other: Self) -> Self;

    /// Smaller of `self` and `other`
    fn min_with<P: PrimitiveProvider>(self, other: Self) -> Self;
}

/// Sign classification resolved through a provider
pub trait Sign: Copy {
    /// -1, 0 or 1
    ///
    /// # Errors
    ///
    /// [`MathError::NanDomain`](crate::MathError::NanDomain) for NaN input.
    fn sign_with<P: PrimitiveProvider>(self) -> Result<i32>;
}

/// Magnitude resolved through a provider
pub trait Abs: Copy {
    /// Result type; fallible for integers, plain for floats
    type Output;

    /// Non-negative magnitude of `self`
    fn abs_with<P: PrimitiveProvider>(self) -> Self::Output;
}
