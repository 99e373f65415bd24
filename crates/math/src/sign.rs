//! Sign classification and magnitude
//!
//! `sign` partitions its domain into negative (-1), zero (0, for both +0 and
//! -0) and positive (1). NaN is outside the domain and is a hard failure, unlike
//! Min, Max and Clamp which carry NaN through silently.
//!
//! `abs_i32` fails for `i32::MIN` rather than wrapping back to a negative
//! value.

use crate::error::{MathError, Result};
use crate::traits::{Abs, PrimitiveProvider, Sign};
use crate::widen::promote;

/// Sign of a double
///
/// # Errors
///
/// [`MathError::NanDomain`] when `value` is NaN.
///
/// # Example
///
/// ```rust
/// use prim_math::sign::sign_f64;
/// use prim_math::{LibmProvider, MathError};
///
/// assert_eq!(sign_f64::<LibmProvider>(-3.5), Ok(-1));
/// assert_eq!(sign_f64::<LibmProvider>(f64::NAN), Err(MathError::NanDomain));
/// ```
#[inline]
pub fn sign_f64<P: PrimitiveProvider>(value: f64) -> Result<i32> {
    P::sign(value)
}

/// Sign of a single, classified in double precision
///
/// # Errors
///
/// [`MathError::NanDomain`] when `value` is NaN, exactly as [`sign_f64`].
#[inline]
pub fn sign_f32<P: PrimitiveProvider>(value: f32) -> Result<i32> {
    P::sign(promote(value))
}

/// Magnitude of an `i32`
///
/// # Errors
///
/// [`MathError::Overflow`] for `i32::MIN`, whose magnitude needs 32 value bits.
///
/// # Example
///
/// ```rust
/// use prim_math::sign::abs_i32;
/// use prim_math::LibmProvider;
///
/// assert_eq!(abs_i32::<LibmProvider>(-7), Ok(7));
/// assert!(abs_i32::<LibmProvider>(i32::MIN).is_err());
/// ```
#[inline]
pub fn abs_i32<P: PrimitiveProvider>(value: i32) -> Result<i32> {
    if value == i32::MIN {
        return Err(MathError::Overflow {
            value: i64::from(value),
        });
    }
    Ok(P::abs_i32(value))
}

/// Magnitude of a double
#[inline]
pub fn abs_f64<P: PrimitiveProvider>(value: f64) -> f64 {
    P::abs(value)
}

/// Magnitude of a single
#[inline]
pub fn abs_f32<P: PrimitiveProvider>(value: f32) -> f32 {
    P::abs_f32(value)
}

impl Sign for f64 {
    #[inline]
    fn sign_with<P: PrimitiveProvider>(self) -> Result<i32> {
        sign_f64::<P>(self)
    }
}

impl Sign for f32 {
    #[inline]
    fn sign_with<P: PrimitiveProvider>(self) -> Result<i32> {
        sign_f32::<P>(self)
    }
}

impl Abs for i32 {
    type Output = Result<i32>;

    #[inline]
    fn abs_with<P: PrimitiveProvider>(self) -> Self::Output {
        abs_i32::<P>(self)
    }
}

impl Abs for f64 {
    type Output = f64;

    #[inline]
    fn abs_with<P: PrimitiveProvider>(self) -> Self::Output {
        abs_f64::<P>(self)
    }
}

impl Abs for f32 {
    type Output = f32;

    #[inline]
    fn abs_with<P: PrimitiveProvider>(self) -> Self::Output {
        abs_f32::<P>(self)
    }
}
