//! Range clamping with explicit NaN policy
//!
//! The bound check (`max < min`) runs first under the domain's own ordering.
//! For floats a NaN bound never satisfies that comparison, so it falls
//! through to the NaN policy, which resolves in this order:
//!
//! | value | min | max | result |
//! |-------|-----|-----|--------|
//! | NaN   | any | any | NaN |
//! | x     | NaN | NaN | x |
//! | x     | NaN | hi  | `x` if `x <= hi`, else `hi` |
//! | x     | lo  | NaN | `x` if `x >= lo`, else `lo` |
//! | x     | lo  | hi  | ordinary clamp |
//!
//! A NaN bound means "no constraint on this side"; only a NaN value yields a
//! NaN result.
//!
//! # Example
//!
//! ```rust
//! use prim_math::clamp::{clamp_f64, clamp_u64};
//!
//! assert_eq!(clamp_f64(3.0, f64::NAN, 2.0), Ok(2.0));
//! assert_eq!(clamp_f64(3.0, 5.0, f64::NAN), Ok(5.0));
//! assert!(clamp_u64(1, 9, 4).is_err());
//! ```

use num_traits::PrimInt;

use crate::error::{MathError, Result};
use crate::traits::Clamp;
use crate::widen::{narrow, promote};

/// Clamp a double to `[min, max]`
///
/// # Errors
///
/// [`MathError::InvalidArgument`] when `max < min`.
pub fn clamp_f64(value: f64, min: f64, max: f64) -> Result<f64> {
    if max < min {
        return Err(MathError::InvalidArgument { min, max });
    }

    if value.is_nan() {
        return Ok(value);
    }

    let clamped = match (min.is_nan(), max.is_nan()) {
        (true, true) => value,
        (true, false) => {
            if value > max {
                max
            } else {
                value
            }
        }
        (false, true) => {
            if value < min {
                min
            } else {
                value
            }
        }
        (false, false) => {
            if value < min {
                min
            } else if value > max {
                max
            } else {
                value
            }
        }
    };

    Ok(clamped)
}

/// Clamp a single to `[min, max]` by way of [`clamp_f64`]
///
/// # Errors
///
/// [`MathError::InvalidArgument`] when `max < min`.
pub fn clamp_f32(value: f32, min: f32, max: f32) -> Result<f32> {
    clamp_f64(promote(value), promote(min), promote(max)).map(narrow)
}

/// Clamp any primitive integer to `[min, max]`
///
/// # Errors
///
/// [`MathError::InvalidArgument`] when `max < min`.
pub fn clamp_int<T: PrimInt>(value: T, min: T, max: T) -> Result<T> {
    if max < min {
        return Err(MathError::InvalidArgument {
            min: min.to_f64().unwrap_or(f64::NAN),
            max: max.to_f64().unwrap_or(f64::NAN),
        });
    }

    Ok(if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    })
}

/// Clamp a signed 64-bit integer
///
/// # Errors
///
/// [`MathError::InvalidArgument`] when `max < min`.
#[inline]
pub fn clamp_i64(value: i64, min: i64, max: i64) -> Result<i64> {
    clamp_int(value, min, max)
}

/// Clamp an unsigned 64-bit integer
///
/// # Errors
///
/// [`MathError::InvalidArgument`] when `max < min`.
#[inline]
pub fn clamp_u64(value: u64, min: u64, max: u64) -> Result<u64> {
    clamp_int(value, min, max)
}

impl Clamp for f64 {
    #[inline]
    fn clamp_to(self, min: Self, max: Self) -> Result<Self> {
        clamp_f64(self, min, max)
    }
}

impl Clamp for f32 {
    #[inline]
    fn clamp_to(self, min: Self, max: Self) -> Result<Self> {
        clamp_f32(self, min, max)
    }
}

macro_rules! impl_clamp_for_int {
    ($($t:ty),*) => {
        $(
            impl Clamp for $t {
                #[inline]
                fn clamp_to(self, min: Self, max: Self) -> Result<Self> {
                    clamp_int(self, min, max)
                }
            }
        )*
    };
}

impl_clamp_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
