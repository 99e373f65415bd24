//! Entry-point facade
//!
//! [`MathWith`] gathers every entry point behind one type parameterised by the
//! provider. [`Math`](crate::Math) is the same facade over
//! [`DefaultProvider`](crate::DefaultProvider).
//!
//! Width overloads resolve through the [`Clamp`], [`MinMax`], [`Sign`] and
//! [`Abs`] traits, so one name covers every supported domain.
//!
//! # Example
//!
//! ```rust
//! use prim_math::{LibmProvider, Math, MathWith};
//!
//! assert_eq!(Math::clamp(3.0f32, f32::NAN, 2.0), Ok(2.0));
//! assert_eq!(Math::clamp(9u64, 1, 4), Ok(4));
//! assert!(Math::max(f64::NAN, 5.0).is_nan());
//! assert_eq!(Math::sign(-0.0f32), Ok(0));
//! assert_eq!(MathWith::<LibmProvider>::floor(-1.5), -2.0);
//! ```

use core::marker::PhantomData;

use crate::error::Result;
use crate::relay;
use crate::traits::{Abs, Clamp, MinMax, PrimitiveProvider, Sign};

/// Composition layer over the provider `P`
///
/// Never instantiated; all entry points are associated functions.
#[derive(Debug, Copy, Clone)]
pub struct MathWith<P: PrimitiveProvider>(PhantomData<P>);

macro_rules! facade_unary {
    ($($name:ident, $name_f32:ident;)*) => {
        $(
            #[doc = concat!("See [`relay::", stringify!($name), "`]")]
            #[inline]
            pub fn $name(x: f64) -> f64 {
                relay::$name::<P>(x)
            }

            #[doc = concat!("See [`relay::", stringify!($name_f32), "`]")]
            #[inline]
            pub fn $name_f32(x: f32) -> f32 {
                relay::$name_f32::<P>(x)
            }
        )*
    };
}

macro_rules! facade_binary {
    ($($name:ident($a:ident, $b:ident), $name_f32:ident;)*) => {
        $(
            #[doc = concat!("See [`relay::", stringify!($name), "`]")]
            #[inline]
            pub fn $name($a: f64, $b: f64) -> f64 {
                relay::$name::<P>($a, $b)
            }

            #[doc = concat!("See [`relay::", stringify!($name_f32), "`]")]
            #[inline]
            pub fn $name_f32($a: f32, $b: f32) -> f32 {
                relay::$name_f32::<P>($a, $b)
            }
        )*
    };
}

impl<P: PrimitiveProvider> MathWith<P> {
    /// Ratio of a circle's circumference to its diameter
    pub const PI: f64 = crate::PI;

    /// Base of the natural logarithm
    pub const E: f64 = crate::E;

    /// Magnitude of `value`
    ///
    /// Returns `Result<i32>` for `i32` (failing on `i32::MIN`) and a plain
    /// float for `f64`/`f32`.
    #[inline]
    pub fn abs<T: Abs>(value: T) -> T::Output {
        value.abs_with::<P>()
    }

    /// `value` constrained to `[min, max]`
    ///
    /// # Errors
    ///
    /// [`MathError::InvalidArgument`](crate::MathError::InvalidArgument) when
    /// `max < min`.
    #[inline]
    pub fn clamp<T: Clamp>(value: T, min: T, max: T) -> Result<T> {
        value.clamp_to(min, max)
    }

    /// Larger of two values; NaN if either float operand is NaN
    #[inline]
    pub fn max<T: MinMax>(val1: T, val2: T) -> T {
        val1.max_with::<P>(val2)
    }

    /// Smaller of two values; NaN if either float operand is NaN
    #[inline]
    pub fn min<T: MinMax>(val1: T, val2: T) -> T {
        val1.min_with::<P>(val2)
    }

    /// -1, 0 or 1 by the sign of `value`
    ///
    /// # Errors
    ///
    /// [`MathError::NanDomain`](crate::MathError::NanDomain) for NaN.
    #[inline]
    pub fn sign<T: Sign>(value: T) -> Result<i32> {
        value.sign_with::<P>()
    }

    facade_unary! {
        sin, sin_f32;
        cos, cos_f32;
        tan, tan_f32;
        asin, asin_f32;
        acos, acos_f32;
        atan, atan_f32;
        sinh, sinh_f32;
        cosh, cosh_f32;
        tanh, tanh_f32;
        exp, exp_f32;
        log, log_f32;
        log10, log10_f32;
        cbrt, cbrt_f32;
        sqrt, sqrt_f32;
        ceiling, ceiling_f32;
        floor, floor_f32;
        round, round_f32;
        truncate, truncate_f32;
    }

    facade_binary! {
        atan2(y, x), atan2_f32;
        pow(x, y), pow_f32;
        ieee_remainder(x, y), ieee_remainder_f32;
    }
}
