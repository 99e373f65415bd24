//! Transcendental and rounding relay
//!
//! Double-precision entry points forward unchanged to the provider. Each one
//! has a single-precision twin (`*_f32`) built by promoting the operands,
//! calling the double-precision primitive and narrowing the result, so NaN
//! and ±∞ keep their classification and finite results beyond `f32::MAX`
//! narrow to ±∞.
//!
//! # Example
//!
//! ```rust
//! use prim_math::relay::{round, sqrt_f32};
//! use prim_math::LibmProvider;
//!
//! assert_eq!(round::<LibmProvider>(3.5), 4.0);
//! assert_eq!(sqrt_f32::<LibmProvider>(16.0), 4.0);
//! ```

use crate::traits::PrimitiveProvider;
use crate::widen::{narrowed_binary, narrowed_unary};

macro_rules! unary_relay {
    ($($(#[$doc:meta])* $name:ident, $name_f32:ident;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name<P: PrimitiveProvider>(x: f64) -> f64 {
                P::$name(x)
            }

            #[doc = concat!("Single-precision [`", stringify!($name), "`], computed in double precision")]
            #[inline]
            pub fn $name_f32<P: PrimitiveProvider>(x: f32) -> f32 {
                narrowed_unary(P::$name)(x)
            }
        )*
    };
}

macro_rules! binary_relay {
    ($($(#[$doc:meta])* $name:ident($a:ident, $b:ident), $name_f32:ident;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name<P: PrimitiveProvider>($a: f64, $b: f64) -> f64 {
                P::$name($a, $b)
            }

            #[doc = concat!("Single-precision [`", stringify!($name), "`], computed in double precision")]
            #[inline]
            pub fn $name_f32<P: PrimitiveProvider>($a: f32, $b: f32) -> f32 {
                narrowed_binary(P::$name)($a, $b)
            }
        )*
    };
}

unary_relay! {
    /// Sine of an angle in radians
    sin, sin_f32;
    /// Cosine of an angle in radians
    cos, cos_f32;
    /// Tangent of an angle in radians
    tan, tan_f32;
    /// Angle whose sine is `x`
    asin, asin_f32;
    /// Angle whose cosine is `x`
    acos, acos_f32;
    /// Angle whose tangent is `x`
    atan, atan_f32;
    /// Hyperbolic sine
    sinh, sinh_f32;
    /// Hyperbolic cosine
    cosh, cosh_f32;
    /// Hyperbolic tangent
    tanh, tanh_f32;
    /// e raised to `x`
    exp, exp_f32;
    /// Natural logarithm
    log, log_f32;
    /// Base-10 logarithm
    log10, log10_f32;
    /// Cube root
    cbrt, cbrt_f32;
    /// Positive square root
    sqrt, sqrt_f32;
    /// Round toward +∞
    ceiling, ceiling_f32;
    /// Round toward -∞
    floor, floor_f32;
    /// Round to nearest, ties to even
    round, round_f32;
    /// Round toward zero
    truncate, truncate_f32;
}

binary_relay! {
    /// Angle of the point (x, y)
    atan2(y, x), atan2_f32;
    /// `x` raised to `y`
    pow(x, y), pow_f32;
    /// IEEE 754 remainder of `x / y`
    ieee_remainder(x, y), ieee_remainder_f32;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LibmProvider;

    #[test]
    fn test_f32_overflow_narrows_to_infinity() {
        assert_eq!(exp_f32::<LibmProvider>(100.0), f32::INFINITY);
        assert_eq!(pow_f32::<LibmProvider>(10.0, 39.0), f32::INFINITY);
        assert_eq!(exp::<LibmProvider>(100.0), libm::exp(100.0));
    }

    #[test]
    fn test_f32_specials_keep_classification() {
        assert!(sin_f32::<LibmProvider>(f32::INFINITY).is_nan());
        assert!(log_f32::<LibmProvider>(-1.0).is_nan());
        assert_eq!(log_f32::<LibmProvider>(0.0), f32::NEG_INFINITY);
        assert_eq!(floor_f32::<LibmProvider>(f32::NEG_INFINITY), f32::NEG_INFINITY);
    }

    #[test]
    fn test_atan2_argument_order() {
        assert_eq!(atan2::<LibmProvider>(1.0, 0.0), crate::PI / 2.0);
        assert_eq!(atan2::<LibmProvider>(0.0, -1.0), crate::PI);
    }
}
