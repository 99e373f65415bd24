//! Platform provider backed by the standard library
//!
//! The inherent `f64` methods in `std` call into the platform math runtime
//! (the system libm, or compiler intrinsics where the target has them).
//! Only available with the `std` feature.

use crate::backends::{maximum, minimum, signum_i32};
use crate::error::Result;
use crate::traits::PrimitiveProvider;

/// Provider that relays to the platform math runtime through `std`
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct StdProvider;

impl PrimitiveProvider for StdProvider {
    const NAME: &'static str = "std";

    #[inline(always)]
    fn sin(a: f64) -> f64 {
        a.sin()
    }

    #[inline(always)]
    fn cos(a: f64) -> f64 {
        a.cos()
    }

    #[inline(always)]
    fn tan(a: f64) -> f64 {
        a.tan()
    }

    #[inline(always)]
    fn asin(d: f64) -> f64 {
        d.asin()
    }

    #[inline(always)]
    fn acos(d: f64) -> f64 {
        d.acos()
    }

    #[inline(always)]
    fn atan(d: f64) -> f64 {
        d.atan()
    }

    #[inline(always)]
    fn atan2(y: f64, x: f64) -> f64 {
        y.atan2(x)
    }

    #[inline(always)]
    fn sinh(value: f64) -> f64 {
        value.sinh()
    }

    #[inline(always)]
    fn cosh(value: f64) -> f64 {
        value.cosh()
    }

    #[inline(always)]
    fn tanh(value: f64) -> f64 {
        value.tanh()
    }

    #[inline(always)]
    fn exp(d: f64) -> f64 {
        d.exp()
    }

    #[inline(always)]
    fn log(d: f64) -> f64 {
        d.ln()
    }

    #[inline(always)]
    fn log10(d: f64) -> f64 {
        d.log10()
    }

    #[inline(always)]
    fn cbrt(d: f64) -> f64 {
        d.cbrt()
    }

    #[inline(always)]
    fn pow(x: f64, y: f64) -> f64 {
        x.powf(y)
    }

    #[inline(always)]
    fn sqrt(d: f64) -> f64 {
        d.sqrt()
    }

    #[inline(always)]
    fn ceiling(d: f64) -> f64 {
        d.ceil()
    }

    #[inline(always)]
    fn floor(d: f64) -> f64 {
        d.floor()
    }

    #[inline(always)]
    fn round(a: f64) -> f64 {
        // f64::round breaks ties away from zero
        a.round_ties_even()
    }

    #[inline(always)]
    fn truncate(d: f64) -> f64 {
        d.trunc()
    }

    #[inline(always)]
    fn ieee_remainder(x: f64, y: f64) -> f64 {
        // Not exposed by std
        libm::remainder(x, y)
    }

    #[inline(always)]
    fn abs(value: f64) -> f64 {
        value.abs()
    }

    #[inline(always)]
    fn abs_f32(value: f32) -> f32 {
        value.abs()
    }

    #[inline(always)]
    fn sign(value: f64) -> Result<i32> {
        signum_i32(value)
    }

    #[inline(always)]
    fn max(val1: f64, val2: f64) -> f64 {
        // f64::max ignores NaN; f64::maximum is not stable
        maximum(val1, val2)
    }

    #[inline(always)]
    fn min(val1: f64, val2: f64) -> f64 {
        minimum(val1, val2)
    }

    #[inline(always)]
    fn abs_i32(value: i32) -> i32 {
        value.wrapping_abs()
    }

    #[inline(always)]
    fn max_i32(val1: i32, val2: i32) -> i32 {
        Ord::max(val1, val2)
    }

    #[inline(always)]
    fn min_i32(val1: i32, val2: i32) -> i32 {
        Ord::min(val1, val2)
    }
}
