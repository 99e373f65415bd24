//! Software provider backed by `libm`
//!
//! This provider works on any target, including `no_std`, and serves as the
//! reference implementation the other providers are checked against.

use crate::backends::{maximum, minimum, signum_i32};
use crate::error::Result;
use crate::traits::PrimitiveProvider;

/// Pure-Rust provider built on the `libm` port of musl's math library
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct LibmProvider;

impl PrimitiveProvider for LibmProvider {
    const NAME: &'static str = "libm";

    #[inline(always)]
    fn sin(a: f64) -> f64 {
        libm::sin(a)
    }

    #[inline(always)]
    fn cos(a: f64) -> f64 {
        libm::cos(a)
    }

    #[inline(always)]
    fn tan(a: f64) -> f64 {
        libm::tan(a)
    }

    #[inline(always)]
    fn asin(d: f64) -> f64 {
        libm::asin(d)
    }

    #[inline(always)]
    fn acos(d: f64) -> f64 {
        libm::acos(d)
    }

    #[inline(always)]
    fn atan(d: f64) -> f64 {
        libm::atan(d)
    }

    #[inline(always)]
    fn atan2(y: f64, x: f64) -> f64 {
        libm::atan2(y, x)
    }

    #[inline(always)]
    fn sinh(value: f64) -> f64 {
        libm::sinh(value)
    }

    #[inline(always)]
    fn cosh(value: f64) -> f64 {
        libm::cosh(value)
    }

    #[inline(always)]
    fn tanh(value: f64) -> f64 {
        libm::tanh(value)
    }

    #[inline(always)]
    fn exp(d: f64) -> f64 {
        libm::exp(d)
    }

    #[inline(always)]
    fn log(d: f64) -> f64 {
        libm::log(d)
    }

    #[inline(always)]
    fn log10(d: f64) -> f64 {
        libm::log10(d)
    }

    #[inline(always)]
    fn cbrt(d: f64) -> f64 {
        libm::cbrt(d)
    }

    #[inline(always)]
    fn pow(x: f64, y: f64) -> f64 {
        libm::pow(x, y)
    }

    #[inline(always)]
    fn sqrt(d: f64) -> f64 {
        libm::sqrt(d)
    }

    #[inline(always)]
    fn ceiling(d: f64) -> f64 {
        libm::ceil(d)
    }

    #[inline(always)]
    fn floor(d: f64) -> f64 {
        libm::floor(d)
    }

    #[inline(always)]
    fn round(a: f64) -> f64 {
        // rint honours the current rounding mode, which is ties-to-even
        libm::rint(a)
    }

    #[inline(always)]
    fn truncate(d: f64) -> f64 {
        libm::trunc(d)
    }

    #[inline(always)]
    fn ieee_remainder(x: f64, y: f64) -> f64 {
        libm::remainder(x, y)
    }

    #[inline(always)]
    fn abs(value: f64) -> f64 {
        libm::fabs(value)
    }

    #[inline(always)]
    fn abs_f32(value: f32) -> f32 {
        libm::fabsf(value)
    }

    #[inline(always)]
    fn sign(value: f64) -> Result<i32> {
        signum_i32(value)
    }

    #[inline(always)]
    fn max(val1: f64, val2: f64) -> f64 {
        // libm::fmax drops NaN operands, which is the opposite of the contract
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
        if val1 > val2 {
            val1
        } else {
            val2
        }
    }

    #[inline(always)]
    fn min_i32(val1: i32, val2: i32) -> i32 {
        if val1 < val2 {
            val1
        } else {
            val2
        }
    }
}
