//! Single-to-double promotion and double-to-single narrowing
//!
//! Every `f32` entry point that has no native primitive is built the same way:
//! promote the operands to `f64`, run the `f64` operation, narrow the result.
//!
//! Promotion is exact: every `f32` (including subnormals, ±0, ±∞) has an `f64`
//! with the same value, and NaN stays NaN. Narrowing rounds to nearest, ties to
//! even; values beyond `f32::MAX` become ±∞ and NaN stays NaN. Because an `f64`
//! result of an exact operation on promoted `f32` operands is itself one of the
//! operands (min, max, clamp) or a small integer (sign), the round-trip adds no
//! rounding for those entry points.
//!
//! # Example
//!
//! ```rust
//! use prim_math::widen::{narrow, narrowed_binary, promote};
//!
//! assert_eq!(narrow(promote(0.1f32)), 0.1f32);
//! let sum_sq = narrowed_binary(|x, y| x * x + y * y);
//! assert_eq!(sum_sq(3.0, 4.0), 25.0);
//! ```

/// Widen an `f32` to `f64` without loss
#[inline(always)]
pub fn promote(value: f32) -> f64 {
    value as f64
}

/// Narrow an `f64` to `f32`, rounding to nearest even
#[inline(always)]
pub fn narrow(value: f64) -> f32 {
    value as f32
}

/// Lift a unary `f64` function into its `f32` counterpart
#[inline(always)]
pub fn narrowed_unary<F>(op: F) -> impl Fn(f32) -> f32
where
    F: Fn(f64) -> f64,
{
    move |x| narrow(op(promote(x)))
}

/// Lift a binary `f64` function into its `f32` counterpart
#[inline(always)]
pub fn narrowed_binary<F>(op: F) -> impl Fn(f32, f32) -> f32
where
    F: Fn(f64, f64) -> f64,
{
    move |x, y| narrow(op(promote(x), promote(y)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specials_survive_round_trip() {
        for v in [
            0.0f32,
            -0.0,
            f32::INFINITY,
            f32::NEG_INFINITY,
            f32::MAX,
            f32::MIN,
            f32::MIN_POSITIVE,
            f32::from_bits(1),
        ] {
            assert_eq!(narrow(promote(v)).to_bits(), v.to_bits());
        }
        assert!(narrow(promote(f32::NAN)).is_nan());
    }

    #[test]
    fn test_narrow_overflows_to_infinity() {
        assert_eq!(narrow(f64::MAX), f32::INFINITY);
        assert_eq!(narrow(-f64::MAX), f32::NEG_INFINITY);
        assert_eq!(narrow(1e-60), 0.0);
    }

    #[test]
    fn test_narrowed_unary_applies_in_double() {
        let half = narrowed_unary(|x| x / 2.0);
        assert_eq!(half(3.0), 1.5);
        assert!(half(f32::NAN).is_nan());
    }
}
