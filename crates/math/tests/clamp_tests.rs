//! Clamp edge-case tests
//!
//! Covers the bound check, every row of the NaN policy table and the
//! single-precision and integer specializations.


use prim_math::clamp::{clamp_f32, clamp_f64, clamp_i64, clamp_u64};
use prim_math::{Math, MathError, MathErrorCode};
use test_utils::*;

#[test]
fn test_nan_value_is_contagious() {
    assert!(clamp_f64(f64::NAN, 1.0, 5.0).unwrap().is_nan());
    assert!(clamp_f64(f64::NAN, f64::NAN, 5.0).unwrap().is_nan());
    assert!(clamp_f64(f64::NAN, 1.0, f64::NAN).unwrap().is_nan());
    assert!(clamp_f64(f64::NAN, f64::NAN, f64::NAN).unwrap().is_nan());
}

#[test]
fn test_nan_bound_table() {
    assert_eq!(clamp_f64(3.0, f64::NAN, 5.0), Ok(3.0));
    assert_eq!(clamp_f64(3.0, f64::NAN, 2.0), Ok(2.0));
    assert_eq!(clamp_f64(3.0, f64::NAN, 3.0), Ok(3.0));
    assert_eq!(clamp_f64(3.0, 5.0, f64::NAN), Ok(5.0));
    assert_eq!(clamp_f64(3.0, 1.0, f64::NAN), Ok(3.0));
    assert_eq!(clamp_f64(3.0, f64::NAN, f64::NAN), Ok(3.0));
    assert_eq!(
        clamp_f64(f64::NEG_INFINITY, f64::NAN, f64::NAN),
        Ok(f64::NEG_INFINITY)
    );
}

#[test]
fn test_ordinary_clamp() {
    assert_eq!(clamp_f64(-4.0, -1.0, 1.0), Ok(-1.0));
    assert_eq!(clamp_f64(4.0, -1.0, 1.0), Ok(1.0));
    assert_eq!(clamp_f64(0.25, -1.0, 1.0), Ok(0.25));
    assert_eq!(clamp_f64(1.0, -1.0, 1.0), Ok(1.0));
}

#[test]
fn test_inverted_bounds_fail() {
    let err = clamp_f64(0.0, 2.0, 1.0).unwrap_err();
    assert_eq!(err, MathError::InvalidArgument { min: 2.0, max: 1.0 });
    assert_eq!(err.code(), MathErrorCode::InvalidArgument);

    assert!(clamp_f64(f64::NAN, 2.0, 1.0).is_err());
    assert!(clamp_f64(0.0, f64::INFINITY, f64::NEG_INFINITY).is_err());
    assert!(clamp_f32(0.0, 2.0, 1.0).is_err());
    assert!(clamp_i64(0, 2, 1).is_err());
    assert!(clamp_u64(0, 2, 1).is_err());
}

#[test]
fn test_signed_zero_bounds_are_equal() {
    // -0 < +0 is false, so neither order is an inverted range
    assert!(clamp_f64(1.0, 0.0, -0.0).is_ok());
    assert_same_f64(clamp_f64(-0.0, 0.0, 1.0).unwrap(), -0.0, "-0 stays in [+0, 1]");
    assert_same_f64(clamp_f64(-1.0, 0.0, 1.0).unwrap(), 0.0, "below +0 clamps to +0");
}

#[test]
fn test_f32_matches_narrowed_f64() {
    for &value in SAMPLE_F32 {
        for &min in SAMPLE_F32 {
            for &max in SAMPLE_F32 {
                let single = clamp_f32(value, min, max);
                let double = clamp_f64(value as f64, min as f64, max as f64);
                match (single, double) {
                    (Ok(s), Ok(d)) => assert_same_f32(
                        s,
                        d as f32,
                        &format!("clamp({value}, {min}, {max})"),
                    ),
                    (Err(_), Err(_)) => {}
                    (s, d) => panic!("clamp({value}, {min}, {max}): f32 {s:?} vs f64 {d:?}"),
                }
            }
        }
    }
}

#[test]
fn test_f32_nan_policy() {
    assert!(clamp_f32(f32::NAN, 1.0, 5.0).unwrap().is_nan());
    assert_eq!(clamp_f32(3.0, f32::NAN, 5.0), Ok(3.0));
    assert_eq!(clamp_f32(3.0, f32::NAN, 2.0), Ok(2.0));
    assert_eq!(clamp_f32(3.0, 5.0, f32::NAN), Ok(5.0));
    assert_eq!(clamp_f32(3.0, f32::NAN, f32::NAN), Ok(3.0));
}

#[test]
fn test_integer_extremes() {
    assert_eq!(clamp_i64(i64::MIN, -5, 5), Ok(-5));
    assert_eq!(clamp_i64(i64::MAX, -5, 5), Ok(5));
    assert_eq!(clamp_i64(0, i64::MIN, i64::MAX), Ok(0));
    assert_eq!(clamp_u64(u64::MAX, 0, u64::MAX - 1), Ok(u64::MAX - 1));
    assert_eq!(clamp_u64(0, 1, 1), Ok(1));
}

#[test]
fn test_facade_dispatches_by_width() {
    assert_eq!(Math::clamp(10i64, 0, 3), Ok(3));
    assert_eq!(Math::clamp(10u64, 0, 3), Ok(3));
    assert_eq!(Math::clamp(10.0f64, 0.0, 3.0), Ok(3.0));
    assert_eq!(Math::clamp(10.0f32, 0.0, 3.0), Ok(3.0));
    assert_eq!(Math::clamp(-10i32, 0, 3), Ok(0));
}
