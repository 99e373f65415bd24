//! Primitive provider implementations
//!
//! Providers are selected at compile time via cargo features; the composition
//! layer only sees the [`PrimitiveProvider`](crate::PrimitiveProvider) trait.
//!
//! Both providers share the ordering and sign rules below so that switching
//! providers never changes a NaN, signed-zero or sign outcome.

use crate::error::{MathError, Result};

// Software provider (always available, no_std)
pub mod soft;

// Platform math runtime (needs std)
#[cfg(feature = "std")]
pub mod platform;

/// IEEE 754-2019 `maximum`: NaN-propagating, +0 above -0
#[inline(always)]
pub(crate) fn maximum(val1: f64, val2: f64) -> f64 {
    if val1.is_nan() || val2.is_nan() {
        // Let the hardware pick which NaN payload survives.
        return val1 + val2;
    }
    if val1 == val2 {
        // Only differs for a pair of opposite zeros
        return if val1.is_sign_negative() { val2 } else { val1 };
    }
    if val1 > val2 {
        val1
    } else {
        val2
    }
}

/// IEEE 754-2019 `minimum`: NaN-propagating, -0 below +0
#[inline(always)]
pub(crate) fn minimum(val1: f64, val2: f64) -> f64 {
    if val1.is_nan() || val2.is_nan() {
        return val1 + val2;
    }
    if val1 == val2 {
        return if val1.is_sign_negative() { val1 } else { val2 };
    }
    if val1 < val2 {
        val1
    } else {
        val2
    }
}

/// Three-way sign with zeros of either sign mapping to 0
#[inline(always)]
pub(crate) fn signum_i32(value: f64) -> Result<i32> {
    if value.is_nan() {
        Err(MathError::NanDomain)
    } else if value > 0.0 {
        Ok(1)
    } else if value < 0.0 {
        Ok(-1)
    } else {
        Ok(0)
    }
}
