//! Error type for the fallible entry points
//!
//! # Error Codes
//!
//! | Code | Description |
//! |------|-------------|
//! | M001 | Clamp called with `max < min` |
//! | M002 | Sign called with NaN |
//! | M003 | Integer Abs of the minimum representable value |

use core::fmt;

/// Result alias used by every fallible entry point
pub type Result<T> = core::result::Result<T, MathError>;

/// Stable error codes for programmatic handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathErrorCode {
    /// M001: upper bound below lower bound
    InvalidArgument,
    /// M002: NaN has no sign
    NanDomain,
    /// M003: magnitude not representable in the input width
    Overflow,
}

impl MathErrorCode {
    /// Get the error code string (e.g., "M001").
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "M001",
            Self::NanDomain => "M002",
            Self::Overflow => "M003",
        }
    }

    /// Get guidance on how to fix this error.
    pub fn guidance(&self) -> &'static str {
        match self {
            Self::InvalidArgument => {
                "Pass bounds with min <= max. A NaN bound is accepted and treated as absent."
            }
            Self::NanDomain => "Check the input with is_nan() before asking for its sign.",
            Self::Overflow => {
                "The minimum value has no positive counterpart in the same width; widen to i64 first."
            }
        }
    }
}

impl fmt::Display for MathErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Failure raised synchronously by an entry point
///
/// NaN inputs to Min, Max and Clamp, infinities and signed zeros are never
/// errors; they have defined results.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum MathError {
    /// Clamp bounds are out of order.
    ///
    /// Bounds are widened to `f64` for reporting; `u64`/`i64` bounds beyond
    /// 2^53 display rounded.
    #[error("[M001] clamp bounds out of order: max ({max}) < min ({min})")]
    InvalidArgument {
        /// Lower bound as passed
        min: f64,
        /// Upper bound as passed
        max: f64,
    },

    /// Sign requested for NaN.
    #[error("[M002] sign is undefined for NaN")]
    NanDomain,

    /// Integer magnitude does not fit in the input width.
    #[error("[M003] absolute value of {value} overflows")]
    Overflow {
        /// The offending input
        value: i64,
    },
}

impl MathError {
    /// Error code for this failure.
    pub fn code(&self) -> MathErrorCode {
        match self {
            Self::InvalidArgument { .. } => MathErrorCode::InvalidArgument,
            Self::NanDomain => MathErrorCode::NanDomain,
            Self::Overflow { .. } => MathErrorCode::Overflow,
        }
    }

    /// Get guidance on how to fix this error.
    pub fn guidance(&self) -> &'static str {
        self.code().guidance()
    }
}
