#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! prim-math: elementary math entry points for a managed runtime's standard library
//!
//! The crate is split into two layers:
//!
//! - A **primitive provider** ([`PrimitiveProvider`]) that supplies correctly
//!   rounded double-precision transcendental, rounding and comparison
//!   primitives. [`LibmProvider`] is always available; `StdProvider` relays
//!   to the platform math runtime when the `std` feature is on.
//! - A **composition layer** that owns the edge-case policy: the NaN rules of
//!   [`clamp`], the NaN dominance and float-to-double promotion of [`minmax`],
//!   the NaN failure of [`sign`], and the single-precision relays of [`relay`].
//!
//! # Features
//!
//! - **Exact NaN policy**: a NaN bound is "no constraint", a NaN value is NaN
//! - **Width promotion**: every derived `f32` operation runs in `f64` and narrows
//! - **Swappable providers**: edge-case logic never depends on the provider
//! - **No allocations, no state**: every entry point is a pure function
//!
//! # Quick Start
//!
//! ```rust
//! use prim_math::{Math, MathError};
//!
//! assert_eq!(Math::clamp(3.0, f64::NAN, 5.0), Ok(3.0));
//! assert!(Math::clamp(1.0, 5.0, 2.0).is_err());
//! assert!(Math::min(f32::NAN, 5.0).is_nan());
//! assert_eq!(Math::sign(f64::NAN), Err(MathError::NanDomain));
//! assert_eq!(Math::round(2.5), 2.0);
//! ```

// Provider trait and overloading traits
pub mod traits;

// Provider implementations
pub mod backends;

// Error type
pub mod error;

// Promotion and narrowing
pub mod widen;

// Composition layer
pub mod clamp;
pub mod minmax;
pub mod sign;
pub mod relay;

// Facade
pub mod facade;

pub use traits::{Abs, Clamp, MinMax, PrimitiveProvider, Sign};

pub use error::{MathError, MathErrorCode, Result};

pub use backends::soft::LibmProvider;

#[cfg(feature = "std")]
pub use backends::platform::StdProvider;

pub use facade::MathWith;

/// Ratio of a circle's circumference to its diameter, π
#[allow(clippy::approx_constant, clippy::excessive_precision)]
pub const PI: f64 = 3.14159265358979323846;

/// Base of the natural logarithm, e
#[allow(clippy::approx_constant, clippy::excessive_precision)]
pub const E: f64 = 2.7182818284590452354;

/// Default primitive provider based on enabled features
///
/// - default: [`LibmProvider`]
/// - `std-provider` feature: `StdProvider`
#[cfg(not(feature = "std-provider"))]
pub type DefaultProvider = LibmProvider;

/// Default primitive provider (platform math runtime)
#[cfg(feature = "std-provider")]
pub type DefaultProvider = StdProvider;

/// Entry-point facade over [`DefaultProvider`]
pub type Math = MathWith<DefaultProvider>;
