//! Core traits and types for signal statistics
//!
//! This crate provides the foundation shared by every estimator crate:
//!
//! - [`Error`] / [`Result`]: the unified error type
//! - [`Sample`], [`RealSample`], [`Real`]: element types and the real working
//!   precision estimators compute in
//! - [`quadratic_roots`]: a cancellation-free quadratic solver
//!
//! # Example
//!
//! ```rust
//! use num_complex::Complex;
//! use signal_core::Sample;
//!
//! assert_eq!((-2.0f64).magnitude(), 2.0);
//! assert_eq!(Complex::new(3.0f32, 4.0).magnitude(), 5.0);
//! // Integers are promoted to f64
//! assert_eq!((-3i32).norm_sqr(), 9.0f64);
//! ```

pub mod error;
pub mod numeric;
pub mod roots;

// Re-export core types
pub use error::{Error, Result};
pub use numeric::{constant, count, decibels, Real, RealOf, RealSample, Sample};
pub use roots::{difference_of_products, quadratic_roots};

// Used by `real_sample!` in downstream crates
#[doc(hidden)]
pub use num_traits;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::{Real, RealSample, Result, Sample};
}
