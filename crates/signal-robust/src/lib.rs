//! Robust magnitude, sparsity and information measures for signals
//!
//! Every estimator works on sample magnitudes, so real, complex and integer
//! signals are handled uniformly:
//!
//! | Estimator | Range | Passes | Mutates input |
//! |-----------|-------|--------|---------------|
//! | [`absolute_median`] | `[0, ∞)` | copy + selection | no |
//! | [`absolute_median_in_place`] | `[0, ∞)` | selection | reorders |
//! | [`absolute_gini_coefficient`] | `[0, 1)` | copy + sort | no |
//! | [`sample_absolute_gini_coefficient`] | `[0, 1]` | copy + sort | no |
//! | [`hoyer_sparsity`] | `[0, 1]` | single | no |
//! | [`shannon_entropy`] | unbounded | single | no |
//!
//! # Examples
//!
//! ```rust
//! use num_complex::Complex;
//! use signal_robust::{absolute_median, hoyer_sparsity};
//!
//! // Complex samples are reduced to their moduli
//! let iq = vec![Complex::new(3.0f64, 4.0), Complex::new(0.0, -1.0), Complex::new(1.0, 0.0)];
//! assert_eq!(absolute_median(&iq).unwrap(), 1.0);
//!
//! // Integer samples are promoted to f64
//! let counts = [0i32, 0, 12, 0];
//! assert_eq!(hoyer_sparsity(counts).unwrap(), 1.0);
//! ```

pub mod entropy;
pub mod gini;
pub mod median;
pub mod order;
pub mod sparsity;

pub use entropy::shannon_entropy;
pub use gini::{absolute_gini_coefficient, sample_absolute_gini_coefficient};
pub use median::{absolute_median, absolute_median_in_place};
pub use sparsity::hoyer_sparsity;
