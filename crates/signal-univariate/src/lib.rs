//! Univariate statistics primitives
//!
//! Mean, variance and the higher-order moments that the signal estimators
//! are built on. Every function accepts any `IntoIterator` of real-valued
//! samples and makes a single numerically stable pass; [`centered_power`]
//! also takes complex samples.
//!
//! # Example
//!
//! ```rust
//! use signal_univariate::{first_four_moments, kurtosis, mean};
//!
//! let data = vec![1.0f64, -1.0, 1.0, -1.0];
//! assert!(mean(&data).unwrap().abs() < 1e-12);
//! assert!((kurtosis(&data).unwrap() - 1.0).abs() < 1e-12);
//!
//! let moments = first_four_moments(data.iter()).unwrap();
//! assert_eq!(moments.count, 4);
//! ```

mod accumulator;
pub mod moments;
pub mod power;

pub use moments::{
    excess_kurtosis, first_four_moments, kurtosis, mean, sample_variance, skewness, variance,
    Moments,
};
pub use power::{centered_power, CenteredPower};
