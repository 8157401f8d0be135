//! Statistical estimators for one-dimensional signals
//!
//! This crate re-exports the workspace crates under a single roof:
//!
//! - [`signal_core`]: error type, sample traits, numerical helpers
//! - [`signal_univariate`]: mean, variance and higher moments
//! - [`signal_robust`]: absolute median, Gini coefficient, Hoyer sparsity,
//!   Shannon entropy
//! - [`signal_snr`]: oracle and blind (M2M4) signal-to-noise ratio estimators
//!
//! Every estimator accepts any `IntoIterator` of samples, so slices,
//! vectors, arrays, linked lists and iterator adapters all work. Real,
//! integer and complex samples are supported wherever the quantity is
//! defined for them.
//!
//! # Example
//!
//! ```rust
//! use signal_stats::prelude::*;
//!
//! let x = vec![0.0f64, 0.0, -3.0, 0.0];
//! assert_eq!(hoyer_sparsity(&x).unwrap(), 1.0);
//! assert_eq!(absolute_median(&x).unwrap(), 0.0);
//!
//! let signal = vec![1.0f64; 100];
//! let mut noise = vec![0.0f64; 100];
//! noise[0] = 1.0;
//! assert_eq!(oracle_snr(&signal, &noise).unwrap(), 100.0);
//! ```

pub use signal_core;
pub use signal_robust;
pub use signal_snr;
pub use signal_univariate;

pub use signal_core::{real_sample, Error, Real, RealOf, RealSample, Result, Sample};
pub use signal_robust::{
    absolute_gini_coefficient, absolute_median, absolute_median_in_place, hoyer_sparsity,
    sample_absolute_gini_coefficient, shannon_entropy,
};
pub use signal_snr::{
    m2m4_snr_estimator, m2m4_snr_estimator_db, mean_invariant_oracle_snr,
    mean_invariant_oracle_snr_db, oracle_snr, oracle_snr_db, M2m4Config, M2m4Estimate,
    M2m4Estimator,
};
pub use signal_univariate::{
    centered_power, first_four_moments, kurtosis, mean, variance, CenteredPower, Moments,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        absolute_gini_coefficient, absolute_median, hoyer_sparsity, m2m4_snr_estimator,
        m2m4_snr_estimator_db, oracle_snr, oracle_snr_db, shannon_entropy, Error, RealSample,
        Result, Sample,
    };
}
