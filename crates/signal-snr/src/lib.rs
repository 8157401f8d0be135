//! Signal-to-noise ratio estimation
//!
//! | Estimator | Needs | Input |
//! |-----------|-------|-------|
//! | [`oracle_snr`] | signal and noise separately | real, integer, complex |
//! | [`mean_invariant_oracle_snr`] | signal and noise separately | real, integer, complex |
//! | [`m2m4_snr_estimator`] | the noisy observation only | real, integer |
//!
//! Every estimator has a `_db` counterpart returning `10·log10(snr)`.
//!
//! # Example
//!
//! ```rust
//! use signal_snr::{oracle_snr_db, M2m4Estimator};
//!
//! let signal = vec![1.0f64; 100];
//! let mut noise = vec![0.0f64; 100];
//! noise[0] = 1.0;
//! assert!((oracle_snr_db(&signal, &noise).unwrap() - 20.0).abs() < 1e-12);
//!
//! let x: Vec<f64> = signal.iter().zip(&noise).map(|(s, w)| s + w).collect();
//! let estimate = M2m4Estimator::default().estimate(&x).unwrap();
//! println!("S = {}, N = {}", estimate.signal_power, estimate.noise_power);
//! ```

pub mod m2m4;
pub mod oracle;

pub use m2m4::{
    m2m4_snr_estimator, m2m4_snr_estimator_db, M2m4Config, M2m4Estimate, M2m4Estimator,
    GAUSSIAN_KURTOSIS, SINUSOID_KURTOSIS,
};
pub use oracle::{
    mean_invariant_oracle_snr, mean_invariant_oracle_snr_db, oracle_snr, oracle_snr_db,
};

use signal_core::{Error, RealOf, RealSample, Result};
use signal_univariate::{first_four_moments, Moments};

/// Moments of a sequence, reporting emptiness under the caller's name
pub(crate) fn moments_of<I>(samples: I, operation: &'static str) -> Result<Moments<RealOf<I::Item>>>
where
    I: IntoIterator,
    I::Item: RealSample,
{
    first_four_moments(samples).map_err(|err| match err {
        Error::InsufficientData { .. } => Error::empty_input(operation),
        other => other,
    })
}
