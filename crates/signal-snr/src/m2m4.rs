//! Blind SNR estimation from the second and fourth moments (M2M4)
//!
//! For a signal `s` plus independent zero-mean noise `w` with powers `S`
//! and `N`, the central moments of the observation satisfy
//!
//! ```text
//! M2 = S + N
//! M4 = ka·S² + 6·S·N + kw·N²
//! ```
//!
//! where `ka` and `kw` are the kurtoses of signal and noise. Eliminating
//! `N` leaves a quadratic in `S`:
//!
//! ```text
//! (ka + kw − 6)·S² + 2·M2·(3 − kw)·S + (kw·M2² − M4) = 0
//! ```
//!
//! The largest root giving positive `S` and `N` is kept. If neither root of
//! that quadratic is admissible the symmetric quadratic in `N` is tried;
//! failing both, the estimate is `NaN`.
//!
//! Typical kurtoses: 1.5 for a sinusoid, 1 for a constant-modulus (BPSK,
//! QPSK) signal, 3 for Gaussian noise, 1.8 for uniform noise.
//!
//! The moments used are central, so a DC offset on the observation does not
//! bias the estimate. Constant-modulus signals are where this estimator
//! works best; it is not suited to Gaussian-like signals (`ka ≈ kw`).

use crate::moments_of;
use serde::{Deserialize, Serialize};
use signal_core::{constant, decibels, quadratic_roots, Error, Real, RealOf, RealSample, Result};
use signal_univariate::Moments;
use tracing::{debug, instrument, trace};

/// Kurtosis of a pure sinusoid
pub const SINUSOID_KURTOSIS: f64 = 1.5;

/// Kurtosis of Gaussian noise
pub const GAUSSIAN_KURTOSIS: f64 = 3.0;

const M2M4: &str = "M2M4 SNR estimator";

/// Kurtosis assumptions of the M2M4 estimator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct M2m4Config {
    /// Kurtosis of the clean signal
    pub signal_kurtosis: f64,
    /// Kurtosis of the noise
    pub noise_kurtosis: f64,
}

impl Default for M2m4Config {
    fn default() -> Self {
        Self {
            signal_kurtosis: SINUSOID_KURTOSIS,
            noise_kurtosis: GAUSSIAN_KURTOSIS,
        }
    }
}

impl M2m4Config {
    /// Sinusoid in Gaussian noise
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_signal_kurtosis(mut self, kurtosis: f64) -> Self {
        self.signal_kurtosis = kurtosis;
        self
    }

    pub fn with_noise_kurtosis(mut self, kurtosis: f64) -> Self {
        self.noise_kurtosis = kurtosis;
        self
    }

    /// Both kurtoses must be positive and finite
    pub fn validate(&self) -> Result<()> {
        check_kurtosis(self.signal_kurtosis, "signal")?;
        check_kurtosis(self.noise_kurtosis, "noise")
    }
}

fn check_kurtosis<R: Real>(kurtosis: R, component: &str) -> Result<()> {
    if kurtosis > R::zero() && kurtosis.is_finite() {
        Ok(())
    } else {
        Err(Error::invalid_parameter(format!(
            "{component} kurtosis must be positive and finite, got {kurtosis:?}"
        )))
    }
}

/// Separated signal and noise powers
///
/// Both are `NaN` when the moment equations have no admissible solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct M2m4Estimate<R> {
    pub signal_power: R,
    pub noise_power: R,
}

impl<R: Real> M2m4Estimate<R> {
    /// Solve the moment equations for the two powers
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] when a kurtosis is not positive and finite.
    #[instrument(level = "trace", skip(moments), fields(count = moments.count))]
    pub fn from_moments(
        moments: &Moments<R>,
        signal_kurtosis: R,
        noise_kurtosis: R,
    ) -> Result<Self> {
        check_kurtosis(signal_kurtosis, "signal")?;
        check_kurtosis(noise_kurtosis, "noise")?;

        let zero = R::zero();
        let (m2, m4) = (moments.m2, moments.m4);
        if m4 == zero {
            // Only a constant observation has a vanishing fourth moment
            trace!("constant observation");
            return Ok(Self {
                signal_power: m2,
                noise_power: zero,
            });
        }

        let one = R::one();
        let two = one + one;
        let three = two + one;
        let six = three + three;
        let a = signal_kurtosis + noise_kurtosis - six;

        let b = two * m2 * (three - noise_kurtosis);
        let c = (noise_kurtosis * m2).mul_add(m2, -m4);
        let roots = quadratic_roots(a, b, c);
        trace!(?roots, "signal power roots");
        if let Some((signal_power, noise_power)) = admissible_split(roots, m2) {
            return Ok(Self {
                signal_power,
                noise_power,
            });
        }

        debug!("no admissible signal power root, solving for noise power");
        let b = two * m2 * (three - signal_kurtosis);
        let c = (signal_kurtosis * m2).mul_add(m2, -m4);
        let roots = quadratic_roots(a, b, c);
        trace!(?roots, "noise power roots");
        if let Some((noise_power, signal_power)) = admissible_split(roots, m2) {
            return Ok(Self {
                signal_power,
                noise_power,
            });
        }

        debug!(?m2, ?m4, "moment equations have no admissible solution");
        Ok(Self {
            signal_power: R::nan(),
            noise_power: R::nan(),
        })
    }

    /// `signal_power / noise_power`; `+∞` when the noise power is zero
    pub fn snr(&self) -> R {
        if self.noise_power == R::zero() {
            return R::infinity();
        }
        self.signal_power / self.noise_power
    }

    pub fn snr_db(&self) -> R {
        decibels(self.snr())
    }

    /// Whether the moment equations were solved
    pub fn is_admissible(&self) -> bool {
        !self.signal_power.is_nan() && !self.noise_power.is_nan()
    }
}

/// First root (largest, then smallest) leaving both parts of `total` positive
fn admissible_split<R: Real>((low, high): (R, R), total: R) -> Option<(R, R)> {
    let zero = R::zero();
    [high, low].into_iter().find_map(|root| {
        let rest = total - root;
        (root > zero && rest > zero).then_some((root, rest))
    })
}

/// M2M4 estimator with configurable kurtosis assumptions
///
/// # Example
///
/// ```rust
/// use signal_snr::{M2m4Config, M2m4Estimator};
///
/// // Constant-modulus signal in uniform noise
/// let config = M2m4Config::new()
///     .with_signal_kurtosis(1.0)
///     .with_noise_kurtosis(1.8);
/// let estimator = M2m4Estimator::new(config).unwrap();
/// assert_eq!(estimator.config().noise_kurtosis, 1.8);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct M2m4Estimator {
    config: M2m4Config,
}

impl M2m4Estimator {
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] when the configuration does not validate.
    pub fn new(config: M2m4Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &M2m4Config {
        &self.config
    }

    /// Signal and noise powers of a real-valued observation
    ///
    /// # Errors
    ///
    /// [`Error::InsufficientData`] for an empty sequence.
    pub fn estimate<I>(&self, samples: I) -> Result<M2m4Estimate<RealOf<I::Item>>>
    where
        I: IntoIterator,
        I::Item: RealSample,
    {
        let signal_kurtosis = constant(self.config.signal_kurtosis)?;
        let noise_kurtosis = constant(self.config.noise_kurtosis)?;
        let moments = moments_of(samples, M2M4)?;
        M2m4Estimate::from_moments(&moments, signal_kurtosis, noise_kurtosis)
    }

    pub fn estimate_snr<I>(&self, samples: I) -> Result<RealOf<I::Item>>
    where
        I: IntoIterator,
        I::Item: RealSample,
    {
        Ok(self.estimate(samples)?.snr())
    }

    pub fn estimate_snr_db<I>(&self, samples: I) -> Result<RealOf<I::Item>>
    where
        I: IntoIterator,
        I::Item: RealSample,
    {
        Ok(self.estimate(samples)?.snr_db())
    }
}

/// Blind SNR of a real-valued observation, assuming Gaussian noise
///
/// `signal_kurtosis` defaults to [`SINUSOID_KURTOSIS`]. Returns `NaN` when
/// no admissible solution exists and `+∞` for a constant observation.
///
/// # Errors
///
/// - [`Error::InsufficientData`] for an empty sequence
/// - [`Error::InvalidParameter`] when `signal_kurtosis` is not positive and
///   finite
///
/// # Example
///
/// ```rust
/// use signal_snr::m2m4_snr_estimator;
///
/// let constant = vec![2.0f64; 16];
/// assert_eq!(m2m4_snr_estimator(&constant, None).unwrap(), f64::INFINITY);
/// ```
pub fn m2m4_snr_estimator<I>(
    samples: I,
    signal_kurtosis: Option<RealOf<I::Item>>,
) -> Result<RealOf<I::Item>>
where
    I: IntoIterator,
    I::Item: RealSample,
{
    let signal_kurtosis = match signal_kurtosis {
        Some(kurtosis) => kurtosis,
        None => constant(SINUSOID_KURTOSIS)?,
    };
    check_kurtosis(signal_kurtosis, "signal")?;
    let noise_kurtosis = constant(GAUSSIAN_KURTOSIS)?;
    let moments = moments_of(samples, M2M4)?;
    Ok(M2m4Estimate::from_moments(&moments, signal_kurtosis, noise_kurtosis)?.snr())
}

/// [`m2m4_snr_estimator`] in decibels
pub fn m2m4_snr_estimator_db<I>(
    samples: I,
    signal_kurtosis: Option<RealOf<I::Item>>,
) -> Result<RealOf<I::Item>>
where
    I: IntoIterator,
    I::Item: RealSample,
{
    Ok(decibels(m2m4_snr_estimator(samples, signal_kurtosis)?))
}
