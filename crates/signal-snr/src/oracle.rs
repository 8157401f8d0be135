//! Oracle SNR: the ratio of signal power to noise power when both
//! components are known separately
//!
//! Used to validate blind estimators in simulation, where the clean signal
//! and the noise realisation are both available.

use signal_core::{decibels, Error, Real, Result, Sample};
use signal_univariate::CenteredPower;

const ORACLE: &str = "oracle SNR";
const MEAN_INVARIANT_ORACLE: &str = "mean-invariant oracle SNR";

/// `Σ|s_i|² / Σ|w_i|²`
///
/// Both sequences are walked in lock-step. Accepts real, integer and
/// complex samples; the two sides may have different element types as
/// long as they share a working precision.
///
/// An all-zero noise gives `+∞` (or `NaN` if the signal is zero as well).
///
/// # Errors
///
/// - [`Error::LengthMismatch`] when the sequences differ in length
/// - [`Error::InsufficientData`] when both are empty
///
/// # Example
///
/// ```rust
/// use signal_snr::oracle_snr;
///
/// let signal = vec![1.0f64; 100];
/// let mut noise = vec![0.0f64; 100];
/// noise[0] = 1.0;
/// assert_eq!(oracle_snr(&signal, &noise).unwrap(), 100.0);
/// ```
pub fn oracle_snr<S, N, R>(signal: S, noise: N) -> Result<R>
where
    S: IntoIterator,
    N: IntoIterator,
    S::Item: Sample<Real = R>,
    N::Item: Sample<Real = R>,
    R: Real,
{
    let mut signal_power = R::zero();
    let mut noise_power = R::zero();
    for_each_pair(signal, noise, ORACLE, |s, w| {
        signal_power = signal_power + s.norm_sqr();
        noise_power = noise_power + w.norm_sqr();
    })?;
    Ok(signal_power / noise_power)
}

/// Feed both sequences pairwise to `visit`, failing on unequal or zero
/// lengths
fn for_each_pair<S, N, F>(signal: S, noise: N, operation: &'static str, mut visit: F) -> Result<usize>
where
    S: IntoIterator,
    N: IntoIterator,
    F: FnMut(S::Item, N::Item),
{
    let mut signal = signal.into_iter();
    let mut noise = noise.into_iter();
    let mut len = 0usize;

    loop {
        match (signal.next(), noise.next()) {
            (Some(s), Some(w)) => {
                visit(s, w);
                len += 1;
            }
            (None, None) => break,
            (Some(_), None) => {
                return Err(Error::length_mismatch(operation, len + 1 + signal.count(), len));
            }
            (None, Some(_)) => {
                return Err(Error::length_mismatch(operation, len, len + 1 + noise.count()));
            }
        }
    }

    if len == 0 {
        return Err(Error::empty_input(operation));
    }
    Ok(len)
}

/// [`oracle_snr`] in decibels
pub fn oracle_snr_db<S, N, R>(signal: S, noise: N) -> Result<R>
where
    S: IntoIterator,
    N: IntoIterator,
    S::Item: Sample<Real = R>,
    N::Item: Sample<Real = R>,
    R: Real,
{
    Ok(decibels(oracle_snr(signal, noise)?))
}

/// Ratio of the mean-removed powers of signal and noise
///
/// `Σ|s_i − μ_s|² / Σ|w_i − μ_w|²`, with complex means for complex input, so
/// for real samples this is the ratio of population variances. Insensitive
/// to a DC offset on either component, which makes it the reference that
/// blind moment-based estimators are compared against.
///
/// # Errors
///
/// - [`Error::LengthMismatch`] when the sequences differ in length
/// - [`Error::InsufficientData`] when both are empty
///
/// # Example
///
/// ```rust
/// use num_complex::Complex;
/// use signal_snr::mean_invariant_oracle_snr;
///
/// let offset = Complex::new(3.0f64, 2.0);
/// let signal: Vec<_> = [2.0, -2.0, 2.0, -2.0].iter().map(|&s| Complex::new(0.0, s) + offset).collect();
/// let noise = [Complex::new(1.0f64, 0.0), Complex::new(-1.0, 0.0), Complex::new(-1.0, 0.0), Complex::new(1.0, 0.0)];
/// assert!((mean_invariant_oracle_snr(&signal, &noise).unwrap() - 4.0).abs() < 1e-12);
/// ```
pub fn mean_invariant_oracle_snr<S, N, R>(signal: S, noise: N) -> Result<R>
where
    S: IntoIterator,
    N: IntoIterator,
    S::Item: Sample<Real = R>,
    N::Item: Sample<Real = R>,
    R: Real,
{
    let mut signal_power = CenteredPower::new();
    let mut noise_power = CenteredPower::new();
    for_each_pair(signal, noise, MEAN_INVARIANT_ORACLE, |s, w| {
        signal_power.push(s);
        noise_power.push(w);
    })?;
    Ok(signal_power.power() / noise_power.power())
}

/// [`mean_invariant_oracle_snr`] in decibels
pub fn mean_invariant_oracle_snr_db<S, N, R>(signal: S, noise: N) -> Result<R>
where
    S: IntoIterator,
    N: IntoIterator,
    S::Item: Sample<Real = R>,
    N::Item: Sample<Real = R>,
    R: Real,
{
    Ok(decibels(mean_invariant_oracle_snr(signal, noise)?))
}
