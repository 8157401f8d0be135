//! Shannon entropy of signal magnitudes
//!
//! `H = −Σ m_i·ln(m_i)` accumulated directly over the magnitudes, treating
//! each as an unnormalised probability-like weight. No normalisation is
//! applied; callers that need a true probability entropy must normalise the
//! signal first (e.g. divide by its L1 norm).

use num_traits::{Float, Zero};
use signal_core::{RealOf, Sample};

/// Shannon entropy of the magnitudes
///
/// Zero magnitudes contribute nothing (`0·ln 0 = 0`), and an empty
/// sequence has entropy 0. For `n` samples of value `v` the result is
/// `n·v·(−ln v)`.
///
/// # Example
///
/// ```rust
/// use signal_robust::shannon_entropy;
///
/// let v = vec![0.5f64; 30];
/// let expected = 30.0 * 0.5 * std::f64::consts::LN_2;
/// assert!((shannon_entropy(&v) - expected).abs() < 1e-12);
/// ```
pub fn shannon_entropy<I>(samples: I) -> RealOf<I::Item>
where
    I: IntoIterator,
    I::Item: Sample,
{
    samples
        .into_iter()
        .map(Sample::magnitude)
        .filter(|m| !m.is_zero())
        .fold(RealOf::<I::Item>::zero(), |h, m| h - m * m.ln())
}
