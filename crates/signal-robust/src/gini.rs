//! Gini coefficient of signal magnitudes
//!
//! Borrowed from economics: 0 means every sample carries the same magnitude,
//! values near 1 mean the magnitude is concentrated in a few samples.
//!
//! With magnitudes sorted ascending `m_1 ≤ … ≤ m_n` and 1-based ranks,
//!
//! ```text
//! G = 2·Σ i·m_i / (n·Σ m_i) − (n + 1)/n
//! ```
//!
//! An all-zero signal has no inequality and scores 0. `G` is invariant under
//! concatenating the signal with a copy of itself.

use crate::order::sort_ascending;
use signal_core::{count, Error, Real, RealOf, Result, Sample};

fn sorted_magnitudes<I>(samples: I) -> Vec<RealOf<I::Item>>
where
    I: IntoIterator,
    I::Item: Sample,
{
    let mut magnitudes: Vec<_> = samples.into_iter().map(Sample::magnitude).collect();
    sort_ascending(&mut magnitudes);
    magnitudes
}

fn gini_of_sorted<R: Real>(sorted: &[R]) -> Result<R> {
    let one = R::one();
    let mut rank = R::zero();
    let mut weighted = R::zero();
    let mut total = R::zero();
    for &m in sorted {
        rank = rank + one;
        weighted = weighted + rank * m;
        total = total + m;
    }
    if total == R::zero() {
        return Ok(R::zero());
    }

    let n = count::<R>(sorted.len())?;
    let two = one + one;
    Ok(two * weighted / (n * total) - (n + one) / n)
}

/// Gini coefficient of the magnitudes
///
/// Sorts an internal copy of the magnitudes; the input is never modified.
///
/// # Errors
///
/// [`Error::InsufficientData`] for an empty sequence.
///
/// # Example
///
/// ```rust
/// use signal_robust::absolute_gini_coefficient;
///
/// // Equal magnitudes: no inequality
/// assert_eq!(absolute_gini_coefficient([1.0f64, -1.0, 1.0]).unwrap(), 0.0);
/// ```
pub fn absolute_gini_coefficient<I>(samples: I) -> Result<RealOf<I::Item>>
where
    I: IntoIterator,
    I::Item: Sample,
{
    let sorted = sorted_magnitudes(samples);
    if sorted.is_empty() {
        return Err(Error::empty_input("absolute Gini coefficient"));
    }
    gini_of_sorted(&sorted)
}

/// Sample Gini coefficient of the magnitudes, `n/(n − 1) · G`
///
/// The finite-sample correction stretches the range to exactly `[0, 1]`:
/// a one-hot signal scores 1 for every `n`. Unlike the population
/// coefficient it is not invariant under self-concatenation.
///
/// # Errors
///
/// [`Error::InsufficientData`] for fewer than two samples.
pub fn sample_absolute_gini_coefficient<I>(samples: I) -> Result<RealOf<I::Item>>
where
    I: IntoIterator,
    I::Item: Sample,
{
    let sorted = sorted_magnitudes(samples);
    if sorted.len() < 2 {
        return Err(Error::insufficient(
            "sample absolute Gini coefficient",
            2,
            sorted.len(),
        ));
    }
    let n = count::<RealOf<I::Item>>(sorted.len())?;
    let n_minus_one = count::<RealOf<I::Item>>(sorted.len() - 1)?;
    Ok(gini_of_sorted(&sorted)? * n / n_minus_one)
}
