//! Mean, variance and higher-order moments over generic sequences
//!
//! All functions take any `IntoIterator` of real-valued samples (slices,
//! vectors, arrays, linked lists, iterator adapters) and traverse it once.
//! Integer samples are promoted to `f64`.
//!
//! Kurtosis is the raw fourth standardised moment (3 for a Gaussian);
//! [`excess_kurtosis`] subtracts 3. A constant sequence has zero variance,
//! so its skewness and kurtosis are `NaN`.

use crate::accumulator::MomentAccumulator;
use signal_core::{Error, Real, RealOf, RealSample, Result};

/// First four moments of a sequence
///
/// `m2`, `m3` and `m4` are population central moments
/// (`E[(x − μ)^k]` with divisor `n`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments<R> {
    /// Number of observations
    pub count: usize,
    /// Arithmetic mean
    pub mean: R,
    /// Second central moment (population variance)
    pub m2: R,
    /// Third central moment
    pub m3: R,
    /// Fourth central moment
    pub m4: R,
}

impl<R: Real> Moments<R> {
    /// Population variance
    pub fn variance(&self) -> R {
        self.m2
    }

    /// Standardised third moment
    pub fn skewness(&self) -> R {
        self.m3 / (self.m2 * self.m2.sqrt())
    }

    /// Standardised fourth moment
    pub fn kurtosis(&self) -> R {
        self.m4 / (self.m2 * self.m2)
    }

    /// Kurtosis minus the Gaussian value 3
    pub fn excess_kurtosis(&self) -> R {
        let three = R::one() + R::one() + R::one();
        self.kurtosis() - three
    }
}

fn accumulate<I>(samples: I, operation: &'static str) -> Result<MomentAccumulator<RealOf<I::Item>>>
where
    I: IntoIterator,
    I::Item: RealSample,
{
    let mut acc = MomentAccumulator::new();
    acc.extend(samples.into_iter().map(RealSample::to_real));
    if acc.count() == 0 {
        return Err(Error::empty_input(operation));
    }
    Ok(acc)
}

/// Mean, central moments and count in one pass
pub fn first_four_moments<I>(samples: I) -> Result<Moments<RealOf<I::Item>>>
where
    I: IntoIterator,
    I::Item: RealSample,
{
    let acc = accumulate(samples, "first four moments")?;
    let (m2, m3, m4) = acc.central_moments();
    Ok(Moments {
        count: acc.count(),
        mean: acc.mean(),
        m2,
        m3,
        m4,
    })
}

/// Arithmetic mean
pub fn mean<I>(samples: I) -> Result<RealOf<I::Item>>
where
    I: IntoIterator,
    I::Item: RealSample,
{
    Ok(accumulate(samples, "mean")?.mean())
}

/// Population variance (divisor `n`)
pub fn variance<I>(samples: I) -> Result<RealOf<I::Item>>
where
    I: IntoIterator,
    I::Item: RealSample,
{
    let acc = accumulate(samples, "variance")?;
    Ok(acc.central_moments().0)
}

/// Unbiased sample variance (divisor `n − 1`); needs two samples
pub fn sample_variance<I>(samples: I) -> Result<RealOf<I::Item>>
where
    I: IntoIterator,
    I::Item: RealSample,
{
    let acc = accumulate(samples, "sample variance")?;
    if acc.count() < 2 {
        return Err(Error::insufficient("sample variance", 2, acc.count()));
    }
    let dof = signal_core::count::<RealOf<I::Item>>(acc.count() - 1)?;
    Ok(acc.sum_sq_dev() / dof)
}

/// Skewness (standardised third central moment)
pub fn skewness<I>(samples: I) -> Result<RealOf<I::Item>>
where
    I: IntoIterator,
    I::Item: RealSample,
{
    Ok(first_four_moments(samples)?.skewness())
}

/// Kurtosis (standardised fourth central moment, 3 for a Gaussian)
pub fn kurtosis<I>(samples: I) -> Result<RealOf<I::Item>>
where
    I: IntoIterator,
    I::Item: RealSample,
{
    Ok(first_four_moments(samples)?.kurtosis())
}

/// Excess kurtosis (kurtosis − 3)
pub fn excess_kurtosis<I>(samples: I) -> Result<RealOf<I::Item>>
where
    I: IntoIterator,
    I::Item: RealSample,
{
    Ok(first_four_moments(samples)?.excess_kurtosis())
}
