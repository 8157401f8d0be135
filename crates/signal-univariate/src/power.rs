//! Mean-removed power of real or complex sequences
//!
//! `P = (1/n)·Σ|x_i − μ|²` with a complex mean `μ`, which for real data is
//! the population variance and for complex data the sum of the variances of
//! the two parts. Accumulated with Welford's update on both parts at once.

use signal_core::{Error, Real, RealOf, Result, Sample};

/// Running mean and sum of squared deviations of a sample stream
#[derive(Debug, Clone, Copy)]
pub struct CenteredPower<R> {
    count: usize,
    weight: R,
    mean_re: R,
    mean_im: R,
    sum_sq_dev: R,
}

impl<R: Real> Default for CenteredPower<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Real> CenteredPower<R> {
    pub fn new() -> Self {
        Self {
            count: 0,
            weight: R::zero(),
            mean_re: R::zero(),
            mean_im: R::zero(),
            sum_sq_dev: R::zero(),
        }
    }

    /// Fold one sample into the running statistics
    pub fn push<S: Sample<Real = R>>(&mut self, sample: S) {
        let (re, im) = sample.parts();
        let previous = self.weight;
        self.count += 1;
        self.weight = self.weight + R::one();

        let d_re = re - self.mean_re;
        let d_im = im - self.mean_im;
        self.mean_re = self.mean_re + d_re / self.weight;
        self.mean_im = self.mean_im + d_im / self.weight;
        // |x − μ_old|²·(n − 1)/n
        self.sum_sq_dev = self.sum_sq_dev + (d_re * d_re + d_im * d_im) * previous / self.weight;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Running mean as `(re, im)`
    pub fn mean(&self) -> (R, R) {
        (self.mean_re, self.mean_im)
    }

    /// Mean-removed power; `NaN` before the first sample
    pub fn power(&self) -> R {
        self.sum_sq_dev / self.weight
    }
}

impl<S: Sample> Extend<S> for CenteredPower<S::Real> {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for sample in iter {
            self.push(sample);
        }
    }
}

/// Mean-removed power `(1/n)·Σ|x_i − μ|²` of a real or complex sequence
///
/// # Errors
///
/// [`Error::InsufficientData`] for an empty sequence.
///
/// # Example
///
/// ```rust
/// use num_complex::Complex;
/// use signal_univariate::centered_power;
///
/// // The (2, 2) offset is removed, leaving each point at distance √2
/// let tone = [Complex::new(3.0f64, 1.0), Complex::new(1.0, 3.0), Complex::new(1.0, 1.0), Complex::new(3.0, 3.0)];
/// assert!((centered_power(tone).unwrap() - 2.0).abs() < 1e-12);
/// ```
pub fn centered_power<I>(samples: I) -> Result<RealOf<I::Item>>
where
    I: IntoIterator,
    I::Item: Sample,
{
    let mut acc = CenteredPower::new();
    acc.extend(samples);
    if acc.count() == 0 {
        return Err(Error::empty_input("centered power"));
    }
    Ok(acc.power())
}
