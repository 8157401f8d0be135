//! Single-pass central moment accumulation
//!
//! Extends Welford's update to the third and fourth central moments
//! (Terriberry's formulation), so every statistic in this crate needs only
//! one forward traversal and never subtracts two large sums.

use signal_core::Real;

/// Running sums of powers of deviations from the running mean
#[derive(Debug, Clone, Copy)]
pub(crate) struct MomentAccumulator<R> {
    count: usize,
    weight: R,
    mean: R,
    m2: R,
    m3: R,
    m4: R,
}

impl<R: Real> MomentAccumulator<R> {
    pub(crate) fn new() -> Self {
        Self {
            count: 0,
            weight: R::zero(),
            mean: R::zero(),
            m2: R::zero(),
            m3: R::zero(),
            m4: R::zero(),
        }
    }

    /// Fold one observation into the running moments
    pub(crate) fn push(&mut self, x: R) {
        let one = R::one();
        let two = one + one;
        let three = two + one;
        let four = two + two;
        let six = three + three;

        let n1 = self.weight;
        self.count += 1;
        self.weight = self.weight + one;
        let n = self.weight;

        let delta = x - self.mean;
        let delta_n = delta / n;
        let delta_n2 = delta_n * delta_n;
        let term1 = delta * delta_n * n1;

        self.mean = self.mean + delta_n;
        self.m4 = self.m4 + term1 * delta_n2 * (n * n - three * n + three) + six * delta_n2 * self.m2
            - four * delta_n * self.m3;
        self.m3 = self.m3 + term1 * delta_n * (n - two) - three * delta_n * self.m2;
        self.m2 = self.m2 + term1;
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }

    pub(crate) fn mean(&self) -> R {
        self.mean
    }

    /// Sum of squared deviations from the mean
    pub(crate) fn sum_sq_dev(&self) -> R {
        self.m2
    }

    /// Population central moments `(m2, m3, m4)`; meaningless when empty
    pub(crate) fn central_moments(&self) -> (R, R, R) {
        let n = self.weight;
        (self.m2 / n, self.m3 / n, self.m4 / n)
    }
}

impl<R: Real> Extend<R> for MomentAccumulator<R> {
    fn extend<I: IntoIterator<Item = R>>(&mut self, iter: I) {
        for x in iter {
            self.push(x);
        }
    }
}
