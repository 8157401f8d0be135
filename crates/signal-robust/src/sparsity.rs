//! Hoyer sparsity
//!
//! Normalised ratio of the L1 and L2 norms of the magnitudes:
//!
//! ```text
//! HS = (√n − ‖x‖₁/‖x‖₂) / (√n − 1)
//! ```
//!
//! 0 for a signal whose samples share one magnitude, 1 for a one-hot
//! signal. Scale invariant. Needs a single pass, so single-pass iterators
//! are accepted directly.

use num_traits::Zero;
use signal_core::{count, Error, Real, RealOf, Result, Sample};

/// Hoyer sparsity of the magnitudes
///
/// An all-zero signal scores 0 by convention; a single nonzero sample
/// scores 1.
///
/// # Errors
///
/// [`Error::InsufficientData`] for an empty sequence.
///
/// # Example
///
/// ```rust
/// use signal_robust::hoyer_sparsity;
///
/// assert_eq!(hoyer_sparsity([0.0f64, 3.0, 0.0]).unwrap(), 1.0);
/// ```
pub fn hoyer_sparsity<I>(samples: I) -> Result<RealOf<I::Item>>
where
    I: IntoIterator,
    I::Item: Sample,
{
    let mut l1 = RealOf::<I::Item>::zero();
    let mut l2_sq = RealOf::<I::Item>::zero();
    let mut n = 0usize;
    for x in samples {
        l1 = l1 + x.magnitude();
        l2_sq = l2_sq + x.norm_sqr();
        n += 1;
    }

    if n == 0 {
        return Err(Error::empty_input("Hoyer sparsity"));
    }
    hoyer_from_norms(l1, l2_sq, n)
}

fn hoyer_from_norms<R: Real>(l1: R, l2_sq: R, n: usize) -> Result<R> {
    let one = R::one();
    if l2_sq == R::zero() {
        return Ok(R::zero());
    }
    if n == 1 {
        return Ok(one);
    }
    let root_n = count::<R>(n)?.sqrt();
    Ok((root_n - l1 / l2_sq.sqrt()) / (root_n - one))
}
