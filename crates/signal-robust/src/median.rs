//! Absolute median
//!
//! The median of `|x_i|`. Two entry points:
//!
//! - [`absolute_median`] copies magnitudes into an owned buffer and never
//!   touches the caller's data; it accepts any sequence, including
//!   single-pass iterators.
//! - [`absolute_median_in_place`] selects directly inside a caller-owned
//!   mutable slice and avoids the copy. The slice's element order is not
//!   preserved.

use crate::order::median_by_key;
use signal_core::{Error, RealOf, Result, Sample};

/// Median of the magnitudes of a sequence
///
/// # Errors
///
/// [`Error::InsufficientData`] for an empty sequence.
///
/// # Example
///
/// ```rust
/// use signal_robust::absolute_median;
///
/// let v = vec![-1.0f64, 2.0, -3.0, 4.0, -5.0, 6.0, -7.0];
/// assert_eq!(absolute_median(&v).unwrap(), 4.0);
/// assert_eq!(absolute_median([2.0f64, -4.0]).unwrap(), 3.0);
/// ```
pub fn absolute_median<I>(samples: I) -> Result<RealOf<I::Item>>
where
    I: IntoIterator,
    I::Item: Sample,
{
    let mut magnitudes: Vec<RealOf<I::Item>> =
        samples.into_iter().map(Sample::magnitude).collect();
    median_by_key(&mut magnitudes, |m| *m).ok_or_else(|| Error::empty_input("absolute median"))
}

/// Median of the magnitudes, selecting in place
///
/// Reorders `data`; afterwards the element order is unspecified.
///
/// # Errors
///
/// [`Error::InsufficientData`] for an empty slice.
pub fn absolute_median_in_place<T: Sample>(data: &mut [T]) -> Result<T::Real> {
    median_by_key(data, |x| x.magnitude()).ok_or_else(|| Error::empty_input("absolute median"))
}
