//! Generic numeric trait hierarchy for signal statistics
//!
//! Estimators are generic over two things: the element type stored in the
//! input sequence ([`Sample`]) and the real working precision they compute
//! and return in ([`Sample::Real`]).
//!
//! | Element type | Working precision |
//! |--------------|-------------------|
//! | `f32`, `Complex<f32>` | `f32` |
//! | `f64`, `Complex<f64>` | `f64` |
//! | built-in integers | `f64` |
//! | `OrderedFloat<f32>`, `OrderedFloat<f64>` | themselves |
//! | user float registered with [`real_sample!`](crate::real_sample) | itself |
//!
//! Any type implementing [`num_traits::Float`] can serve as a working
//! precision, which is how extended and arbitrary precision floats plug in.

use crate::error::{Error, Result};
use num_complex::Complex;
use num_traits::{Float, FromPrimitive};
use ordered_float::OrderedFloat;
use std::fmt::Debug;

/// Real working precision for accumulation and results
///
/// `Float` implies `Copy`, so precisions are fixed-size values: double-double
/// or quad-precision types qualify, heap-backed arbitrary precision numbers
/// do not.
pub trait Real: Float + FromPrimitive + Debug + Send + Sync {}

impl<R> Real for R where R: Float + FromPrimitive + Debug + Send + Sync {}

/// Element type of a signal
///
/// Estimators work on magnitudes; the Cartesian parts are only needed to
/// remove a (possibly complex) mean.
pub trait Sample: Copy + Debug {
    /// Precision used for accumulation and returned estimates
    type Real: Real;

    /// Magnitude `|x|` (Euclidean norm for complex samples)
    fn magnitude(self) -> Self::Real;

    /// Squared magnitude `|x|²`
    fn norm_sqr(self) -> Self::Real;

    /// Real and imaginary parts; zero imaginary part for real samples
    fn parts(self) -> (Self::Real, Self::Real);
}

/// Real-valued element type
///
/// Required by estimators that remove a mean or work with signed moments.
pub trait RealSample: Sample {
    /// Value promoted to the working precision
    fn to_real(self) -> Self::Real;
}

/// Working precision of a sample type
pub type RealOf<S> = <S as Sample>::Real;

/// Register float types as real samples working in their own precision
///
/// The type must implement `num_traits::Float` and `FromPrimitive`, and
/// the orphan rule applies: invoke it in the crate that defines the type.
///
/// ```rust,ignore
/// use signal_core::real_sample;
///
/// #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
/// struct Quad(/* ... */);
/// // impl num_traits::Float, FromPrimitive, ... for Quad
///
/// real_sample!(Quad);
/// ```
#[macro_export]
macro_rules! real_sample {
    ($($t:ty),* $(,)?) => {
        $(
            impl $crate::numeric::Sample for $t {
                type Real = $t;

                #[inline]
                fn magnitude(self) -> $t {
                    $crate::num_traits::Float::abs(self)
                }

                #[inline]
                fn norm_sqr(self) -> $t {
                    self * self
                }

                #[inline]
                fn parts(self) -> ($t, $t) {
                    (self, <$t as $crate::num_traits::Zero>::zero())
                }
            }

            impl $crate::numeric::RealSample for $t {
                #[inline]
                fn to_real(self) -> $t {
                    self
                }
            }
        )*
    };
}

real_sample!(f32, f64, OrderedFloat<f32>, OrderedFloat<f64>);

// Integers are widened to f64 so sums of squares cannot overflow.
macro_rules! integer_sample {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sample for $t {
                type Real = f64;

                #[inline]
                fn magnitude(self) -> f64 {
                    (self as f64).abs()
                }

                #[inline]
                fn norm_sqr(self) -> f64 {
                    let x = self as f64;
                    x * x
                }

                #[inline]
                fn parts(self) -> (f64, f64) {
                    (self as f64, 0.0)
                }
            }

            impl RealSample for $t {
                #[inline]
                fn to_real(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

integer_sample!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<F: Real> Sample for Complex<F> {
    type Real = F;

    #[inline]
    fn magnitude(self) -> F {
        self.norm()
    }

    #[inline]
    fn norm_sqr(self) -> F {
        Complex::norm_sqr(&self)
    }

    #[inline]
    fn parts(self) -> (F, F) {
        (self.re, self.im)
    }
}

impl<S: Sample> Sample for &S {
    type Real = S::Real;

    #[inline]
    fn magnitude(self) -> S::Real {
        (*self).magnitude()
    }

    #[inline]
    fn norm_sqr(self) -> S::Real {
        (*self).norm_sqr()
    }

    #[inline]
    fn parts(self) -> (S::Real, S::Real) {
        (*self).parts()
    }
}

impl<S: RealSample> RealSample for &S {
    #[inline]
    fn to_real(self) -> S::Real {
        (*self).to_real()
    }
}

/// Convert an `f64` constant into the working precision
pub fn constant<R: Real>(value: f64) -> Result<R> {
    R::from_f64(value).ok_or_else(|| {
        Error::Computation(format!("constant {value} is not representable"))
    })
}

/// Convert a sample count into the working precision
pub fn count<R: Real>(n: usize) -> Result<R> {
    R::from_usize(n)
        .ok_or_else(|| Error::Computation(format!("sample count {n} is not representable")))
}

/// Power ratio in decibels, `10·log10(ratio)`
pub fn decibels<R: Real>(ratio: R) -> R {
    let two = R::one() + R::one();
    let ten = (two + two + R::one()) * two;
    ten * ratio.log10()
}
