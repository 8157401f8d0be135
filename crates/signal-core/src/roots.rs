//! Numerically careful quadratic root finding
//!
//! Used by moment-matching estimators, which solve a quadratic whose
//! discriminant routinely sits close to zero.

use crate::numeric::Real;

/// Compute `a·b − c·d` with a single rounding error (Kahan's algorithm)
#[inline]
pub fn difference_of_products<R: Real>(a: R, b: R, c: R, d: R) -> R {
    let cd = c * d;
    let err = (-c).mul_add(d, cd);
    let dop = a.mul_add(b, -cd);
    dop + err
}

/// Real roots of `a·x² + b·x + c = 0`, in ascending order
///
/// Degenerate cases:
/// - `a == 0`: the linear root `-c/b` is returned twice
/// - `a == b == 0`: `(0, 0)` when `c == 0`, otherwise `(NaN, NaN)`
/// - negative discriminant: `(NaN, NaN)`
/// - double root: returned twice
///
/// The discriminant uses [`difference_of_products`] and the roots use the
/// form `q = -(b + sign(b)·√Δ) / 2`, `x = q/a`, `x = c/q`, which avoids
/// cancellation between `b` and `√Δ`.
pub fn quadratic_roots<R: Real>(a: R, b: R, c: R) -> (R, R) {
    let zero = R::zero();
    let two = R::one() + R::one();
    let four = two + two;

    if a == zero {
        if b == zero {
            return if c == zero {
                (zero, zero)
            } else {
                (R::nan(), R::nan())
            };
        }
        let x = -c / b;
        return (x, x);
    }

    if b == zero {
        let x_sq = -c / a;
        if x_sq < zero {
            return (R::nan(), R::nan());
        }
        let x = x_sq.sqrt();
        return (-x, x);
    }

    let discriminant = difference_of_products(b, b, four * a, c);
    if discriminant < zero {
        return (R::nan(), R::nan());
    }

    let q = -(b + b.signum() * discriminant.sqrt()) / two;
    let x0 = q / a;
    let x1 = c / q;
    if x0 < x1 {
        (x0, x1)
    } else {
        (x1, x0)
    }
}
