//! Shared utilities for integration tests
//!
//! [`DoubleDouble`] is an unevaluated sum `hi + lo` of two `f64`s giving
//! about 106 bits of significand. Arithmetic, `sqrt`, `exp` and `ln` (with
//! the logarithms built on it) keep the full width; trigonometric and
//! hyperbolic functions fall back to the accuracy of `hi`.

use num_traits::{Float, FromPrimitive, Num, NumCast, One, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::num::FpCategory;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// `2^-104`
const DD_EPSILON: f64 = f64::EPSILON * f64::EPSILON;

const LN_2: DoubleDouble = DoubleDouble {
    hi: std::f64::consts::LN_2,
    lo: 2.319_046_813_846_299_6e-17,
};

const LN_10: DoubleDouble = DoubleDouble {
    hi: std::f64::consts::LN_10,
    lo: -2.170_756_223_382_249_4e-16,
};

/// Normalised so that `hi == hi + lo` in `f64`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DoubleDouble {
    hi: f64,
    lo: f64,
}

signal_stats::real_sample!(DoubleDouble);

fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    (s, (a - (s - bb)) + (b - bb))
}

fn quick_two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    (s, b - (s - a))
}

fn two_prod(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    (p, a.mul_add(b, -p))
}

impl DoubleDouble {
    pub const fn new(hi: f64, lo: f64) -> Self {
        Self { hi, lo }
    }

    pub fn hi(self) -> f64 {
        self.hi
    }

    fn from_hi(hi: f64) -> Self {
        Self { hi, lo: 0.0 }
    }

    fn renorm(hi: f64, lo: f64) -> Self {
        let (hi, lo) = quick_two_sum(hi, lo);
        if hi.is_finite() {
            Self { hi, lo }
        } else {
            Self::from_hi(hi)
        }
    }

    /// Multiply by a power of two, exact away from overflow and underflow
    fn scale(self, factor: f64) -> Self {
        Self::renorm(self.hi * factor, self.lo * factor)
    }
}

impl From<f64> for DoubleDouble {
    fn from(hi: f64) -> Self {
        Self::from_hi(hi)
    }
}

impl PartialOrd for DoubleDouble {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.hi.partial_cmp(&other.hi)? {
            Ordering::Equal => self.lo.partial_cmp(&other.lo),
            ord => Some(ord),
        }
    }
}

impl Add for DoubleDouble {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let (s, e) = two_sum(self.hi, rhs.hi);
        if !s.is_finite() {
            return Self::from_hi(s);
        }
        let (t, f) = two_sum(self.lo, rhs.lo);
        let (s, e) = quick_two_sum(s, e + t);
        Self::renorm(s, e + f)
    }
}

impl Sub for DoubleDouble {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

impl Mul for DoubleDouble {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (p, e) = two_prod(self.hi, rhs.hi);
        if !p.is_finite() {
            return Self::from_hi(p);
        }
        Self::renorm(p, e + (self.hi * rhs.lo + self.lo * rhs.hi))
    }
}

impl Div for DoubleDouble {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        let q1 = self.hi / rhs.hi;
        if !q1.is_finite() || q1 == 0.0 {
            return Self::from_hi(q1);
        }
        let r = self - rhs * Self::from_hi(q1);
        let q2 = r.hi / rhs.hi;
        let r = r - rhs * Self::from_hi(q2);
        let q3 = r.hi / rhs.hi;
        let (q1, q2) = quick_two_sum(q1, q2);
        Self { hi: q1, lo: q2 } + Self::from_hi(q3)
    }
}

impl Rem for DoubleDouble {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self {
        self - rhs * (self / rhs).trunc()
    }
}

impl Neg for DoubleDouble {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            hi: -self.hi,
            lo: -self.lo,
        }
    }
}

impl Zero for DoubleDouble {
    fn zero() -> Self {
        Self::from_hi(0.0)
    }

    fn is_zero(&self) -> bool {
        self.hi == 0.0
    }
}

impl One for DoubleDouble {
    fn one() -> Self {
        Self::from_hi(1.0)
    }
}

impl Num for DoubleDouble {
    type FromStrRadixErr = <f64 as Num>::FromStrRadixErr;

    fn from_str_radix(s: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        f64::from_str_radix(s, radix).map(Self::from_hi)
    }
}

impl ToPrimitive for DoubleDouble {
    fn to_i64(&self) -> Option<i64> {
        let t = self.trunc();
        if t.hi.is_finite() && t.hi.abs() < 9.223_372_036_854_775_807e18 {
            (t.hi as i64).checked_add(t.lo as i64)
        } else {
            None
        }
    }

    fn to_u64(&self) -> Option<u64> {
        let t = self.trunc();
        if t.hi.is_finite() && t.hi >= 0.0 && t.hi < 1.844_674_407_370_955_2e19 {
            let lo = t.lo as i64;
            if lo < 0 {
                (t.hi as u64).checked_sub(lo.unsigned_abs())
            } else {
                (t.hi as u64).checked_add(lo as u64)
            }
        } else {
            None
        }
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.hi)
    }
}

impl NumCast for DoubleDouble {
    fn from<T: ToPrimitive>(n: T) -> Option<Self> {
        n.to_f64().map(Self::from_hi)
    }
}

impl FromPrimitive for DoubleDouble {
    fn from_i64(n: i64) -> Option<Self> {
        let hi = n as f64;
        Some(Self::renorm(hi, (<i128 as From<i64>>::from(n) - hi as i128) as f64))
    }

    fn from_u64(n: u64) -> Option<Self> {
        let hi = n as f64;
        Some(Self::renorm(hi, (<i128 as From<u64>>::from(n) - hi as i128) as f64))
    }

    fn from_f64(n: f64) -> Option<Self> {
        Some(Self::from_hi(n))
    }
}

impl Float for DoubleDouble {
    fn nan() -> Self {
        Self::from_hi(f64::NAN)
    }

    fn infinity() -> Self {
        Self::from_hi(f64::INFINITY)
    }

    fn neg_infinity() -> Self {
        Self::from_hi(f64::NEG_INFINITY)
    }

    fn neg_zero() -> Self {
        Self::from_hi(-0.0)
    }

    fn min_value() -> Self {
        Self::from_hi(f64::MIN)
    }

    fn min_positive_value() -> Self {
        Self::from_hi(f64::MIN_POSITIVE)
    }

    fn max_value() -> Self {
        Self::from_hi(f64::MAX)
    }

    fn epsilon() -> Self {
        Self::from_hi(DD_EPSILON)
    }

    fn is_nan(self) -> bool {
        self.hi.is_nan()
    }

    fn is_infinite(self) -> bool {
        self.hi.is_infinite()
    }

    fn is_finite(self) -> bool {
        self.hi.is_finite()
    }

    fn is_normal(self) -> bool {
        self.hi.is_normal()
    }

    fn classify(self) -> FpCategory {
        self.hi.classify()
    }

    fn floor(self) -> Self {
        let hi = self.hi.floor();
        if hi == self.hi {
            Self::renorm(hi, self.lo.floor())
        } else {
            Self::from_hi(hi)
        }
    }

    fn ceil(self) -> Self {
        let hi = self.hi.ceil();
        if hi == self.hi {
            Self::renorm(hi, self.lo.ceil())
        } else {
            Self::from_hi(hi)
        }
    }

    fn round(self) -> Self {
        if self.hi.is_sign_negative() {
            -(-self).round()
        } else {
            (self + Self::from_hi(0.5)).floor()
        }
    }

    fn trunc(self) -> Self {
        if self.hi.is_sign_negative() {
            self.ceil()
        } else {
            self.floor()
        }
    }

    fn fract(self) -> Self {
        self - self.trunc()
    }

    fn abs(self) -> Self {
        if self.hi.is_sign_negative() {
            -self
        } else {
            self
        }
    }

    fn signum(self) -> Self {
        Self::from_hi(self.hi.signum())
    }

    fn is_sign_positive(self) -> bool {
        self.hi.is_sign_positive()
    }

    fn is_sign_negative(self) -> bool {
        self.hi.is_sign_negative()
    }

    fn mul_add(self, a: Self, b: Self) -> Self {
        self * a + b
    }

    fn recip(self) -> Self {
        Self::one() / self
    }

    fn powi(self, n: i32) -> Self {
        let mut base = self;
        let mut acc = Self::one();
        let mut e = n.unsigned_abs();
        while e > 0 {
            if e & 1 == 1 {
                acc = acc * base;
            }
            base = base * base;
            e >>= 1;
        }
        if n < 0 {
            acc.recip()
        } else {
            acc
        }
    }

    fn powf(self, n: Self) -> Self {
        if self.hi <= 0.0 || !self.hi.is_finite() {
            return Self::from_hi(self.hi.powf(n.hi));
        }
        (self.ln() * n).exp()
    }

    fn sqrt(self) -> Self {
        if self.hi <= 0.0 || !self.hi.is_finite() {
            return Self::from_hi(self.hi.sqrt());
        }
        // One Newton step from the f64 root
        let s = self.hi.sqrt();
        let (p, e) = two_prod(s, s);
        let r = self - Self::renorm(p, e);
        Self::from_hi(s) + Self::from_hi(r.hi / (2.0 * s))
    }

    fn exp(self) -> Self {
        if !self.hi.is_finite() || self.hi.abs() > 700.0 {
            return Self::from_hi(self.hi.exp());
        }
        // exp(x) = 2^k · (1 + expm1(r))^256 with |r| ≤ ln2/512
        let k = (self.hi / std::f64::consts::LN_2).round();
        let r = (self - LN_2 * Self::from_hi(k)).scale(1.0 / 256.0);

        let mut term = r;
        let mut expm1 = r;
        for i in 2..=16 {
            term = term * r / Self::from_hi(<f64 as From<i32>>::from(i));
            expm1 = expm1 + term;
            if term.hi.abs() <= DD_EPSILON * expm1.hi.abs() {
                break;
            }
        }
        for _ in 0..8 {
            expm1 = expm1.scale(2.0) + expm1 * expm1;
        }
        (expm1 + Self::one()).scale(2.0f64.powi(k as i32))
    }

    fn exp2(self) -> Self {
        (self * LN_2).exp()
    }

    fn ln(self) -> Self {
        if self.hi <= 0.0 || !self.hi.is_finite() || !(1e-290..=1e290).contains(&self.hi) {
            return Self::from_hi(self.hi.ln());
        }
        // One Newton step on exp(y) = x
        let y = Self::from_hi(self.hi.ln());
        y + self * (-y).exp() - Self::one()
    }

    fn log(self, base: Self) -> Self {
        self.ln() / base.ln()
    }

    fn log2(self) -> Self {
        self.ln() / LN_2
    }

    fn log10(self) -> Self {
        self.ln() / LN_10
    }

    fn max(self, other: Self) -> Self {
        if self.is_nan() || other > self {
            other
        } else {
            self
        }
    }

    fn min(self, other: Self) -> Self {
        if self.is_nan() || other < self {
            other
        } else {
            self
        }
    }

    fn abs_sub(self, other: Self) -> Self {
        if self <= other {
            Self::zero()
        } else {
            self - other
        }
    }

    fn cbrt(self) -> Self {
        if self.hi == 0.0 || !self.hi.is_finite() {
            return Self::from_hi(self.hi.cbrt());
        }
        let y = Self::from_hi(self.hi.cbrt());
        y + (self - y * y * y) / (Self::from_hi(3.0) * y * y)
    }

    fn hypot(self, other: Self) -> Self {
        (self * self + other * other).sqrt()
    }

    fn sin(self) -> Self {
        Self::from_hi(self.hi.sin())
    }

    fn cos(self) -> Self {
        Self::from_hi(self.hi.cos())
    }

    fn tan(self) -> Self {
        Self::from_hi(self.hi.tan())
    }

    fn asin(self) -> Self {
        Self::from_hi(self.hi.asin())
    }

    fn acos(self) -> Self {
        Self::from_hi(self.hi.acos())
    }

    fn atan(self) -> Self {
        Self::from_hi(self.hi.atan())
    }

    fn atan2(self, other: Self) -> Self {
        Self::from_hi(self.hi.atan2(other.hi))
    }

    fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }

    fn exp_m1(self) -> Self {
        self.exp() - Self::one()
    }

    fn ln_1p(self) -> Self {
        (Self::one() + self).ln()
    }

    fn sinh(self) -> Self {
        Self::from_hi(self.hi.sinh())
    }

    fn cosh(self) -> Self {
        Self::from_hi(self.hi.cosh())
    }

    fn tanh(self) -> Self {
        Self::from_hi(self.hi.tanh())
    }

    fn asinh(self) -> Self {
        Self::from_hi(self.hi.asinh())
    }

    fn acosh(self) -> Self {
        Self::from_hi(self.hi.acosh())
    }

    fn atanh(self) -> Self {
        Self::from_hi(self.hi.atanh())
    }

    fn integer_decode(self) -> (u64, i16, i8) {
        self.hi.integer_decode()
    }
}

pub fn dd(x: f64) -> DoubleDouble {
    DoubleDouble::from_hi(x)
}

/// `1 + k·2^-70`: distinct as `DoubleDouble`, all equal to 1 as `f64`
pub fn near_one(k: i32) -> DoubleDouble {
    DoubleDouble::new(1.0, <f64 as From<i32>>::from(k) * 2.0f64.powi(-70))
}
