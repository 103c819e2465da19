//! Inexact number kinds: real numbers backed by `f64` and complex numbers.

use std::{
    f64::consts::PI,
    fmt::{self, Display, Formatter},
    hash::Hash,
    ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use rand::Rng;

use crate::utils;

use super::{Arithmetic, NumberError};

/// A wrapper around `f64` that implements `Eq` and `Hash`.
/// All `NaN` values are considered equal, and `-0` is considered equal to `0`.
#[derive(Debug, Copy, Clone, Default)]
pub struct F64(f64);

impl F64 {
    #[inline]
    pub fn into_inner(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < 0.
    }

    pub fn sample(rng: &mut impl rand::RngCore, range: (f64, f64)) -> F64 {
        rng.gen_range(range.0..range.1).into()
    }

    /// The real `k`-th root. Even roots of negative numbers yield `NaN`;
    /// the principal complex root is available through [Complex].
    pub(crate) fn real_root(x: f64, k: u32) -> f64 {
        if x < 0. {
            if k % 2 == 0 {
                f64::NAN
            } else {
                -utils::nth_root(-x, k)
            }
        } else {
            utils::nth_root(x, k)
        }
    }
}

impl From<f64> for F64 {
    #[inline(always)]
    fn from(value: f64) -> Self {
        F64(value)
    }
}

impl From<F64> for f64 {
    #[inline(always)]
    fn from(value: F64) -> Self {
        value.0
    }
}

impl PartialEq for F64 {
    fn eq(&self, other: &Self) -> bool {
        if self.0.is_nan() && other.0.is_nan() {
            true
        } else {
            self.0 == other.0
        }
    }
}

impl Eq for F64 {}

impl PartialOrd for F64 {
    /// Consistent with [PartialEq]: two `NaN` values compare equal,
    /// while `NaN` and a number are unordered.
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if self.0.is_nan() && other.0.is_nan() {
            Some(std::cmp::Ordering::Equal)
        } else {
            self.0.partial_cmp(&other.0)
        }
    }
}

impl Hash for F64 {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        if self.0.is_nan() {
            state.write_u64(0x7ff8000000000000);
        } else if self.0 == 0. {
            state.write_u64(0);
        } else {
            state.write_u64(self.0.to_bits());
        }
    }
}

impl Display for F64 {
    /// Integral values are printed with a trailing `.0`, so that they
    /// cannot be confused with exact integers.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.is_finite() && self.0.fract() == 0. && self.0.abs() < 1e16 {
            write!(f, "{:.1}", self.0)
        } else {
            Display::fmt(&self.0, f)
        }
    }
}

impl FromStr for F64 {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<f64>()
            .map(F64)
            .map_err(|_| NumberError::UnknownOperand(s.into()))
    }
}

impl Neg for F64 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        F64(-self.0)
    }
}

impl Add<F64> for F64 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: F64) -> Self::Output {
        F64(self.0 + rhs.0)
    }
}

impl Sub<F64> for F64 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: F64) -> Self::Output {
        F64(self.0 - rhs.0)
    }
}

impl Mul<F64> for F64 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: F64) -> Self::Output {
        F64(self.0 * rhs.0)
    }
}

impl Div<F64> for F64 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: F64) -> Self::Output {
        F64(self.0 / rhs.0)
    }
}

impl AddAssign<F64> for F64 {
    #[inline]
    fn add_assign(&mut self, rhs: F64) {
        self.0 += rhs.0;
    }
}

impl SubAssign<F64> for F64 {
    #[inline]
    fn sub_assign(&mut self, rhs: F64) {
        self.0 -= rhs.0;
    }
}

impl MulAssign<F64> for F64 {
    #[inline]
    fn mul_assign(&mut self, rhs: F64) {
        self.0 *= rhs.0;
    }
}

impl Arithmetic for F64 {
    fn zero(&self) -> Self {
        F64(0.)
    }

    fn new_zero() -> Self {
        F64(0.)
    }

    fn one(&self) -> Self {
        F64(1.)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0.
    }

    fn value(&self) -> Option<f64> {
        Some(self.0)
    }

    fn negative(&mut self) -> &mut Self {
        self.0 = -self.0;
        self
    }

    fn add(&mut self, rhs: &Self) -> &mut Self {
        *self += *rhs;
        self
    }

    fn subtract(&mut self, rhs: &Self) -> &mut Self {
        *self -= *rhs;
        self
    }

    fn multiply_with(&mut self, rhs: &Self) -> &mut Self {
        *self *= *rhs;
        self
    }

    fn divide_by(&mut self, rhs: &Self) -> Result<&mut Self, NumberError> {
        if rhs.is_zero() {
            return Err(NumberError::DivisionByZero);
        }
        self.0 /= rhs.0;
        Ok(self)
    }

    fn square(&mut self) -> &mut Self {
        self.0 *= self.0;
        self
    }

    fn square_root(&mut self) -> &mut Self {
        self.0 = F64::real_root(self.0, 2);
        self
    }

    fn root(&mut self, k: u32) -> Result<&mut Self, NumberError> {
        if k == 0 {
            return Err(NumberError::DivisionByZero);
        }
        self.0 = F64::real_root(self.0, k);
        Ok(self)
    }

    fn norm_squared(&self) -> Self {
        F64(self.0 * self.0)
    }
}

/// A complex number, `re + i * im`, where `i` is the imaginary unit.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Complex {
    pub re: F64,
    pub im: F64,
}

impl Complex {
    #[inline]
    pub fn new(re: f64, im: f64) -> Complex {
        Complex {
            re: re.into(),
            im: im.into(),
        }
    }

    #[inline]
    pub fn i() -> Complex {
        Complex::new(0., 1.)
    }

    #[inline]
    pub fn from_polar_coordinates(r: f64, phi: f64) -> Complex {
        Complex::new(r * phi.cos(), r * phi.sin())
    }

    #[inline]
    pub fn conj(&self) -> Complex {
        Complex {
            re: self.re,
            im: -self.im,
        }
    }

    #[inline]
    pub fn arg(&self) -> f64 {
        self.im.0.atan2(self.re.0)
    }

    /// The squared modulus `re² + im²`.
    #[inline]
    pub fn modulus_squared(&self) -> f64 {
        self.re.0 * self.re.0 + self.im.0 * self.im.0
    }

    #[inline]
    pub fn modulus(&self) -> f64 {
        self.re.0.hypot(self.im.0)
    }

    /// Returns the real part if the imaginary part is zero.
    pub fn to_real(&self) -> Option<F64> {
        if self.im.0 == 0. {
            Some(self.re)
        } else {
            None
        }
    }

    /// The principal `k`-th root.
    pub(crate) fn principal_root(&self, k: u32) -> Complex {
        if self.modulus_squared() == 0. {
            return Complex::default();
        }
        Complex::from_polar_coordinates(
            utils::nth_root(self.modulus(), k),
            self.arg() / k as f64,
        )
    }

    /// The principal `k`-th root of the real number `x`.
    pub(crate) fn principal_root_of_real(x: f64, k: u32) -> Complex {
        if x < 0. {
            Complex::from_polar_coordinates(utils::nth_root(-x, k), PI / k as f64)
        } else {
            Complex::new(utils::nth_root(x, k), 0.)
        }
    }
}

impl From<F64> for Complex {
    fn from(re: F64) -> Self {
        Complex { re, im: F64(0.) }
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Complex::new(re, 0.)
    }
}

impl Display for Complex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.im.0 == 0. {
            return write!(f, "{}", self.re);
        }
        if self.re.0 == 0. {
            return write!(f, "{}i", self.im);
        }
        if self.im.is_negative() {
            write!(f, "{} - {}i", self.re, -self.im)
        } else {
            write!(f, "{} + {}i", self.re, self.im)
        }
    }
}

impl FromStr for Complex {
    type Err = NumberError;

    /// Parse `a + bi`, `a - bi`, `bi`, `i` or a real number `a`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || NumberError::UnknownOperand(s.into());
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();

        let Some(imaginary) = compact.strip_suffix('i') else {
            return compact.parse::<F64>().map(Complex::from).map_err(|_| unknown());
        };

        // split at the last sign that is not part of an exponent
        let split = imaginary
            .char_indices()
            .filter(|(p, c)| {
                (*c == '+' || *c == '-')
                    && *p > 0
                    && !matches!(imaginary.as_bytes()[p - 1], b'e' | b'E')
            })
            .map(|(p, _)| p)
            .last();

        let (re, im) = match split {
            Some(p) => (&imaginary[..p], &imaginary[p..]),
            None => ("0", imaginary),
        };

        let im = match im {
            "" | "+" => 1.,
            "-" => -1.,
            x => x.parse::<f64>().map_err(|_| unknown())?,
        };
        let re = re.parse::<f64>().map_err(|_| unknown())?;

        Ok(Complex::new(re, im))
    }
}

impl Neg for Complex {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Complex {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl Add<Complex> for Complex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Complex) -> Self::Output {
        Complex {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl Sub<Complex> for Complex {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Complex) -> Self::Output {
        Complex {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl Mul<Complex> for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Complex) -> Self::Output {
        Complex {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl Div<Complex> for Complex {
    type Output = Self;

    /// Divide two complex numbers. Division by zero yields `NaN` components.
    #[inline]
    fn div(self, rhs: Complex) -> Self::Output {
        let n = rhs.modulus_squared();
        let re = self.re.0 * rhs.re.0 + self.im.0 * rhs.im.0;
        let im = self.im.0 * rhs.re.0 - self.re.0 * rhs.im.0;
        Complex::new(re / n, im / n)
    }
}

impl Arithmetic for Complex {
    fn zero(&self) -> Self {
        Complex::default()
    }

    fn new_zero() -> Self {
        Complex::default()
    }

    fn one(&self) -> Self {
        Complex::new(1., 0.)
    }

    fn is_zero(&self) -> bool {
        self.modulus_squared() == 0.
    }

    fn value(&self) -> Option<f64> {
        self.to_real().map(F64::into_inner)
    }

    fn negative(&mut self) -> &mut Self {
        *self = -*self;
        self
    }

    fn add(&mut self, rhs: &Self) -> &mut Self {
        *self = *self + *rhs;
        self
    }

    fn subtract(&mut self, rhs: &Self) -> &mut Self {
        *self = *self - *rhs;
        self
    }

    fn multiply_with(&mut self, rhs: &Self) -> &mut Self {
        *self = *self * *rhs;
        self
    }

    fn divide_by(&mut self, rhs: &Self) -> Result<&mut Self, NumberError> {
        if rhs.is_zero() {
            return Err(NumberError::DivisionByZero);
        }
        *self = *self / *rhs;
        Ok(self)
    }

    fn square(&mut self) -> &mut Self {
        *self = *self * *self;
        self
    }

    fn square_root(&mut self) -> &mut Self {
        *self = self.principal_root(2);
        self
    }

    fn root(&mut self, k: u32) -> Result<&mut Self, NumberError> {
        if k == 0 {
            return Err(NumberError::DivisionByZero);
        }
        *self = self.principal_root(k);
        Ok(self)
    }

    fn norm_squared(&self) -> Self {
        Complex::new(self.modulus_squared(), 0.)
    }
}
