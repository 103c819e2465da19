use std::{
    cmp::Ordering,
    fmt::{Display, Error, Formatter},
    str::FromStr,
};

use rand::Rng;
use smallvec::SmallVec;
use tracing::{instrument, trace};

use crate::utils::{self, gcd_unsigned, gcd_unsigned_u128, is_near_integer, lcm_unsigned};

use super::{
    float::{Complex, F64},
    number::Number,
    ExactnessOptions, NumberError,
};

/// An exact rational number `sign * numerator / denominator`.
///
/// The representation is canonical: the sign is stored separately from the
/// magnitude, `gcd(numerator, denominator) = 1`, the denominator is positive
/// and zero is stored as `0/1` with sign `0`. Every constructor and operation
/// preserves this, so that equality can be checked structurally.
///
/// Operations that could overflow 64 bits are offered as `checked_*` methods
/// that return `None` instead. [Number] uses these to promote the result
/// to a [F64] when that happens.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Rational {
    sign: i8,
    numerator: u64,
    denominator: u64,
}

impl Rational {
    /// Create the rational `numerator / denominator`, with a sign derived from the signs of both.
    ///
    /// Yields [NumberError::DivisionByZero] if `denominator` is zero, even if `numerator` is zero.
    pub fn new(numerator: i64, denominator: i64) -> Result<Rational, NumberError> {
        let sign = if (numerator < 0) == (denominator < 0) {
            1
        } else {
            -1
        };
        Rational::with_sign(numerator, denominator, sign)
    }

    /// Create the rational `sign * |numerator| / |denominator|`, ignoring the signs of
    /// `numerator` and `denominator`. Only the sign of `sign` is used, and a zero
    /// sign yields zero.
    pub fn with_sign(numerator: i64, denominator: i64, sign: i8) -> Result<Rational, NumberError> {
        if denominator == 0 {
            return Err(NumberError::DivisionByZero);
        }

        Ok(Rational::reduced(
            sign.signum(),
            numerator.unsigned_abs(),
            denominator.unsigned_abs(),
        ))
    }

    /// Construct from a magnitude that fits in 64 bits, `denominator` must be non-zero.
    fn reduced(sign: i8, mut numerator: u64, mut denominator: u64) -> Rational {
        if sign == 0 || numerator == 0 {
            return Rational::zero();
        }

        let g = gcd_unsigned(numerator, denominator);
        if g > 1 {
            numerator /= g;
            denominator /= g;
        }

        Rational {
            sign,
            numerator,
            denominator,
        }
    }

    /// Construct from a 128-bit magnitude, `denominator` must be non-zero.
    /// Returns `None` if the reduced magnitude does not fit in 64 bits.
    fn from_wide(sign: i8, mut numerator: u128, mut denominator: u128) -> Option<Rational> {
        if sign == 0 || numerator == 0 {
            return Some(Rational::zero());
        }

        let g = gcd_unsigned_u128(numerator, denominator);
        if g > 1 {
            numerator /= g;
            denominator /= g;
        }

        Some(Rational {
            sign,
            numerator: numerator.try_into().ok()?,
            denominator: denominator.try_into().ok()?,
        })
    }

    pub fn zero() -> Rational {
        Rational {
            sign: 0,
            numerator: 0,
            denominator: 1,
        }
    }

    pub fn one() -> Rational {
        Rational {
            sign: 1,
            numerator: 1,
            denominator: 1,
        }
    }

    /// Returns `-1`, `0` or `1`.
    pub fn sign(&self) -> i8 {
        self.sign
    }

    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.sign == 0
    }

    pub fn is_one(&self) -> bool {
        self.sign == 1 && self.numerator == 1 && self.denominator == 1
    }

    pub fn is_negative(&self) -> bool {
        self.sign < 0
    }

    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    /// The value as a floating point number.
    pub fn value(&self) -> f64 {
        if self.sign == 0 {
            return 0.;
        }

        let abs = self.numerator as f64 / self.denominator as f64;
        if self.sign < 0 {
            -abs
        } else {
            abs
        }
    }

    /// Return the value as an `i64` if it is an integer that fits.
    pub fn to_i64(&self) -> Option<i64> {
        if !self.is_integer() {
            return None;
        }
        let n = i64::try_from(self.numerator as i128 * self.sign as i128).ok()?;
        Some(n)
    }

    /// Negate the rational in-place.
    pub fn negative(&mut self) -> &mut Self {
        self.sign = -self.sign;
        self
    }

    /// Invert the rational in-place. Yields [NumberError::DivisionByZero] if the rational is zero.
    pub fn reciprocal(&mut self) -> Result<&mut Self, NumberError> {
        if self.is_zero() {
            return Err(NumberError::DivisionByZero);
        }

        std::mem::swap(&mut self.numerator, &mut self.denominator);
        Ok(self)
    }

    cloned_forms! {
        /// Return the negated rational.
        fn negative_cloned = negative() -> Self;
        /// Return the inverse of the rational.
        fn reciprocal_cloned = reciprocal() -> Result<Self, NumberError>;
    }

    /// Add two rationals. Returns `None` if the result does not fit in 64 bits.
    pub fn checked_add(&self, rhs: &Rational) -> Option<Rational> {
        if self.is_zero() {
            return Some(rhs.clone());
        }
        if rhs.is_zero() {
            return Some(self.clone());
        }

        let lcm = lcm_unsigned(self.denominator, rhs.denominator);
        let summand1 = self.numerator as u128 * (lcm / self.denominator as u128);
        let summand2 = rhs.numerator as u128 * (lcm / rhs.denominator as u128);

        if self.sign == rhs.sign {
            Rational::from_wide(self.sign, summand1.checked_add(summand2)?, lcm)
        } else {
            // the sign follows the operand with the larger magnitude
            match summand1.cmp(&summand2) {
                Ordering::Equal => Some(Rational::zero()),
                Ordering::Greater => Rational::from_wide(self.sign, summand1 - summand2, lcm),
                Ordering::Less => Rational::from_wide(rhs.sign, summand2 - summand1, lcm),
            }
        }
    }

    /// Subtract two rationals. Returns `None` if the result does not fit in 64 bits.
    pub fn checked_sub(&self, rhs: &Rational) -> Option<Rational> {
        self.checked_add(&rhs.negative_cloned())
    }

    /// Multiply two rationals. Returns `None` if the result does not fit in 64 bits.
    pub fn checked_mul(&self, rhs: &Rational) -> Option<Rational> {
        if self.is_zero() || rhs.is_zero() {
            return Some(Rational::zero());
        }

        Rational::from_wide(
            self.sign * rhs.sign,
            self.numerator as u128 * rhs.numerator as u128,
            self.denominator as u128 * rhs.denominator as u128,
        )
    }

    /// Divide two rationals. Yields [NumberError::DivisionByZero] if `rhs` is zero and
    /// `Ok(None)` if the result does not fit in 64 bits.
    pub fn checked_div(&self, rhs: &Rational) -> Result<Option<Rational>, NumberError> {
        Ok(self.checked_mul(&rhs.reciprocal_cloned()?))
    }

    /// Square the rational. Returns `None` if the result does not fit in 64 bits.
    pub fn checked_square(&self) -> Option<Rational> {
        if self.is_zero() {
            return Some(Rational::zero());
        }

        // the square of a canonical rational is canonical
        Some(Rational {
            sign: 1,
            numerator: self.numerator.checked_mul(self.numerator)?,
            denominator: self.denominator.checked_mul(self.denominator)?,
        })
    }

    /// Take the `k`-th root of the rational.
    ///
    /// The roots of the numerator and denominator are computed separately. If both
    /// are integers up to `options.decimal_threshold` decimals, the result is an
    /// exact [Rational]. Otherwise the result is promoted to a [F64], or to the
    /// principal [Complex] root for even roots of negative numbers.
    ///
    /// Yields [NumberError::DivisionByZero] for `k = 0`.
    pub fn root(&self, k: u32, options: &ExactnessOptions) -> Result<Number, NumberError> {
        if k == 0 {
            return Err(NumberError::DivisionByZero);
        }

        Ok(self.principal_root(k, options))
    }

    /// Take the `k`-th root of the rational, for `k > 0`.
    #[instrument(level = "trace", skip(self, options), fields(value = %self))]
    pub(crate) fn principal_root(&self, k: u32, options: &ExactnessOptions) -> Number {
        debug_assert!(k > 0);

        if self.is_zero() || self.is_one() {
            return Number::Rational(self.clone());
        }

        if self.is_negative() && k % 2 == 0 {
            trace!("Even root of a negative number: promoting to complex");
            return Number::Complex(Complex::principal_root_of_real(self.value(), k));
        }

        let n = utils::nth_root(self.numerator as f64, k);
        let d = utils::nth_root(self.denominator as f64, k);

        if is_near_integer(n, options.decimal_threshold)
            && is_near_integer(d, options.decimal_threshold)
        {
            if let Some(r) = Rational::from_wide(self.sign, n.round() as u128, d.round() as u128)
            {
                return Number::Rational(r);
            }
        }

        trace!("Root is not exact: promoting to real");
        Number::Real(F64::from(self.sign as f64 * n / d))
    }

    /// Sample a random rational with a numerator in `range` and a positive
    /// denominator smaller than the upper bound of `range`.
    pub fn sample(rng: &mut impl rand::RngCore, range: (i64, i64)) -> Rational {
        let numerator: i64 = rng.gen_range(range.0..range.1);
        let denominator: u64 = rng.gen_range(1..range.1.max(2) as u64);
        Rational::reduced(
            numerator.signum() as i8,
            numerator.unsigned_abs(),
            denominator,
        )
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::zero()
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Rational::reduced(value.signum() as i8, value.unsigned_abs(), 1)
    }
}

impl From<i32> for Rational {
    fn from(value: i32) -> Self {
        Rational::from(value as i64)
    }
}

impl TryFrom<&Number> for Rational {
    type Error = NumberError;

    /// Convert an exact number to a rational.
    /// Yields [NumberError::UnknownOperand] for real and complex numbers.
    fn try_from(value: &Number) -> Result<Self, Self::Error> {
        match value {
            Number::Integer(i) => Ok(Rational::from(*i)),
            Number::Rational(r) => Ok(r.clone()),
            Number::Real(_) | Number::Complex(_) => {
                Err(NumberError::UnknownOperand(value.to_string().into()))
            }
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => {}
            ord => return ord,
        }

        let l = self.numerator as u128 * other.denominator as u128;
        let r = other.numerator as u128 * self.denominator as u128;
        if self.sign < 0 {
            r.cmp(&l)
        } else {
            l.cmp(&r)
        }
    }
}

impl Display for Rational {
    /// Print the rational as a mixed fraction, e.g. `- 3 1/2`.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        if self.sign == 0 {
            return f.write_str("0");
        }

        let int = self.numerator / self.denominator;
        let rem = self.numerator % self.denominator;

        if self.sign < 0 {
            f.write_str("- ")?;
        }
        if int != 0 {
            write!(f, "{}", int)?;
        }
        if int != 0 && rem != 0 {
            f.write_str(" ")?;
        }
        if rem != 0 {
            write!(f, "{}/{}", rem, self.denominator)?;
        }
        Ok(())
    }
}

impl FromStr for Rational {
    type Err = NumberError;

    /// Parse a rational in mixed (`- 3 1/2`), fractional (`-7/2`) or integer (`12`) form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || NumberError::UnknownOperand(s.into());

        let t = s.trim();
        let (sign, rest) = match t.strip_prefix('-') {
            Some(r) => (-1, r.trim_start()),
            None => (1, t),
        };

        let parse_u64 = |x: &str| {
            if x.bytes().all(|b| b.is_ascii_digit()) {
                x.parse::<u64>().map_err(|_| unknown())
            } else {
                Err(unknown())
            }
        };
        let parse_fraction = |x: &str| -> Result<(u64, u64), NumberError> {
            let (n, d) = x.split_once('/').ok_or_else(unknown)?;
            let d = parse_u64(d)?;
            if d == 0 {
                return Err(NumberError::DivisionByZero);
            }
            Ok((parse_u64(n)?, d))
        };

        let parts: SmallVec<[&str; 2]> = rest.split_whitespace().collect();
        let (int, (n, d)) = match parts.as_slice() {
            [x] if x.contains('/') => (0, parse_fraction(*x)?),
            [x] => (parse_u64(*x)?, (0, 1)),
            [i, x] => (parse_u64(*i)?, parse_fraction(*x)?),
            _ => return Err(unknown()),
        };

        Rational::from_wide(sign, int as u128 * d as u128 + n as u128, d as u128)
            .ok_or_else(unknown)
    }
}

#[cfg(test)]
mod test {
    use rand::{rngs::StdRng, SeedableRng};

    use crate::{
        domains::{number::Number, ExactnessOptions, NumberError},
        utils::gcd_unsigned,
    };

    use super::Rational;

    fn q(n: i64, d: i64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    #[test]
    fn construction() {
        let r = q(4, -6);
        assert_eq!((r.sign(), r.numerator(), r.denominator()), (-1, 2, 3));
        assert_eq!(q(-4, -6), q(2, 3));
        assert_eq!(q(0, 5), Rational::zero());
        assert_eq!(Rational::with_sign(-3, 4, 1).unwrap(), q(3, 4));
        assert_eq!(Rational::with_sign(3, 4, 0).unwrap(), Rational::zero());
        assert_eq!(Rational::from(-5i64), q(-5, 1));

        assert_eq!(Rational::new(5, 0), Err(NumberError::DivisionByZero));
        assert_eq!(Rational::new(0, 0), Err(NumberError::DivisionByZero));

        assert_eq!(Rational::try_from(&Number::Integer(7)), Ok(q(7, 1)));
        assert!(matches!(
            Rational::try_from(&Number::from(0.5)),
            Err(NumberError::UnknownOperand(_))
        ));
    }

    #[test]
    fn format() {
        assert_eq!(q(7, 2).to_string(), "3 1/2");
        assert_eq!(q(-5, 1).to_string(), "- 5");
        assert_eq!(q(-1, 3).to_string(), "- 1/3");
        assert_eq!(Rational::zero().to_string(), "0");

        for r in [q(7, 2), q(-5, 1), q(-1, 3), q(12, 5), Rational::zero()] {
            assert_eq!(r.to_string().parse::<Rational>(), Ok(r));
        }
        assert_eq!("-14/4".parse::<Rational>(), Ok(q(-7, 2)));
        assert_eq!("1/0".parse::<Rational>(), Err(NumberError::DivisionByZero));
        assert!("1.5".parse::<Rational>().is_err());
        assert!("1 2 3".parse::<Rational>().is_err());
    }

    #[test]
    fn add() {
        assert_eq!(q(1, 2).checked_add(&q(1, 3)), Some(q(5, 6)));
        assert_eq!(q(1, 2).checked_add(&q(-1, 3)), Some(q(1, 6)));
        assert_eq!(q(1, 3).checked_add(&q(-1, 2)), Some(q(-1, 6)));
        assert_eq!(q(-1, 3).checked_add(&q(1, 2)), Some(q(1, 6)));
        assert_eq!(q(-1, 2).checked_add(&q(-1, 2)), Some(q(-1, 1)));
        assert_eq!(q(3, 4).checked_add(&q(-3, 4)), Some(Rational::zero()));
        assert_eq!(Rational::zero().checked_add(&q(-2, 7)), Some(q(-2, 7)));
        assert_eq!(q(-2, 7).checked_add(&Rational::zero()), Some(q(-2, 7)));
        assert_eq!(
            Rational::zero().checked_add(&Rational::zero()),
            Some(Rational::zero())
        );
        assert_eq!(q(1, 6).checked_sub(&q(1, 6)), Some(Rational::zero()));

        assert_eq!(
            Rational::from(i64::MAX)
                .checked_add(&Rational::from(i64::MAX))
                .map(|r| r.numerator()),
            Some(u64::MAX - 1)
        );
        let min = Rational::from(i64::MIN);
        assert_eq!(min.checked_add(&min), None);
    }

    #[test]
    fn mul_div() {
        assert_eq!(q(2, 3).checked_mul(&q(9, 4)), Some(q(3, 2)));
        assert_eq!(q(-2, 3).checked_mul(&q(-3, 2)), Some(Rational::one()));
        assert_eq!(q(-2, 3).checked_mul(&Rational::zero()), Some(Rational::zero()));
        assert_eq!(q(1, 2).checked_div(&q(1, 4)), Ok(Some(q(2, 1))));
        assert_eq!(
            q(1, 2).checked_div(&Rational::zero()),
            Err(NumberError::DivisionByZero)
        );
        assert_eq!(
            Rational::from(i64::MAX).checked_mul(&Rational::from(i64::MAX)),
            None
        );

        assert_eq!(q(-2, 3).checked_square(), Some(q(4, 9)));
        assert_eq!(Rational::from(1i64 << 40).checked_square(), None);
    }

    #[test]
    fn reciprocal() {
        let mut r = q(-3, 8);
        r.reciprocal().unwrap();
        assert_eq!(r, q(-8, 3));
        assert_eq!(r.reciprocal_cloned().unwrap(), q(-3, 8));
        assert_eq!(r, q(-8, 3));

        assert_eq!(
            Rational::zero().reciprocal(),
            Err(NumberError::DivisionByZero)
        );

        let mut n = q(1, 2);
        n.negative();
        assert_eq!(n, q(-1, 2));
        assert_eq!(Rational::zero().negative_cloned(), Rational::zero());
    }

    #[test]
    fn root() {
        let opts = ExactnessOptions::default();
        assert_eq!(q(4, 9).root(2, &opts), Ok(Number::Rational(q(2, 3))));
        assert_eq!(q(-8, 27).root(3, &opts), Ok(Number::Rational(q(-2, 3))));
        assert_eq!(q(16, 81).root(4, &opts), Ok(Number::Rational(q(2, 3))));
        assert_eq!(q(2, 3).root(0, &opts), Err(NumberError::DivisionByZero));

        match q(2, 3).root(2, &opts) {
            Ok(Number::Real(r)) => assert!((r.into_inner() - (2f64 / 3.).sqrt()).abs() < 1e-12),
            x => panic!("Expected a real number, got {:?}", x),
        }

        match q(-4, 1).root(2, &opts) {
            Ok(Number::Complex(c)) => {
                assert!(c.re.into_inner().abs() < 1e-12);
                assert!((c.im.into_inner() - 2.).abs() < 1e-12);
            }
            x => panic!("Expected a complex number, got {:?}", x),
        }

        // with a threshold of zero decimals every root is exact
        let loose = ExactnessOptions::new().with_decimal_threshold(0);
        assert_eq!(q(2, 1).root(2, &loose), Ok(Number::Rational(q(1, 1))));
    }

    #[test]
    fn ordering() {
        assert!(q(1, 3) < q(1, 2));
        assert!(q(-1, 2) < q(-1, 3));
        assert!(q(-1, 2) < Rational::zero());
        assert!(Rational::zero() < q(1, 1_000_000));
        assert_eq!(q(2, 4).cmp(&q(1, 2)), std::cmp::Ordering::Equal);
        assert_eq!(q(-7, 2).value(), -3.5);
        assert_eq!(q(-7, 1).to_i64(), Some(-7));
        assert_eq!(q(7, 2).to_i64(), None);
    }

    #[test]
    fn canonical_after_operations() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..500 {
            let a = Rational::sample(&mut rng, (-1000, 1000));
            let b = Rational::sample(&mut rng, (-1000, 1000));
            let c = Rational::sample(&mut rng, (-1000, 1000));

            for r in [
                a.checked_add(&b).unwrap(),
                a.checked_sub(&b).unwrap(),
                a.checked_mul(&b).unwrap(),
                a.checked_square().unwrap(),
            ] {
                if !r.is_zero() {
                    assert_eq!(gcd_unsigned(r.numerator(), r.denominator()), 1);
                }
            }

            assert_eq!(a.checked_add(&b), b.checked_add(&a));
            assert_eq!(a.checked_mul(&b), b.checked_mul(&a));
            assert_eq!(
                a.checked_add(&b).unwrap().checked_add(&c),
                a.checked_add(&b.checked_add(&c).unwrap())
            );
            assert_eq!(
                a.checked_mul(&b).unwrap().checked_mul(&c),
                a.checked_mul(&b.checked_mul(&c).unwrap())
            );
            assert_eq!(a.checked_add(&Rational::zero()), Some(a.clone()));
            assert_eq!(a.checked_add(&a.negative_cloned()), Some(Rational::zero()));

            if !a.is_zero() {
                assert_eq!(
                    a.reciprocal_cloned().unwrap().reciprocal_cloned().unwrap(),
                    a
                );
            }
        }
    }
}
