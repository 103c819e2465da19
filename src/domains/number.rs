use std::{
    cmp::Ordering,
    fmt::{Display, Error, Formatter},
    str::FromStr,
};

use tracing::{debug, trace};

use super::{
    float::{Complex, F64},
    rational::Rational,
    Arithmetic, ExactnessOptions, NumberError,
};

/// The kind of a [Number], ordered from most to least exact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    Integer,
    Rational,
    Real,
    Complex,
}

/// A number of any kind.
///
/// Binary operations are dispatched on the kinds of both operands. The result
/// has the least exact kind of the two operands, unless it cannot be
/// represented exactly in that kind:
/// - integer division yields a [Rational];
/// - exact results that overflow 64 bits are promoted to [F64];
/// - roots that are not exact are promoted to [F64];
/// - even roots of negative numbers are promoted to [Complex].
///
/// No operation ever demotes a number to a more exact kind.
///
/// ```
/// use arithmetica::domains::{number::Number, rational::Rational};
///
/// let mut a = Number::from(Rational::new(1, 3).unwrap());
/// a.add(&Number::from(Rational::new(1, 6).unwrap()));
/// assert_eq!(a.to_string(), "1/2");
///
/// a.add(&Number::from(0.5));
/// assert_eq!(a, Number::from(1.));
/// ```
#[derive(Clone, Debug)]
pub enum Number {
    Integer(i64),
    Rational(Rational),
    Real(F64),
    Complex(Complex),
}

/// Two operands converted to a common kind.
enum Pair {
    Integers(i64, i64),
    Rationals(Rational, Rational),
    Reals(F64, F64),
    Complexes(Complex, Complex),
}

impl Pair {
    fn new(a: &Number, b: &Number) -> Pair {
        match (a, b) {
            (Number::Integer(x), Number::Integer(y)) => Pair::Integers(*x, *y),
            (Number::Integer(x), Number::Rational(y)) => {
                Pair::Rationals(Rational::from(*x), y.clone())
            }
            (Number::Rational(x), Number::Integer(y)) => {
                Pair::Rationals(x.clone(), Rational::from(*y))
            }
            (Number::Rational(x), Number::Rational(y)) => Pair::Rationals(x.clone(), y.clone()),
            (Number::Complex(_), _) | (_, Number::Complex(_)) => {
                Pair::Complexes(a.to_complex(), b.to_complex())
            }
            _ => Pair::Reals(a.real_part(), b.real_part()),
        }
    }
}

impl Number {
    pub fn kind(&self) -> Kind {
        match self {
            Number::Integer(_) => Kind::Integer,
            Number::Rational(_) => Kind::Rational,
            Number::Real(_) => Kind::Real,
            Number::Complex(_) => Kind::Complex,
        }
    }

    /// Returns `true` iff the number is an integer or a rational.
    pub fn is_exact(&self) -> bool {
        self.kind() <= Kind::Rational
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Number::Integer(i) => *i == 0,
            Number::Rational(r) => r.is_zero(),
            Number::Real(r) => r.is_zero(),
            Number::Complex(c) => c.is_zero(),
        }
    }

    /// The native value of the number, or `None` for a complex number
    /// with a non-zero imaginary part.
    pub fn value(&self) -> Option<f64> {
        match self {
            Number::Integer(i) => Some(*i as f64),
            Number::Rational(r) => Some(r.value()),
            Number::Real(r) => Some(r.into_inner()),
            Number::Complex(c) => c.to_real().map(F64::into_inner),
        }
    }

    /// Project the number onto the complex plane.
    pub fn to_complex(&self) -> Complex {
        match self {
            Number::Complex(c) => *c,
            _ => Complex::from(self.real_part()),
        }
    }

    fn real_part(&self) -> F64 {
        match self {
            Number::Integer(i) => F64::from(*i as f64),
            Number::Rational(r) => F64::from(r.value()),
            Number::Real(r) => *r,
            Number::Complex(c) => c.re,
        }
    }

    /// An exact result that does not fit in 64 bits, approximated by `value`.
    fn overflowed(value: f64) -> Number {
        debug!("Exact result overflows 64 bits: promoting to real");
        Number::Real(F64::from(value))
    }

    /// Negate the number in-place.
    pub fn negative(&mut self) -> &mut Self {
        match self {
            Number::Integer(i) => {
                *self = match i.checked_neg() {
                    Some(n) => Number::Integer(n),
                    None => Number::overflowed(-(*i as f64)),
                };
            }
            Number::Rational(r) => {
                r.negative();
            }
            Number::Real(r) => {
                r.negative();
            }
            Number::Complex(c) => {
                c.negative();
            }
        }
        self
    }

    /// Add `rhs` to the number in-place.
    pub fn add(&mut self, rhs: &Number) -> &mut Self {
        *self = match Pair::new(self, rhs) {
            Pair::Integers(a, b) => match a.checked_add(b) {
                Some(r) => Number::Integer(r),
                None => Number::overflowed(a as f64 + b as f64),
            },
            Pair::Rationals(a, b) => match a.checked_add(&b) {
                Some(r) => Number::Rational(r),
                None => Number::overflowed(a.value() + b.value()),
            },
            Pair::Reals(a, b) => Number::Real(a + b),
            Pair::Complexes(a, b) => Number::Complex(a + b),
        };
        self
    }

    /// Subtract `rhs` from the number in-place.
    pub fn subtract(&mut self, rhs: &Number) -> &mut Self {
        self.add(&rhs.negative_cloned())
    }

    /// Multiply the number with `rhs` in-place.
    pub fn multiply_with(&mut self, rhs: &Number) -> &mut Self {
        *self = match Pair::new(self, rhs) {
            Pair::Integers(a, b) => match a.checked_mul(b) {
                Some(r) => Number::Integer(r),
                None => Number::overflowed(a as f64 * b as f64),
            },
            Pair::Rationals(a, b) => match a.checked_mul(&b) {
                Some(r) => Number::Rational(r),
                None => Number::overflowed(a.value() * b.value()),
            },
            Pair::Reals(a, b) => Number::Real(a * b),
            Pair::Complexes(a, b) => Number::Complex(a * b),
        };
        self
    }

    /// Divide the number by `rhs` in-place. The quotient of two integers is a [Rational].
    ///
    /// Yields [NumberError::DivisionByZero] if `rhs` is zero, in which case
    /// the number is left unchanged.
    pub fn divide_by(&mut self, rhs: &Number) -> Result<&mut Self, NumberError> {
        if rhs.is_zero() {
            return Err(NumberError::DivisionByZero);
        }

        *self = match Pair::new(self, rhs) {
            Pair::Integers(a, b) => Number::Rational(Rational::new(a, b)?),
            Pair::Rationals(a, b) => match a.checked_div(&b)? {
                Some(r) => Number::Rational(r),
                None => Number::overflowed(a.value() / b.value()),
            },
            Pair::Reals(a, b) => Number::Real(a / b),
            Pair::Complexes(a, b) => Number::Complex(a / b),
        };
        Ok(self)
    }

    /// Square the number in-place.
    pub fn square(&mut self) -> &mut Self {
        *self = match &*self {
            Number::Integer(i) => match i.checked_mul(*i) {
                Some(r) => Number::Integer(r),
                None => Number::overflowed((*i as f64).powi(2)),
            },
            Number::Rational(r) => match r.checked_square() {
                Some(r) => Number::Rational(r),
                None => Number::overflowed(r.value().powi(2)),
            },
            Number::Real(r) => Number::Real(r.norm_squared()),
            Number::Complex(c) => Number::Complex(*c * *c),
        };
        self
    }

    /// Take the square root in-place, using the default [ExactnessOptions].
    pub fn square_root(&mut self) -> &mut Self {
        self.square_root_with(&ExactnessOptions::default())
    }

    /// Take the square root in-place.
    pub fn square_root_with(&mut self, options: &ExactnessOptions) -> &mut Self {
        *self = self.principal_root(2, options);
        self
    }

    /// Take the `k`-th root in-place, using the default [ExactnessOptions].
    pub fn root(&mut self, k: u32) -> Result<&mut Self, NumberError> {
        self.root_with(k, &ExactnessOptions::default())
    }

    /// Take the `k`-th root in-place. Exact roots of integers and rationals
    /// keep their kind, see [Rational::root].
    ///
    /// Yields [NumberError::DivisionByZero] for `k = 0`.
    pub fn root_with(
        &mut self,
        k: u32,
        options: &ExactnessOptions,
    ) -> Result<&mut Self, NumberError> {
        if k == 0 {
            return Err(NumberError::DivisionByZero);
        }

        *self = self.principal_root(k, options);
        Ok(self)
    }

    fn principal_root(&self, k: u32, options: &ExactnessOptions) -> Number {
        match self {
            Number::Integer(i) => match Rational::from(*i).principal_root(k, options) {
                Number::Rational(r) => match r.to_i64() {
                    Some(n) => Number::Integer(n),
                    None => Number::Rational(r),
                },
                x => x,
            },
            Number::Rational(r) => r.principal_root(k, options),
            Number::Real(r) => {
                if r.is_negative() && k % 2 == 0 {
                    trace!("Even root of a negative number: promoting to complex");
                    Number::Complex(Complex::principal_root_of_real(r.into_inner(), k))
                } else {
                    Number::Real(F64::from(F64::real_root(r.into_inner(), k)))
                }
            }
            Number::Complex(c) => Number::Complex(c.principal_root(k)),
        }
    }

    /// The squared norm: the square for ordered kinds and `|z|²` for complex numbers.
    pub fn norm_squared(&self) -> Number {
        match self {
            Number::Complex(c) => Number::Real(F64::from(c.modulus_squared())),
            _ => self.square_cloned(),
        }
    }

    /// Compare two numbers. Integers and rationals are compared exactly.
    ///
    /// Yields [NumberError::UnknownOperand] if either number is complex, or if
    /// exactly one of them is `NaN`, since such numbers are not ordered.
    pub fn compare_to(&self, other: &Number) -> Result<Ordering, NumberError> {
        match Pair::new(self, other) {
            Pair::Integers(a, b) => Ok(a.cmp(&b)),
            Pair::Rationals(a, b) => Ok(a.cmp(&b)),
            Pair::Reals(a, b) => a.partial_cmp(&b).ok_or_else(|| {
                let nan = if a.into_inner().is_nan() { self } else { other };
                NumberError::UnknownOperand(nan.to_string().into())
            }),
            Pair::Complexes(..) => {
                let c = if self.kind() == Kind::Complex {
                    self
                } else {
                    other
                };
                Err(NumberError::UnknownOperand(c.to_string().into()))
            }
        }
    }

    cloned_forms! {
        /// Return the negated number.
        fn negative_cloned = negative() -> Self;
        /// Return the sum of the number and `rhs`.
        fn add_cloned = add(rhs: &Number) -> Self;
        /// Return the difference of the number and `rhs`.
        fn subtract_cloned = subtract(rhs: &Number) -> Self;
        /// Return the product of the number and `rhs`.
        fn multiply_with_cloned = multiply_with(rhs: &Number) -> Self;
        /// Return the quotient of the number and `rhs`.
        fn divide_by_cloned = divide_by(rhs: &Number) -> Result<Self, NumberError>;
        /// Return the square of the number.
        fn square_cloned = square() -> Self;
        /// Return the square root of the number.
        fn square_root_cloned = square_root() -> Self;
        /// Return the square root of the number.
        fn square_root_with_cloned = square_root_with(options: &ExactnessOptions) -> Self;
        /// Return the `k`-th root of the number.
        fn root_cloned = root(k: u32) -> Result<Self, NumberError>;
        /// Return the `k`-th root of the number.
        fn root_with_cloned = root_with(k: u32, options: &ExactnessOptions) -> Result<Self, NumberError>;
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::Integer(0)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<Rational> for Number {
    fn from(value: Rational) -> Self {
        Number::Rational(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Real(value.into())
    }
}

impl From<F64> for Number {
    fn from(value: F64) -> Self {
        Number::Real(value)
    }
}

impl From<Complex> for Number {
    fn from(value: Complex) -> Self {
        Number::Complex(value)
    }
}

impl PartialEq for Number {
    /// Numbers of different kinds are equal if their values are,
    /// where integers and rationals are compared exactly.
    fn eq(&self, other: &Self) -> bool {
        match Pair::new(self, other) {
            Pair::Integers(a, b) => a == b,
            Pair::Rationals(a, b) => a == b,
            Pair::Reals(a, b) => a == b,
            Pair::Complexes(a, b) => a == b,
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare_to(other).ok()
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Rational(r) => write!(f, "{}", r),
            Number::Real(r) => write!(f, "{}", r),
            Number::Complex(c) => write!(f, "{}", c),
        }
    }
}

impl FromStr for Number {
    type Err = NumberError;

    /// Parse a number, trying the most exact kind first:
    /// - `-12` is an integer;
    /// - `3/4`, `- 1 1/2` are rationals;
    /// - `1 + 2i`, `-i` are complex numbers;
    /// - `2.5`, `1e3` are real numbers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();

        if let Ok(i) = t.parse::<i64>() {
            return Ok(Number::Integer(i));
        }

        let mixed_negative = t
            .strip_prefix('-')
            .is_some_and(|r| r.starts_with(char::is_whitespace));
        if t.contains('/') || mixed_negative {
            return t.parse::<Rational>().map(Number::Rational);
        }

        if t.ends_with('i') {
            return t.parse::<Complex>().map(Number::Complex);
        }

        t.parse::<F64>()
            .map(Number::Real)
            .map_err(|_| NumberError::UnknownOperand(s.into()))
    }
}

impl Arithmetic for Number {
    fn zero(&self) -> Self {
        match self {
            Number::Integer(_) => Number::Integer(0),
            Number::Rational(_) => Number::Rational(Rational::zero()),
            Number::Real(_) => Number::Real(F64::from(0.)),
            Number::Complex(_) => Number::Complex(Complex::default()),
        }
    }

    fn new_zero() -> Self {
        Number::Integer(0)
    }

    fn value(&self) -> Option<f64> {
        Number::value(self)
    }

    fn one(&self) -> Self {
        match self {
            Number::Integer(_) => Number::Integer(1),
            Number::Rational(_) => Number::Rational(Rational::one()),
            Number::Real(_) => Number::Real(F64::from(1.)),
            Number::Complex(_) => Number::Complex(Complex::new(1., 0.)),
        }
    }

    fn is_zero(&self) -> bool {
        Number::is_zero(self)
    }

    fn negative(&mut self) -> &mut Self {
        Number::negative(self)
    }

    fn add(&mut self, rhs: &Self) -> &mut Self {
        Number::add(self, rhs)
    }

    fn subtract(&mut self, rhs: &Self) -> &mut Self {
        Number::subtract(self, rhs)
    }

    fn multiply_with(&mut self, rhs: &Self) -> &mut Self {
        Number::multiply_with(self, rhs)
    }

    fn divide_by(&mut self, rhs: &Self) -> Result<&mut Self, NumberError> {
        Number::divide_by(self, rhs)
    }

    fn square(&mut self) -> &mut Self {
        Number::square(self)
    }

    fn square_root(&mut self) -> &mut Self {
        Number::square_root(self)
    }

    fn root(&mut self, k: u32) -> Result<&mut Self, NumberError> {
        Number::root(self, k)
    }

    fn norm_squared(&self) -> Self {
        Number::norm_squared(self)
    }
}

#[cfg(test)]
mod test {
    use std::cmp::Ordering;

    use crate::domains::{
        float::{Complex, F64},
        number::Kind,
        rational::Rational,
        Arithmetic, ExactnessOptions, NumberError,
    };

    use super::Number;

    fn q(n: i64, d: i64) -> Number {
        Number::Rational(Rational::new(n, d).unwrap())
    }

    #[test]
    fn promotion_boundary() {
        let r = q(1, 3).add_cloned(&Number::from(0.5));
        assert_eq!(r.kind(), Kind::Real);
        assert!((r.value().unwrap() - 5. / 6.).abs() < 1e-15);

        assert_eq!(q(1, 3).multiply_with_cloned(&Number::from(3.)).kind(), Kind::Real);
        assert_eq!(q(1, 3).subtract_cloned(&Number::from(0.5)).kind(), Kind::Real);
        assert_eq!(
            q(1, 3).divide_by_cloned(&Number::from(0.5)).unwrap().kind(),
            Kind::Real
        );
        assert_eq!(
            Number::from(0.5).add_cloned(&q(1, 2)),
            Number::Real(F64::from(1.))
        );
        assert_eq!(
            q(1, 2).add_cloned(&Number::from(Complex::i())).kind(),
            Kind::Complex
        );

        // exact operands stay exact, even if the value is integral
        let s = q(1, 2).add_cloned(&q(1, 2));
        assert_eq!(s.kind(), Kind::Rational);
        assert_eq!(s, Number::Integer(1));
        assert_eq!(Number::from(3).add_cloned(&q(1, 2)), q(7, 2));
        assert_eq!(Number::from(3).add_cloned(&Number::from(4)).kind(), Kind::Integer);
    }

    #[test]
    fn integer_division() {
        let d = Number::from(6).divide_by_cloned(&Number::from(-4)).unwrap();
        assert_eq!(d.kind(), Kind::Rational);
        assert_eq!(d, q(-3, 2));

        let d = Number::from(6).divide_by_cloned(&Number::from(3)).unwrap();
        assert_eq!(d.kind(), Kind::Rational);
    }

    #[test]
    fn division_by_zero() {
        for zero in [
            Number::from(0),
            q(0, 1),
            Number::from(0.),
            Number::from(Complex::default()),
        ] {
            let mut a = q(1, 2);
            assert_eq!(a.divide_by(&zero), Err(NumberError::DivisionByZero));
            assert_eq!(a, q(1, 2));
        }
    }

    #[test]
    fn overflow() {
        let mut a = Number::from(i64::MAX);
        a.add(&Number::from(1));
        assert_eq!(a.kind(), Kind::Real);
        assert_eq!(a.value(), Some(i64::MAX as f64 + 1.));

        let mut b = Number::from(i64::MIN);
        b.negative();
        assert_eq!(b.kind(), Kind::Real);

        let mut c = Number::from(1i64 << 40);
        c.square();
        assert_eq!(c.kind(), Kind::Real);

        let mut d = Number::from(Rational::new(1, i64::MAX).unwrap());
        d.multiply_with(&q(1, 3));
        assert_eq!(d.kind(), Kind::Real);
    }

    #[test]
    fn roots() {
        assert_eq!(q(4, 9).square_root_cloned(), q(2, 3));
        assert_eq!(q(4, 9).square_root_cloned().kind(), Kind::Rational);
        assert_eq!(q(2, 3).square_root_cloned().kind(), Kind::Real);

        assert_eq!(Number::from(27).root_cloned(3).unwrap(), Number::Integer(3));
        assert_eq!(
            Number::from(27).root_cloned(3).unwrap().kind(),
            Kind::Integer
        );
        assert_eq!(Number::from(-27).root_cloned(3).unwrap(), Number::Integer(-3));
        assert_eq!(Number::from(2).square_root_cloned().kind(), Kind::Real);

        let i = Number::from(-4).square_root_cloned();
        assert_eq!(i.kind(), Kind::Complex);
        assert!((i.to_complex().im.into_inner() - 2.).abs() < 1e-12);

        let r = Number::from(-2.25).square_root_cloned();
        assert_eq!(r.kind(), Kind::Complex);

        assert_eq!(Number::from(2.25).square_root_cloned(), Number::from(1.5));
        assert_eq!(Number::from(8).root_cloned(0), Err(NumberError::DivisionByZero));

        // a generous threshold accepts approximate roots as exact
        let loose = ExactnessOptions::new().with_decimal_threshold(1);
        assert_eq!(
            Number::from(10001).square_root_with_cloned(&loose),
            Number::Integer(100)
        );
        assert_eq!(
            Number::from(10001).square_root_cloned().kind(),
            Kind::Real
        );

        let widest = ExactnessOptions::new().with_decimal_threshold(u32::MAX);
        let r = Number::from(9).square_root_with_cloned(&widest);
        assert_eq!(r.kind(), Kind::Integer);
        assert_eq!(r, Number::Integer(3));
    }

    #[test]
    fn negation_and_subtraction() {
        let x = q(5, 7);
        assert_eq!(x.add_cloned(&x.negative_cloned()), Number::from(0));
        assert_eq!(x.subtract_cloned(&x), q(0, 1));
        assert_eq!(x.subtract_cloned(&Number::from(1)), q(-2, 7));
        assert_eq!(Number::from(2.).subtract_cloned(&q(1, 2)), Number::from(1.5));
        assert_eq!(
            Number::from(Complex::new(1., 1.)).negative_cloned(),
            Number::from(Complex::new(-1., -1.))
        );
    }

    #[test]
    fn norm_squared() {
        assert_eq!(q(-2, 3).norm_squared(), q(4, 9));
        assert_eq!(
            Number::from(Complex::new(3., 4.)).norm_squared(),
            Number::Real(F64::from(25.))
        );
    }

    #[test]
    fn cloned_forms_leave_receiver() {
        let x = q(-3, 4);
        let before = x.to_string();
        let _ = x.negative_cloned();
        let _ = x.square_cloned();
        let _ = x.add_cloned(&q(1, 4));
        let _ = x.divide_by_cloned(&Number::from(2));
        let _ = x.root_cloned(3);
        assert_eq!(x.to_string(), before);

        assert_eq!(x.negative_cloned(), q(3, 4));
        assert_eq!(x.square_cloned(), q(9, 16));
    }

    #[test]
    fn chaining() {
        let mut x = Number::from(2);
        x.add(&Number::from(1))
            .square()
            .divide_by(&Number::from(4))
            .unwrap()
            .subtract(&q(1, 4));
        assert_eq!(x, Number::from(2));
        assert_eq!(x.kind(), Kind::Rational);
    }

    #[test]
    fn comparison() {
        assert_eq!(q(1, 3).compare_to(&q(1, 2)), Ok(Ordering::Less));
        assert_eq!(Number::from(1).compare_to(&q(1, 1)), Ok(Ordering::Equal));
        assert_eq!(Number::from(0.4).compare_to(&q(1, 3)), Ok(Ordering::Greater));
        assert!(matches!(
            q(1, 2).compare_to(&Number::from(Complex::i())),
            Err(NumberError::UnknownOperand(_))
        ));
        assert!(Number::from(-1) < q(-1, 2));

        assert_eq!(Number::from(2), q(2, 1));
        assert_eq!(q(1, 2), Number::from(0.5));
        assert_ne!(q(1, 3), Number::from(0.3));
        assert_eq!(Number::from(2.), Number::from(Complex::new(2., 0.)));
    }

    #[test]
    fn unordered_reals() {
        let nan = Number::from(f64::NAN);
        let one = Number::from(1.);

        assert_ne!(nan, one);
        assert_eq!(nan.partial_cmp(&one), None);
        assert_eq!(one.partial_cmp(&nan), None);
        assert!(matches!(
            nan.compare_to(&one),
            Err(NumberError::UnknownOperand(_))
        ));
        assert!(matches!(
            q(1, 2).compare_to(&nan),
            Err(NumberError::UnknownOperand(_))
        ));

        // NaN equals itself, so it must also compare equal
        assert_eq!(nan, Number::from(f64::NAN));
        assert_eq!(nan.compare_to(&Number::from(f64::NAN)), Ok(Ordering::Equal));
    }

    #[test]
    fn native_value() {
        fn project<N: Arithmetic>(n: &N) -> Option<f64> {
            n.value()
        }

        assert_eq!(project(&Number::from(-3)), Some(-3.));
        assert_eq!(project(&q(-7, 2)), Some(-3.5));
        assert_eq!(project(&Number::from(0.25)), Some(0.25));
        assert_eq!(project(&Number::from(Complex::new(2., 0.))), Some(2.));
        assert_eq!(project(&Number::from(Complex::i())), None);
        assert_eq!(project(&F64::from(1.5)), Some(1.5));
        assert_eq!(project(&Complex::new(1., 1.)), None);
    }

    #[test]
    fn parse() {
        assert_eq!("-12".parse::<Number>(), Ok(Number::Integer(-12)));
        assert_eq!("3/4".parse::<Number>(), Ok(q(3, 4)));
        assert_eq!("- 1 1/2".parse::<Number>(), Ok(q(-3, 2)));
        assert_eq!("- 5".parse::<Number>().map(|n| n.kind()), Ok(Kind::Rational));
        assert_eq!("2.5".parse::<Number>(), Ok(Number::from(2.5)));
        assert_eq!("1 - 2i".parse::<Number>(), Ok(Number::from(Complex::new(1., -2.))));
        assert_eq!("1/0".parse::<Number>(), Err(NumberError::DivisionByZero));
        assert!(matches!(
            "x".parse::<Number>(),
            Err(NumberError::UnknownOperand(_))
        ));

        for n in [
            Number::from(-7),
            q(-7, 2),
            Number::from(0.25),
            Number::from(3.),
            Number::from(Complex::new(0.5, -1.5)),
        ] {
            let p = n.to_string().parse::<Number>().unwrap();
            assert_eq!(p, n);
            assert_eq!(p.kind(), n.kind());
        }
    }
}
