//! Defines the number contract and the number kinds that implement it.
//!
//! The core trait is [Arithmetic], which every kind that can be stored in a
//! [Matrix](crate::tensors::matrix::Matrix) or [Vector](crate::tensors::matrix::Vector) implements.
//! The kinds form a closed family, ordered from most to least exact:
//! - integers, stored as `i64`;
//! - rational numbers [Rational](rational::Rational), kept in canonical form;
//! - real numbers [F64](float::F64);
//! - complex numbers [Complex](float::Complex).
//!
//! The sum type [Number](number::Number) holds any of these and dispatches
//! arithmetic on the pair of kinds involved. When a result cannot be represented
//! exactly in the kind of the operands, it is promoted to a less exact kind.
//! Promotion only goes one way: an inexact value never becomes exact again.
pub mod float;
pub mod number;
pub mod rational;

use std::fmt::{Debug, Display};

use smartstring::alias::String as SmartString;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur when performing arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumberError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Unknown operand: {0}")]
    UnknownOperand(SmartString),
    #[error("Unknown operator: {0}")]
    UnknownOperator(SmartString),
}

/// Options that control when an inexact intermediate result, such as the
/// floating point root of an integer, is still accepted as exact.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ExactnessOptions {
    /// A floating point value `x` is considered integral if `x` rounded to
    /// `decimal_threshold` decimals equals `x` rounded to zero decimals.
    pub decimal_threshold: u32,
}

impl ExactnessOptions {
    pub const DEFAULT_DECIMAL_THRESHOLD: u32 = 8;
    /// The environment variable read by [ExactnessOptions::from_env].
    pub const ENV_DECIMAL_THRESHOLD: &'static str = "ARITHMETICA_DECIMAL_THRESHOLD";

    pub const fn new() -> ExactnessOptions {
        ExactnessOptions {
            decimal_threshold: Self::DEFAULT_DECIMAL_THRESHOLD,
        }
    }

    /// Only accept floating point values that are integral up to the last
    /// decimal an `f64` can hold.
    pub const fn strict() -> ExactnessOptions {
        ExactnessOptions {
            decimal_threshold: 15,
        }
    }

    pub const fn with_decimal_threshold(mut self, decimal_threshold: u32) -> ExactnessOptions {
        self.decimal_threshold = decimal_threshold;
        self
    }

    /// Read the threshold from the `ARITHMETICA_DECIMAL_THRESHOLD` environment variable,
    /// falling back to the default if it is absent or malformed.
    pub fn from_env() -> ExactnessOptions {
        match std::env::var(Self::ENV_DECIMAL_THRESHOLD) {
            Ok(v) => match v.trim().parse() {
                Ok(decimal_threshold) => ExactnessOptions { decimal_threshold },
                Err(_) => {
                    warn!(
                        "Ignoring malformed {}={}, using {}",
                        Self::ENV_DECIMAL_THRESHOLD,
                        v,
                        Self::DEFAULT_DECIMAL_THRESHOLD
                    );
                    ExactnessOptions::new()
                }
            },
            Err(_) => ExactnessOptions::new(),
        }
    }
}

impl Default for ExactnessOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// The arithmetic contract shared by all number kinds.
///
/// Operations mutate the receiver and return it, so that calls can be chained:
/// ```
/// use arithmetica::domains::{float::F64, Arithmetic};
///
/// let mut a = F64::from(3.);
/// a.add(&F64::from(1.)).square();
/// assert_eq!(a, F64::from(16.));
/// ```
/// The non-mutating variants are provided by the implementing types as `*_cloned` methods.
pub trait Arithmetic: Clone + PartialEq + Debug + Display {
    /// A zero of the same kind as `self`.
    fn zero(&self) -> Self;
    /// A zero of the default kind.
    fn new_zero() -> Self;
    /// A one of the same kind as `self`.
    fn one(&self) -> Self;
    fn is_zero(&self) -> bool;
    /// Project onto the native `f64`, or `None` if the value is not real.
    fn value(&self) -> Option<f64>;

    fn negative(&mut self) -> &mut Self;
    fn add(&mut self, rhs: &Self) -> &mut Self;
    fn subtract(&mut self, rhs: &Self) -> &mut Self;
    fn multiply_with(&mut self, rhs: &Self) -> &mut Self;
    /// Divide `self` by `rhs`. Yields [NumberError::DivisionByZero] if `rhs` is zero.
    fn divide_by(&mut self, rhs: &Self) -> Result<&mut Self, NumberError>;
    fn square(&mut self) -> &mut Self;
    fn square_root(&mut self) -> &mut Self;
    /// Take the `k`-th root. Yields [NumberError::DivisionByZero] for `k = 0`.
    fn root(&mut self, k: u32) -> Result<&mut Self, NumberError>;
    fn norm_squared(&self) -> Self;
}
