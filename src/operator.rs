//! Apply binary operations that are selected by name.
//!
//! ```
//! use arithmetica::{domains::number::Number, operator::Operator};
//!
//! let op: Operator = "/".parse().unwrap();
//! let r = op.evaluate(&Number::from(3), &Number::from(4)).unwrap();
//! assert_eq!(r.to_string(), "3/4");
//! ```

use std::{
    fmt::{Display, Error, Formatter},
    str::FromStr,
};

use crate::domains::{number::Number, NumberError};

/// A binary operation on numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The symbol of the operator.
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Compute `lhs op rhs`.
    pub fn evaluate(&self, lhs: &Number, rhs: &Number) -> Result<Number, NumberError> {
        lhs.apply_cloned(*self, rhs)
    }
}

impl FromStr for Operator {
    type Err = NumberError;

    /// Parse an operator from its symbol or its name, e.g. `*`, `mul` or `multiply`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "+" | "add" => Ok(Operator::Add),
            "-" | "sub" | "subtract" => Ok(Operator::Subtract),
            "*" | "mul" | "multiply" => Ok(Operator::Multiply),
            "/" | "div" | "divide" => Ok(Operator::Divide),
            _ => Err(NumberError::UnknownOperator(s.into())),
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.symbol())
    }
}

impl Number {
    /// Apply `op` with right-hand side `rhs` in-place.
    pub fn apply(&mut self, op: Operator, rhs: &Number) -> Result<&mut Self, NumberError> {
        match op {
            Operator::Add => Ok(self.add(rhs)),
            Operator::Subtract => Ok(self.subtract(rhs)),
            Operator::Multiply => Ok(self.multiply_with(rhs)),
            Operator::Divide => self.divide_by(rhs),
        }
    }

    cloned_forms! {
        /// Return the result of applying `op` with right-hand side `rhs`.
        fn apply_cloned = apply(op: Operator, rhs: &Number) -> Result<Self, NumberError>;
    }
}

#[cfg(test)]
mod test {
    use crate::domains::{number::Number, rational::Rational, NumberError};

    use super::Operator;

    #[test]
    fn parse() {
        assert_eq!("+".parse::<Operator>(), Ok(Operator::Add));
        assert_eq!(" Sub ".parse::<Operator>(), Ok(Operator::Subtract));
        assert_eq!("multiply".parse::<Operator>(), Ok(Operator::Multiply));
        assert_eq!("div".parse::<Operator>(), Ok(Operator::Divide));
        assert_eq!(
            "^".parse::<Operator>(),
            Err(NumberError::UnknownOperator("^".into()))
        );

        for op in Operator::ALL {
            assert_eq!(op.to_string().parse::<Operator>(), Ok(op));
        }
    }

    #[test]
    fn evaluate() {
        let a = Number::from(Rational::new(1, 2).unwrap());
        let b = Number::from(3);

        let r: Vec<_> = Operator::ALL
            .iter()
            .map(|op| op.evaluate(&a, &b).unwrap().to_string())
            .collect();
        assert_eq!(r, ["3 1/2", "- 2 1/2", "1 1/2", "1/6"]);

        assert_eq!(
            Operator::Divide.evaluate(&a, &Number::from(0)),
            Err(NumberError::DivisionByZero)
        );
    }

    #[test]
    fn apply() {
        let mut a = Number::from(10);
        a.apply(Operator::Subtract, &Number::from(4))
            .unwrap()
            .apply(Operator::Divide, &Number::from(4))
            .unwrap();
        assert_eq!(a.to_string(), "1 1/2");

        assert!(a.apply(Operator::Divide, &Number::from(0.)).is_err());
        assert_eq!(a.to_string(), "1 1/2");
    }
}
