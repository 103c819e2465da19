//! Arithmetica is a small algebra library for exact and inexact arithmetic.
//!
//! Numbers come in four kinds: integers, canonical rationals, reals and
//! complex numbers. Operations stay exact as long as they can and promote
//! the result to a less exact kind when they cannot.
//! Dense matrices and vectors can hold any number kind.
//!
//! For example:
//!
//! ```
//! use arithmetica::{
//!     domains::{number::Number, rational::Rational},
//!     tensors::matrix::{Matrix, Vector},
//! };
//!
//! let mut x = Number::from(Rational::new(7, 2).unwrap());
//! assert_eq!(x.to_string(), "3 1/2");
//!
//! x.square().square_root();
//! assert_eq!(x, Number::from(Rational::new(7, 2).unwrap()));
//!
//! let m = Matrix::from_nested_vec(vec![
//!     vec![Number::from(1), Number::from(2)],
//!     vec![Number::from(3), Number::from(4)],
//! ])
//! .unwrap();
//! let v = Vector::new(vec![Number::from(1), x]);
//! assert_eq!(m.multiply_with_vector(&v, false).unwrap().to_string(), "{8,17}");
//! ```
//!
//! Every mutating operation has a non-mutating counterpart with a `_cloned` suffix.

#[macro_use]
mod dual;

pub mod domains;
pub mod operator;
pub mod tensors;
pub mod utils;
