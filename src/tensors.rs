//! Dense vectors and matrices over the number kinds.

pub mod matrix;
