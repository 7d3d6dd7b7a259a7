//! Mathematical utilities: the least-squares trend fit.

pub mod ols;

pub use ols::*;
