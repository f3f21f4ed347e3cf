//! # Number types
//!
//! The algorithms in this crate are defined over abstract number spaces. A benefit of this
//! approach is that the algorithm can be tested for correctness using fractional numbers, while the
//! same code is used without adaptation with floating point numbers.
pub mod traits;
