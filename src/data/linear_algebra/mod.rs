//! # Linear algebra primitives
//!
//! Dense linear algebra primitives used to represent the simplex tableau.
pub mod matrix;
pub mod vector;
