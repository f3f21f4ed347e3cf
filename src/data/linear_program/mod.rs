//! # Representing linear programs
//!
//! Linear programs in standard form contain equality constraints and nonnegative variables only.
//! Solving one results in a `Solution`.
pub mod solution;
pub mod standard_form;
