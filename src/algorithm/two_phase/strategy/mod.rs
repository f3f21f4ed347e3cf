//! # Strategies
//!
//! Decisions that the Simplex method leaves open.
pub mod pivot_rule;
