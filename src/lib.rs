//! # A linear program solver on dense tableaus
//!
//! Linear programs in standard form are solved using the two-phase Simplex Method as described in
//! the book Combinatorial Optimization by Christos H. Papadimitriou and Kenneth Steiglitz.
//!
//! ```
//! use relp_tableau::data::linear_program::standard_form::StandardForm;
//!
//! let problem = StandardForm::from_rows(
//!     vec![vec![1f64, 1f64, 1f64], vec![1f64, -1f64, 0f64]],
//!     vec![4f64, 1f64],
//!     vec![-1f64, -2f64],
//! ).unwrap();
//! let solution = problem.solve().unwrap();
//! assert_eq!(solution.x, vec![2.5, 1.5, 0.0]);
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;
pub mod report;

#[cfg(test)]
mod tests;
