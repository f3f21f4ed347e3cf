//! # Reasons a linear program can't be solved
//!
//! Every failure aborts the solve it occurs in. The caller can branch on the variant to tell an
//! infeasible problem from an unbounded one or from a degenerate system.
use thiserror::Error;

/// A solve ended without an optimal solution.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum SolveError {
    /// The problem data can't describe a linear program in standard form.
    ///
    /// Detected at construction, before any pivot happens.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
    /// An artificial variable remained basic at a nonzero value after the first phase.
    #[error("the feasible region is empty")]
    Infeasible,
    /// The entering column has no positive coefficient in any constraint row.
    #[error("the problem is unbounded: the objective improves without limit along column {column}")]
    Unbounded {
        /// Index of the entering column.
        column: usize,
    },
    /// The ratio test tie-break ran out of columns while several rows were still tied.
    #[error("rows {rows:?} are linearly dependent")]
    LinearlyDependentRows {
        /// Indices of the tied rows, sorted.
        rows: Vec<usize>,
    },
}

/// Problem data that was rejected when constructing a `StandardForm`.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum InvalidInput {
    /// Every right-hand side value should be nonnegative.
    #[error("right-hand side value at row {row} is negative")]
    NegativeRightHandSide {
        /// First row with a negative value.
        row: usize,
    },
    /// The sizes of `A`, `b` and `c` don't fit together.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
    /// There are no constraints or no variables.
    #[error("the problem has no constraints or no variables")]
    Empty,
}
