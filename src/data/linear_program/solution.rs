//! # Representation of optimal solutions
//!
//! Once a linear program is solved, the values of all variables are read from the final tableau.
use std::fmt;
use std::fmt::{Display, Formatter};

use itertools::Itertools;

/// An optimal basic feasible solution to a linear program in standard form.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<F> {
    /// Value for every variable of the original problem, nonbasic variables are zero.
    pub x: Vec<F>,
    /// Value of the objective function ⟨c, x⟩.
    pub objective_value: F,
    /// Column index of the basic variable in each remaining constraint row.
    ///
    /// Shorter than the number of constraints when redundant rows were removed.
    pub basis: Vec<usize>,
    /// Total number of pivots over both phases.
    pub nr_pivots: usize,
}

impl<F: Display> Display for Solution<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "x = [{}]", self.x.iter().join(", "))?;
        writeln!(f, "objective value: {}", self.objective_value)?;
        write!(f, "basis: {:?}", self.basis)
    }
}
