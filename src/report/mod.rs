//! # Reporting intermediate states
//!
//! The solver reports what it does through `Event`s delivered to an `Observer`. It never formats
//! text itself; that is left to the reporters in the submodules, or to any other observer a caller
//! provides. Whether or not events are consumed has no influence on the result of a solve.
use std::fmt;
use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::algorithm::error::SolveError;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::standard_form::StandardForm;

pub mod latex;
pub mod text;

/// Something that happened during a solve.
#[derive(Debug)]
pub enum Event<'a, F> {
    /// The solve started for this problem.
    ProblemDefined(&'a StandardForm<F>),
    /// For each row, the column of `A` that equals the matching standard basis vector, if any.
    BasisSearchResult(&'a [Option<usize>]),
    /// The full tableau, including the cost row and the right-hand side column.
    TableauSnapshot {
        /// Moment at which the snapshot was taken.
        checkpoint: Checkpoint,
        /// Constraint rows first, cost row last.
        tableau: &'a DenseMatrix<F>,
    },
    /// A column entered the basis at a row.
    Pivoted {
        #[allow(missing_docs)]
        row: usize,
        #[allow(missing_docs)]
        column: usize,
    },
    /// An artificial variable at zero level was replaced by a structural variable.
    ArtificialLeftBasis {
        /// Index of the artificial column.
        column: usize,
        #[allow(missing_docs)]
        row: usize,
    },
    /// Redundant constraint rows were deleted after the first phase.
    RowsRemoved(&'a [usize]),
    /// An optimal solution was found.
    Solved(&'a [F]),
    /// The solve was aborted.
    Failed(&'a SolveError),
}

impl<F: Display> Event<'_, F> {
    /// One line describing the event.
    ///
    /// Reporters add the data that doesn't fit on a line, like the tableau of a snapshot.
    pub fn summary(&self) -> String {
        match self {
            Event::ProblemDefined(problem) => format!(
                "Problem with {} constraints and {} variables",
                problem.nr_constraints(), problem.nr_variables(),
            ),
            Event::BasisSearchResult(basis) => format!(
                "Basis columns found per row: [{}]",
                basis.iter()
                    .map(|column| column.map_or_else(|| "-".to_string(), |j| j.to_string()))
                    .join(", "),
            ),
            Event::TableauSnapshot { checkpoint, .. } => checkpoint.to_string(),
            Event::Pivoted { row, column } => format!("Pivot on row {row}, column {column}"),
            Event::ArtificialLeftBasis { column, row } => {
                format!("Artificial column {column} left the basis at row {row}")
            },
            Event::RowsRemoved(rows) => format!("Removed redundant rows {rows:?}"),
            Event::Solved(x) => format!("Optimal solution: x = [{}]", x.iter().join(", ")),
            Event::Failed(error) => format!("No solution: {error}"),
        }
    }
}

impl<F> Event<'_, F> {
    /// Whether this event is only interesting when following the algorithm step by step.
    pub fn is_detailed(&self) -> bool {
        match self {
            Event::TableauSnapshot { checkpoint, .. } => checkpoint.is_detailed(),
            _ => false,
        }
    }
}

/// Moments at which the solver shares the tableau.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Checkpoint {
    /// Tableau built directly from a problem that already has a basis.
    Initial,
    /// Tableau with artificial variables and the artificial cost row.
    PhaseOneStart,
    /// One basic artificial row was added to the cost row.
    ArtificialCostEliminated,
    /// Cost row has zeros under all artificial basis columns.
    PhaseOneReady,
    /// A pivot was done.
    AfterPivot,
    /// Artificial variables were resolved and redundant rows deleted.
    PhaseOneDone,
    /// Artificial columns removed and the original cost row restored.
    PhaseTwoStart,
    /// The cost of one basic variable was eliminated from the cost row.
    BasisCostEliminated,
    /// All basic variables have a zero relative cost.
    PhaseTwoReady,
}

impl Checkpoint {
    /// Intermediate steps of setting up a cost row.
    pub fn is_detailed(self) -> bool {
        matches!(self, Checkpoint::ArtificialCostEliminated | Checkpoint::BasisCostEliminated)
    }
}

impl Display for Checkpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Checkpoint::Initial => "Tableau",
            Checkpoint::PhaseOneStart => "Starting phase one, artificial cost row added.",
            Checkpoint::ArtificialCostEliminated => "Artificial row added to the cost row.",
            Checkpoint::PhaseOneReady => "Artificial cost row expressed in the nonbasic variables.",
            Checkpoint::AfterPivot => "Tableau after pivot",
            Checkpoint::PhaseOneDone => "Artificial variables resolved.",
            Checkpoint::PhaseTwoStart => "Starting phase two, relative cost vector added.",
            Checkpoint::BasisCostEliminated => "Relative cost of a basic variable zeroed.",
            Checkpoint::PhaseTwoReady => "Relative cost of all basic variables zeroed.",
        })
    }
}

/// How much of the solve a reporter renders.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Verbosity {
    /// Everything except the detailed tableau snapshots.
    #[default]
    Minimal,
    /// Every event.
    Full,
}

impl Verbosity {
    /// Whether an event should be rendered at this verbosity.
    pub fn includes<F>(self, event: &Event<'_, F>) -> bool {
        self == Verbosity::Full || !event.is_detailed()
    }
}

/// Receives the events of a solve.
pub trait Observer<F> {
    /// Called synchronously by the solver; the event only lives for the duration of the call.
    fn notify(&mut self, event: Event<'_, F>);
}

/// Ignores all events.
impl<F> Observer<F> for () {
    fn notify(&mut self, _event: Event<'_, F>) {
    }
}

impl<F, O: Observer<F>> Observer<F> for &mut O {
    fn notify(&mut self, event: Event<'_, F>) {
        (**self).notify(event)
    }
}
