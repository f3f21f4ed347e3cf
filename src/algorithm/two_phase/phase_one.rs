//! # Computing a feasible solution: the first phase of the two phase method
//!
//! Artificial variables are added for all rows that lack a basis column. Their sum is minimized;
//! if it can be made zero, the problem is feasible and the remaining artificial variables are
//! driven out of the basis.
use log::{debug, info};

use crate::algorithm::error::SolveError;
use crate::algorithm::two_phase::primal;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::kind::Artificial;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::traits::OrderedField;
use crate::report::{Checkpoint, Event, Observer};

/// Create the artificial tableau, with a cost row expressed in the nonbasic variables.
///
/// # Arguments
///
/// * `problem`: Linear program to find a basic feasible solution for.
/// * `initial_basis`: For each row, an identity column of the problem, if there is one.
/// * `observer`: Receives a snapshot after each step of setting up the cost row.
pub fn build<F, O>(
    problem: &StandardForm<F>,
    initial_basis: &[Option<usize>],
    observer: &mut O,
) -> Tableau<F, Artificial>
where
    F: OrderedField,
    O: Observer<F>,
{
    let mut tableau = Tableau::<_, Artificial>::new(problem, initial_basis);
    info!(
        "Starting phase one with {} artificial variables for {} rows",
        tableau.nr_artificial_variables(), tableau.nr_rows(),
    );
    observer.notify(Event::TableauSnapshot {
        checkpoint: Checkpoint::PhaseOneStart,
        tableau: tableau.matrix(),
    });

    for row in tableau.rows_with_artificial_in_basis() {
        tableau.add_row_to_cost(row);
        observer.notify(Event::TableauSnapshot {
            checkpoint: Checkpoint::ArtificialCostEliminated,
            tableau: tableau.matrix(),
        });
    }

    observer.notify(Event::TableauSnapshot {
        checkpoint: Checkpoint::PhaseOneReady,
        tableau: tableau.matrix(),
    });
    tableau
}

/// Reduces the artificial cost of the basic feasible solution to zero, if possible. In doing so, a
/// basic feasible solution to the standard form linear program is found.
///
/// # Arguments
///
/// * `tableau`: Artificial tableau with a valid basis and a prepared cost row, see `build`.
/// * `observer`: Receives each pivot and the removal of redundant rows.
///
/// # Return value
///
/// A tableau without artificial variables in the basis, or the reason why there is none.
pub fn solve<F, PR, O>(
    mut tableau: Tableau<F, Artificial>,
    observer: &mut O,
) -> Result<Feasible<F>, SolveError>
where
    F: OrderedField,
    PR: PivotRule<F>,
    O: Observer<F>,
{
    let mut nr_pivots = primal::<_, _, PR, _>(&mut tableau, observer)?;
    debug!("Phase one optimum has artificial cost {}", tableau.objective_function_value());

    let (rows_to_remove, nr_replaced) = remove_artificial_basis_variables(&mut tableau, observer)?;
    nr_pivots += nr_replaced;

    let rank = if rows_to_remove.is_empty() {
        Rank::Full
    } else {
        info!("Removing redundant rows {rows_to_remove:?}");
        tableau.remove_rows(&rows_to_remove);
        observer.notify(Event::RowsRemoved(&rows_to_remove));
        Rank::Deficient(rows_to_remove)
    };

    observer.notify(Event::TableauSnapshot {
        checkpoint: Checkpoint::PhaseOneDone,
        tableau: tableau.matrix(),
    });
    Ok(Feasible { tableau, rank, nr_pivots })
}

/// The first phase found a basic feasible solution.
#[derive(Debug, Eq, PartialEq)]
pub struct Feasible<F> {
    /// Tableau without artificial variables in the basis and without redundant rows.
    ///
    /// The artificial columns are still there.
    pub tableau: Tableau<F, Artificial>,
    /// Whether rows were removed.
    pub rank: Rank,
    /// Pivots done, including those that replaced an artificial variable at zero level.
    pub nr_pivots: usize,
}

/// A matrix or linear program either has full rank, or be rank deficient.
///
/// In case it is rank deficient, a sorted, deduplicated list of (row)indices should be provided,
/// that when removed, makes the matrix or linear program full rank.
#[derive(Debug, Eq, PartialEq)]
pub enum Rank {
    /// The matrix is full rank, no rows need to be removed.
    Full,
    /// The `Vec<usize>` is sorted and contains no duplicate values.
    Deficient(Vec<usize>),
}

/// Removes all artificial variables from the basis by making a basis change "at zero level", or
/// without change of cost of the current solution.
///
/// # Arguments
///
/// * `tableau`: Tableau to change the basis for.
///
/// # Return value
///
/// A `Vec` with indices of rows that are redundant, sorted, and the number of basis changes made.
/// If an artificial variable has a nonzero value, the problem is infeasible.
fn remove_artificial_basis_variables<F, O>(
    tableau: &mut Tableau<F, Artificial>,
    observer: &mut O,
) -> Result<(Vec<usize>, usize), SolveError>
where
    F: OrderedField,
    O: Observer<F>,
{
    let mut rows_to_remove = Vec::new();
    let mut nr_replaced = 0;

    for pivot_row in tableau.rows_with_artificial_in_basis() {
        if !tableau.rhs(pivot_row).is_zero() {
            info!("Artificial variable in row {pivot_row} has value {}", tableau.rhs(pivot_row));
            return Err(SolveError::Infeasible);
        }

        let artificial = tableau.basis_indices()[pivot_row];
        let pivot_column = (0..tableau.nr_structural_variables())
            .filter(|&j| !tableau.is_in_basis(j))
            .find(|&j| tableau.matrix().get_value(pivot_row, j).is_positive());

        if let Some(pivot_column) = pivot_column {
            debug!("Replacing artificial column {artificial} by column {pivot_column} in row {pivot_row}");
            tableau.bring_into_basis(pivot_column, pivot_row);
            nr_replaced += 1;
            observer.notify(Event::ArtificialLeftBasis { column: artificial, row: pivot_row });
            observer.notify(Event::TableauSnapshot {
                checkpoint: Checkpoint::AfterPivot,
                tableau: tableau.matrix(),
            });
        } else {
            rows_to_remove.push(pivot_row);
        }
    }

    debug_assert!(rows_to_remove.is_sorted());
    Ok((rows_to_remove, nr_replaced))
}
