//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the simplex algorithm. The
//! algorithm is implemented as described in chapters 2 and 4 of Combinatorial Optimization, a book
//! by Christos H. Papadimitriou and Kenneth Steiglitz.
//!
//! If the problem already contains an identity column for each row, those form the initial basis.
//! Otherwise, artificial variables are introduced and a basic feasible solution is computed first.
use log::{debug, info};

use crate::algorithm::error::SolveError;
use crate::algorithm::two_phase::phase_one::Feasible;
use crate::algorithm::two_phase::strategy::pivot_rule::{LargestCoefficient, PivotRule};
use crate::algorithm::two_phase::tableau::kind::NonArtificial;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::traits::OrderedField;
use crate::report::{Checkpoint, Event, Observer};

pub mod initial_basis;
pub mod phase_one;
pub mod phase_two;
pub mod strategy;
pub mod tableau;

#[cfg(test)]
mod test;

impl<F: OrderedField> StandardForm<F> {
    /// Solve this linear program.
    ///
    /// Uses the `LargestCoefficient` pivot rule and doesn't report on intermediate states. See the
    /// `solve` function for more control.
    ///
    /// # Return value
    ///
    /// An optimal solution, or the reason why there is none.
    pub fn solve(&self) -> Result<Solution<F>, SolveError> {
        solve::<_, LargestCoefficient, _>(self, &mut ())
    }
}

/// Solve a linear program using the two phase method.
///
/// The problem is not modified; all work happens on a tableau owned by this call.
///
/// # Arguments
///
/// * `problem`: Linear program to solve.
/// * `observer`: Receives the intermediate states, ending with either `Event::Solved` or
/// `Event::Failed`.
///
/// # Return value
///
/// An optimal solution, or the reason why there is none.
pub fn solve<F, PR, O>(
    problem: &StandardForm<F>,
    observer: &mut O,
) -> Result<Solution<F>, SolveError>
where
    F: OrderedField,
    PR: PivotRule<F>,
    O: Observer<F>,
{
    observer.notify(Event::ProblemDefined(problem));

    let result = solve_observed::<_, PR, _>(problem, observer);
    match &result {
        Ok(solution) => {
            info!("Optimal solution found after {} pivots", solution.nr_pivots);
            observer.notify(Event::Solved(&solution.x));
        },
        Err(error) => {
            info!("Solve failed: {error}");
            observer.notify(Event::Failed(error));
        },
    }

    result
}

fn solve_observed<F, PR, O>(
    problem: &StandardForm<F>,
    observer: &mut O,
) -> Result<Solution<F>, SolveError>
where
    F: OrderedField,
    PR: PivotRule<F>,
    O: Observer<F>,
{
    let initial_basis = initial_basis::find_identity_columns(problem.constraints());
    debug!("Identity columns per row: {initial_basis:?}");
    observer.notify(Event::BasisSearchResult(&initial_basis));

    let (mut tableau, mut nr_pivots) = if initial_basis::is_complete(&initial_basis) {
        info!("A basis is present in the problem, skipping phase one");
        let basis_indices = initial_basis.into_iter().flatten().collect();
        let mut tableau = Tableau::<_, NonArtificial>::new(problem, basis_indices);
        // Only has an effect if some of the identity columns have a nonzero cost
        for row in 0..tableau.nr_rows() {
            tableau.eliminate_cost(row);
        }
        observer.notify(Event::TableauSnapshot {
            checkpoint: Checkpoint::Initial,
            tableau: tableau.matrix(),
        });

        (tableau, 0)
    } else {
        let artificial = phase_one::build(problem, &initial_basis, observer);
        let Feasible { tableau, rank, nr_pivots } = phase_one::solve::<_, PR, _>(artificial, observer)?;
        debug!("Phase one done after {nr_pivots} pivots, rank: {rank:?}");

        (phase_two::build(tableau, problem, observer), nr_pivots)
    };

    nr_pivots += primal::<_, _, PR, _>(&mut tableau, observer)?;

    Ok(Solution {
        x: tableau.current_bfs(problem.nr_variables()),
        objective_value: tableau.objective_function_value().clone(),
        basis: tableau.basis_indices().to_vec(),
        nr_pivots,
    })
}

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis, each basis column being a unit vector with zero relative cost
/// - All constraint values need to be nonnegative (primal feasibility)
///
/// # Arguments
///
/// * `tableau`: Tableau of either kind, it is changed in place.
/// * `observer`: Receives every pivot together with the resulting tableau.
///
/// # Return value
///
/// The number of pivots that were made, or the reason why the minimum is not finite. An optimal
/// tableau is left unchanged.
pub(crate) fn primal<F, K, PR, O>(
    tableau: &mut Tableau<F, K>,
    observer: &mut O,
) -> Result<usize, SolveError>
where
    F: OrderedField,
    PR: PivotRule<F>,
    O: Observer<F>,
{
    let mut rule = PR::new(tableau);
    let mut nr_pivots = 0;
    loop {
        debug_assert!(tableau.is_in_basic_feasible_solution_state());

        match rule.select_primal_pivot_column(tableau) {
            Some((column, cost)) => {
                let row = tableau.select_primal_pivot_row(column)?;
                debug!("Pivoting on row {row}, column {column} with relative cost {cost}");
                tableau.bring_into_basis(column, row);
                nr_pivots += 1;

                observer.notify(Event::Pivoted { row, column });
                observer.notify(Event::TableauSnapshot {
                    checkpoint: Checkpoint::AfterPivot,
                    tableau: tableau.matrix(),
                });
            },
            None => break Ok(nr_pivots),
        }
    }
}
