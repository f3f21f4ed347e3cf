//! # Optimizing the original objective: the second phase of the two phase method
//!
//! Starts from a tableau that has a basic feasible solution without artificial variables.
use log::info;

use crate::algorithm::two_phase::tableau::kind::{Artificial, NonArtificial};
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::traits::OrderedField;
use crate::report::{Checkpoint, Event, Observer};

/// Create the tableau for the original objective from the result of the first phase.
///
/// The artificial columns are removed, the original cost row restored and then expressed in the
/// nonbasic variables.
///
/// # Arguments
///
/// * `artificial`: First phase tableau without artificial variables in the basis.
/// * `problem`: Linear program that is being solved.
/// * `observer`: Receives a snapshot after each step of setting up the cost row.
pub fn build<F, O>(
    artificial: Tableau<F, Artificial>,
    problem: &StandardForm<F>,
    observer: &mut O,
) -> Tableau<F, NonArtificial>
where
    F: OrderedField,
    O: Observer<F>,
{
    let mut tableau = Tableau::<_, NonArtificial>::from_artificial(artificial, problem);
    info!("Starting phase two with basis {:?}", tableau.basis_indices());
    observer.notify(Event::TableauSnapshot {
        checkpoint: Checkpoint::PhaseTwoStart,
        tableau: tableau.matrix(),
    });

    for row in 0..tableau.nr_rows() {
        tableau.eliminate_cost(row);
        observer.notify(Event::TableauSnapshot {
            checkpoint: Checkpoint::BasisCostEliminated,
            tableau: tableau.matrix(),
        });
    }

    observer.notify(Event::TableauSnapshot {
        checkpoint: Checkpoint::PhaseTwoReady,
        tableau: tableau.matrix(),
    });
    tableau
}
