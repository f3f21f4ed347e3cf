//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::traits::OrderedField;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is made independent
/// of the strategy, see `Tableau::select_primal_pivot_row`.
pub trait PivotRule<F> {
    /// Create a new instance.
    fn new<K>(tableau: &Tableau<F, K>) -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// Index of a column with a positive relative cost, together with that cost. `None` if there
    /// is no such column, in which case the tableau is optimal.
    fn select_primal_pivot_column<K>(&mut self, tableau: &Tableau<F, K>) -> Option<(usize, F)>;
}

/// Pivot on the column with the largest relative cost.
///
/// Known as Dantzig's rule. Of several columns with the same cost, the one with the lowest index is
/// chosen. This rule doesn't prevent cycling.
pub struct LargestCoefficient;
impl<F: OrderedField> PivotRule<F> for LargestCoefficient {
    fn new<K>(_tableau: &Tableau<F, K>) -> Self {
        Self
    }

    fn select_primal_pivot_column<K>(&mut self, tableau: &Tableau<F, K>) -> Option<(usize, F)> {
        let mut largest: Option<(usize, &F)> = None;
        for (j, cost) in (0..tableau.nr_columns())
            .map(|column| (column, tableau.relative_cost(column)))
            .filter(|(_, cost)| cost.is_positive()) {
            if let Some((existing_j, existing_cost)) = largest.as_mut() {
                if cost > *existing_cost {
                    *existing_j = j;
                    *existing_cost = cost;
                }
            } else { largest = Some((j, cost)) }
        }

        largest.map(|(j, cost)| (j, cost.clone()))
    }
}

/// Simply pivot on the first column, which has a positive relative cost.
pub struct FirstProfitable;
impl<F: OrderedField> PivotRule<F> for FirstProfitable {
    fn new<K>(_tableau: &Tableau<F, K>) -> Self {
        Self
    }

    fn select_primal_pivot_column<K>(&mut self, tableau: &Tableau<F, K>) -> Option<(usize, F)> {
        (0..tableau.nr_columns())
            .filter(|&column| !tableau.is_in_basis(column))
            .map(|column| (column, tableau.relative_cost(column)))
            .find(|(_, cost)| cost.is_positive())
            .map(|(column, cost)| (column, cost.clone()))
    }
}
