//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//! The tableau is stored explicitly: every pivot updates all of its values.
use crate::algorithm::error::SolveError;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::vector::canonical;
use crate::data::number_types::traits::OrderedField;

pub mod kind;

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// The last row holds the relative cost of each column, with the objective function value in the
/// corner. The last column holds the values of the basic variables. A column enters the basis
/// profitably when its relative cost is positive.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tableau<F, K> {
    /// Represents a matrix of size (m + 1) x (N + 1) (constraints, relative cost, values).
    ///
    /// This attribute changes with a basis change.
    matrix: DenseMatrix<F>,

    /// For each constraint row, the column that is basic in it.
    basis_indices: Vec<usize>,

    /// Whether this tableau has artificial variables (and is in the first phase of the two-phase
    /// algorithm) or not. See the `kind` module for more information.
    kind: K,
}

impl<F: OrderedField, K> Tableau<F, K> {
    /// Brings a column into the basis at the given row.
    ///
    /// The pivot row is scaled such that the pivot becomes one, after which multiples of it are
    /// subtracted from all other rows, including the cost row, to make the rest of the column zero.
    ///
    /// # Arguments
    ///
    /// * `pivot_column_index`: Column index of the entering variable, in range `0` until
    /// `self.nr_columns()`.
    /// * `pivot_row_index`: Row index of the pivot, in range `0` until `self.nr_rows()`. The value
    /// at the pivot should be nonzero.
    pub fn bring_into_basis(&mut self, pivot_column_index: usize, pivot_row_index: usize) {
        debug_assert!(pivot_column_index < self.nr_columns());
        debug_assert!(pivot_row_index < self.nr_rows());
        debug_assert!(!self.matrix.get_value(pivot_row_index, pivot_column_index).is_zero());

        let pivot_value = self.matrix.get_value(pivot_row_index, pivot_column_index).clone();
        self.matrix.divide_row(pivot_row_index, &pivot_value);

        for row in (0..self.matrix.nr_rows()).filter(|&row| row != pivot_row_index) {
            let factor = -self.matrix.get_value(row, pivot_column_index).clone();
            self.matrix.mul_add_rows(pivot_row_index, row, &factor);
        }

        self.basis_indices[pivot_row_index] = pivot_column_index;
    }

    /// Determine the row to pivot on.
    ///
    /// Determine the row to pivot on, given the column. This is the row with the positive but
    /// minimal ratio between the current constraint value and the column.
    ///
    /// When there are multiple choices for the pivot row, the tied rows are compared by their ratio
    /// in the other columns, from left to right, until one row remains.
    ///
    /// # Arguments
    ///
    /// * `column`: Index of the entering column, in range `0` until `self.nr_columns()`.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If there are no positive values in the column, the problem is
    /// unbounded. If rows remain tied after all columns were compared, they are multiples of each
    /// other.
    pub fn select_primal_pivot_row(&self, column: usize) -> Result<usize, SolveError> {
        debug_assert!(column < self.nr_columns());

        let candidates = (0..self.nr_rows())
            .filter(|&row| self.matrix.get_value(row, column).is_positive())
            .collect::<Vec<_>>();
        if candidates.is_empty() {
            return Err(SolveError::Unbounded { column });
        }

        let mut tied = self.minimal_ratio_rows(&candidates, self.nr_columns(), column);
        let mut tie_break_columns = 0..self.nr_columns();
        while tied.len() > 1 {
            match tie_break_columns.next() {
                Some(k) => tied = self.minimal_ratio_rows(&tied, k, column),
                None => return Err(SolveError::LinearlyDependentRows { rows: tied }),
            }
        }

        Ok(tied[0])
    }

    /// Rows among the candidates with the smallest ratio of two columns.
    ///
    /// # Arguments
    ///
    /// * `candidates`: Rows with a positive value in the `denominator` column, sorted.
    /// * `numerator`: Column index, may be the right-hand side column.
    /// * `denominator`: Column index of the entering column.
    ///
    /// # Return value
    ///
    /// The candidates attaining the minimum, in the original order.
    fn minimal_ratio_rows(&self, candidates: &[usize], numerator: usize, denominator: usize) -> Vec<usize> {
        debug_assert!(!candidates.is_empty());

        let ratios = candidates.iter()
            .map(|&row| {
                let ratio = self.matrix.get_value(row, numerator).clone()
                    / self.matrix.get_value(row, denominator).clone();
                (row, ratio)
            })
            .collect::<Vec<_>>();

        let mut minimum = &ratios[0].1;
        for (_, ratio) in &ratios[1..] {
            if ratio < minimum {
                minimum = ratio;
            }
        }

        ratios.iter()
            .filter(|(_, ratio)| ratio == minimum)
            .map(|&(row, _)| row)
            .collect()
    }

    /// Get the current basic feasible solution.
    ///
    /// # Arguments
    ///
    /// * `nr_variables`: Number of leading columns to read a value for. Basic columns beyond this
    /// range are ignored.
    ///
    /// # Return value
    ///
    /// Values of the first `nr_variables` variables, zero for those that are not basic.
    pub fn current_bfs(&self, nr_variables: usize) -> Vec<F> {
        debug_assert!(nr_variables <= self.nr_columns());

        let mut x = vec![F::zero(); nr_variables];
        for (row, &column) in self.basis_indices.iter().enumerate() {
            if column < nr_variables {
                x[column] = self.rhs(row).clone();
            }
        }
        x
    }

    /// Check whether the tableau currently has a valid basic feasible solution.
    ///
    /// Every basic column should be the unit vector of its row and have a zero relative cost. Only
    /// used for debug purposes.
    pub fn is_in_basic_feasible_solution_state(&self) -> bool {
        let mut sorted = self.basis_indices.clone();
        sorted.sort_unstable();
        sorted.dedup();
        if sorted.len() != self.nr_rows() {
            return false;
        }

        self.basis_indices.iter().enumerate().all(|(row, &column)| {
            let mut expected = canonical::<F>(row, self.nr_rows());
            expected.push(F::zero());
            column < self.nr_columns() && self.matrix.column_equals(column, &expected)
        })
    }
}

impl<F, K> Tableau<F, K> {
    /// Relative cost of column `j`, read from the cost row.
    ///
    /// # Note
    ///
    /// The value for basis columns is always zero once the cost row was set up.
    pub fn relative_cost(&self, j: usize) -> &F {
        debug_assert!(j < self.nr_columns());

        self.matrix.get_value(self.nr_rows(), j)
    }

    /// Value of the variable basic in row `i`.
    pub fn rhs(&self, i: usize) -> &F {
        debug_assert!(i < self.nr_rows());

        self.matrix.get_value(i, self.nr_columns())
    }

    /// Get the cost of the current solution.
    ///
    /// # Note
    ///
    /// This function works for both artificial and non-artificial tableaus.
    pub fn objective_function_value(&self) -> &F {
        self.matrix.get_value(self.nr_rows(), self.nr_columns())
    }

    /// For each row, the column that is basic in it.
    pub fn basis_indices(&self) -> &[usize] {
        &self.basis_indices
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        debug_assert!(column < self.nr_columns());

        self.basis_indices.contains(&column)
    }

    /// All values of the tableau, including the cost row and right-hand side column.
    pub fn matrix(&self) -> &DenseMatrix<F> {
        &self.matrix
    }

    /// Number of constraint rows in the tableau.
    pub fn nr_rows(&self) -> usize {
        self.matrix.nr_rows() - 1
    }

    /// Number of variables in the tableau, artificial ones included.
    pub fn nr_columns(&self) -> usize {
        self.matrix.nr_columns() - 1
    }

    #[cfg(test)]
    pub(crate) fn from_parts(matrix: DenseMatrix<F>, basis_indices: Vec<usize>, kind: K) -> Self {
        debug_assert_eq!(basis_indices.len() + 1, matrix.nr_rows());

        Self { matrix, basis_indices, kind }
    }
}
