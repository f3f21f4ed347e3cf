//! # Tableau types: artificial or not
//!
//! A tableau can contain artificial variables. They are used to find a feasible solution in a
//! two-phase algorithm: the first phase finds a basic feasible solution, the second improves it.
//!
//! The `Tableau` type and the pivoting logic in the parent module is independent of whether a
//! tableau contains artificial variables, or not. The constructors that differ live here.
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::vector::canonical;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::traits::OrderedField;

/// The `Tableau` contains artificial variables, and is in the first phase of the two-phase
/// algorithm.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Artificial {
    /// Number of variables of the original problem.
    ///
    /// The artificial columns directly follow these.
    nr_structural: usize,
    /// Column indices of the artificial variables, sorted.
    artificial_columns: Vec<usize>,
}

/// The `Tableau` does not contain any artificial variables.
///
/// This `Tableau` variant should only be constructed with a known feasible basis.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct NonArtificial;

impl<F: OrderedField> Tableau<F, Artificial> {
    /// Create a tableau with an artificial variable for each row that lacks a basis column.
    ///
    /// The artificial columns are appended in increasing row order and become basic in their row.
    /// The cost row has a `-1` under each artificial column and zeros elsewhere; it is not yet
    /// expressed in the nonbasic variables, see `add_row_to_cost`.
    ///
    /// # Arguments
    ///
    /// * `problem`: Linear program to find a basic feasible solution for.
    /// * `initial_basis`: For each row, a column of the problem that is an identity column for that
    /// row, if there is one. At least one row should lack one.
    ///
    /// # Return value
    ///
    /// `Tableau` of size `(m + 1)` x `(n + a + 1)`.
    pub fn new(problem: &StandardForm<F>, initial_basis: &[Option<usize>]) -> Self {
        let m = problem.nr_constraints();
        let n = problem.nr_variables();
        debug_assert_eq!(initial_basis.len(), m);
        debug_assert!(initial_basis.iter().any(Option::is_none));

        let missing_rows = initial_basis.iter().enumerate()
            .filter(|(_, column)| column.is_none())
            .map(|(row, _)| row)
            .collect::<Vec<_>>();
        let nr_artificial = missing_rows.len();
        let artificial_columns = (n..(n + nr_artificial)).collect::<Vec<_>>();

        let mut matrix = DenseMatrix::zeros(m + 1, n + nr_artificial + 1);
        for (i, (row, b)) in problem.constraints().rows().zip(problem.b()).enumerate() {
            for (j, value) in row.iter().enumerate() {
                matrix.set_value(i, j, value.clone());
            }
            matrix.set_value(i, n + nr_artificial, b.clone());
        }

        let mut basis_indices = initial_basis.iter().map(|column| column.unwrap_or(0)).collect::<Vec<_>>();
        for (&row, &column) in missing_rows.iter().zip(&artificial_columns) {
            for (i, value) in canonical::<F>(row, m).into_iter().enumerate() {
                matrix.set_value(i, column, value);
            }
            matrix.set_value(m, column, -F::one());
            basis_indices[row] = column;
        }

        Tableau {
            matrix,
            basis_indices,
            kind: Artificial {
                nr_structural: n,
                artificial_columns,
            },
        }
    }

    /// Add a constraint row to the cost row.
    ///
    /// Used to bring the artificial cost row in terms of the nonbasic variables: adding the row in
    /// which an artificial variable is basic zeroes the `-1` under that artificial column.
    pub fn add_row_to_cost(&mut self, row: usize) {
        debug_assert!(row < self.nr_rows());

        let cost_row = self.nr_rows();
        self.matrix.mul_add_rows(row, cost_row, &F::one());
    }

    /// Delete constraint rows together with their basis entries.
    ///
    /// # Arguments
    ///
    /// * `rows`: Sorted, deduplicated row indices. The cost row can't be removed.
    pub fn remove_rows(&mut self, rows: &[usize]) {
        debug_assert!(rows.iter().all(|&row| row < self.nr_rows()));

        self.matrix.remove_rows(rows);
        index_utils::remove_indices(&mut self.basis_indices, rows);
    }
}

impl<F> Tableau<F, Artificial> {
    /// Column indices of the artificial variables.
    pub fn artificial_columns(&self) -> &[usize] {
        &self.kind.artificial_columns
    }

    /// How many artificial variables are in the tableau.
    pub fn nr_artificial_variables(&self) -> usize {
        self.kind.artificial_columns.len()
    }

    /// Number of variables of the original problem.
    pub fn nr_structural_variables(&self) -> usize {
        self.kind.nr_structural
    }

    /// Whether column `j` belongs to an artificial variable.
    pub fn is_artificial(&self, j: usize) -> bool {
        self.kind.artificial_columns.binary_search(&j).is_ok()
    }

    /// Rows in which an artificial variable is basic.
    pub fn rows_with_artificial_in_basis(&self) -> Vec<usize> {
        (0..self.nr_rows())
            .filter(|&row| self.is_artificial(self.basis_indices[row]))
            .collect()
    }
}

impl<F: OrderedField> Tableau<F, NonArtificial> {
    /// Create a tableau for a problem that already has a complete basis of identity columns.
    ///
    /// # Arguments
    ///
    /// * `problem`: Linear program to solve.
    /// * `basis_indices`: For each row, the identity column of the problem that is basic in it.
    ///
    /// # Return value
    ///
    /// `Tableau` of size `(m + 1)` x `(n + 1)` with `-c` as its cost row.
    pub fn new(problem: &StandardForm<F>, basis_indices: Vec<usize>) -> Self {
        let m = problem.nr_constraints();
        let n = problem.nr_variables();
        debug_assert_eq!(basis_indices.len(), m);

        let rows = problem.constraints().rows()
            .zip(problem.b())
            .map(|(row, b)| row.iter().cloned().chain(Some(b.clone())).collect::<Vec<_>>())
            .chain(Some(Self::cost_row(problem)))
            .collect();

        let tableau = Tableau {
            matrix: DenseMatrix::from_data(rows),
            basis_indices,
            kind: NonArtificial,
        };
        debug_assert_eq!(tableau.nr_columns(), n);
        tableau
    }

    /// Create the second phase tableau from the end result of the first phase.
    ///
    /// The artificial columns are removed and the cost row is replaced by `-c`. The relative cost
    /// of the basic variables is not yet zero, see `eliminate_cost`.
    ///
    /// # Arguments
    ///
    /// * `artificial`: Tableau without artificial variables in the basis.
    /// * `problem`: Linear program that the artificial tableau was created for.
    pub fn from_artificial(artificial: Tableau<F, Artificial>, problem: &StandardForm<F>) -> Self {
        debug_assert!(artificial.rows_with_artificial_in_basis().is_empty());
        debug_assert_eq!(artificial.nr_structural_variables(), problem.nr_variables());

        let Tableau { mut matrix, basis_indices, kind } = artificial;
        matrix.remove_columns(&kind.artificial_columns);
        let cost_row = matrix.nr_rows() - 1;
        matrix.set_row(cost_row, Self::cost_row(problem));

        Tableau {
            matrix,
            basis_indices,
            kind: NonArtificial,
        }
    }

    /// `-c` padded with zeros, followed by a zero objective value.
    fn cost_row(problem: &StandardForm<F>) -> Vec<F> {
        problem.padded_cost().into_iter()
            .map(|c| -c)
            .chain(Some(F::zero()))
            .collect()
    }

    /// Make the relative cost of the variable basic in `row` zero.
    ///
    /// Subtracts a multiple of that row from the cost row.
    pub fn eliminate_cost(&mut self, row: usize) {
        debug_assert!(row < self.nr_rows());

        let column = self.basis_indices[row];
        let factor = -self.relative_cost(column).clone();
        let cost_row = self.nr_rows();
        self.matrix.mul_add_rows(row, cost_row, &factor);
    }
}
