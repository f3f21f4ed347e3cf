//! # Finding basis columns that are already present
//!
//! Sometimes, a few variables (like positive slack variables) are available that result in less
//! artificial variables being needed. If there is one for every row, the first phase can be skipped.
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::vector::canonical;
use crate::data::number_types::traits::Field;

/// For each row, find a column of the constraint matrix that is the unit vector of that row.
///
/// Columns are compared exactly, so a column that differs from a unit vector by a rounding error
/// is not found.
///
/// # Arguments
///
/// * `constraints`: Matrix `A` of size `m` x `n`.
///
/// # Return value
///
/// A `Vec` of length `m`, containing for each row the lowest index of such a column, if there is
/// one.
pub fn find_identity_columns<F: Field>(constraints: &DenseMatrix<F>) -> Vec<Option<usize>> {
    let m = constraints.nr_rows();

    (0..m)
        .map(|row| {
            let e_row = canonical::<F>(row, m);
            (0..constraints.nr_columns()).find(|&j| constraints.column_equals(j, &e_row))
        })
        .collect()
}

/// Whether every row has a basis column.
pub fn is_complete(initial_basis: &[Option<usize>]) -> bool {
    initial_basis.iter().all(Option::is_some)
}

#[cfg(test)]
mod test {
    use crate::algorithm::two_phase::initial_basis::{find_identity_columns, is_complete};
    use crate::data::linear_algebra::matrix::DenseMatrix;
    use crate::tests::problem_1;

    #[test]
    fn slacks() {
        let problem = problem_1::standard_form();
        let basis = find_identity_columns(problem.constraints());
        assert_eq!(basis, vec![Some(3), Some(4), Some(5)]);
        assert!(is_complete(&basis));
    }

    #[test]
    fn partial() {
        let constraints = DenseMatrix::from_data(vec![
            vec![1f64, 1f64, 1f64],
            vec![1f64, -1f64, 0f64],
        ]);
        let basis = find_identity_columns(&constraints);
        assert_eq!(basis, vec![Some(2), None]);
        assert!(!is_complete(&basis));
    }

    #[test]
    fn lowest_index() {
        let constraints = DenseMatrix::from_data(vec![
            vec![3f64, 0f64, 1f64, 1f64],
            vec![1f64, 1f64, 0f64, 0f64],
        ]);
        assert_eq!(find_identity_columns(&constraints), vec![Some(2), Some(1)]);
    }

    #[test]
    fn exact() {
        let constraints = DenseMatrix::from_data(vec![
            vec![1f64 + f64::EPSILON, 0f64],
            vec![0f64, 1f64],
        ]);
        assert_eq!(find_identity_columns(&constraints), vec![None, Some(1)]);
    }
}
