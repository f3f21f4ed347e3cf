//! # Dense matrix
//!
//! Row-major matrix with the elementary row operations that the tableau method needs. Dimensions
//! are fixed at creation, except for the explicit row and column removal methods.
use std::fmt;
use std::fmt::{Display, Formatter};

use index_utils::remove_indices;
use itertools::{Itertools, repeat_n};

use crate::data::number_types::traits::Field;

/// Uses a `Vec<Vec<F>>` as underlying data structure, one inner `Vec` per row.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F> DenseMatrix<F> {
    /// Create a `DenseMatrix` from the provided rows.
    ///
    /// # Arguments
    ///
    /// * `data`: Rows of the matrix, all of the same length.
    ///
    /// # Return value
    ///
    /// A new matrix, or `None` if the rows don't all have the same length.
    pub fn try_from_data(data: Vec<Vec<F>>) -> Option<Self> {
        let nr_rows = data.len();
        let nr_columns = data.first().map_or(0, Vec::len);
        if data.iter().all(|row| row.len() == nr_columns) {
            Some(Self { data, nr_rows, nr_columns })
        } else {
            None
        }
    }

    /// Create a `DenseMatrix` from the provided rows.
    ///
    /// # Panics
    ///
    /// If the rows are not all of the same length.
    pub fn from_data(data: Vec<Vec<F>>) -> Self {
        match Self::try_from_data(data) {
            Some(matrix) => matrix,
            None => panic!("Rows of a dense matrix should all have the same length"),
        }
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get_value(&self, i: usize, j: usize) -> &F {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        &self.data[i][j]
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set_value(&mut self, i: usize, j: usize, value: F) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j] = value;
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows);

        &self.data[i]
    }

    /// Iterate over the rows of this matrix.
    pub fn rows(&self) -> impl Iterator<Item=&[F]> {
        self.data.iter().map(Vec::as_slice)
    }

    /// Remove rows from this matrix.
    ///
    /// # Arguments
    ///
    /// * `indices`: A sorted, deduplicated list of row indices to remove.
    pub fn remove_rows(&mut self, indices: &[usize]) {
        debug_assert!(indices.is_sorted());
        debug_assert!(indices.iter().all(|&i| i < self.nr_rows));

        remove_indices(&mut self.data, indices);
        self.nr_rows -= indices.len();
    }

    /// Remove columns from this matrix.
    ///
    /// # Arguments
    ///
    /// * `indices`: A sorted, deduplicated list of column indices to remove.
    pub fn remove_columns(&mut self, indices: &[usize]) {
        debug_assert!(indices.is_sorted());
        debug_assert!(indices.iter().all(|&j| j < self.nr_columns));

        for row in &mut self.data {
            remove_indices(row, indices);
        }
        self.nr_columns -= indices.len();
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }
}

impl<F: Field> DenseMatrix<F> {
    /// Create a dense matrix of zero's of dimension `rows` x `columns`.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self {
            data: repeat_n(repeat_n(F::zero(), columns).collect::<Vec<_>>(), rows).collect(),
            nr_rows: rows,
            nr_columns: columns,
        }
    }

    /// Get all values in column `j` of this matrix.
    pub fn column(&self, j: usize) -> Vec<F> {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(|row| row[j].clone()).collect()
    }

    /// Whether column `j` is exactly equal to the provided values.
    ///
    /// # Arguments
    ///
    /// * `j`: Column index.
    /// * `values`: Values to compare with, should have length `self.nr_rows()`.
    pub fn column_equals(&self, j: usize, values: &[F]) -> bool {
        debug_assert!(j < self.nr_columns);
        debug_assert_eq!(values.len(), self.nr_rows);

        self.data.iter().zip(values).all(|(row, value)| &row[j] == value)
    }

    /// Divide all values in row `i` by `divisor`.
    pub fn divide_row(&mut self, i: usize, divisor: &F) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(!divisor.is_zero());

        for value in &mut self.data[i] {
            *value = value.clone() / divisor.clone();
        }
    }

    /// Add a multiple of row `read_row` to row `write_row`.
    ///
    /// # Arguments
    ///
    /// * `read_row`: Row that is read, it doesn't change.
    /// * `write_row`: Row that is changed, should not be equal to `read_row`.
    /// * `factor`: Multiple of the `read_row` that is added.
    pub fn mul_add_rows(&mut self, read_row: usize, write_row: usize, factor: &F) {
        debug_assert!(read_row < self.nr_rows);
        debug_assert!(write_row < self.nr_rows);
        debug_assert_ne!(read_row, write_row);

        if factor.is_zero() {
            return;
        }

        for j in 0..self.nr_columns {
            let difference = factor.clone() * self.data[read_row][j].clone();
            self.data[write_row][j] = self.data[write_row][j].clone() + difference;
        }
    }

    /// Overwrite row `i` with the provided values.
    pub fn set_row(&mut self, i: usize, values: Vec<F>) {
        debug_assert!(i < self.nr_rows);
        debug_assert_eq!(values.len(), self.nr_columns);

        self.data[i] = values;
    }
}

impl<F: Display> Display for DenseMatrix<F> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let formatted = self.data.iter()
            .map(|row| row.iter().map(ToString::to_string).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let width = formatted.iter().flatten().map(String::len).max().unwrap_or(0);

        for row in formatted {
            let line = row.iter().map(|value| format!("{value:>width$}")).join(" ");
            writeln!(f, "[{line}]")?;
        }

        Ok(())
    }
}
