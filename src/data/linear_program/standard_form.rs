//! # Linear programs in standard form
//!
//! minimize ⟨c, x⟩ subject to A x = b, x ≥ 0, with b ≥ 0.
use crate::algorithm::error::InvalidInput;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::vector::pad_with_zeros;
use crate::data::number_types::traits::OrderedField;

/// A linear program in `StandardForm` has only equality constraints and nonnegative variables.
/// Moreover, the constraint vector `b` is nonnegative.
///
/// Immutable once created; solving it doesn't change it.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardForm<F> {
    constraints: DenseMatrix<F>,
    b: Vec<F>,
    /// May be shorter than the number of variables, missing values are zero.
    cost: Vec<F>,
}

impl<F: OrderedField> StandardForm<F> {
    /// Create a new linear program in standard form.
    ///
    /// # Arguments
    ///
    /// * `constraints`: Matrix `A` of size `m` x `n`.
    /// * `b`: Constraint values of length `m`, all nonnegative.
    /// * `cost`: Objective function coefficients `c` of length at most `n`, padded with zeros.
    ///
    /// # Return value
    ///
    /// The linear program, or the reason why the data doesn't describe one.
    pub fn new(
        constraints: DenseMatrix<F>,
        b: Vec<F>,
        cost: Vec<F>,
    ) -> Result<Self, InvalidInput> {
        if constraints.nr_rows() == 0 || constraints.nr_columns() == 0 {
            return Err(InvalidInput::Empty);
        }
        if b.len() != constraints.nr_rows() {
            return Err(InvalidInput::DimensionMismatch(format!(
                "A has {} rows, but b has length {}", constraints.nr_rows(), b.len(),
            )));
        }
        if cost.len() > constraints.nr_columns() {
            return Err(InvalidInput::DimensionMismatch(format!(
                "A has {} columns, but c has length {}", constraints.nr_columns(), cost.len(),
            )));
        }
        if let Some(row) = b.iter().position(|value| value.is_negative()) {
            return Err(InvalidInput::NegativeRightHandSide { row });
        }

        Ok(Self { constraints, b, cost })
    }

    /// Create a new linear program from rows of `A`.
    ///
    /// Like `new`, but also rejects rows of different length.
    pub fn from_rows(
        rows: Vec<Vec<F>>,
        b: Vec<F>,
        cost: Vec<F>,
    ) -> Result<Self, InvalidInput> {
        let constraints = DenseMatrix::try_from_data(rows)
            .ok_or_else(|| InvalidInput::DimensionMismatch("rows of A differ in length".to_string()))?;

        Self::new(constraints, b, cost)
    }

    /// Cost vector padded with zeros to length `self.nr_variables()`.
    pub fn padded_cost(&self) -> Vec<F> {
        pad_with_zeros(&self.cost, self.nr_variables())
    }

    /// Objective function value of a solution vector.
    ///
    /// # Arguments
    ///
    /// * `x`: Values for all variables, of length `self.nr_variables()`.
    pub fn objective_value(&self, x: &[F]) -> F {
        debug_assert_eq!(x.len(), self.nr_variables());

        self.cost.iter().zip(x)
            .fold(F::zero(), |total, (c, v)| total + c.clone() * v.clone())
    }
}

impl<F> StandardForm<F> {
    /// Constraint matrix `A`.
    pub fn constraints(&self) -> &DenseMatrix<F> {
        &self.constraints
    }

    /// Constraint values `b`.
    pub fn b(&self) -> &[F] {
        &self.b
    }

    /// Objective function coefficients `c` as provided, without padding.
    pub fn cost(&self) -> &[F] {
        &self.cost
    }

    /// Get the number of variables.
    pub fn nr_variables(&self) -> usize {
        self.constraints.nr_columns()
    }

    /// Get the number of constraints.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.nr_rows()
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::error::InvalidInput;
    use crate::data::linear_program::standard_form::StandardForm;

    #[test]
    fn negative_b() {
        let result = StandardForm::from_rows(
            vec![vec![1f64, 0f64], vec![0f64, 1f64]],
            vec![1f64, -0.5f64],
            vec![1f64],
        );
        assert_eq!(result, Err(InvalidInput::NegativeRightHandSide { row: 1 }));
    }

    #[test]
    fn zero_b_is_valid() {
        let result = StandardForm::from_rows(vec![vec![1f64, 1f64]], vec![0f64], vec![]);
        assert!(result.is_ok());
    }

    #[test]
    fn dimensions() {
        assert!(matches!(
            StandardForm::from_rows(vec![vec![1f64, 1f64]], vec![1f64, 2f64], vec![]),
            Err(InvalidInput::DimensionMismatch(_)),
        ));
        assert!(matches!(
            StandardForm::from_rows(vec![vec![1f64, 1f64]], vec![1f64], vec![1f64, 1f64, 1f64]),
            Err(InvalidInput::DimensionMismatch(_)),
        ));
        assert!(matches!(
            StandardForm::from_rows(vec![vec![1f64, 1f64], vec![1f64]], vec![1f64, 1f64], vec![]),
            Err(InvalidInput::DimensionMismatch(_)),
        ));
        assert_eq!(
            StandardForm::<f64>::from_rows(vec![], vec![], vec![]),
            Err(InvalidInput::Empty),
        );
    }

    #[test]
    fn padded_cost() {
        let problem = StandardForm::from_rows(
            vec![vec![1f64, -2f64, 1f64, 0f64], vec![-1f64, 1f64, 0f64, 1f64]],
            vec![4f64, 3f64],
            vec![-1f64, -3f64],
        ).unwrap();
        assert_eq!(problem.padded_cost(), vec![-1f64, -3f64, 0f64, 0f64]);
        assert_eq!(problem.objective_value(&[1f64, 2f64, 0f64, 5f64]), -7f64);
    }
}
