//! # Vectors
//!
//! Vectors are plain `Vec`s; this module holds the few constructors the tableau method needs.
use itertools::repeat_n;

use crate::data::number_types::traits::Field;

/// Standard basis vector `e_j` of length `len`.
///
/// # Arguments
///
/// * `j`: Index of the single one valued element, in range `0` until `len`.
/// * `len`: Length of the vector.
///
/// # Return value
///
/// A vector with a one at index `j` and zeros everywhere else.
pub fn canonical<F: Field>(j: usize, len: usize) -> Vec<F> {
    debug_assert!(j < len);

    let mut vector = repeat_n(F::zero(), len).collect::<Vec<_>>();
    vector[j] = F::one();
    vector
}

/// Extend a vector with zeros until it has length `len`.
///
/// Used to pad a cost vector that is shorter than the number of variables.
pub fn pad_with_zeros<F: Field>(values: &[F], len: usize) -> Vec<F> {
    debug_assert!(values.len() <= len);

    values.iter().cloned()
        .chain(repeat_n(F::zero(), len - values.len()))
        .collect()
}
