//! # Traits
//!
//! A hierarchy of number types is defined. The hierarchy is "mathematically exact", but the
//! implementations aren't. Floating point numbers satisfy these traits while only approximately
//! keeping their contracts; rational numbers keep them exactly.
use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

/// Basic field operations, by value.
///
/// All methods representing a matrix are defined over a field, because they don't need an
/// ordering.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait Field:
    PartialEq +
    Zero + // Additive identity
    Neg<Output=Self> + // Additive inverse
    One + // Multiplicative identity
    Add<Output=Self> +
    Sub<Output=Self> +
    Mul<Output=Self> +
    Div<Output=Self> +
    // Practicalities
    Clone +
    Display +
    Debug +
{
}
impl<T> Field for T
where
    T: PartialEq + Zero + Neg<Output=T> + One + Add<Output=T> + Sub<Output=T> + Mul<Output=T> +
        Div<Output=T> + Clone + Display + Debug,
{
}

/// The simplex algorithm is defined over the ordered fields. All methods containing algorithmic
/// logic should be defined to work an ordered field (or a field, if they don't need the ordering).
///
/// Note that `PartialOrd` suffices: the algorithm never compares against values that are not
/// comparable, such as a NaN, as long as the input doesn't contain them.
pub trait OrderedField: Field + PartialOrd {
    /// Whether this value is strictly larger than the additive identity.
    fn is_positive(&self) -> bool {
        self > &Self::zero()
    }

    /// Whether this value is strictly smaller than the additive identity.
    fn is_negative(&self) -> bool {
        self < &Self::zero()
    }
}
impl<T: Field + PartialOrd> OrderedField for T {
}
