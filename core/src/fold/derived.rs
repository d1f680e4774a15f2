//! Traversals expressed as a single call to [`reduce`].

use super::reduce::{NOT_FOUND, reduce};
use super::reducers::{concat_all, product, sum};
use crate::Vec;
use crate::monoid::Numeric;

/// Sum of all elements; `0` for an empty slice.
///
/// Integer overflow behaves like the `+` operator (panics in debug builds).
pub fn array_sum<N: Numeric>(numbers: &[N]) -> N {
    reduce(numbers, sum, N::ZERO)
}

/// Product of all elements; `1` for an empty slice.
pub fn array_product<N: Numeric>(numbers: &[N]) -> N {
    reduce(numbers, product, N::ONE)
}

/// Flattens a slice of sequences, preserving order.
pub fn concat<T: Clone>(arrays: &[Vec<T>]) -> Vec<T> {
    reduce(arrays, concat_all, Vec::new())
}

/// Runs a boolean reducer (usually from [`make_any_function`](super::make_any_function))
/// starting from `false`.
pub fn bool_any<T, R>(input: &[T], reducer: R) -> bool
where
    R: FnMut(&T, bool, usize, &[T]) -> bool,
{
    reduce(input, reducer, false)
}

/// Runs a filtering reducer starting from an empty `Vec`.
pub fn filter<T, R>(array: &[T], reducer: R) -> Vec<T>
where
    R: FnMut(&T, Vec<T>, usize, &[T]) -> Vec<T>,
{
    reduce(array, reducer, Vec::new())
}

/// Runs a mapping reducer starting from an empty `Vec`.
///
/// The output has one element per input element when the reducer comes from
/// [`make_map_function`](super::make_map_function).
pub fn map<T, U, R>(array: &[T], reducer: R) -> Vec<U>
where
    R: FnMut(&T, Vec<U>, usize, &[T]) -> Vec<U>,
{
    reduce(array, reducer, Vec::with_capacity(array.len()))
}

/// Runs a flat-mapping reducer starting from an empty `Vec`.
pub fn flat_map<T, U, R>(array: &[T], reducer: R) -> Vec<U>
where
    R: FnMut(&T, Vec<U>, usize, &[T]) -> Vec<U>,
{
    reduce(array, reducer, Vec::new())
}

/// Runs a find reducer starting from `None`.
pub fn find<T, R>(array: &[T], reducer: R) -> Option<T>
where
    R: FnMut(&T, Option<T>, usize, &[T]) -> Option<T>,
{
    reduce(array, reducer, None)
}

/// Runs a find-index reducer starting from [`NOT_FOUND`] (`-1`).
pub fn find_index<T, R>(array: &[T], reducer: R) -> isize
where
    R: FnMut(&T, isize, usize, &[T]) -> isize,
{
    reduce(array, reducer, NOT_FOUND)
}
