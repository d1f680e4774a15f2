//! Literal reducers and the higher-order functions that build reducers.

use super::reduce::NOT_FOUND;
use crate::Vec;
use crate::monoid::Numeric;

// ============================================================================
// Literal Reducers
// ============================================================================

/// Adds the element to the accumulator.
pub fn sum<N: Numeric>(value: &N, accumulator: N, _index: usize, _array: &[N]) -> N {
    *value + accumulator
}

/// Multiplies the element into the accumulator.
pub fn product<N: Numeric>(value: &N, accumulator: N, _index: usize, _array: &[N]) -> N {
    *value * accumulator
}

/// True once any element is `Some`.
///
/// The element type and the accumulator type differ: `Option<T>` in, `bool` out.
pub fn any_defined<T>(value: &Option<T>, accumulator: bool, _index: usize, _array: &[Option<T>]) -> bool {
    value.is_some() || accumulator
}

/// Appends a sub-sequence to the accumulator.
///
/// Folding with this from an empty `Vec` flattens one level of nesting.
#[allow(clippy::ptr_arg)]
pub fn concat_all<T: Clone>(
    value: &Vec<T>,
    mut accumulator: Vec<T>,
    _index: usize,
    _array: &[Vec<T>],
) -> Vec<T> {
    accumulator.extend_from_slice(value);
    accumulator
}

// ============================================================================
// Reducer Factories
// ============================================================================

/// Returns a reducer that becomes (and stays) `true` once any element passes `predicate`.
///
/// Every element is still visited; the fold does not short-circuit.
pub fn make_any_function<T, P>(mut predicate: P) -> impl FnMut(&T, bool, usize, &[T]) -> bool
where
    P: FnMut(&T) -> bool,
{
    move |value: &T, accumulator: bool, _index: usize, _array: &[T]| {
        predicate(value) || accumulator
    }
}

/// Returns a reducer that keeps the elements passing `predicate`, in order.
pub fn make_filter_function<T, P>(
    mut predicate: P,
) -> impl FnMut(&T, Vec<T>, usize, &[T]) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    move |value: &T, mut accumulator: Vec<T>, _index: usize, _array: &[T]| {
        if predicate(value) {
            accumulator.push(value.clone());
        }
        accumulator
    }
}

/// Returns a reducer that appends `transform(element)` for every element.
pub fn make_map_function<T, U, F>(mut transform: F) -> impl FnMut(&T, Vec<U>, usize, &[T]) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    move |value: &T, mut accumulator: Vec<U>, _index: usize, _array: &[T]| {
        accumulator.push(transform(value));
        accumulator
    }
}

/// Returns a reducer that appends every item produced by `transform(element)`.
///
/// This is map followed by one level of concatenation, done in a single pass.
pub fn make_flat_map_function<T, U, I, F>(
    mut transform: F,
) -> impl FnMut(&T, Vec<U>, usize, &[T]) -> Vec<U>
where
    I: IntoIterator<Item = U>,
    F: FnMut(&T) -> I,
{
    move |value: &T, mut accumulator: Vec<U>, _index: usize, _array: &[T]| {
        accumulator.extend(transform(value));
        accumulator
    }
}

/// Returns a reducer that records the first element passing `predicate`.
///
/// Once a match is recorded the accumulator is passed through untouched and
/// `predicate` is no longer called.
pub fn make_find_function<T, P>(
    mut predicate: P,
) -> impl FnMut(&T, Option<T>, usize, &[T]) -> Option<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    move |value: &T, accumulator: Option<T>, _index: usize, _array: &[T]| match accumulator {
        Some(found) => Some(found),
        None if predicate(value) => Some(value.clone()),
        None => None,
    }
}

/// Returns a reducer that records the index of the first element passing
/// `predicate`, starting from [`NOT_FOUND`].
pub fn make_find_index_function<T, P>(
    mut predicate: P,
) -> impl FnMut(&T, isize, usize, &[T]) -> isize
where
    P: FnMut(&T) -> bool,
{
    move |value: &T, accumulator: isize, index: usize, _array: &[T]| {
        if accumulator != NOT_FOUND {
            accumulator
        } else if predicate(value) {
            // Slice lengths never exceed `isize::MAX`.
            index as isize
        } else {
            NOT_FOUND
        }
    }
}
