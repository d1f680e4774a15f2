//! Fallible counterparts of the fold and its reducer factories.
//!
//! These exist for callers whose predicates or transforms can fail, such as
//! the dynamic `Array` package where every callback is a runtime value. The
//! first `Err` stops the traversal and is returned as-is.

use super::reduce::NOT_FOUND;
use crate::Vec;

/// [`reduce`](super::reduce) with a reducer that may fail.
pub fn try_reduce<T, O, E, R>(array: &[T], mut reducer: R, initial: O) -> Result<O, E>
where
    R: FnMut(&T, O, usize, &[T]) -> Result<O, E>,
{
    let mut accumulator = initial;
    for (index, value) in array.iter().enumerate() {
        accumulator = reducer(value, accumulator, index, array)?;
    }
    Ok(accumulator)
}

/// [`reduce1`](super::reduce1) with a reducer that may fail.
///
/// `Ok(None)` means the slice was empty.
pub fn try_reduce1<T, E, R>(array: &[T], mut reducer: R) -> Result<Option<T>, E>
where
    T: Clone,
    R: FnMut(&T, T, usize, &[T]) -> Result<T, E>,
{
    let Some((first, _)) = array.split_first() else {
        return Ok(None);
    };
    let mut accumulator = first.clone();
    for (index, value) in array.iter().enumerate().skip(1) {
        accumulator = reducer(value, accumulator, index, array)?;
    }
    Ok(Some(accumulator))
}

pub fn make_try_any_function<T, E, P>(
    mut predicate: P,
) -> impl FnMut(&T, bool, usize, &[T]) -> Result<bool, E>
where
    P: FnMut(&T) -> Result<bool, E>,
{
    move |value: &T, accumulator: bool, _index: usize, _array: &[T]| {
        Ok(predicate(value)? || accumulator)
    }
}

pub fn make_try_filter_function<T, E, P>(
    mut predicate: P,
) -> impl FnMut(&T, Vec<T>, usize, &[T]) -> Result<Vec<T>, E>
where
    T: Clone,
    P: FnMut(&T) -> Result<bool, E>,
{
    move |value: &T, mut accumulator: Vec<T>, _index: usize, _array: &[T]| {
        if predicate(value)? {
            accumulator.push(value.clone());
        }
        Ok(accumulator)
    }
}

pub fn make_try_map_function<T, U, E, F>(
    mut transform: F,
) -> impl FnMut(&T, Vec<U>, usize, &[T]) -> Result<Vec<U>, E>
where
    F: FnMut(&T) -> Result<U, E>,
{
    move |value: &T, mut accumulator: Vec<U>, _index: usize, _array: &[T]| {
        accumulator.push(transform(value)?);
        Ok(accumulator)
    }
}

pub fn make_try_flat_map_function<T, U, I, E, F>(
    mut transform: F,
) -> impl FnMut(&T, Vec<U>, usize, &[T]) -> Result<Vec<U>, E>
where
    I: IntoIterator<Item = U>,
    F: FnMut(&T) -> Result<I, E>,
{
    move |value: &T, mut accumulator: Vec<U>, _index: usize, _array: &[T]| {
        accumulator.extend(transform(value)?);
        Ok(accumulator)
    }
}

/// Same contract as [`make_find_function`](super::make_find_function): after a
/// match the predicate is not called again.
pub fn make_try_find_function<T, E, P>(
    mut predicate: P,
) -> impl FnMut(&T, Option<T>, usize, &[T]) -> Result<Option<T>, E>
where
    T: Clone,
    P: FnMut(&T) -> Result<bool, E>,
{
    move |value: &T, accumulator: Option<T>, _index: usize, _array: &[T]| match accumulator {
        Some(found) => Ok(Some(found)),
        None => Ok(predicate(value)?.then(|| value.clone())),
    }
}

pub fn make_try_find_index_function<T, E, P>(
    mut predicate: P,
) -> impl FnMut(&T, isize, usize, &[T]) -> Result<isize, E>
where
    P: FnMut(&T) -> Result<bool, E>,
{
    move |value: &T, accumulator: isize, index: usize, _array: &[T]| {
        if accumulator != NOT_FOUND {
            Ok(accumulator)
        } else if predicate(value)? {
            Ok(index as isize)
        } else {
            Ok(NOT_FOUND)
        }
    }
}
