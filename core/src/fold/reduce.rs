//! The primitive left-fold.

/// Result of `find_index` (and its reducer) when no element matches.
pub const NOT_FOUND: isize = -1;

/// Folds `array` from left to right.
///
/// At each step the accumulator is replaced by
/// `reducer(element, accumulator, index, array)`; the final accumulator is
/// returned. Elements are visited in ascending index order, exactly once each.
/// An empty slice returns `initial` unchanged.
///
/// # Examples
///
/// ```
/// use refold_core::fold::reduce;
///
/// let total = reduce(&[1, 2, 3], |value, acc, _, _| acc + value, 0);
/// assert_eq!(total, 6);
///
/// // The accumulator can be a different type from the elements.
/// let lengths = reduce(&["a", "bb"], |value, mut acc: Vec<usize>, _, _| {
///     acc.push(value.len());
///     acc
/// }, Vec::new());
/// assert_eq!(lengths, vec![1, 2]);
/// ```
pub fn reduce<T, O, R>(array: &[T], mut reducer: R, initial: O) -> O
where
    R: FnMut(&T, O, usize, &[T]) -> O,
{
    let mut accumulator = initial;
    for (index, value) in array.iter().enumerate() {
        accumulator = reducer(value, accumulator, index, array);
    }
    accumulator
}

/// Like [`reduce`], but uses the first element as the initial accumulator
/// (Haskell's `foldl1`).
///
/// The reducer sees the remaining elements with their original indices, so the
/// first call receives index `1`. Returns `None` for an empty slice.
///
/// ```
/// use refold_core::fold::reduce1;
///
/// assert_eq!(reduce1(&[3, 9, 4], |v, acc, _, _| acc.max(*v)), Some(9));
/// assert_eq!(reduce1(&[] as &[i32], |v, acc, _, _| acc.max(*v)), None);
/// ```
pub fn reduce1<T, R>(array: &[T], mut reducer: R) -> Option<T>
where
    T: Clone,
    R: FnMut(&T, T, usize, &[T]) -> T,
{
    let (first, _) = array.split_first()?;
    let mut accumulator = first.clone();
    for (index, value) in array.iter().enumerate().skip(1) {
        accumulator = reducer(value, accumulator, index, array);
    }
    Some(accumulator)
}
