//! Tests for `reduce` and the operations derived from it

use super::*;
use crate::monoid::Numeric;
use pretty_assertions::assert_eq;

fn is_even(n: &i32) -> bool {
    n % 2 == 0
}

// ============================================================================
// Reduce Tests
// ============================================================================

#[test]
fn test_reduce_empty_returns_initial() {
    let result = reduce(&[] as &[i32], |_, _, _, _| "changed", "initial");
    assert_eq!(result, "initial");
}

#[test]
fn test_reduce_append_copies_sequence() {
    let input = [3, 1, 2];
    let copy = reduce(
        &input,
        |value, mut acc: Vec<i32>, _, _| {
            acc.push(*value);
            acc
        },
        Vec::new(),
    );
    assert_eq!(copy, input.to_vec());
}

#[test]
fn test_reduce_visits_in_index_order_once() {
    let input = [10, 20, 30];
    let visits = reduce(
        &input,
        |value, mut acc: Vec<(usize, i32)>, index, array| {
            assert_eq!(array, &input);
            acc.push((index, *value));
            acc
        },
        Vec::new(),
    );
    assert_eq!(visits, vec![(0, 10), (1, 20), (2, 30)]);
}

#[test]
fn test_reduce1() {
    assert_eq!(reduce1(&[5], |_, _, _, _| unreachable!()), Some(5));
    assert_eq!(reduce1(&[] as &[i32], |v, acc, _, _| acc + v), None);

    let indices = reduce1(&[0usize, 0, 0], |_, acc, index, _| acc * 10 + index);
    assert_eq!(indices, Some(12));
}

#[test]
fn test_try_reduce_stops_at_first_error() {
    let mut visited = Vec::new();
    let result: Result<i32, String> = try_reduce(
        &[1, 2, 3, 4],
        |value, acc, index, _| {
            visited.push(index);
            if *value == 3 {
                Err(format!("bad element {value}"))
            } else {
                Ok(acc + value)
            }
        },
        0,
    );
    assert_eq!(result, Err("bad element 3".to_string()));
    assert_eq!(visited, vec![0, 1, 2]);
}

#[test]
fn test_try_reduce1_empty() {
    let result: Result<Option<i32>, ()> = try_reduce1(&[] as &[i32], |v, acc, _, _| Ok(acc + v));
    assert_eq!(result, Ok(None));
}

// ============================================================================
// Numeric Folds
// ============================================================================

#[test]
fn test_array_sum() {
    assert_eq!(array_sum::<i32>(&[]), 0);
    assert_eq!(array_sum(&[1, 2, 3]), 6);
    assert_eq!(array_sum(&[0.5, 0.25]), 0.75);
}

#[test]
fn test_array_product() {
    assert_eq!(array_product::<i64>(&[]), 1);
    assert_eq!(array_product(&[2, 3, 4]), 24);
    assert_eq!(array_product(&[2u8, 0, 100]), 0);
}

#[test]
fn test_numeric_identities() {
    fn check<N: Numeric + PartialEq + core::fmt::Debug>(x: N) {
        assert_eq!(x + N::ZERO, x);
        assert_eq!(x * N::ONE, x);
    }
    check(7i8);
    check(7u128);
    check(7.5f32);
}

// ============================================================================
// Concat / Any
// ============================================================================

#[test]
fn test_concat() {
    assert_eq!(concat::<i32>(&[]), Vec::<i32>::new());
    assert_eq!(concat(&[vec![1, 2], vec![], vec![3]]), vec![1, 2, 3]);
    assert_eq!(concat(&[vec!["x"]]), vec!["x"]);
}

#[test]
fn test_bool_any() {
    assert!(bool_any(&[1, 3, 4], make_any_function(is_even)));
    assert!(!bool_any(&[1, 3, 5], make_any_function(is_even)));
    assert!(!bool_any(&[] as &[i32], make_any_function(|_: &i32| true)));
}

#[test]
fn test_any_visits_every_element() {
    let mut calls = 0;
    let any = bool_any(
        &[2, 4, 6],
        make_any_function(|n: &i32| {
            calls += 1;
            is_even(n)
        }),
    );
    assert!(any);
    assert_eq!(calls, 3);
}

#[test]
fn test_any_defined() {
    assert!(bool_any(&[None, Some(1), None], any_defined));
    assert!(!bool_any(&[None::<i32>, None], any_defined));
}

// ============================================================================
// Filter / Map / FlatMap
// ============================================================================

#[test]
fn test_filter_preserves_order() {
    let input = [5, 2, 8, 1, 4];
    assert_eq!(filter(&input, make_filter_function(is_even)), vec![2, 8, 4]);
    assert_eq!(
        filter(&input, make_filter_function(|_: &i32| false)),
        Vec::<i32>::new()
    );
}

#[test]
fn test_map() {
    let input = [1, 2, 3];
    let output = map(&input, make_map_function(|n: &i32| n.to_string()));
    assert_eq!(output, vec!["1", "2", "3"]);
    assert_eq!(output.len(), input.len());

    let empty: Vec<i32> = map(&[] as &[i32], make_map_function(|n: &i32| n * 2));
    assert!(empty.is_empty());
}

#[test]
fn test_flat_map() {
    let output = flat_map(&[1, 2, 3], make_flat_map_function(|n: &i32| vec![*n; *n as usize]));
    assert_eq!(output, vec![1, 2, 2, 3, 3, 3]);

    let words = flat_map(
        &["ab", "", "c"],
        make_flat_map_function(|s: &&str| s.chars().collect::<Vec<_>>()),
    );
    assert_eq!(words, vec!['a', 'b', 'c']);
}

// ============================================================================
// Find / FindIndex
// ============================================================================

#[test]
fn test_find() {
    assert_eq!(find(&[1, 2, 3, 4], make_find_function(is_even)), Some(2));
    assert_eq!(find(&[1, 3, 5], make_find_function(is_even)), None);
    assert_eq!(find(&[] as &[i32], make_find_function(is_even)), None);
}

#[test]
fn test_find_stops_calling_predicate_after_match() {
    let mut calls = Vec::new();
    let found = find(
        &[1, 2, 3, 4],
        make_find_function(|n: &i32| {
            calls.push(*n);
            is_even(n)
        }),
    );
    assert_eq!(found, Some(2));
    assert_eq!(calls, vec![1, 2]);
}

#[test]
fn test_find_index() {
    assert_eq!(find_index(&[1, 2, 3, 4], make_find_index_function(is_even)), 1);
    assert_eq!(find_index(&[1, 3, 5], make_find_index_function(is_even)), -1);
    assert_eq!(find_index(&[8], make_find_index_function(is_even)), 0);
    assert_eq!(NOT_FOUND, -1);
}

#[test]
fn test_fallible_makers() {
    let parse = |s: &&str| s.parse::<i32>().map_err(|_| s.to_string());

    let ok = try_reduce(&["1", "2"], make_try_map_function(parse), Vec::new());
    assert_eq!(ok, Ok(vec![1, 2]));

    let err = try_reduce(&["1", "x", "y"], make_try_map_function(parse), Vec::new());
    assert_eq!(err, Err("x".to_string()));

    let positive = |n: &i32| if *n < 0 { Err(*n) } else { Ok(*n > 2) };
    assert_eq!(try_reduce(&[1, 3], make_try_any_function(positive), false), Ok(true));
    assert_eq!(try_reduce(&[1, -1], make_try_filter_function(positive), Vec::new()), Err(-1));
    assert_eq!(try_reduce(&[1, 3, -1], make_try_find_function(positive), None), Ok(Some(3)));
    assert_eq!(
        try_reduce(&[1, 3, -1], make_try_find_index_function(positive), NOT_FOUND),
        Ok(1)
    );

    let repeat = |n: &i32| Ok::<_, ()>(vec![*n, *n]);
    assert_eq!(
        try_reduce(&[1, 2], make_try_flat_map_function(repeat), Vec::new()),
        Ok(vec![1, 1, 2, 2])
    );
}
