//! `Array` package
//!
//! Exposes the folds from [`crate::fold`] over dynamic [`Value`]s. Every
//! function validates its arguments before visiting any element, so a
//! predicate that isn't callable fails immediately, even on a non-empty array.
use super::package::Package;
use crate::{
    Rc, Vec,
    error::ExecutionError,
    fold::{
        make_try_any_function, make_try_filter_function, make_try_find_function,
        make_try_find_index_function, make_try_flat_map_function, make_try_map_function,
        try_reduce, try_reduce1,
    },
    values::{Context, Function, Value},
};
use ecow::EcoVec;
use smallvec::{SmallVec, smallvec};

/// Name of the package and prefix of its qualified function names.
pub const PACKAGE_NAME: &str = "Array";

// ============================================================================
// Argument Validation
// ============================================================================

fn expect_array<'v>(function: &str, value: &'v Value) -> Result<&'v [Value], ExecutionError> {
    value.as_array().ok_or_else(|| {
        tracing::debug!(function, found = value.type_name(), "Rejected non-array argument");
        ExecutionError::type_mismatch(function, "Array", value.type_name())
    })
}

/// An array argument that also fits within the configured element limit.
fn input_array<'v>(
    ctx: &Context,
    function: &str,
    value: &'v Value,
) -> Result<&'v [Value], ExecutionError> {
    let array = expect_array(function, value)?;
    ctx.check_len(array.len())?;
    Ok(array)
}

fn expect_function<'v>(
    function: &str,
    value: &'v Value,
) -> Result<&'v Rc<dyn Function>, ExecutionError> {
    value.as_function().ok_or_else(|| {
        tracing::debug!(function, found = value.type_name(), "Rejected non-callable argument");
        ExecutionError::NotCallable {
            function: function.into(),
            found: value.type_name(),
        }
    })
}

/// A callback invoked with a single element.
fn expect_unary<'v>(
    function: &str,
    value: &'v Value,
) -> Result<&'v Rc<dyn Function>, ExecutionError> {
    let callback = expect_function(function, value)?;
    if callback.arity() != 1 {
        return Err(ExecutionError::ArityMismatch {
            function: callback.name().into(),
            expected: callback.arity(),
            found: 1,
        });
    }
    Ok(callback)
}

/// A reducer callback: `(element, accumulator)`, optionally followed by
/// `index` and `array`.
fn expect_reducer<'v>(
    function: &str,
    value: &'v Value,
) -> Result<&'v Rc<dyn Function>, ExecutionError> {
    let callback = expect_function(function, value)?;
    let arity = callback.arity();
    if !(2..=4).contains(&arity) {
        return Err(ExecutionError::ArityMismatch {
            function: callback.name().into(),
            expected: arity,
            found: arity.clamp(2, 4),
        });
    }
    Ok(callback)
}

/// Rejects a produced array larger than the element limit.
fn check_produced(ctx: &Context, value: &Value) -> Result<(), ExecutionError> {
    match value {
        Value::Array(items) => ctx.check_len(items.len()),
        _ => Ok(()),
    }
}

fn expect_bool(function: &str, value: &Value) -> Result<bool, ExecutionError> {
    value
        .as_bool()
        .ok_or_else(|| ExecutionError::type_mismatch(function, "Bool", value.type_name()))
}

// ============================================================================
// Callback Invocation
// ============================================================================

/// Calls a reducer callback with as many of `(element, accumulator, index, array)`
/// as its arity asks for, then checks the new accumulator against the element
/// limit.
///
/// `array` is the original `Value::Array` argument; cloning it only bumps a
/// reference count.
fn call_reducer(
    ctx: &Context,
    reducer: &Rc<dyn Function>,
    value: &Value,
    accumulator: Value,
    index: usize,
    array: &Value,
) -> Result<Value, ExecutionError> {
    let arity = reducer.arity();
    let mut args: SmallVec<[Value; 4]> = smallvec![value.clone(), accumulator];
    if arity >= 3 {
        args.push(Value::Int(index as i64));
    }
    if arity >= 4 {
        args.push(array.clone());
    }
    let result = reducer.call_unchecked(ctx, &args)?;
    check_produced(ctx, &result)?;
    Ok(result)
}

fn call_unary(
    ctx: &Context,
    callback: &Rc<dyn Function>,
    value: &Value,
) -> Result<Value, ExecutionError> {
    callback.call_unchecked(ctx, core::slice::from_ref(value))
}

fn call_predicate(
    ctx: &Context,
    function: &str,
    predicate: &Rc<dyn Function>,
    value: &Value,
) -> Result<bool, ExecutionError> {
    expect_bool(function, &call_unary(ctx, predicate, value)?)
}

// ============================================================================
// Folds
// ============================================================================

/// Left-fold with an explicit initial value
///
/// The reducer receives `(element, accumulator)` and, if it declares them,
/// `index` and the whole `array`. An array accumulator (including the initial
/// value) must stay within `RunOptions::max_elements`.
///
/// # Examples
/// - `Array.Reduce([1, 2, 3], (x, acc) => acc + x, 0)` → `6`
/// - `Array.Reduce([], (x, acc) => acc + x, 10)` → `10`
fn array_reduce(ctx: &Context, args: &[Value]) -> Result<Value, ExecutionError> {
    const NAME: &str = "Array.Reduce";
    debug_assert_eq!(args.len(), 3);
    let array = input_array(ctx, NAME, &args[0])?;
    let reducer = expect_reducer(NAME, &args[1])?;

    let result = try_reduce(
        array,
        |value, accumulator, index, _| {
            call_reducer(ctx, reducer, value, accumulator, index, &args[0])
        },
        args[2].clone(),
    )?;
    check_produced(ctx, &result)?;
    Ok(result)
}

/// Left-fold using the first element as the initial value
///
/// # Edge Cases
///
/// - Single element: returned unchanged, the reducer is not called
/// - Empty array: fails with `EmptyArray`
///
/// # Examples
/// - `Array.Reduce1([3, 9, 4], (x, acc) => if x > acc then x else acc)` → `9`
fn array_reduce1(ctx: &Context, args: &[Value]) -> Result<Value, ExecutionError> {
    const NAME: &str = "Array.Reduce1";
    debug_assert_eq!(args.len(), 2);
    let array = input_array(ctx, NAME, &args[0])?;
    let reducer = expect_reducer(NAME, &args[1])?;

    let result = try_reduce1(array, |value, accumulator, index, _| {
        call_reducer(ctx, reducer, value, accumulator, index, &args[0])
    })?
    .ok_or_else(|| ExecutionError::EmptyArray {
        function: NAME.into(),
    })?;
    check_produced(ctx, &result)?;
    Ok(result)
}

// ============================================================================
// Numeric Folds
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum NumericOp {
    Add,
    Mul,
}

impl NumericOp {
    fn identity(self, float: bool) -> Value {
        match (self, float) {
            (NumericOp::Add, false) => Value::Int(0),
            (NumericOp::Add, true) => Value::Float(0.0),
            (NumericOp::Mul, false) => Value::Int(1),
            (NumericOp::Mul, true) => Value::Float(1.0),
        }
    }

    fn checked_int(self, a: i64, b: i64) -> Option<i64> {
        match self {
            NumericOp::Add => a.checked_add(b),
            NumericOp::Mul => a.checked_mul(b),
        }
    }

    fn float(self, a: f64, b: f64) -> f64 {
        match self {
            NumericOp::Add => a + b,
            NumericOp::Mul => a * b,
        }
    }
}

/// Shared body of `Sum` and `Product`.
///
/// The accumulator starts as the identity of the first element's type, so an
/// all-float array never needs promotion.
fn numeric_fold(
    ctx: &Context,
    function: &'static str,
    op: NumericOp,
    argument: &Value,
) -> Result<Value, ExecutionError> {
    let array = input_array(ctx, function, argument)?;
    let promote = ctx.options().float_promotion;
    let starts_float = matches!(array.first(), Some(Value::Float(_)));

    try_reduce(
        array,
        |value, accumulator, _, _| match (accumulator, value) {
            (Value::Int(a), Value::Int(b)) => op
                .checked_int(a, *b)
                .map(Value::Int)
                .ok_or_else(|| ExecutionError::IntegerOverflow {
                    function: function.into(),
                }),
            (Value::Float(a), Value::Float(b)) => Ok(Value::Float(op.float(a, *b))),
            (Value::Int(a), Value::Float(b)) if promote => Ok(Value::Float(op.float(a as f64, *b))),
            (Value::Float(a), Value::Int(b)) if promote => Ok(Value::Float(op.float(a, *b as f64))),
            (accumulator, other @ (Value::Int(_) | Value::Float(_))) => Err(
                ExecutionError::type_mismatch(function, accumulator.type_name(), other.type_name()),
            ),
            (_, other) => Err(ExecutionError::type_mismatch(
                function,
                "Int or Float",
                other.type_name(),
            )),
        },
        op.identity(starts_float),
    )
}

/// Sum of an array of numbers
///
/// # Edge Cases
///
/// - Empty array: `Array.Sum([])` → `0`
/// - Mixed ints and floats are promoted to float (unless disabled in `RunOptions`)
/// - Integer overflow fails with `IntegerOverflow`
///
/// # Examples
/// - `Array.Sum([1, 2, 3])` → `6`
/// - `Array.Sum([1.5, 2])` → `3.5`
fn array_sum(ctx: &Context, args: &[Value]) -> Result<Value, ExecutionError> {
    debug_assert_eq!(args.len(), 1);
    numeric_fold(ctx, "Array.Sum", NumericOp::Add, &args[0])
}

/// Product of an array of numbers
///
/// # Examples
/// - `Array.Product([2, 3, 4])` → `24`
/// - `Array.Product([])` → `1`
fn array_product(ctx: &Context, args: &[Value]) -> Result<Value, ExecutionError> {
    debug_assert_eq!(args.len(), 1);
    numeric_fold(ctx, "Array.Product", NumericOp::Mul, &args[0])
}

// ============================================================================
// Collection Functions
// ============================================================================

/// Flatten an array of arrays
///
/// # Edge Cases
///
/// - `Array.Concat([])` → `[]`
/// - Only one level is flattened: `Array.Concat([[[1]], [2]])` → `[[1], 2]`
///
/// # Examples
/// - `Array.Concat([[1, 2], [], [3]])` → `[1, 2, 3]`
fn array_concat(ctx: &Context, args: &[Value]) -> Result<Value, ExecutionError> {
    const NAME: &str = "Array.Concat";
    debug_assert_eq!(args.len(), 1);
    let arrays = input_array(ctx, NAME, &args[0])?;

    let result = try_reduce(
        arrays,
        |value, mut accumulator: Vec<Value>, _, _| -> Result<Vec<Value>, ExecutionError> {
            accumulator.extend_from_slice(expect_array(NAME, value)?);
            ctx.check_len(accumulator.len())?;
            Ok(accumulator)
        },
        Vec::new(),
    )?;
    Ok(Value::Array(EcoVec::from(result)))
}

// ============================================================================
// Higher-Order Functions
// ============================================================================

/// Check whether any element passes a predicate
///
/// Every element is visited; the predicate must return a `Bool`.
///
/// # Examples
/// - `Array.Any([1, 3, 4], (x) => x % 2 == 0)` → `true`
/// - `Array.Any([], (x) => true)` → `false`
fn array_any(ctx: &Context, args: &[Value]) -> Result<Value, ExecutionError> {
    const NAME: &str = "Array.Any";
    debug_assert_eq!(args.len(), 2);
    let array = input_array(ctx, NAME, &args[0])?;
    let predicate = expect_unary(NAME, &args[1])?;

    let reducer = make_try_any_function(|value| call_predicate(ctx, NAME, predicate, value));
    try_reduce(array, reducer, false).map(Value::Bool)
}

/// Keep the elements that pass a predicate, in order
///
/// # Examples
/// - `Array.Filter([1, 2, 3, 4], (x) => x % 2 == 0)` → `[2, 4]`
fn array_filter(ctx: &Context, args: &[Value]) -> Result<Value, ExecutionError> {
    const NAME: &str = "Array.Filter";
    debug_assert_eq!(args.len(), 2);
    let array = input_array(ctx, NAME, &args[0])?;
    let predicate = expect_unary(NAME, &args[1])?;

    let reducer = make_try_filter_function(|value| call_predicate(ctx, NAME, predicate, value));
    let result = try_reduce(array, reducer, Vec::new())?;
    Ok(Value::Array(EcoVec::from(result)))
}

/// Map a function over an array
///
/// # Examples
/// - `Array.Map([1, 2, 3], (x) => x * 2)` → `[2, 4, 6]`
/// - `Array.Map([], (x) => x)` → `[]`
fn array_map(ctx: &Context, args: &[Value]) -> Result<Value, ExecutionError> {
    const NAME: &str = "Array.Map";
    debug_assert_eq!(args.len(), 2);
    let array = input_array(ctx, NAME, &args[0])?;
    let transform = expect_unary(NAME, &args[1])?;

    let reducer = make_try_map_function(|value| call_unary(ctx, transform, value));
    let result = try_reduce(array, reducer, Vec::with_capacity(array.len()))?;
    Ok(Value::Array(EcoVec::from(result)))
}

/// Map a function returning arrays and concatenate the results
///
/// The element limit is checked after every step, so a transform producing
/// large arrays is stopped as soon as the result outgrows it.
///
/// # Examples
/// - `Array.FlatMap([1, 2], (x) => [x, x * 10])` → `[1, 10, 2, 20]`
fn array_flat_map(ctx: &Context, args: &[Value]) -> Result<Value, ExecutionError> {
    const NAME: &str = "Array.FlatMap";
    debug_assert_eq!(args.len(), 2);
    let array = input_array(ctx, NAME, &args[0])?;
    let transform = expect_unary(NAME, &args[1])?;

    let mut flat_map = make_try_flat_map_function(|value| match call_unary(ctx, transform, value)? {
        Value::Array(items) => Ok(items),
        other => Err(ExecutionError::type_mismatch(NAME, "Array", other.type_name())),
    });
    let result = try_reduce(
        array,
        |value, accumulator, index, array| -> Result<Vec<Value>, ExecutionError> {
            let accumulator = flat_map(value, accumulator, index, array)?;
            ctx.check_len(accumulator.len())?;
            Ok(accumulator)
        },
        Vec::new(),
    )?;
    Ok(Value::Array(EcoVec::from(result)))
}

/// First element passing a predicate
///
/// The predicate is not called again once a match is found.
///
/// # Edge Cases
///
/// - No match: `null`
/// - A matching `null` element also gives `null`, so the two cases look the
///   same. Use `Array.FindIndex` (`-1` only when nothing matches) when the
///   array may contain `null`.
///
/// # Examples
/// - `Array.Find([1, 2, 3, 4], (x) => x % 2 == 0)` → `2`
/// - `Array.Find([1, 3, 5], (x) => x % 2 == 0)` → `null`
fn array_find(ctx: &Context, args: &[Value]) -> Result<Value, ExecutionError> {
    const NAME: &str = "Array.Find";
    debug_assert_eq!(args.len(), 2);
    let array = input_array(ctx, NAME, &args[0])?;
    let predicate = expect_unary(NAME, &args[1])?;

    let reducer = make_try_find_function(|value| call_predicate(ctx, NAME, predicate, value));
    Ok(try_reduce(array, reducer, None)?.unwrap_or(Value::Null))
}

/// Index of the first element passing a predicate, or `-1`
///
/// # Examples
/// - `Array.FindIndex([1, 2, 3, 4], (x) => x % 2 == 0)` → `1`
/// - `Array.FindIndex([1, 3, 5], (x) => x % 2 == 0)` → `-1`
fn array_find_index(ctx: &Context, args: &[Value]) -> Result<Value, ExecutionError> {
    const NAME: &str = "Array.FindIndex";
    debug_assert_eq!(args.len(), 2);
    let array = input_array(ctx, NAME, &args[0])?;
    let predicate = expect_unary(NAME, &args[1])?;

    let reducer =
        make_try_find_index_function(|value| call_predicate(ctx, NAME, predicate, value));
    let index = try_reduce(array, reducer, crate::fold::NOT_FOUND)?;
    Ok(Value::Int(index as i64))
}

// ============================================================================
// Package Registration
// ============================================================================

/// Registers all functions from the Array package into `package`.
pub fn register_array_functions(package: Package) -> Package {
    package
        .register("Reduce", 3, array_reduce)
        .register("Reduce1", 2, array_reduce1)
        .register("Sum", 1, array_sum)
        .register("Product", 1, array_product)
        .register("Concat", 1, array_concat)
        .register("Any", 2, array_any)
        .register("Filter", 2, array_filter)
        .register("Map", 2, array_map)
        .register("FlatMap", 2, array_flat_map)
        .register("Find", 2, array_find)
        .register("FindIndex", 2, array_find_index)
}

/// Builds the `Array` package.
pub fn array_package() -> Package {
    register_array_functions(Package::new(PACKAGE_NAME))
}

#[cfg(test)]
#[path = "array_test.rs"]
mod array_test;
