//! Callable values.
//!
//! [`Function`] is implemented by every callable [`Value`]: native function
//! pointers registered in a package ([`NativeFunction`]) and host closures
//! ([`Closure`]). Callers go through [`Function::call`], which checks the
//! argument count before dispatching.

use super::value::Value;
use crate::error::ExecutionError;
use crate::options::{RunOptions, RunOptionsOverride};
use core::fmt;
use ecow::EcoString;

// ============================================================================
// Context
// ============================================================================

/// Execution context passed to every function call.
///
/// Higher-order functions forward the same context to the callbacks they
/// invoke, so limits apply to the whole call tree.
#[derive(Debug, Clone, Default)]
pub struct Context {
    options: RunOptions,
}

impl Context {
    pub fn new(options: RunOptions) -> Self {
        Self { options }
    }

    /// Default options with `options_override` applied on top.
    pub fn with_override(options_override: RunOptionsOverride) -> Self {
        let mut options = RunOptions::default();
        options.override_with(&options_override);
        Self { options }
    }

    #[inline]
    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    /// Fails with `ResourceExceeded` when `len` is over the configured element limit.
    pub fn check_len(&self, len: usize) -> Result<(), ExecutionError> {
        let limit = self.options.max_elements;
        if len > limit {
            tracing::debug!(len, limit, "Array exceeds element limit");
            return Err(ExecutionError::ResourceExceeded { limit, found: len });
        }
        Ok(())
    }
}

// ============================================================================
// Function Trait
// ============================================================================

pub trait Function {
    /// Name used in error messages (e.g. `Array.Map`, `is_even`).
    fn name(&self) -> &str;

    /// Number of arguments the function expects.
    fn arity(&self) -> usize;

    /// Call the function without checking the argument count.
    ///
    /// Implementations may assume `args.len() == self.arity()`; callers that
    /// cannot guarantee that should use [`Function::call`].
    fn call_unchecked(&self, ctx: &Context, args: &[Value]) -> Result<Value, ExecutionError>;

    /// Call the function, failing with `ArityMismatch` on a wrong argument count.
    fn call(&self, ctx: &Context, args: &[Value]) -> Result<Value, ExecutionError> {
        if args.len() != self.arity() {
            return Err(ExecutionError::ArityMismatch {
                function: EcoString::from(self.name()),
                expected: self.arity(),
                found: args.len(),
            });
        }
        self.call_unchecked(ctx, args)
    }
}

/// Signature of native functions registered in a package.
///
/// # Example
///
/// ```
/// use refold_core::{ExecutionError, values::{Context, Value}};
///
/// fn array_len(_ctx: &Context, args: &[Value]) -> Result<Value, ExecutionError> {
///     debug_assert_eq!(args.len(), 1);
///     let len = args[0].as_array().map_or(0, <[Value]>::len);
///     Ok(Value::Int(len as i64))
/// }
/// ```
pub type NativeFn = fn(ctx: &Context, args: &[Value]) -> Result<Value, ExecutionError>;

/// Wrapper for native Rust function pointers.
///
/// ```
/// use refold_core::{ExecutionError, values::{Context, Function, NativeFunction, Value}};
///
/// fn negate(_ctx: &Context, args: &[Value]) -> Result<Value, ExecutionError> {
///     Ok(Value::Bool(args[0].as_bool() == Some(false)))
/// }
///
/// let not = NativeFunction::new("not", 1, negate);
/// assert_eq!(not.call(&Context::default(), &[Value::Bool(true)]).unwrap(), Value::Bool(false));
/// assert!(not.call(&Context::default(), &[]).is_err());
/// ```
#[derive(Clone)]
pub struct NativeFunction {
    name: EcoString,
    arity: usize,
    func: NativeFn,
}

impl NativeFunction {
    pub fn new(name: impl Into<EcoString>, arity: usize, func: NativeFn) -> Self {
        Self {
            name: name.into(),
            arity,
            func,
        }
    }
}

impl Function for NativeFunction {
    fn name(&self) -> &str {
        &self.name
    }

    fn arity(&self) -> usize {
        self.arity
    }

    fn call_unchecked(&self, ctx: &Context, args: &[Value]) -> Result<Value, ExecutionError> {
        (self.func)(ctx, args)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// A host closure exposed as a callable value.
///
/// ```
/// use refold_core::values::{Closure, Context, Function, Value};
///
/// let is_even = Closure::new("is_even", 1, |_ctx, args| {
///     Ok(Value::Bool(args[0].as_int().is_some_and(|n| n % 2 == 0)))
/// });
/// let result = is_even.call(&Context::default(), &[Value::Int(4)]).unwrap();
/// assert_eq!(result, Value::Bool(true));
/// ```
pub struct Closure<F> {
    name: EcoString,
    arity: usize,
    func: F,
}

impl<F> Closure<F> {
    pub fn new(name: impl Into<EcoString>, arity: usize, func: F) -> Self
    where
        F: Fn(&Context, &[Value]) -> Result<Value, ExecutionError>,
    {
        Self {
            name: name.into(),
            arity,
            func,
        }
    }
}

impl<F> Function for Closure<F>
where
    F: Fn(&Context, &[Value]) -> Result<Value, ExecutionError>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn arity(&self) -> usize {
        self.arity
    }

    fn call_unchecked(&self, ctx: &Context, args: &[Value]) -> Result<Value, ExecutionError> {
        (self.func)(ctx, args)
    }
}
