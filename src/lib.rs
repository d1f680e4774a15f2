//! Refold - list operations expressed as a single left-fold
//!
//! # Overview
//!
//! Every operation in this crate is one call to [`reduce`](fold::reduce): the
//! `make_*_function` helpers turn a predicate or transform into a reducer, and
//! the derived traversals (`map`, `filter`, `find`, ...) run that reducer from
//! the right initial accumulator.
//!
//! # Quick Start
//!
//! ```
//! use refold::fold::{find, find_index, make_find_function, make_find_index_function, reduce};
//!
//! let is_even = |n: &i32| n % 2 == 0;
//!
//! assert_eq!(reduce(&[1, 2, 3], |value, acc, _, _| acc + value, 0), 6);
//! assert_eq!(find(&[1, 2, 3, 4], make_find_function(is_even)), Some(2));
//! assert_eq!(find_index(&[1, 3, 5], make_find_index_function(is_even)), -1);
//! ```
//!
//! # API Tiers
//!
//! 1. **Typed API** ([`fold`], [`monoid`]): generic functions over slices and
//!    closures. Cannot fail.
//! 2. **Dynamic API** ([`values`], [`stdlib`]): the `Array` package over
//!    runtime [`Value`]s, for hosts whose arguments arrive at runtime. Shape
//!    errors are reported as [`ExecutionError`].
//!
//! ```
//! use refold::{Context, Environment, Value, register_stdlib};
//! use refold::values::Closure;
//!
//! let env = register_stdlib(Environment::new());
//! let is_even = Value::function(Closure::new("is_even", 1, |_ctx, args| {
//!     Ok(Value::Bool(args[0].as_int().is_some_and(|n| n % 2 == 0)))
//! }));
//!
//! let ctx = Context::default();
//! let evens = env
//!     .call(&ctx, "Array.Filter", &[Value::from(vec![1, 2, 3, 4]), is_even])
//!     .unwrap();
//! assert_eq!(evens, Value::from(vec![2, 4]));
//!
//! // A predicate that isn't a function is rejected before any element is visited.
//! let err = env
//!     .call(&ctx, "Array.Find", &[Value::from(vec![1]), Value::Int(0)])
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "Array.Find: expected a function, got Int");
//! ```

pub use refold_core::{error, fold, monoid, options, stdlib, values};

pub use refold_core::error::ExecutionError;
pub use refold_core::options::{RunOptions, RunOptionsOverride};
pub use refold_core::stdlib::{Environment, Package, register_stdlib};
pub use refold_core::values::{Context, Function, Value};
