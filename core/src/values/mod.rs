//! Dynamically tagged values and callable functions.
//!
//! The typed API in [`crate::fold`] cannot be handed a "predicate" that isn't
//! a function. These types are for hosts that receive their arguments at
//! runtime (scripts, configuration, FFI); every shape check happens when a
//! function runs and is reported as an [`ExecutionError`](crate::ExecutionError).

pub mod function;
pub mod value;

pub use function::{Closure, Context, Function, NativeFn, NativeFunction};
pub use value::Value;
