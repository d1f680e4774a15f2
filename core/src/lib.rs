#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! Left-fold primitives and the list operations derived from them.
//!
//! The crate is organised bottom-up:
//!
//! - [`fold`]: `reduce`, the reducer "maker" functions and the derived
//!   traversals (`map`, `filter`, `flat_map`, `find`, ...).
//! - [`monoid`]: identity + associative combine, with law checks.
//! - [`values`]: dynamically tagged values and callable functions.
//! - [`stdlib`]: the `Array` package, exposing the folds over [`values::Value`].
//!
//! ## Features
//!
//! Without features the crate is `no_std` and only needs `alloc`. The `std`
//! feature forwards to `ecow`, `thiserror` and `tracing`. Both configurations
//! must build:
//!
//! ```text
//! cargo build -p refold-core
//! cargo build -p refold-core --features std
//! ```

// This works on std and no_std and is harmless.
extern crate alloc;

// Exports some symbols publicly so that downstream crates and tests can refer to them
// without caring whether the crate was built with `std`.
#[doc(hidden)]
pub mod shim {
    pub use alloc::{boxed::Box, fmt, format, rc::Rc, string::String, string::ToString, vec, vec::Vec};
}

// Re-export (crate only) for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod error;
pub mod fold;
pub mod monoid;
pub mod options;
pub mod stdlib;
pub mod values;

pub use error::ExecutionError;
pub use options::{RunOptions, RunOptionsOverride};
