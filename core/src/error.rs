//! Errors raised while running functions over dynamic values.
//!
//! The typed fold API never fails (apart from `reduce1` on an empty slice,
//! which returns `None`). Everything that can go wrong at runtime lives here:
//! arguments of the wrong shape, callbacks that aren't callable, arithmetic
//! overflow and configured limits.

use ecow::EcoString;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    #[error("{function}: expected {expected} argument(s), got {found}")]
    ArityMismatch {
        function: EcoString,
        expected: usize,
        found: usize,
    },

    #[error("{function}: expected {expected}, got {found}")]
    TypeMismatch {
        function: EcoString,
        expected: &'static str,
        found: &'static str,
    },

    /// A predicate, transform or reducer argument is not a function.
    #[error("{function}: expected a function, got {found}")]
    NotCallable {
        function: EcoString,
        found: &'static str,
    },

    #[error("{function}: array is empty and no initial value was given")]
    EmptyArray { function: EcoString },

    #[error("{function}: integer overflow")]
    IntegerOverflow { function: EcoString },

    #[error("array of {found} elements exceeds the limit of {limit}")]
    ResourceExceeded { limit: usize, found: usize },

    #[error("unknown function `{name}`")]
    UnknownFunction { name: EcoString },
}

impl ExecutionError {
    pub(crate) fn type_mismatch(
        function: impl Into<EcoString>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        ExecutionError::TypeMismatch {
            function: function.into(),
            expected,
            found,
        }
    }
}
