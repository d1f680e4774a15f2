//! Standard library packages for dynamic values.
//!
//! Currently this is the `Array` package, which exposes `reduce` and the
//! operations derived from it (`Map`, `Filter`, `Find`, ...) as native
//! functions over [`Value`](crate::values::Value)s.

pub mod array;
pub mod package;

pub use array::{array_package, register_array_functions};
pub use package::{Environment, Package};

/// Environment with all standard library packages bound.
pub fn register_stdlib(env: Environment) -> Environment {
    env.bind(array_package())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::{Context, Value};

    #[test]
    fn test_register_stdlib() {
        let env = register_stdlib(Environment::new());
        let array = env.package("Array").expect("Array package should be bound");
        assert_eq!(array.len(), 11);

        let result = env
            .call(
                &Context::default(),
                "Array.Sum",
                &[Value::from(vec![1, 2, 3])],
            )
            .unwrap();
        assert_eq!(result, Value::Int(6));
    }
}
