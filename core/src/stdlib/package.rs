//! Named tables of native functions.

use crate::{
    error::ExecutionError,
    values::{Context, Function, NativeFn, NativeFunction, Value},
};
use ecow::EcoString;
use hashbrown::HashMap;

/// A package such as `Array`: native functions looked up by name.
///
/// Functions are registered under their short name (`Map`) and carry their
/// qualified name (`Array.Map`) for error messages.
#[derive(Debug, Clone)]
pub struct Package {
    name: &'static str,
    functions: HashMap<&'static str, NativeFunction>,
}

impl Package {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            functions: HashMap::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// `Package.Function`
    fn qualified_name(&self, name: &str) -> EcoString {
        let mut qualified = EcoString::with_capacity(self.name.len() + 1 + name.len());
        qualified.push_str(self.name);
        qualified.push('.');
        qualified.push_str(name);
        qualified
    }

    /// Adds a native function.
    ///
    /// # Panics
    ///
    /// Panics if `name` is already registered. This indicates a bug in the
    /// package definition (two functions with the same name).
    pub fn register(mut self, name: &'static str, arity: usize, func: NativeFn) -> Self {
        let qualified = self.qualified_name(name);
        tracing::trace!(function = %qualified, arity, "Registering native function");
        let previous = self
            .functions
            .insert(name, NativeFunction::new(qualified, arity, func));
        assert!(
            previous.is_none(),
            "duplicate function `{name}` in package `{}`",
            self.name
        );
        self
    }

    pub fn get(&self, name: &str) -> Option<&NativeFunction> {
        self.functions.get(name)
    }

    /// The function as a first-class value, e.g. to pass it to another function.
    pub fn get_value(&self, name: &str) -> Option<Value> {
        self.get(name).cloned().map(Value::function)
    }

    /// Calls `name` with `args`, checking the argument count.
    pub fn call(&self, ctx: &Context, name: &str, args: &[Value]) -> Result<Value, ExecutionError> {
        let Some(function) = self.get(name) else {
            return Err(ExecutionError::UnknownFunction {
                name: self.qualified_name(name),
            });
        };
        tracing::trace!(function = function.name(), args = args.len(), "Calling native function");
        function.call(ctx, args)
    }

    /// Short names of all registered functions, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.functions.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

/// A set of packages addressed by qualified names such as `Array.Map`.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    packages: HashMap<&'static str, Package>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `package` under its own name, replacing any package with the same name.
    pub fn bind(mut self, package: Package) -> Self {
        tracing::debug!(package = package.name(), functions = package.len(), "Binding package");
        self.packages.insert(package.name(), package);
        self
    }

    pub fn package(&self, name: &str) -> Option<&Package> {
        self.packages.get(name)
    }

    /// Calls a function by qualified name (`Package.Function`).
    pub fn call(
        &self,
        ctx: &Context,
        qualified: &str,
        args: &[Value],
    ) -> Result<Value, ExecutionError> {
        let unknown = || ExecutionError::UnknownFunction {
            name: EcoString::from(qualified),
        };
        let (package, function) = qualified.split_once('.').ok_or_else(unknown)?;
        self.package(package)
            .ok_or_else(unknown)?
            .call(ctx, function, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(_ctx: &Context, args: &[Value]) -> Result<Value, ExecutionError> {
        Ok(args[0].clone())
    }

    #[test]
    fn test_register_and_call() {
        let package = Package::new("Test").register("Id", 1, identity);
        assert_eq!(package.len(), 1);
        assert_eq!(package.get("Id").unwrap().name(), "Test.Id");
        assert_eq!(package.names().collect::<Vec<_>>(), vec!["Id"]);

        let result = package
            .call(&Context::default(), "Id", &[Value::Int(7)])
            .unwrap();
        assert_eq!(result, Value::Int(7));
    }

    #[test]
    fn test_call_checks_arity() {
        let package = Package::new("Test").register("Id", 1, identity);
        let err = package.call(&Context::default(), "Id", &[]).unwrap_err();
        assert_eq!(
            err,
            ExecutionError::ArityMismatch {
                function: "Test.Id".into(),
                expected: 1,
                found: 0,
            }
        );
    }

    #[test]
    fn test_unknown_function() {
        let env = Environment::new().bind(Package::new("Test").register("Id", 1, identity));
        let ctx = Context::default();

        for name in ["Test.Missing", "Other.Id", "NoDot"] {
            let err = env.call(&ctx, name, &[Value::Null]).unwrap_err();
            assert_eq!(err, ExecutionError::UnknownFunction { name: name.into() });
        }
        assert_eq!(env.call(&ctx, "Test.Id", &[Value::Null]).unwrap(), Value::Null);
    }

    #[test]
    #[should_panic(expected = "duplicate function `Id`")]
    fn test_duplicate_registration_panics() {
        let _ = Package::new("Test")
            .register("Id", 1, identity)
            .register("Id", 1, identity);
    }
}
