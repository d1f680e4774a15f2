// Helper macro to distinguish between patterns and expressions
#[macro_export]
macro_rules! assert_case {
    // Guard patterns - patterns with if conditions
    ($result:expr, { $pattern:pat if $guard:expr }) => {
        match $result {
            $pattern if $guard => {},
            other => panic!("Expected {} if {} but got {:?}", stringify!($pattern), stringify!($guard), other),
        }
    };

    ($result:expr, { Err($($pattern:tt)*) }) => {
        match $result {
            Err($($pattern)*) => {},
            other => panic!("Expected Err({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    // Default case - treat as expression for equality comparison
    ($result:expr, { $expected:expr }) => {
        match $result {
            Ok(actual) => {
                let expected: refold::Value = $expected.into();
                pretty_assertions::assert_eq!(expected, actual, "\n< expected / got >");
            },
            other => panic!("Expected Ok(...) but got {:?}", other),
        }
    };
}

// Generates one test function per assertion field.
#[macro_export]
macro_rules! handle_case {
    ([$($attrs:meta)*] result, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_result() {
            let result = run(Default::default());
            assert_case!(result, $expected);
        }
    };

    ([$($attrs:meta)*] error, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_error() {
            let message = match run(Default::default()) {
                Err(e) => e.to_string(),
                Ok(value) => panic!("Expected an error, but the call returned {value}"),
            };
            pretty_assertions::assert_eq!(message.as_str(), $expected);
        }
    };

    ([$($attrs:meta)*] strict_result, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_strict_result() {
            let result = run(refold::RunOptionsOverride {
                float_promotion: Some(false),
                ..Default::default()
            });
            assert_case!(result, $expected);
        }
    };

    // Generic case for unknown field names
    ([$($attrs:meta)*] $field_name:ident, $expected:tt) => {
        compile_error!(concat!("Unknown test case field: ", stringify!($field_name)));
    };
}

// Helper macro to recursively parse assertion fields
#[macro_export]
macro_rules! parse_assertions {
    // Base case: no more fields to parse
    (@parse [$($test_functions:tt)*]) => {
        $($test_functions)*
    };

    (@parse [$($test_functions:tt)*] $(#[$attr:meta])* $field_name:ident: $field_value:tt, $($rest:tt)*) => {
        parse_assertions! {@parse [
            $($test_functions)*
            handle_case! {[$($attr)*] $field_name, $field_value}
        ] $($rest)*}
    };
}

// Main macro - name first, then the qualified function and its arguments,
// then any number of assertions in any order.
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        call: $function:expr,
        args: [$($arg:expr),* $(,)?],
        $($assertion_fields:tt)*
    ) => {
        mod $name {
            #![allow(unused_imports, dead_code)]

            use super::*;
            use once_cell::sync::Lazy;

            static ENV: Lazy<refold::Environment> =
                Lazy::new(|| refold::register_stdlib(refold::Environment::new()));

            fn run(
                options: refold::RunOptionsOverride,
            ) -> Result<refold::Value, refold::ExecutionError> {
                let ctx = refold::Context::with_override(options);
                let args: Vec<refold::Value> = vec![$($arg.into()),*];
                ENV.call(&ctx, $function, &args)
            }

            // Generate all test functions
            parse_assertions! {@parse [] $($assertion_fields)*}
        }
    };
}
