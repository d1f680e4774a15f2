//! Runtime options for the dynamic function layer.
//!
//! `RunOptions` holds the effective settings; `RunOptionsOverride` carries
//! only the fields a caller wants to change and is merged on top with
//! [`RunOptions::override_with`].

/// Default cap on the number of elements an `Array` function will accept or produce.
pub const DEFAULT_MAX_ELEMENTS: usize = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Largest array (input or output) a package function may handle.
    pub max_elements: usize,

    /// Allow `Sum`/`Product` over arrays mixing `Int` and `Float`; the result
    /// is a `Float`. When disabled, mixing is a type mismatch.
    pub float_promotion: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            max_elements: DEFAULT_MAX_ELEMENTS,
            float_promotion: true,
        }
    }
}

impl RunOptions {
    /// Replace every field that is set in `options_override`.
    pub fn override_with(&mut self, options_override: &RunOptionsOverride) {
        if let Some(max_elements) = options_override.max_elements {
            self.max_elements = max_elements;
        }
        if let Some(float_promotion) = options_override.float_promotion {
            self.float_promotion = float_promotion;
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptionsOverride {
    pub max_elements: Option<usize>,
    pub float_promotion: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_only_touches_set_fields() {
        let mut options = RunOptions::default();
        options.override_with(&RunOptionsOverride {
            max_elements: Some(10),
            ..Default::default()
        });
        assert_eq!(options.max_elements, 10);
        assert!(options.float_promotion);

        options.override_with(&RunOptionsOverride {
            float_promotion: Some(false),
            ..Default::default()
        });
        assert_eq!(options.max_elements, 10);
        assert!(!options.float_promotion);
    }

    #[test]
    fn test_empty_override_is_noop() {
        let mut options = RunOptions::default();
        options.override_with(&RunOptionsOverride::default());
        assert_eq!(options, RunOptions::default());
    }
}
