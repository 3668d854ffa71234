//! Per-call evaluation configuration.
//!
//! An [`EvalConfig`] is a plain `Copy` value handed to every entry point.
//! Two concurrent callers with different settings never observe each
//! other's configuration.

/// Caps that bound the work of a single evaluation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EvalLimits {
    /// Elements folded from an array initializer list; the rest are dropped.
    pub max_array_elements: usize,
    /// Length a `new T[n]` array is clamped to.
    pub max_new_array_length: usize,
    /// Nested folds (including reference chasing) before giving up.
    pub max_depth: u32,
}

impl EvalLimits {
    pub const DEFAULT: EvalLimits = EvalLimits {
        max_array_elements: 20,
        max_new_array_length: 30,
        max_depth: 256,
    };
}

impl Default for EvalLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Evaluation settings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EvalConfig {
    /// Tolerate unresolved sub-terms: a binary operator with one unknown
    /// operand yields the other operand, and array initializers skip
    /// unknown elements.
    pub allow_partial: bool,
    /// Trust the declared initializer of a non-final field.
    pub allow_field_initializers: bool,
    pub limits: EvalLimits,
}

impl EvalConfig {
    /// Strict evaluation: every sub-term must fold.
    pub const STRICT: EvalConfig = EvalConfig {
        allow_partial: false,
        allow_field_initializers: false,
        limits: EvalLimits::DEFAULT,
    };

    pub const fn new() -> Self {
        Self::STRICT
    }

    #[must_use]
    pub const fn with_partial(self, allow_partial: bool) -> Self {
        EvalConfig {
            allow_partial,
            ..self
        }
    }

    #[must_use]
    pub const fn with_field_initializers(self, allow_field_initializers: bool) -> Self {
        EvalConfig {
            allow_field_initializers,
            ..self
        }
    }

    #[must_use]
    pub const fn with_limits(self, limits: EvalLimits) -> Self {
        EvalConfig { limits, ..self }
    }
}
