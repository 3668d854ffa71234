//! Lint Eval - constant folding and reaching-value analysis.
//!
//! Everything here is written once against the [`SyntaxTree`] adapter:
//! - [`evaluate`]: fold an expression to a [`Value`]
//! - [`find_last_assignment`]: the definition of a variable that reaches a use
//! - [`is_narrowed`]: whether an enclosing condition guards a declaration
//!
//! # Failure model
//!
//! Public operations never fail. Anything that cannot be determined
//! statically, including operator errors such as integer division by a
//! constant zero, folds to [`Value::Unknown`]. Operators report the cause
//! as a [`FoldError`] internally; it is logged at `trace` level.
//!
//! # Concurrency
//!
//! Configuration is an immutable [`EvalConfig`] passed per call and all
//! per-call state lives in a session dropped when the call returns.
//! Evaluating the same tree from many threads is safe when the tree
//! backend is `Sync`.

mod cast;
mod config;
mod errors;
mod evaluator;
mod last_assignment;
mod narrowing;
mod numeric;
mod operators;
mod stack;
mod unary_operators;
mod value;

pub use cast::cast_value;
pub use config::{EvalConfig, EvalLimits};
pub use errors::{FoldError, FoldResult};
pub use evaluator::ConstantEvaluator;
pub use last_assignment::find_last_assignment;
pub use narrowing::is_narrowed;
pub use operators::evaluate_binary;
pub use unary_operators::{evaluate_step, evaluate_unary};
pub use value::Value;

use lint_ir::SyntaxTree;

/// Fold `node` under `config`.
pub fn evaluate<T: SyntaxTree + ?Sized>(tree: &T, node: T::Node, config: EvalConfig) -> Value {
    ConstantEvaluator::new(tree, config).evaluate(node)
}

/// Fold `node` and return the result if it is a string.
pub fn evaluate_string<T: SyntaxTree + ?Sized>(
    tree: &T,
    node: T::Node,
    config: EvalConfig,
) -> Option<String> {
    ConstantEvaluator::new(tree, config).evaluate_string(node)
}

/// Fold `node` and return the length of the resulting array.
pub fn array_length<T: SyntaxTree + ?Sized>(
    tree: &T,
    node: T::Node,
    config: EvalConfig,
) -> Option<usize> {
    ConstantEvaluator::new(tree, config).array_length(node)
}

#[cfg(test)]
mod tests;
