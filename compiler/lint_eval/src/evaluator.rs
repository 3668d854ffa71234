//! The constant evaluator.
//!
//! [`ConstantEvaluator`] is an immutable handle (a tree borrow plus an
//! [`EvalConfig`]); it can be shared freely between threads. Each call
//! creates a fresh [`Folder`] session holding the only mutable state: the
//! recursion depth, the fields currently being folded, and the field and
//! local values already folded during that call. The session is dropped
//! when the call returns, so no answer depends on an earlier call.

mod array;
mod reference;

use lint_ir::{BinaryOp, Shape, SyntaxTree, UnaryOp};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

use crate::cast::cast_value;
use crate::errors::{FoldError, FoldResult};
use crate::last_assignment;
use crate::operators::evaluate_binary;
use crate::stack::with_nesting_stack;
use crate::unary_operators::{evaluate_step, evaluate_unary};
use crate::{EvalConfig, Value};

/// Folds expressions of one tree under one configuration.
pub struct ConstantEvaluator<'t, T: SyntaxTree + ?Sized> {
    tree: &'t T,
    config: EvalConfig,
}

impl<T: SyntaxTree + ?Sized> Clone for ConstantEvaluator<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: SyntaxTree + ?Sized> Copy for ConstantEvaluator<'_, T> {}

impl<'t, T: SyntaxTree + ?Sized> ConstantEvaluator<'t, T> {
    pub fn new(tree: &'t T, config: EvalConfig) -> Self {
        ConstantEvaluator { tree, config }
    }

    #[inline]
    pub fn tree(&self) -> &'t T {
        self.tree
    }

    #[inline]
    pub fn config(&self) -> EvalConfig {
        self.config
    }

    /// Fold `node` to a value, or [`Value::Unknown`] when it is not
    /// statically determinable.
    #[tracing::instrument(level = "trace", skip_all, fields(node = ?node))]
    pub fn evaluate(&self, node: T::Node) -> Value {
        Folder::new(self.tree, self.config).fold(node)
    }

    /// The folded value if it is a string.
    pub fn evaluate_string(&self, node: T::Node) -> Option<String> {
        match self.evaluate(node) {
            Value::String(text) => Some(text),
            _ => None,
        }
    }

    /// The length of the array `node` folds to.
    ///
    /// Arrays created with `new T[n]` report at most
    /// [`max_new_array_length`](crate::EvalLimits::max_new_array_length).
    pub fn array_length(&self, node: T::Node) -> Option<usize> {
        match self.evaluate(node) {
            Value::Array(items) => Some(items.len()),
            _ => None,
        }
    }

    /// See [`crate::find_last_assignment`].
    pub fn find_last_assignment(&self, decl: T::Decl, use_site: T::Node) -> Option<T::Node> {
        last_assignment::find_last_assignment(self.tree, decl, use_site)
    }
}

/// One evaluation session.
pub(crate) struct Folder<'t, T: SyntaxTree + ?Sized> {
    pub(crate) tree: &'t T,
    pub(crate) config: EvalConfig,
    depth: u32,
    /// Fields whose initializer is being folded further up the stack.
    in_progress: FxHashSet<T::Decl>,
    /// Field initializers already folded in this session.
    field_values: FxHashMap<T::Decl, Value>,
    /// Values of locals already resolved at a use site in this session.
    /// A chain `x = x + 1; x = x + 1; ...` re-reads every earlier use once
    /// per later walk.
    local_values: FxHashMap<(T::Decl, T::Node), Value>,
}

impl<'t, T: SyntaxTree + ?Sized> Folder<'t, T> {
    pub(crate) fn new(tree: &'t T, config: EvalConfig) -> Self {
        Folder {
            tree,
            config,
            depth: 0,
            in_progress: FxHashSet::default(),
            field_values: FxHashMap::default(),
            local_values: FxHashMap::default(),
        }
    }

    /// Fold one node, failing closed once the depth limit is reached.
    pub(crate) fn fold(&mut self, node: T::Node) -> Value {
        let limit = self.config.limits.max_depth;
        if self.depth >= limit {
            debug!(error = %FoldError::DepthExceeded { limit }, ?node, "fold abandoned");
            return Value::Unknown;
        }
        self.depth += 1;
        let value = with_nesting_stack(|| self.fold_node(node));
        self.depth -= 1;
        value
    }

    fn fold_node(&mut self, node: T::Node) -> Value {
        let tree = self.tree;
        match tree.shape(node) {
            Shape::Literal(lit) => Value::from(lit),
            Shape::Parenthesized(inner) => self.fold(inner),
            Shape::Unary { op, operand } => self.fold_unary(op, operand),
            Shape::Binary { op, left, right } => self.fold_chain(op, &[left, right]),
            Shape::Polyadic { op, operands } => self.fold_chain(op, operands),
            Shape::Conditional {
                cond,
                then_expr,
                else_expr,
            } => match self.fold(cond) {
                Value::Bool(true) => self.fold(then_expr),
                Value::Bool(false) => self.fold(else_expr),
                _ => Value::Unknown,
            },
            Shape::Cast { ty, operand } => cast_value(ty, self.fold(operand)),
            Shape::Reference {
                decl: Some(decl), ..
            }
            | Shape::Select {
                decl: Some(decl), ..
            } => self.fold_reference(node, decl),
            Shape::Select {
                receiver,
                name: "length",
                decl: None,
            } => self.fold_length(receiver),
            Shape::Index { receiver, index } => self.fold_index(receiver, index),
            Shape::ArrayLiteral { element, elements } => self.fold_array_literal(element, elements),
            Shape::NewArray { element, length } => self.fold_new_array(element, length),
            // The value of `a = b` is `b`.
            Shape::Assign {
                op: None, value, ..
            } => self.fold(value),
            _ => Value::Unknown,
        }
    }

    fn fold_unary(&mut self, op: UnaryOp, operand: T::Node) -> Value {
        let value = self.fold(operand);
        if value.is_unknown() {
            return Value::Unknown;
        }
        let result = match op {
            UnaryOp::PreInc | UnaryOp::PreDec => evaluate_step(&value, op),
            // The expression value is the one read before the write-back.
            UnaryOp::PostInc | UnaryOp::PostDec => evaluate_step(&value, op).map(|_| value),
            UnaryOp::Neg | UnaryOp::Plus | UnaryOp::Not | UnaryOp::BitNot => {
                evaluate_unary(&value, op)
            }
        };
        settle(result)
    }

    /// Fold a left-associative operator chain.
    ///
    /// `&&` and `||` stop at the first operand that decides the result.
    fn fold_chain(&mut self, op: BinaryOp, operands: &[T::Node]) -> Value {
        let Some((&first, rest)) = operands.split_first() else {
            return Value::Unknown;
        };
        let mut result = self.fold(first);
        for &operand in rest {
            if decides(op, &result) {
                break;
            }
            if result.is_unknown() && !self.config.allow_partial {
                return Value::Unknown;
            }
            let right = self.fold(operand);
            result = self.combine(op, result, right);
        }
        result
    }

    /// Apply `op`, substituting the known operand for an unknown one when
    /// partial evaluation is allowed.
    fn combine(&self, op: BinaryOp, left: Value, right: Value) -> Value {
        match (left.is_unknown(), right.is_unknown()) {
            (false, false) => settle(evaluate_binary(&left, &right, op)),
            (true, false) if self.config.allow_partial => right,
            (false, true) if self.config.allow_partial => left,
            _ => Value::Unknown,
        }
    }
}

/// Returns `true` if `value` short-circuits the rest of an `op` chain.
fn decides(op: BinaryOp, value: &Value) -> bool {
    matches!(
        (op, value),
        (BinaryOp::And, Value::Bool(false)) | (BinaryOp::Or, Value::Bool(true))
    )
}

/// Degrade an operator failure to [`Value::Unknown`].
pub(crate) fn settle(result: FoldResult) -> Value {
    result.unwrap_or_else(|error| {
        trace!(%error, "operator did not fold");
        Value::Unknown
    })
}
