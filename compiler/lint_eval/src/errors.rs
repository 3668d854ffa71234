//! Fold errors.
//!
//! Operators report why they could not produce a value; the evaluator logs
//! the error and degrades to [`Value::Unknown`](crate::Value::Unknown).
//! Nothing here ever reaches a public caller.

use lint_ir::{BinaryOp, UnaryOp};

use crate::Value;

/// Why an operator could not fold its operands.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FoldError {
    #[error("integer division by zero")]
    DivisionByZero,
    #[error("integer remainder by zero")]
    RemainderByZero,
    #[error("operator `{op}` is not defined for {left} and {right}")]
    InvalidBinaryOp {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },
    #[error("operator `{op}` is not defined for {operand}")]
    InvalidUnaryOp {
        op: &'static str,
        operand: &'static str,
    },
    #[error("expression nesting exceeds {limit} levels")]
    DepthExceeded { limit: u32 },
}

/// Result of applying one operator.
pub type FoldResult = Result<Value, FoldError>;

// Error constructors

#[cold]
pub fn invalid_binary_op(op: BinaryOp, left: &Value, right: &Value) -> FoldError {
    FoldError::InvalidBinaryOp {
        op: op.as_symbol(),
        left: left.type_name(),
        right: right.type_name(),
    }
}

#[cold]
pub fn invalid_unary_op(op: UnaryOp, operand: &Value) -> FoldError {
    FoldError::InvalidUnaryOp {
        op: op.as_symbol(),
        operand: operand.type_name(),
    }
}
