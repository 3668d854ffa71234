//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch: the value set is closed, so each operand
//! combination is matched exhaustively instead of going through traits.
//! Integer arithmetic wraps at the promoted width, the way the host
//! language does at runtime.

use std::cmp::Ordering;

use lint_ir::BinaryOp;

use crate::errors::{invalid_binary_op, FoldError, FoldResult};
use crate::numeric::{promote, Numeric, Promoted};
use crate::Value;

/// Evaluate a binary operation on two known values.
///
/// String concatenation applies when either side is a string; boolean
/// logic when both sides are booleans; everything else goes through
/// numeric promotion.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> FoldResult {
    match (left, right) {
        (Value::String(_), _) | (_, Value::String(_)) => eval_string_binary(left, right, op),
        (Value::Bool(a), Value::Bool(b)) => eval_bool_binary(*a, *b, op),
        _ => match (Numeric::of(left), Numeric::of(right)) {
            (Some(a), Some(b)) if op.is_shift() => eval_shift(a, b, op)
                .ok_or_else(|| invalid_binary_op(op, left, right)),
            (Some(a), Some(b)) => eval_numeric_binary(promote(a, b), op)
                .unwrap_or_else(|| Err(invalid_binary_op(op, left, right))),
            _ => Err(invalid_binary_op(op, left, right)),
        },
    }
}

// Type-Specific Evaluation Functions

/// Only `+` is defined; the non-string side is rendered to text.
fn eval_string_binary(left: &Value, right: &Value, op: BinaryOp) -> FoldResult {
    if op != BinaryOp::Add {
        return Err(invalid_binary_op(op, left, right));
    }
    match (left.concat_text(), right.concat_text()) {
        (Some(mut text), Some(tail)) => {
            text.push_str(&tail);
            Ok(Value::String(text))
        }
        _ => Err(invalid_binary_op(op, left, right)),
    }
}

fn eval_bool_binary(a: bool, b: bool, op: BinaryOp) -> FoldResult {
    match op {
        BinaryOp::And | BinaryOp::BitAnd => Ok(Value::Bool(a && b)),
        BinaryOp::Or | BinaryOp::BitOr => Ok(Value::Bool(a || b)),
        BinaryOp::BitXor | BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        _ => Err(invalid_binary_op(op, &Value::Bool(a), &Value::Bool(b))),
    }
}

/// `None` when the operator is not defined at the promoted width.
fn eval_numeric_binary(promoted: Promoted, op: BinaryOp) -> Option<FoldResult> {
    match promoted {
        Promoted::Int(a, b) => eval_int_binary(a, b, op),
        Promoted::Long(a, b) => eval_long_binary(a, b, op),
        Promoted::Float(a, b) => eval_float_binary(a, b, op).map(|v| Ok(v.into_value())),
        Promoted::Double(a, b) => eval_double_binary(a, b, op).map(|v| Ok(v.into_value())),
    }
}

fn eval_int_binary(a: i32, b: i32, op: BinaryOp) -> Option<FoldResult> {
    let value = match op {
        BinaryOp::Add => Value::Int(a.wrapping_add(b)),
        BinaryOp::Sub => Value::Int(a.wrapping_sub(b)),
        BinaryOp::Mul => Value::Int(a.wrapping_mul(b)),
        BinaryOp::Div if b == 0 => return Some(Err(FoldError::DivisionByZero)),
        BinaryOp::Div => Value::Int(a.wrapping_div(b)),
        BinaryOp::Rem if b == 0 => return Some(Err(FoldError::RemainderByZero)),
        BinaryOp::Rem => Value::Int(a.wrapping_rem(b)),
        BinaryOp::BitAnd => Value::Int(a & b),
        BinaryOp::BitOr => Value::Int(a | b),
        BinaryOp::BitXor => Value::Int(a ^ b),
        _ => return compare(a.cmp(&b), op).map(Ok),
    };
    Some(Ok(value))
}

fn eval_long_binary(a: i64, b: i64, op: BinaryOp) -> Option<FoldResult> {
    let value = match op {
        BinaryOp::Add => Value::Long(a.wrapping_add(b)),
        BinaryOp::Sub => Value::Long(a.wrapping_sub(b)),
        BinaryOp::Mul => Value::Long(a.wrapping_mul(b)),
        BinaryOp::Div if b == 0 => return Some(Err(FoldError::DivisionByZero)),
        BinaryOp::Div => Value::Long(a.wrapping_div(b)),
        BinaryOp::Rem if b == 0 => return Some(Err(FoldError::RemainderByZero)),
        BinaryOp::Rem => Value::Long(a.wrapping_rem(b)),
        BinaryOp::BitAnd => Value::Long(a & b),
        BinaryOp::BitOr => Value::Long(a | b),
        BinaryOp::BitXor => Value::Long(a ^ b),
        _ => return compare(a.cmp(&b), op).map(Ok),
    };
    Some(Ok(value))
}

/// Result of a floating-point operation: the arithmetic result or a
/// comparison outcome.
enum FloatResult {
    Number(Numeric),
    Bool(bool),
}

impl FloatResult {
    fn into_value(self) -> Value {
        match self {
            FloatResult::Number(n) => n.into_value(),
            FloatResult::Bool(b) => Value::Bool(b),
        }
    }
}

/// IEEE-754 semantics: division by zero yields an infinity or NaN, and
/// every comparison involving NaN is false except `!=`.
fn eval_float_binary(a: f32, b: f32, op: BinaryOp) -> Option<FloatResult> {
    let number = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => a / b,
        BinaryOp::Rem => a % b,
        _ => return compare_partial(a.partial_cmp(&b), op).map(FloatResult::Bool),
    };
    Some(FloatResult::Number(Numeric::Float(number)))
}

fn eval_double_binary(a: f64, b: f64, op: BinaryOp) -> Option<FloatResult> {
    let number = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => a / b,
        BinaryOp::Rem => a % b,
        _ => return compare_partial(a.partial_cmp(&b), op).map(FloatResult::Bool),
    };
    Some(FloatResult::Number(Numeric::Double(number)))
}

fn compare(ordering: Ordering, op: BinaryOp) -> Option<Value> {
    compare_partial(Some(ordering), op).map(Value::Bool)
}

/// Comparison outcome for an ordering; `None` (unordered) compares unequal.
fn compare_partial(ordering: Option<Ordering>, op: BinaryOp) -> Option<bool> {
    let result = match op {
        BinaryOp::Eq => ordering == Some(Ordering::Equal),
        BinaryOp::NotEq => ordering != Some(Ordering::Equal),
        BinaryOp::Lt => ordering == Some(Ordering::Less),
        BinaryOp::LtEq => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
        BinaryOp::Gt => ordering == Some(Ordering::Greater),
        BinaryOp::GtEq => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
        _ => return None,
    };
    Some(result)
}

/// Shifts take their width from the left operand alone and use only the
/// low 5 (`int`) or 6 (`long`) bits of the distance.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    reason = "shift distance is masked to at most 63 and `>>>` reinterprets the bits"
)]
fn eval_shift(value: Numeric, distance: Numeric, op: BinaryOp) -> Option<Value> {
    let distance = match distance {
        Numeric::Int(n) => i64::from(n),
        Numeric::Long(n) => n,
        Numeric::Float(_) | Numeric::Double(_) => return None,
    };
    match value {
        Numeric::Int(a) => {
            let n = (distance & 0x1f) as u32;
            Some(Value::Int(match op {
                BinaryOp::Shl => a.wrapping_shl(n),
                BinaryOp::Shr => a.wrapping_shr(n),
                BinaryOp::UShr => ((a as u32) >> n) as i32,
                _ => return None,
            }))
        }
        Numeric::Long(a) => {
            let n = (distance & 0x3f) as u32;
            Some(Value::Long(match op {
                BinaryOp::Shl => a.wrapping_shl(n),
                BinaryOp::Shr => a.wrapping_shr(n),
                BinaryOp::UShr => ((a as u64) >> n) as i64,
                _ => return None,
            }))
        }
        Numeric::Float(_) | Numeric::Double(_) => None,
    }
}
