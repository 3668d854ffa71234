//! Unary operator implementations for the evaluator.
//!
//! Increment and decrement go through [`evaluate_step`] once the evaluator
//! has resolved the variable they write back to.

use lint_ir::{TypeRef, UnaryOp};

use crate::cast::cast_value;
use crate::errors::{invalid_unary_op, FoldResult};
use crate::numeric::Numeric;
use crate::operators::evaluate_binary;
use crate::Value;

/// Evaluate a unary operation on a known value.
///
/// `+`, `-` and `~` promote `byte`, `short` and `char` to `int`.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> FoldResult {
    match (op, value) {
        (UnaryOp::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        (UnaryOp::Plus, _) => Numeric::of(value)
            .map(Numeric::into_value)
            .ok_or_else(|| invalid_unary_op(op, value)),
        (UnaryOp::Neg, _) => match Numeric::of(value) {
            Some(Numeric::Int(n)) => Ok(Value::Int(n.wrapping_neg())),
            Some(Numeric::Long(n)) => Ok(Value::Long(n.wrapping_neg())),
            Some(Numeric::Float(f)) => Ok(Value::Float(-f)),
            Some(Numeric::Double(d)) => Ok(Value::Double(-d)),
            None => Err(invalid_unary_op(op, value)),
        },
        (UnaryOp::BitNot, _) => match Numeric::of(value) {
            Some(Numeric::Int(n)) => Ok(Value::Int(!n)),
            Some(Numeric::Long(n)) => Ok(Value::Long(!n)),
            _ => Err(invalid_unary_op(op, value)),
        },
        _ => Err(invalid_unary_op(op, value)),
    }
}

/// The value an increment or decrement stores: the operand plus or minus
/// one, converted back to the operand's own type (`byte b = 127; b++`
/// stores `-128`).
pub fn evaluate_step(value: &Value, op: UnaryOp) -> FoldResult {
    let (Some(step), Some(ty)) = (
        op.step_op(),
        value.primitive_type().filter(|ty| ty.is_numeric()),
    ) else {
        return Err(invalid_unary_op(op, value));
    };
    let stepped = evaluate_binary(value, &Value::Int(1), step)?;
    Ok(cast_value(TypeRef::Primitive(ty), stepped))
}
