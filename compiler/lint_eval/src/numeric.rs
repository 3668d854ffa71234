//! Binary numeric promotion.
//!
//! Every numeric operand is first widened to one of the four computation
//! widths (`byte`, `short` and `char` compute as `int`). A pair of operands
//! is then promoted to the wider of the two: any `double` makes the pair
//! `double`, else any `float` makes it `float`, else any `long` makes it
//! `long`, else `int`.

use lint_ir::PrimitiveType;

use crate::Value;

/// A numeric operand at its computation width.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Numeric {
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
}

/// Two operands promoted to a common width.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Promoted {
    Int(i32, i32),
    Long(i64, i64),
    Float(f32, f32),
    Double(f64, f64),
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    reason = "numeric conversions follow the host language's wrapping and rounding rules"
)]
impl Numeric {
    pub(crate) fn of(value: &Value) -> Option<Numeric> {
        match value {
            Value::Byte(n) => Some(Numeric::Int(i32::from(*n))),
            Value::Short(n) => Some(Numeric::Int(i32::from(*n))),
            Value::Char(c) => Some(Numeric::Int(i32::from(*c))),
            Value::Int(n) => Some(Numeric::Int(*n)),
            Value::Long(n) => Some(Numeric::Long(*n)),
            Value::Float(f) => Some(Numeric::Float(*f)),
            Value::Double(d) => Some(Numeric::Double(*d)),
            Value::Null | Value::Bool(_) | Value::String(_) | Value::Array(_) | Value::Unknown => {
                None
            }
        }
    }

    pub(crate) fn into_value(self) -> Value {
        match self {
            Numeric::Int(n) => Value::Int(n),
            Numeric::Long(n) => Value::Long(n),
            Numeric::Float(f) => Value::Float(f),
            Numeric::Double(d) => Value::Double(d),
        }
    }

    /// Float-to-integer conversion saturates and maps NaN to zero, which is
    /// what Rust's `as` does too.
    pub(crate) fn to_i32(self) -> i32 {
        match self {
            Numeric::Int(n) => n,
            Numeric::Long(n) => n as i32,
            Numeric::Float(f) => f as i32,
            Numeric::Double(d) => d as i32,
        }
    }

    pub(crate) fn to_i64(self) -> i64 {
        match self {
            Numeric::Int(n) => i64::from(n),
            Numeric::Long(n) => n,
            Numeric::Float(f) => f as i64,
            Numeric::Double(d) => d as i64,
        }
    }

    pub(crate) fn to_f32(self) -> f32 {
        match self {
            Numeric::Int(n) => n as f32,
            Numeric::Long(n) => n as f32,
            Numeric::Float(f) => f,
            Numeric::Double(d) => d as f32,
        }
    }

    pub(crate) fn to_f64(self) -> f64 {
        match self {
            Numeric::Int(n) => f64::from(n),
            Numeric::Long(n) => n as f64,
            Numeric::Float(f) => f64::from(f),
            Numeric::Double(d) => d,
        }
    }

    /// Convert to `target`, truncating integers and rounding floats the way
    /// a cast does. Narrow integer targets go through `int` first. `None` for
    /// `boolean`.
    pub(crate) fn convert(self, target: PrimitiveType) -> Option<Value> {
        Some(match target {
            PrimitiveType::Boolean => return None,
            PrimitiveType::Byte => Value::Byte(self.to_i32() as i8),
            PrimitiveType::Short => Value::Short(self.to_i32() as i16),
            PrimitiveType::Char => Value::Char(self.to_i32() as u16),
            PrimitiveType::Int => Value::Int(self.to_i32()),
            PrimitiveType::Long => Value::Long(self.to_i64()),
            PrimitiveType::Float => Value::Float(self.to_f32()),
            PrimitiveType::Double => Value::Double(self.to_f64()),
        })
    }
}

/// Promote a pair of operands to their common computation width.
pub(crate) fn promote(left: Numeric, right: Numeric) -> Promoted {
    match (left, right) {
        (Numeric::Double(_), _) | (_, Numeric::Double(_)) => {
            Promoted::Double(left.to_f64(), right.to_f64())
        }
        (Numeric::Float(_), _) | (_, Numeric::Float(_)) => {
            Promoted::Float(left.to_f32(), right.to_f32())
        }
        (Numeric::Long(_), _) | (_, Numeric::Long(_)) => {
            Promoted::Long(left.to_i64(), right.to_i64())
        }
        (Numeric::Int(a), Numeric::Int(b)) => Promoted::Int(a, b),
    }
}

/// The narrowest type both `a` and `b` widen to without a cast.
///
/// Used to pick an element type for array initializers whose declared
/// element type is unknown.
pub(crate) fn common_type(a: PrimitiveType, b: PrimitiveType) -> Option<PrimitiveType> {
    use PrimitiveType::{Boolean, Byte, Double, Float, Int, Long, Short};

    if a == b {
        return Some(a);
    }
    Some(match (a, b) {
        (Boolean, _) | (_, Boolean) => return None,
        (Double, _) | (_, Double) => Double,
        (Float, _) | (_, Float) => Float,
        (Long, _) | (_, Long) => Long,
        (Byte, Short) | (Short, Byte) => Short,
        _ => Int,
    })
}

#[cfg(test)]
mod tests;
