//! Primitive casts.

use lint_ir::TypeRef;

use crate::numeric::Numeric;
use crate::Value;

/// Apply a cast to `ty`.
///
/// Numeric values are converted to the target width (truncating toward
/// zero, wrapping integers). A numeric value cast to `boolean` does not
/// type-check and folds to [`Value::Unknown`]. Every other value passes
/// through unchanged, including casts to reference types.
pub fn cast_value(ty: TypeRef, value: Value) -> Value {
    let Some(target) = ty.primitive() else {
        return value;
    };
    match Numeric::of(&value) {
        Some(number) => number.convert(target).unwrap_or(Value::Unknown),
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn numeric_casts_truncate() {
        assert_eq!(cast_value(TypeRef::INT, Value::Double(2.9)), Value::Int(2));
        assert_eq!(cast_value(TypeRef::BYTE, Value::Int(200)), Value::Byte(-56));
        assert_eq!(cast_value(TypeRef::LONG, Value::Int(-1)), Value::Long(-1));
        assert_eq!(cast_value(TypeRef::FLOAT, Value::Int(3)), Value::Float(3.0));
        assert_eq!(cast_value(TypeRef::CHAR, Value::Int(65)), Value::Char(65));
        assert_eq!(cast_value(TypeRef::INT, Value::Char(65)), Value::Int(65));
    }

    #[test]
    fn non_numeric_values_pass_through() {
        assert_eq!(
            cast_value(TypeRef::INT, Value::string("x")),
            Value::string("x")
        );
        assert_eq!(cast_value(TypeRef::Object, Value::Int(1)), Value::Int(1));
        assert_eq!(cast_value(TypeRef::INT, Value::Unknown), Value::Unknown);
        assert_eq!(
            cast_value(TypeRef::BOOLEAN, Value::Bool(true)),
            Value::Bool(true)
        );
        assert_eq!(cast_value(TypeRef::BOOLEAN, Value::Int(1)), Value::Unknown);
    }
}
